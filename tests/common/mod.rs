use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_requests_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["plan", "dependents", "cycle", "date"])?;

    for i in 0..rows {
        wtr.write_record([
            "quality",
            &(i % 4).to_string(),
            if i % 2 == 0 { "monthly" } else { "yearly" },
            "2025-09-20",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
