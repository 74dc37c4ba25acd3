use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dental_checkout::domain::catalog::PlanCatalog;
use dental_checkout::domain::plan::BillingCycle;
use dental_checkout::domain::quote::compute_quote;
use dental_checkout::interfaces::csv::quote_reader::QuoteRequestReader;
use dental_checkout::interfaces::csv::quote_writer::{QuoteRow, QuoteWriter};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Quoting tools for the dental plan checkout", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the plan catalog
    Plans,
    /// Price a single cart selection
    Quote {
        /// Plan id (e.g. quality)
        #[arg(long)]
        plan: String,

        /// Number of dependents besides the holder
        #[arg(long, default_value_t = 0)]
        dependents: u32,

        /// Billing cycle: monthly or yearly
        #[arg(long, default_value = "monthly")]
        cycle: BillingCycle,

        /// Quote date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Emit the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// Price a CSV of quote requests, writing quote rows to stdout
    Batch {
        /// Input requests CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let catalog = PlanCatalog::builtin();

    match cli.command {
        Commands::Plans => {
            for plan in catalog.plans() {
                println!(
                    "{:<12} {:<14} R$ {:>5}/month  {}",
                    plan.id,
                    plan.name,
                    plan.base_price(),
                    plan.description
                );
            }
        }
        Commands::Quote {
            plan,
            dependents,
            cycle,
            date,
            json,
        } => {
            let as_of = date.unwrap_or_else(|| Local::now().date_naive());
            let quote = compute_quote(&catalog, &plan, dependents, cycle, as_of);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&quote).into_diagnostic()?
                );
            } else {
                println!(
                    "Plan {plan} ({} people, {cycle} cycle, quoted {as_of})",
                    quote.people_count
                );
                println!("  Monthly fee per person   R$ {:>10}", quote.base_fee);
                println!("  Enrollment per person    R$ {:>10}", quote.enrollment_fee);
                println!("  Pro-rata this month      R$ {:>10}", quote.pro_rata_amount);
                println!("  Recurring monthly total  R$ {:>10}", quote.monthly_total);
                println!("  First-year total         R$ {:>10}", quote.annual_total);
                println!("  Total due now            R$ {:>10}", quote.total_due_now);
            }
        }
        Commands::Batch { input } => {
            let file = File::open(&input).into_diagnostic()?;
            let reader = QuoteRequestReader::new(file);

            let mut rows = Vec::new();
            for request in reader.requests() {
                match request {
                    Ok(request) => {
                        let quote = compute_quote(
                            &catalog,
                            &request.plan,
                            request.dependents,
                            request.cycle,
                            request.date,
                        );
                        rows.push(QuoteRow::new(request.plan, &quote));
                    }
                    Err(e) => {
                        eprintln!("Error reading quote request: {}", e);
                    }
                }
            }

            let stdout = io::stdout();
            let mut writer = QuoteWriter::new(stdout.lock());
            writer.write_rows(rows).into_diagnostic()?;
        }
    }

    Ok(())
}
