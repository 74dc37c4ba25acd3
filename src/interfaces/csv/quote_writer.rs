use crate::domain::quote::FinancialQuote;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// One row of the batch-quoting output.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct QuoteRow {
    pub plan: String,
    pub people: u32,
    pub base_fee: Decimal,
    pub enrollment_fee: Decimal,
    pub pro_rata: Decimal,
    pub monthly_total: Decimal,
    pub annual_total: Decimal,
    pub total_due_now: Decimal,
}

impl QuoteRow {
    pub fn new(plan: impl Into<String>, quote: &FinancialQuote) -> Self {
        Self {
            plan: plan.into(),
            people: quote.people_count,
            base_fee: quote.base_fee,
            enrollment_fee: quote.enrollment_fee,
            pro_rata: quote.pro_rata_amount,
            monthly_total: quote.monthly_total,
            annual_total: quote.annual_total,
            total_due_now: quote.total_due_now,
        }
    }
}

/// Writes quote rows as CSV to any `Write` sink.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_rows(&mut self, rows: impl IntoIterator<Item = QuoteRow>) -> Result<()> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
