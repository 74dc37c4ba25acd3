use crate::domain::identity::NationalId;
use crate::error::{CheckoutError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sex as recorded by the national registry.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Registry encoding: 1 = male, 2 = female, anything else is unknown.
    pub fn from_registry_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Sex::Male),
            2 => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Beneficiary covered under the holder's contract.
///
/// Only the count of these reaches the cart; the full records travel with
/// the enrollment submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependent {
    pub full_name: String,
    pub national_id: NationalId,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub relationship: String,
}

/// Person data returned by the national registry directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    pub full_name: String,
    pub mother_name: Option<String>,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub registry_id: Option<String>,
}

impl PersonRecord {
    /// Builds a record from raw registry fields, normalizing the DD/MM/YYYY
    /// birth date and the numeric sex code.
    ///
    /// Fails closed: a field that cannot be normalized rejects the whole
    /// record, never a partially populated one.
    pub fn from_registry(
        full_name: &str,
        mother_name: Option<&str>,
        birth_date: &str,
        sex_code: u8,
        registry_id: Option<&str>,
    ) -> Result<Self> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(CheckoutError::Lookup(
                "Registry record has no name".to_string(),
            ));
        }
        let sex = Sex::from_registry_code(sex_code)
            .ok_or_else(|| CheckoutError::Lookup(format!("Unknown sex code {sex_code}")))?;
        let birth_date = NaiveDate::parse_from_str(birth_date, "%d/%m/%Y").map_err(|_| {
            CheckoutError::Lookup(format!("Unparseable birth date {birth_date:?}"))
        })?;

        Ok(Self {
            full_name: full_name.to_string(),
            mother_name: mother_name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
            birth_date,
            sex,
            registry_id: registry_id.map(str::to_string),
        })
    }
}
