use super::repository::{self, BankRecord};
use crate::utils::xml;
use serde::Serialize;
use std::path::Path;

pub const UNKNOWN_BANK_NAME: &str = "unknown bank";
pub const DEFAULT_MFO_CODE: &str = "000000";
pub const DEFAULT_STATE_CODE: i64 = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub normal: bool,
    pub mfo: bool,
}

/// Projected bank as it appears in the response. Fields serialize in
/// declaration order and absent ones are left out.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Bank {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfo_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<i64>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mfo_code: None,
            state_code: None,
        }
    }

    pub fn with_mfo_code(self, mfo_code: impl Into<String>) -> Self {
        Self {
            mfo_code: Some(mfo_code.into()),
            ..self
        }
    }

    pub fn with_state_code(self, state_code: i64) -> Self {
        Self {
            state_code: Some(state_code),
            ..self
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename = "banks")]
pub struct Banks {
    pub bank: Vec<Bank>,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] repository::Error),
    #[error("failed to render XML: {0}")]
    Serialize(#[from] quick_xml::DeError),
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn to_bank(record: &BankRecord, filters: &Filters) -> Bank {
    let name = non_empty(record.name.as_deref())
        .or_else(|| non_empty(record.short_name.as_deref()))
        .unwrap_or(UNKNOWN_BANK_NAME);

    let mut bank = Bank::new(name);

    if filters.mfo {
        let mfo_code = record
            .mfo
            .as_ref()
            .map(|mfo| mfo.to_string())
            .filter(|mfo| !mfo.is_empty())
            .unwrap_or_else(|| DEFAULT_MFO_CODE.to_string());
        bank = bank.with_mfo_code(mfo_code);
    }

    if filters.normal {
        bank = bank.with_state_code(record.state_code().unwrap_or(DEFAULT_STATE_CODE));
    }

    bank
}

pub fn project(records: &[BankRecord], filters: &Filters) -> Vec<Bank> {
    records
        .iter()
        .filter(|record| !filters.normal || record.is_normal())
        .map(|record| to_bank(record, filters))
        .collect()
}

pub async fn render_banks(path: &Path, filters: Filters) -> Result<String, Error> {
    let records = repository::find_many(path).await?;

    let banks = Banks {
        bank: project(&records, &filters),
    };
    tracing::debug!("Projected {} of {} banks", banks.bank.len(), records.len());

    let xml = xml::to_pretty_string(&banks).map_err(|err| {
        tracing::error!("Error occurred while rendering banks as XML: {}", err);
        Error::from(err)
    })?;

    Ok(xml)
}
