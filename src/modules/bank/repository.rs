use serde::Deserialize;
use std::{fmt, io, path::Path};

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Mfo {
    Text(String),
    Code(i64),
}

impl fmt::Display for Mfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mfo::Text(text) => f.write_str(text),
            Mfo::Code(code) => write!(f, "{}", code),
        }
    }
}

/// One entry of the bank directory file. Every field is optional; anything
/// else in the object is ignored.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct BankRecord {
    #[serde(rename = "NAME", default)]
    pub name: Option<String>,
    #[serde(rename = "SHORTNAME", default)]
    pub short_name: Option<String>,
    #[serde(rename = "MFO", default)]
    pub mfo: Option<Mfo>,
    #[serde(rename = "COD_STATE", default)]
    pub state: Option<serde_json::Value>,
}

impl BankRecord {
    /// Integral value of `COD_STATE`, if it is a JSON number with no
    /// fractional part.
    pub fn state_code(&self) -> Option<i64> {
        let number = match self.state.as_ref()? {
            serde_json::Value::Number(number) => number,
            _ => return None,
        };

        number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.fract() == 0.0)
                .map(|value| value as i64)
        })
    }

    pub fn is_normal(&self) -> bool {
        self.state_code() == Some(1)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot find input file")]
    NotFound,
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
    #[error("failed to read input file: {0}")]
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound,
            _ => Error::Io(err),
        }
    }
}

pub async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

pub async fn find_many(path: &Path) -> Result<Vec<BankRecord>, Error> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
        tracing::error!(
            "Error occurred while reading input file {}: {}",
            path.display(),
            err
        );
        Error::from(err)
    })?;

    let records = serde_json::from_str::<Vec<BankRecord>>(&raw).map_err(|err| {
        tracing::error!("Error occurred while parsing input file: {}", err);
        Error::from(err)
    })?;

    tracing::debug!("Read {} bank records", records.len());

    Ok(records)
}
