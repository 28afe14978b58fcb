use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::info;

use super::{DrawHistory, HistoricalDrawRecord};

#[derive(Debug)]
pub enum DrawImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidDate { line: u64, value: String },
}

impl std::fmt::Display for DrawImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawImportError::Io(err) => write!(f, "failed to read draw history: {}", err),
            DrawImportError::Csv(err) => write!(f, "invalid draw history CSV data: {}", err),
            DrawImportError::InvalidDate { line, value } => {
                write!(f, "line {}: '{}' is not an ISO-8601 date", line, value)
            }
        }
    }
}

impl std::error::Error for DrawImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DrawImportError::Io(err) => Some(err),
            DrawImportError::Csv(err) => Some(err),
            DrawImportError::InvalidDate { .. } => None,
        }
    }
}

impl From<std::io::Error> for DrawImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DrawImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a `date,program,cutoff,invitations` export into a [`DrawHistory`].
pub struct DrawImporter;

impl DrawImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<DrawHistory, DrawImportError> {
        let file = std::fs::File::open(path.as_ref())?;
        let history = Self::from_reader(file)?;
        info!(
            path = %path.as_ref().display(),
            records = history.len(),
            "draw history imported"
        );
        Ok(history)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<DrawHistory, DrawImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<DrawRow>() {
            let row = row?;
            let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|_| {
                DrawImportError::InvalidDate {
                    line: records.len() as u64 + 2,
                    value: row.date.clone(),
                }
            })?;
            records.push(HistoricalDrawRecord {
                date,
                program_label: row.program,
                cutoff_score: row.cutoff,
                invitations_issued: row.invitations.unwrap_or(0),
            });
        }

        Ok(DrawHistory::new(records))
    }
}

#[derive(Debug, Deserialize)]
struct DrawRow {
    #[serde(alias = "Date")]
    date: String,
    #[serde(alias = "Program", alias = "program_label", alias = "category")]
    program: String,
    #[serde(alias = "Cutoff", alias = "cutoff_score", alias = "crs_cutoff")]
    cutoff: u32,
    #[serde(
        alias = "Invitations",
        alias = "invitations_issued",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    invitations: Option<u32>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .replace(',', "")
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
