use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use visa_pathways::error::AppError;
use visa_pathways::scoring::{ApplicantProfile, PortugalVisa, Program};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Accepts the program labels used in score results (`crs`, `australia`, `portugal_d7`, ...).
pub(crate) fn parse_program(raw: &str) -> Result<Program, String> {
    let label = raw.trim().to_ascii_lowercase();
    match label.as_str() {
        "crs" | "canada" => Ok(Program::Crs),
        "australia" => Ok(Program::Australia),
        _ => PortugalVisa::all()
            .into_iter()
            .find(|visa| visa.label() == label)
            .map(Program::Portugal)
            .ok_or_else(|| {
                let known: Vec<&str> = PortugalVisa::all()
                    .into_iter()
                    .map(PortugalVisa::label)
                    .collect();
                format!(
                    "unknown program '{raw}' (expected crs, australia or one of {})",
                    known.join(", ")
                )
            }),
    }
}

pub(crate) fn load_profile(path: &Path) -> Result<ApplicantProfile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::InvalidInput(format!("profile {} is not valid JSON: {err}", path.display()))
    })
}
