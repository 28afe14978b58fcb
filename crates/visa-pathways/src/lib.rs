//! Migration points scoring, what-if planning and admission-round forecasting.

pub mod config;
pub mod draws;
pub mod error;
pub mod router;
pub mod scoring;
pub mod service;
pub mod telemetry;
pub mod whatif;

pub use router::pathway_router;
pub use service::{PathwayService, WhatIfReport};
