//! Market data analytics: technical indicators, heuristic scoring and the
//! aggregated JSON report consumed by the presentation layer.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{PipelineError, Result};
