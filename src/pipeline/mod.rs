//! Input validation, orchestration, and observation.
//!
//! ## Submodules
//!
//! - [`error_code`] — stable machine-readable diagnostic codes
//! - [`errors`] — structured validation errors (code, path, message, hint)
//! - [`validation`] — rule-based validation engine and report
//! - [`observer`] — per-stage timing and item-count hooks
//! - [`runner`] — the [`Pipeline`](runner::Pipeline) orchestrator

pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod validation;

pub use error_code::ErrorCode;
pub use errors::InputError;
pub use observer::{NoopObserver, PipelineObserver, StageReport};
pub use runner::{generate_report, Pipeline, StandardPipeline};
pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};
