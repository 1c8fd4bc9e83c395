//! Analysis core and orchestration services.
//!
//! The four pure components (area, AWD detection, carbon estimation,
//! health fusion) are independently callable, perform no I/O, and hold no
//! state between invocations. The `report` module assembles their inputs
//! from the repository and the injected collaborators.

pub mod area;
pub mod awd;
pub mod carbon;
pub mod error;
pub mod fusion;
pub mod report;

pub use area::polygon_area_hectares;
pub use awd::detect_awd;
pub use carbon::calculate_carbon_metrics;
pub use error::{AnalysisError, AnalysisResult};
pub use fusion::compute_health_score;
pub use report::{build_field_report, ReportError, ReportResult};
