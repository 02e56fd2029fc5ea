pub mod pipeline;
pub mod validator;

pub use pipeline::{run_day_pipeline, DayPipeline, DayResult};
pub use validator::{validate_events, SchemaValidator, ValidationReport, ValidationStats};
