// Handler modules
pub mod validate;

// Re-export all handler functions
pub use validate::{Input, ValidationRun, collect_inputs, handle_validate, run_validation};
