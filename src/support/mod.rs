pub mod errors;
pub mod logging;

pub use errors::{AppError, AppResult};
pub use logging::init_tracing;
