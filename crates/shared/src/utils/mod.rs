mod gracefullshutdown;
mod logs;
mod metrics;
mod validation;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status};
pub use self::validation::{format_validation_errors, validate_finite, validate_not_blank};
