//! Logging and observability
//!
//! Structured logging through `tracing`, with a console layer and an
//! optional JSON rolling file layer.
//!
//! # Example
//!
//! ```no_run
//! use yolo_export::logging::init_logging;
//! use yolo_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(model = "yolo26s", "Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a framework step
///
/// # Example
///
/// ```no_run
/// use yolo_export::log_step_start;
///
/// log_step_start!("export", "yolo26s");
/// ```
#[macro_export]
macro_rules! log_step_start {
    ($step:expr, $model:expr) => {
        tracing::info!(step = $step, model = %$model, "Starting step");
    };
}

/// Log the completion of a framework step with its duration
///
/// # Example
///
/// ```no_run
/// use yolo_export::log_step_complete;
/// use std::time::Duration;
///
/// log_step_complete!("load", "yolo26s", Duration::from_secs(3));
/// ```
#[macro_export]
macro_rules! log_step_complete {
    ($step:expr, $model:expr, $duration:expr) => {
        tracing::info!(
            step = $step,
            model = %$model,
            duration_ms = $duration.as_millis() as u64,
            "Step completed"
        );
    };
}
