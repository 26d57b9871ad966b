// This file implements the application's console output.
// It provides macros for the status levels the installer prints (INFO, ACTION, SUCCESS, WARN, ERROR)
// with colored terminal output, and routes DEBUG messages through `tracing`.

use tracing::Level; // Maximum level handed to the subscriber.

/// Provides convenient logging macros.
/// `#[macro_export]` makes these macros globally available within the crate.
/// Callers need `colored::Colorize` in scope.

// `log_info!` for general progress and informational messages (blue).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => (eprintln!("{} {}", "[INFO]".bright_blue(), format!($($arg)*)));
}

// `log_action!` announces an operation that is about to change the system (yellow).
#[macro_export]
macro_rules! log_action {
    ($($arg:tt)*) => (eprintln!("{} {}", "[ACTION]".bright_yellow(), format!($($arg)*)));
}

// `log_success!` for completed steps (green).
#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => (eprintln!("{} {}", "[OK]".bright_green(), format!($($arg)*)));
}

// `log_warn!` for non-critical issues or noteworthy conditions.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => (eprintln!("{} {}", "[WARN]".yellow(), format!($($arg)*)));
}

// `log_error!` for failures that end the run (red).
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => (eprintln!("{} {}", "[ERROR]".bright_red(), format!($($arg)*)));
}

// `log_debug!` for detailed internal tracing.
// Messages only appear when the subscriber installed by `init` accepts DEBUG.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => (tracing::debug!("{}", format!($($arg)*)));
}

/// Initializes the logger, setting the global debug mode.
/// This function should be called once at application startup.
///
/// # Arguments
/// * `debug`: If `true`, debug messages are printed to stderr; otherwise they are dropped.
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    // `try_init` so a second call (tests, embedding) is a no-op instead of a panic.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    log_debug!("Logger initialized in DEBUG mode");
}
