use crate::styles;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

static LOG_LEVEL: OnceLock<LogLevel> = OnceLock::new();

pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    LOG_LEVEL.set(level).ok(); // Ignore errors if already set
}

pub fn get_log_level() -> LogLevel {
    *LOG_LEVEL.get().unwrap_or(&LogLevel::Info)
}

/// Every level writes to stderr: stdout is reserved for the single
/// cd-able path line the shell wrapper reads.
pub fn log(level: LogLevel, message: &str) {
    if level > get_log_level() {
        return;
    }
    let styled = styles::colors_enabled_stderr();
    match level {
        LogLevel::Error if styled => {
            eprintln!("{}Error:{} {}", styles::RED, styles::RESET, message)
        }
        LogLevel::Error => eprintln!("Error: {}", message),
        LogLevel::Warning if styled => {
            eprintln!("{}Warning:{} {}", styles::YELLOW, styles::RESET, message)
        }
        LogLevel::Warning => eprintln!("Warning: {}", message),
        LogLevel::Info => eprintln!("{}", message),
        LogLevel::Debug => eprintln!("Debug: {}", message),
    }
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Error, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Warning, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log($crate::logging::LogLevel::Debug, &format!($($arg)*))
    };
}
