//! Logging shorthands used across the workspace.
//!
//! `success!` logs under its own target so the terminal formatter can give it
//! a distinct prefix from ordinary `info!` lines.

/// Target used for positive confirmations ("record saved", "5 students loaded").
pub const SUCCESS_TARGET: &str = "roster::success";

/// Target used for raw terminal output that must be written without a prefix.
pub const PRINT_TARGET: &str = "roster::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::macros::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
