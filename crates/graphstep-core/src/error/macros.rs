//! Error macros for graphstep

/// Macro for returning an invalid argument error
#[macro_export]
macro_rules! bail_invalid {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphError::invalid_argument(format!($($arg)*)))
    };
}

/// Macro for returning a usage error
#[macro_export]
macro_rules! bail_usage {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphError::UsageError(format!($($arg)*)))
    };
}
