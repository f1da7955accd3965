//! Error types and exit codes for graphstep
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (graph rejected the input, negative cycle)

mod macros;

use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes for the graphstep binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph input or algorithm failure (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running algorithms
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("graph contains a negative-weight cycle (edge {from} -> {to} still relaxes)")]
    NegativeCycle { from: VertexId, to: VertexId },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("run interrupted before the algorithm finished")]
    Interrupted,
}

impl GraphError {
    /// Create an invalid-argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        GraphError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create the error reported when a vertex is not part of the graph
    pub fn unknown_vertex(id: VertexId) -> Self {
        GraphError::invalid_argument(format!("vertex {} is not part of the graph", id))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_) | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::InvalidArgument { .. } | GraphError::NegativeCycle { .. } => {
                ExitCode::Data
            }

            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::TomlSerialize(_)
            | GraphError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidArgument { .. } => "invalid_argument",
            GraphError::NegativeCycle { .. } => "negative_cycle",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) | GraphError::TomlSerialize(_) => "toml_error",
            GraphError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::NegativeCycle { from, to } = self {
            error_obj["edge"] = serde_json::json!({ "from": from, "to": to });
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graphstep operations
pub type Result<T> = std::result::Result<T, GraphError>;
