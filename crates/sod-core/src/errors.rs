//! Structured error types shared across the simpliciality crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`SodError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for simpliciality analysis.
///
/// Structurally undefined results (no qualifying edges, no maximal edges,
/// too few correlation pairs) are not errors: they surface as `f64::NAN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SodError {
    /// Hypergraph structural errors (unknown ids, empty or invalid edges).
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Invalid caller input such as non-positive sizes.
    #[error("invalid input: {0}")]
    Input(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem errors raised by front ends.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl SodError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SodError::Graph(info)
            | SodError::Input(info)
            | SodError::Serde(info)
            | SodError::Io(info) => info,
        }
    }

    /// Shorthand for a [`SodError::Graph`] error.
    pub fn graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        SodError::Graph(ErrorInfo::new(code, message))
    }

    /// Shorthand for a [`SodError::Input`] error.
    pub fn input(code: impl Into<String>, message: impl Into<String>) -> Self {
        SodError::Input(ErrorInfo::new(code, message))
    }

    /// Adds a context entry to the payload regardless of the family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            SodError::Graph(info) => SodError::Graph(info.with_context(key, value)),
            SodError::Input(info) => SodError::Input(info.with_context(key, value)),
            SodError::Serde(info) => SodError::Serde(info.with_context(key, value)),
            SodError::Io(info) => SodError::Io(info.with_context(key, value)),
        }
    }

    /// Attaches a remediation hint regardless of the family.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        match self {
            SodError::Graph(info) => SodError::Graph(info.with_hint(hint)),
            SodError::Input(info) => SodError::Input(info.with_hint(hint)),
            SodError::Serde(info) => SodError::Serde(info.with_hint(hint)),
            SodError::Io(info) => SodError::Io(info.with_hint(hint)),
        }
    }
}
