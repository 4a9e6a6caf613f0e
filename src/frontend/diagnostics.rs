//! Diagnostic collection
//!
//! The channel through which structural errors and resolution misses reach
//! the driving collaborator. Collection is filtered by the configured
//! [`DiagLevel`] and capped so a runaway driver cannot grow the collector
//! without bound; the number of dropped diagnostics is still tracked.

use std::fmt;

use crate::util::span::Position;

use super::config::{DiagLevel, FrontendConfig};

/// Severity of a reported diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single reported problem, with source position when one is known
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub position: Option<Position>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{}: {} at {}", self.severity, self.message, pos),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

fn kept(level: DiagLevel, severity: Severity) -> bool {
    match level {
        DiagLevel::None => false,
        DiagLevel::Errors => severity == Severity::Error,
        DiagLevel::Warnings | DiagLevel::All => true,
    }
}

/// Diagnostic collector
#[derive(Debug, Clone)]
pub struct Diagnostics {
    level: DiagLevel,
    max: usize,
    items: Vec<Diagnostic>,
    dropped: usize,
}

impl Diagnostics {
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            level: config.diag_level,
            max: config.max_diagnostics,
            items: Vec::new(),
            dropped: 0,
        }
    }

    /// Record an error
    pub fn error(&mut self, message: impl Into<String>, position: Option<Position>) {
        self.push(Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            position,
        });
    }

    /// Record a warning
    pub fn warning(&mut self, message: impl Into<String>, position: Option<Position>) {
        self.push(Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            position,
        });
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        if !kept(self.level, diagnostic.severity) {
            return;
        }
        if self.items.len() >= self.max {
            self.dropped += 1;
            return;
        }
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|d| d.severity == Severity::Error).count()
    }

    /// Diagnostics discarded after the cap was reached
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(&FrontendConfig::default())
    }
}
