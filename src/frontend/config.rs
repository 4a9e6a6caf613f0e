//! Front-end configuration

use serde::{Deserialize, Serialize};

/// Diagnostic verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum DiagLevel {
    /// Keep nothing
    None,
    /// Keep errors only
    Errors,
    /// Keep errors and warnings
    Warnings,
    /// Keep everything
    #[default]
    All,
}

impl std::fmt::Display for DiagLevel {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            DiagLevel::None => write!(f, "none"),
            DiagLevel::Errors => write!(f, "errors"),
            DiagLevel::Warnings => write!(f, "warnings"),
            DiagLevel::All => write!(f, "all"),
        }
    }
}

/// Front-end configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Which diagnostics the collector keeps
    pub diag_level: DiagLevel,
    /// The collector stops recording past this many diagnostics
    pub max_diagnostics: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            diag_level: DiagLevel::default(),
            max_diagnostics: 100,
        }
    }
}
