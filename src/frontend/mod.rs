//! Front-end pipeline
//!
//! Tokenizer, syntax tree, and symbol resolution, plus the configuration
//! and diagnostics that tie them together. Grammar-driven parsing and
//! target-text emission live outside this crate and drive these pieces
//! through [`Frontend`] or the module APIs directly.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;

use thiserror::Error;
use tracing::debug;

use crate::util::span::Position;

use ast::{Ast, NodeId, TreeError};
use config::FrontendConfig;
use diagnostics::Diagnostics;
use lexer::tokens::Token;

/// Front-end context
///
/// Bundles the configuration with a diagnostic collector and wraps the core
/// operations so every failure is recorded once, with source position where
/// one is known. A failure is isolated to the node it concerns; the context
/// and the tree stay usable.
#[derive(Debug, Default)]
pub struct Frontend {
    config: FrontendConfig,
    diagnostics: Diagnostics,
}

impl Frontend {
    /// Create a context with the default configuration
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with an explicit configuration
    pub fn with_config(config: FrontendConfig) -> Self {
        Self {
            diagnostics: Diagnostics::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Tokenize source code
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        debug!("tokenizing {} bytes", source.len());
        let tokens = lexer::tokenize(source);
        debug!("tokenized into {} tokens", tokens.len());
        tokens
    }

    /// Confirm a node, recording a structural-error diagnostic on failure
    pub fn confirm(&mut self, ast: &mut Ast, id: NodeId) -> Result<(), FrontendError> {
        match ast.confirm(id) {
            Ok(()) => Ok(()),
            Err(err) => {
                let position = node_position(ast, id);
                self.diagnostics.error(err.to_string(), position);
                Err(err.into())
            }
        }
    }

    /// Resolve a name from a node, recording an undefined-identifier
    /// diagnostic on a miss
    pub fn resolve(
        &mut self,
        ast: &Ast,
        from: NodeId,
        name: &str,
    ) -> Result<NodeId, FrontendError> {
        match ast.find_symbol(from, name) {
            Some(found) => Ok(found),
            None => {
                let position = node_position(ast, from);
                self.diagnostics
                    .error(format!("undefined symbol `{}`", name), position);
                Err(FrontendError::Undefined {
                    name: name.to_string(),
                    position,
                })
            }
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Hand the collected diagnostics to the driver, leaving a fresh
    /// collector behind
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::replace(&mut self.diagnostics, Diagnostics::new(&self.config))
    }
}

fn node_position(ast: &Ast, id: NodeId) -> Option<Position> {
    ast.node(id).line_no().map(|line| Position::new(line, 0))
}

/// Front-end errors
#[derive(Debug, Error)]
pub enum FrontendError {
    /// A node's intended parent holds neither child shape
    #[error(transparent)]
    Structure(#[from] TreeError),

    /// Symbol resolution failed and the caller asked for a hard answer
    #[error("undefined symbol `{name}`")]
    Undefined {
        name: String,
        position: Option<Position>,
    },
}
