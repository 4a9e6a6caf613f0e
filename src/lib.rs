//! Alder front end
//!
//! The front half of a small source-to-source compiler: a character-level
//! tokenizer, an arena-owned syntax tree with a two-phase attach protocol,
//! and lexical symbol resolution. Grammar-driven parsing and target-text
//! emission live outside this crate and drive these pieces through the
//! [`frontend`] APIs.
//!
//! # Example
//!
//! ```
//! use alder::frontend::lexer::tokenize;
//!
//! let tokens = tokenize("A = 12 + f1");
//! assert_eq!(tokens.len(), 6);
//! ```

#![doc(html_root_url = "https://docs.rs/alder")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Alder";
