//! Indentation-tracking text output
//!
//! Used by the tree renderer and available to code-generation drivers that
//! emit indented target text.

use std::fmt::{self, Display, Write};

/// Writes text while indenting each fresh line by a counter, two spaces per
/// level. A line is padded once, when the first piece of it is written.
pub struct IndentPrinter<'a, W: Write> {
    out: &'a mut W,
    /// Current indentation depth
    pub indentation: usize,
    line_clean: bool,
}

impl<'a, W: Write> IndentPrinter<'a, W> {
    /// Create a printer over an output sink
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            indentation: 0,
            line_clean: true,
        }
    }

    fn pad(&mut self) -> fmt::Result {
        if self.line_clean {
            for _ in 0..self.indentation {
                self.out.write_str("  ")?;
            }
            self.line_clean = false;
        }
        Ok(())
    }

    /// Write without a trailing newline
    pub fn print(&mut self, what: impl Display) -> fmt::Result {
        self.pad()?;
        write!(self.out, "{}", what)
    }

    /// Write a full line
    pub fn println(&mut self, what: impl Display) -> fmt::Result {
        self.pad()?;
        writeln!(self.out, "{}", what)?;
        self.line_clean = true;
        Ok(())
    }

    /// Increase the indentation depth by one level
    pub fn indent(&mut self) {
        self.indentation += 1;
    }

    /// Decrease the indentation depth by one level
    pub fn dedent(&mut self) {
        self.indentation = self.indentation.saturating_sub(1);
    }
}
