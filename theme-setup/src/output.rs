//! Console output for the setup run.
//!
//! Product output goes to a single writer (stdout in the binary) with fixed
//! colors per category. Diagnostic logging is separate (see `logging`).

use std::cell::RefCell;
use std::io::{self, Write};

use colored::{Color, Colorize};

use crate::error::SetupError;

/// Line-oriented writer for progress, warning and error messages.
pub struct Console {
    out: RefCell<Box<dyn Write>>,
    color: bool,
}

impl Console {
    /// Colored output on stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }

    pub fn new(writer: impl Write + 'static, color: bool) -> Self {
        Self {
            out: RefCell::new(Box::new(writer)),
            color,
        }
    }

    fn line(&self, message: &str, color: Color) {
        let text = if self.color {
            message.color(color).to_string()
        } else {
            message.to_string()
        };
        let mut out = self.out.borrow_mut();
        // Same policy as println!: a closed stdout is not a setup failure.
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }

    pub fn info(&self, message: &str) {
        self.line(message, Color::Blue);
    }

    pub fn warn(&self, message: &str) {
        self.line(message, Color::Yellow);
    }

    pub fn success(&self, message: &str) {
        self.line(message, Color::Green);
    }

    /// Secondary detail, in gray.
    pub fn detail(&self, message: &str) {
        self.line(message, Color::BrightBlack);
    }

    pub fn error(&self, message: &str) {
        self.line(&format!("❌ {message}"), Color::Red);
    }

    /// Error diagnostics are printed in red rather than gray.
    pub fn error_detail(&self, message: &str) {
        self.line(message, Color::Red);
    }

    /// Print a fatal error: the headline, then the underlying diagnostic.
    pub fn report(&self, err: &SetupError) {
        self.error(&err.headline());
        if let Some(detail_line) = err.detail() {
            if err.detail_is_secondary() {
                self.detail(&detail_line);
            } else {
                self.error_detail(&detail_line);
            }
        }
    }
}
