//! Console output for lookup results.

use crate::types::{LookupResult, PwnCheckError};
use colored::{ColoredString, Colorize};
use serde_json::json;
use std::error::Error;

/// Console output handler, colored unless plain.
pub struct ConsoleOutput {
    plain: bool,
    json_mode: bool,
    show_exceptions: bool,
}

impl ConsoleOutput {
    /// Create a new console output handler.
    pub fn new(plain: bool, json_mode: bool, show_exceptions: bool) -> Self {
        Self {
            plain,
            json_mode,
            show_exceptions,
        }
    }

    /// Print a completed lookup.
    pub fn print_result(&self, email: &str, result: &LookupResult) {
        println!("{}", self.render_result(email, result));
    }

    /// Print a failed lookup.
    pub fn print_error(&self, email: &str, error: &PwnCheckError) {
        println!("{}", self.render_error(email, error));
    }

    pub fn render_result(&self, email: &str, result: &LookupResult) -> String {
        if self.json_mode {
            return json!({ "email": email, "result": result }).to_string();
        }

        match result {
            LookupResult::NotBreached => {
                format!("{} {}", self.format_email(email), self.format_ok("[OK]"))
            }
            LookupResult::Breached { sites } => format!(
                "{} {} {}",
                self.format_email(email),
                self.format_pwned("[PWNED]"),
                sites.join(", ")
            ),
        }
    }

    pub fn render_error(&self, email: &str, error: &PwnCheckError) -> String {
        if self.json_mode {
            let mut value = json!({ "email": email, "error": error.to_string() });
            if self.show_exceptions {
                value["causes"] = json!(error_chain(error));
            }
            return value.to_string();
        }

        let mut lines = vec![format!(
            "{} {} {}",
            self.format_email(email),
            self.format_error("[ERROR]"),
            error
        )];

        if self.show_exceptions {
            lines.push(format!("{:?}", error));
            for cause in error_chain(error) {
                lines.push(format!("  caused by: {}", cause));
            }
        }

        lines.join("\n")
    }

    fn format_email(&self, email: &str) -> ColoredString {
        self.style(email, |s| s.cyan())
    }

    fn format_ok(&self, text: &str) -> ColoredString {
        self.style(text, |s| s.green())
    }

    fn format_pwned(&self, text: &str) -> ColoredString {
        self.style(text, |s| s.yellow().bold())
    }

    fn format_error(&self, text: &str) -> ColoredString {
        self.style(text, |s| s.red())
    }

    fn style(&self, text: &str, paint: impl Fn(&str) -> ColoredString) -> ColoredString {
        if self.plain {
            text.normal()
        } else {
            paint(text)
        }
    }
}

/// Messages of every source below `error`, outermost first.
fn error_chain(error: &dyn Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new(false, false, false)
    }
}
