//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret when formatting it for logs or `Debug` output.
///
/// Long secrets keep their first and last three characters so that two
/// different redacted values can still be told apart; anything shorter is
/// masked entirely.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or(""))
    }
}

impl<'a> Debug for Redact<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.len() {
            0 => f.write_str("<empty>"),
            n if n < 10 => f.write_str("..."),
            n => write!(f, "{}...{}", &self.0[..3], &self.0[n - 3..]),
        }
    }
}
