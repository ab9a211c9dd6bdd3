//! Time related utils.

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create a new DateTime from the current system time.
pub fn now() -> DateTime {
    chrono::Utc::now()
}
