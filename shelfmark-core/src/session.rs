//! Reading session stopwatch
//!
//! Pure timing and page-credit logic; the interactive surface lives in the
//! CLI.

use std::time::{Duration, Instant};

/// A pausable stopwatch for a single reading session
pub struct ReadingSession {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl ReadingSession {
    /// Create a session with the clock stopped
    pub fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: None,
        }
    }

    /// Create a session with the clock already running
    pub fn start() -> Self {
        let mut session = Self::new();
        session.resume();
        session
    }

    /// Start or restart the clock; no-op if already running
    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Stop the clock, keeping the elapsed time; no-op if already paused
    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Total time the clock has been running
    pub fn elapsed(&self) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + since.elapsed(),
            None => self.accumulated,
        }
    }

    /// Elapsed time as `mm:ss`
    pub fn format_elapsed(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for ReadingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Pages to credit against a book at the end of a session.
///
/// No credit unless the reported count is positive; otherwise the credit is
/// capped at the pages remaining (`page_count - current_page`, with a
/// missing page count treated as 0). When the tracked page is already at or
/// past the total the remaining count is non-positive and the credit goes
/// negative, pulling the page back toward the total.
pub fn pages_to_credit(pages_read: i64, current_page: i64, page_count: Option<i64>) -> i64 {
    if pages_read <= 0 {
        return 0;
    }
    pages_read.min(page_count.unwrap_or(0) - current_page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut session = ReadingSession::start();
        sleep(Duration::from_millis(20));
        session.pause();
        let frozen = session.elapsed();
        sleep(Duration::from_millis(20));
        assert_eq!(session.elapsed(), frozen);

        session.resume();
        sleep(Duration::from_millis(5));
        assert!(session.elapsed() > frozen);
    }

    #[test]
    fn test_format_elapsed() {
        let session = ReadingSession::new();
        assert_eq!(session.format_elapsed(), "00:00");

        let mut session = ReadingSession::new();
        session.accumulated = Duration::from_secs(125);
        assert_eq!(session.format_elapsed(), "02:05");
    }

    #[test]
    fn test_credit_caps_at_remaining_pages() {
        assert_eq!(pages_to_credit(30, 90, Some(100)), 10);
        assert_eq!(pages_to_credit(5, 90, Some(100)), 5);
    }

    #[test]
    fn test_no_credit_for_non_positive_counts() {
        assert_eq!(pages_to_credit(0, 10, Some(100)), 0);
        assert_eq!(pages_to_credit(-4, 10, Some(100)), 0);
    }

    #[test]
    fn test_credit_with_missing_page_count() {
        // total defaults to 0, so remaining is -current
        assert_eq!(pages_to_credit(10, 5, None), -5);
        assert_eq!(pages_to_credit(10, 0, None), 0);
    }

    #[test]
    fn test_credit_past_the_end_is_negative() {
        assert_eq!(pages_to_credit(10, 120, Some(100)), -20);
    }
}
