//! Recruitment window: the application form is only offered before a cutoff.

use chrono::{DateTime, TimeZone, Utc};
use std::time::Duration;

/// How often an open page re-checks the window.
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// 2025-09-06 00:00 KST.
pub fn default_closes_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 5, 15, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecruitmentWindow {
    closes_at: DateTime<Utc>,
}

impl Default for RecruitmentWindow {
    fn default() -> Self {
        Self::closing_at(default_closes_at())
    }
}

impl RecruitmentWindow {
    pub fn closing_at(closes_at: DateTime<Utc>) -> Self {
        Self { closes_at }
    }

    pub fn closes_at(&self) -> DateTime<Utc> {
        self.closes_at
    }

    /// Open strictly before the cutoff; closed at and after it.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        now < self.closes_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[test]
    fn closes_exactly_at_cutoff() {
        let window = RecruitmentWindow::default();
        let cutoff = window.closes_at();

        assert!(window.is_open(cutoff - ChronoDuration::seconds(1)));
        assert!(!window.is_open(cutoff));
        assert!(!window.is_open(cutoff + ChronoDuration::days(30)));
    }

    #[test]
    fn default_cutoff_is_midnight_in_seoul() {
        assert_eq!(default_closes_at().to_rfc3339(), "2025-09-05T15:00:00+00:00");
    }

    #[test]
    fn injected_cutoff_is_honoured() {
        let cutoff = Utc.with_ymd_and_hms(2030, 3, 1, 0, 0, 0).unwrap();
        let window = RecruitmentWindow::closing_at(cutoff);
        assert!(window.is_open(Utc.with_ymd_and_hms(2029, 12, 31, 0, 0, 0).unwrap()));
    }
}
