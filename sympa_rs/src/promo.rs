//! Countdown behind the promotional counter.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Compact label, e.g. `"12j 04h 05m 09s"`.
    pub fn label(&self) -> String {
        format!(
            "{}j {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoState {
    Running(Countdown),
    Expired,
}

/// Time left until `ends_at`, truncated to whole seconds.
pub fn countdown(now: DateTime<Utc>, ends_at: DateTime<Utc>) -> PromoState {
    let remaining = (ends_at - now).num_seconds();
    if remaining <= 0 {
        return PromoState::Expired;
    }
    PromoState::Running(Countdown {
        days: remaining / 86_400,
        hours: remaining % 86_400 / 3_600,
        minutes: remaining % 3_600 / 60,
        seconds: remaining % 60,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn deadline() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap()
    }

    #[test]
    fn splits_remaining_time() {
        let now = deadline()
            - Duration::days(12)
            - Duration::hours(4)
            - Duration::minutes(5)
            - Duration::seconds(9);
        let PromoState::Running(left) = countdown(now, deadline()) else {
            panic!("offer should still be running");
        };
        assert_eq!(left.label(), "12j 04h 05m 09s");
    }

    #[test]
    fn sub_second_remainder_is_dropped() {
        let now = deadline() - Duration::milliseconds(1_500);
        assert_eq!(
            countdown(now, deadline()),
            PromoState::Running(Countdown {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1
            })
        );
    }

    #[test]
    fn expired_at_and_after_deadline() {
        assert_eq!(countdown(deadline(), deadline()), PromoState::Expired);
        assert_eq!(
            countdown(deadline() + Duration::days(3), deadline()),
            PromoState::Expired
        );
    }
}
