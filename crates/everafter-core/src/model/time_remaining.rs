use serde::Serialize;

/// Countdown breakdown: days / hours / minutes / seconds until the
/// wedding. Derived, never stored — recomputed from absolute instants
/// on every tick.
///
/// Invariant: the four fields reconstruct the total exactly
/// (`days*86400 + hours*3600 + minutes*60 + seconds == total`), and
/// once the target has passed the value is pinned to all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Break a whole-second total into fields. Negative totals clamp
    /// to zero — the countdown never goes negative or wraps.
    pub fn from_total_seconds(total: i64) -> Self {
        if total <= 0 {
            return Self::ZERO;
        }
        let total = total.unsigned_abs();
        Self {
            days: total / 86_400,
            hours: (total / 3_600) % 24,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }

    /// Reconstruct the whole-second total from the fields.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_round_trip_to_total() {
        for total in [0, 1, 59, 60, 61, 3_599, 3_600, 86_399, 86_400, 86_401, 9_123_456] {
            let t = TimeRemaining::from_total_seconds(total);
            assert_eq!(
                i64::try_from(t.total_seconds()).unwrap(),
                total,
                "round trip failed for {total}"
            );
            assert!(t.hours < 24);
            assert!(t.minutes < 60);
            assert!(t.seconds < 60);
        }
    }

    #[test]
    fn negative_total_clamps_to_zero() {
        assert_eq!(TimeRemaining::from_total_seconds(-1), TimeRemaining::ZERO);
        assert_eq!(
            TimeRemaining::from_total_seconds(i64::MIN),
            TimeRemaining::ZERO
        );
        assert!(TimeRemaining::from_total_seconds(0).is_zero());
    }

    #[test]
    fn breakdown_is_exact() {
        // 2 days, 3 hours, 4 minutes, 5 seconds
        let total = 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5;
        let t = TimeRemaining::from_total_seconds(total);
        assert_eq!(t.days, 2);
        assert_eq!(t.hours, 3);
        assert_eq!(t.minutes, 4);
        assert_eq!(t.seconds, 5);
    }
}
