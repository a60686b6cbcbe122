use chrono::{DateTime, Utc};

/// Recency factor: `0.5 ^ (ageDays / halfLife)`.
///
/// Range: 0.0 – 1.0. Computed from the event's own timestamp, so the
/// factor does not depend on the order events are folded in.
pub fn factor(event_time: DateTime<Utc>, now: DateTime<Utc>, half_life_days: f64) -> f64 {
    if half_life_days <= 0.0 {
        return 1.0;
    }
    let age_days = (now - event_time).num_seconds().max(0) as f64 / 86_400.0;
    (-std::f64::consts::LN_2 * age_days / half_life_days).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn fresh_event_has_full_weight() {
        let now = Utc::now();
        assert!((factor(now, now, 30.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn one_half_life_halves_weight() {
        let now = Utc::now();
        let f = factor(now - Duration::days(30), now, 30.0);
        assert!((f - 0.5).abs() < 1e-3);
    }

    #[test]
    fn future_timestamps_clamp_to_full_weight() {
        let now = Utc::now();
        assert_eq!(factor(now + Duration::days(5), now, 30.0), 1.0);
    }
}
