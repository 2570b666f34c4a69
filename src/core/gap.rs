/// Largest distance, in milliseconds, between two timestamps that still
/// renders as a connected line.
pub const MIN_INTERVAL_MS: f64 = 60_000.0;

/// Largest ordinal/numeric step that still renders as a connected line.
pub const MAX_ORDINAL_STEP: f64 = 1.0;

/// Decides whether two adjacent category positions must be drawn as a break.
///
/// Positions are epoch millis in date mode and raw numbers otherwise. An
/// unknown position on either side never produces a gap.
#[must_use]
pub fn is_gap(current: Option<f64>, previous: Option<f64>, is_date_mode: bool) -> bool {
    let (Some(current), Some(previous)) = (current, previous) else {
        return false;
    };

    let threshold = if is_date_mode {
        MIN_INTERVAL_MS
    } else {
        MAX_ORDINAL_STEP
    };
    current - previous > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_known_position() {
        assert!(is_gap(Some(2.0), Some(0.0), false));
        assert!(!is_gap(Some(1.0), Some(0.0), false));
    }

    #[test]
    fn backwards_steps_never_split() {
        assert!(!is_gap(Some(0.0), Some(500_000.0), true));
    }
}
