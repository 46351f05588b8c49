//! Angle arithmetic on the ecliptic circle.

/// Reduce any angle into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Shortest angular separation between two longitudes, in [0, 180].
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Split a longitude into whole degrees and rounded arc minutes.
///
/// Minutes that round up to 60 carry into the degree, and a carry past
/// 359° wraps back to 0°.
pub fn degrees_minutes(angle: f64) -> (u32, u32) {
    let norm = normalize_angle(angle);
    let mut deg = norm.floor() as u32;
    let mut min = ((norm - norm.floor()) * 60.0).round() as u32;
    if min >= 60 {
        min = 0;
        deg += 1;
    }
    (deg % 360, min)
}

/// Human readable longitude such as `15°07′`.
pub fn format_degrees(angle: f64) -> String {
    let (deg, min) = degrees_minutes(angle);
    format!("{}°{:02}′", deg, min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_negative() {
        assert_eq!(normalize_angle(-30.0), 330.0);
        assert_eq!(normalize_angle(-720.0), 0.0);
        assert_eq!(normalize_angle(725.5), 5.5);
    }

    #[test]
    fn test_normalize_tiny_negative_stays_in_range() {
        let a = normalize_angle(-1e-17);
        assert!((0.0..360.0).contains(&a));
    }

    #[test]
    fn test_angle_diff_wraps() {
        assert_eq!(angle_diff(350.0, 10.0), 20.0);
        assert_eq!(angle_diff(0.0, 180.0), 180.0);
        assert_eq!(angle_diff(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_format_degrees_pads_minutes() {
        assert_eq!(format_degrees(15.1), "15°06′");
        assert_eq!(format_degrees(0.0), "0°00′");
    }

    #[test]
    fn test_format_degrees_carries_sixty_minutes() {
        assert_eq!(format_degrees(29.9999), "30°00′");
        assert_eq!(format_degrees(359.9999), "0°00′");
    }

    proptest! {
        #[test]
        fn normalized_angle_in_range(x in -1.0e6f64..1.0e6) {
            let a = normalize_angle(x);
            prop_assert!((0.0..360.0).contains(&a), "{} -> {}", x, a);
        }

        #[test]
        fn normalization_ignores_full_turns(x in 0.0f64..360.0, k in -20i32..20) {
            let shifted = normalize_angle(x + 360.0 * k as f64);
            let base = normalize_angle(x);
            // floating error from adding whole turns, modulo the wrap point
            let delta = angle_diff(shifted, base);
            prop_assert!(delta < 1e-9, "{} vs {}", shifted, base);
        }

        #[test]
        fn angle_diff_is_symmetric_and_bounded(a in -720.0f64..720.0, b in -720.0f64..720.0) {
            let ab = angle_diff(a, b);
            prop_assert_eq!(ab, angle_diff(b, a));
            prop_assert!((0.0..=180.0).contains(&ab));
        }

        #[test]
        fn formatted_minutes_never_sixty(x in 0.0f64..360.0) {
            let (deg, min) = degrees_minutes(x);
            prop_assert!(min < 60);
            prop_assert!(deg < 360);
        }
    }
}
