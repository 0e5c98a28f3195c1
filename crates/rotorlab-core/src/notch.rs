//! Notch parameter helpers.
//!
//! The tuning UI describes a notch by its center frequency and a cutoff /
//! bandwidth parameter rather than a Q. Motor-driven notches start from the
//! motor RPM and blade ratio instead.

use crate::error::FilterError;

/// Derive a notch Q from its center frequency and bandwidth parameter:
///
/// ```text
/// Q = center * bandwidth / (center² - bandwidth²)
/// ```
///
/// # Errors
///
/// * [`FilterError::DivisionByZero`] when the center frequency equals the
///   bandwidth parameter (the denominator is exactly zero).
/// * [`FilterError::InvalidParameter`] for non-positive inputs or when the
///   bandwidth exceeds the center frequency (the formula would yield a
///   non-positive Q).
pub fn notch_q(center_hz: f64, bandwidth_hz: f64) -> Result<f64, FilterError> {
    if !(center_hz > 0.0) {
        return Err(FilterError::InvalidParameter(
            "notch center frequency must be positive",
        ));
    }
    if !(bandwidth_hz > 0.0) {
        return Err(FilterError::InvalidParameter(
            "notch bandwidth must be positive",
        ));
    }

    let denom = center_hz * center_hz - bandwidth_hz * bandwidth_hz;
    if denom == 0.0 {
        return Err(FilterError::DivisionByZero(
            "notch center frequency equals bandwidth",
        ));
    }

    let q = center_hz * bandwidth_hz / denom;
    if !q.is_finite() {
        return Err(FilterError::NumericInstability("notch Q is not finite"));
    }
    if q <= 0.0 {
        return Err(FilterError::InvalidParameter(
            "notch bandwidth must be below the center frequency",
        ));
    }
    Ok(q)
}

/// Notch center frequency for a motor-driven disturbance:
/// `center = rpm * blade_ratio / 60` (RPM to Hz, scaled by the blade pass
/// ratio).
pub fn rpm_notch_center(rpm: f64, blade_ratio: f64) -> f64 {
    rpm * blade_ratio / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q_from_center_and_bandwidth() {
        // 150 Hz center, 5 Hz bandwidth: Q = 750 / 22475 ≈ 0.033371.
        let q = notch_q(150.0, 5.0).unwrap();
        assert!((q - 750.0 / 22475.0).abs() < 1e-12);
        assert!((q - 0.033371).abs() < 1e-6);
    }

    #[test]
    fn equal_center_and_bandwidth_is_division_by_zero() {
        assert_eq!(
            notch_q(150.0, 150.0),
            Err(FilterError::DivisionByZero(
                "notch center frequency equals bandwidth"
            ))
        );
    }

    #[test]
    fn bandwidth_above_center_is_invalid() {
        assert!(matches!(
            notch_q(100.0, 200.0),
            Err(FilterError::InvalidParameter(_))
        ));
    }

    #[test]
    fn non_positive_inputs_are_invalid() {
        assert!(notch_q(0.0, 5.0).is_err());
        assert!(notch_q(150.0, 0.0).is_err());
        assert!(notch_q(-150.0, 5.0).is_err());
        assert!(notch_q(f64::NAN, 5.0).is_err());
    }

    #[test]
    fn rpm_to_center() {
        // 6000 RPM, blade ratio 2: 6000 * 2 / 60 = 200 Hz.
        assert_eq!(rpm_notch_center(6000.0, 2.0), 200.0);
    }
}
