use thiserror::Error;

/// Rejected stamp parameters
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StampError {
    #[error("Radius may only take on values between 0 and 1 (inclusive), got {0}")]
    InvalidRadius(f32),
    #[error("Hardness may only take on values between 0 and 1 (inclusive), got {0}")]
    InvalidHardness(f32),
    #[error("Sample position must be finite, got ({0}, {1})")]
    InvalidPosition(f32, f32),
}

/// True if `value` lies in [0, 1]; NaN is never valid
#[inline]
pub fn is_unit_fraction(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Validate the radius and hardness fractions passed to the stamp renderer
pub fn validate_stamp_params(radius: f32, hardness: f32) -> Result<(), StampError> {
    if !is_unit_fraction(hardness) {
        return Err(StampError::InvalidHardness(hardness));
    }
    if !is_unit_fraction(radius) {
        return Err(StampError::InvalidRadius(radius));
    }
    Ok(())
}

/// Reject positions the resampler cannot walk to
pub fn validate_position(x: f32, y: f32) -> Result<(), StampError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(StampError::InvalidPosition(x, y))
    }
}

/// Map raw device pressure to a stamp radius fraction
///
/// Pressure is clamped to [0, 1]. Non-finite pressure is passed through so
/// that validation reports it.
#[inline]
pub fn pressure_to_radius_fraction(pressure: f32) -> f32 {
    if pressure.is_finite() {
        pressure.clamp(0.0, 1.0)
    } else {
        pressure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_stamp_params() {
        assert!(validate_stamp_params(0.0, 0.0).is_ok());
        assert!(validate_stamp_params(1.0, 1.0).is_ok());
        assert_eq!(
            validate_stamp_params(1.5, 0.5),
            Err(StampError::InvalidRadius(1.5))
        );
        assert_eq!(
            validate_stamp_params(0.5, -0.1),
            Err(StampError::InvalidHardness(-0.1))
        );
        assert!(validate_stamp_params(f32::NAN, 0.5).is_err());
    }

    #[test]
    fn test_validate_position() {
        assert!(validate_position(-4.0, 1e6).is_ok());
        assert_eq!(
            validate_position(f32::INFINITY, 2.0),
            Err(StampError::InvalidPosition(f32::INFINITY, 2.0))
        );
        assert!(matches!(
            validate_position(1.0, f32::NAN),
            Err(StampError::InvalidPosition(_, _))
        ));
    }

    #[test]
    fn test_pressure_clamping() {
        assert_eq!(pressure_to_radius_fraction(1.7), 1.0);
        assert_eq!(pressure_to_radius_fraction(-0.3), 0.0);
        assert_eq!(pressure_to_radius_fraction(0.4), 0.4);
        assert!(pressure_to_radius_fraction(f32::NAN).is_nan());
        assert!(!is_unit_fraction(pressure_to_radius_fraction(f32::INFINITY)));
    }
}
