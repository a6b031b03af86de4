use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values. Factors outside [0, 1] extrapolate.
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

/// Wraps an angle into the half-open interval (-π, π].
pub fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}

/// Speed in the horizontal (x, z) plane; y is up.
#[inline]
pub fn horizontal_speed(velocity: &Vector3<f64>) -> f64 {
    (velocity.x * velocity.x + velocity.z * velocity.z).sqrt()
}
