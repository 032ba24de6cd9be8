//! Trigonometry in degrees.
//!
//! Multiples of 90° produce exact zeros and ones so that axis-aligned
//! rotations keep axis-aligned geometry exactly axis-aligned.

/// Sine of an angle given in degrees.
///
/// # Examples
/// ```
/// use manifold_kernel::core::trig::sind;
/// assert_eq!(sind(90.0), 1.0);
/// assert_eq!(sind(180.0), 0.0);
/// assert_eq!(sind(-270.0), 1.0);
/// ```
pub fn sind(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return f64::NAN;
    }
    let (quadrant, rem) = reduce(degrees);
    match quadrant {
        0 => rem.sin(),
        1 => rem.cos(),
        2 => -rem.sin(),
        _ => -rem.cos(),
    }
}

/// Cosine of an angle given in degrees.
///
/// # Examples
/// ```
/// use manifold_kernel::core::trig::cosd;
/// assert_eq!(cosd(90.0), 0.0);
/// assert_eq!(cosd(180.0), -1.0);
/// ```
pub fn cosd(degrees: f64) -> f64 {
    sind(degrees + 90.0)
}

/// Splits an angle into a quadrant in `0..4` and a remainder in radians
/// within `[-45°, 45°]`.
fn reduce(degrees: f64) -> (u8, f64) {
    let wrapped = degrees.rem_euclid(360.0);
    let quadrant = (wrapped / 90.0).round();
    let rem = (wrapped - quadrant * 90.0).to_radians();
    ((quadrant as u8) % 4, rem)
}
