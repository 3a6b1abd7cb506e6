//! Conversion of a raw headspace distance into a bin fill percentage.

/// Fixed geometry of the bin: the distance from the sensor to the bottom of
/// an empty bin, in centimeters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub struct BinGeometry {
    pub max_height_cm: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "no-std", derive(defmt::Format))]
pub enum FillError {
    /// The distance sensor produced no reading this cycle.
    Unavailable,

    /// The measured distance exceeds the maximum bin height, violating the
    /// geometry assumption (sensor misalignment or calibration fault).
    HeightExceeded,
}

/// Estimates the bin fill percentage from a measured headspace distance.
///
/// Distances at or below zero are permitted by the formula and indicate a
/// sensor fault upstream rather than a condition handled here, so no upper
/// clamp is applied.
pub fn fill_level(distance_cm: Option<f32>, geometry: &BinGeometry) -> Result<f32, FillError> {
    let distance_cm = distance_cm.ok_or(FillError::Unavailable)?;

    if distance_cm > geometry.max_height_cm {
        return Err(FillError::HeightExceeded);
    }

    let percent = ((geometry.max_height_cm - distance_cm) / geometry.max_height_cm) * 100.0;
    Ok(round_to_hundredths(percent))
}

// Valid fill values are never negative (the height check rejects the only
// case that could produce one), so truncation after adding 0.5 rounds half
// up.
fn round_to_hundredths(value: f32) -> f32 {
    ((value * 100.0) + 0.5) as i64 as f32 / 100.0
}
