// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Errors associated with all aspects of mimo_beam.
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BeamError {
    #[error("No steering angles were given; at least one receiver direction is required")]
    NoSteeringAngles,

    #[error("The total antenna count was 0")]
    ZeroAntennas,

    #[error("Got a frequency of {0} Hz, but it must be positive and finite")]
    NonPositiveFrequency(f64),

    #[error("Got a speed of light of {0} m/s, but it must be positive and finite")]
    NonPositiveSpeedOfLight(f64),

    #[error("Got a wavelength of {0} m, but it must be positive and finite")]
    NonPositiveWavelength(f64),

    #[error("Got an antenna spacing of {0} m, but it must be positive and finite")]
    NonPositiveSpacing(f64),

    #[error("An azimuth sweep needs at least one sample")]
    ZeroSweepSamples,

    /// A gain query was made outside of `[0, limit)` degrees.
    #[error("Azimuth {angle_deg} degrees is out of range; it must be less than {limit}")]
    AzimuthOutOfRange { angle_deg: u32, limit: u32 },

    #[error("Sample index {index} is out of range for a response with {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Expected a response with {expected} samples, but got {got}")]
    ResponseLengthMismatch { expected: usize, got: usize },

    #[error("Can't superpose an empty list of responses")]
    NoResponses,
}

/// Fail with `err` unless `value` is positive and finite.
pub(crate) fn check_positive(value: f64, err: fn(f64) -> BeamError) -> Result<f64, BeamError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}
