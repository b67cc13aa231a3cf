// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Array-factor synthesis for a steered uniform linear array.

#[cfg(test)]
mod tests;

use std::f64::consts::TAU;

use ndarray::prelude::*;

use crate::{c64, errors::check_positive, ArrayResponse, AzimuthSweep, BeamError};

/// The layout of a uniform linear array. Antennas sit on a line with a
/// constant spacing; the array axis is azimuth 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayGeometry {
    /// The number of antennas in the array. A count of 0 is allowed, but such
    /// an array has no response (every sample is 0).
    antenna_count: usize,

    /// The distance between neighbouring antennas \[metres\].
    spacing: f64,

    /// The operating wavelength \[metres\].
    wavelength: f64,
}

impl ArrayGeometry {
    /// Create a new [`ArrayGeometry`] with half-wavelength spacing.
    pub fn new(antenna_count: usize, wavelength_m: f64) -> Result<ArrayGeometry, BeamError> {
        let wavelength = check_positive(wavelength_m, BeamError::NonPositiveWavelength)?;
        Ok(ArrayGeometry {
            antenna_count,
            spacing: wavelength / 2.0,
            wavelength,
        })
    }

    /// Create a new [`ArrayGeometry`] with half-wavelength spacing, deriving
    /// the wavelength from an operating frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimo_beam::{ArrayGeometry, SPEED_OF_LIGHT};
    ///
    /// let geometry = ArrayGeometry::from_frequency(6, 3e9, SPEED_OF_LIGHT).unwrap();
    /// assert!((geometry.wavelength() - 0.1).abs() < 1e-12);
    /// assert!((geometry.spacing() - 0.05).abs() < 1e-12);
    /// ```
    pub fn from_frequency(
        antenna_count: usize,
        freq_hz: f64,
        speed_of_light: f64,
    ) -> Result<ArrayGeometry, BeamError> {
        let freq_hz = check_positive(freq_hz, BeamError::NonPositiveFrequency)?;
        let speed_of_light = check_positive(speed_of_light, BeamError::NonPositiveSpeedOfLight)?;
        ArrayGeometry::new(antenna_count, speed_of_light / freq_hz)
    }

    /// Create a new [`ArrayGeometry`] with an arbitrary spacing.
    pub fn new_custom(
        antenna_count: usize,
        spacing_m: f64,
        wavelength_m: f64,
    ) -> Result<ArrayGeometry, BeamError> {
        Ok(ArrayGeometry {
            antenna_count,
            spacing: check_positive(spacing_m, BeamError::NonPositiveSpacing)?,
            wavelength: check_positive(wavelength_m, BeamError::NonPositiveWavelength)?,
        })
    }

    pub fn antenna_count(&self) -> usize {
        self.antenna_count
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// The same layout, but with a different number of antennas.
    pub(crate) fn with_antenna_count(self, antenna_count: usize) -> ArrayGeometry {
        ArrayGeometry {
            antenna_count,
            ..self
        }
    }

    /// Steer this array toward `steering_rad` and sample its array factor
    /// over `sweep`. See [`compute_array_response`].
    pub fn response(&self, steering_rad: f64, sweep: &AzimuthSweep) -> ArrayResponse {
        compute_array_response(
            self.antenna_count,
            self.spacing,
            self.wavelength,
            steering_rad,
            sweep,
        )
    }
}

/// Calculate the far-field array factor of a uniform linear array steered
/// toward `steering_rad`, sampled at every azimuth of `sweep`.
///
/// Antenna `k` (counting from 0) gets a phase of `k 2π d cos(θ) / λ`. The
/// unsteered response matrix has `exp(-j phase(θ_i))` for each antenna and
/// sweep sample, the steering weights are `exp(+j phase(steering))`, and the
/// result is the weights (as a row vector) multiplied by that matrix. At the
/// steering direction all antennas add in phase, so the magnitude there is
/// the antenna count.
///
/// Nothing is validated here; non-finite inputs give non-finite samples and
/// an antenna count of 0 gives all zeros.
///
/// # Examples
///
/// ```
/// use mimo_beam::{compute_array_response, AzimuthSweep};
///
/// let sweep = AzimuthSweep::default();
/// let wavelength = 0.1;
/// let response = compute_array_response(8, wavelength / 2.0, wavelength, 30.0_f64.to_radians(), &sweep);
/// assert_eq!(response.len(), 360);
/// assert!((response[30].norm() - 8.0).abs() < 1e-9);
/// ```
pub fn compute_array_response(
    antenna_count: usize,
    spacing_m: f64,
    wavelength_m: f64,
    steering_rad: f64,
    sweep: &AzimuthSweep,
) -> ArrayResponse {
    if antenna_count == 0 {
        return ArrayResponse::new(Array1::zeros(sweep.len()));
    }

    // Phase per antenna per unit of cos(θ).
    let multiplier = TAU * spacing_m / wavelength_m;
    let cos_steering = steering_rad.cos();
    let cos_sweep = sweep.cos_angles();

    let array_matrix = Array2::from_shape_fn((antenna_count, sweep.len()), |(k, i)| {
        c64::cis(-(k as f64) * multiplier * cos_sweep[i])
    });
    let weights =
        Array1::from_shape_fn(antenna_count, |k| c64::cis(k as f64 * multiplier * cos_steering));

    ArrayResponse::new(weights.dot(&array_matrix))
}
