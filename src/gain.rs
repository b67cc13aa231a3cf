// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Reading gains off a response.

Gains are `10 log10(|response|)` with no normalisation, so they are only "dBi"
in a loose sense. A sample with no signal at all gives negative infinity; that
is a valid answer, not an error.
 */

use ndarray::prelude::*;

use crate::{ArrayResponse, AzimuthSweep, BeamConfiguration, BeamError};

fn magnitude_to_db(magnitude: f64) -> f64 {
    10.0 * magnitude.log10()
}

/// The gain \[dB\] of `superposed` at an integer azimuth. `sweep` must be the
/// sweep that `superposed` was sampled over; it decides which sample an angle
/// maps to, so this works at any sweep resolution.
///
/// # Examples
///
/// ```
/// use mimo_beam::{gain_at_angle, BeamComposer};
///
/// let config = BeamComposer::new().build(6, &[90.0], 3e9).unwrap();
/// let gain = gain_at_angle(&config.superpose(), config.sweep(), 90).unwrap();
/// assert!((gain - 10.0 * 6.0_f64.log10()).abs() < 1e-9);
///
/// assert!(gain_at_angle(&config.superpose(), config.sweep(), 360).is_err());
/// ```
pub fn gain_at_angle(
    superposed: &ArrayResponse,
    sweep: &AzimuthSweep,
    angle_deg: u32,
) -> Result<f64, BeamError> {
    if superposed.len() != sweep.len() {
        return Err(BeamError::ResponseLengthMismatch {
            expected: sweep.len(),
            got: superposed.len(),
        });
    }
    let index = sweep.index_of_degrees(angle_deg)?;
    Ok(magnitude_to_db(superposed[index].norm()))
}

/// The gain \[dB\] of `response` at a sample index.
pub fn gain_at_index(response: &ArrayResponse, index: usize) -> Result<f64, BeamError> {
    if index >= response.len() {
        return Err(BeamError::IndexOutOfRange {
            index,
            len: response.len(),
        });
    }
    Ok(magnitude_to_db(response[index].norm()))
}

/// The gain \[dB\] at every sample of `response`.
pub fn gain_pattern(response: &ArrayResponse) -> Array1<f64> {
    response.magnitudes().mapv(magnitude_to_db)
}

/// The superposed gain \[dB\] of `config` toward each of its receivers, in
/// receiver order. Each steering angle is rounded to the nearest sweep sample.
pub fn receiver_gains(config: &BeamConfiguration) -> Vec<f64> {
    let superposed = config.superpose();
    config
        .steering_angles_rad()
        .iter()
        .map(|&angle_rad| match config.sweep().nearest_index(angle_rad) {
            Some(i) => magnitude_to_db(superposed[i].norm()),
            None => f64::NAN,
        })
        .collect()
}
