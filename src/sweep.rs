// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The azimuth sweep that every response is sampled over.

use std::f64::consts::TAU;

use ndarray::prelude::*;

use crate::{constants::DEFAULT_SWEEP_SAMPLES, BeamError};

/// An ordered set of azimuths covering `[0, 2π)` with a uniform step. Sample
/// `i` is at `i * 2π / len` radians. With the default 360 samples, index `i`
/// is `i` degrees.
///
/// A sweep is read-only once made; share it with an
/// [`Arc`](std::sync::Arc) rather than copying it around.
#[derive(Debug, Clone, PartialEq)]
pub struct AzimuthSweep {
    /// The azimuths \[radians\].
    angles: Array1<f64>,

    /// The cosine of each azimuth. Synthesis only ever needs these.
    cos_angles: Array1<f64>,

    /// The spacing between consecutive samples \[radians\].
    step: f64,
}

impl Default for AzimuthSweep {
    fn default() -> Self {
        Self::with_samples(DEFAULT_SWEEP_SAMPLES)
    }
}

impl AzimuthSweep {
    /// Create a new [`AzimuthSweep`] with `num_samples` evenly spaced azimuths.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimo_beam::AzimuthSweep;
    ///
    /// let sweep = AzimuthSweep::new(720).unwrap();
    /// assert_eq!(sweep.len(), 720);
    /// assert_eq!(sweep.index_of_degrees(90).unwrap(), 180);
    /// assert!(AzimuthSweep::new(0).is_err());
    /// ```
    pub fn new(num_samples: usize) -> Result<AzimuthSweep, BeamError> {
        if num_samples == 0 {
            return Err(BeamError::ZeroSweepSamples);
        }
        Ok(Self::with_samples(num_samples))
    }

    fn with_samples(num_samples: usize) -> AzimuthSweep {
        let step = TAU / num_samples as f64;
        let angles = Array1::from_shape_fn(num_samples, |i| i as f64 * step);
        let cos_angles = angles.mapv(f64::cos);
        AzimuthSweep {
            angles,
            cos_angles,
            step,
        }
    }

    /// The number of samples in the sweep.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false; a sweep can't be constructed without samples.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// The angular spacing between samples \[radians\].
    pub fn step_rad(&self) -> f64 {
        self.step
    }

    /// The sampled azimuths \[radians\].
    pub fn angles_rad(&self) -> ArrayView1<f64> {
        self.angles.view()
    }

    /// The sampled azimuths \[degrees\].
    pub fn angles_deg(&self) -> Array1<f64> {
        self.angles.mapv(f64::to_degrees)
    }

    pub(crate) fn cos_angles(&self) -> ArrayView1<f64> {
        self.cos_angles.view()
    }

    /// Map an integer azimuth in degrees to the nearest sample index. For a
    /// 360-sample sweep this is the identity.
    pub fn index_of_degrees(&self, angle_deg: u32) -> Result<usize, BeamError> {
        if angle_deg >= 360 {
            return Err(BeamError::AzimuthOutOfRange {
                angle_deg,
                limit: 360,
            });
        }
        let n = self.len();
        let index = (f64::from(angle_deg) * n as f64 / 360.0).round() as usize;
        // Rounding can land on the sample at 2π, which is sample 0.
        Ok(index % n)
    }

    /// Map an arbitrary azimuth \[radians\] onto the circle and return the
    /// nearest sample index. Non-finite angles have no nearest sample.
    pub fn nearest_index(&self, angle_rad: f64) -> Option<usize> {
        if !angle_rad.is_finite() {
            return None;
        }
        let wrapped = angle_rad.rem_euclid(TAU);
        Some((wrapped / self.step).round() as usize % self.len())
    }
}
