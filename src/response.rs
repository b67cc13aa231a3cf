// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Complex responses sampled over an azimuth sweep.

use ndarray::prelude::*;

use crate::c64;

/// The complex array factor of one steered sub-array, one value per
/// [`AzimuthSweep`](crate::AzimuthSweep) sample and in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayResponse {
    values: Array1<c64>,
}

/// The uniform average of several [`ArrayResponse`]s. It has exactly the same
/// shape as the responses it was made from.
pub type SuperposedResponse = ArrayResponse;

impl ArrayResponse {
    pub(crate) fn new(values: Array1<c64>) -> ArrayResponse {
        ArrayResponse { values }
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The complex samples.
    pub fn values(&self) -> ArrayView1<c64> {
        self.values.view()
    }

    /// The magnitude of each sample. This is all a polar plot needs.
    pub fn magnitudes(&self) -> Array1<f64> {
        self.values.mapv(|v| v.norm())
    }

    /// The index of the largest magnitude. NaN samples are ignored; `None` is
    /// returned if every sample is NaN.
    pub fn peak_index(&self) -> Option<usize> {
        self.values
            .iter()
            .map(|v| v.norm())
            .enumerate()
            .filter(|(_, m)| !m.is_nan())
            .fold(None, |best: Option<(usize, f64)>, (i, m)| match best {
                Some((_, best_m)) if best_m >= m => best,
                _ => Some((i, m)),
            })
            .map(|(i, _)| i)
    }
}

impl std::ops::Index<usize> for ArrayResponse {
    type Output = c64;

    fn index(&self, index: usize) -> &c64 {
        &self.values[index]
    }
}
