// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Far-field radiation patterns of uniform linear phased arrays.

An antenna budget is split evenly across several receiver directions, each
share is steered toward its receiver, and the resulting beams are superposed
into one pattern that gains can be read from.

```
use mimo_beam::{gain_at_angle, BeamComposer};

let composer = BeamComposer::new();
let config = composer.build(12, &[135.0, 90.0, 45.0], 3e9).unwrap();
let pattern = config.superpose();
let gain_db = gain_at_angle(&pattern, config.sweep(), 90).unwrap();
assert!(gain_db.is_finite());
```
 */

mod composer;
mod constants;
mod errors;
mod gain;
mod response;
mod sweep;
mod synth;

pub use composer::{superpose, AntennaAllocation, BeamComposer, BeamConfiguration};
pub use constants::{DEFAULT_FREQUENCY_HZ, DEFAULT_SWEEP_SAMPLES, SPEED_OF_LIGHT};
pub use errors::BeamError;
pub use gain::{gain_at_angle, gain_at_index, gain_pattern, receiver_gains};
pub use response::{ArrayResponse, SuperposedResponse};
pub use sweep::AzimuthSweep;
pub use synth::{compute_array_response, ArrayGeometry};

// Re-exports.
pub use ndarray;
pub use num_complex::Complex64 as c64;
