// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Reference constants. These are only defaults; [`crate::BeamComposer`] carries
its own copies so that nothing here is read implicitly.
 */

/// The speed of light used for the reference patterns \[m/s\]. This is the
/// rounded value, not 299792458.
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// The default operating frequency (3 GHz) \[Hz\].
pub const DEFAULT_FREQUENCY_HZ: f64 = 3e9;

/// The default number of azimuth samples; one per degree.
pub const DEFAULT_SWEEP_SAMPLES: usize = 360;

/// Degrees to radians, as the exact product `deg * PI / 180`.
pub(crate) const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
