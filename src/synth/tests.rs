// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::f64::consts::PI;

use approx::*;

use super::*;
use crate::constants::{DEFAULT_FREQUENCY_HZ, SPEED_OF_LIGHT};

fn reference_geometry(antenna_count: usize) -> ArrayGeometry {
    ArrayGeometry::from_frequency(antenna_count, DEFAULT_FREQUENCY_HZ, SPEED_OF_LIGHT).unwrap()
}

#[test]
fn geometry_is_half_wavelength() {
    let g = reference_geometry(6);
    assert_eq!(g.antenna_count(), 6);
    assert_abs_diff_eq!(g.wavelength(), 0.1, epsilon = 1e-15);
    assert_abs_diff_eq!(g.spacing(), g.wavelength() / 2.0);
}

#[test]
fn geometry_rejects_bad_physics() {
    assert_eq!(
        ArrayGeometry::from_frequency(4, 0.0, SPEED_OF_LIGHT),
        Err(BeamError::NonPositiveFrequency(0.0))
    );
    assert_eq!(
        ArrayGeometry::from_frequency(4, 3e9, -1.0),
        Err(BeamError::NonPositiveSpeedOfLight(-1.0))
    );
    assert!(matches!(
        ArrayGeometry::new(4, f64::NAN),
        Err(BeamError::NonPositiveWavelength(_))
    ));
    assert_eq!(
        ArrayGeometry::new_custom(4, 0.0, 0.1),
        Err(BeamError::NonPositiveSpacing(0.0))
    );
    assert_eq!(
        ArrayGeometry::new_custom(4, 0.05, -0.1),
        Err(BeamError::NonPositiveWavelength(-0.1))
    );
}

#[test]
fn response_has_one_sample_per_azimuth() {
    let sweep = AzimuthSweep::default();
    for n in [1, 2, 5, 16] {
        let r = reference_geometry(n).response(1.234, &sweep);
        assert_eq!(r.len(), 360);
    }

    let sweep = AzimuthSweep::new(1000).unwrap();
    let r = reference_geometry(3).response(0.5, &sweep);
    assert_eq!(r.len(), 1000);
}

#[test]
fn mainlobe_magnitude_is_antenna_count() {
    let sweep = AzimuthSweep::default();
    for n in 1..=12 {
        let g = reference_geometry(n);
        for deg in [0, 30, 45, 90, 135, 170, 200, 300] {
            let steering = f64::from(deg) * PI / 180.0;
            let r = g.response(steering, &sweep);
            assert_abs_diff_eq!(r[deg as usize].norm(), n as f64, epsilon = 1e-9);
        }
    }
}

#[test]
fn mainlobe_is_the_peak() {
    let sweep = AzimuthSweep::default();
    let r = reference_geometry(8).response(60.0 * PI / 180.0, &sweep);
    let peak = r.peak_index().unwrap();
    // A linear array can't tell θ from -θ, so the mirror image is a peak too.
    assert!(peak == 60 || peak == 300, "peak was at {peak}");
    assert_abs_diff_eq!(r[peak].norm(), 8.0, epsilon = 1e-9);
}

#[test]
fn broadside_is_symmetric() {
    let sweep = AzimuthSweep::default();
    let r = reference_geometry(7).response(PI / 2.0, &sweep);
    for i in 1..360 {
        assert_abs_diff_eq!(r[i].norm(), r[360 - i].norm(), epsilon = 1e-9);
    }
}

#[test]
fn two_element_values() {
    // Broadside steering makes both weights 1. At θ = 0 the two antennas are
    // half a wavelength apart along the line of sight and cancel; at θ = 60°
    // the second antenna lags by π/2.
    let sweep = AzimuthSweep::default();
    let r = reference_geometry(2).response(PI / 2.0, &sweep);
    assert_abs_diff_eq!(r[0], c64::new(0.0, 0.0), epsilon = 1e-12);
    assert_abs_diff_eq!(r[60], c64::new(1.0, -1.0), epsilon = 1e-12);
    assert_abs_diff_eq!(r[90], c64::new(2.0, 0.0), epsilon = 1e-12);
}

#[test]
fn single_antenna_is_isotropic() {
    let sweep = AzimuthSweep::default();
    let r = reference_geometry(1).response(0.3, &sweep);
    for v in r.values() {
        assert_abs_diff_eq!(*v, c64::new(1.0, 0.0));
    }
}

#[test]
fn zero_antennas_give_zeros() {
    let sweep = AzimuthSweep::default();
    let r = compute_array_response(0, 0.05, 0.1, 0.0, &sweep);
    assert_eq!(r.len(), 360);
    assert!(r.values().iter().all(|v| *v == c64::new(0.0, 0.0)));
}

#[test]
fn nan_steering_propagates() {
    let sweep = AzimuthSweep::default();
    let r = compute_array_response(4, 0.05, 0.1, f64::NAN, &sweep);
    assert_eq!(r.len(), 360);
    assert!(r.values().iter().all(|v| v.re.is_nan() || v.im.is_nan()));
}

#[test]
fn wider_spacing_still_peaks_at_steering() {
    // Full-wavelength spacing adds grating lobes, but the steered direction
    // still gets the full array gain.
    let sweep = AzimuthSweep::default();
    let g = ArrayGeometry::new_custom(5, 0.1, 0.1).unwrap();
    let r = g.response(40.0 * PI / 180.0, &sweep);
    assert_abs_diff_eq!(r[40].norm(), 5.0, epsilon = 1e-9);
}
