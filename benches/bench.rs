// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Benchmarks.
 */

use criterion::*;

use mimo_beam::*;

fn synth(c: &mut Criterion) {
    c.bench_function("compute_array_response 16 antennas", |b| {
        let sweep = AzimuthSweep::default();
        let geometry = ArrayGeometry::from_frequency(16, 3e9, SPEED_OF_LIGHT).unwrap();
        let steering = 60.0_f64.to_radians();
        b.iter(|| {
            geometry.response(black_box(steering), &sweep);
        })
    });

    c.bench_function("compute_array_response 256 antennas, 0.1 degree sweep", |b| {
        let sweep = AzimuthSweep::new(3600).unwrap();
        let geometry = ArrayGeometry::from_frequency(256, 3e9, SPEED_OF_LIGHT).unwrap();
        let steering = 60.0_f64.to_radians();
        b.iter(|| {
            geometry.response(black_box(steering), &sweep);
        })
    });
}

fn compose(c: &mut Criterion) {
    c.bench_function("build 12 antennas, 3 receivers", |b| {
        let composer = BeamComposer::new();
        b.iter(|| {
            composer.build(12, &[135.0, 90.0, 45.0], 3e9).unwrap();
        })
    });

    // Many receivers, so that the parallel synthesis has something to do.
    c.bench_function("build 512 antennas, 32 receivers", |b| {
        let composer = BeamComposer::new();
        let angles: Vec<f64> = (0..32).map(|i| i as f64 * 5.0).collect();
        b.iter(|| {
            composer.build(512, &angles, 3e9).unwrap();
        })
    });

    c.bench_function("superpose and sample", |b| {
        let config = BeamComposer::new()
            .build(512, &[135.0, 90.0, 45.0, 10.0], 3e9)
            .unwrap();
        b.iter(|| {
            let superposed = config.superpose();
            gain_at_angle(&superposed, config.sweep(), 90).unwrap();
        })
    });
}

criterion_group!(benches, synth, compose);
criterion_main!(benches);
