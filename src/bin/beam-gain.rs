// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Split an antenna budget across some receiver directions and print the
//! superposed gain toward each receiver.
//!
//! Usage: beam-gain <total_antennas> <frequency_hz> <angle_deg>...

use mimo_beam::{receiver_gains, BeamComposer, BeamError};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        println!("Usage: beam-gain <total_antennas> <frequency_hz> <angle_deg>...");
        std::process::exit(1);
    }

    let parsed = args[0].parse::<usize>().ok().zip(args[1].parse::<f64>().ok());
    let angles: Option<Vec<f64>> = args[2..].iter().map(|a| a.parse().ok()).collect();
    let (Some((total_antennas, freq_hz)), Some(angles)) = (parsed, angles) else {
        println!("Couldn't parse the arguments as numbers");
        std::process::exit(1);
    };

    if let Err(e) = run(total_antennas, freq_hz, &angles) {
        println!("{e}");
        std::process::exit(1);
    }
}

fn run(total_antennas: usize, freq_hz: f64, angles: &[f64]) -> Result<(), BeamError> {
    let config = BeamComposer::new().build(total_antennas, angles, freq_hz)?;
    println!(
        "{} receivers, {} antennas each, {} dropped",
        config.receiver_count(),
        config.antennas_per_receiver(),
        config.dropped_antennas()
    );
    for (i, (angle, gain)) in angles.iter().zip(receiver_gains(&config)).enumerate() {
        println!("Receiver {} ({angle} deg): {gain:.3} dB", i + 1);
    }
    Ok(())
}
