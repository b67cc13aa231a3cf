// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Splitting an antenna budget across several receiver directions, and
//! combining the resulting beams.


use std::sync::Arc;

use log::{debug, trace, warn};
use ndarray::{prelude::*, Zip};
use rayon::prelude::*;

use crate::{
    c64,
    constants::{DEFAULT_FREQUENCY_HZ, DEG_TO_RAD, SPEED_OF_LIGHT},
    errors::check_positive,
    ArrayGeometry, ArrayResponse, AzimuthSweep, BeamError, SuperposedResponse,
};

/// How the total antenna count is shared between receivers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AntennaAllocation {
    /// Every receiver gets `total / receivers` antennas; the remainder is not
    /// used (but is reported by [`BeamConfiguration::dropped_antennas`]).
    #[default]
    FloorDrop,

    /// As with `FloorDrop`, but the remainder is handed out one antenna at a
    /// time to the first receivers, so every antenna is used.
    Redistribute,
}

impl AntennaAllocation {
    /// The sub-array size for each of `receivers` receivers, and the number of
    /// antennas left unused.
    fn split(self, total: usize, receivers: usize) -> (Vec<usize>, usize) {
        let floor = total / receivers;
        let remainder = total % receivers;
        match self {
            AntennaAllocation::FloorDrop => (vec![floor; receivers], remainder),
            AntennaAllocation::Redistribute => (
                (0..receivers)
                    .map(|i| if i < remainder { floor + 1 } else { floor })
                    .collect(),
                0,
            ),
        }
    }
}

/// Builds [`BeamConfiguration`]s. This holds everything that would otherwise
/// be an ambient constant: the speed of light, the default operating
/// frequency and the azimuth sweep that all responses are sampled over.
#[derive(Debug, Clone)]
pub struct BeamComposer {
    /// \[m/s\]
    speed_of_light: f64,

    /// The frequency used by [`BeamComposer::build_at_default_frequency`]
    /// \[Hz\].
    default_freq_hz: f64,

    sweep: Arc<AzimuthSweep>,

    allocation: AntennaAllocation,
}

impl Default for BeamComposer {
    fn default() -> Self {
        BeamComposer {
            speed_of_light: SPEED_OF_LIGHT,
            default_freq_hz: DEFAULT_FREQUENCY_HZ,
            sweep: Arc::new(AzimuthSweep::default()),
            allocation: AntennaAllocation::default(),
        }
    }
}

impl BeamComposer {
    /// Create a new [`BeamComposer`] with the [reference](SPEED_OF_LIGHT)
    /// speed of light, a [3 GHz](DEFAULT_FREQUENCY_HZ) default frequency and a
    /// 1-degree azimuth sweep.
    pub fn new() -> BeamComposer {
        BeamComposer::default()
    }

    /// Create a new [`BeamComposer`] with custom physics and sweep resolution.
    pub fn new_custom(
        speed_of_light: f64,
        default_freq_hz: f64,
        sweep_samples: usize,
    ) -> Result<BeamComposer, BeamError> {
        Ok(BeamComposer {
            speed_of_light: check_positive(speed_of_light, BeamError::NonPositiveSpeedOfLight)?,
            default_freq_hz: check_positive(default_freq_hz, BeamError::NonPositiveFrequency)?,
            sweep: Arc::new(AzimuthSweep::new(sweep_samples)?),
            allocation: AntennaAllocation::default(),
        })
    }

    /// Use a different [`AntennaAllocation`] policy.
    pub fn with_allocation(mut self, allocation: AntennaAllocation) -> BeamComposer {
        self.allocation = allocation;
        self
    }

    pub fn speed_of_light(&self) -> f64 {
        self.speed_of_light
    }

    pub fn default_freq_hz(&self) -> f64 {
        self.default_freq_hz
    }

    pub fn allocation(&self) -> AntennaAllocation {
        self.allocation
    }

    pub fn sweep(&self) -> &Arc<AzimuthSweep> {
        &self.sweep
    }

    /// Split `total_antennas` across one sub-array per steering angle and
    /// synthesize each sub-array's response. The responses are in the same
    /// order as `steering_angles_deg`.
    ///
    /// If there are more angles than antennas, some (or all) sub-arrays have
    /// no antennas and their responses are all zeros. This isn't treated as an
    /// error, but it's unlikely to be what you want.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimo_beam::BeamComposer;
    ///
    /// let composer = BeamComposer::new();
    /// let config = composer.build(13, &[135.0, 90.0, 45.0], 3e9).unwrap();
    /// assert_eq!(config.antennas_per_receiver(), 4);
    /// assert_eq!(config.dropped_antennas(), 1);
    /// assert_eq!(config.responses().len(), 3);
    /// ```
    pub fn build(
        &self,
        total_antennas: usize,
        steering_angles_deg: &[f64],
        freq_hz: f64,
    ) -> Result<BeamConfiguration, BeamError> {
        if steering_angles_deg.is_empty() {
            return Err(BeamError::NoSteeringAngles);
        }
        if total_antennas == 0 {
            return Err(BeamError::ZeroAntennas);
        }

        let num_receivers = steering_angles_deg.len();
        let antennas_per_receiver = total_antennas / num_receivers;
        let (sub_array_sizes, dropped) = self.allocation.split(total_antennas, num_receivers);
        let geometry =
            ArrayGeometry::from_frequency(antennas_per_receiver, freq_hz, self.speed_of_light)?;
        debug!(
            "{num_receivers} receivers, {antennas_per_receiver} antennas each ({dropped} dropped), wavelength {} m",
            geometry.wavelength()
        );
        if sub_array_sizes.iter().any(|&n| n == 0) {
            warn!(
                "Only {total_antennas} antennas for {num_receivers} receivers; some sub-arrays are empty"
            );
        }

        let steering_angles_rad: Vec<f64> =
            steering_angles_deg.iter().map(|&deg| deg * DEG_TO_RAD).collect();
        let responses: Vec<ArrayResponse> = steering_angles_rad
            .par_iter()
            .zip(sub_array_sizes.par_iter())
            .map(|(&steering_rad, &num_antennas)| {
                trace!("Synthesizing {num_antennas} antennas toward {steering_rad} rad");
                geometry
                    .with_antenna_count(num_antennas)
                    .response(steering_rad, &self.sweep)
            })
            .collect();

        Ok(BeamConfiguration {
            total_antennas,
            steering_angles_deg: steering_angles_deg.to_vec(),
            steering_angles_rad,
            antennas_per_receiver,
            sub_array_sizes,
            dropped,
            geometry,
            responses,
            sweep: Arc::clone(&self.sweep),
        })
    }

    /// [`BeamComposer::build`] at this composer's default frequency.
    pub fn build_at_default_frequency(
        &self,
        total_antennas: usize,
        steering_angles_deg: &[f64],
    ) -> Result<BeamConfiguration, BeamError> {
        self.build(total_antennas, steering_angles_deg, self.default_freq_hz)
    }
}

/// A set of steered sub-arrays, one per receiver, sharing one array layout.
/// Nothing here changes after construction.
#[derive(Debug, Clone)]
pub struct BeamConfiguration {
    total_antennas: usize,
    steering_angles_deg: Vec<f64>,
    steering_angles_rad: Vec<f64>,

    /// `total_antennas / receivers`, rounded down.
    antennas_per_receiver: usize,

    /// The number of antennas each sub-array actually used. These are all
    /// `antennas_per_receiver` unless the remainder was redistributed.
    sub_array_sizes: Vec<usize>,

    /// Antennas not assigned to any sub-array.
    dropped: usize,

    /// The layout shared by all sub-arrays, with `antennas_per_receiver`
    /// antennas.
    geometry: ArrayGeometry,

    responses: Vec<ArrayResponse>,
    sweep: Arc<AzimuthSweep>,
}

impl BeamConfiguration {
    pub fn total_antenna_count(&self) -> usize {
        self.total_antennas
    }

    pub fn receiver_count(&self) -> usize {
        self.steering_angles_deg.len()
    }

    pub fn steering_angles_deg(&self) -> &[f64] {
        &self.steering_angles_deg
    }

    pub fn steering_angles_rad(&self) -> &[f64] {
        &self.steering_angles_rad
    }

    pub fn antennas_per_receiver(&self) -> usize {
        self.antennas_per_receiver
    }

    pub fn sub_array_sizes(&self) -> &[usize] {
        &self.sub_array_sizes
    }

    /// How many antennas were left out by the integer division.
    pub fn dropped_antennas(&self) -> usize {
        self.dropped
    }

    pub fn geometry(&self) -> &ArrayGeometry {
        &self.geometry
    }

    /// One response per receiver, in the order the steering angles were given.
    pub fn responses(&self) -> &[ArrayResponse] {
        &self.responses
    }

    pub fn sweep(&self) -> &AzimuthSweep {
        &self.sweep
    }

    /// Combine all of this configuration's responses with [`superpose`]. This
    /// is recalculated every time it's called.
    pub fn superpose(&self) -> SuperposedResponse {
        superpose_inner(&self.responses)
    }
}

/// Average `responses` element-wise, each with a weight of `1 / len`.
///
/// This is a plain superposition for looking at, not an optimal combiner.
/// All responses must have the same length.
///
/// # Examples
///
/// ```
/// use mimo_beam::{superpose, BeamComposer};
///
/// let config = BeamComposer::new().build(12, &[135.0, 90.0, 45.0], 3e9).unwrap();
/// let combined = superpose(config.responses()).unwrap();
/// assert_eq!(combined.len(), 360);
/// assert!(superpose(&[]).is_err());
/// ```
pub fn superpose(responses: &[ArrayResponse]) -> Result<SuperposedResponse, BeamError> {
    let first = responses.first().ok_or(BeamError::NoResponses)?;
    if let Some(bad) = responses.iter().find(|r| r.len() != first.len()) {
        return Err(BeamError::ResponseLengthMismatch {
            expected: first.len(),
            got: bad.len(),
        });
    }
    Ok(superpose_inner(responses))
}

/// Helper function. `responses` must be non-empty and all the same length.
fn superpose_inner(responses: &[ArrayResponse]) -> SuperposedResponse {
    let weight = 1.0 / responses.len() as f64;
    let mut result = Array1::<c64>::zeros(responses[0].len());
    for response in responses {
        Zip::from(&mut result)
            .and(response.values())
            .for_each(|acc, &v| *acc += v * weight);
    }
    ArrayResponse::new(result)
}
