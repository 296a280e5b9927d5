//! Specific attenuation by atmospheric gases
//!
//! Implements the approximate dry air and water vapor models of Rec. ITU-R
//! P.676-9 Annex 2, for frequencies up to 350 GHz. The point models live in
//! [`p676`] and are re-exported here; this module adds the batch interface
//! that evaluates many points and frequencies in parallel.
//!
//! Units are fixed throughout: frequency in GHz, temperature in °C, pressure
//! in hPa, water vapor density in g/m³, and attenuation in dB/km.

pub mod error;
pub mod p676;

pub use error::AttenuationError;
pub use p676::{
    air_attenuation, total_attenuation, water_attenuation, AtmosphericObservation, Band,
    ReducedState, MAX_FREQUENCY, MIN_FREQUENCY,
};

use log::{debug, info};
use ndarray::{Array2, ArrayView1, Axis};
use rayon::prelude::*;

/// Options for [`compute_spectra`].
#[derive(Debug, Clone, Default)]
pub struct SpectraOptions {
    /// Number of worker threads, or `None` to let rayon choose
    pub num_threads: Option<usize>,
}

/// Gaseous attenuation spectra.
///
/// This is just a container of multiple arrays, each dimensioned as
/// (`num_points`, `num_freq`) and in dB/km.
#[derive(Debug, Clone)]
pub struct AttenuationSpectra {
    /// Dry air specific attenuation
    pub air: Array2<f64>,
    /// Water vapor specific attenuation
    pub water: Array2<f64>,
    /// Sum of the dry air and water vapor specific attenuation
    pub total: Array2<f64>,
}

impl AttenuationSpectra {
    fn new(num_points: usize, num_freq: usize) -> Self {
        Self {
            air: Array2::zeros([num_points, num_freq]),
            water: Array2::zeros([num_points, num_freq]),
            total: Array2::zeros([num_points, num_freq]),
        }
    }
}

/// Spectra for a single point, as a function of frequency index.
struct PointSpectra {
    air: Vec<f64>,
    water: Vec<f64>,
    total: Vec<f64>,
}

/// Compute the gaseous attenuation at many points and frequencies.
///
/// `frequency` is in GHz and has a length of `num_freq`. Each one must be in
/// (0, 350] GHz.
///
/// The following have a length of `num_points`:
///
/// `temperature`: temperature in °C
///
/// `pressure`: pressure in hPa
///
/// `water_vapor_density`: water vapor density in g/m³
///
/// Each point is evaluated independently; this is not a path integral. The
/// returned spectra are each dimensioned as (`num_points`, `num_freq`).
pub fn compute_spectra(
    frequency: &[f64],
    temperature: &[f64],
    pressure: &[f64],
    water_vapor_density: &[f64],
    options: &SpectraOptions,
) -> Result<AttenuationSpectra, AttenuationError> {
    let num_freq = frequency.len();
    let num_points = temperature.len();

    if frequency.is_empty()
        || [pressure.len(), water_vapor_density.len()]
            .iter()
            .any(|&d| d != num_points)
    {
        return Err(AttenuationError::InconsistentInputs);
    }

    // Validate every frequency up front, so the per-point work can't fail
    let bands = frequency
        .iter()
        .map(|&freq| Band::for_frequency(freq))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("inputs are consistent");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.num_threads.unwrap_or(0))
        .build()?;

    info!("Computing gaseous attenuation for {num_points} points and {num_freq} frequencies");

    let mut results = Vec::new();
    pool.install(|| {
        (0..num_points)
            .into_par_iter()
            .map(|point| {
                let (t, p, rho) = (temperature[point], pressure[point], water_vapor_density[point]);
                let air: Vec<f64> = bands
                    .iter()
                    .zip(frequency)
                    .map(|(band, &freq)| band.specific_attenuation(t, freq, p))
                    .collect();
                let water: Vec<f64> = frequency
                    .iter()
                    .map(|&freq| water_attenuation(freq, t, p, rho))
                    .collect();
                let total = air.iter().zip(&water).map(|(air, water)| air + water).collect();

                PointSpectra { air, water, total }
            })
            .collect_into_vec(&mut results);
    });

    // Copy the intermediate results to the output arrays
    debug!("copying attenuation spectra");
    let mut output = AttenuationSpectra::new(num_points, num_freq);
    for (index, spectra) in results.into_iter().enumerate() {
        let PointSpectra { air, water, total } = spectra;

        let rhs = ArrayView1::from(air.as_slice());
        output.air.index_axis_mut(Axis(0), index).assign(&rhs);

        let rhs = ArrayView1::from(water.as_slice());
        output.water.index_axis_mut(Axis(0), index).assign(&rhs);

        let rhs = ArrayView1::from(total.as_slice());
        output.total.index_axis_mut(Axis(0), index).assign(&rhs);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn spectra_match_point_model() {
        let frequency = [10., 22.235, 60., 118.75, 200.];
        let temperature = [13., 15., -5.];
        let pressure = [1000., 1013., 900.];
        let rho = [7.5, 0., 3.];
        let options = SpectraOptions {
            num_threads: Some(2),
        };

        let spectra = compute_spectra(&frequency, &temperature, &pressure, &rho, &options).unwrap();
        assert_eq!(spectra.air.dim(), (3, 5));
        assert_eq!(spectra.water.dim(), (3, 5));
        assert_eq!(spectra.total.dim(), (3, 5));

        for point in 0..3 {
            for (index, &freq) in frequency.iter().enumerate() {
                let obs = AtmosphericObservation {
                    frequency: freq,
                    temperature: temperature[point],
                    pressure: pressure[point],
                    water_vapor_density: rho[point],
                };
                assert_abs_diff_eq!(spectra.air[[point, index]], obs.air_attenuation().unwrap());
                assert_abs_diff_eq!(spectra.water[[point, index]], obs.water_attenuation());
                assert_abs_diff_eq!(
                    spectra.total[[point, index]],
                    obs.total_attenuation().unwrap()
                );
            }
        }

        // A dry point has no water vapor attenuation
        assert!(spectra.water.row(1).iter().all(|&w| w == 0.));
    }

    #[test]
    fn spectra_reject_bad_inputs() {
        let options = SpectraOptions::default();

        let result = compute_spectra(&[], &[15.], &[1013.], &[7.5], &options);
        assert!(matches!(result, Err(AttenuationError::InconsistentInputs)));

        let result = compute_spectra(&[60.], &[15., 20.], &[1013.], &[7.5], &options);
        assert!(matches!(result, Err(AttenuationError::InconsistentInputs)));

        let result = compute_spectra(&[60., 400.], &[15.], &[1013.], &[7.5], &options);
        assert!(matches!(
            result,
            Err(AttenuationError::InvalidFrequency { frequency }) if frequency == 400.
        ));
    }

    #[test]
    fn no_points_gives_empty_spectra() {
        let spectra =
            compute_spectra(&[60.], &[], &[], &[], &SpectraOptions::default()).unwrap();
        assert_eq!(spectra.air.dim(), (0, 1));
    }
}
