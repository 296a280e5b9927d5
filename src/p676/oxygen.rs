//! Dry air (oxygen) specific attenuation, one closed form per frequency band.
//!
//! All coefficients are from Rec. ITU-R P.676-9, Annex 2. Each function takes
//! a temperature `t` in °C, a frequency `freq` in GHz, and a pressure `p` in
//! hPa, and returns the specific attenuation in dB/km. They are only valid
//! inside their own band; use [`super::Band`] to pick one.

use super::core::{
    linear_interpolation, log_quadratic_interpolation, PhiCoefficients, ReducedState,
    ReferenceValue,
};

/// Auxiliary `phi` terms of the band below 54 GHz
const XI_BELOW_54: [PhiCoefficients; 3] = [
    PhiCoefficients::new(0.0717, -1.8132, 0.0156, -1.6515),
    PhiCoefficients::new(0.5146, -4.6368, -0.1921, -5.7416),
    PhiCoefficients::new(0.3414, -6.5851, 0.2130, -8.5854),
];

const R54: ReferenceValue =
    ReferenceValue::new(54., 2.192, PhiCoefficients::new(1.8286, 1.9487, 0.4051, 2.8509));
const R58: ReferenceValue =
    ReferenceValue::new(58., 12.59, PhiCoefficients::new(1.0045, 3.5610, 0.1588, 1.2834));
const R60: ReferenceValue =
    ReferenceValue::new(60., 15.0, PhiCoefficients::new(0.9003, 4.1335, 0.0427, 1.6088));
const R62: ReferenceValue =
    ReferenceValue::new(62., 14.28, PhiCoefficients::new(0.9886, 3.4176, 0.1827, 1.3429));
const R64: ReferenceValue =
    ReferenceValue::new(64., 6.819, PhiCoefficients::new(1.4320, 0.6258, 0.3177, 0.5914));
const R66: ReferenceValue =
    ReferenceValue::new(66., 1.908, PhiCoefficients::new(2.0717, 4.1404, 0.4910, 4.8718));

/// Auxiliary `phi` terms (ξ4 through ξ7) of the 66 to 120 GHz band
const XI_66_TO_120: [PhiCoefficients; 4] = [
    PhiCoefficients::new(-0.0112, 0.0092, -0.1033, -0.0009),
    PhiCoefficients::new(0.2705, -2.7192, -0.3016, -4.1033),
    PhiCoefficients::new(0.2445, -5.9191, 0.0422, -8.0719),
    PhiCoefficients::new(-0.1833, 6.5589, -0.2402, 6.131),
];

/// Additive correction term of the 120 to 350 GHz band
const XI_120_TO_350: PhiCoefficients = PhiCoefficients::new(3.211, -14.94, 1.583, -16.37);

/// Frequency of the isolated 118.75 GHz oxygen line
const LINE_118: f64 = 118.75;

/// Evaluate a reference value as an `(frequency, attenuation)` pair.
fn anchor(reference: &ReferenceValue, state: &ReducedState) -> (f64, f64) {
    (reference.frequency, reference.at(state))
}

/// Specific attenuation for `freq` <= 54 GHz.
pub(crate) fn dry_air_below_54(t: f64, freq: f64, p: f64) -> f64 {
    let state = ReducedState::new(t, p);
    let ReducedState { rp, rt } = state;
    let [xi1, xi2, xi3] = XI_BELOW_54.map(|coef| state.phi(&coef));

    let baseline = 7.2 * rt.powf(2.8) / (freq.powi(2) + 0.34 * rp.powi(2) * rt.powf(1.6));
    let resonance = 0.62 * xi3 / ((54. - freq).powf(1.16 * xi1) + 0.83 * xi2);

    (baseline + resonance) * freq.powi(2) * rp.powi(2) * 1e-3
}

/// Specific attenuation for 54 < `freq` <= 60 GHz.
pub(crate) fn dry_air_54_to_60(t: f64, freq: f64, p: f64) -> f64 {
    let state = ReducedState::new(t, p);
    log_quadratic_interpolation(
        freq,
        [R54, R58, R60].map(|reference| anchor(&reference, &state)),
    )
}

/// Specific attenuation for 60 < `freq` <= 62 GHz.
pub(crate) fn dry_air_60_to_62(t: f64, freq: f64, p: f64) -> f64 {
    let state = ReducedState::new(t, p);
    linear_interpolation(freq, anchor(&R60, &state), anchor(&R62, &state))
}

/// Specific attenuation for 62 < `freq` <= 66 GHz.
pub(crate) fn dry_air_62_to_66(t: f64, freq: f64, p: f64) -> f64 {
    let state = ReducedState::new(t, p);
    log_quadratic_interpolation(
        freq,
        [R62, R64, R66].map(|reference| anchor(&reference, &state)),
    )
}

/// Specific attenuation for 66 < `freq` <= 120 GHz.
pub(crate) fn dry_air_66_to_120(t: f64, freq: f64, p: f64) -> f64 {
    let state = ReducedState::new(t, p);
    let ReducedState { rp, rt } = state;
    let [xi4, xi5, xi6, xi7] = XI_66_TO_120.map(|coef| state.phi(&coef));

    let continuum = 3.02e-4 * rt.powf(3.5);
    let line_118 = 0.283 * rt.powf(3.8)
        / ((freq - LINE_118).powi(2) + 2.91 * rp.powi(2) * rt.powf(1.6));
    let wing_60 = 0.502 * xi6 * (1. - 0.016 * xi7 * (freq - 66.))
        / ((freq - 66.).powf(1.4346 * xi4) + 1.15 * xi5);

    (continuum + line_118 + wing_60) * freq.powi(2) * rp.powi(2) * 1e-3
}

/// Specific attenuation for 120 < `freq` <= 350 GHz.
pub(crate) fn dry_air_120_to_350(t: f64, freq: f64, p: f64) -> f64 {
    let state = ReducedState::new(t, p);
    let ReducedState { rp, rt } = state;
    let xi = -0.00306 * state.phi(&XI_120_TO_350);

    let continuum = 3.02e-4 / (1. + 1.9e-5 * freq.powf(1.5));
    let line_118 = 0.283 * rt.powf(0.3)
        / ((freq - LINE_118).powi(2) + 2.91 * rp.powi(2) * rt.powf(1.6));

    (continuum + line_118) * freq.powi(2) * rp.powi(2) * rt.powf(3.5) * 1e-3 + xi
}
