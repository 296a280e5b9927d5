//! Water vapor specific attenuation.
//!
//! A sum of nine resonance lines from Rec. ITU-R P.676-9, Annex 2. Unlike the
//! dry air model there is no band split and no frequency check.

use super::core::ReducedState;

const NLINES: usize = 9;

/// Which of the two line-width parameters (η1 or η2) a line is scaled by.
#[derive(Debug, Clone, Copy)]
enum Eta {
    One,
    Two,
}

/// How the line shape denominator is built.
#[derive(Debug, Clone, Copy)]
enum Broadening {
    /// `(f - fi)² + w·η²`
    Width(f64),
    /// `(f - fi)²` only
    Unbroadened,
    /// Same as [`Broadening::Width`], but the whole line shape is inside the
    /// temperature exponential. The published reference values are computed
    /// this way for the 325.153 GHz line.
    WidthInExponent(f64),
}

/// One water vapor resonance line.
#[derive(Debug, Clone, Copy)]
struct WaterLine {
    /// Line frequency in GHz
    frequency: f64,
    /// Line strength
    strength: f64,
    /// Coefficient of `(1 - rt)` in the temperature exponential
    temperature_exponent: f64,
    broadening: Broadening,
    eta: Eta,
    /// Reference frequency in GHz of the `g(f, fi)` shape correction, if
    /// the line has one
    symmetry: Option<f64>,
}

impl WaterLine {
    /// Contribution of this line, before the common `f² · rt^2.5 · ρ · 1e-4`
    /// scaling.
    fn term(&self, freq: f64, rt: f64, eta1: f64, eta2: f64) -> f64 {
        let eta = match self.eta {
            Eta::One => eta1,
            Eta::Two => eta2,
        };
        let detuning_sq = (freq - self.frequency).powi(2);
        let exponent = self.temperature_exponent * (1. - rt);

        let term = match self.broadening {
            Broadening::Width(w) => {
                self.strength * eta * exponent.exp() / (detuning_sq + w * eta.powi(2))
            }
            Broadening::Unbroadened => self.strength * eta * exponent.exp() / detuning_sq,
            Broadening::WidthInExponent(w) => {
                self.strength * eta * f64::exp(exponent / (detuning_sq + w * eta.powi(2)))
            }
        };

        match self.symmetry {
            Some(fi) => term * shape_correction(freq, fi),
            None => term,
        }
    }
}

/// The water vapor lines.
///
/// The 22.235 GHz line is corrected with `g(f, 22)`, not `g(f, 22.235)`.
const LINES: [WaterLine; NLINES] = [
    WaterLine {
        frequency: 22.235,
        strength: 3.98,
        temperature_exponent: 2.23,
        broadening: Broadening::Width(9.42),
        eta: Eta::One,
        symmetry: Some(22.),
    },
    WaterLine {
        frequency: 183.32,
        strength: 11.96,
        temperature_exponent: 0.7,
        broadening: Broadening::Width(11.14),
        eta: Eta::One,
        symmetry: None,
    },
    WaterLine {
        frequency: 321.226,
        strength: 0.081,
        temperature_exponent: 6.44,
        broadening: Broadening::Width(6.29),
        eta: Eta::One,
        symmetry: None,
    },
    WaterLine {
        frequency: 325.153,
        strength: 3.66,
        temperature_exponent: 1.6,
        broadening: Broadening::WidthInExponent(9.22),
        eta: Eta::One,
        symmetry: None,
    },
    WaterLine {
        frequency: 380.,
        strength: 25.37,
        temperature_exponent: 1.09,
        broadening: Broadening::Unbroadened,
        eta: Eta::One,
        symmetry: None,
    },
    WaterLine {
        frequency: 448.,
        strength: 17.4,
        temperature_exponent: 1.46,
        broadening: Broadening::Unbroadened,
        eta: Eta::One,
        symmetry: None,
    },
    WaterLine {
        frequency: 557.,
        strength: 844.6,
        temperature_exponent: 0.17,
        broadening: Broadening::Unbroadened,
        eta: Eta::One,
        symmetry: Some(557.),
    },
    WaterLine {
        frequency: 752.,
        strength: 290.,
        temperature_exponent: 0.41,
        broadening: Broadening::Unbroadened,
        eta: Eta::One,
        symmetry: Some(752.),
    },
    WaterLine {
        frequency: 1780.,
        strength: 8.3328e4,
        temperature_exponent: 0.99,
        broadening: Broadening::Unbroadened,
        eta: Eta::Two,
        symmetry: Some(1780.),
    },
];

/// Line shape correction `g(f, fi) = 1 + ((f - fi) / (f + fi))²`.
fn shape_correction(freq: f64, fi: f64) -> f64 {
    1. + ((freq - fi) / (freq + fi)).powi(2)
}

/// Water vapor specific attenuation.
///
/// For a frequency `freq` in GHz, a temperature `t` in °C, a pressure `p` in
/// hPa, and a water vapor density `rho` in g/m³, compute the water vapor
/// specific attenuation in dB/km.
///
/// Nothing is checked. A frequency exactly on one of the unbroadened lines
/// (380, 448, 557, 752, or 1780 GHz) divides by zero.
pub(crate) fn water_vapor(t: f64, freq: f64, p: f64, rho: f64) -> f64 {
    let ReducedState { rp, rt } = ReducedState::new(t, p);

    let eta1 = 0.955 * rp * rt.powf(0.68) + 0.006 * rho;
    let eta2 = 0.735 * rp * rt.powf(0.5) + 0.0353 * rt.powi(4) * rho;

    let sum: f64 = LINES
        .iter()
        .map(|line| line.term(freq, rt, eta1, eta2))
        .sum();

    sum * freq.powi(2) * rt.powf(2.5) * rho * 1e-4
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn no_vapor_no_attenuation() {
        assert_abs_diff_eq!(water_vapor(15., 22.235, 1013., 0.), 0.);
    }

    #[test]
    fn line_22_term_peaks_on_line() {
        let line = &LINES[0];
        let on_line = line.term(22.235, 1., 1., 1.);
        for freq in [15., 20., 22., 22.5, 25., 30.] {
            assert!(line.term(freq, 1., 1., 1.) < on_line, "{freq} GHz");
        }
    }

    #[test]
    fn shape_correction_is_one_on_line() {
        assert_abs_diff_eq!(shape_correction(557., 557.), 1.);
        assert!(shape_correction(10., 557.) > 1.);
    }
}
