//! Reduced atmospheric state and the shared `phi` shape function.

/// Reference sea-level pressure in hPa
const REFERENCE_PRESSURE: f64 = 1013.;

/// Reference temperature in K
const REFERENCE_TEMPERATURE: f64 = 288.;

/// Offset between °C and K as used by the curve fits (not 273.15)
const CELSIUS_TO_KELVIN: f64 = 273.;

/// The dimensionless pressure and temperature ratios that every formula of
/// the model is written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedState {
    /// Relative pressure, `p / 1013`
    pub rp: f64,
    /// Relative inverse temperature, `288 / (273 + t)`
    pub rt: f64,
}

impl ReducedState {
    /// Reduce a temperature `temperature` in °C and a pressure `pressure` in
    /// hPa.
    ///
    /// Nothing is checked: a temperature of -273 °C divides by zero.
    pub fn new(temperature: f64, pressure: f64) -> Self {
        Self {
            rp: pressure / REFERENCE_PRESSURE,
            rt: REFERENCE_TEMPERATURE / (CELSIUS_TO_KELVIN + temperature),
        }
    }

    /// Evaluate `rp^a · rt^b · exp(c·(1 - rp) + d·(1 - rt))`.
    pub(crate) fn phi(&self, coef: &PhiCoefficients) -> f64 {
        let PhiCoefficients { a, b, c, d } = *coef;
        self.rp.powf(a) * self.rt.powf(b) * f64::exp(c * (1. - self.rp) + d * (1. - self.rt))
    }
}

/// The `(a, b, c, d)` exponents of one `phi` term.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PhiCoefficients {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl PhiCoefficients {
    pub(crate) const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
}

/// A fitted attenuation value at one reference frequency, `multiplier · phi`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReferenceValue {
    /// Reference frequency in GHz
    pub(crate) frequency: f64,
    /// Attenuation in dB/km at standard conditions (`rp = rt = 1`)
    multiplier: f64,
    phi: PhiCoefficients,
}

impl ReferenceValue {
    pub(crate) const fn new(frequency: f64, multiplier: f64, phi: PhiCoefficients) -> Self {
        Self {
            frequency,
            multiplier,
            phi,
        }
    }

    /// Attenuation in dB/km at the reference frequency for this state.
    pub(crate) fn at(&self, state: &ReducedState) -> f64 {
        self.multiplier * state.phi(&self.phi)
    }
}

/// Linear interpolation between two reference values.
pub(crate) fn linear_interpolation(freq: f64, lower: (f64, f64), upper: (f64, f64)) -> f64 {
    let (f0, r0) = lower;
    let (f1, r1) = upper;
    r0 + (r1 - r0) * (freq - f0) / (f1 - f0)
}

/// Quadratic Lagrange interpolation in log space across three reference
/// values, given as `(frequency, attenuation)` pairs.
///
/// The result passes exactly through all three reference values.
pub(crate) fn log_quadratic_interpolation(freq: f64, points: [(f64, f64); 3]) -> f64 {
    let exponent: f64 = (0..3)
        .map(|i| {
            let (fi, ri) = points[i];
            let weight = (0..3).filter(|&j| j != i).fold(1., |weight, j| {
                let fj = points[j].0;
                weight * (freq - fj) / (fi - fj)
            });
            ri.ln() * weight
        })
        .sum();
    exponent.exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn standard_conditions_reduce_to_one() {
        let state = ReducedState::new(15., 1013.);
        assert_abs_diff_eq!(state.rp, 1.0);
        assert_abs_diff_eq!(state.rt, 1.0);

        // Any exponents give 1 at the reference state
        let phi = PhiCoefficients::new(0.3414, -6.5851, 0.2130, -8.5854);
        assert_abs_diff_eq!(state.phi(&phi), 1.0);
    }

    #[test]
    fn phi_shape() {
        let state = ReducedState { rp: 0.5, rt: 2.0 };
        let phi = PhiCoefficients::new(1., 2., 3., 4.);
        let expected = 0.5 * 4. * f64::exp(3. * 0.5 + 4. * -1.);
        assert_abs_diff_eq!(state.phi(&phi), expected, epsilon = 1e-12);
    }

    #[test]
    fn interpolation_hits_reference_points() {
        let points = [(54., 2.1), (58., 12.6), (60., 15.0)];
        for (f, r) in points {
            assert_abs_diff_eq!(log_quadratic_interpolation(f, points), r, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(
            linear_interpolation(61., (60., 15.0), (62., 14.0)),
            14.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn log_interpolation_weights() {
        // With three equal values the log-space weights must sum to one
        let points = [(62., 3.0), (64., 3.0), (66., 3.0)];
        assert_abs_diff_eq!(log_quadratic_interpolation(63.3, points), 3.0, epsilon = 1e-12);
    }
}
