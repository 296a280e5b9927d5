//! Specific attenuation by atmospheric gases, Rec. ITU-R P.676-9 Annex 2
//!
//! <https://www.itu.int/dms_pubrec/itu-r/rec/p/R-REC-P.676-9-201202-S!!PDF-E.pdf>

mod core;
mod oxygen;
mod water_vapor;


pub use self::core::ReducedState;
use self::{
    oxygen::{
        dry_air_120_to_350, dry_air_54_to_60, dry_air_60_to_62, dry_air_62_to_66,
        dry_air_66_to_120, dry_air_below_54,
    },
    water_vapor::water_vapor,
};
use crate::error::AttenuationError;

/// Lower frequency bound in GHz of the dry air model (exclusive)
pub const MIN_FREQUENCY: f64 = 0.;

/// Upper frequency bound in GHz of the dry air model (inclusive)
pub const MAX_FREQUENCY: f64 = 350.;

/// The frequency bands of the dry air model, each with its own closed form.
///
/// Every band includes its upper bound and excludes its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// (0, 54] GHz
    UpTo54Ghz,
    /// (54, 60] GHz, log-quadratic interpolation across 54, 58, and 60 GHz
    UpTo60Ghz,
    /// (60, 62] GHz, linear interpolation between 60 and 62 GHz
    UpTo62Ghz,
    /// (62, 66] GHz, log-quadratic interpolation across 62, 64, and 66 GHz
    UpTo66Ghz,
    /// (66, 120] GHz
    UpTo120Ghz,
    /// (120, 350] GHz
    UpTo350Ghz,
}

impl Band {
    /// All bands, in order of increasing frequency.
    pub const ALL: [Band; 6] = [
        Band::UpTo54Ghz,
        Band::UpTo60Ghz,
        Band::UpTo62Ghz,
        Band::UpTo66Ghz,
        Band::UpTo120Ghz,
        Band::UpTo350Ghz,
    ];

    /// Find the band for a frequency in GHz.
    ///
    /// Fails if `frequency <= 0` or `frequency > 350` (or is NaN).
    pub fn for_frequency(frequency: f64) -> Result<Self, AttenuationError> {
        // Written so that NaN is rejected too
        if !(frequency > MIN_FREQUENCY && frequency <= MAX_FREQUENCY) {
            return Err(AttenuationError::InvalidFrequency { frequency });
        }

        // The order matters: the first satisfied upper bound wins
        let band = match frequency {
            f if f <= 54. => Band::UpTo54Ghz,
            f if f <= 60. => Band::UpTo60Ghz,
            f if f <= 62. => Band::UpTo62Ghz,
            f if f <= 66. => Band::UpTo66Ghz,
            f if f <= 120. => Band::UpTo120Ghz,
            _ => Band::UpTo350Ghz,
        };
        Ok(band)
    }

    /// The `(lower, upper)` frequency bounds in GHz. The lower bound is
    /// exclusive and the upper bound inclusive.
    pub fn frequency_range(self) -> (f64, f64) {
        match self {
            Band::UpTo54Ghz => (MIN_FREQUENCY, 54.),
            Band::UpTo60Ghz => (54., 60.),
            Band::UpTo62Ghz => (60., 62.),
            Band::UpTo66Ghz => (62., 66.),
            Band::UpTo120Ghz => (66., 120.),
            Band::UpTo350Ghz => (120., MAX_FREQUENCY),
        }
    }

    /// Evaluate this band's formula for a temperature in °C, a frequency in
    /// GHz, and a pressure in hPa, giving the dry air specific attenuation in
    /// dB/km.
    ///
    /// The frequency is not checked against the band. Outside of it the
    /// result is meaningless; use [`air_attenuation`] unless the band is
    /// already known.
    pub fn specific_attenuation(self, temperature: f64, frequency: f64, pressure: f64) -> f64 {
        let formula: fn(f64, f64, f64) -> f64 = match self {
            Band::UpTo54Ghz => dry_air_below_54,
            Band::UpTo60Ghz => dry_air_54_to_60,
            Band::UpTo62Ghz => dry_air_60_to_62,
            Band::UpTo66Ghz => dry_air_62_to_66,
            Band::UpTo120Ghz => dry_air_66_to_120,
            Band::UpTo350Ghz => dry_air_120_to_350,
        };
        formula(temperature, frequency, pressure)
    }
}

/// Dry air specific attenuation.
///
/// For a frequency `frequency` in GHz, a temperature `temperature` in °C, and
/// a pressure `pressure` in hPa, compute the specific attenuation due to dry
/// air in dB/km. Only the frequency is checked, and it must be in (0, 350].
pub fn air_attenuation(
    frequency: f64,
    temperature: f64,
    pressure: f64,
) -> Result<f64, AttenuationError> {
    let band = Band::for_frequency(frequency)?;
    Ok(band.specific_attenuation(temperature, frequency, pressure))
}

/// Water vapor specific attenuation.
///
/// For a frequency `frequency` in GHz, a temperature `temperature` in °C, a
/// pressure `pressure` in hPa, and a water vapor density
/// `water_vapor_density` in g/m³, compute the specific attenuation due to
/// water vapor in dB/km.
///
/// Unlike [`air_attenuation`], none of the inputs are checked.
pub fn water_attenuation(
    frequency: f64,
    temperature: f64,
    pressure: f64,
    water_vapor_density: f64,
) -> f64 {
    water_vapor(temperature, frequency, pressure, water_vapor_density)
}

/// Total gaseous specific attenuation in dB/km, the sum of
/// [`air_attenuation`] and [`water_attenuation`].
pub fn total_attenuation(
    frequency: f64,
    temperature: f64,
    pressure: f64,
    water_vapor_density: f64,
) -> Result<f64, AttenuationError> {
    let air = air_attenuation(frequency, temperature, pressure)?;
    Ok(air + water_attenuation(frequency, temperature, pressure, water_vapor_density))
}

/// Atmospheric conditions at a single point, for a single frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericObservation {
    /// Frequency in GHz
    pub frequency: f64,
    /// Temperature in °C
    pub temperature: f64,
    /// Pressure in hPa
    pub pressure: f64,
    /// Water vapor density in g/m³. Only used by the water vapor model.
    pub water_vapor_density: f64,
}

impl AtmosphericObservation {
    /// Dry air specific attenuation in dB/km; see [`air_attenuation`].
    pub fn air_attenuation(&self) -> Result<f64, AttenuationError> {
        air_attenuation(self.frequency, self.temperature, self.pressure)
    }

    /// Water vapor specific attenuation in dB/km; see [`water_attenuation`].
    pub fn water_attenuation(&self) -> f64 {
        water_attenuation(
            self.frequency,
            self.temperature,
            self.pressure,
            self.water_vapor_density,
        )
    }

    /// Total gaseous specific attenuation in dB/km; see
    /// [`total_attenuation`].
    pub fn total_attenuation(&self) -> Result<f64, AttenuationError> {
        total_attenuation(
            self.frequency,
            self.temperature,
            self.pressure,
            self.water_vapor_density,
        )
    }

    /// The reduced pressure and temperature for these conditions.
    pub fn reduced_state(&self) -> ReducedState {
        ReducedState::new(self.temperature, self.pressure)
    }
}
