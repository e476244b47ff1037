//! Types related to absolute pressure and barometric altitude.

use crate::domain::temperature::{Celsius, Temperature};
use core::fmt::{Debug, Formatter};

/// Mean sea-level pressure in pascals, the default altitude reference.
pub const STANDARD_SEA_LEVEL_PA: f32 = 101_325.0;

/// An absolute pressure in pascals.
#[derive(Copy, Clone, PartialEq)]
pub struct Pressure(f32);

impl Pressure {
    pub const fn from_pascals(value: f32) -> Self {
        Self(value)
    }

    pub fn pascals(&self) -> f32 {
        self.0
    }

    pub fn hectopascals(&self) -> f32 {
        self.0 / 100.0
    }

    /// Barometric altitude of this pressure relative to a sea-level
    /// reference, per the international barometric formula.
    pub fn altitude_above(&self, sea_level: Pressure) -> Altitude {
        let ratio = self.0 / sea_level.0;
        Altitude(44330.0 * (1.0 - libm::powf(ratio, 1.0 / 5.255)))
    }
}

impl Debug for Pressure {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} Pa", &self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pressure {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{} Pa", &self.0);
    }
}

/// A height above the sea-level reference, in meters.
#[derive(Copy, Clone, PartialEq)]
pub struct Altitude(f32);

impl Altitude {
    pub fn meters(&self) -> f32 {
        self.0
    }
}

impl Debug for Altitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} m", &self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Altitude {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{} m", &self.0);
    }
}

/// One compensated barometric acquisition.
#[derive(Copy, Clone, Debug)]
pub struct BarometricAcquisition {
    pub temperature: Temperature<Celsius>,
    pub pressure: Pressure,
}

#[cfg(feature = "defmt")]
impl defmt::Format for BarometricAcquisition {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "BarometricAcquisition(temperature: {}, pressure: {})",
            &self.temperature,
            &self.pressure
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altitude_is_zero_at_the_reference() {
        let reference = Pressure::from_pascals(STANDARD_SEA_LEVEL_PA);
        let altitude = reference.altitude_above(reference);
        assert!(altitude.meters().abs() < 1e-3);
    }

    #[test]
    fn altitude_decreases_as_pressure_increases() {
        let reference = Pressure::from_pascals(STANDARD_SEA_LEVEL_PA);
        let samples = [90_000.0, 95_000.0, 101_325.0, 103_000.0, 105_000.0];
        let mut previous = f32::MAX;
        for pascals in samples {
            let altitude = Pressure::from_pascals(pascals).altitude_above(reference);
            assert!(altitude.meters() < previous);
            previous = altitude.meters();
        }
    }

    #[test]
    fn unit_accessors() {
        let pressure = Pressure::from_pascals(101_325.0);
        assert_eq!(pressure.pascals(), 101_325.0);
        assert_eq!(pressure.hectopascals(), 1013.25);
    }
}
