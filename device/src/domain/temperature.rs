//! Types and traits related to temperature.

use core::fmt::{Debug, Display, Formatter};
use core::marker::PhantomData;

/// Trait representing a temperature scale.
pub trait TemperatureScale: Send {
    const LETTER: char;
}

/// Discriminant for the _Kelvin_ temperature scale.
#[derive(Clone)]
pub struct Kelvin;

impl TemperatureScale for Kelvin {
    const LETTER: char = 'K';
}

impl Debug for Kelvin {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("°K")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Kelvin {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "°K");
    }
}

/// Discriminant for the _Celsius_ temperature scale.
#[derive(Clone)]
pub struct Celsius;

impl TemperatureScale for Celsius {
    const LETTER: char = 'C';
}

impl Debug for Celsius {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("°C")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Celsius {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "°C");
    }
}

/// Discriminant for the _Fahrenheit_ temperature scale.
#[derive(Clone)]
pub struct Fahrenheit;

impl TemperatureScale for Fahrenheit {
    const LETTER: char = 'F';
}

impl Debug for Fahrenheit {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("°F")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Fahrenheit {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "°F");
    }
}

/// A temperature value with its associated scale.
pub struct Temperature<S: TemperatureScale> {
    value: f32,
    _marker: PhantomData<S>,
}

impl<S: TemperatureScale> Temperature<S> {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn raw_value(&self) -> f32 {
        self.value
    }
}

impl<S: TemperatureScale> Clone for Temperature<S> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            _marker: PhantomData,
        }
    }
}

impl<S: TemperatureScale> Copy for Temperature<S> {}

impl<S: TemperatureScale> PartialEq for Temperature<S> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<S: TemperatureScale> Debug for Temperature<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}°{}", &self.value, S::LETTER)
    }
}

impl<S: TemperatureScale> Display for Temperature<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.value, f)?;
        write!(f, "°{}", S::LETTER)
    }
}

#[cfg(feature = "defmt")]
impl<S: TemperatureScale> defmt::Format for Temperature<S> {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{}°{}", &self.value, S::LETTER)
    }
}

impl Temperature<Celsius> {
    pub fn into_fahrenheit(self) -> Temperature<Fahrenheit> {
        Temperature::new(self.value * 1.8 + 32.0)
    }

    pub fn into_kelvin(self) -> Temperature<Kelvin> {
        Temperature::new(self.value + 273.15)
    }
}

impl From<f32> for Temperature<Celsius> {
    fn from(value: f32) -> Temperature<Celsius> {
        Temperature::new(value)
    }
}

/// Runtime scale selector for sensors that report in a caller-chosen unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Convert a Celsius value into this unit.
    pub fn from_celsius(&self, celsius: f32) -> f32 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 1.8 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TemperatureUnit {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            TemperatureUnit::Celsius => defmt::write!(f, "°C"),
            TemperatureUnit::Fahrenheit => defmt::write!(f, "°F"),
            TemperatureUnit::Kelvin => defmt::write!(f, "°K"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn raw_tenths_decode_to_celsius() {
        // Sensors report tenths of a degree: 235 is 23.5°C.
        let celsius = Temperature::<Celsius>::new(235.0 / 10.0);
        assert_eq!(celsius.raw_value(), 23.5);
    }

    #[test]
    fn celsius_converts_to_fahrenheit_and_kelvin() {
        let celsius: Temperature<Celsius> = 23.5.into();
        assert!(close(celsius.into_fahrenheit().raw_value(), 74.3));
        assert!(close(celsius.into_kelvin().raw_value(), 296.65));
    }

    #[test]
    fn unit_selector_matches_typed_conversions() {
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
        assert_eq!(TemperatureUnit::Celsius.from_celsius(23.5), 23.5);
        assert!(close(TemperatureUnit::Fahrenheit.from_celsius(23.5), 74.3));
        assert!(close(TemperatureUnit::Kelvin.from_celsius(23.5), 296.65));
    }

    #[test]
    fn scale_letters() {
        assert_eq!(Celsius::LETTER, 'C');
        assert_eq!(Fahrenheit::LETTER, 'F');
        assert_eq!(Kelvin::LETTER, 'K');
    }
}
