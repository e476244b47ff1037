use crate::domain::pressure::{Altitude, Pressure};

/// A sensor that can produce an absolute pressure, and from it a
/// barometric altitude against the sensor's sea-level reference.
pub trait PressureSensor {
    type Error;

    fn pressure(&mut self) -> Result<Pressure, Self::Error>;

    fn altitude(&mut self) -> Result<Altitude, Self::Error>;
}
