use crate::domain::temperature::{Temperature, TemperatureScale};

/// A sensor that can produce a temperature on scale `S`.
///
/// Implementations block for the duration of one acquisition.
pub trait TemperatureSensor<S: TemperatureScale> {
    type Error;

    fn temperature(&mut self) -> Result<Temperature<S>, Self::Error>;
}
