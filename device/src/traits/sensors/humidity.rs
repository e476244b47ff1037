/// A sensor that can produce a relative humidity in percent.
pub trait HumiditySensor {
    type Error;

    fn relative_humidity(&mut self) -> Result<f32, Self::Error>;
}
