//! BMP180 barometric pressure and temperature sensor.
//!
//! Acquisition is a two-step command/readout exchange on the control and
//! output registers, followed by the manufacturer's integer compensation
//! pipeline. The calibration EEPROM is read once at initialization, after
//! the identity register has been verified.

mod compensation;
mod mode;
pub mod register;

pub use mode::{InvalidMode, Oversampling};

use crate::domain::pressure::{Altitude, BarometricAcquisition, Pressure, STANDARD_SEA_LEVEL_PA};
use crate::domain::temperature::{Celsius, Temperature};
use crate::traits::i2c::I2cAddress;
use crate::traits::sensors::pressure::PressureSensor;
use crate::traits::sensors::temperature::TemperatureSensor;
use compensation::TemperatureState;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use register::calibration::Calibration;
use register::chip_id::{ChipId, BMP180_ID};
use register::ctrl_meas::CtrlMeas;
use register::out::Out;

/// Fixed 7-bit bus address of the BMP180.
pub const ADDR: u8 = 0x77;

// Temperature conversions always finish within the datasheet's 4.5 ms.
const TEMPERATURE_DELAY_MS: u32 = 5;

#[derive(Debug)]
pub enum Bmp180Error<E> {
    /// Bus transfer failed.
    I2c(E),
    /// The identity register did not report a BMP180.
    InvalidChipId(u8),
    /// Raw oversampling value outside the defined settings.
    InvalidMode(u8),
    /// Compensation requested before the calibration block was loaded.
    NotCalibrated,
}

impl<E> From<E> for Bmp180Error<E> {
    fn from(e: E) -> Bmp180Error<E> {
        Bmp180Error::I2c(e)
    }
}

/// Driver handle. Owns the bus and the delay provider for the duration of
/// the handle's life; at most one acquisition is in flight at a time.
pub struct Bmp180<I, D> {
    i2c: I,
    delay: D,
    address: I2cAddress,
    mode: Oversampling,
    calibration: Option<Calibration>,
    sea_level_pressure: f32,
}

impl<I, D> Bmp180<I, D>
where
    I: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I, delay: D) -> Self {
        Self {
            i2c,
            delay,
            address: I2cAddress::new(ADDR),
            mode: Oversampling::Standard,
            calibration: None,
            sea_level_pressure: STANDARD_SEA_LEVEL_PA,
        }
    }

    /// Verify the identity register and load the calibration block.
    ///
    /// Nothing is retried and no handle state changes on failure; the
    /// caller decides whether to call again.
    pub fn initialize(&mut self) -> Result<(), Bmp180Error<I::Error>> {
        let id = ChipId::read(self.address, &mut self.i2c)?;
        if id != BMP180_ID {
            warn!("unexpected chip id {}", id);
            return Err(Bmp180Error::InvalidChipId(id));
        }
        let calibration = Calibration::read(self.address, &mut self.i2c)?;
        debug!("calibration block loaded");
        self.calibration.replace(calibration);
        Ok(())
    }

    pub fn mode(&self) -> Oversampling {
        self.mode
    }

    /// Select the oversampling used by subsequent pressure conversions.
    pub fn set_mode(&mut self, mode: Oversampling) {
        self.mode = mode;
    }

    /// Select the oversampling from a raw register-style value, rejecting
    /// anything outside the defined settings.
    pub fn set_mode_raw(&mut self, raw: u8) -> Result<(), Bmp180Error<I::Error>> {
        match Oversampling::try_from(raw) {
            Ok(mode) => {
                self.mode = mode;
                Ok(())
            }
            Err(InvalidMode(value)) => Err(Bmp180Error::InvalidMode(value)),
        }
    }

    pub fn sea_level_pressure(&self) -> f32 {
        self.sea_level_pressure
    }

    /// Set the sea-level reference used by altitude estimation.
    /// 101325 Pa unless changed.
    pub fn set_sea_level_pressure(&mut self, pascals: f32) {
        self.sea_level_pressure = pascals;
    }

    /// Raw 16-bit temperature count.
    pub fn read_raw_temperature(&mut self) -> Result<i32, Bmp180Error<I::Error>> {
        CtrlMeas::start_temperature(self.address, &mut self.i2c)?;
        self.delay.delay_ms(TEMPERATURE_DELAY_MS);
        let raw = Out::read_u16(self.address, &mut self.i2c)?;
        Ok(raw as i32)
    }

    /// Raw pressure count, normalized for the current oversampling.
    pub fn read_raw_pressure(&mut self) -> Result<i32, Bmp180Error<I::Error>> {
        CtrlMeas::start_pressure(self.address, &mut self.i2c, self.mode)?;
        self.delay.delay_ms(self.mode.conversion_delay_ms());
        let raw = Out::read_u24(self.address, &mut self.i2c)?;
        Ok((raw >> self.mode.pressure_shift()) as i32)
    }

    /// Compensated temperature.
    pub fn temperature(&mut self) -> Result<Temperature<Celsius>, Bmp180Error<I::Error>> {
        let state = self.temperature_state()?;
        Ok(Temperature::new(state.celsius()))
    }

    /// Compensated pressure.
    pub fn pressure(&mut self) -> Result<Pressure, Bmp180Error<I::Error>> {
        Ok(self.acquire()?.pressure)
    }

    /// One full acquisition: a temperature conversion, then a pressure
    /// conversion compensated with the temperature stage's state.
    pub fn acquire(&mut self) -> Result<BarometricAcquisition, Bmp180Error<I::Error>> {
        let calibration = self.calibration()?;
        let state = self.temperature_state()?;
        let raw_pressure = self.read_raw_pressure()?;
        let pascals = compensation::pressure_pascals(state, raw_pressure, self.mode, &calibration);
        trace!("compensated acquisition: {} dC, {} Pa", state.deci_celsius(), pascals);
        Ok(BarometricAcquisition {
            temperature: Temperature::new(state.celsius()),
            pressure: Pressure::from_pascals(pascals as f32),
        })
    }

    /// Barometric altitude against the handle's sea-level reference.
    pub fn altitude(&mut self) -> Result<Altitude, Bmp180Error<I::Error>> {
        let pressure = self.pressure()?;
        let reference = Pressure::from_pascals(self.sea_level_pressure);
        Ok(pressure.altitude_above(reference))
    }

    fn calibration(&self) -> Result<Calibration, Bmp180Error<I::Error>> {
        self.calibration.ok_or(Bmp180Error::NotCalibrated)
    }

    fn temperature_state(&mut self) -> Result<TemperatureState, Bmp180Error<I::Error>> {
        let calibration = self.calibration()?;
        let raw = self.read_raw_temperature()?;
        Ok(TemperatureState::from_raw(raw, &calibration))
    }
}

impl<I, D> TemperatureSensor<Celsius> for Bmp180<I, D>
where
    I: I2c,
    D: DelayNs,
{
    type Error = Bmp180Error<I::Error>;

    fn temperature(&mut self) -> Result<Temperature<Celsius>, Self::Error> {
        Bmp180::temperature(self)
    }
}

impl<I, D> PressureSensor for Bmp180<I, D>
where
    I: I2c,
    D: DelayNs,
{
    type Error = Bmp180Error<I::Error>;

    fn pressure(&mut self) -> Result<Pressure, Self::Error> {
        Bmp180::pressure(self)
    }

    fn altitude(&mut self) -> Result<Altitude, Self::Error> {
        Bmp180::altitude(self)
    }
}
