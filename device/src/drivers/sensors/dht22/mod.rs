//! DHT22 humidity and temperature sensor on a single-wire line.
//!
//! The line is one open-drain pin: the host drives it for the start
//! signal, then releases it high and the device takes over. Bits are
//! decoded by fixed-offset sampling: after a bit's low-to-high transition
//! the line level is read at a fixed 40 us offset, and that level *is*
//! the bit. Pulse widths are never measured.
//!
//! Unlike the bare protocol, every line wait here is bounded: a silent or
//! disconnected device surfaces as [`Dht22Error::Timeout`] instead of
//! hanging the calling thread.

pub mod frame;

use crate::domain::temperature::{Celsius, Temperature, TemperatureUnit};
use crate::domain::SensorAcquisition;
use crate::traits::sensors::humidity::HumiditySensor;
use crate::traits::sensors::temperature::TemperatureSensor;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};
use frame::Frame;

// Host start signal: hold the line low at least 18 ms.
const START_LOW_MS: u32 = 18;
// Host release: hold the line high 20-40 us before the device takes over.
const RELEASE_HIGH_US: u32 = 30;
// Offset from a bit's rising edge to its sample instant.
const BIT_SAMPLE_OFFSET_US: u32 = 40;
// Poll interval while waiting for a line transition.
const POLL_INTERVAL_US: u32 = 1;
// Poll budget per transition; the longest legal phase is the 80 us
// device response pulse.
const MAX_POLLS: u32 = 85;

#[derive(Debug)]
pub enum Dht22Error<E> {
    /// Pin operation failed.
    Pin(E),
    /// The line never reached the expected level within the poll budget.
    Timeout,
    /// Frame checksum mismatch.
    Checksum,
}

impl<E> From<E> for Dht22Error<E> {
    fn from(e: E) -> Dht22Error<E> {
        Dht22Error::Pin(e)
    }
}

/// One measurement in the handle's selected unit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Measurement {
    /// Relative humidity in percent.
    pub humidity: f32,
    /// Temperature in `unit`.
    pub temperature: f32,
    pub unit: TemperatureUnit,
}

/// Driver handle. Owns the line and the delay provider; the decode cycle
/// blocks the calling thread and must not share the pin with anyone.
pub struct Dht22<P, D> {
    pin: P,
    delay: D,
    unit: TemperatureUnit,
}

impl<P, D> Dht22<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    pub fn new(pin: P, delay: D) -> Self {
        Self {
            pin,
            delay,
            unit: TemperatureUnit::Celsius,
        }
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Select the unit reported by [`Self::read`].
    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        self.unit = unit;
    }

    /// Run one decode cycle and report in the selected unit.
    pub fn read(&mut self) -> Result<Measurement, Dht22Error<P::Error>> {
        let frame = self.transfer()?;
        Ok(Measurement {
            humidity: frame.relative_humidity(),
            temperature: self.unit.from_celsius(frame.temperature_celsius()),
            unit: self.unit,
        })
    }

    /// Run one decode cycle and report a typed Celsius acquisition.
    pub fn acquire(&mut self) -> Result<SensorAcquisition<Celsius>, Dht22Error<P::Error>> {
        let frame = self.transfer()?;
        Ok(SensorAcquisition {
            temperature: Temperature::new(frame.temperature_celsius()),
            relative_humidity: frame.relative_humidity(),
        })
    }

    /// One full protocol cycle: start signal, device response, 40 data
    /// bits, checksum validation.
    fn transfer(&mut self) -> Result<Frame, Dht22Error<P::Error>> {
        // Force the line to its released idle level so the cycle starts
        // from a known state no matter what the previous call left behind.
        self.pin.set_high()?;

        // Start signal, then hand the line to the device.
        self.pin.set_low()?;
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high()?;
        self.delay.delay_us(RELEASE_HIGH_US);

        // Device response: a low pulse then a high pulse, each about
        // 80 us. The second wait ends when the first bit's low preamble
        // begins.
        self.wait_for_level(PinState::High)?;
        self.wait_for_level(PinState::Low)?;

        let mut bytes = [0u8; Frame::LEN];
        for byte in bytes.iter_mut() {
            *byte = self.read_byte()?;
        }

        Frame::parse(bytes).map_err(|e| {
            warn!("checksum mismatch: computed {} received {}", e.computed, e.received);
            Dht22Error::Checksum
        })
    }

    /// Decode one byte, most significant bit first.
    fn read_byte(&mut self) -> Result<u8, Dht22Error<P::Error>> {
        let mut byte = 0u8;
        for bit in 0..8 {
            // The rising edge marks the bit; the level 40 us later is its
            // value. A zero bit has already fallen back low by then, a
            // one bit is still high.
            self.wait_for_level(PinState::High)?;
            self.delay.delay_us(BIT_SAMPLE_OFFSET_US);
            if self.pin.is_high()? {
                byte |= 1 << (7 - bit);
            }
            self.wait_for_level(PinState::Low)?;
        }
        Ok(byte)
    }

    /// Poll until the line reads `level`, giving up after the poll budget.
    fn wait_for_level(&mut self, level: PinState) -> Result<(), Dht22Error<P::Error>> {
        for _ in 0..MAX_POLLS {
            let reached = match level {
                PinState::High => self.pin.is_high()?,
                PinState::Low => self.pin.is_low()?,
            };
            if reached {
                return Ok(());
            }
            self.delay.delay_us(POLL_INTERVAL_US);
        }
        Err(Dht22Error::Timeout)
    }
}

impl<P, D> TemperatureSensor<Celsius> for Dht22<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    type Error = Dht22Error<P::Error>;

    fn temperature(&mut self) -> Result<Temperature<Celsius>, Self::Error> {
        let frame = self.transfer()?;
        Ok(Temperature::new(frame.temperature_celsius()))
    }
}

impl<P, D> HumiditySensor for Dht22<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    type Error = Dht22Error<P::Error>;

    fn relative_humidity(&mut self) -> Result<f32, Self::Error> {
        let frame = self.transfer()?;
        Ok(frame.relative_humidity())
    }
}
