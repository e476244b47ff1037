use crate::drivers::sensors::bmp180::Oversampling;
use crate::traits::i2c::I2cAddress;
use embedded_hal::i2c::I2c;

const CTRL_MEAS: u8 = 0xF4;
const CMD_TEMPERATURE: u8 = 0x2E;
const CMD_PRESSURE: u8 = 0x34;

pub struct CtrlMeas;

impl CtrlMeas {
    /// Start a temperature conversion.
    pub fn start_temperature<I: I2c>(address: I2cAddress, i2c: &mut I) -> Result<(), I::Error> {
        i2c.write(address.into(), &[CTRL_MEAS, CMD_TEMPERATURE])
    }

    /// Start a pressure conversion at the given oversampling setting.
    pub fn start_pressure<I: I2c>(
        address: I2cAddress,
        i2c: &mut I,
        oversampling: Oversampling,
    ) -> Result<(), I::Error> {
        let command = CMD_PRESSURE + (oversampling.setting() << 6);
        i2c.write(address.into(), &[CTRL_MEAS, command])
    }
}
