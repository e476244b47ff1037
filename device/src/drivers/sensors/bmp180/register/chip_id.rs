use crate::traits::i2c::I2cAddress;
use embedded_hal::i2c::I2c;

const CHIP_ID: u8 = 0xD0;

/// Identity value reported by every BMP180.
pub const BMP180_ID: u8 = 0x55;

pub struct ChipId;

impl ChipId {
    pub fn read<I: I2c>(address: I2cAddress, i2c: &mut I) -> Result<u8, I::Error> {
        let mut buf = [0; 1];
        i2c.write_read(address.into(), &[CHIP_ID], &mut buf)?;
        Ok(buf[0])
    }
}
