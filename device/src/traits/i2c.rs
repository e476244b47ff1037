use core::fmt::{Formatter, LowerHex, UpperHex};

/// 7-bit address of a device on a register-addressed bus.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    pub const fn new(val: u8) -> Self {
        Self(val)
    }
}

impl From<I2cAddress> for u8 {
    fn from(address: I2cAddress) -> u8 {
        address.0
    }
}

impl From<u8> for I2cAddress {
    fn from(val: u8) -> I2cAddress {
        I2cAddress::new(val)
    }
}

impl LowerHex for I2cAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl UpperHex for I2cAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        UpperHex::fmt(&self.0, f)
    }
}
