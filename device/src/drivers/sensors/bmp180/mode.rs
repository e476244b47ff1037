/// Pressure oversampling setting, trading conversion time for resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    UltraLowPower,
    Standard,
    HighResolution,
    UltraHighResolution,
}

/// Raw oversampling value outside the four defined settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidMode(pub u8);

impl Oversampling {
    /// Oversampling factor as encoded into the control register (bits 7:6
    /// of the pressure conversion command).
    pub const fn setting(self) -> u8 {
        match self {
            Oversampling::UltraLowPower => 0,
            Oversampling::Standard => 1,
            Oversampling::HighResolution => 2,
            Oversampling::UltraHighResolution => 3,
        }
    }

    /// Settling wait for a pressure conversion, rounded up from the
    /// datasheet minimums of 4.5/7.5/13.5/25.5 ms.
    pub const fn conversion_delay_ms(self) -> u32 {
        match self {
            Oversampling::UltraLowPower => 5,
            Oversampling::Standard => 8,
            Oversampling::HighResolution => 14,
            Oversampling::UltraHighResolution => 26,
        }
    }

    /// Right shift normalizing the 24-bit pressure readout to the
    /// oversampling-adjusted raw value.
    pub const fn pressure_shift(self) -> u32 {
        match self {
            Oversampling::UltraLowPower => 8,
            Oversampling::Standard => 7,
            Oversampling::HighResolution => 6,
            Oversampling::UltraHighResolution => 5,
        }
    }
}

impl TryFrom<u8> for Oversampling {
    type Error = InvalidMode;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Oversampling::UltraLowPower),
            1 => Ok(Oversampling::Standard),
            2 => Ok(Oversampling::HighResolution),
            3 => Ok(Oversampling::UltraHighResolution),
            _ => Err(InvalidMode(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Oversampling; 4] = [
        Oversampling::UltraLowPower,
        Oversampling::Standard,
        Oversampling::HighResolution,
        Oversampling::UltraHighResolution,
    ];

    #[test]
    fn settling_delays_cover_the_datasheet_conversion_times() {
        // Minimum conversion times in tenths of a millisecond.
        let minimums = [45, 75, 135, 255];
        for (mode, minimum) in ALL.iter().zip(minimums) {
            assert!(mode.conversion_delay_ms() * 10 >= minimum);
        }
    }

    #[test]
    fn readout_shift_complements_the_oversampling_factor() {
        for mode in ALL {
            assert_eq!(mode.pressure_shift(), 8 - mode.setting() as u32);
        }
    }

    #[test]
    fn raw_values_map_to_the_defined_settings() {
        for mode in ALL {
            assert_eq!(Oversampling::try_from(mode.setting()), Ok(mode));
        }
        assert_eq!(Oversampling::try_from(4), Err(InvalidMode(4)));
        assert_eq!(Oversampling::try_from(0xFF), Err(InvalidMode(0xFF)));
    }
}
