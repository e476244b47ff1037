use atmos_device::drivers::sensors::bmp180::{Bmp180, Bmp180Error, Oversampling, ADDR};
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use std::sync::Once;

static INIT: Once = Once::new();

fn setup() {
    INIT.call_once(|| {
        env_logger::init();
    });
}

// Calibration block from the datasheet's worked example, big-endian.
const CAL_BLOCK: [u8; 22] = [
    0x01, 0x98, 0xFF, 0xB8, 0xC7, 0xD1, 0x7F, 0xE5, 0x7F, 0xF5, 0x5A, 0x71, 0x18, 0x2E, 0x00,
    0x04, 0x80, 0x00, 0xDD, 0xF9, 0x0B, 0x34,
];

fn initialize_transactions() -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write_read(ADDR, vec![0xD0], vec![0x55]),
        I2cTransaction::write_read(ADDR, vec![0xAA], CAL_BLOCK.to_vec()),
    ]
}

// One full acquisition: temperature conversion and readout, then a
// pressure conversion and 3-byte readout.
fn acquisition_transactions(pressure_command: u8, out: [u8; 3]) -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write(ADDR, vec![0xF4, 0x2E]),
        I2cTransaction::write_read(ADDR, vec![0xF6], vec![0x6C, 0xFA]),
        I2cTransaction::write(ADDR, vec![0xF4, pressure_command]),
        I2cTransaction::write_read(ADDR, vec![0xF6], out.to_vec()),
    ]
}

#[test]
fn acquires_the_datasheet_example_at_ultra_low_power() {
    setup();
    let mut expectations = initialize_transactions();
    // 23843 << 8 = 0x5D2300
    expectations.extend(acquisition_transactions(0x34, [0x5D, 0x23, 0x00]));

    let mut i2c = I2cMock::new(&expectations);
    let mut bmp180 = Bmp180::new(i2c.clone(), NoopDelay::new());
    bmp180.set_mode(Oversampling::UltraLowPower);
    bmp180.initialize().unwrap();

    let reading = bmp180.acquire().unwrap();
    assert_eq!(reading.temperature.raw_value(), 15.0);
    assert_eq!(reading.pressure.pascals(), 69_965.0);

    i2c.done();
}

#[test]
fn standard_mode_shifts_the_command_and_the_readout() {
    setup();
    let mut expectations = initialize_transactions();
    // Command 0x34 + (1 << 6); raw 23843 << 7 = 0x2E9180.
    expectations.extend(acquisition_transactions(0x74, [0x2E, 0x91, 0x80]));

    let mut i2c = I2cMock::new(&expectations);
    let mut bmp180 = Bmp180::new(i2c.clone(), NoopDelay::new());
    assert_eq!(bmp180.mode(), Oversampling::Standard);
    bmp180.initialize().unwrap();

    let reading = bmp180.acquire().unwrap();
    assert_eq!(reading.temperature.raw_value(), 15.0);
    assert_eq!(reading.pressure.pascals(), 34_416.0);

    i2c.done();
}

#[test]
fn altitude_is_zero_when_the_reference_matches() {
    setup();
    let mut expectations = initialize_transactions();
    expectations.extend(acquisition_transactions(0x34, [0x5D, 0x23, 0x00]));

    let mut i2c = I2cMock::new(&expectations);
    let mut bmp180 = Bmp180::new(i2c.clone(), NoopDelay::new());
    bmp180.set_mode(Oversampling::UltraLowPower);
    bmp180.initialize().unwrap();
    bmp180.set_sea_level_pressure(69_965.0);
    assert_eq!(bmp180.sea_level_pressure(), 69_965.0);

    let altitude = bmp180.altitude().unwrap();
    assert!(altitude.meters().abs() < 1e-3);

    i2c.done();
}

#[test]
fn rejects_a_foreign_chip_id_without_calibrating() {
    setup();
    let expectations = [I2cTransaction::write_read(ADDR, vec![0xD0], vec![0x60])];

    let mut i2c = I2cMock::new(&expectations);
    let mut bmp180 = Bmp180::new(i2c.clone(), NoopDelay::new());
    match bmp180.initialize() {
        Err(Bmp180Error::InvalidChipId(id)) => assert_eq!(id, 0x60),
        other => panic!("unexpected result: {:?}", other),
    }

    // The handle stays usable but uncalibrated.
    assert!(matches!(
        bmp180.temperature(),
        Err(Bmp180Error::NotCalibrated)
    ));

    i2c.done();
}

#[test]
fn compensation_requires_a_loaded_calibration() {
    setup();
    let mut i2c = I2cMock::new(&[]);
    let mut bmp180 = Bmp180::new(i2c.clone(), NoopDelay::new());

    assert!(matches!(
        bmp180.temperature(),
        Err(Bmp180Error::NotCalibrated)
    ));
    assert!(matches!(bmp180.pressure(), Err(Bmp180Error::NotCalibrated)));
    assert!(matches!(bmp180.acquire(), Err(Bmp180Error::NotCalibrated)));

    i2c.done();
}

#[test]
fn raw_mode_values_are_validated() {
    setup();
    let mut i2c = I2cMock::new(&[]);
    let mut bmp180 = Bmp180::new(i2c.clone(), NoopDelay::new());

    bmp180.set_mode_raw(3).unwrap();
    assert_eq!(bmp180.mode(), Oversampling::UltraHighResolution);

    assert!(matches!(
        bmp180.set_mode_raw(4),
        Err(Bmp180Error::InvalidMode(4))
    ));
    // A rejected value leaves the previous mode in place.
    assert_eq!(bmp180.mode(), Oversampling::UltraHighResolution);

    i2c.done();
}

#[test]
fn bus_failures_surface_as_communication_errors() {
    setup();
    let expectations =
        [I2cTransaction::write_read(ADDR, vec![0xD0], vec![0x55]).with_error(ErrorKind::Other)];

    let mut i2c = I2cMock::new(&expectations);
    let mut bmp180 = Bmp180::new(i2c.clone(), NoopDelay::new());
    assert!(matches!(bmp180.initialize(), Err(Bmp180Error::I2c(_))));

    i2c.done();
}
