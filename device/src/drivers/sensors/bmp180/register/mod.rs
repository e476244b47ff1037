pub mod calibration;
pub mod chip_id;
pub mod ctrl_meas;
pub mod out;
