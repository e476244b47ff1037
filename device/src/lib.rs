#![cfg_attr(not(feature = "std"), no_std)]
//! Blocking drivers for a pair of environmental sensors: the BMP180
//! barometric pressure/temperature sensor on a register-addressed I2C bus,
//! and the DHT22 humidity/temperature sensor on a single-wire,
//! timing-encoded line.
//!
//! Platform access is injected through the `embedded-hal` blocking traits
//! (`i2c::I2c`, `digital::InputPin`/`OutputPin`, `delay::DelayNs`), so the
//! drivers run unchanged on any HAL and against simulated buses in tests.
//! Everything is synchronous: conversion waits and line polling block the
//! calling thread, and each driver handle owns its bus or pin exclusively.

pub(crate) mod fmt;

pub mod domain;
pub mod drivers;
pub mod traits;
