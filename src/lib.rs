//! Hardware support for the Silicon Labs EFM32/EFR32 Giant Gecko family
//!
//! All register access happens behind narrow platform traits, one method per hardware
//! operation:
//!
//! - [`utility::DeviceInfo`]: device identification, cached by [`utility::IdentityCache`]
//! - [`gpio::GpioControl`]: slew rate and drive strength of the GPIO ports
//! - [`rtc::RtcAlarm`]: the RTC alarm
//! - [`power::PowerControl`]: EM4 Hibernate and EM4 Shutoff
//!
//! [`utility::DevInfoRegisters`] reads the DEVINFO page directly. With the `native` feature,
//! `native::NativeFirmware` implements all traits by calling into the board firmware.
#![no_std]

pub mod error;
pub mod gpio;
#[cfg(feature = "native")]
pub mod native;
pub mod power;
pub mod rtc;
pub mod time;
pub mod utility;

mod log;

pub use error::Error;
