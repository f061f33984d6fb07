//! Backend forwarding to the board firmware
//!
//! The firmware exports one C-ABI function per operation. [`NativeFirmware`] implements all
//! platform traits of this crate on top of these symbols, so it can be passed to the identity
//! cache, [`GpioConfig`](crate::gpio::GpioConfig), [`Rtc`](crate::rtc::Rtc) and the
//! [power](crate::power) functions.
//!
//! Status codes returned by the firmware: `0` on success, [`STATUS_INVALID_OPERATION`] and
//! [`STATUS_INVALID_ARGUMENT`] on failure.
use crate::{
    gpio::{DriveStrength, GpioControl, Port, SlewRate},
    log,
    power::PowerControl,
    rtc::RtcAlarm,
    time::DateTime,
    utility::{DeviceInfo, UNIQUE_ID_LEN},
    Error,
};

pub use crate::error::{STATUS_INVALID_ARGUMENT, STATUS_INVALID_OPERATION, STATUS_OK};

/// Alarm time as written by the firmware
#[repr(C)]
#[derive(Default, Clone, Copy)]
struct RawDateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

extern "C" {
    fn gecko_devinfo_unique_id(data: *mut u8, len: usize);
    fn gecko_devinfo_production_revision() -> u8;
    fn gecko_devinfo_device_family() -> u8;
    fn gecko_devinfo_device_number() -> u32;

    fn gecko_gpio_set_slew_rate(port: u8, limit: u8, alternate: bool) -> i32;
    fn gecko_gpio_set_drive_strength(port: u8, strength: u8, alternate: bool) -> i32;

    fn gecko_rtc_set_alarm(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8)
        -> i32;
    fn gecko_rtc_get_alarm(time: *mut RawDateTime);

    fn gecko_emu_enter_em4_hibernate();
    fn gecko_emu_enter_em4_shutoff();
}

/// Handle to the native firmware
///
/// The handle itself holds no state, the firmware serializes register access on its side.
pub struct NativeFirmware {
    _private: (),
}

impl NativeFirmware {
    /// # Safety
    ///
    /// The firmware must be linked into the image and export all `gecko_*` symbols with the
    /// signatures declared in this module
    pub const unsafe fn new() -> Self {
        NativeFirmware { _private: () }
    }
}

impl DeviceInfo for NativeFirmware {
    fn read_unique_id(&mut self, id: &mut [u8; UNIQUE_ID_LEN]) {
        // Safety: The buffer is valid for `UNIQUE_ID_LEN` bytes
        unsafe { gecko_devinfo_unique_id(id.as_mut_ptr(), UNIQUE_ID_LEN) }
    }

    fn production_revision(&mut self) -> u8 {
        unsafe { gecko_devinfo_production_revision() }
    }

    fn device_family(&mut self) -> u8 {
        unsafe { gecko_devinfo_device_family() }
    }

    fn device_number(&mut self) -> u32 {
        unsafe { gecko_devinfo_device_number() }
    }
}

impl GpioControl for NativeFirmware {
    fn set_slew_rate(&mut self, port: Port, rate: SlewRate) -> Result<(), Error> {
        Error::from_status(unsafe { gecko_gpio_set_slew_rate(port as u8, rate.value(), false) })
    }

    fn set_slew_rate_alternate(&mut self, port: Port, rate: SlewRate) -> Result<(), Error> {
        Error::from_status(unsafe { gecko_gpio_set_slew_rate(port as u8, rate.value(), true) })
    }

    fn set_drive_strength(&mut self, port: Port, strength: DriveStrength) -> Result<(), Error> {
        Error::from_status(unsafe {
            gecko_gpio_set_drive_strength(port as u8, strength as u8, false)
        })
    }

    fn set_drive_strength_alternate(
        &mut self,
        port: Port,
        strength: DriveStrength,
    ) -> Result<(), Error> {
        Error::from_status(unsafe {
            gecko_gpio_set_drive_strength(port as u8, strength as u8, true)
        })
    }
}

impl RtcAlarm for NativeFirmware {
    fn set_alarm(
        &mut self,
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<(), Error> {
        Error::from_status(unsafe {
            gecko_rtc_set_alarm(year, month, day, hour, minute, second)
        })
    }

    fn alarm(&mut self) -> DateTime {
        let mut raw = RawDateTime::default();
        // Safety: `raw` is a valid, exclusively borrowed `RawDateTime`
        unsafe { gecko_rtc_get_alarm(&mut raw) };
        DateTime::from_fields(raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second)
            .unwrap_or_else(|_| {
                log::warn!("firmware reported an invalid alarm time");
                DateTime::EPOCH
            })
    }
}

impl PowerControl for NativeFirmware {
    fn request_hibernate(&mut self) {
        unsafe { gecko_emu_enter_em4_hibernate() }
    }

    fn request_shutoff(&mut self) {
        unsafe { gecko_emu_enter_em4_shutoff() }
    }
}
