//! Sets an RTC alarm and enters EM4 Hibernate
//!
//! The alarm wakes the device again, which then starts from reset and prints the banner a
//! second time.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use giant_gecko_hal::{native::NativeFirmware, power, rtc::Rtc, time::DateTime};
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("-- Giant Gecko EM4 hibernate test --");
    let mut rtc = Rtc::new(unsafe { NativeFirmware::new() });
    let wakeup = DateTime::new(2024, 1, 1, 0, 0, 10).unwrap();
    rtc.set_alarm(&wakeup).unwrap();
    rprintln!("alarm set to {:?}", rtc.alarm());

    let mut fw = rtc.free();
    power::enter_hibernate_mode(&mut fw)
}
