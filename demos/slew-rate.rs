//! Configures slew rate and drive strength of the LED port
//!
//! Connect an oscilloscope to PE2 to see the edges getting slower.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use giant_gecko_hal::{
    gpio::{DriveStrength, GpioConfig, PinId, Port},
    native::NativeFirmware,
    Error,
};
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("-- Giant Gecko slew rate test --");
    let mut gpio = GpioConfig::new(unsafe { NativeFirmware::new() });
    let led = PinId::new(Port::E, 2).unwrap();

    // Not opened yet
    assert_eq!(gpio.set_slew_rate(led, 7), Err(Error::InvalidOperation));
    gpio.open_pin(led).unwrap();
    assert_eq!(gpio.set_slew_rate(led, 8), Err(Error::InvalidArgument));

    gpio.set_drive_strength(led, DriveStrength::Weak).unwrap();
    let mut limit = 7;
    loop {
        gpio.set_slew_rate(led, limit).unwrap();
        rprintln!("slew rate limit {}", limit);
        limit = if limit == 0 { 7 } else { limit - 1 };
        cortex_m::asm::delay(25_000_000);
    }
}
