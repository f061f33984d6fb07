//! Prints the device identity values over RTT
//!
//! The values are read once and served from the cache afterwards, the second round of reads
//! does not touch the firmware anymore.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use giant_gecko_hal::{
    native::NativeFirmware,
    utility::{self, DevInfoRegisters, PartInfo},
};
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("-- Giant Gecko device info --");
    let mut fw = unsafe { NativeFirmware::new() };

    for round in 0..2 {
        rprintln!("round {}", round);
        rprintln!("unique id: {:02x?}", utility::unique_device_id(&mut fw));
        rprintln!("production revision: {}", utility::production_revision(&mut fw));
        rprintln!("device family: {}", utility::device_family(&mut fw));
        rprintln!("device number: {}", utility::device_number(&mut fw));
    }

    // Cross-check with the DEVINFO page
    let part: PartInfo = DevInfoRegisters::new().part();
    rprintln!("PART word: {:#010x}", part.bits());
    loop {
        cortex_m::asm::nop();
    }
}
