//! API for the EM4 low-power modes
//!
//! Both EM4 modes are left through a reset only. After a configured wakeup source fires,
//! execution starts again as if the device was reset. If no wakeup source is configured, the
//! device sleeps indefinitely. Therefore the functions in this module never return.
//!
//! - EM4 Hibernate keeps the RTC and a small retention RAM powered
//! - EM4 Shutoff powers down everything except the wakeup logic
//!
//! ## Examples
//!
//! - `demos/alarm-hibernate.rs`
use crate::log;

/// Power mode interface of the platform
pub trait PowerControl {
    /// Request entry into EM4 Hibernate. May return before the device actually powers down
    fn request_hibernate(&mut self);

    /// Request entry into EM4 Shutoff. May return before the device actually powers down
    fn request_shutoff(&mut self);

    /// Park the calling context until the device is powered down
    fn halt(&mut self) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }
}

/// Enter EM4 Hibernate. This call never returns
pub fn enter_hibernate_mode<P: PowerControl + ?Sized>(pwr: &mut P) -> ! {
    log::debug!("entering EM4 hibernate");
    pwr.request_hibernate();
    pwr.halt()
}

/// Enter EM4 Shutoff. This call never returns
pub fn enter_shutoff_mode<P: PowerControl + ?Sized>(pwr: &mut P) -> ! {
    log::debug!("entering EM4 shutoff");
    pwr.request_shutoff();
    pwr.halt()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[derive(Debug, Default, PartialEq)]
    struct MockPower {
        hibernate_requests: u32,
        shutoff_requests: u32,
        halted: bool,
    }

    impl PowerControl for MockPower {
        fn request_hibernate(&mut self) {
            self.hibernate_requests += 1;
        }

        fn request_shutoff(&mut self) {
            self.shutoff_requests += 1;
        }

        fn halt(&mut self) -> ! {
            self.halted = true;
            panic!("halted");
        }
    }

    #[test]
    fn test_hibernate_never_returns() {
        let mut pwr = MockPower::default();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            enter_hibernate_mode(&mut pwr);
        }));
        assert!(result.is_err());
        assert_eq!(
            pwr,
            MockPower {
                hibernate_requests: 1,
                shutoff_requests: 0,
                halted: true,
            }
        );
    }

    #[test]
    fn test_shutoff_never_returns() {
        let mut pwr = MockPower::default();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            enter_shutoff_mode(&mut pwr);
        }));
        assert!(result.is_err());
        assert_eq!(pwr.shutoff_requests, 1);
        assert_eq!(pwr.hibernate_requests, 0);
        assert!(pwr.halted);
    }
}
