//! # Port configuration: slew rate and drive strength
//!
//! The Giant Gecko configures slew rate and drive strength per port, with a separate setting
//! for pins used by an alternate function. Higher slew rate limits represent faster edges.
//!
//! The normal setters check that the pin was opened with [`GpioConfig::open_pin`] before.
//! The alternate setters perform no such check: a pin used by a peripheral is usually never
//! opened as a GPIO, and whether it is really used in an alternate function is up to the
//! caller.
use super::pins::{PinId, Port, NUM_PORTS};
use crate::{log, Error};

/// Maximum value of the slew rate limit
pub const MAX_SLEW_RATE: u8 = 7;

//==================================================================================================
//  SlewRate & DriveStrength
//==================================================================================================

/// Slew rate limit in the range 0 to 7
#[derive(Debug, Eq, Copy, Clone, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlewRate(u8);

impl SlewRate {
    /// Slowest edges, lowest EMI
    pub const SLOWEST: SlewRate = SlewRate(0);
    /// Reset value of the port control register
    pub const DEFAULT: SlewRate = SlewRate(5);
    pub const FASTEST: SlewRate = SlewRate(MAX_SLEW_RATE);

    /// Returns [`Error::InvalidArgument`] if `limit` is larger than 7
    pub const fn new(limit: u8) -> Result<Self, Error> {
        if limit > MAX_SLEW_RATE {
            return Err(Error::InvalidArgument);
        }
        Ok(SlewRate(limit))
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for SlewRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for SlewRate {
    type Error = Error;

    fn try_from(limit: u8) -> Result<Self, Error> {
        Self::new(limit)
    }
}

impl TryFrom<i32> for SlewRate {
    type Error = Error;

    fn try_from(limit: i32) -> Result<Self, Error> {
        let limit = u8::try_from(limit).map_err(|_| Error::InvalidArgument)?;
        Self::new(limit)
    }
}

impl From<SlewRate> for u8 {
    fn from(rate: SlewRate) -> Self {
        rate.0
    }
}

/// Drive strength of a port
#[derive(Debug, Default, Eq, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveStrength {
    /// 10 mA drive current
    #[default]
    Strong = 0,
    /// 1 mA drive current
    Weak = 1,
}

impl TryFrom<u8> for DriveStrength {
    type Error = Error;

    fn try_from(val: u8) -> Result<Self, Error> {
        match val {
            0 => Ok(DriveStrength::Strong),
            1 => Ok(DriveStrength::Weak),
            _ => Err(Error::InvalidArgument),
        }
    }
}

//==================================================================================================
//  GpioControl
//==================================================================================================

/// Port configuration interface of the platform
///
/// Implementations program the port control registers. They may report
/// [`Error::InvalidArgument`] or [`Error::InvalidOperation`] on their own, which is passed on
/// to the caller unmodified.
pub trait GpioControl {
    fn set_slew_rate(&mut self, port: Port, rate: SlewRate) -> Result<(), Error>;

    fn set_slew_rate_alternate(&mut self, port: Port, rate: SlewRate) -> Result<(), Error>;

    fn set_drive_strength(&mut self, port: Port, strength: DriveStrength) -> Result<(), Error>;

    fn set_drive_strength_alternate(
        &mut self,
        port: Port,
        strength: DriveStrength,
    ) -> Result<(), Error>;
}

//==================================================================================================
//  GpioConfig
//==================================================================================================

/// GPIO port configuration driver
///
/// Keeps track of the opened pins and forwards the configuration to the [`GpioControl`]
/// backend.
///
/// The opened state is local to this driver. Pins opened by other GPIO drivers, for example
/// by the firmware behind `NativeFirmware`, are not known here and must be registered with
/// [`GpioConfig::open_pin`] as well before the normal setters accept them.
pub struct GpioConfig<G> {
    ctrl: G,
    /// One bit per pin, one word per port
    opened: [u16; NUM_PORTS],
}

impl<G: GpioControl> GpioConfig<G> {
    pub fn new(ctrl: G) -> Self {
        GpioConfig {
            ctrl,
            opened: [0; NUM_PORTS],
        }
    }

    /// Release the backend
    pub fn free(self) -> G {
        self.ctrl
    }

    /// Mark a pin as opened for GPIO use
    ///
    /// Returns [`Error::InvalidOperation`] if the pin is already open
    pub fn open_pin(&mut self, pin: PinId) -> Result<(), Error> {
        if self.is_pin_open(pin) {
            return Err(Error::InvalidOperation);
        }
        self.opened[pin.port().index()] |= pin.mask_16();
        Ok(())
    }

    pub fn close_pin(&mut self, pin: PinId) {
        self.opened[pin.port().index()] &= !pin.mask_16();
    }

    #[inline]
    pub fn is_pin_open(&self, pin: PinId) -> bool {
        self.opened[pin.port().index()] & pin.mask_16() != 0
    }

    fn check_open(&self, pin: PinId) -> Result<(), Error> {
        if !self.is_pin_open(pin) {
            log::warn!("pin {} was not opened", pin.number());
            return Err(Error::InvalidOperation);
        }
        Ok(())
    }

    /// Set the slew rate limit for the port of an opened pin
    ///
    /// Returns [`Error::InvalidOperation`] if the pin was not opened before and
    /// [`Error::InvalidArgument`] if the limit is larger than 7
    pub fn set_slew_rate(&mut self, pin: PinId, limit: u8) -> Result<(), Error> {
        self.check_open(pin)?;
        let rate = SlewRate::new(limit)?;
        log::trace!("port {} slew rate {}", pin.port().index(), limit);
        self.ctrl.set_slew_rate(pin.port(), rate)
    }

    /// Set the slew rate limit for alternate functions on the port of a pin
    ///
    /// Returns [`Error::InvalidArgument`] if the limit is larger than 7
    pub fn set_slew_rate_alternate(&mut self, pin: PinId, limit: u8) -> Result<(), Error> {
        let rate = SlewRate::new(limit)?;
        log::trace!("port {} alternate slew rate {}", pin.port().index(), limit);
        self.ctrl.set_slew_rate_alternate(pin.port(), rate)
    }

    /// Set the drive strength for the port of an opened pin
    ///
    /// Returns [`Error::InvalidOperation`] if the pin was not opened before
    pub fn set_drive_strength(&mut self, pin: PinId, strength: DriveStrength) -> Result<(), Error> {
        self.check_open(pin)?;
        log::trace!("port {} drive strength {}", pin.port().index(), strength as u8);
        self.ctrl.set_drive_strength(pin.port(), strength)
    }

    /// Set the drive strength for alternate functions on the port of a pin
    pub fn set_drive_strength_alternate(
        &mut self,
        pin: PinId,
        strength: DriveStrength,
    ) -> Result<(), Error> {
        log::trace!(
            "port {} alternate drive strength {}",
            pin.port().index(),
            strength as u8
        );
        self.ctrl.set_drive_strength_alternate(pin.port(), strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        SlewRate(Port, u8),
        SlewRateAlt(Port, u8),
        Drive(Port, DriveStrength),
        DriveAlt(Port, DriveStrength),
    }

    /// Mock port control recording the last call
    #[derive(Default)]
    struct MockGpio {
        last: Option<Call>,
        calls: u32,
        fail_with: Option<Error>,
    }

    impl MockGpio {
        fn record(&mut self, call: Call) -> Result<(), Error> {
            self.calls += 1;
            self.last = Some(call);
            match self.fail_with {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    impl GpioControl for MockGpio {
        fn set_slew_rate(&mut self, port: Port, rate: SlewRate) -> Result<(), Error> {
            self.record(Call::SlewRate(port, rate.value()))
        }

        fn set_slew_rate_alternate(&mut self, port: Port, rate: SlewRate) -> Result<(), Error> {
            self.record(Call::SlewRateAlt(port, rate.value()))
        }

        fn set_drive_strength(&mut self, port: Port, strength: DriveStrength) -> Result<(), Error> {
            self.record(Call::Drive(port, strength))
        }

        fn set_drive_strength_alternate(
            &mut self,
            port: Port,
            strength: DriveStrength,
        ) -> Result<(), Error> {
            self.record(Call::DriveAlt(port, strength))
        }
    }

    fn pin(num: i32) -> PinId {
        PinId::from_number(num).unwrap()
    }

    #[test]
    fn test_slew_rate_range() {
        assert_eq!(SlewRate::new(0).map(SlewRate::value), Ok(0));
        assert_eq!(SlewRate::new(7).map(SlewRate::value), Ok(7));
        assert_eq!(SlewRate::new(8), Err(Error::InvalidArgument));
        assert_eq!(SlewRate::try_from(-1i32), Err(Error::InvalidArgument));
        assert_eq!(SlewRate::try_from(8i32), Err(Error::InvalidArgument));
        assert_eq!(SlewRate::try_from(7i32), Ok(SlewRate::FASTEST));
    }

    #[test]
    fn test_drive_strength_values() {
        assert_eq!(DriveStrength::Strong as u8, 0);
        assert_eq!(DriveStrength::Weak as u8, 1);
        assert_eq!(DriveStrength::try_from(1u8), Ok(DriveStrength::Weak));
        assert_eq!(DriveStrength::try_from(2u8), Err(Error::InvalidArgument));
    }

    #[test]
    fn test_slew_rate_boundaries() {
        let mut gpio = GpioConfig::new(MockGpio::default());
        let pc4 = pin(36);
        gpio.open_pin(pc4).unwrap();

        assert_eq!(gpio.set_slew_rate(pc4, 0), Ok(()));
        assert_eq!(gpio.set_slew_rate(pc4, 7), Ok(()));
        assert_eq!(gpio.set_slew_rate(pc4, 8), Err(Error::InvalidArgument));
        assert_eq!(gpio.set_slew_rate_alternate(pc4, 7), Ok(()));
        assert_eq!(
            gpio.set_slew_rate_alternate(pc4, 8),
            Err(Error::InvalidArgument)
        );

        let mock = gpio.free();
        assert_eq!(mock.calls, 3);
        assert_eq!(mock.last, Some(Call::SlewRateAlt(Port::C, 7)));
    }

    #[test]
    fn test_unopened_pin() {
        let mut gpio = GpioConfig::new(MockGpio::default());
        let pa1 = pin(1);

        assert_eq!(gpio.set_slew_rate(pa1, 3), Err(Error::InvalidOperation));
        assert_eq!(
            gpio.set_drive_strength(pa1, DriveStrength::Weak),
            Err(Error::InvalidOperation)
        );
        // Open check comes first, even for an invalid limit
        assert_eq!(gpio.set_slew_rate(pa1, 9), Err(Error::InvalidOperation));

        // No check for the alternate variants
        assert_eq!(gpio.set_slew_rate_alternate(pa1, 3), Ok(()));
        assert_eq!(
            gpio.set_drive_strength_alternate(pa1, DriveStrength::Weak),
            Ok(())
        );

        let mock = gpio.free();
        assert_eq!(mock.calls, 2);
        assert_eq!(mock.last, Some(Call::DriveAlt(Port::A, DriveStrength::Weak)));
    }

    #[test]
    fn test_open_close() {
        let mut gpio = GpioConfig::new(MockGpio::default());
        let pe15 = pin(79);

        assert!(!gpio.is_pin_open(pe15));
        gpio.open_pin(pe15).unwrap();
        assert!(gpio.is_pin_open(pe15));
        assert_eq!(gpio.open_pin(pe15), Err(Error::InvalidOperation));
        // Neighbouring pins of the same port are unaffected
        assert!(!gpio.is_pin_open(pin(78)));

        gpio.set_drive_strength(pe15, DriveStrength::Strong).unwrap();
        gpio.close_pin(pe15);
        assert_eq!(
            gpio.set_drive_strength(pe15, DriveStrength::Strong),
            Err(Error::InvalidOperation)
        );
        assert_eq!(
            gpio.free().last,
            Some(Call::Drive(Port::E, DriveStrength::Strong))
        );
    }

    #[test]
    fn test_open_every_pin() {
        let mut gpio = GpioConfig::new(MockGpio::default());
        for num in 0..192 {
            let p = pin(num);
            assert!(!gpio.is_pin_open(p));
            gpio.open_pin(p).unwrap();
            assert!(gpio.is_pin_open(p));
        }
        // PA15 and PB0 share no state
        gpio.close_pin(pin(15));
        assert!(!gpio.is_pin_open(pin(15)));
        assert!(gpio.is_pin_open(pin(16)));
        assert_eq!(gpio.set_slew_rate(pin(191), 7), Ok(()));
        assert_eq!(gpio.free().last, Some(Call::SlewRate(Port::L, 7)));
    }

    #[test]
    fn test_backend_error_propagated() {
        let mut gpio = GpioConfig::new(MockGpio {
            fail_with: Some(Error::InvalidOperation),
            ..Default::default()
        });
        let pb0 = pin(16);
        gpio.open_pin(pb0).unwrap();
        assert_eq!(gpio.set_slew_rate(pb0, 2), Err(Error::InvalidOperation));
        assert_eq!(
            gpio.set_slew_rate_alternate(pb0, 2),
            Err(Error::InvalidOperation)
        );
    }
}
