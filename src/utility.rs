//! # API for the device information (DEVINFO) page
//!
//! The unique device number and the PART word are programmed during production and never
//! change. They are read from the hardware on first use and cached for the rest of the program
//! run. Check the reference manual of your device for the DEVINFO layout.
//!
//! ## Examples
//!
//! ```ignore
//! use giant_gecko_hal::utility::{self, DevInfoRegisters};
//!
//! let mut devinfo = DevInfoRegisters::new();
//! let family = utility::device_family(&mut devinfo);
//! let uid = utility::unique_device_id(&mut devinfo);
//! ```
use core::ptr;

use critical_section::Mutex;
use once_cell::unsync::OnceCell;

use crate::log;

/// Length of the unique device identifier in bytes
pub const UNIQUE_ID_LEN: usize = 16;

/// Source of the device identity values
///
/// Implemented by the DEVINFO register reader [`DevInfoRegisters`] and by the native firmware
/// backend. The queries can not fail.
pub trait DeviceInfo {
    /// Write the unique device identifier, composed of UNIQUEL and UNIQUEH, into `id`
    fn read_unique_id(&mut self, id: &mut [u8; UNIQUE_ID_LEN]);

    /// Production revision, bits 31:24 of the PART word
    fn production_revision(&mut self) -> u8;

    /// Device family, bits 23:16 of the PART word. For example 72 for the EFM32 Giant Gecko
    fn device_family(&mut self) -> u8;

    /// Device number, bits 15:0 of the PART word. For example 233 for EFR32BG1P233F256GM48-B0
    fn device_number(&mut self) -> u32;
}

//==================================================================================================
// PART word
//==================================================================================================

/// Decoded PART word of the DEVINFO page
#[derive(Debug, Eq, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PartInfo {
    pub production_revision: u8,
    pub device_family: u8,
    pub device_number: u16,
}

impl PartInfo {
    pub const fn from_bits(part: u32) -> Self {
        PartInfo {
            production_revision: (part >> 24) as u8,
            device_family: (part >> 16) as u8,
            device_number: part as u16,
        }
    }

    pub const fn bits(&self) -> u32 {
        ((self.production_revision as u32) << 24)
            | ((self.device_family as u32) << 16)
            | self.device_number as u32
    }
}

//==================================================================================================
// DEVINFO register access
//==================================================================================================

const DEVINFO_UNIQUEL: usize = 0x0FE0_81F0;
const DEVINFO_UNIQUEH: usize = 0x0FE0_81F4;
const DEVINFO_PART: usize = 0x0FE0_81FC;

/// Reads the identity values directly from the DEVINFO page in flash
///
/// The 64 bit unique number occupies the first 8 bytes of the identifier, UNIQUEL first and
/// little endian. The remaining bytes are zero.
pub struct DevInfoRegisters {
    _private: (),
}

impl DevInfoRegisters {
    pub const fn new() -> Self {
        DevInfoRegisters { _private: () }
    }

    #[inline]
    fn read(addr: usize) -> u32 {
        // Safety: The DEVINFO page is always mapped and read-only, reads have no side effects
        unsafe { ptr::read_volatile(addr as *const u32) }
    }

    #[inline]
    pub fn part(&self) -> PartInfo {
        PartInfo::from_bits(Self::read(DEVINFO_PART))
    }
}

impl Default for DevInfoRegisters {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the identifier bytes from the UNIQUEL and UNIQUEH words
pub fn unique_id_from_words(low: u32, high: u32) -> [u8; UNIQUE_ID_LEN] {
    let mut id = [0; UNIQUE_ID_LEN];
    id[0..4].copy_from_slice(&low.to_le_bytes());
    id[4..8].copy_from_slice(&high.to_le_bytes());
    id
}

impl DeviceInfo for DevInfoRegisters {
    fn read_unique_id(&mut self, id: &mut [u8; UNIQUE_ID_LEN]) {
        *id = unique_id_from_words(Self::read(DEVINFO_UNIQUEL), Self::read(DEVINFO_UNIQUEH));
    }

    fn production_revision(&mut self) -> u8 {
        self.part().production_revision
    }

    fn device_family(&mut self) -> u8 {
        self.part().device_family
    }

    fn device_number(&mut self) -> u32 {
        self.part().device_number as u32
    }
}

//==================================================================================================
// Identity cache
//==================================================================================================

/// Lazily populated cache for the four device identity values
///
/// Every field is filled at most once, on the first read, inside a critical section. A value
/// of zero is a valid hardware value and is cached like any other.
pub struct IdentityCache {
    unique_id: Mutex<OnceCell<[u8; UNIQUE_ID_LEN]>>,
    production_revision: Mutex<OnceCell<u8>>,
    device_family: Mutex<OnceCell<u8>>,
    device_number: Mutex<OnceCell<u32>>,
}

/// The program-wide identity cache used by the free functions of this module
pub static DEVICE_IDENTITY: IdentityCache = IdentityCache::new();

impl IdentityCache {
    pub const fn new() -> Self {
        IdentityCache {
            unique_id: Mutex::new(OnceCell::new()),
            production_revision: Mutex::new(OnceCell::new()),
            device_family: Mutex::new(OnceCell::new()),
            device_number: Mutex::new(OnceCell::new()),
        }
    }

    /// Unique device identifier. The upper 8 bytes are zero on devices with a 64 bit unique
    /// number
    pub fn unique_device_id<S: DeviceInfo + ?Sized>(&self, src: &mut S) -> [u8; UNIQUE_ID_LEN] {
        critical_section::with(|cs| {
            *self.unique_id.borrow(cs).get_or_init(|| {
                let mut id = [0; UNIQUE_ID_LEN];
                src.read_unique_id(&mut id);
                log::debug!("cached unique device id");
                id
            })
        })
    }

    pub fn production_revision<S: DeviceInfo + ?Sized>(&self, src: &mut S) -> u8 {
        critical_section::with(|cs| {
            *self.production_revision.borrow(cs).get_or_init(|| {
                let rev = src.production_revision();
                log::debug!("cached production revision {}", rev);
                rev
            })
        })
    }

    pub fn device_family<S: DeviceInfo + ?Sized>(&self, src: &mut S) -> u8 {
        critical_section::with(|cs| {
            *self.device_family.borrow(cs).get_or_init(|| {
                let family = src.device_family();
                log::debug!("cached device family {}", family);
                family
            })
        })
    }

    pub fn device_number<S: DeviceInfo + ?Sized>(&self, src: &mut S) -> u32 {
        critical_section::with(|cs| {
            *self.device_number.borrow(cs).get_or_init(|| {
                let number = src.device_number();
                log::debug!("cached device number {}", number);
                number
            })
        })
    }

    /// Returns `true` once all four values were read from the hardware
    #[cfg(test)]
    fn is_complete(&self) -> bool {
        critical_section::with(|cs| {
            self.unique_id.borrow(cs).get().is_some()
                && self.production_revision.borrow(cs).get().is_some()
                && self.device_family.borrow(cs).get().is_some()
                && self.device_number.borrow(cs).get().is_some()
        })
    }
}

impl Default for IdentityCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique device identifier, composed of UNIQUEL and UNIQUEH
pub fn unique_device_id<S: DeviceInfo + ?Sized>(src: &mut S) -> [u8; UNIQUE_ID_LEN] {
    DEVICE_IDENTITY.unique_device_id(src)
}

/// Production revision, bits 31:24 of the PART word
pub fn production_revision<S: DeviceInfo + ?Sized>(src: &mut S) -> u8 {
    DEVICE_IDENTITY.production_revision(src)
}

/// Device family, bits 23:16 of the PART word
pub fn device_family<S: DeviceInfo + ?Sized>(src: &mut S) -> u8 {
    DEVICE_IDENTITY.device_family(src)
}

/// Device number, bits 15:0 of the PART word
pub fn device_number<S: DeviceInfo + ?Sized>(src: &mut S) -> u32 {
    DEVICE_IDENTITY.device_number(src)
}
