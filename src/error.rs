use core::fmt;

use crate::log;

/// Status code of a successful firmware call
pub const STATUS_OK: i32 = 0;
pub const STATUS_INVALID_OPERATION: i32 = -1;
pub const STATUS_INVALID_ARGUMENT: i32 = -2;

/// Errors reported by the configuration APIs of this crate
///
/// Native backends report the same two failure kinds, which are passed through unmodified.
#[derive(Debug, Eq, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The operation is not valid in the current state, for example configuring a GPIO pin
    /// which was never opened
    InvalidOperation,
    /// An argument was out of range, for example a slew rate limit larger than 7
    InvalidArgument,
}

impl Error {
    /// Map a firmware status code to a result. Unknown failure codes are reported as
    /// [`Error::InvalidOperation`]
    pub fn from_status(status: i32) -> Result<(), Error> {
        match status {
            STATUS_OK => Ok(()),
            STATUS_INVALID_OPERATION => Err(Error::InvalidOperation),
            STATUS_INVALID_ARGUMENT => Err(Error::InvalidArgument),
            other => {
                log::warn!("unknown firmware status {}", other);
                Err(Error::InvalidOperation)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOperation => f.write_str("invalid operation"),
            Error::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}
