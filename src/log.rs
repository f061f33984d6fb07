//! Logging macros
//!
//! Forward to [`defmt`](https://docs.rs/defmt) if the `defmt` feature is enabled and expand to
//! nothing otherwise.

#[cfg(feature = "defmt")]
mod backend {
    macro_rules! __trace {
        ($($arg:tt)*) => {{
            defmt::trace!($($arg)*);
        }};
    }

    macro_rules! __debug {
        ($($arg:tt)*) => {{
            defmt::debug!($($arg)*);
        }};
    }

    macro_rules! __warn {
        ($($arg:tt)*) => {{
            defmt::warn!($($arg)*);
        }};
    }

    pub(crate) use __debug as debug;
    pub(crate) use __trace as trace;
    pub(crate) use __warn as warn;
}

#[cfg(not(feature = "defmt"))]
mod backend {
    macro_rules! __stub {
        ($($arg:tt)*) => {{
            let _ = ($($arg)*); // Do nothing
        }};
    }

    pub(crate) use __stub as debug;
    pub(crate) use __stub as trace;
    pub(crate) use __stub as warn;
}

pub(crate) use backend::*;
