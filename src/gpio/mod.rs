//! # GPIO module
//!
//! This module does not drive or read pins. It provides the Giant Gecko specific port
//! configuration on top of a [`GpioControl`] backend:
//!
//! - [`pins`]: pin numbering, `port * 16 + pin`
//! - [`config`]: slew rate limit and drive strength, for normal and alternate function use
//!
//! ## Examples
//!
//! - `demos/slew-rate.rs`
pub mod config;
pub use config::*;

pub mod pins;
pub use pins::*;
