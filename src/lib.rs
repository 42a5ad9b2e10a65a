//! Driver for the 74HC4067 16 channel analog/digital multiplexer.
//!
//! The chip is wired with one active-low enable pin, one to four address
//! pins and a single shared signal pin. The [`Multiplexer`] turns channel
//! requests into pin states, reads and writes the signal pin as analog or
//! digital, and debounces the digital level into press/release edges.
//!
//! Hardware is reached through the capability traits in [`hal`], so the
//! driver runs the same against a chip HAL and against host fakes.
//!
//! Basic example:
//!
//! ```ignore
//! // Enable on GPIO14, address lines on GPIO13..GPIO10 (least significant first).
//! let mut mux = Multiplexer::new(pins, adc, clock, 14, &[13, 12, 11, 10])?;
//! // Buttons wired to the channels, read through GPIO26.
//! mux.configure_signal(
//!     SignalConfig::digital_input(26).with_debounce(Duration::from_millis(50)),
//! );
//! loop {
//!     if let Some(Edge::Rising) = mux.update() {
//!         log::info!("channel {} pressed", mux.current_channel());
//!     }
//!     Timer::after_millis(1).await;
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod address;
pub mod debounce;
pub mod error;
pub mod hal;
pub mod mux;
pub mod signal;

#[cfg(feature = "esp32s3")]
pub mod esp;

#[cfg(test)]
mod fake;

pub use address::ChannelAddress;
pub use debounce::{Debouncer, Edge};
pub use error::MuxError;
pub use hal::{AnalogInput, Clock, Direction, NoAnalog, PinBank};
pub use mux::Multiplexer;
pub use signal::{SignalConfig, SignalDirection, SignalKind};
