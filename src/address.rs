//! Channel addressing and gate control
//!
//! The 74HC4067 routes its signal pin to the channel selected by the binary
//! address lines while the active-low enable pin is held low. Boards that
//! only use the lower channels can wire fewer address lines; the missing
//! high bits are then tied low on the chip.

use heapless::Vec;

use crate::error::MuxError;
use crate::hal::{Direction, PinBank};

/// Number of select inputs on the chip.
pub const MAX_ADDRESS_PINS: usize = 4;

/// Highest channel number of the chip.
pub const MAX_CHANNEL: u8 = 15;

/// Enable pin level that connects the signal pin (active low).
const GATE_CONNECTED: bool = false;

/// Enable pin and address lines of one multiplexer.
#[derive(Debug, Clone)]
pub struct ChannelAddress {
    enable_pin: u8,
    enabled: bool,
    address_pins: Vec<u8, MAX_ADDRESS_PINS>,
    current: u8,
}

impl ChannelAddress {
    /// Claim the enable and address pins and park the chip disconnected on
    /// channel 0.
    ///
    /// `address_pins` is least significant first.
    pub fn new<P: PinBank>(
        pins: &mut P,
        enable_pin: u8,
        address_pins: &[u8],
    ) -> Result<Self, MuxError> {
        if address_pins.is_empty() {
            return Err(MuxError::NoAddressPins);
        }
        let address_pins = Vec::from_slice(address_pins)
            .map_err(|_| MuxError::TooManyAddressPins(address_pins.len()))?;

        pins.init(enable_pin);
        pins.set_direction(enable_pin, Direction::Output);
        pins.set_level(enable_pin, !GATE_CONNECTED);

        for &pin in address_pins.iter() {
            pins.init(pin);
            pins.set_direction(pin, Direction::Output);
            pins.set_level(pin, false);
        }

        Ok(Self {
            enable_pin,
            enabled: false,
            address_pins,
            current: 0,
        })
    }

    pub fn enable_pin(&self) -> u8 {
        self.enable_pin
    }

    /// Address pins, least significant first.
    pub fn address_pins(&self) -> &[u8] {
        &self.address_pins
    }

    /// Number of wired address lines (1-4).
    pub fn width(&self) -> usize {
        self.address_pins.len()
    }

    /// Number of channels reachable with the wired address lines.
    pub fn channel_count(&self) -> u8 {
        1 << self.width()
    }

    /// Channel last written to the address lines.
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Whether the signal pin is connected to the current channel.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Latch `channel` onto the address lines.
    ///
    /// The gate is asserted while the address changes. With `connect` false
    /// it is released again right after, leaving the address latched and the
    /// signal path open. Bits above the wired address width are dropped.
    pub fn select<P: PinBank>(&mut self, pins: &mut P, channel: u8, connect: bool) {
        let channel = channel & MAX_CHANNEL;
        log::trace!("mux select channel {} (connect: {})", channel, connect);

        pins.set_level(self.enable_pin, GATE_CONNECTED);
        self.current = channel;

        for (bit, &pin) in self.address_pins.iter().enumerate() {
            pins.set_level(pin, (channel >> bit) & 1 == 1);
        }

        self.enabled = true;

        if !connect {
            self.disable(pins);
        }
    }

    /// Connect the signal pin to the current channel.
    pub fn enable<P: PinBank>(&mut self, pins: &mut P) {
        self.enabled = true;
        pins.set_level(self.enable_pin, GATE_CONNECTED);
    }

    /// Disconnect the signal pin, keeping the address.
    pub fn disable<P: PinBank>(&mut self, pins: &mut P) {
        self.enabled = false;
        pins.set_level(self.enable_pin, !GATE_CONNECTED);
    }
}
