//! ESP32-S3 backend
//!
//! GPIOs are handed over as esp-hal `Flex` pins so the driver can switch the
//! signal pin between input and output at run time. Time comes from the
//! embassy time driver set up by `esp-hal-embassy`.
//!
//! The ESP32-S3 converter is typed per pin in esp-hal, so analog reads are not
//! wired up here; pair [`EspPins`] with [`crate::hal::NoAnalog`].

use embassy_time::Instant;
use esp_hal::gpio::{Flex, Level, Pull};
use heapless::Vec;

use crate::hal::{Clock, Direction, PinBank};

/// Pin bank over up to `N` flexible GPIOs, keyed by GPIO number.
pub struct EspPins<'d, const N: usize> {
    pins: Vec<(u8, Flex<'d>), N>,
}

impl<'d, const N: usize> Default for EspPins<'d, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'d, const N: usize> EspPins<'d, N> {
    pub fn new() -> Self {
        Self { pins: Vec::new() }
    }

    /// Register `pin` as GPIO number `gpio`.
    ///
    /// Hands the pin back if the bank is full.
    pub fn add(&mut self, gpio: u8, pin: Flex<'d>) -> Result<(), Flex<'d>> {
        self.pins.push((gpio, pin)).map_err(|(_, pin)| pin)
    }

    fn get(&self, gpio: u8) -> Option<&Flex<'d>> {
        let found = self.pins.iter().find(|(id, _)| *id == gpio).map(|(_, pin)| pin);
        if found.is_none() {
            log::warn!("gpio{} is not managed by this pin bank", gpio);
        }
        found
    }

    fn get_mut(&mut self, gpio: u8) -> Option<&mut Flex<'d>> {
        let found = self
            .pins
            .iter_mut()
            .find(|(id, _)| *id == gpio)
            .map(|(_, pin)| pin);
        if found.is_none() {
            log::warn!("gpio{} is not managed by this pin bank", gpio);
        }
        found
    }
}

impl<'d, const N: usize> PinBank for EspPins<'d, N> {
    fn init(&mut self, gpio: u8) {
        // esp-hal hands pins over already routed to GPIO
        if let Some(pin) = self.get_mut(gpio) {
            pin.set_as_input(Pull::None);
        }
    }

    fn set_direction(&mut self, gpio: u8, direction: Direction) {
        if let Some(pin) = self.get_mut(gpio) {
            match direction {
                Direction::Input => pin.set_as_input(Pull::None),
                Direction::Output => pin.set_as_output(),
            }
        }
    }

    fn set_level(&mut self, gpio: u8, high: bool) {
        if let Some(pin) = self.get_mut(gpio) {
            pin.set_level(Level::from(high));
        }
    }

    fn level(&self, gpio: u8) -> bool {
        self.get(gpio).is_some_and(|pin| pin.is_high())
    }

    fn enable_pull_up(&mut self, gpio: u8) {
        if let Some(pin) = self.get_mut(gpio) {
            pin.set_as_input(Pull::Up);
        }
    }
}

/// Clock backed by the embassy time driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
