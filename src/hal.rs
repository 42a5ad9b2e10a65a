//! Hardware capabilities consumed by the driver
//!
//! Pins are addressed by their GPIO number. The driver only ever calls the
//! methods below; pin muxing, register access and converter setup belong to
//! whoever implements them.

use embassy_time::Instant;

/// Direction of a GPIO pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Digital I/O addressed by GPIO number.
pub trait PinBank {
    /// Hand `pin` over to the GPIO function.
    fn init(&mut self, pin: u8);

    fn set_direction(&mut self, pin: u8, direction: Direction);

    /// Drive `pin` high (`true`) or low (`false`).
    fn set_level(&mut self, pin: u8, high: bool);

    /// Current logic level seen on `pin`.
    fn level(&self, pin: u8) -> bool;

    fn enable_pull_up(&mut self, pin: u8);
}

/// GPIO to converter channel table of the RP2040 ADC.
pub const RP2040_ADC_PINS: [(u8, u8); 3] = [(26, 0), (27, 1), (28, 2)];

/// Look up the converter channel wired to `pin` in `table`.
pub fn adc_channel_for(table: &[(u8, u8)], pin: u8) -> Option<u8> {
    table
        .iter()
        .find(|(gpio, _)| *gpio == pin)
        .map(|(_, channel)| *channel)
}

/// Analog-to-digital converter.
pub trait AnalogInput {
    /// Converter channel wired to `pin`, `None` if the pin has no analog
    /// function.
    fn channel_for_pin(&self, pin: u8) -> Option<u8> {
        adc_channel_for(&RP2040_ADC_PINS, pin)
    }

    fn select_channel(&mut self, channel: u8);

    /// Take one sample on the selected channel.
    fn read_sample(&mut self) -> u16;
}

/// Converter for boards without any analog input wired to the signal pin.
///
/// Every pin resolves to no channel, so analog reads come back empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAnalog;

impl AnalogInput for NoAnalog {
    fn channel_for_pin(&self, _pin: u8) -> Option<u8> {
        None
    }

    fn select_channel(&mut self, _channel: u8) {}

    fn read_sample(&mut self) -> u16 {
        0
    }
}

/// Monotonic time source used by the debouncer.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
