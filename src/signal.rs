//! Signal pin configuration
//!
//! The signal pin is shared by all channels. Its direction decides whether
//! the driver reads or writes through the chip, its kind whether values go
//! through the analog converter or plain GPIO.

use embassy_time::Duration;

use crate::debounce::Debouncer;
use crate::hal::{AnalogInput, Direction, PinBank};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalDirection {
    Input,
    InputPullUp,
    Output,
}

impl SignalDirection {
    pub fn is_input(self) -> bool {
        matches!(self, SignalDirection::Input | SignalDirection::InputPullUp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Analog,
    Digital,
}

/// How the signal pin is wired and interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalConfig {
    /// GPIO number of the signal pin
    pub pin: u8,
    pub direction: SignalDirection,
    pub kind: SignalKind,
    /// How long a digital input level must hold before it counts
    pub debounce_interval: Duration,
}

impl SignalConfig {
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(20);

    pub fn new(pin: u8, direction: SignalDirection, kind: SignalKind) -> Self {
        Self {
            pin,
            direction,
            kind,
            debounce_interval: Self::DEFAULT_DEBOUNCE,
        }
    }

    /// Buttons or switches driving the signal pin, no pull.
    pub fn digital_input(pin: u8) -> Self {
        Self::new(pin, SignalDirection::Input, SignalKind::Digital)
    }

    /// Buttons pulling the signal pin to ground.
    pub fn digital_input_pull_up(pin: u8) -> Self {
        Self::new(pin, SignalDirection::InputPullUp, SignalKind::Digital)
    }

    pub fn digital_output(pin: u8) -> Self {
        Self::new(pin, SignalDirection::Output, SignalKind::Digital)
    }

    /// Potentiometers or sensors sampled by the converter.
    pub fn analog_input(pin: u8) -> Self {
        Self::new(pin, SignalDirection::Input, SignalKind::Analog)
    }

    pub fn with_debounce(mut self, interval: Duration) -> Self {
        self.debounce_interval = interval;
        self
    }
}

/// Kind specific state of a configured signal pin.
#[derive(Debug, Clone)]
pub(crate) enum SignalMode {
    /// `adc_channel` is `None` when the pin has no converter channel.
    Analog { adc_channel: Option<u8> },
    /// `debounce` only exists while the pin is an input.
    Digital { debounce: Option<Debouncer> },
}

/// A configured signal pin.
#[derive(Debug, Clone)]
pub(crate) struct SignalLine {
    pub(crate) config: SignalConfig,
    pub(crate) mode: SignalMode,
}

impl SignalLine {
    /// Put the pin into the requested direction and derive the kind state.
    pub(crate) fn configure<P: PinBank, A: AnalogInput>(
        pins: &mut P,
        adc: &A,
        config: SignalConfig,
    ) -> Self {
        let pin = config.pin;
        pins.init(pin);

        match config.direction {
            SignalDirection::Input => {
                // Drive low first so no pull-up is left enabled
                pins.set_level(pin, false);
                pins.set_direction(pin, Direction::Input);
            }
            SignalDirection::InputPullUp => {
                pins.set_direction(pin, Direction::Input);
                pins.enable_pull_up(pin);
            }
            SignalDirection::Output => pins.set_direction(pin, Direction::Output),
        }

        let initial = config.direction.is_input().then(|| pins.level(pin));

        let mode = match config.kind {
            SignalKind::Analog => {
                let adc_channel = adc.channel_for_pin(pin);
                if adc_channel.is_none() {
                    log::debug!("gpio{} has no converter channel, analog reads disabled", pin);
                }
                SignalMode::Analog { adc_channel }
            }
            SignalKind::Digital => SignalMode::Digital {
                debounce: initial.map(|level| Debouncer::new(level, config.debounce_interval)),
            },
        };

        log::debug!(
            "mux signal gpio{} configured as {:?} {:?}",
            pin,
            config.kind,
            config.direction
        );

        Self { config, mode }
    }

    pub(crate) fn debouncer(&self) -> Option<&Debouncer> {
        match &self.mode {
            SignalMode::Digital { debounce } => debounce.as_ref(),
            SignalMode::Analog { .. } => None,
        }
    }
}
