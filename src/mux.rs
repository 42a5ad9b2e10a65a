// Debounced driver for a 74HC4067 16 channel multiplexer chip.
// One signal pin is shared by all channels. Reads and the edge queries select the requested
// channel, act on the signal pin and put the previous address and gate state back. Writes leave
// the written channel addressed so the output stays driven.

//Basic example:
//First create the multiplexer with its enable pin and address pins (least significant first).
//Wire only as many address pins as the board needs.
//    let mut mux = Multiplexer::new(pins, NoAnalog, clock, 14, &[13, 12, 11, 10])?;
//Then configure the signal pin.
//    mux.configure_signal(SignalConfig::digital_input_pull_up(26));
//Finally call update from a loop or a periodic task, faster than the debounce interval.
//    mux.update();
//    if mux.is_released(Some(3)) { ... }

use crate::address::ChannelAddress;
use crate::debounce::{Debouncer, Edge};
use crate::error::MuxError;
use crate::hal::{AnalogInput, Clock, PinBank};
use crate::signal::{SignalConfig, SignalKind, SignalLine, SignalMode};

pub struct Multiplexer<P, A, C> {
    pins: P,
    adc: A,
    clock: C,
    address: ChannelAddress,
    signal: Option<SignalLine>,
}

impl<P: PinBank, A: AnalogInput, C: Clock> Multiplexer<P, A, C> {
    /// Claim the enable pin and 1-4 address pins. The chip starts
    /// disconnected on channel 0 with no signal pin configured.
    pub fn new(
        mut pins: P,
        adc: A,
        clock: C,
        enable_pin: u8,
        address_pins: &[u8],
    ) -> Result<Self, MuxError> {
        let address = ChannelAddress::new(&mut pins, enable_pin, address_pins)?;

        Ok(Self {
            pins,
            adc,
            clock,
            address,
            signal: None,
        })
    }

    /// Address `channel` and connect the signal pin to it if `connect`.
    pub fn select(&mut self, channel: u8, connect: bool) {
        self.address.select(&mut self.pins, channel, connect);
    }

    /// Connect the signal pin to the current channel.
    pub fn enable(&mut self) {
        self.address.enable(&mut self.pins);
    }

    /// Disconnect the signal pin, keeping the address.
    pub fn disable(&mut self) {
        self.address.disable(&mut self.pins);
    }

    pub fn current_channel(&self) -> u8 {
        self.address.current()
    }

    pub fn is_enabled(&self) -> bool {
        self.address.is_enabled()
    }

    pub fn address(&self) -> &ChannelAddress {
        &self.address
    }

    /// (Re)configure the signal pin, dropping any previous configuration
    /// and debounce history.
    pub fn configure_signal(&mut self, config: SignalConfig) {
        self.signal = Some(SignalLine::configure(&mut self.pins, &self.adc, config));
    }

    pub fn signal_config(&self) -> Option<&SignalConfig> {
        self.signal.as_ref().map(|signal| &signal.config)
    }

    /// Debounce state, present for digital inputs only.
    pub fn debouncer(&self) -> Option<&Debouncer> {
        self.signal.as_ref().and_then(SignalLine::debouncer)
    }

    /// Read the signal pin on `channel`, or on the current channel if `None`.
    ///
    /// Analog pins return a converter sample, digital pins the raw level as
    /// 0 or 1. Returns `None` when no signal pin is configured or the analog
    /// pin has no converter channel.
    pub fn read(&mut self, channel: Option<u8>) -> Option<u16> {
        self.on_channel(channel, Self::sample)
    }

    /// Drive `value` out through `channel` and leave it addressed.
    ///
    /// `kind` overrides the configured signal kind. Only digital output is
    /// supported; any non-zero `value` drives the pin high.
    pub fn write(
        &mut self,
        channel: u8,
        value: u16,
        kind: Option<SignalKind>,
    ) -> Result<(), MuxError> {
        let Some(signal) = &self.signal else {
            log::debug!("mux write to channel {} with no signal pin", channel);
            return Err(MuxError::NotAnOutput);
        };
        if signal.config.direction.is_input() {
            log::debug!("mux write to channel {} while signal is an input", channel);
            return Err(MuxError::NotAnOutput);
        }

        let pin = signal.config.pin;
        match kind.unwrap_or(signal.config.kind) {
            SignalKind::Analog => return Err(MuxError::AnalogWriteUnsupported),
            SignalKind::Digital => {
                self.address.disable(&mut self.pins);
                self.pins.set_level(pin, value != 0);
            }
        }

        self.address.select(&mut self.pins, channel, true);
        Ok(())
    }

    pub fn write_digital(&mut self, channel: u8, high: bool) -> Result<(), MuxError> {
        self.write(channel, u16::from(high), Some(SignalKind::Digital))
    }

    /// Sample the signal pin once for debouncing.
    ///
    /// Must be called regularly, faster than the debounce interval. Does
    /// nothing unless the signal pin is a digital input. Returns the edge
    /// that settled on this call.
    pub fn update(&mut self) -> Option<Edge> {
        let signal = self.signal.as_mut()?;
        let pin = signal.config.pin;
        let SignalMode::Digital {
            debounce: Some(debouncer),
        } = &mut signal.mode
        else {
            return None;
        };

        let raw = self.pins.level(pin);
        debouncer.update(raw, self.clock.now())
    }

    /// Whether a low to high edge settled on the last update.
    pub fn is_pressed(&mut self, channel: Option<u8>) -> bool {
        self.on_channel(channel, |mux| {
            mux.debouncer().is_some_and(Debouncer::is_pressed)
        })
    }

    /// Whether a high to low edge settled on the last update.
    pub fn is_released(&mut self, channel: Option<u8>) -> bool {
        self.on_channel(channel, |mux| {
            mux.debouncer().is_some_and(Debouncer::is_released)
        })
    }

    /// Debounced level of the signal pin.
    pub fn read_debounced(&mut self, channel: Option<u8>) -> Option<bool> {
        self.on_channel(channel, |mux| mux.debouncer().map(Debouncer::level))
    }

    pub fn pins(&self) -> &P {
        &self.pins
    }

    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    /// Give the capabilities back. Pins keep their current state.
    pub fn release(self) -> (P, A, C) {
        (self.pins, self.adc, self.clock)
    }

    /// Run `f` with `channel` selected and connected, then restore the
    /// previous channel and gate state.
    fn on_channel<R>(&mut self, channel: Option<u8>, f: impl FnOnce(&mut Self) -> R) -> R {
        let Some(channel) = channel else {
            return f(self);
        };

        let last_channel = self.address.current();
        let last_enabled = self.address.is_enabled();

        self.address.select(&mut self.pins, channel, true);
        let out = f(self);
        self.address.select(&mut self.pins, last_channel, last_enabled);

        out
    }

    fn sample(&mut self) -> Option<u16> {
        let signal = self.signal.as_ref()?;

        match signal.mode {
            SignalMode::Analog {
                adc_channel: Some(adc_channel),
            } => {
                self.adc.select_channel(adc_channel);
                Some(self.adc.read_sample())
            }
            SignalMode::Analog { adc_channel: None } => None,
            SignalMode::Digital { .. } => Some(u16::from(self.pins.level(signal.config.pin))),
        }
    }
}
