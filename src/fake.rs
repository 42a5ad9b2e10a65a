//! Recording fakes for the hardware capabilities

use core::cell::Cell;

use embassy_time::Instant;

use crate::hal::{AnalogInput, Clock, Direction, PinBank};

pub const PIN_COUNT: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    Init(u8),
    Direction(u8, Direction),
    Level(u8, bool),
    PullUp(u8),
}

/// GPIO bank that remembers every call and lets tests drive input levels.
pub struct FakePins {
    driven: [bool; PIN_COUNT],
    external: [bool; PIN_COUNT],
    directions: [Option<Direction>; PIN_COUNT],
    pull_ups: [bool; PIN_COUNT],
    pub events: Vec<PinEvent>,
}

impl FakePins {
    pub fn new() -> Self {
        Self {
            driven: [false; PIN_COUNT],
            external: [false; PIN_COUNT],
            directions: [None; PIN_COUNT],
            pull_ups: [false; PIN_COUNT],
            events: Vec::new(),
        }
    }

    /// Level an external device puts on `pin` while it is an input.
    pub fn set_input(&mut self, pin: u8, high: bool) {
        self.external[pin as usize] = high;
    }

    /// Last level driven by the driver.
    pub fn driven(&self, pin: u8) -> bool {
        self.driven[pin as usize]
    }

    pub fn direction(&self, pin: u8) -> Option<Direction> {
        self.directions[pin as usize]
    }

    pub fn has_pull_up(&self, pin: u8) -> bool {
        self.pull_ups[pin as usize]
    }

    /// Levels driven onto `pin`, oldest first.
    pub fn levels_of(&self, pin: u8) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PinEvent::Level(p, high) if *p == pin => Some(*high),
                _ => None,
            })
            .collect()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl PinBank for FakePins {
    fn init(&mut self, pin: u8) {
        self.pull_ups[pin as usize] = false;
        self.events.push(PinEvent::Init(pin));
    }

    fn set_direction(&mut self, pin: u8, direction: Direction) {
        self.directions[pin as usize] = Some(direction);
        self.events.push(PinEvent::Direction(pin, direction));
    }

    fn set_level(&mut self, pin: u8, high: bool) {
        self.driven[pin as usize] = high;
        self.events.push(PinEvent::Level(pin, high));
    }

    fn level(&self, pin: u8) -> bool {
        match self.directions[pin as usize] {
            Some(Direction::Input) => self.external[pin as usize],
            _ => self.driven[pin as usize],
        }
    }

    fn enable_pull_up(&mut self, pin: u8) {
        self.pull_ups[pin as usize] = true;
        self.events.push(PinEvent::PullUp(pin));
    }
}

/// Converter returning a fixed sample per channel.
pub struct FakeAdc {
    pub samples: [u16; 4],
    pub selected: Option<u8>,
}

impl FakeAdc {
    pub fn new() -> Self {
        Self {
            samples: [100, 1100, 2100, 3100],
            selected: None,
        }
    }
}

impl AnalogInput for FakeAdc {
    fn select_channel(&mut self, channel: u8) {
        self.selected = Some(channel);
    }

    fn read_sample(&mut self) -> u16 {
        self.selected
            .map(|channel| self.samples[channel as usize])
            .unwrap_or(0)
    }
}

/// Millisecond clock moved by hand.
#[derive(Default)]
pub struct FakeClock {
    millis: Cell<u64>,
}

impl FakeClock {
    pub fn set(&self, millis: u64) {
        self.millis.set(millis);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.millis.get())
    }
}
