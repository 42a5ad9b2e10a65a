//! Driver errors

use core::fmt;

use crate::address::MAX_ADDRESS_PINS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuxError {
    /// Construction needs at least one address pin
    NoAddressPins,
    /// More address pins than the chip has select inputs
    TooManyAddressPins(usize),
    /// The signal pin is unconfigured or configured as an input
    NotAnOutput,
    /// Analog output is not implemented
    AnalogWriteUnsupported,
}

impl fmt::Display for MuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuxError::NoAddressPins => f.write_str("no address pins given"),
            MuxError::TooManyAddressPins(count) => write!(
                f,
                "{} address pins given, at most {} supported",
                count, MAX_ADDRESS_PINS
            ),
            MuxError::NotAnOutput => f.write_str("signal pin is not configured as an output"),
            MuxError::AnalogWriteUnsupported => f.write_str("analog write is not supported"),
        }
    }
}
