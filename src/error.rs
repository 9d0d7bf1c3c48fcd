
use crate::channels::{ChannelBandwidth, WifiChannel};
use crate::OperatingClass;

/// Operating class lookup errors
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Channel number lies outside every known band segment
    InvalidChannel(u8),

    /// Channel is within a segment but no class exists for this bandwidth
    NoOperatingClass(WifiChannel),

    /// Two table rows accept the same channel and bandwidth
    TableOverlap {
        channel: u8,
        bandwidth: ChannelBandwidth,
        first: OperatingClass,
        second: OperatingClass,
    },

    /// Table row with a zero stride / class, or bounds outside its segment
    MalformedEntry {
        operating_class: OperatingClass,
    },

    /// Output buffer full
    BufferFull,
}
