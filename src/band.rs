//! Band segmentation
//!
//! Splits the 8-bit channel number space into the contiguous segments that
//! carry operating classes. Everything outside these is rejected before any
//! table lookup.

use core::ops::RangeInclusive;

use crate::channels::FreqBand;
use crate::table::{self, OperatingClassEntry};

/// Spectral segment containing a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    /// 2.4 GHz, channels 1 to 14
    Band2G4,
    /// 5 GHz UNII-1 / UNII-2, channels 36 to 64
    Band5GLower,
    /// 5 GHz UNII-2e / UNII-3, channels 100 to 169
    Band5GUpper,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Band2G4, Segment::Band5GLower, Segment::Band5GUpper];

    /// Locate the segment for a channel number, `None` if the channel
    /// is outside every segment (0, 15-35, 65-99, 170-255)
    pub fn from_channel(channel: u8) -> Option<Segment> {
        match channel {
            1..=14 => Some(Segment::Band2G4),
            36..=64 => Some(Segment::Band5GLower),
            100..=169 => Some(Segment::Band5GUpper),
            _ => None,
        }
    }

    /// Inclusive channel bounds of the segment
    pub fn range(self) -> RangeInclusive<u8> {
        match self {
            Segment::Band2G4 => 1..=14,
            Segment::Band5GLower => 36..=64,
            Segment::Band5GUpper => 100..=169,
        }
    }

    pub fn freq_band(self) -> FreqBand {
        match self {
            Segment::Band2G4 => FreqBand::Band2G4,
            Segment::Band5GLower | Segment::Band5GUpper => FreqBand::Band5G,
        }
    }

    /// Operating class table rows owned by this segment
    pub fn table(self) -> &'static [OperatingClassEntry] {
        match self {
            Segment::Band2G4 => table::TABLE_2G4,
            Segment::Band5GLower => table::TABLE_5G_LOWER,
            Segment::Band5GUpper => table::TABLE_5G_UPPER,
        }
    }
}
