//! Operating class tables
//!
//! One row per (bandwidth, channel subset) within a segment, see IEEE 802.11
//! Annex E table E-4 (global operating classes). All irregularities of the
//! standard table are encoded here as data, the matching logic in
//! [`OperatingClassEntry::matches`] is shared by every row.

use log::{debug, error};
use strum::IntoEnumIterator;

use crate::band::Segment;
use crate::channels::ChannelBandwidth::{self, *};
use crate::error::Error;
use crate::OperatingClass;

/// A single operating class table row
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OperatingClassEntry {
    pub bandwidth: ChannelBandwidth,

    /// First channel covered by this row
    pub segment_start: u8,
    /// Last channel covered by this row (inclusive)
    pub segment_end: u8,

    /// Channels are eligible when `(channel - alignment_offset) % alignment_stride == 0`
    pub alignment_stride: u8,
    pub alignment_offset: u8,

    pub operating_class: OperatingClass,

    /// Channels rejected despite satisfying range and alignment
    pub extra_exclusions: &'static [u8],
}

impl OperatingClassEntry {
    /// Create a row aligned to its first channel
    pub const fn new(bandwidth: ChannelBandwidth, segment_start: u8, segment_end: u8, alignment_stride: u8, operating_class: OperatingClass) -> Self {
        Self {
            bandwidth,
            segment_start,
            segment_end,
            alignment_stride,
            alignment_offset: segment_start,
            operating_class,
            extra_exclusions: &[],
        }
    }

    pub const fn excluding(self, extra_exclusions: &'static [u8]) -> Self {
        Self { extra_exclusions, ..self }
    }

    /// Check whether this row accepts the provided channel and bandwidth
    pub fn matches(&self, channel: u8, bandwidth: ChannelBandwidth) -> bool {
        if self.bandwidth != bandwidth {
            return false;
        }

        if channel < self.segment_start || channel > self.segment_end {
            return false;
        }

        // Checked so a channel below the offset can never wrap into alignment
        let aligned = match channel.checked_sub(self.alignment_offset) {
            Some(d) if self.alignment_stride > 0 => d % self.alignment_stride == 0,
            _ => false,
        };

        aligned && !self.extra_exclusions.contains(&channel)
    }
}

const CH14: &[u8] = &[14];
const CH165_169: &[u8] = &[165, 169];

/// 2.4 GHz, channels 1-14
///
/// 40 MHz cannot be split into 40+ / 40- from the channel number alone,
/// so each sub-range maps to a single class.
pub static TABLE_2G4: &[OperatingClassEntry] = &[
    OperatingClassEntry::new(Bw20, 1, 13, 1, 81),
    OperatingClassEntry::new(Bw20, 14, 14, 1, 82),
    OperatingClassEntry::new(Bw40, 1, 9, 1, 83),
    OperatingClassEntry::new(Bw40, 10, 14, 1, 84).excluding(CH14),
];

/// 5 GHz lower, channels 36-64
pub static TABLE_5G_LOWER: &[OperatingClassEntry] = &[
    OperatingClassEntry::new(Bw20, 36, 48, 4, 115),
    OperatingClassEntry::new(Bw20, 52, 64, 4, 118),

    OperatingClassEntry::new(Bw40, 36, 48, 8, 116),
    OperatingClassEntry::new(Bw40, 40, 48, 8, 117),
    OperatingClassEntry::new(Bw40, 52, 64, 8, 119),
    OperatingClassEntry::new(Bw40, 56, 64, 8, 120),

    OperatingClassEntry::new(Bw80, 36, 64, 16, 128),
    OperatingClassEntry::new(Bw80_80, 36, 64, 16, 130),
    OperatingClassEntry::new(Bw160, 36, 64, 32, 129),
];

/// 5 GHz upper, channels 100-169
///
/// 165 and 169 only exist as 20 MHz channels.
pub static TABLE_5G_UPPER: &[OperatingClassEntry] = &[
    OperatingClassEntry::new(Bw20, 100, 144, 4, 121),
    OperatingClassEntry::new(Bw20, 149, 161, 4, 124),
    OperatingClassEntry::new(Bw20, 165, 169, 4, 125),

    OperatingClassEntry::new(Bw40, 100, 144, 8, 122),
    OperatingClassEntry::new(Bw40, 104, 144, 8, 123),
    OperatingClassEntry::new(Bw40, 149, 169, 8, 126).excluding(CH165_169),
    OperatingClassEntry::new(Bw40, 153, 169, 8, 127).excluding(CH165_169),

    OperatingClassEntry::new(Bw80, 100, 144, 16, 128),
    OperatingClassEntry::new(Bw80, 149, 169, 16, 128).excluding(CH165_169),
    OperatingClassEntry::new(Bw80_80, 100, 144, 16, 130),
    OperatingClassEntry::new(Bw80_80, 149, 169, 16, 130).excluding(CH165_169),

    OperatingClassEntry::new(Bw160, 100, 128, 32, 129),
];

/// Iterate over every row of every segment table
pub fn entries() -> impl Iterator<Item = (Segment, &'static OperatingClassEntry)> {
    let segments: &'static [Segment] = &Segment::ALL;
    segments.iter().flat_map(|s| s.table().iter().map(move |e| (*s, e)))
}

/// Check table construction invariants over the whole channel / bandwidth domain.
///
/// Every row must sit inside its segment with a sane stride, offset and class,
/// and no (channel, bandwidth) pair may be accepted by more than one row.
pub fn validate() -> Result<(), Error> {
    for (segment, e) in entries() {
        let range = segment.range();

        let bounded = range.contains(&e.segment_start)
            && range.contains(&e.segment_end)
            && e.segment_start <= e.segment_end;
        let offset_ok = e.alignment_offset >= e.segment_start
            && e.alignment_offset <= e.segment_end;

        if !bounded || !offset_ok || e.alignment_stride == 0 || e.operating_class == 0 {
            error!("Malformed {:?} entry for class {}: {:?}", segment, e.operating_class, e);
            return Err(Error::MalformedEntry { operating_class: e.operating_class });
        }
    }

    for channel in 0..=u8::MAX {
        for bandwidth in ChannelBandwidth::iter() {
            let mut matches = entries().filter(|(_s, e)| e.matches(channel, bandwidth));

            if let (Some((_, first)), Some((_, second))) = (matches.next(), matches.next()) {
                error!("Channel {} at {} MHz matches classes {} and {}",
                    channel, bandwidth, first.operating_class, second.operating_class);

                return Err(Error::TableOverlap {
                    channel,
                    bandwidth,
                    first: first.operating_class,
                    second: second.operating_class,
                });
            }
        }
    }

    debug!("Operating class table OK ({} entries)", entries().count());

    Ok(())
}
