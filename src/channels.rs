//! Wi-Fi channel descriptors

use strum::{Display, EnumIter, EnumString};

use crate::band::Segment;
use crate::error::Error;
use crate::OperatingClass;

/// Channel bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelBandwidth {
    #[strum(serialize = "20")]
    Bw20,
    #[strum(serialize = "40")]
    Bw40,
    #[strum(serialize = "80")]
    Bw80,
    /// Non-contiguous 80+80 MHz
    #[strum(serialize = "80+80")]
    Bw80_80,
    #[strum(serialize = "160")]
    Bw160,
}

impl ChannelBandwidth {
    /// Occupied bandwidth in MHz (80+80 reports the combined 160 MHz)
    pub fn mhz(self) -> u16 {
        match self {
            ChannelBandwidth::Bw20 => 20,
            ChannelBandwidth::Bw40 => 40,
            ChannelBandwidth::Bw80 => 80,
            ChannelBandwidth::Bw80_80 | ChannelBandwidth::Bw160 => 160,
        }
    }

    /// Convert a contiguous width in MHz into a bandwidth
    pub fn from_mhz(width_mhz: u16) -> Option<ChannelBandwidth> {
        match width_mhz {
            20 => Some(ChannelBandwidth::Bw20),
            40 => Some(ChannelBandwidth::Bw40),
            80 => Some(ChannelBandwidth::Bw80),
            160 => Some(ChannelBandwidth::Bw160),
            _ => None,
        }
    }
}

/// Coarse frequency band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FreqBand {
    Band2G4,
    Band5G,
}

/// Wi-Fi channel, a primary 20 MHz channel number and the bandwidth in use.
///
/// Channel numbers of 0 and 170 upwards are never valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WifiChannel {
    pub channel: u8,
    pub bandwidth: ChannelBandwidth,
}

const CH14_MHZ: u16 = 2484;

impl WifiChannel {
    pub const fn new(channel: u8, bandwidth: ChannelBandwidth) -> Self {
        Self { channel, bandwidth }
    }

    /// Fetch the band containing this channel, if any
    pub fn freq_band(&self) -> Option<FreqBand> {
        Segment::from_channel(self.channel).map(|s| s.freq_band())
    }

    /// Fetch the centre frequency of the primary 20 MHz channel in MHz
    pub fn mhz(&self) -> Option<u16> {
        let ch = self.channel as u16;

        match Segment::from_channel(self.channel)?.freq_band() {
            FreqBand::Band2G4 if self.channel == 14 => Some(CH14_MHZ),
            FreqBand::Band2G4 => Some(2407 + 5 * ch),
            FreqBand::Band5G => Some(5000 + 5 * ch),
        }
    }

    /// Attempt to convert a primary channel frequency into a channel
    pub fn from_mhz(freq_mhz: u16, bandwidth: ChannelBandwidth) -> Option<WifiChannel> {
        let index = match freq_mhz {
            CH14_MHZ => 14,
            2412..=2472 if (freq_mhz - 2407) % 5 == 0 => (freq_mhz - 2407) / 5,
            5180..=5845 if freq_mhz % 5 == 0 => (freq_mhz - 5000) / 5,
            _ => return None,
        };

        // Frequencies between segments (eg. 5330 MHz) have no channel
        let channel = index as u8;
        Segment::from_channel(channel)?;

        Some(WifiChannel::new(channel, bandwidth))
    }

    /// Resolve the operating class for this channel
    pub fn operating_class(&self) -> Result<OperatingClass, Error> {
        let segment = Segment::from_channel(self.channel)
            .ok_or(Error::InvalidChannel(self.channel))?;

        crate::classifier::lookup(segment, self.channel, self.bandwidth)
            .ok_or(Error::NoOperatingClass(*self))
    }
}
