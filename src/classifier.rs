//! Operating class classifier
//!
//! Maps a (channel, bandwidth) pair onto its IEEE 802.11 operating class.
//! Lookups are pure and allocation free, invalid combinations resolve to
//! [`INVALID_OPERATING_CLASS`].

use log::{trace, debug};
use strum::IntoEnumIterator;

use crate::band::Segment;
use crate::channels::{ChannelBandwidth, WifiChannel};
use crate::error::Error;
use crate::OperatingClass;

/// Reserved class value for channels without an operating class
pub const INVALID_OPERATING_CLASS: OperatingClass = 0;

/// Fetch the operating class for a channel, returning
/// [`INVALID_OPERATING_CLASS`] if the channel and bandwidth combination
/// has no defined class.
pub fn get_operating_class_by_channel(ch: &WifiChannel) -> OperatingClass {
    operating_class(ch.channel, ch.bandwidth).unwrap_or(INVALID_OPERATING_CLASS)
}

/// Fetch the operating class for a channel number and bandwidth
pub fn operating_class(channel: u8, bandwidth: ChannelBandwidth) -> Option<OperatingClass> {
    let segment = Segment::from_channel(channel)?;

    lookup(segment, channel, bandwidth)
}

/// Scan the table rows for a known segment
pub(crate) fn lookup(segment: Segment, channel: u8, bandwidth: ChannelBandwidth) -> Option<OperatingClass> {
    let mut matches = segment.table().iter().filter(|e| e.matches(channel, bandwidth));

    let entry = matches.next()?;
    debug_assert!(matches.next().is_none(), "overlapping operating class entries for channel {}", channel);

    Some(entry.operating_class)
}

/// Iterate over every channel and bandwidth combination with an operating class
pub fn valid_channels() -> impl Iterator<Item = (WifiChannel, OperatingClass)> {
    (0..=u8::MAX)
        .flat_map(|channel| ChannelBandwidth::iter().map(move |bw| WifiChannel::new(channel, bw)))
        .filter_map(|c| operating_class(c.channel, c.bandwidth).map(|class| (c, class)))
}

/// Collect the distinct operating classes covered by a set of supported
/// channels, in first-seen order. Channels without a class are skipped.
pub fn supported_operating_classes<I, const N: usize>(channels: I) -> Result<heapless::Vec<OperatingClass, N>, Error>
where
    I: IntoIterator<Item = WifiChannel>,
{
    let mut classes = heapless::Vec::new();

    for c in channels {
        let class = match c.operating_class() {
            Ok(v) => v,
            Err(e) => {
                trace!("Skipping channel {} ({} MHz): {:?}", c.channel, c.bandwidth, e);
                continue;
            }
        };

        if classes.contains(&class) {
            continue;
        }

        classes.push(class).map_err(|_| Error::BufferFull)?;
    }

    debug!("Supported operating classes: {:?}", classes);

    Ok(classes)
}

#[cfg(test)]
mod test {
    use std::vec::Vec;

    use super::*;
    use crate::channels::ChannelBandwidth::*;

    fn class_of(channel: u8, bandwidth: ChannelBandwidth) -> OperatingClass {
        get_operating_class_by_channel(&WifiChannel::new(channel, bandwidth))
    }

    fn expect_classes<C: IntoIterator<Item = u8>>(channels: C, expected: &[(ChannelBandwidth, OperatingClass)]) {
        for channel in channels {
            for (bw, class) in expected {
                assert_eq!(class_of(channel, *bw), *class, "channel {} at {} MHz", channel, bw);
            }
        }
    }

    #[test]
    fn valid_2g4() {
        expect_classes(1..=9, &[(Bw20, 81), (Bw40, 83)]);
        expect_classes(10..=13, &[(Bw20, 81), (Bw40, 84)]);
        expect_classes([14], &[(Bw20, 82)]);
    }

    #[test]
    fn valid_5g_lower() {
        expect_classes([36, 44], &[(Bw20, 115), (Bw40, 116)]);
        expect_classes([40, 48], &[(Bw20, 115), (Bw40, 117)]);
        expect_classes([52, 60], &[(Bw20, 118), (Bw40, 119)]);
        expect_classes([56, 64], &[(Bw20, 118), (Bw40, 120)]);
    }

    #[test]
    fn valid_5g_upper() {
        expect_classes((100..=140).step_by(8), &[(Bw20, 121), (Bw40, 122)]);
        expect_classes((104..=144).step_by(8), &[(Bw20, 121), (Bw40, 123)]);
        expect_classes([149, 157], &[(Bw20, 124), (Bw40, 126)]);
        expect_classes([153, 161], &[(Bw20, 124), (Bw40, 127)]);
        expect_classes([165, 169], &[(Bw20, 125)]);
    }

    #[test]
    fn valid_vht() {
        expect_classes([36, 52, 100, 116, 132, 149], &[(Bw80, 128), (Bw80_80, 130)]);
        expect_classes([36, 100], &[(Bw160, 129)]);
    }

    #[test]
    fn end_to_end() {
        assert_eq!(class_of(100, Bw80), 128);
        assert_eq!(class_of(149, Bw40), 126);
        assert_eq!(class_of(36, Bw160), 129);
        assert_eq!(class_of(7, Bw80_80), INVALID_OPERATING_CLASS);
        assert_eq!(class_of(70, Bw20), INVALID_OPERATING_CLASS);
        assert_eq!(class_of(14, Bw40), INVALID_OPERATING_CLASS);
    }

    /// Build the set of channels that must be rejected at a given bandwidth
    fn invalid_channels(bandwidth: ChannelBandwidth) -> Vec<u8> {
        let mut result = Vec::new();

        // Channel 0 is never valid
        result.push(0);

        // 1-13 only carry 20 and 40 MHz classes, 14 is 20 MHz only
        if bandwidth != Bw20 && bandwidth != Bw40 {
            result.extend(1..=13);
        }
        if bandwidth != Bw20 {
            result.push(14);
        }

        result.extend(15..=35);

        // Both 40+ and 40- classes exist so 40 MHz steps like 20 MHz
        let jump = match bandwidth {
            Bw20 | Bw40 => 4,
            Bw80 | Bw80_80 => 16,
            Bw160 => 32,
        };
        let mut add_unaligned = |start: u8, end: u8| {
            result.extend((start..=end).filter(|c| (c - start) % jump != 0));
        };

        add_unaligned(36, 64);
        add_unaligned(100, 144);
        add_unaligned(149, 169);

        result.extend(65..=99);
        result.extend(145..=148);

        if bandwidth != Bw20 {
            result.extend([165, 169]);
        }

        result.extend(170..=254);
        result.push(u8::MAX);

        result
    }

    #[test]
    fn invalid_channels_rejected() {
        for bw in ChannelBandwidth::iter() {
            for channel in invalid_channels(bw) {
                assert_eq!(class_of(channel, bw), INVALID_OPERATING_CLASS, "channel {} at {} MHz", channel, bw);
                assert_eq!(operating_class(channel, bw), None);
            }
        }
    }

    #[test]
    fn out_of_band_rejected() {
        for bw in ChannelBandwidth::iter() {
            for channel in [0].iter().copied().chain(15..=35).chain(65..=99).chain(170..=u8::MAX) {
                assert_eq!(class_of(channel, bw), INVALID_OPERATING_CLASS);
                assert_eq!(WifiChannel::new(channel, bw).operating_class(), Err(Error::InvalidChannel(channel)));
            }
        }
    }

    #[test]
    fn vht160_upper_blocks() {
        // Only the 36-64 and 100-128 blocks carry 160 MHz
        assert_eq!(class_of(132, Bw160), INVALID_OPERATING_CLASS);
        assert_eq!(class_of(149, Bw160), INVALID_OPERATING_CLASS);
    }

    #[test]
    fn idempotent() {
        for (c, class) in valid_channels() {
            assert_eq!(class_of(c.channel, c.bandwidth), class);
            assert_eq!(class_of(c.channel, c.bandwidth), class);
        }
    }

    #[test]
    fn exhaustive() {
        for channel in 0..=u8::MAX {
            for bw in ChannelBandwidth::iter() {
                let segment = match Segment::from_channel(channel) {
                    Some(s) => s,
                    None => {
                        assert_eq!(class_of(channel, bw), INVALID_OPERATING_CLASS);
                        continue;
                    }
                };

                let n = segment.table().iter().filter(|e| e.matches(channel, bw)).count();
                assert!(n <= 1, "channel {} at {} MHz matched {} entries", channel, bw, n);

                match (n, class_of(channel, bw)) {
                    (0, class) => assert_eq!(class, INVALID_OPERATING_CLASS),
                    (_, class) => assert_ne!(class, INVALID_OPERATING_CLASS),
                }
            }
        }
    }

    #[test]
    fn valid_channel_counts() {
        let count = |bw| valid_channels().filter(|(c, _)| c.bandwidth == bw).count();

        // 14 + 8 + 12 + 4 + 2
        assert_eq!(count(Bw20), 40);
        // 13 + 8 + 12 + 4
        assert_eq!(count(Bw40), 37);
        assert_eq!(count(Bw80), 6);
        assert_eq!(count(Bw80_80), 6);
        assert_eq!(count(Bw160), 2);
    }

    #[test]
    fn supported_classes() {
        let _ = simplelog::SimpleLogger::init(log::LevelFilter::Debug, simplelog::Config::default());

        let channels = (36..=64).step_by(4)
            .flat_map(|ch| ChannelBandwidth::iter().filter(|bw| bw.mhz() <= 80).map(move |bw| WifiChannel::new(ch, bw)));

        let classes = supported_operating_classes::<_, 16>(channels).unwrap();
        assert_eq!(&classes[..], &[115, 116, 128, 117, 118, 119, 120]);
    }

    #[test]
    fn supported_classes_skip_invalid() {
        let channels = [
            WifiChannel::new(1, Bw20),
            WifiChannel::new(14, Bw40),
            WifiChannel::new(6, Bw20),
            WifiChannel::new(255, Bw20),
            WifiChannel::new(14, Bw20),
        ];

        let classes = supported_operating_classes::<_, 4>(channels.iter().copied()).unwrap();
        assert_eq!(&classes[..], &[81, 82]);
    }

    #[test]
    fn supported_classes_buffer_full() {
        let channels = [
            WifiChannel::new(1, Bw20),
            WifiChannel::new(14, Bw20),
            WifiChannel::new(36, Bw20),
        ];

        let res = supported_operating_classes::<_, 2>(channels.iter().copied());
        assert_eq!(res, Err(Error::BufferFull));
    }
}
