//! opclass crate prelude

pub use crate::OperatingClass;

pub use crate::channels::{ChannelBandwidth, FreqBand, WifiChannel};

pub use crate::band::Segment;

pub use crate::table::OperatingClassEntry;

pub use crate::classifier::{
    get_operating_class_by_channel, operating_class, supported_operating_classes, valid_channels,
    INVALID_OPERATING_CLASS,
};

pub use crate::error::Error as OpClassError;
