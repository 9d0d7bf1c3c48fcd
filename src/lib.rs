//! IEEE 802.11 operating class classification
//!
//! Maps a Wi-Fi channel number and bandwidth onto the global operating class
//! (IEEE 802.11 Annex E) used when exchanging channel capabilities between
//! access points, see [`get_operating_class_by_channel`].

#![no_std]

#[cfg(any(test, feature="std"))]
extern crate std;

pub mod channels;

pub mod band;

pub mod table;

pub mod classifier;

pub mod error;

pub mod prelude;


/// Operating classes are 8-bit identifiers, 0 is reserved as invalid
pub type OperatingClass = u8;

pub use crate::classifier::{get_operating_class_by_channel, operating_class, INVALID_OPERATING_CLASS};
