//! Packed ARGB colors.
//!
//! A [`PackedColor`] stores four 8-bit channels in one `u32` using the
//! conventional packed-ARGB layout:
//!
//! ```text
//! bits 31..24  alpha
//! bits 23..16  red
//! bits 15..8   green
//! bits  7..0   blue
//! ```
//!
//! Channels are `u8`, so the `[0, 255]` range holds by construction.
//! [`PackedColor::try_from_channels`] is the only path that can fail, for
//! callers holding an untyped channel list.

use std::fmt;

use thiserror::Error;

/// Number of channels in a packed color.
pub const CHANNEL_COUNT: usize = 4;

/// Errors from building a color out of untyped channel values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The channel list did not hold exactly red, green, blue and alpha.
    #[error("Incorrect number of channels: expected {expected}, got {actual}")]
    InvalidChannelCount { expected: usize, actual: usize },

    /// A channel value fell outside 0..=255.
    #[error("Channel {channel} out of range: {value} (must be 0-255)")]
    ChannelOutOfRange { channel: usize, value: i32 },
}

/// Unpacked red, green, blue and alpha channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack the channels into a single ARGB word.
    #[inline]
    pub const fn pack(self) -> PackedColor {
        PackedColor::pack(self.r, self.g, self.b, self.a)
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.r, self.g, self.b, self.a)
    }
}

/// A color packed into one `u32` in ARGB order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct PackedColor(u32);

impl PackedColor {
    /// Opaque black.
    pub const BLACK: PackedColor = PackedColor::pack(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: PackedColor = PackedColor::pack(255, 255, 255, 255);

    /// Pack four channels.
    #[inline]
    pub const fn pack(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Opaque color from red, green and blue.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::pack(r, g, b, 255)
    }

    /// Split into the four channels.
    #[inline]
    pub const fn unpack(self) -> Rgba {
        Rgba {
            r: (self.0 >> 16) as u8,
            g: (self.0 >> 8) as u8,
            b: self.0 as u8,
            a: (self.0 >> 24) as u8,
        }
    }

    /// Build a color from a variable-length channel list in `r, g, b, a` order.
    ///
    /// Rejects lists that are not exactly four long and values outside
    /// `0..=255`. Out-of-range values are never clamped.
    pub fn try_from_channels(channels: &[i32]) -> Result<Self, ColorError> {
        let [r, g, b, a] = <[i32; CHANNEL_COUNT]>::try_from(channels).map_err(|_| {
            ColorError::InvalidChannelCount {
                expected: CHANNEL_COUNT,
                actual: channels.len(),
            }
        })?;

        let mut out = [0u8; CHANNEL_COUNT];
        for (channel, (slot, value)) in out.iter_mut().zip([r, g, b, a]).enumerate() {
            *slot = u8::try_from(value)
                .map_err(|_| ColorError::ChannelOutOfRange { channel, value })?;
        }

        Ok(Rgba::from(out).pack())
    }

    /// The raw ARGB word.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

impl From<Rgba> for PackedColor {
    fn from(rgba: Rgba) -> Self {
        rgba.pack()
    }
}

impl From<PackedColor> for Rgba {
    fn from(color: PackedColor) -> Self {
        color.unpack()
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Every 32-bit word survives unpack then pack.
        #[test]
        fn prop_pack_unpack_roundtrip(word in any::<u32>()) {
            let color = PackedColor::from(word);
            prop_assert_eq!(color.unpack().pack(), color);
        }

        /// Property: Every channel tuple survives pack then unpack.
        #[test]
        fn prop_unpack_pack_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
            let rgba = PackedColor::pack(r, g, b, a).unpack();
            prop_assert_eq!(rgba, Rgba::new(r, g, b, a));
        }

        /// Property: In-range channel lists agree with the fixed-arity path.
        #[test]
        fn prop_try_from_channels_matches_pack(channels in prop::array::uniform4(0i32..=255)) {
            let [r, g, b, a] = channels;
            let expected = PackedColor::pack(r as u8, g as u8, b as u8, a as u8);
            prop_assert_eq!(PackedColor::try_from_channels(&channels), Ok(expected));
        }

        /// Property: Any list whose length is not four is rejected.
        #[test]
        fn prop_wrong_length_rejected(channels in prop::collection::vec(0i32..=255, 0..10)) {
            prop_assume!(channels.len() != 4);
            let is_count_error = matches!(
                PackedColor::try_from_channels(&channels),
                Err(ColorError::InvalidChannelCount { .. })
            );
            prop_assert!(is_count_error);
        }
    }
}
