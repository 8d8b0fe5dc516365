//! Keypoint storage and the fixed channel-naming convention.

use serde::{Deserialize, Serialize};

/// Semantic name of one float channel within a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Channel {
    X,
    Y,
    Z,
    Confidence,
}

/// Channel names by point width. Widths above 4 reuse the width-4 row for their
/// leading channels; the rest are only reachable by index.
const CHANNEL_TABLE: [&[Channel]; 5] = [
    &[],
    &[Channel::X],
    &[Channel::X, Channel::Y],
    &[Channel::X, Channel::Y, Channel::Confidence],
    &[Channel::X, Channel::Y, Channel::Z, Channel::Confidence],
];

/// Positional mapping from point channels to their semantic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointLayout {
    width: usize,
}

impl PointLayout {
    pub const fn for_width(width: usize) -> Self {
        Self { width }
    }

    /// Floats per point.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Named channels, in storage order.
    pub fn channels(&self) -> &'static [Channel] {
        CHANNEL_TABLE[self.width.min(CHANNEL_TABLE.len() - 1)]
    }

    /// Storage index of `channel`, if this width names it.
    pub fn index_of(&self, channel: Channel) -> Option<usize> {
        self.channels().iter().position(|&c| c == channel)
    }
}

/// Borrowed view of a single keypoint: one float per format character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<'a> {
    values: &'a [f32],
}

impl<'a> Point<'a> {
    pub fn new(values: &'a [f32]) -> Self {
        Self { values }
    }

    pub fn layout(&self) -> PointLayout {
        PointLayout::for_width(self.values.len())
    }

    /// Raw channel by storage index.
    pub fn channel(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Channel by semantic name under the fixed width convention.
    pub fn get(&self, channel: Channel) -> Option<f32> {
        self.layout().index_of(channel).and_then(|i| self.channel(i))
    }

    pub fn x(&self) -> Option<f32> {
        self.get(Channel::X)
    }

    pub fn y(&self) -> Option<f32> {
        self.get(Channel::Y)
    }

    /// Depth channel. Only width-4 points name one; for a width-3 `xyz` format
    /// the third float is reported by [`Point::confidence`], so read it with
    /// `channel(2)` instead.
    pub fn z(&self) -> Option<f32> {
        self.get(Channel::Z)
    }

    /// Confidence channel: the third float of width-3 points and the fourth of
    /// width-4 points, whatever the component's format characters say.
    pub fn confidence(&self) -> Option<f32> {
        self.get(Channel::Confidence)
    }

    pub fn as_slice(&self) -> &'a [f32] {
        self.values
    }
}

/// All points of one component for one person, stored as contiguous floats.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct PointArray {
    /// Floats per point (length of the component's format string)
    pub width: usize,
    /// `len() * width` floats, point-major
    pub values: Vec<f32>,
}

impl PointArray {
    pub fn with_capacity(width: usize, points: usize) -> Self {
        Self { width, values: Vec::with_capacity(width.saturating_mul(points)) }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        if self.width == 0 { 0 } else { self.values.len() / self.width }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Point<'_>> {
        if self.width == 0 {
            return None;
        }
        let start = index.checked_mul(self.width)?;
        let end = start.checked_add(self.width)?;
        self.values.get(start..end).map(Point::new)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point<'_>> + '_ {
        // chunks_exact panics on zero; a zero-width array has no points anyway
        self.values.chunks_exact(self.width.max(1)).take(self.len()).map(Point::new)
    }
}
