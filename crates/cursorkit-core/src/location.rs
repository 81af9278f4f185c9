// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Opaque source positions.
//!
//! A [`SourceLocation`] is a byte offset into the translation unit's main
//! buffer, or the invalid location. The raw encoding reserves `0` for
//! "invalid" so a default location never compares equal to a real one.
//! In JSON a location is its offset, or `null` when invalid.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SourceLocation
// ============================================================================

/// A single position in the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub struct SourceLocation(u64);

impl SourceLocation {
    /// The invalid location.
    pub const INVALID: SourceLocation = SourceLocation(0);

    /// Location at a byte offset. Every `u32` offset is representable.
    pub fn at(offset: u32) -> Self {
        SourceLocation(u64::from(offset) + 1)
    }

    /// Byte offset, or `None` for the invalid location.
    pub fn offset(&self) -> Option<u32> {
        self.0
            .checked_sub(1)
            .and_then(|offset| u32::try_from(offset).ok())
    }

    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    /// The raw encoding (`0` = invalid).
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<Option<u32>> for SourceLocation {
    fn from(offset: Option<u32>) -> Self {
        offset.map_or(SourceLocation::INVALID, SourceLocation::at)
    }
}

impl From<SourceLocation> for Option<u32> {
    fn from(loc: SourceLocation) -> Self {
        loc.offset()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset() {
            Some(offset) => write!(f, "@{}", offset),
            None => f.write_str("<invalid>"),
        }
    }
}

// ============================================================================
// SourceRange
// ============================================================================

/// A begin/end pair of locations. `end` is the start of the last token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceRange {
    #[serde(default)]
    pub begin: SourceLocation,
    #[serde(default)]
    pub end: SourceLocation,
}

impl SourceRange {
    pub fn new(begin: SourceLocation, end: SourceLocation) -> Self {
        SourceRange { begin, end }
    }

    /// A degenerate range covering a single position.
    pub fn point(loc: SourceLocation) -> Self {
        SourceRange { begin: loc, end: loc }
    }

    /// Range between two byte offsets.
    pub fn offsets(begin: u32, end: u32) -> Self {
        SourceRange::new(SourceLocation::at(begin), SourceLocation::at(end))
    }

    /// Both ends are valid locations.
    pub fn is_valid(&self) -> bool {
        self.begin.is_valid() && self.end.is_valid()
    }

    /// Valid and begins where it ends.
    pub fn is_point(&self) -> bool {
        self.is_valid() && self.begin == self.end
    }

    /// Check if a location lies within the range (inclusive on both ends).
    pub fn contains(&self, loc: SourceLocation) -> bool {
        self.is_valid() && loc.is_valid() && self.begin <= loc && loc <= self.end
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.begin, self.end)
    }
}
