// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Ownership-tagged string results.
//!
//! Decoders hand back a [`StringResult`] instead of a plain `String` so the
//! ownership contract survives a trip across a C-style boundary:
//!
//! - [`Ownership::Borrowed`] results alias static storage and are never
//!   released.
//! - [`Ownership::Owned`] results are heap copies made at decode time. Each one
//!   is released exactly once, either explicitly with
//!   [`StringResult::release`] or by dropping it.
//!
//! There are exactly two producers: [`StringResult::empty`] and
//! [`StringResult::duplicate`].
//!
//! Owned buffers keep a trailing NUL so they can be handed out as C strings.
//! [`StringResult::as_bytes`] returns the full copied content; consumers that
//! read the C string stop at the first interior NUL.

use std::borrow::Cow;
use std::cell::Cell;
use std::ffi::CStr;
use std::fmt;
use std::str::Utf8Error;

use thiserror::Error;

/// The canonical empty string shared by every "not applicable" result.
const EMPTY: &CStr = c"";

thread_local! {
    static LIVE_OWNED: Cell<usize> = const { Cell::new(0) };
}

/// Number of Owned results allocated on this thread that have not been
/// released yet.
pub fn live_owned_count() -> usize {
    LIVE_OWNED.with(Cell::get)
}

// ============================================================================
// Ownership
// ============================================================================

/// Who is responsible for releasing a [`StringResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// Static storage; the caller must not release it.
    Borrowed,
    /// Heap copy; the caller releases it exactly once.
    Owned,
}

/// Releasing a result that the caller does not own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    #[error("borrowed string results must not be released")]
    Borrowed,
}

// ============================================================================
// OwnedBuffer
// ============================================================================

/// A NUL-terminated heap copy, tracked by the per-thread ledger.
struct OwnedBuffer {
    bytes: Box<[u8]>,
}

impl OwnedBuffer {
    fn copy_of(content: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(content.len() + 1);
        bytes.extend_from_slice(content);
        bytes.push(0);
        LIVE_OWNED.with(|live| live.set(live.get() + 1));
        OwnedBuffer {
            bytes: bytes.into_boxed_slice(),
        }
    }

    fn content(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }
}

impl Drop for OwnedBuffer {
    fn drop(&mut self) {
        LIVE_OWNED.with(|live| live.set(live.get().saturating_sub(1)));
    }
}

// ============================================================================
// StringResult
// ============================================================================

/// A decoded string together with its ownership tag.
pub struct StringResult {
    repr: Repr,
}

enum Repr {
    Borrowed(&'static CStr),
    Owned(OwnedBuffer),
}

impl StringResult {
    /// The shared, static empty string (Borrowed).
    pub fn empty() -> Self {
        StringResult {
            repr: Repr::Borrowed(EMPTY),
        }
    }

    /// Heap-allocate a NUL-terminated copy of `content` (Owned).
    pub fn duplicate(content: impl AsRef<[u8]>) -> Self {
        StringResult {
            repr: Repr::Owned(OwnedBuffer::copy_of(content.as_ref())),
        }
    }

    pub fn ownership(&self) -> Ownership {
        match self.repr {
            Repr::Borrowed(_) => Ownership::Borrowed,
            Repr::Owned(_) => Ownership::Owned,
        }
    }

    pub fn is_owned(&self) -> bool {
        self.ownership() == Ownership::Owned
    }

    /// The full content, without the trailing NUL.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.repr {
            Repr::Borrowed(s) => s.to_bytes(),
            Repr::Owned(buf) => buf.content(),
        }
    }

    /// The content as a C string, ending at the first NUL.
    pub fn as_c_str(&self) -> &CStr {
        match &self.repr {
            Repr::Borrowed(s) => s,
            Repr::Owned(buf) => CStr::from_bytes_until_nul(&buf.bytes).unwrap_or(EMPTY),
        }
    }

    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Give an Owned result back.
    ///
    /// Consuming `self` makes a second release of the same result impossible.
    /// Borrowed results are rejected; they alias static storage.
    pub fn release(self) -> Result<(), ReleaseError> {
        match self.repr {
            Repr::Borrowed(_) => Err(ReleaseError::Borrowed),
            Repr::Owned(buf) => {
                drop(buf);
                Ok(())
            }
        }
    }
}

impl Default for StringResult {
    fn default() -> Self {
        StringResult::empty()
    }
}

impl fmt::Debug for StringResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringResult")
            .field("ownership", &self.ownership())
            .field("data", &self.to_string_lossy())
            .finish()
    }
}

impl fmt::Display for StringResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl PartialEq<str> for StringResult {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for StringResult {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_borrowed() {
        let s = StringResult::empty();
        assert_eq!(s.ownership(), Ownership::Borrowed);
        assert!(s.is_empty());
        assert_eq!(s.as_c_str(), c"");
    }

    #[test]
    fn test_duplicate_is_owned_copy() {
        let source = String::from("*=");
        let s = StringResult::duplicate(&source);
        drop(source);
        assert_eq!(s.ownership(), Ownership::Owned);
        assert_eq!(s, "*=");
        assert_eq!(s.as_c_str(), c"*=");
    }

    #[test]
    fn test_duplicate_empty_is_still_owned() {
        let s = StringResult::duplicate(b"");
        assert!(s.is_owned());
        assert!(s.is_empty());
    }

    #[test]
    fn test_interior_nul_truncates_c_str_only() {
        let s = StringResult::duplicate(b"a\0b");
        assert_eq!(s.as_bytes(), b"a\0b");
        assert_eq!(s.as_c_str(), c"a");
    }

    #[test]
    fn test_release_owned() {
        let before = live_owned_count();
        let s = StringResult::duplicate("true");
        assert_eq!(live_owned_count(), before + 1);
        assert_eq!(s.release(), Ok(()));
        assert_eq!(live_owned_count(), before);
    }

    #[test]
    fn test_release_borrowed_is_rejected() {
        let before = live_owned_count();
        assert_eq!(StringResult::empty().release(), Err(ReleaseError::Borrowed));
        assert_eq!(live_owned_count(), before);
    }

    #[test]
    fn test_drop_releases_owned() {
        let before = live_owned_count();
        {
            let _a = StringResult::duplicate("a");
            let _b = StringResult::duplicate("b");
            assert_eq!(live_owned_count(), before + 2);
        }
        assert_eq!(live_owned_count(), before);
    }

    #[test]
    fn test_lossy_display() {
        let s = StringResult::duplicate([0xffu8]);
        assert!(s.to_str().is_err());
        assert_eq!(s.to_string(), "\u{fffd}");
    }
}
