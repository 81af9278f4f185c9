// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Core infrastructure for cursorkit.
//!
//! This crate provides the language-agnostic vocabulary shared by the syntax
//! tree model and the cursor layer:
//! - [`CursorKind`]: the closed, ABI-stable enumeration of cursor kinds
//! - [`SourceLocation`] / [`SourceRange`]: opaque source positions
//! - [`StringResult`]: ownership-tagged string results
//! - Error types and exit codes for the `cursorkit` binary

pub mod error;
pub mod kind;
pub mod location;
pub mod strings;

pub use error::{CursorError, OutputErrorCode};
pub use kind::CursorKind;
pub use location::{SourceLocation, SourceRange};
pub use strings::{Ownership, ReleaseError, StringResult};
