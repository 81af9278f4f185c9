// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Tree construction and validation errors.

use cursorkit_core::CursorError;
use thiserror::Error;

use crate::class::StmtClass;
use crate::decl::DeclId;

/// Errors raised while building, loading, or validating a syntax tree.
#[derive(Debug, Error)]
pub enum AstError {
    /// A class with its own payload was built through the generic constructor.
    #[error("{class} nodes carry a payload and cannot be built as generic nodes")]
    PayloadRequired { class: StmtClass },

    /// Integer literal width outside 1..=128 bits.
    #[error("integer width {width} is out of range (1..=128)")]
    IntegerWidth { width: u32 },

    /// Integer literal value does not fit its width.
    #[error("integer value {value} does not fit in {width} bits")]
    IntegerOverflow { value: String, width: u32 },

    /// Operator node carrying an opcode from the wrong family.
    #[error("{class} cannot carry opcode {opcode:?}")]
    OpcodeFamily { class: StmtClass, opcode: String },

    /// Reference to a declaration the translation unit does not own.
    #[error("reference to unknown declaration {id}")]
    DanglingDecl { id: DeclId },

    /// Two declarations registered under the same id.
    #[error("declaration {id} is defined more than once")]
    DuplicateDecl { id: DeclId },

    /// Malformed JSON input.
    #[error("malformed tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for tree operations.
pub type Result<T> = std::result::Result<T, AstError>;

impl From<AstError> for CursorError {
    fn from(err: AstError) -> Self {
        CursorError::invalid_tree(err.to_string())
    }
}
