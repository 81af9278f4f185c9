// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Cursorkit: a cursor layer over a parsed C-family syntax tree.
//!
//! Given a node of a [`TranslationUnit`], the layer answers:
//! - which [`CursorKind`] the node is, after looking through transparent
//!   wrapper nodes ([`classify`])
//! - which operator an operator node applies ([`operator_spelling`],
//!   [`binary_opcode`], [`unary_opcode`])
//! - how a literal reads ([`literal_spelling`])
//! - what the parts of a `for` loop are ([`for_init`] and friends)
//!
//! ```
//! use cursorkit::{classify, operator_spelling, CursorKind};
//! use cursorkit::ast::{BinaryOperatorKind, Stmt, TranslationUnit};
//!
//! let mut tu = TranslationUnit::new("demo.c");
//! tu.add_body(None, Stmt::binary(BinaryOperatorKind::Shl, Stmt::int(1), Stmt::int(4)));
//!
//! let cursor = classify(&tu.bodies()[0].root, None, &tu, None);
//! assert_eq!(cursor.kind(), CursorKind::BinaryOperator);
//! assert_eq!(operator_spelling(cursor), "<<");
//! ```

// Syntax tree model and shared vocabulary
pub use cursorkit_ast as ast;
pub use cursorkit_core::error;
pub use cursorkit_core::{
    CursorError, CursorKind, Ownership, ReleaseError, SourceLocation, SourceRange, StringResult,
};

// Cursor construction
pub mod classify;
pub mod cursor;
pub mod selector;

// Decoders and accessors
pub mod literal;
pub mod loops;
pub mod operator;

// Front doors
pub mod boundary;
pub mod inspect;
pub mod output;

pub use classify::{classify, kind_for_class, kind_for_decl};
pub use cursor::{Cursor, InvalidReason, NO_SELECTOR, RESERVED};
pub use literal::literal_spelling;
pub use loops::{for_body, for_condition, for_increment, for_init, for_part, LoopPart};
pub use operator::{
    binary_opcode, binary_operator_kind, operator_spelling, unary_opcode, unary_operator_kind,
    OPCODE_NOT_APPLICABLE,
};
pub use selector::index_selector;
