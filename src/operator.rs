// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Operator decoding.
//!
//! Mismatched cursors are not errors here: spelling falls back to the shared
//! empty string and opcodes to [`OPCODE_NOT_APPLICABLE`].

use cursorkit_ast::{BinaryOperatorKind, Node, UnaryOperatorKind};
use cursorkit_core::{CursorKind, StringResult};
use tracing::debug;

use crate::cursor::Cursor;

/// Returned by the opcode decoders for cursors that are not operators.
/// Outside every valid opcode range.
pub const OPCODE_NOT_APPLICABLE: i32 = 99999;

/// The binary opcode of a binary or compound-assignment cursor.
pub fn binary_operator_kind(cursor: Cursor<'_>) -> Option<BinaryOperatorKind> {
    match cursor.kind() {
        CursorKind::BinaryOperator | CursorKind::CompoundAssignOperator => {}
        _ => return None,
    }
    match cursor.stmt().map(|stmt| &stmt.node) {
        Some(Node::Binary(op)) => Some(op.opcode),
        Some(Node::CompoundAssign(op)) => Some(op.opcode),
        _ => None,
    }
}

/// The unary opcode of a unary-operator cursor.
pub fn unary_operator_kind(cursor: Cursor<'_>) -> Option<UnaryOperatorKind> {
    if cursor.kind() != CursorKind::UnaryOperator {
        return None;
    }
    match cursor.stmt().map(|stmt| &stmt.node) {
        Some(Node::Unary(op)) => Some(op.opcode),
        _ => None,
    }
}

/// Canonical spelling of the operator, e.g. `"+"`, `"*="`, `"!"`.
///
/// Owned for operator cursors; the Borrowed empty string otherwise.
pub fn operator_spelling(cursor: Cursor<'_>) -> StringResult {
    if let Some(op) = binary_operator_kind(cursor) {
        return StringResult::duplicate(op.spelling());
    }
    if let Some(op) = unary_operator_kind(cursor) {
        return StringResult::duplicate(op.spelling());
    }
    debug!(kind = %cursor.kind(), "operator spelling requested for non-operator");
    StringResult::empty()
}

/// Stable binary opcode, or [`OPCODE_NOT_APPLICABLE`].
pub fn binary_opcode(cursor: Cursor<'_>) -> i32 {
    match binary_operator_kind(cursor) {
        Some(op) => op.code(),
        None => {
            debug!(kind = %cursor.kind(), "binary opcode not applicable");
            OPCODE_NOT_APPLICABLE
        }
    }
}

/// Stable unary opcode, or [`OPCODE_NOT_APPLICABLE`].
pub fn unary_opcode(cursor: Cursor<'_>) -> i32 {
    match unary_operator_kind(cursor) {
        Some(op) => op.code(),
        None => {
            debug!(kind = %cursor.kind(), "unary opcode not applicable");
            OPCODE_NOT_APPLICABLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::cursor::InvalidReason;
    use cursorkit_ast::{Stmt, TranslationUnit};
    use cursorkit_core::Ownership;

    fn unit_with(stmt: Stmt) -> TranslationUnit {
        let mut tu = TranslationUnit::new("ops.c");
        tu.add_body(None, stmt);
        tu
    }

    #[test]
    fn test_binary() {
        let tu = unit_with(Stmt::binary(BinaryOperatorKind::Add, Stmt::int(1), Stmt::int(2)));
        let cursor = classify(&tu.bodies()[0].root, None, &tu, None);
        let spelling = operator_spelling(cursor);
        assert_eq!(spelling, "+");
        assert_eq!(spelling.ownership(), Ownership::Owned);
        assert_eq!(binary_opcode(cursor), 5);
        assert_eq!(unary_opcode(cursor), OPCODE_NOT_APPLICABLE);
    }

    #[test]
    fn test_compound_assign() {
        let tu = unit_with(Stmt::binary(BinaryOperatorKind::MulAssign, Stmt::int(1), Stmt::int(2)));
        let cursor = classify(&tu.bodies()[0].root, None, &tu, None);
        assert_eq!(cursor.kind(), CursorKind::CompoundAssignOperator);
        assert_eq!(operator_spelling(cursor), "*=");
        assert_eq!(binary_opcode(cursor), BinaryOperatorKind::MulAssign.code());
    }

    #[test]
    fn test_unary() {
        let tu = unit_with(Stmt::unary(UnaryOperatorKind::LNot, Stmt::int(0)));
        let cursor = classify(&tu.bodies()[0].root, None, &tu, None);
        assert_eq!(operator_spelling(cursor), "!");
        assert_eq!(unary_opcode(cursor), 9);
        assert_eq!(binary_opcode(cursor), OPCODE_NOT_APPLICABLE);
    }

    #[test]
    fn test_non_operator() {
        let tu = unit_with(Stmt::int(7));
        let cursor = classify(&tu.bodies()[0].root, None, &tu, None);
        let spelling = operator_spelling(cursor);
        assert!(spelling.is_empty());
        assert_eq!(spelling.ownership(), Ownership::Borrowed);
        assert_eq!(binary_opcode(cursor), OPCODE_NOT_APPLICABLE);
        assert_eq!(unary_opcode(cursor), OPCODE_NOT_APPLICABLE);

        let sentinel = Cursor::invalid(InvalidReason::InvalidCode, None);
        assert_eq!(binary_opcode(sentinel), OPCODE_NOT_APPLICABLE);
        assert_eq!(operator_spelling(sentinel).ownership(), Ownership::Borrowed);
    }
}
