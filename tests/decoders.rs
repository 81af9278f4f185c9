// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Decoder and accessor behavior across the cursor layer.

use cursorkit::ast::{BinaryOperatorKind, Stmt, StmtClass, TranslationUnit, UnaryOperatorKind};
use cursorkit::{
    binary_opcode, classify, for_body, for_condition, for_increment, for_init, literal_spelling,
    operator_spelling, unary_opcode, Cursor, CursorKind, InvalidReason, LoopPart, Ownership,
    ReleaseError, StringResult, OPCODE_NOT_APPLICABLE,
};
use cursorkit_core::strings::live_owned_count;

fn unit_with(stmt: Stmt) -> TranslationUnit {
    let mut tu = TranslationUnit::new("decode.c");
    tu.add_body(None, stmt);
    tu
}

fn classify_root(tu: &TranslationUnit) -> Cursor<'_> {
    classify(&tu.bodies()[0].root, None, tu, None)
}

/// A handful of cursors of unrelated kinds.
fn assorted_units() -> Vec<TranslationUnit> {
    vec![
        unit_with(Stmt::int(7)),
        unit_with(Stmt::string("s")),
        unit_with(Stmt::leaf(StmtClass::CallExpr).unwrap()),
        unit_with(Stmt::leaf(StmtClass::ConditionalOperator).unwrap()),
        unit_with(Stmt::for_stmt(None, None, None, None)),
        unit_with(Stmt::leaf(StmtClass::NoStmt).unwrap()),
    ]
}

// ============================================================================
// Opcodes
// ============================================================================

#[test]
fn opcodes_are_in_range_or_sentinel() {
    for op in BinaryOperatorKind::ALL.iter().copied() {
        let tu = unit_with(Stmt::binary(op, Stmt::int(1), Stmt::int(2)));
        let cursor = classify_root(&tu);
        let code = binary_opcode(cursor);
        assert!((0..=32).contains(&code), "{:?} -> {}", op, code);
        assert_eq!(code, op.code());
        assert_eq!(unary_opcode(cursor), OPCODE_NOT_APPLICABLE);
    }
    for op in UnaryOperatorKind::ALL.iter().copied() {
        let tu = unit_with(Stmt::unary(op, Stmt::int(1)));
        let cursor = classify_root(&tu);
        let code = unary_opcode(cursor);
        assert!((0..=13).contains(&code), "{:?} -> {}", op, code);
        assert_eq!(binary_opcode(cursor), OPCODE_NOT_APPLICABLE);
    }
    for tu in assorted_units() {
        let cursor = classify_root(&tu);
        assert_eq!(binary_opcode(cursor), OPCODE_NOT_APPLICABLE);
        assert_eq!(unary_opcode(cursor), OPCODE_NOT_APPLICABLE);
    }
    let sentinel = Cursor::invalid(InvalidReason::InvalidCode, None);
    assert_eq!(binary_opcode(sentinel), OPCODE_NOT_APPLICABLE);
}

#[test]
fn compound_assignment_reports_its_own_kind() {
    let tu = unit_with(Stmt::binary(
        BinaryOperatorKind::MulAssign,
        Stmt::int(1),
        Stmt::int(2),
    ));
    let cursor = classify_root(&tu);
    assert_eq!(cursor.kind(), CursorKind::CompoundAssignOperator);
    assert_eq!(binary_opcode(cursor), 22);
    assert_eq!(operator_spelling(cursor), "*=");
}

// ============================================================================
// Spellings
// ============================================================================

#[test]
fn operator_spellings() {
    let cases = [
        (BinaryOperatorKind::Add, "+"),
        (BinaryOperatorKind::Cmp, "<=>"),
        (BinaryOperatorKind::LAnd, "&&"),
        (BinaryOperatorKind::ShlAssign, "<<="),
        (BinaryOperatorKind::Comma, ","),
        (BinaryOperatorKind::PtrMemI, "->*"),
    ];
    for (op, spelling) in cases {
        let tu = unit_with(Stmt::binary(op, Stmt::int(0), Stmt::int(0)));
        let result = operator_spelling(classify_root(&tu));
        assert_eq!(result, spelling);
        assert_eq!(result.ownership(), Ownership::Owned);
    }

    let tu = unit_with(Stmt::unary(UnaryOperatorKind::LNot, Stmt::int(0)));
    assert_eq!(operator_spelling(classify_root(&tu)), "!");
}

#[test]
fn non_operator_spelling_is_borrowed_empty() {
    for tu in assorted_units() {
        let result = operator_spelling(classify_root(&tu));
        assert!(result.is_empty());
        assert_eq!(result.ownership(), Ownership::Borrowed);
    }
}

#[test]
fn literal_spellings() {
    let tu = unit_with(Stmt::int(-42));
    assert_eq!(literal_spelling(classify_root(&tu)), "-42");

    let tu = unit_with(Stmt::cxx_bool(true));
    assert_eq!(literal_spelling(classify_root(&tu)), "true");

    // Wrappers are looked through before decoding.
    let tu = unit_with(Stmt::constant(Stmt::int(9)));
    assert_eq!(literal_spelling(classify_root(&tu)), "9");

    let tu = unit_with(Stmt::string(b"a\0b"));
    let result = literal_spelling(classify_root(&tu));
    assert_eq!(result.as_bytes(), b"a\0b");
    assert_eq!(result.as_c_str().to_bytes(), b"a");
}

// ============================================================================
// Loop parts
// ============================================================================

#[test]
fn loop_without_increment() {
    let tu = unit_with(Stmt::for_stmt(
        Some(Stmt::leaf(StmtClass::DeclStmt).unwrap()),
        Some(Stmt::binary(BinaryOperatorKind::Lt, Stmt::int(0), Stmt::int(3))),
        None,
        Some(Stmt::leaf(StmtClass::NullStmt).unwrap()),
    ));
    let cursor = classify_root(&tu);

    let inc = for_increment(cursor);
    assert_eq!(inc.kind(), CursorKind::NoDeclFound);
    assert!(inc.translation_unit().is_some());

    assert_eq!(for_init(cursor).kind(), CursorKind::DeclStmt);
    assert_eq!(for_condition(cursor).kind(), CursorKind::BinaryOperator);
    assert_eq!(for_body(cursor).kind(), CursorKind::NullStmt);
}

#[test]
fn loop_parts_of_a_non_loop() {
    let tu = unit_with(Stmt::binary(BinaryOperatorKind::Add, Stmt::int(1), Stmt::int(2)));
    let cursor = classify_root(&tu);
    for part in LoopPart::ALL {
        let result = cursorkit::for_part(cursor, part);
        assert_eq!(result.kind(), CursorKind::InvalidCode);
        assert!(result.is_null());
        assert!(result.translation_unit().is_none());
    }

    // Sentinels carry no node to look at.
    let sentinel = Cursor::invalid(InvalidReason::NotImplemented, None);
    assert_eq!(for_body(sentinel).kind(), CursorKind::InvalidCode);
}

#[test]
fn loop_parts_are_unwrapped() {
    let tu = unit_with(Stmt::for_stmt(
        None,
        Some(Stmt::constant(Stmt::cxx_bool(true))),
        None,
        Some(Stmt::leaf(StmtClass::CompoundStmt).unwrap()),
    ));
    let cond = for_condition(classify_root(&tu));
    assert_eq!(cond.kind(), CursorKind::CXXBoolLiteralExpr);
    assert_eq!(literal_spelling(cond), "true");
}

// ============================================================================
// Ownership
// ============================================================================

#[test]
fn owned_results_are_released_exactly_once() {
    let before = live_owned_count();

    let tu = unit_with(Stmt::binary(BinaryOperatorKind::Xor, Stmt::int(1), Stmt::int(2)));
    let cursor = classify_root(&tu);
    let results: Vec<StringResult> = (0..5).map(|_| operator_spelling(cursor)).collect();
    assert_eq!(live_owned_count(), before + 5);

    for result in results {
        assert_eq!(result, "^");
        result.release().unwrap();
    }
    assert_eq!(live_owned_count(), before);
}

#[test]
fn borrowed_results_refuse_release() {
    let before = live_owned_count();
    let tu = unit_with(Stmt::leaf(StmtClass::CallExpr).unwrap());
    let result = literal_spelling(classify_root(&tu));
    assert_eq!(result.ownership(), Ownership::Borrowed);
    assert_eq!(result.release(), Err(ReleaseError::Borrowed));
    assert_eq!(live_owned_count(), before);
}
