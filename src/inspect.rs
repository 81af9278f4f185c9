// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Whole-unit inspection: classify and decode every node of a translation
//! unit. Drives the `cursorkit classify` command.

use cursorkit_ast::{Stmt, TranslationUnit};
use cursorkit_core::error::{CursorError, Result};
use cursorkit_core::{CursorKind, SourceLocation, SourceRange};
use tracing::{debug, info};

use crate::classify::classify;
use crate::cursor::Cursor;
use crate::literal::literal_spelling;
use crate::loops::{for_body, for_condition, for_increment, for_init};
use crate::operator::{binary_operator_kind, operator_spelling, unary_operator_kind};
use crate::output::{CursorRecord, LoopParts, OperatorInfo};

/// Classify every node of every body, in pre-order.
///
/// With `at`, the region of interest is that single offset (used to pick
/// selector fragments), and at least one node must cover it.
pub fn inspect_unit(tu: &TranslationUnit, at: Option<u32>) -> Result<Vec<CursorRecord>> {
    let region = at.map(|offset| SourceRange::point(SourceLocation::at(offset)));

    if let Some(offset) = at {
        let loc = SourceLocation::at(offset);
        let covered = tu
            .bodies()
            .iter()
            .any(|body| body.root.innermost_at(loc).is_some());
        if !covered {
            return Err(CursorError::NodeNotFound { offset });
        }
    }

    let mut records = Vec::new();
    for (index, body) in tu.bodies().iter().enumerate() {
        let owner = body.owner.and_then(|id| tu.decl(id));
        for stmt in body.root.preorder() {
            let cursor = classify(stmt, owner, tu, region);
            records.push(record(index, stmt, cursor));
        }
    }
    info!(unit = %tu.name, cursors = records.len(), "classified translation unit");
    Ok(records)
}

/// Build the record for one cursor.
///
/// `stmt` is the node as it appears in the tree. Its class and range are
/// reported even when classification looked through it to a wrapped node.
pub fn record(body: usize, stmt: &Stmt, cursor: Cursor<'_>) -> CursorRecord {
    let kind = cursor.kind();
    let class = stmt.class().name();
    let opcode = binary_operator_kind(cursor)
        .map(|op| op.code())
        .or_else(|| unary_operator_kind(cursor).map(|op| op.code()));
    let operator = opcode.map(|opcode| OperatorInfo {
        spelling: operator_spelling(cursor).to_string_lossy().into_owned(),
        opcode,
    });

    let literal = match kind {
        CursorKind::IntegerLiteral
        | CursorKind::FloatingLiteral
        | CursorKind::CharacterLiteral
        | CursorKind::StringLiteral
        | CursorKind::CXXBoolLiteralExpr => {
            Some(literal_spelling(cursor).to_string_lossy().into_owned())
        }
        _ => None,
    };

    let loop_parts = (kind == CursorKind::ForStmt).then(|| LoopParts {
        init: for_init(cursor).kind(),
        cond: for_condition(cursor).kind(),
        inc: for_increment(cursor).kind(),
        body: for_body(cursor).kind(),
    });

    debug!(class, %kind, "record");

    CursorRecord {
        body,
        class: class.to_string(),
        kind,
        raw_kind: kind.as_raw(),
        range: stmt.range,
        selector_index: kind.carries_selector_index().then(|| cursor.auxiliary()),
        operator,
        literal,
        loop_parts,
    }
}
