// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! `for` loop parts.
//!
//! Each accessor answers in one of three ways:
//!
//! - the part, classified with no owning declaration and no region;
//! - `NoDeclFound` when the loop has no such part;
//! - `InvalidCode` when the cursor is not a `for` loop at all.

use cursorkit_ast::{ForStmt, Node, Stmt};
use cursorkit_core::CursorKind;
use tracing::debug;

use crate::classify::classify;
use crate::cursor::{Cursor, InvalidReason};

/// Which clause of the loop to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPart {
    Init,
    Condition,
    Increment,
    Body,
}

impl LoopPart {
    pub const ALL: [LoopPart; 4] = [
        LoopPart::Init,
        LoopPart::Condition,
        LoopPart::Increment,
        LoopPart::Body,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LoopPart::Init => "init",
            LoopPart::Condition => "cond",
            LoopPart::Increment => "inc",
            LoopPart::Body => "body",
        }
    }

    fn select(self, for_stmt: &ForStmt) -> Option<&Stmt> {
        let part = match self {
            LoopPart::Init => &for_stmt.init,
            LoopPart::Condition => &for_stmt.cond,
            LoopPart::Increment => &for_stmt.inc,
            LoopPart::Body => &for_stmt.body,
        };
        part.as_deref()
    }
}

/// Fetch one part of a `for` loop cursor.
pub fn for_part(cursor: Cursor<'_>, part: LoopPart) -> Cursor<'_> {
    if cursor.kind() != CursorKind::ForStmt {
        debug!(kind = %cursor.kind(), part = part.name(), "loop part requested for non-loop");
        return Cursor::invalid(InvalidReason::InvalidCode, None);
    }
    let Some(tu) = cursor.translation_unit() else {
        return Cursor::invalid(InvalidReason::InvalidCode, None);
    };
    let found = match cursor.stmt().map(|stmt| &stmt.node) {
        Some(Node::For(for_stmt)) => part.select(for_stmt),
        _ => None,
    };
    match found {
        Some(stmt) => classify(stmt, None, tu, None),
        None => {
            debug!(part = part.name(), "loop part not present");
            Cursor::invalid(InvalidReason::NoDeclFound, Some(tu))
        }
    }
}

pub fn for_init(cursor: Cursor<'_>) -> Cursor<'_> {
    for_part(cursor, LoopPart::Init)
}

pub fn for_condition(cursor: Cursor<'_>) -> Cursor<'_> {
    for_part(cursor, LoopPart::Condition)
}

pub fn for_increment(cursor: Cursor<'_>) -> Cursor<'_> {
    for_part(cursor, LoopPart::Increment)
}

/// The body. Always present in well-formed trees, but still checked.
pub fn for_body(cursor: Cursor<'_>) -> Cursor<'_> {
    for_part(cursor, LoopPart::Body)
}
