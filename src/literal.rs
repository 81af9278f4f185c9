// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Literal decoding.

use cursorkit_ast::Node;
use cursorkit_core::{CursorKind, StringResult};
use tracing::debug;

use crate::cursor::Cursor;

/// Display spelling of a literal cursor.
///
/// | Kind | Rendering |
/// |------|-----------|
/// | `IntegerLiteral` | signed base 10, e.g. `-42` |
/// | `FloatingLiteral` | float layout, e.g. `1.5`, `1.0E+4` |
/// | `CharacterLiteral` | the value truncated to one byte |
/// | `StringLiteral` | the stored bytes, unquoted |
/// | `CXXBoolLiteralExpr` | `true` / `false` |
///
/// Literal cursors produce Owned results. Anything else gets the Borrowed
/// empty string.
pub fn literal_spelling(cursor: Cursor<'_>) -> StringResult {
    let node = match cursor.kind() {
        CursorKind::IntegerLiteral
        | CursorKind::FloatingLiteral
        | CursorKind::CharacterLiteral
        | CursorKind::StringLiteral
        | CursorKind::CXXBoolLiteralExpr => cursor.stmt().map(|stmt| &stmt.node),
        _ => None,
    };
    match node {
        Some(Node::Integer(lit)) => StringResult::duplicate(lit.value.to_string()),
        Some(Node::Floating(lit)) => StringResult::duplicate(lit.value.to_string()),
        Some(Node::Character(lit)) => StringResult::duplicate(character_byte(lit.value)),
        Some(Node::String(lit)) => StringResult::duplicate(&lit.bytes),
        Some(Node::CxxBool { value }) => {
            StringResult::duplicate(if *value { "true" } else { "false" })
        }
        _ => {
            debug!(kind = %cursor.kind(), "literal spelling requested for non-literal");
            StringResult::empty()
        }
    }
}

/// One byte as a C string would hold it: a NUL byte spells nothing.
fn character_byte(value: u32) -> Vec<u8> {
    match value as u8 {
        0 => Vec::new(),
        byte => vec![byte],
    }
}
