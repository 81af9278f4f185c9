// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Selector fragment indexing.
//!
//! A message send such as `[obj setX:1 y:2]` has one selector keyword per
//! argument. When a tool asks for the cursor at a single source position, the
//! handle records which keyword that position sits on.

use cursorkit_ast::Node;
use cursorkit_core::{CursorKind, SourceLocation, SourceRange};
use tracing::trace;

use crate::cursor::{Cursor, NO_SELECTOR};

/// Index of the fragment located exactly at a point region.
///
/// Returns [`NO_SELECTOR`] unless `region` is a valid single position that
/// equals one of `fragments`. The first match wins.
pub fn index_selector(fragments: &[SourceLocation], region: Option<SourceRange>) -> i32 {
    let Some(region) = region else {
        return NO_SELECTOR;
    };
    if !region.is_point() {
        return NO_SELECTOR;
    }
    fragments
        .iter()
        .position(|loc| *loc == region.begin)
        .and_then(|index| i32::try_from(index).ok())
        .unwrap_or(NO_SELECTOR)
}

impl<'tu> Cursor<'tu> {
    /// Store a selector index, bounds-checked against the node's fragments.
    ///
    /// Applies to message sends and Objective-C method declarations; other
    /// cursors come back unchanged.
    pub fn with_selector_index(self, index: i32) -> Self {
        let count = match self.kind() {
            CursorKind::ObjCMessageExpr => match self.stmt().map(|stmt| &stmt.node) {
                Some(Node::ObjCMessage(message)) => message.selector_locs.len(),
                _ => 0,
            },
            CursorKind::ObjCInstanceMethodDecl | CursorKind::ObjCClassMethodDecl => self
                .decl()
                .and_then(|decl| decl.kind.as_objc_method())
                .map_or(0, |method| method.selector_locs.len()),
            _ => return self,
        };
        let in_bounds = usize::try_from(index).is_ok_and(|index| index < count);
        trace!(kind = %self.kind(), index, count, in_bounds, "selector index");
        self.with_auxiliary(if in_bounds { index } else { NO_SELECTOR })
    }
}
