// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The cursor handle.
//!
//! A [`Cursor`] is a kind tag plus a payload borrowed from a
//! [`TranslationUnit`]. The payload is a closed enum keyed by category, and
//! the only constructors are the per-category factories in this crate, so a
//! statement payload can never sit behind a sentinel kind or the reverse.
//!
//! Cursors are `Copy` and hold no ownership. The `'tu` lifetime ties every
//! cursor to the translation unit it was made from.

use std::fmt;
use std::ptr;

use cursorkit_ast::{Decl, Stmt, TranslationUnit};
use cursorkit_core::CursorKind;

/// Value of the reserved field; never anything else.
pub const RESERVED: i32 = 0;

/// Auxiliary value meaning "no selector fragment".
pub const NO_SELECTOR: i32 = -1;

// ============================================================================
// InvalidReason
// ============================================================================

/// Why a cursor refers to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    InvalidFile,
    /// The construct has no such part ("part not found").
    NoDeclFound,
    NotImplemented,
    /// The cursor was the wrong kind for the request ("invalid kind").
    InvalidCode,
}

impl InvalidReason {
    pub fn kind(self) -> CursorKind {
        match self {
            InvalidReason::InvalidFile => CursorKind::InvalidFile,
            InvalidReason::NoDeclFound => CursorKind::NoDeclFound,
            InvalidReason::NotImplemented => CursorKind::NotImplemented,
            InvalidReason::InvalidCode => CursorKind::InvalidCode,
        }
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// The borrowed references a cursor carries, by category.
#[derive(Clone, Copy)]
enum Payload<'tu> {
    /// Statement and expression kinds (and `NotImplemented` nodes).
    Stmt {
        parent: Option<&'tu Decl>,
        stmt: &'tu Stmt,
        tu: &'tu TranslationUnit,
    },
    /// Declaration kinds.
    Decl {
        decl: &'tu Decl,
        tu: &'tu TranslationUnit,
    },
    /// Invalid-category sentinels; no node.
    Sentinel { tu: Option<&'tu TranslationUnit> },
}

/// A stable handle onto one node of a translation unit.
#[derive(Clone, Copy)]
pub struct Cursor<'tu> {
    kind: CursorKind,
    payload: Payload<'tu>,
    xdata: i32,
}

impl<'tu> Cursor<'tu> {
    /// A sentinel cursor. `tu` is kept for diagnostics only.
    pub fn invalid(reason: InvalidReason, tu: Option<&'tu TranslationUnit>) -> Self {
        Cursor {
            kind: reason.kind(),
            payload: Payload::Sentinel { tu },
            xdata: 0,
        }
    }

    pub(crate) fn from_stmt(
        kind: CursorKind,
        stmt: &'tu Stmt,
        parent: Option<&'tu Decl>,
        tu: &'tu TranslationUnit,
    ) -> Self {
        debug_assert!(
            kind.has_stmt_payload() || kind == CursorKind::NotImplemented,
            "{} cannot carry a statement",
            kind
        );
        Cursor {
            kind,
            payload: Payload::Stmt { parent, stmt, tu },
            xdata: 0,
        }
    }

    pub(crate) fn from_decl(kind: CursorKind, decl: &'tu Decl, tu: &'tu TranslationUnit) -> Self {
        Cursor {
            kind,
            payload: Payload::Decl { decl, tu },
            xdata: 0,
        }
    }

    pub(crate) fn with_auxiliary(mut self, xdata: i32) -> Self {
        self.xdata = xdata;
        self
    }

    pub fn kind(&self) -> CursorKind {
        self.kind
    }

    /// Always [`RESERVED`].
    pub fn reserved(&self) -> i32 {
        RESERVED
    }

    /// The raw auxiliary field. Only meaningful when
    /// [`CursorKind::carries_selector_index`] holds for this cursor's kind.
    pub fn auxiliary(&self) -> i32 {
        self.xdata
    }

    /// The selector fragment this cursor points at, if any.
    pub fn selector_index(&self) -> Option<usize> {
        if !self.kind.carries_selector_index() {
            return None;
        }
        usize::try_from(self.xdata).ok()
    }

    /// The statement or expression node, for node-carrying cursors.
    pub fn stmt(&self) -> Option<&'tu Stmt> {
        match self.payload {
            Payload::Stmt { stmt, .. } => Some(stmt),
            _ => None,
        }
    }

    /// The declaration itself for declaration cursors, or the owning
    /// declaration context for statement cursors.
    pub fn decl(&self) -> Option<&'tu Decl> {
        match self.payload {
            Payload::Stmt { parent, .. } => parent,
            Payload::Decl { decl, .. } => Some(decl),
            Payload::Sentinel { .. } => None,
        }
    }

    pub fn translation_unit(&self) -> Option<&'tu TranslationUnit> {
        match self.payload {
            Payload::Stmt { tu, .. } | Payload::Decl { tu, .. } => Some(tu),
            Payload::Sentinel { tu } => tu,
        }
    }

    /// Sentinel cursors refer to no node.
    pub fn is_null(&self) -> bool {
        matches!(self.payload, Payload::Sentinel { .. })
    }

    pub fn is_invalid(&self) -> bool {
        self.kind.is_invalid()
    }
}

fn same<T>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => ptr::eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Cursors are equal when they carry the same kind, auxiliary value and the
/// very same node references.
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.kind != other.kind || self.xdata != other.xdata {
            return false;
        }
        match (self.payload, other.payload) {
            (
                Payload::Stmt { parent, stmt, tu },
                Payload::Stmt {
                    parent: other_parent,
                    stmt: other_stmt,
                    tu: other_tu,
                },
            ) => same(parent, other_parent) && ptr::eq(stmt, other_stmt) && ptr::eq(tu, other_tu),
            (
                Payload::Decl { decl, tu },
                Payload::Decl {
                    decl: other_decl,
                    tu: other_tu,
                },
            ) => ptr::eq(decl, other_decl) && ptr::eq(tu, other_tu),
            (Payload::Sentinel { tu }, Payload::Sentinel { tu: other_tu }) => same(tu, other_tu),
            _ => false,
        }
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Cursor");
        out.field("kind", &self.kind);
        if self.kind.carries_selector_index() {
            out.field("selector_index", &self.xdata);
        }
        match self.payload {
            Payload::Stmt { parent, stmt, .. } => {
                out.field("class", &stmt.class());
                out.field("range", &stmt.range);
                out.field("parent", &parent.map(|decl| decl.name.as_str()));
            }
            Payload::Decl { decl, .. } => {
                out.field("decl", &decl.name);
            }
            Payload::Sentinel { .. } => {}
        }
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cursorkit_ast::DeclKind;

    #[test]
    fn test_invalid_has_no_node() {
        let tu = TranslationUnit::new("a.c");
        let cursor = Cursor::invalid(InvalidReason::NoDeclFound, Some(&tu));
        assert_eq!(cursor.kind(), CursorKind::NoDeclFound);
        assert!(cursor.is_null());
        assert!(cursor.is_invalid());
        assert!(cursor.stmt().is_none());
        assert!(cursor.decl().is_none());
        assert!(cursor.translation_unit().is_some());
        assert_eq!(cursor.reserved(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "cannot carry a statement")]
    fn test_declaration_kind_rejects_statement_payload() {
        let mut tu = TranslationUnit::new("a.c");
        tu.add_body(None, Stmt::int(1));
        let _ = Cursor::from_stmt(CursorKind::VarDecl, &tu.bodies()[0].root, None, &tu);
    }

    #[test]
    fn test_not_implemented_may_carry_statement() {
        let mut tu = TranslationUnit::new("a.c");
        tu.add_body(None, Stmt::int(1));
        let cursor = Cursor::from_stmt(CursorKind::NotImplemented, &tu.bodies()[0].root, None, &tu);
        assert!(cursor.stmt().is_some());
    }

    #[test]
    fn test_equality_is_identity() {
        let mut tu = TranslationUnit::new("a.c");
        tu.add_body(None, Stmt::int(1));
        tu.add_body(None, Stmt::int(1));
        let first = &tu.bodies()[0].root;
        let second = &tu.bodies()[1].root;
        assert_eq!(first, second);

        let a = Cursor::from_stmt(CursorKind::IntegerLiteral, first, None, &tu);
        let b = Cursor::from_stmt(CursorKind::IntegerLiteral, first, None, &tu);
        let c = Cursor::from_stmt(CursorKind::IntegerLiteral, second, None, &tu);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, a.with_auxiliary(3));
    }

    #[test]
    fn test_sentinels_compare_by_reason_and_unit() {
        let tu = TranslationUnit::new("a.c");
        assert_eq!(
            Cursor::invalid(InvalidReason::InvalidCode, None),
            Cursor::invalid(InvalidReason::InvalidCode, None)
        );
        assert_ne!(
            Cursor::invalid(InvalidReason::InvalidCode, None),
            Cursor::invalid(InvalidReason::NoDeclFound, None)
        );
        assert_ne!(
            Cursor::invalid(InvalidReason::NoDeclFound, Some(&tu)),
            Cursor::invalid(InvalidReason::NoDeclFound, None)
        );
    }

    #[test]
    fn test_selector_index_only_for_carriers() {
        let mut tu = TranslationUnit::new("a.m");
        let id = tu.add_decl("f", DeclKind::Function);
        let decl = tu.decl(id).unwrap();
        let cursor = Cursor::from_decl(CursorKind::FunctionDecl, decl, &tu).with_auxiliary(2);
        assert_eq!(cursor.selector_index(), None);
        assert_eq!(cursor.auxiliary(), 2);

        let method = Cursor::from_decl(CursorKind::ObjCInstanceMethodDecl, decl, &tu);
        assert_eq!(method.with_auxiliary(NO_SELECTOR).selector_index(), None);
        assert_eq!(method.with_auxiliary(1).selector_index(), Some(1));
    }

    #[test]
    fn test_cursor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cursor<'static>>();
    }
}
