// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Statement and expression nodes.
//!
//! A [`Stmt`] is a source range plus a [`Node`]. Node classes whose payload the
//! cursor layer reads have a dedicated variant; all other classes share
//! [`Node::Generic`], which only records the class and the children.
//!
//! Trees are immutable once built: every payload field is public for
//! matching, but nothing in the cursor layer takes `&mut`.

use cursorkit_core::{SourceLocation, SourceRange};
use serde::{Deserialize, Serialize};

use crate::class::StmtClass;
use crate::decl::DeclId;
use crate::error::{AstError, Result};
use crate::literal::{ApInt, CharacterKind, FloatValue, StringKind};
use crate::opcode::{BinaryOperatorKind, UnaryOperatorKind};

// ============================================================================
// Stmt
// ============================================================================

/// A node together with its source range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stmt {
    #[serde(default)]
    pub range: SourceRange,
    pub node: Node,
}

/// The class-specific part of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    For(ForStmt),
    Binary(BinaryOperator),
    CompoundAssign(CompoundAssignOperator),
    Unary(UnaryOperator),
    Integer(IntegerLiteral),
    Floating(FloatingLiteral),
    Character(CharacterLiteral),
    String(StringLiteral),
    CxxBool {
        value: bool,
    },
    OpaqueValue(OpaqueValueExpr),
    Constant(ConstantExpr),
    PseudoObject(PseudoObjectExpr),
    DeclRef(DeclRefExpr),
    #[serde(rename = "objc_message")]
    ObjCMessage(ObjCMessageExpr),
    /// Any class without a payload of its own.
    Generic {
        class: StmtClass,
        #[serde(default)]
        children: Vec<Stmt>,
    },
}

// ============================================================================
// Payloads
// ============================================================================

/// The three-clause `for` loop. Every part is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForStmt {
    #[serde(default)]
    pub init: Option<Box<Stmt>>,
    #[serde(default)]
    pub cond: Option<Box<Stmt>>,
    #[serde(default)]
    pub inc: Option<Box<Stmt>>,
    #[serde(default)]
    pub body: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperator {
    pub opcode: BinaryOperatorKind,
    pub lhs: Box<Stmt>,
    pub rhs: Box<Stmt>,
}

/// `a op= b`. The opcode is always a compound assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundAssignOperator {
    pub opcode: BinaryOperatorKind,
    pub lhs: Box<Stmt>,
    pub rhs: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOperator {
    pub opcode: UnaryOperatorKind,
    pub operand: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegerLiteral {
    pub value: ApInt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingLiteral {
    pub value: FloatValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterLiteral {
    /// The code point or code unit value.
    pub value: u32,
    #[serde(default)]
    pub encoding: CharacterKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    /// The stored bytes, without quotes and with escapes already resolved.
    #[serde(with = "string_bytes")]
    pub bytes: Vec<u8>,
    #[serde(default)]
    pub encoding: StringKind,
}

/// A placeholder for an expression evaluated elsewhere.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpaqueValueExpr {
    #[serde(default)]
    pub source: Option<Box<Stmt>>,
}

/// A constant-folded wrapper around its operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantExpr {
    pub sub_expr: Box<Stmt>,
}

/// A syntactic form plus the semantic expressions it was rewritten into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PseudoObjectExpr {
    pub syntactic: Box<Stmt>,
    #[serde(default)]
    pub semantic: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclRefExpr {
    pub decl: DeclId,
}

/// An Objective-C message send, e.g. `[obj setX:1 y:2]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjCMessageExpr {
    /// Locations of the selector keywords, in source order.
    #[serde(default)]
    pub selector_locs: Vec<SourceLocation>,
    #[serde(default)]
    pub receiver: Option<Box<Stmt>>,
    #[serde(default)]
    pub args: Vec<Stmt>,
}

// ============================================================================
// Node
// ============================================================================

impl Node {
    /// The concrete class of this node.
    pub fn class(&self) -> StmtClass {
        match self {
            Node::For(_) => StmtClass::ForStmt,
            Node::Binary(_) => StmtClass::BinaryOperator,
            Node::CompoundAssign(_) => StmtClass::CompoundAssignOperator,
            Node::Unary(_) => StmtClass::UnaryOperator,
            Node::Integer(_) => StmtClass::IntegerLiteral,
            Node::Floating(_) => StmtClass::FloatingLiteral,
            Node::Character(_) => StmtClass::CharacterLiteral,
            Node::String(_) => StmtClass::StringLiteral,
            Node::CxxBool { .. } => StmtClass::CXXBoolLiteralExpr,
            Node::OpaqueValue(_) => StmtClass::OpaqueValueExpr,
            Node::Constant(_) => StmtClass::ConstantExpr,
            Node::PseudoObject(_) => StmtClass::PseudoObjectExpr,
            Node::DeclRef(_) => StmtClass::DeclRefExpr,
            Node::ObjCMessage(_) => StmtClass::ObjCMessageExpr,
            Node::Generic { class, .. } => *class,
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

impl Stmt {
    /// A node with an invalid range.
    pub fn new(node: Node) -> Self {
        Stmt {
            range: SourceRange::default(),
            node,
        }
    }

    pub fn with_range(mut self, range: SourceRange) -> Self {
        self.range = range;
        self
    }

    /// A node of a class without its own payload.
    pub fn generic(class: StmtClass, children: Vec<Stmt>) -> Result<Self> {
        if class.requires_payload() {
            return Err(AstError::PayloadRequired { class });
        }
        Ok(Stmt::new(Node::Generic { class, children }))
    }

    /// A childless node of a class without its own payload.
    pub fn leaf(class: StmtClass) -> Result<Self> {
        Stmt::generic(class, Vec::new())
    }

    /// `lhs op rhs`. Compound-assignment opcodes build a
    /// [`CompoundAssignOperator`].
    pub fn binary(opcode: BinaryOperatorKind, lhs: Stmt, rhs: Stmt) -> Self {
        let lhs = Box::new(lhs);
        let rhs = Box::new(rhs);
        if opcode.is_compound_assignment() {
            Stmt::new(Node::CompoundAssign(CompoundAssignOperator { opcode, lhs, rhs }))
        } else {
            Stmt::new(Node::Binary(BinaryOperator { opcode, lhs, rhs }))
        }
    }

    pub fn unary(opcode: UnaryOperatorKind, operand: Stmt) -> Self {
        Stmt::new(Node::Unary(UnaryOperator {
            opcode,
            operand: Box::new(operand),
        }))
    }

    /// A 32-bit `int` literal.
    pub fn int(value: i32) -> Self {
        Stmt::integer(ApInt::from_i32(value))
    }

    pub fn integer(value: ApInt) -> Self {
        Stmt::new(Node::Integer(IntegerLiteral { value }))
    }

    pub fn floating(value: impl Into<FloatValue>) -> Self {
        Stmt::new(Node::Floating(FloatingLiteral {
            value: value.into(),
        }))
    }

    /// A plain (non-prefixed) character literal.
    pub fn character(value: u32) -> Self {
        Stmt::new(Node::Character(CharacterLiteral {
            value,
            encoding: CharacterKind::Ascii,
        }))
    }

    /// An ordinary string literal.
    pub fn string(bytes: impl AsRef<[u8]>) -> Self {
        Stmt::new(Node::String(StringLiteral {
            bytes: bytes.as_ref().to_vec(),
            encoding: StringKind::Ordinary,
        }))
    }

    pub fn cxx_bool(value: bool) -> Self {
        Stmt::new(Node::CxxBool { value })
    }

    pub fn opaque_value(source: Option<Stmt>) -> Self {
        Stmt::new(Node::OpaqueValue(OpaqueValueExpr {
            source: source.map(Box::new),
        }))
    }

    pub fn constant(sub_expr: Stmt) -> Self {
        Stmt::new(Node::Constant(ConstantExpr {
            sub_expr: Box::new(sub_expr),
        }))
    }

    pub fn pseudo_object(syntactic: Stmt, semantic: Vec<Stmt>) -> Self {
        Stmt::new(Node::PseudoObject(PseudoObjectExpr {
            syntactic: Box::new(syntactic),
            semantic,
        }))
    }

    pub fn decl_ref(decl: DeclId) -> Self {
        Stmt::new(Node::DeclRef(DeclRefExpr { decl }))
    }

    pub fn message(
        selector_locs: Vec<SourceLocation>,
        receiver: Option<Stmt>,
        args: Vec<Stmt>,
    ) -> Self {
        Stmt::new(Node::ObjCMessage(ObjCMessageExpr {
            selector_locs,
            receiver: receiver.map(Box::new),
            args,
        }))
    }

    pub fn for_stmt(
        init: Option<Stmt>,
        cond: Option<Stmt>,
        inc: Option<Stmt>,
        body: Option<Stmt>,
    ) -> Self {
        Stmt::new(Node::For(ForStmt {
            init: init.map(Box::new),
            cond: cond.map(Box::new),
            inc: inc.map(Box::new),
            body: body.map(Box::new),
        }))
    }
}

// ============================================================================
// Inspection and traversal
// ============================================================================

impl Stmt {
    pub fn class(&self) -> StmtClass {
        self.node.class()
    }

    /// Direct children, in source order.
    ///
    /// The source expression of an opaque value is not a child; it is owned
    /// by the expression that binds it.
    pub fn children(&self) -> Vec<&Stmt> {
        fn push<'a>(out: &mut Vec<&'a Stmt>, stmt: &'a Option<Box<Stmt>>) {
            if let Some(stmt) = stmt {
                out.push(stmt);
            }
        }

        let mut out = Vec::new();
        match &self.node {
            Node::For(f) => {
                push(&mut out, &f.init);
                push(&mut out, &f.cond);
                push(&mut out, &f.inc);
                push(&mut out, &f.body);
            }
            Node::Binary(BinaryOperator { lhs, rhs, .. })
            | Node::CompoundAssign(CompoundAssignOperator { lhs, rhs, .. }) => {
                out.push(lhs);
                out.push(rhs);
            }
            Node::Unary(u) => out.push(&u.operand),
            Node::Constant(c) => out.push(&c.sub_expr),
            Node::PseudoObject(p) => {
                out.push(&p.syntactic);
                out.extend(p.semantic.iter());
            }
            Node::ObjCMessage(m) => {
                push(&mut out, &m.receiver);
                out.extend(m.args.iter());
            }
            Node::Generic { children, .. } => out.extend(children.iter()),
            Node::Integer(_)
            | Node::Floating(_)
            | Node::Character(_)
            | Node::String(_)
            | Node::CxxBool { .. }
            | Node::OpaqueValue(_)
            | Node::DeclRef(_) => {}
        }
        out
    }

    /// This node and all of its descendants, in pre-order.
    pub fn preorder(&self) -> Vec<&Stmt> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(stmt) = stack.pop() {
            out.push(stmt);
            stack.extend(stmt.children().into_iter().rev());
        }
        out
    }

    /// The innermost node whose range contains `loc`.
    pub fn innermost_at(&self, loc: SourceLocation) -> Option<&Stmt> {
        if !self.range.contains(loc) {
            return None;
        }
        for child in self.children() {
            if let Some(hit) = child.innermost_at(loc) {
                return Some(hit);
            }
        }
        Some(self)
    }
}

// ============================================================================
// String literal bytes
// ============================================================================

/// String literal bytes as JSON: a string when the bytes are UTF-8, else an
/// array of byte values. Both forms are accepted on input.
mod string_bytes {
    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        match std::str::from_utf8(bytes) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.collect_seq(bytes),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        deserializer.deserialize_any(BytesVisitor)
    }

    struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or an array of bytes")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Vec<u8>, E> {
            Ok(value.as_bytes().to_vec())
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Vec<u8>, E> {
            Ok(value.to_vec())
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<u8>, A::Error> {
            let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(byte) = seq.next_element::<u8>()? {
                out.push(byte);
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_opcode_builds_compound_node() {
        let stmt = Stmt::binary(BinaryOperatorKind::MulAssign, Stmt::int(1), Stmt::int(2));
        assert_eq!(stmt.class(), StmtClass::CompoundAssignOperator);

        let stmt = Stmt::binary(BinaryOperatorKind::Assign, Stmt::int(1), Stmt::int(2));
        assert_eq!(stmt.class(), StmtClass::BinaryOperator);
    }

    #[test]
    fn test_generic_rejects_payload_classes() {
        let err = Stmt::leaf(StmtClass::IntegerLiteral).unwrap_err();
        assert!(matches!(
            err,
            AstError::PayloadRequired {
                class: StmtClass::IntegerLiteral
            }
        ));
        assert!(Stmt::leaf(StmtClass::NullStmt).is_ok());
    }

    #[test]
    fn test_children_order() {
        let loop_stmt = Stmt::for_stmt(
            Some(Stmt::int(0)),
            None,
            Some(Stmt::int(2)),
            Some(Stmt::leaf(StmtClass::NullStmt).unwrap()),
        );
        let classes: Vec<_> = loop_stmt.children().iter().map(|s| s.class()).collect();
        assert_eq!(
            classes,
            vec![
                StmtClass::IntegerLiteral,
                StmtClass::IntegerLiteral,
                StmtClass::NullStmt
            ]
        );
    }

    #[test]
    fn test_opaque_source_is_not_a_child() {
        let opaque = Stmt::opaque_value(Some(Stmt::int(1)));
        assert!(opaque.children().is_empty());
    }

    #[test]
    fn test_preorder() {
        let tree = Stmt::binary(
            BinaryOperatorKind::Add,
            Stmt::unary(UnaryOperatorKind::Minus, Stmt::int(1)),
            Stmt::int(2),
        );
        let classes: Vec<_> = tree.preorder().iter().map(|s| s.class()).collect();
        assert_eq!(
            classes,
            vec![
                StmtClass::BinaryOperator,
                StmtClass::UnaryOperator,
                StmtClass::IntegerLiteral,
                StmtClass::IntegerLiteral
            ]
        );
    }

    #[test]
    fn test_innermost_at() {
        let tree = Stmt::binary(
            BinaryOperatorKind::Add,
            Stmt::int(1).with_range(SourceRange::offsets(0, 0)),
            Stmt::int(2).with_range(SourceRange::offsets(4, 4)),
        )
        .with_range(SourceRange::offsets(0, 4));
        let hit = tree.innermost_at(SourceLocation::at(4)).unwrap();
        assert_eq!(hit.range, SourceRange::offsets(4, 4));
        let hit = tree.innermost_at(SourceLocation::at(2)).unwrap();
        assert_eq!(hit.class(), StmtClass::BinaryOperator);
        assert!(tree.innermost_at(SourceLocation::at(9)).is_none());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "range": {"begin": 0, "end": 4},
            "node": {
                "kind": "binary",
                "opcode": "Add",
                "lhs": {"node": {"kind": "integer", "value": {"width": 32, "value": "1"}}},
                "rhs": {"node": {"kind": "generic", "class": "GNUNullExpr"}}
            }
        }"#;
        let stmt: Stmt = serde_json::from_str(json).unwrap();
        assert_eq!(stmt.class(), StmtClass::BinaryOperator);
        assert_eq!(stmt.children()[1].class(), StmtClass::GNUNullExpr);
    }

    #[test]
    fn test_string_bytes_json() {
        let stmt: Stmt =
            serde_json::from_str(r#"{"node": {"kind": "string", "bytes": [104, 0, 105]}}"#).unwrap();
        match &stmt.node {
            Node::String(s) => assert_eq!(s.bytes, b"h\0i"),
            other => panic!("unexpected node {:?}", other),
        }

        let stmt: Stmt = serde_json::from_str(r#"{"node": {"kind": "string", "bytes": "hi"}}"#).unwrap();
        let json = serde_json::to_string(&stmt).unwrap();
        assert!(json.contains(r#""bytes":"hi""#));
    }
}
