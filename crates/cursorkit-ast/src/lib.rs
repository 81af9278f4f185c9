// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Syntax tree model for cursorkit.
//!
//! This crate models the front end's internal tree: the part of the system
//! that is free to change shape between releases. The cursor layer in the
//! root crate translates it into stable cursors.
//!
//! # Overview
//!
//! - [`StmtClass`]: one entry per concrete statement/expression node class.
//! - [`Stmt`] / [`Node`]: a node and its class-specific payload. Classes whose
//!   payload the cursor layer reads (operators, literals, wrappers, `for`
//!   loops, message sends, name references) have dedicated variants; every
//!   other class is [`Node::Generic`].
//! - [`Decl`] / [`DeclKind`]: declarations, referenced by [`DeclId`].
//! - [`TranslationUnit`]: owns declarations and bodies; outlives every cursor.
//!
//! # Quick Start
//!
//! ```
//! use cursorkit_ast::{BinaryOperatorKind, Stmt, TranslationUnit};
//!
//! let mut tu = TranslationUnit::new("main.c");
//! let sum = Stmt::binary(BinaryOperatorKind::Add, Stmt::int(1), Stmt::int(2));
//! tu.add_body(None, sum);
//! assert!(tu.validate().is_ok());
//! ```

pub mod class;
pub mod decl;
pub mod error;
pub mod literal;
pub mod node;
pub mod opcode;
pub mod unit;

pub use class::StmtClass;
pub use decl::{Decl, DeclId, DeclKind, ObjCMethodDecl};
pub use error::{AstError, Result};
pub use literal::{ApInt, CharacterKind, FloatValue, StringKind};
pub use node::{
    BinaryOperator, CharacterLiteral, CompoundAssignOperator, ConstantExpr, DeclRefExpr,
    FloatingLiteral, ForStmt, IntegerLiteral, Node, ObjCMessageExpr, OpaqueValueExpr,
    PseudoObjectExpr, Stmt, StringLiteral, UnaryOperator,
};
pub use opcode::{BinaryOperatorKind, UnaryOperatorKind};
pub use unit::{Body, TranslationUnit};
