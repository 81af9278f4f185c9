// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Boundary function registry.
//!
//! Hosts that load the cursor layer dynamically look functions up by their
//! stable external symbol name rather than linking against them.

use std::fmt;

use cursorkit_core::StringResult;

use crate::cursor::Cursor;
use crate::literal::literal_spelling;
use crate::loops::{for_body, for_condition, for_increment, for_init};
use crate::operator::{binary_opcode, operator_spelling, unary_opcode};

/// A boundary function, grouped by signature.
#[derive(Clone, Copy)]
pub enum BoundaryFn {
    /// `cursor -> string result`
    String(for<'tu> fn(Cursor<'tu>) -> StringResult),
    /// `cursor -> opcode`
    Opcode(for<'tu> fn(Cursor<'tu>) -> i32),
    /// `cursor -> cursor`
    Part(for<'tu> fn(Cursor<'tu>) -> Cursor<'tu>),
}

impl fmt::Debug for BoundaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryFn::String(_) => f.write_str("String(fn)"),
            BoundaryFn::Opcode(_) => f.write_str("Opcode(fn)"),
            BoundaryFn::Part(_) => f.write_str("Part(fn)"),
        }
    }
}

/// One entry of the registry.
#[derive(Debug, Clone, Copy)]
pub struct ExportedFunction {
    pub symbol: &'static str,
    pub function: BoundaryFn,
}

static EXPORTS: [ExportedFunction; 8] = [
    ExportedFunction {
        symbol: "clang_Cursor_getOperatorString",
        function: BoundaryFn::String(operator_spelling),
    },
    ExportedFunction {
        symbol: "clang_Cursor_getBinaryOpcode",
        function: BoundaryFn::Opcode(binary_opcode),
    },
    ExportedFunction {
        symbol: "clang_Cursor_getUnaryOpcode",
        function: BoundaryFn::Opcode(unary_opcode),
    },
    ExportedFunction {
        symbol: "clang_Cursor_getLiteralString",
        function: BoundaryFn::String(literal_spelling),
    },
    ExportedFunction {
        symbol: "clang_getForStmtInit",
        function: BoundaryFn::Part(for_init),
    },
    ExportedFunction {
        symbol: "clang_getForStmtCond",
        function: BoundaryFn::Part(for_condition),
    },
    ExportedFunction {
        symbol: "clang_getForStmtInc",
        function: BoundaryFn::Part(for_increment),
    },
    ExportedFunction {
        symbol: "clang_getForStmtBody",
        function: BoundaryFn::Part(for_body),
    },
];

/// Every exported function, in registration order.
pub fn exported_functions() -> &'static [ExportedFunction] {
    &EXPORTS
}

/// Look a function up by symbol name.
pub fn lookup(symbol: &str) -> Option<BoundaryFn> {
    EXPORTS
        .iter()
        .find(|export| export.symbol == symbol)
        .map(|export| export.function)
}
