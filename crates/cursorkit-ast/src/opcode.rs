// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Operator opcodes.
//!
//! Opcode numbers are stable: they are exchanged with external tools as plain
//! integers, so the order of the variants below is part of the contract.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opcodes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident = $code:literal => $spelling:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(i32)]
        $vis enum $name {
            $( $variant = $code, )*
        }

        impl $name {
            /// Every opcode, in code order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )* ];

            /// The stable numeric opcode.
            pub fn code(self) -> i32 {
                self as i32
            }

            pub fn from_code(code: i32) -> Option<$name> {
                match code {
                    $( $code => Some($name::$variant), )*
                    _ => None,
                }
            }

            /// Canonical source spelling of the operator.
            pub fn spelling(self) -> &'static str {
                match self {
                    $( $name::$variant => $spelling, )*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.spelling())
            }
        }
    };
}

opcodes! {
    /// Binary operator opcodes, including compound assignments.
    pub enum BinaryOperatorKind {
        PtrMemD = 0 => ".*",
        PtrMemI = 1 => "->*",
        Mul = 2 => "*",
        Div = 3 => "/",
        Rem = 4 => "%",
        Add = 5 => "+",
        Sub = 6 => "-",
        Shl = 7 => "<<",
        Shr = 8 => ">>",
        Cmp = 9 => "<=>",
        Lt = 10 => "<",
        Gt = 11 => ">",
        Le = 12 => "<=",
        Ge = 13 => ">=",
        Eq = 14 => "==",
        Ne = 15 => "!=",
        And = 16 => "&",
        Xor = 17 => "^",
        Or = 18 => "|",
        LAnd = 19 => "&&",
        LOr = 20 => "||",
        Assign = 21 => "=",
        MulAssign = 22 => "*=",
        DivAssign = 23 => "/=",
        RemAssign = 24 => "%=",
        AddAssign = 25 => "+=",
        SubAssign = 26 => "-=",
        ShlAssign = 27 => "<<=",
        ShrAssign = 28 => ">>=",
        AndAssign = 29 => "&=",
        XorAssign = 30 => "^=",
        OrAssign = 31 => "|=",
        Comma = 32 => ",",
    }
}

opcodes! {
    /// Unary operator opcodes.
    pub enum UnaryOperatorKind {
        PostInc = 0 => "++",
        PostDec = 1 => "--",
        PreInc = 2 => "++",
        PreDec = 3 => "--",
        AddrOf = 4 => "&",
        Deref = 5 => "*",
        Plus = 6 => "+",
        Minus = 7 => "-",
        Not = 8 => "~",
        LNot = 9 => "!",
        Real = 10 => "__real",
        Imag = 11 => "__imag",
        Extension = 12 => "__extension__",
        Coawait = 13 => "co_await",
    }
}

impl BinaryOperatorKind {
    /// `*=` through `|=`: the opcodes carried by compound-assignment nodes.
    pub fn is_compound_assignment(self) -> bool {
        matches!(self.code(), 22..=31)
    }

    /// Plain or compound assignment.
    pub fn is_assignment(self) -> bool {
        self == BinaryOperatorKind::Assign || self.is_compound_assignment()
    }

    /// Relational, equality and three-way comparison.
    pub fn is_comparison(self) -> bool {
        matches!(self.code(), 9..=15)
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOperatorKind::LAnd | BinaryOperatorKind::LOr)
    }

    pub fn is_pointer_to_member(self) -> bool {
        matches!(self, BinaryOperatorKind::PtrMemD | BinaryOperatorKind::PtrMemI)
    }

    /// The arithmetic operator a compound assignment applies, e.g. `+` for `+=`.
    pub fn compound_base(self) -> Option<BinaryOperatorKind> {
        use BinaryOperatorKind::*;
        match self {
            MulAssign => Some(Mul),
            DivAssign => Some(Div),
            RemAssign => Some(Rem),
            AddAssign => Some(Add),
            SubAssign => Some(Sub),
            ShlAssign => Some(Shl),
            ShrAssign => Some(Shr),
            AndAssign => Some(And),
            XorAssign => Some(Xor),
            OrAssign => Some(Or),
            _ => None,
        }
    }
}

impl UnaryOperatorKind {
    pub fn is_prefix(self) -> bool {
        !self.is_postfix()
    }

    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOperatorKind::PostInc | UnaryOperatorKind::PostDec)
    }

    pub fn is_increment_decrement(self) -> bool {
        matches!(self.code(), 0..=3)
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            UnaryOperatorKind::Plus
                | UnaryOperatorKind::Minus
                | UnaryOperatorKind::Not
                | UnaryOperatorKind::LNot
        )
    }
}
