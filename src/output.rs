// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! JSON output types for the `cursorkit` binary.
//!
//! Every response carries `status` and `schema_version`. Errors use the
//! same envelope with an [`ErrorInfo`] whose code is also the exit status.

use std::io::{self, Write};

use cursorkit_core::error::{CursorError, OutputErrorCode};
use cursorkit_core::{CursorKind, SourceRange};
use serde::{Deserialize, Serialize};

/// Version of the output schema.
pub const SCHEMA_VERSION: &str = "1";

// ============================================================================
// Cursor records
// ============================================================================

/// Decoded operator of an operator cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorInfo {
    pub spelling: String,
    pub opcode: i32,
}

/// Kinds of the four parts of a `for` loop cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopParts {
    pub init: CursorKind,
    pub cond: CursorKind,
    pub inc: CursorKind,
    pub body: CursorKind,
}

/// One classified node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorRecord {
    /// Index of the body the node belongs to.
    pub body: usize,
    /// The node's own class, before unwrapping.
    pub class: String,
    pub kind: CursorKind,
    pub raw_kind: i32,
    pub range: SourceRange,
    /// Present for kinds that carry a selector index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<OperatorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_parts: Option<LoopParts>,
}

/// Response for `cursorkit classify --format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub status: String,
    pub schema_version: String,
    pub unit: String,
    pub cursors: Vec<CursorRecord>,
}

impl ClassifyResponse {
    pub fn new(unit: impl Into<String>, cursors: Vec<CursorRecord>) -> Self {
        ClassifyResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            unit: unit.into(),
            cursors,
        }
    }
}

// ============================================================================
// Kind table
// ============================================================================

/// One entry of `cursorkit kinds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindRecord {
    pub name: String,
    pub value: i32,
    pub category: String,
}

impl KindRecord {
    pub fn from_kind(kind: CursorKind) -> Self {
        KindRecord {
            name: kind.spelling().to_string(),
            value: kind.as_raw(),
            category: category(kind).to_string(),
        }
    }
}

/// Category name of a kind.
pub fn category(kind: CursorKind) -> &'static str {
    if kind.is_declaration() {
        "declaration"
    } else if kind.is_reference() {
        "reference"
    } else if kind.is_invalid() {
        "invalid"
    } else if kind.is_expression() {
        "expression"
    } else if kind.is_statement() {
        "statement"
    } else if kind.is_translation_unit() {
        "translation_unit"
    } else if kind.is_attribute() {
        "attribute"
    } else if kind.is_preprocessing() {
        "preprocessing"
    } else {
        "other"
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: u8,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorInfo {
    pub fn from_error(err: &CursorError) -> Self {
        let details = match err {
            CursorError::FileNotFound { path } => Some(serde_json::json!({ "path": path })),
            CursorError::NodeNotFound { offset } => Some(serde_json::json!({ "offset": offset })),
            _ => None,
        };
        ErrorInfo {
            code: OutputErrorCode::from(err).code(),
            message: err.to_string(),
            details,
        }
    }
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub schema_version: String,
    pub error: ErrorInfo,
}

impl ErrorResponse {
    pub fn from_error(err: &CursorError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo::from_error(err),
        }
    }
}

// ============================================================================
// Emitters
// ============================================================================

/// Emit a response as pretty JSON.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

/// Emit a response as compact JSON (single line).
pub fn emit_response_compact<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}
