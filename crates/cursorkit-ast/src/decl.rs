// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Declarations.
//!
//! Statements refer to declarations by [`DeclId`]; the [`TranslationUnit`]
//! owns the declarations and resolves ids.
//!
//! [`TranslationUnit`]: crate::TranslationUnit

use cursorkit_core::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a declaration within its translation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclId(pub u32);

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload of an Objective-C method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjCMethodDecl {
    /// Instance (`-`) or class (`+`) method.
    #[serde(default = "default_true")]
    pub is_instance: bool,
    /// The implicit `self` parameter, once the method has a body.
    #[serde(default)]
    pub self_decl: Option<DeclId>,
    /// Locations of the selector keywords, in source order.
    #[serde(default)]
    pub selector_locs: Vec<SourceLocation>,
}

fn default_true() -> bool {
    true
}

/// What a declaration declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclKind {
    Unexposed,
    Struct,
    Union,
    Class,
    Enum,
    Field,
    EnumConstant,
    Function,
    Var,
    Parm,
    /// A compiler-synthesized parameter such as `self` or `_cmd`.
    ImplicitParam,
    Typedef,
    TypeAlias,
    Namespace,
    CxxMethod,
    Constructor,
    Destructor,
    #[serde(rename = "objc_interface")]
    ObjCInterface,
    #[serde(rename = "objc_protocol")]
    ObjCProtocol,
    #[serde(rename = "objc_ivar")]
    ObjCIvar,
    #[serde(rename = "objc_property")]
    ObjCProperty,
    #[serde(rename = "objc_method")]
    ObjCMethod(ObjCMethodDecl),
}

impl DeclKind {
    pub fn as_objc_method(&self) -> Option<&ObjCMethodDecl> {
        match self {
            DeclKind::ObjCMethod(method) => Some(method),
            _ => None,
        }
    }

    pub fn is_implicit_param(&self) -> bool {
        matches!(self, DeclKind::ImplicitParam)
    }
}

/// A declaration owned by a translation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decl {
    pub id: DeclId,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub kind: DeclKind,
    /// The enclosing declaration context, if any.
    #[serde(default)]
    pub context: Option<DeclId>,
    #[serde(default)]
    pub location: SourceLocation,
}

impl Decl {
    pub fn new(id: DeclId, name: impl Into<String>, kind: DeclKind) -> Self {
        Decl {
            id,
            name: name.into(),
            kind,
            context: None,
            location: SourceLocation::INVALID,
        }
    }

    pub fn with_context(mut self, context: DeclId) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objc_method_accessor() {
        let method = DeclKind::ObjCMethod(ObjCMethodDecl {
            is_instance: true,
            self_decl: Some(DeclId(3)),
            selector_locs: vec![SourceLocation::at(10)],
        });
        assert_eq!(method.as_objc_method().and_then(|m| m.self_decl), Some(DeclId(3)));
        assert!(DeclKind::Var.as_objc_method().is_none());
        assert!(DeclKind::ImplicitParam.is_implicit_param());
    }

    #[test]
    fn test_decl_json() {
        let json = r#"{
            "id": 2,
            "name": "setX:y:",
            "kind": "objc_method",
            "selector_locs": [4, 12],
            "self_decl": 3
        }"#;
        let decl: Decl = serde_json::from_str(json).unwrap();
        let method = decl.kind.as_objc_method().unwrap();
        assert!(method.is_instance);
        assert_eq!(method.selector_locs, vec![SourceLocation::at(4), SourceLocation::at(12)]);
        assert_eq!(decl.context, None);
    }

    #[test]
    fn test_unit_variant_json() {
        let decl: Decl = serde_json::from_str(r#"{"id":1,"name":"self","kind":"implicit_param"}"#).unwrap();
        assert_eq!(decl.kind, DeclKind::ImplicitParam);
        assert_eq!(decl.id.to_string(), "#1");
    }
}
