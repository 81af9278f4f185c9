// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Translation units.
//!
//! A [`TranslationUnit`] owns every declaration and statement body of one
//! parsed file. Cursors borrow from it, so it must outlive all of them; the
//! borrow checker enforces that.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::class::StmtClass;
use crate::decl::{Decl, DeclId, DeclKind};
use crate::error::{AstError, Result};
use crate::node::{Node, Stmt};

/// A statement tree and the declaration that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// The owning declaration context (a function or method), if any.
    #[serde(default)]
    pub owner: Option<DeclId>,
    pub root: Stmt,
}

/// The owner of a parsed syntax tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub name: String,
    #[serde(default)]
    decls: Vec<Decl>,
    #[serde(default)]
    bodies: Vec<Body>,
}

impl TranslationUnit {
    pub fn new(name: impl Into<String>) -> Self {
        TranslationUnit {
            name: name.into(),
            decls: Vec::new(),
            bodies: Vec::new(),
        }
    }

    /// Add a declaration, assigning it the next free id.
    pub fn add_decl(&mut self, name: impl Into<String>, kind: DeclKind) -> DeclId {
        let id = DeclId(self.next_decl_id());
        self.decls.push(Decl::new(id, name, kind));
        id
    }

    /// Add a fully built declaration, keeping its id.
    pub fn insert_decl(&mut self, decl: Decl) -> Result<DeclId> {
        let id = decl.id;
        if self.decl(id).is_some() {
            return Err(AstError::DuplicateDecl { id });
        }
        self.decls.push(decl);
        Ok(id)
    }

    /// Mutable access for wiring declarations together while building.
    pub fn decl_mut(&mut self, id: DeclId) -> Option<&mut Decl> {
        self.decls.iter_mut().find(|decl| decl.id == id)
    }

    /// Add a statement body owned by `owner`. Returns the body's index.
    pub fn add_body(&mut self, owner: Option<DeclId>, root: Stmt) -> usize {
        self.bodies.push(Body { owner, root });
        self.bodies.len() - 1
    }

    pub fn decl(&self, id: DeclId) -> Option<&Decl> {
        self.decls.iter().find(|decl| decl.id == id)
    }

    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    fn next_decl_id(&self) -> u32 {
        self.decls
            .iter()
            .map(|decl| decl.id.0 + 1)
            .max()
            .unwrap_or(0)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the tree for inconsistencies the cursor layer relies on never
    /// seeing: duplicate or dangling declaration ids, operators carrying an
    /// opcode from the wrong family, and payload classes built generically.
    pub fn validate(&self) -> Result<()> {
        for (index, decl) in self.decls.iter().enumerate() {
            if self.decls[..index].iter().any(|other| other.id == decl.id) {
                return Err(AstError::DuplicateDecl { id: decl.id });
            }
        }
        for decl in &self.decls {
            if let Some(context) = decl.context {
                self.require_decl(context)?;
            }
            if let Some(method) = decl.kind.as_objc_method() {
                if let Some(self_decl) = method.self_decl {
                    self.require_decl(self_decl)?;
                }
            }
        }
        for body in &self.bodies {
            if let Some(owner) = body.owner {
                self.require_decl(owner)?;
            }
            for stmt in body.root.preorder() {
                self.validate_node(stmt)?;
            }
        }
        debug!(
            unit = %self.name,
            decls = self.decls.len(),
            bodies = self.bodies.len(),
            "translation unit validated"
        );
        Ok(())
    }

    fn require_decl(&self, id: DeclId) -> Result<()> {
        match self.decl(id) {
            Some(_) => Ok(()),
            None => Err(AstError::DanglingDecl { id }),
        }
    }

    fn validate_node(&self, stmt: &Stmt) -> Result<()> {
        match &stmt.node {
            Node::Binary(op) if op.opcode.is_compound_assignment() => Err(AstError::OpcodeFamily {
                class: StmtClass::BinaryOperator,
                opcode: op.opcode.spelling().to_string(),
            }),
            Node::CompoundAssign(op) if !op.opcode.is_compound_assignment() => {
                Err(AstError::OpcodeFamily {
                    class: StmtClass::CompoundAssignOperator,
                    opcode: op.opcode.spelling().to_string(),
                })
            }
            Node::DeclRef(r) => self.require_decl(r.decl),
            Node::OpaqueValue(opaque) => match &opaque.source {
                Some(source) => source.preorder().into_iter().try_for_each(|s| self.validate_node(s)),
                None => Ok(()),
            },
            Node::Generic { class, .. } if class.requires_payload() => {
                Err(AstError::PayloadRequired { class: *class })
            }
            _ => Ok(()),
        }
    }

    // ========================================================================
    // JSON
    // ========================================================================

    /// Parse and validate a translation unit from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let unit: TranslationUnit = serde_json::from_str(json)?;
        unit.validate()?;
        Ok(unit)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::ObjCMethodDecl;
    use crate::opcode::BinaryOperatorKind;
    use crate::node::CompoundAssignOperator;

    #[test]
    fn test_decl_ids_are_sequential() {
        let mut tu = TranslationUnit::new("a.m");
        let a = tu.add_decl("f", DeclKind::Function);
        let b = tu.add_decl("x", DeclKind::Var);
        assert_eq!(a, DeclId(0));
        assert_eq!(b, DeclId(1));
        assert_eq!(tu.decl(b).map(|d| d.name.as_str()), Some("x"));
    }

    #[test]
    fn test_insert_duplicate_decl() {
        let mut tu = TranslationUnit::new("a.c");
        let id = tu.add_decl("f", DeclKind::Function);
        let err = tu.insert_decl(Decl::new(id, "g", DeclKind::Function)).unwrap_err();
        assert!(matches!(err, AstError::DuplicateDecl { .. }));
    }

    #[test]
    fn test_dangling_decl_ref() {
        let mut tu = TranslationUnit::new("a.c");
        tu.add_body(None, Stmt::decl_ref(DeclId(9)));
        let err = tu.validate().unwrap_err();
        assert!(matches!(err, AstError::DanglingDecl { id: DeclId(9) }));
    }

    #[test]
    fn test_dangling_self_decl() {
        let mut tu = TranslationUnit::new("a.m");
        tu.add_decl(
            "run",
            DeclKind::ObjCMethod(ObjCMethodDecl {
                is_instance: true,
                self_decl: Some(DeclId(5)),
                selector_locs: Vec::new(),
            }),
        );
        assert!(tu.validate().is_err());
    }

    #[test]
    fn test_wrong_opcode_family() {
        let mut tu = TranslationUnit::new("a.c");
        let bogus = Stmt::new(Node::CompoundAssign(CompoundAssignOperator {
            opcode: BinaryOperatorKind::Add,
            lhs: Box::new(Stmt::int(1)),
            rhs: Box::new(Stmt::int(2)),
        }));
        tu.add_body(None, bogus);
        let err = tu.validate().unwrap_err();
        assert!(err.to_string().contains("CompoundAssignOperator"));
    }

    #[test]
    fn test_generic_payload_class_from_json() {
        let json = r#"{
            "name": "a.c",
            "bodies": [{"root": {"node": {"kind": "generic", "class": "ForStmt"}}}]
        }"#;
        let err = TranslationUnit::from_json(json).unwrap_err();
        assert!(matches!(err, AstError::PayloadRequired { .. }));
    }

    #[test]
    fn test_json_round_trip() {
        let mut tu = TranslationUnit::new("main.c");
        let f = tu.add_decl("main", DeclKind::Function);
        tu.add_body(
            Some(f),
            Stmt::binary(BinaryOperatorKind::AddAssign, Stmt::int(1), Stmt::floating(2.5)),
        );
        let json = tu.to_json().unwrap();
        let back = TranslationUnit::from_json(&json).unwrap();
        assert_eq!(back, tu);
    }

    #[test]
    fn test_malformed_json() {
        let err = TranslationUnit::from_json("{").unwrap_err();
        assert!(matches!(err, AstError::Json(_)));
    }
}
