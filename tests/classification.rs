// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Classification properties over whole translation units.

use cursorkit::ast::{
    BinaryOperatorKind, DeclKind, ObjCMethodDecl, Stmt, StmtClass, TranslationUnit,
};
use cursorkit::{classify, kind_for_class, Cursor, CursorKind, SourceLocation, SourceRange};

fn unit_with(stmt: Stmt) -> TranslationUnit {
    let mut tu = TranslationUnit::new("classify.m");
    tu.add_body(None, stmt);
    tu
}

fn classify_root(tu: &TranslationUnit) -> Cursor<'_> {
    classify(&tu.bodies()[0].root, None, tu, None)
}

// ============================================================================
// Wrappers
// ============================================================================

#[test]
fn nested_wrappers_classify_as_innermost_node() {
    let inner = Stmt::binary(BinaryOperatorKind::Mul, Stmt::int(2), Stmt::int(3));
    let wrapped = Stmt::constant(Stmt::pseudo_object(
        Stmt::opaque_value(Some(Stmt::constant(inner.clone()))),
        vec![Stmt::int(6)],
    ));
    let tu = unit_with(wrapped);
    let cursor = classify_root(&tu);

    assert_eq!(cursor.kind(), CursorKind::BinaryOperator);
    assert_eq!(cursor.stmt(), Some(&inner));
}

#[test]
fn classification_is_idempotent_on_the_carried_node() {
    let tu = unit_with(Stmt::constant(Stmt::opaque_value(Some(Stmt::string("x")))));
    let first = classify_root(&tu);
    let stmt = first.stmt().unwrap();
    let second = classify(stmt, first.decl(), &tu, None);

    assert_eq!(first, second);
    assert_eq!(second.kind(), CursorKind::StringLiteral);
}

#[test]
fn sourceless_opaque_value_is_unexposed() {
    let tu = unit_with(Stmt::opaque_value(None));
    let cursor = classify_root(&tu);
    assert_eq!(cursor.kind(), CursorKind::UnexposedExpr);
    assert!(!cursor.is_null());
}

// ============================================================================
// Completeness
// ============================================================================

#[test]
fn every_leaf_class_gets_some_kind() {
    let unknown: Vec<StmtClass> = StmtClass::ALL
        .iter()
        .copied()
        .filter(|class| !class.requires_payload())
        .filter(|&class| {
            let tu = unit_with(Stmt::leaf(class).unwrap());
            let cursor = classify_root(&tu);
            assert!(!cursor.is_null(), "{} produced a sentinel", class);
            assert_eq!(cursor.kind(), kind_for_class(class));
            cursor.kind() == CursorKind::NotImplemented
        })
        .collect();

    let expected = [
        StmtClass::NoStmt,
        StmtClass::OMPDepobjDirective,
        StmtClass::OMPScanDirective,
        StmtClass::RecoveryExpr,
        StmtClass::MatrixSubscriptExpr,
        StmtClass::CXXAddrspaceCastExpr,
        StmtClass::OMPArrayShapingExpr,
        StmtClass::OMPIteratorExpr,
    ];
    assert_eq!(unknown.len(), expected.len(), "{:?}", unknown);
    for class in expected {
        assert!(unknown.contains(&class), "{} should be NotImplemented", class);
    }
}

#[test]
fn unknown_class_keeps_its_payload() {
    let tu = unit_with(Stmt::leaf(StmtClass::RecoveryExpr).unwrap());
    let cursor = classify_root(&tu);
    assert_eq!(cursor.kind(), CursorKind::NotImplemented);
    assert_eq!(cursor.stmt().map(Stmt::class), Some(StmtClass::RecoveryExpr));
    assert!(cursor.translation_unit().is_some());
}

#[test]
fn buckets_share_a_kind() {
    for class in [
        StmtClass::ImplicitCastExpr,
        StmtClass::ExprWithCleanups,
        StmtClass::ObjCBoxedExpr,
        StmtClass::VAArgExpr,
    ] {
        assert_eq!(kind_for_class(class), CursorKind::UnexposedExpr, "{}", class);
    }
    assert_eq!(
        kind_for_class(StmtClass::AttributedStmt),
        CursorKind::UnexposedStmt
    );
    assert_eq!(
        kind_for_class(StmtClass::CXXNoexceptExpr),
        CursorKind::UnaryExpr
    );
}

#[test]
fn every_kind_is_a_statement_or_expression_or_sentinel() {
    for &class in StmtClass::ALL {
        let kind = kind_for_class(class);
        assert!(
            kind.is_statement() || kind.is_expression() || kind.is_invalid(),
            "{} -> {}",
            class,
            kind
        );
    }
}

// ============================================================================
// Objective-C self
// ============================================================================

#[test]
fn self_reference_inside_method_body() {
    let mut tu = TranslationUnit::new("self.m");
    let method = tu.add_decl(
        "tick",
        DeclKind::ObjCMethod(ObjCMethodDecl {
            is_instance: true,
            self_decl: None,
            selector_locs: vec![],
        }),
    );
    let self_param = tu.add_decl("self", DeclKind::ImplicitParam);
    let cmd_param = tu.add_decl("_cmd", DeclKind::ImplicitParam);
    for param in [self_param, cmd_param] {
        tu.decl_mut(param).unwrap().context = Some(method);
    }
    if let DeclKind::ObjCMethod(m) = &mut tu.decl_mut(method).unwrap().kind {
        m.self_decl = Some(self_param);
    }
    tu.add_body(Some(method), Stmt::decl_ref(self_param));
    tu.add_body(Some(method), Stmt::decl_ref(cmd_param));
    tu.validate().unwrap();

    let owner = tu.decl(method);
    let self_cursor = classify(&tu.bodies()[0].root, owner, &tu, None);
    let cmd_cursor = classify(&tu.bodies()[1].root, owner, &tu, None);

    assert_eq!(self_cursor.kind(), CursorKind::ObjCSelfExpr);
    assert_eq!(cmd_cursor.kind(), CursorKind::DeclRefExpr);
    assert_eq!(self_cursor.decl().map(|d| d.id), Some(method));
}

#[test]
fn plain_variable_named_self_is_not_objc_self() {
    let mut tu = TranslationUnit::new("self.c");
    let var = tu.add_decl("self", DeclKind::Var);
    tu.add_body(None, Stmt::decl_ref(var));
    assert_eq!(classify_root(&tu).kind(), CursorKind::DeclRefExpr);
}

// ============================================================================
// Message sends
// ============================================================================

#[test]
fn message_selector_follows_region() {
    let locs = vec![SourceLocation::at(4), SourceLocation::at(12)];
    let tu = unit_with(Stmt::message(locs, None, vec![Stmt::int(1), Stmt::int(2)]));
    let root = &tu.bodies()[0].root;

    let on_second = classify(root, None, &tu, Some(SourceRange::point(SourceLocation::at(12))));
    assert_eq!(on_second.kind(), CursorKind::ObjCMessageExpr);
    assert_eq!(on_second.selector_index(), Some(1));

    let elsewhere = classify(root, None, &tu, Some(SourceRange::point(SourceLocation::at(5))));
    assert_eq!(elsewhere.auxiliary(), -1);
    assert_eq!(elsewhere.selector_index(), None);

    let no_region = classify(root, None, &tu, None);
    assert_eq!(no_region.auxiliary(), -1);
}

#[test]
fn method_declaration_selector_follows_region() {
    let mut tu = TranslationUnit::new("decl.m");
    let method = tu.add_decl(
        "setX:y:z:",
        DeclKind::ObjCMethod(ObjCMethodDecl {
            is_instance: false,
            self_decl: None,
            selector_locs: vec![
                SourceLocation::at(8),
                SourceLocation::at(16),
                SourceLocation::at(24),
            ],
        }),
    );
    let decl = tu.decl(method).unwrap();

    let on_second = Cursor::for_decl(decl, &tu, Some(SourceRange::point(SourceLocation::at(16))));
    assert_eq!(on_second.kind(), CursorKind::ObjCClassMethodDecl);
    assert_eq!(on_second.auxiliary(), 1);
    assert_eq!(on_second.selector_index(), Some(1));
    assert_eq!(on_second.decl().map(|d| d.id), Some(method));

    let spanning = Cursor::for_decl(decl, &tu, Some(SourceRange::offsets(16, 24)));
    assert_eq!(spanning.auxiliary(), -1);
    assert_eq!(spanning.selector_index(), None);

    let off_fragment = Cursor::for_decl(decl, &tu, Some(SourceRange::point(SourceLocation::at(17))));
    assert_eq!(off_fragment.auxiliary(), -1);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn concurrent_classification_agrees() {
    let mut tu = TranslationUnit::new("threads.c");
    for i in 0..16 {
        tu.add_body(
            None,
            Stmt::constant(Stmt::binary(
                BinaryOperatorKind::Add,
                Stmt::int(i),
                Stmt::floating(f64::from(i) / 2.0),
            )),
        );
    }
    let tu = &tu;

    let results: Vec<Vec<CursorKind>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    tu.bodies()
                        .iter()
                        .flat_map(|body| body.root.preorder())
                        .map(|stmt| classify(stmt, None, tu, None).kind())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for other in &results[1..] {
        assert_eq!(other, &results[0]);
    }
}
