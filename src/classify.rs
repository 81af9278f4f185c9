// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Node classification.
//!
//! [`classify`] maps a statement or expression node onto a [`CursorKind`].
//! The rules apply in order, first match wins:
//!
//! 1. Transparent wrappers are skipped: an opaque value with a source
//!    expression, a constant-folded expression and a pseudo-object expression
//!    are classified as the node they wrap.
//! 2. A name reference to the implicit `self` of an Objective-C method
//!    becomes `ObjCSelfExpr`.
//! 3. A message send records its selector index.
//! 4. Everything else goes through the class table, which buckets families
//!    of related classes onto one kind and maps the rest one to one.
//! 5. Classes missing from the table yield `NotImplemented` with the payload
//!    still populated. Classification never fails.

use cursorkit_ast::{Decl, DeclId, DeclKind, Node, Stmt, StmtClass, TranslationUnit};
use cursorkit_core::{CursorKind, SourceRange};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::selector::index_selector;

// ============================================================================
// Statements and expressions
// ============================================================================

/// Classify `stmt` into a cursor.
///
/// `parent` is the owning declaration context, if known. `region` is only
/// consulted to pick a selector fragment on message sends.
pub fn classify<'tu>(
    stmt: &'tu Stmt,
    parent: Option<&'tu Decl>,
    tu: &'tu TranslationUnit,
    region: Option<SourceRange>,
) -> Cursor<'tu> {
    let kind = match &stmt.node {
        Node::OpaqueValue(opaque) => match &opaque.source {
            Some(source) => {
                trace!("unwrapping opaque value");
                return classify(source, parent, tu, region);
            }
            None => CursorKind::UnexposedExpr,
        },
        Node::Constant(constant) => {
            trace!("unwrapping constant expression");
            return classify(&constant.sub_expr, parent, tu, region);
        }
        Node::PseudoObject(pseudo) => {
            trace!("unwrapping pseudo-object to its syntactic form");
            return classify(&pseudo.syntactic, parent, tu, region);
        }
        Node::DeclRef(reference) => {
            if refers_to_objc_self(reference.decl, tu) {
                CursorKind::ObjCSelfExpr
            } else {
                CursorKind::DeclRefExpr
            }
        }
        Node::ObjCMessage(message) => {
            let index = index_selector(&message.selector_locs, region);
            return Cursor::from_stmt(CursorKind::ObjCMessageExpr, stmt, parent, tu)
                .with_selector_index(index);
        }
        node => kind_for_class(node.class()),
    };
    Cursor::from_stmt(kind, stmt, parent, tu)
}

impl<'tu> Cursor<'tu> {
    /// Shorthand for [`classify`].
    pub fn for_stmt(
        stmt: &'tu Stmt,
        parent: Option<&'tu Decl>,
        tu: &'tu TranslationUnit,
        region: Option<SourceRange>,
    ) -> Self {
        classify(stmt, parent, tu, region)
    }
}

/// Whether `id` is the implicit `self` parameter of the Objective-C method
/// it belongs to.
fn refers_to_objc_self(id: DeclId, tu: &TranslationUnit) -> bool {
    let Some(decl) = tu.decl(id) else {
        return false;
    };
    if !decl.kind.is_implicit_param() {
        return false;
    }
    decl.context
        .and_then(|context| tu.decl(context))
        .and_then(|method| method.kind.as_objc_method())
        .is_some_and(|method| method.self_decl == Some(decl.id))
}

/// The kind for a node class, before any wrapper or reference rules.
pub fn kind_for_class(class: StmtClass) -> CursorKind {
    use StmtClass as S;

    match class {
        // Control flow and other statements
        S::CaseStmt => CursorKind::CaseStmt,
        S::DefaultStmt => CursorKind::DefaultStmt,
        S::IfStmt => CursorKind::IfStmt,
        S::SwitchStmt => CursorKind::SwitchStmt,
        S::WhileStmt => CursorKind::WhileStmt,
        S::DoStmt => CursorKind::DoStmt,
        S::ForStmt => CursorKind::ForStmt,
        S::GotoStmt => CursorKind::GotoStmt,
        S::IndirectGotoStmt => CursorKind::IndirectGotoStmt,
        S::ContinueStmt => CursorKind::ContinueStmt,
        S::BreakStmt => CursorKind::BreakStmt,
        S::ReturnStmt => CursorKind::ReturnStmt,
        S::GCCAsmStmt => CursorKind::GCCAsmStmt,
        S::MSAsmStmt => CursorKind::MSAsmStmt,
        S::ObjCAtTryStmt => CursorKind::ObjCAtTryStmt,
        S::ObjCAtCatchStmt => CursorKind::ObjCAtCatchStmt,
        S::ObjCAtFinallyStmt => CursorKind::ObjCAtFinallyStmt,
        S::ObjCAtThrowStmt => CursorKind::ObjCAtThrowStmt,
        S::ObjCAtSynchronizedStmt => CursorKind::ObjCAtSynchronizedStmt,
        S::ObjCAutoreleasePoolStmt => CursorKind::ObjCAutoreleasePoolStmt,
        S::ObjCForCollectionStmt => CursorKind::ObjCForCollectionStmt,
        S::CXXCatchStmt => CursorKind::CXXCatchStmt,
        S::CXXTryStmt => CursorKind::CXXTryStmt,
        S::CXXForRangeStmt => CursorKind::CXXForRangeStmt,
        S::SEHTryStmt => CursorKind::SEHTryStmt,
        S::SEHExceptStmt => CursorKind::SEHExceptStmt,
        S::SEHFinallyStmt => CursorKind::SEHFinallyStmt,
        S::SEHLeaveStmt => CursorKind::SEHLeaveStmt,
        S::CompoundStmt => CursorKind::CompoundStmt,
        S::NullStmt => CursorKind::NullStmt,
        S::LabelStmt => CursorKind::LabelStmt,
        S::DeclStmt => CursorKind::DeclStmt,

        S::CoroutineBodyStmt
        | S::CoreturnStmt
        | S::AttributedStmt
        | S::CapturedStmt
        | S::MSDependentExistsStmt => CursorKind::UnexposedStmt,

        // Implicit, desugared and trait-like expressions
        S::ArrayTypeTraitExpr
        | S::AsTypeExpr
        | S::AtomicExpr
        | S::BinaryConditionalOperator
        | S::TypeTraitExpr
        | S::CoawaitExpr
        | S::ConceptSpecializationExpr
        | S::RequiresExpr
        | S::DependentCoawaitExpr
        | S::CoyieldExpr
        | S::CXXBindTemporaryExpr
        | S::CXXDefaultArgExpr
        | S::CXXDefaultInitExpr
        | S::CXXFoldExpr
        | S::CXXRewrittenBinaryOperator
        | S::CXXStdInitializerListExpr
        | S::CXXScalarValueInitExpr
        | S::CXXUuidofExpr
        | S::ChooseExpr
        | S::DesignatedInitExpr
        | S::DesignatedInitUpdateExpr
        | S::ArrayInitLoopExpr
        | S::ArrayInitIndexExpr
        | S::ExprWithCleanups
        | S::ExpressionTraitExpr
        | S::ExtVectorElementExpr
        | S::ImplicitCastExpr
        | S::ImplicitValueInitExpr
        | S::NoInitExpr
        | S::MaterializeTemporaryExpr
        | S::ObjCIndirectCopyRestoreExpr
        | S::OffsetOfExpr
        | S::ParenListExpr
        | S::PredefinedExpr
        | S::ShuffleVectorExpr
        | S::SourceLocExpr
        | S::ConvertVectorExpr
        | S::VAArgExpr
        | S::ObjCArrayLiteral
        | S::ObjCDictionaryLiteral
        | S::ObjCBoxedExpr
        | S::ObjCSubscriptRefExpr
        // Reached only without a source expression; see `classify`.
        | S::OpaqueValueExpr => CursorKind::UnexposedExpr,

        // Literals
        S::IntegerLiteral => CursorKind::IntegerLiteral,
        S::FixedPointLiteral => CursorKind::FixedPointLiteral,
        S::FloatingLiteral => CursorKind::FloatingLiteral,
        S::ImaginaryLiteral => CursorKind::ImaginaryLiteral,
        S::StringLiteral => CursorKind::StringLiteral,
        S::CharacterLiteral => CursorKind::CharacterLiteral,
        S::CXXBoolLiteralExpr => CursorKind::CXXBoolLiteralExpr,
        S::CXXNullPtrLiteralExpr => CursorKind::CXXNullPtrLiteralExpr,
        S::ObjCStringLiteral => CursorKind::ObjCStringLiteral,
        S::ObjCBoolLiteralExpr => CursorKind::ObjCBoolLiteralExpr,

        // Operators
        S::ParenExpr => CursorKind::ParenExpr,
        S::UnaryOperator => CursorKind::UnaryOperator,
        S::UnaryExprOrTypeTraitExpr | S::CXXNoexceptExpr => CursorKind::UnaryExpr,
        S::MSPropertySubscriptExpr | S::ArraySubscriptExpr => CursorKind::ArraySubscriptExpr,
        S::OMPArraySectionExpr => CursorKind::OMPArraySectionExpr,
        S::BinaryOperator => CursorKind::BinaryOperator,
        S::CompoundAssignOperator => CursorKind::CompoundAssignOperator,
        S::ConditionalOperator => CursorKind::ConditionalOperator,

        // Casts
        S::CStyleCastExpr => CursorKind::CStyleCastExpr,
        S::CXXStaticCastExpr => CursorKind::CXXStaticCastExpr,
        S::CXXDynamicCastExpr => CursorKind::CXXDynamicCastExpr,
        S::CXXReinterpretCastExpr => CursorKind::CXXReinterpretCastExpr,
        S::CXXConstCastExpr => CursorKind::CXXConstCastExpr,
        S::CXXFunctionalCastExpr => CursorKind::CXXFunctionalCastExpr,
        S::ObjCBridgedCastExpr => CursorKind::ObjCBridgedCastExpr,
        S::BuiltinBitCastExpr => CursorKind::BuiltinBitCastExpr,

        // Other one-to-one expressions
        S::CompoundLiteralExpr => CursorKind::CompoundLiteralExpr,
        S::InitListExpr => CursorKind::InitListExpr,
        S::AddrLabelExpr => CursorKind::AddrLabelExpr,
        S::StmtExpr => CursorKind::StmtExpr,
        S::GenericSelectionExpr => CursorKind::GenericSelectionExpr,
        S::GNUNullExpr => CursorKind::GNUNullExpr,
        S::CXXTypeidExpr => CursorKind::CXXTypeidExpr,
        S::CXXThisExpr => CursorKind::CXXThisExpr,
        S::CXXThrowExpr => CursorKind::CXXThrowExpr,
        S::CXXNewExpr => CursorKind::CXXNewExpr,
        S::CXXDeleteExpr => CursorKind::CXXDeleteExpr,
        S::ObjCEncodeExpr => CursorKind::ObjCEncodeExpr,
        S::ObjCSelectorExpr => CursorKind::ObjCSelectorExpr,
        S::ObjCProtocolExpr => CursorKind::ObjCProtocolExpr,
        S::ObjCAvailabilityCheckExpr => CursorKind::ObjCAvailabilityCheckExpr,
        S::BlockExpr => CursorKind::BlockExpr,
        S::PackExpansionExpr => CursorKind::PackExpansionExpr,
        S::SizeOfPackExpr => CursorKind::SizeOfPackExpr,
        S::LambdaExpr => CursorKind::LambdaExpr,

        // Name references
        S::DeclRefExpr
        | S::DependentScopeDeclRefExpr
        | S::SubstNonTypeTemplateParmExpr
        | S::SubstNonTypeTemplateParmPackExpr
        | S::FunctionParmPackExpr
        | S::UnresolvedLookupExpr
        | S::TypoExpr => CursorKind::DeclRefExpr,

        // Member access
        S::CXXDependentScopeMemberExpr
        | S::CXXPseudoDestructorExpr
        | S::MemberExpr
        | S::MSPropertyRefExpr
        | S::ObjCIsaExpr
        | S::ObjCIvarRefExpr
        | S::ObjCPropertyRefExpr
        | S::UnresolvedMemberExpr => CursorKind::MemberRefExpr,

        // Calls
        S::CallExpr
        | S::CXXOperatorCallExpr
        | S::CXXMemberCallExpr
        | S::CUDAKernelCallExpr
        | S::CXXConstructExpr
        | S::CXXInheritedCtorInitExpr
        | S::CXXTemporaryObjectExpr
        | S::CXXUnresolvedConstructExpr
        | S::UserDefinedLiteral => CursorKind::CallExpr,
        S::ObjCMessageExpr => CursorKind::ObjCMessageExpr,

        // OpenMP directives
        S::OMPParallelDirective => CursorKind::OMPParallelDirective,
        S::OMPSimdDirective => CursorKind::OMPSimdDirective,
        S::OMPForDirective => CursorKind::OMPForDirective,
        S::OMPForSimdDirective => CursorKind::OMPForSimdDirective,
        S::OMPSectionsDirective => CursorKind::OMPSectionsDirective,
        S::OMPSectionDirective => CursorKind::OMPSectionDirective,
        S::OMPSingleDirective => CursorKind::OMPSingleDirective,
        S::OMPMasterDirective => CursorKind::OMPMasterDirective,
        S::OMPCriticalDirective => CursorKind::OMPCriticalDirective,
        S::OMPParallelForDirective => CursorKind::OMPParallelForDirective,
        S::OMPParallelForSimdDirective => CursorKind::OMPParallelForSimdDirective,
        S::OMPParallelMasterDirective => CursorKind::OMPParallelMasterDirective,
        S::OMPParallelSectionsDirective => CursorKind::OMPParallelSectionsDirective,
        S::OMPTaskDirective => CursorKind::OMPTaskDirective,
        S::OMPTaskyieldDirective => CursorKind::OMPTaskyieldDirective,
        S::OMPBarrierDirective => CursorKind::OMPBarrierDirective,
        S::OMPTaskwaitDirective => CursorKind::OMPTaskwaitDirective,
        S::OMPTaskgroupDirective => CursorKind::OMPTaskgroupDirective,
        S::OMPFlushDirective => CursorKind::OMPFlushDirective,
        S::OMPOrderedDirective => CursorKind::OMPOrderedDirective,
        S::OMPAtomicDirective => CursorKind::OMPAtomicDirective,
        S::OMPTargetDirective => CursorKind::OMPTargetDirective,
        S::OMPTargetDataDirective => CursorKind::OMPTargetDataDirective,
        S::OMPTargetEnterDataDirective => CursorKind::OMPTargetEnterDataDirective,
        S::OMPTargetExitDataDirective => CursorKind::OMPTargetExitDataDirective,
        S::OMPTargetParallelDirective => CursorKind::OMPTargetParallelDirective,
        S::OMPTargetParallelForDirective => CursorKind::OMPTargetParallelForDirective,
        S::OMPTargetUpdateDirective => CursorKind::OMPTargetUpdateDirective,
        S::OMPTeamsDirective => CursorKind::OMPTeamsDirective,
        S::OMPCancellationPointDirective => CursorKind::OMPCancellationPointDirective,
        S::OMPCancelDirective => CursorKind::OMPCancelDirective,
        S::OMPTaskLoopDirective => CursorKind::OMPTaskLoopDirective,
        S::OMPTaskLoopSimdDirective => CursorKind::OMPTaskLoopSimdDirective,
        S::OMPMasterTaskLoopDirective => CursorKind::OMPMasterTaskLoopDirective,
        S::OMPMasterTaskLoopSimdDirective => CursorKind::OMPMasterTaskLoopSimdDirective,
        S::OMPParallelMasterTaskLoopDirective => CursorKind::OMPParallelMasterTaskLoopDirective,
        S::OMPParallelMasterTaskLoopSimdDirective => {
            CursorKind::OMPParallelMasterTaskLoopSimdDirective
        }
        S::OMPDistributeDirective => CursorKind::OMPDistributeDirective,
        S::OMPDistributeParallelForDirective => CursorKind::OMPDistributeParallelForDirective,
        S::OMPDistributeParallelForSimdDirective => {
            CursorKind::OMPDistributeParallelForSimdDirective
        }
        S::OMPDistributeSimdDirective => CursorKind::OMPDistributeSimdDirective,
        S::OMPTargetParallelForSimdDirective => CursorKind::OMPTargetParallelForSimdDirective,
        S::OMPTargetSimdDirective => CursorKind::OMPTargetSimdDirective,
        S::OMPTeamsDistributeDirective => CursorKind::OMPTeamsDistributeDirective,
        S::OMPTeamsDistributeSimdDirective => CursorKind::OMPTeamsDistributeSimdDirective,
        S::OMPTeamsDistributeParallelForSimdDirective => {
            CursorKind::OMPTeamsDistributeParallelForSimdDirective
        }
        S::OMPTeamsDistributeParallelForDirective => {
            CursorKind::OMPTeamsDistributeParallelForDirective
        }
        S::OMPTargetTeamsDirective => CursorKind::OMPTargetTeamsDirective,
        S::OMPTargetTeamsDistributeDirective => CursorKind::OMPTargetTeamsDistributeDirective,
        S::OMPTargetTeamsDistributeParallelForDirective => {
            CursorKind::OMPTargetTeamsDistributeParallelForDirective
        }
        S::OMPTargetTeamsDistributeParallelForSimdDirective => {
            CursorKind::OMPTargetTeamsDistributeParallelForSimdDirective
        }
        S::OMPTargetTeamsDistributeSimdDirective => {
            CursorKind::OMPTargetTeamsDistributeSimdDirective
        }

        // NoStmt, and classes newer than this table
        other => {
            debug!(class = %other, "no cursor kind for node class");
            CursorKind::NotImplemented
        }
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// The kind for a declaration.
pub fn kind_for_decl(kind: &DeclKind) -> CursorKind {
    match kind {
        DeclKind::Unexposed | DeclKind::ImplicitParam => CursorKind::UnexposedDecl,
        DeclKind::Struct => CursorKind::StructDecl,
        DeclKind::Union => CursorKind::UnionDecl,
        DeclKind::Class => CursorKind::ClassDecl,
        DeclKind::Enum => CursorKind::EnumDecl,
        DeclKind::Field => CursorKind::FieldDecl,
        DeclKind::EnumConstant => CursorKind::EnumConstantDecl,
        DeclKind::Function => CursorKind::FunctionDecl,
        DeclKind::Var => CursorKind::VarDecl,
        DeclKind::Parm => CursorKind::ParmDecl,
        DeclKind::Typedef => CursorKind::TypedefDecl,
        DeclKind::TypeAlias => CursorKind::TypeAliasDecl,
        DeclKind::Namespace => CursorKind::Namespace,
        DeclKind::CxxMethod => CursorKind::CXXMethod,
        DeclKind::Constructor => CursorKind::Constructor,
        DeclKind::Destructor => CursorKind::Destructor,
        DeclKind::ObjCInterface => CursorKind::ObjCInterfaceDecl,
        DeclKind::ObjCProtocol => CursorKind::ObjCProtocolDecl,
        DeclKind::ObjCIvar => CursorKind::ObjCIvarDecl,
        DeclKind::ObjCProperty => CursorKind::ObjCPropertyDecl,
        DeclKind::ObjCMethod(method) if method.is_instance => CursorKind::ObjCInstanceMethodDecl,
        DeclKind::ObjCMethod(_) => CursorKind::ObjCClassMethodDecl,
    }
}

impl<'tu> Cursor<'tu> {
    /// A cursor for a declaration. Objective-C methods record the selector
    /// fragment under a point `region`.
    pub fn for_decl(
        decl: &'tu Decl,
        tu: &'tu TranslationUnit,
        region: Option<SourceRange>,
    ) -> Self {
        let cursor = Cursor::from_decl(kind_for_decl(&decl.kind), decl, tu);
        match decl.kind.as_objc_method() {
            Some(method) => {
                cursor.with_selector_index(index_selector(&method.selector_locs, region))
            }
            None => cursor,
        }
    }
}
