// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Concrete node classes.
//!
//! [`StmtClass`] names every concrete statement and expression node the front
//! end can produce. The set grows from release to release, so the enum is
//! `#[non_exhaustive]`: consumers outside this crate must keep a default arm.
//! The last entries of each group are classes introduced after the cursor
//! kind table was frozen.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! stmt_classes {
    (
        statements { $( $stmt:ident, )* }
        expressions { $( $expr:ident, )* }
    ) => {
        /// A concrete statement or expression node class.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[non_exhaustive]
        pub enum StmtClass {
            $( $stmt, )*
            $( $expr, )*
        }

        impl StmtClass {
            /// Every class, statements first.
            pub const ALL: &'static [StmtClass] = &[
                $( StmtClass::$stmt, )*
                $( StmtClass::$expr, )*
            ];

            /// The class name, e.g. `"CompoundAssignOperator"`.
            pub fn name(self) -> &'static str {
                match self {
                    $( StmtClass::$stmt => stringify!($stmt), )*
                    $( StmtClass::$expr => stringify!($expr), )*
                }
            }

            /// Whether nodes of this class are expressions.
            pub fn is_expr(self) -> bool {
                match self {
                    $( StmtClass::$expr => true, )*
                    _ => false,
                }
            }
        }
    };
}

stmt_classes! {
    statements {
        NoStmt,
        GCCAsmStmt,
        MSAsmStmt,
        AttributedStmt,
        BreakStmt,
        CXXCatchStmt,
        CXXForRangeStmt,
        CXXTryStmt,
        CapturedStmt,
        CaseStmt,
        CompoundStmt,
        ContinueStmt,
        CoreturnStmt,
        CoroutineBodyStmt,
        DeclStmt,
        DefaultStmt,
        DoStmt,
        ForStmt,
        GotoStmt,
        IfStmt,
        IndirectGotoStmt,
        LabelStmt,
        MSDependentExistsStmt,
        NullStmt,
        ObjCAtCatchStmt,
        ObjCAtFinallyStmt,
        ObjCAtSynchronizedStmt,
        ObjCAtThrowStmt,
        ObjCAtTryStmt,
        ObjCAutoreleasePoolStmt,
        ObjCForCollectionStmt,
        ReturnStmt,
        SEHExceptStmt,
        SEHFinallyStmt,
        SEHLeaveStmt,
        SEHTryStmt,
        SwitchStmt,
        WhileStmt,
        OMPParallelDirective,
        OMPSimdDirective,
        OMPForDirective,
        OMPForSimdDirective,
        OMPSectionsDirective,
        OMPSectionDirective,
        OMPSingleDirective,
        OMPMasterDirective,
        OMPCriticalDirective,
        OMPParallelForDirective,
        OMPParallelForSimdDirective,
        OMPParallelMasterDirective,
        OMPParallelSectionsDirective,
        OMPTaskDirective,
        OMPTaskyieldDirective,
        OMPBarrierDirective,
        OMPTaskwaitDirective,
        OMPTaskgroupDirective,
        OMPFlushDirective,
        OMPOrderedDirective,
        OMPAtomicDirective,
        OMPTargetDirective,
        OMPTargetDataDirective,
        OMPTargetEnterDataDirective,
        OMPTargetExitDataDirective,
        OMPTargetParallelDirective,
        OMPTargetParallelForDirective,
        OMPTargetUpdateDirective,
        OMPTeamsDirective,
        OMPCancellationPointDirective,
        OMPCancelDirective,
        OMPTaskLoopDirective,
        OMPTaskLoopSimdDirective,
        OMPMasterTaskLoopDirective,
        OMPMasterTaskLoopSimdDirective,
        OMPParallelMasterTaskLoopDirective,
        OMPParallelMasterTaskLoopSimdDirective,
        OMPDistributeDirective,
        OMPDistributeParallelForDirective,
        OMPDistributeParallelForSimdDirective,
        OMPDistributeSimdDirective,
        OMPTargetParallelForSimdDirective,
        OMPTargetSimdDirective,
        OMPTeamsDistributeDirective,
        OMPTeamsDistributeSimdDirective,
        OMPTeamsDistributeParallelForSimdDirective,
        OMPTeamsDistributeParallelForDirective,
        OMPTargetTeamsDirective,
        OMPTargetTeamsDistributeDirective,
        OMPTargetTeamsDistributeParallelForDirective,
        OMPTargetTeamsDistributeParallelForSimdDirective,
        OMPTargetTeamsDistributeSimdDirective,
        OMPDepobjDirective,
        OMPScanDirective,
    }
    expressions {
        // Traits, builtins and implicit/desugared forms
        ArrayTypeTraitExpr,
        AsTypeExpr,
        AtomicExpr,
        BinaryConditionalOperator,
        TypeTraitExpr,
        CoawaitExpr,
        ConceptSpecializationExpr,
        RequiresExpr,
        DependentCoawaitExpr,
        CoyieldExpr,
        CXXBindTemporaryExpr,
        CXXDefaultArgExpr,
        CXXDefaultInitExpr,
        CXXFoldExpr,
        CXXRewrittenBinaryOperator,
        CXXStdInitializerListExpr,
        CXXScalarValueInitExpr,
        CXXUuidofExpr,
        ChooseExpr,
        DesignatedInitExpr,
        DesignatedInitUpdateExpr,
        ArrayInitLoopExpr,
        ArrayInitIndexExpr,
        ExprWithCleanups,
        ExpressionTraitExpr,
        ExtVectorElementExpr,
        ImplicitCastExpr,
        ImplicitValueInitExpr,
        NoInitExpr,
        MaterializeTemporaryExpr,
        ObjCIndirectCopyRestoreExpr,
        OffsetOfExpr,
        ParenListExpr,
        PredefinedExpr,
        ShuffleVectorExpr,
        SourceLocExpr,
        ConvertVectorExpr,
        VAArgExpr,
        ObjCArrayLiteral,
        ObjCDictionaryLiteral,
        ObjCBoxedExpr,
        ObjCSubscriptRefExpr,
        // Transparent wrappers
        OpaqueValueExpr,
        PseudoObjectExpr,
        ConstantExpr,
        // Literals
        IntegerLiteral,
        FixedPointLiteral,
        FloatingLiteral,
        ImaginaryLiteral,
        StringLiteral,
        CharacterLiteral,
        // Operators, casts and other 1:1 expressions
        ParenExpr,
        UnaryOperator,
        UnaryExprOrTypeTraitExpr,
        CXXNoexceptExpr,
        MSPropertySubscriptExpr,
        ArraySubscriptExpr,
        OMPArraySectionExpr,
        BinaryOperator,
        CompoundAssignOperator,
        ConditionalOperator,
        CStyleCastExpr,
        CompoundLiteralExpr,
        InitListExpr,
        AddrLabelExpr,
        StmtExpr,
        GenericSelectionExpr,
        GNUNullExpr,
        CXXStaticCastExpr,
        CXXDynamicCastExpr,
        CXXReinterpretCastExpr,
        CXXConstCastExpr,
        CXXFunctionalCastExpr,
        CXXTypeidExpr,
        CXXBoolLiteralExpr,
        CXXNullPtrLiteralExpr,
        CXXThisExpr,
        CXXThrowExpr,
        CXXNewExpr,
        CXXDeleteExpr,
        ObjCStringLiteral,
        ObjCEncodeExpr,
        ObjCSelectorExpr,
        ObjCProtocolExpr,
        ObjCBoolLiteralExpr,
        ObjCAvailabilityCheckExpr,
        ObjCBridgedCastExpr,
        BlockExpr,
        PackExpansionExpr,
        SizeOfPackExpr,
        LambdaExpr,
        BuiltinBitCastExpr,
        // Name references
        DeclRefExpr,
        DependentScopeDeclRefExpr,
        SubstNonTypeTemplateParmExpr,
        SubstNonTypeTemplateParmPackExpr,
        FunctionParmPackExpr,
        UnresolvedLookupExpr,
        TypoExpr,
        // Member access
        CXXDependentScopeMemberExpr,
        CXXPseudoDestructorExpr,
        MemberExpr,
        MSPropertyRefExpr,
        ObjCIsaExpr,
        ObjCIvarRefExpr,
        ObjCPropertyRefExpr,
        UnresolvedMemberExpr,
        // Calls
        CallExpr,
        CXXOperatorCallExpr,
        CXXMemberCallExpr,
        CUDAKernelCallExpr,
        CXXConstructExpr,
        CXXInheritedCtorInitExpr,
        CXXTemporaryObjectExpr,
        CXXUnresolvedConstructExpr,
        UserDefinedLiteral,
        ObjCMessageExpr,
        // Newer classes
        RecoveryExpr,
        MatrixSubscriptExpr,
        CXXAddrspaceCastExpr,
        OMPArrayShapingExpr,
        OMPIteratorExpr,
    }
}

impl StmtClass {
    /// Classes whose nodes carry a class-specific payload and therefore have a
    /// dedicated [`Node`](crate::Node) variant.
    pub fn requires_payload(self) -> bool {
        matches!(
            self,
            StmtClass::ForStmt
                | StmtClass::BinaryOperator
                | StmtClass::CompoundAssignOperator
                | StmtClass::UnaryOperator
                | StmtClass::IntegerLiteral
                | StmtClass::FloatingLiteral
                | StmtClass::CharacterLiteral
                | StmtClass::StringLiteral
                | StmtClass::CXXBoolLiteralExpr
                | StmtClass::OpaqueValueExpr
                | StmtClass::ConstantExpr
                | StmtClass::PseudoObjectExpr
                | StmtClass::DeclRefExpr
                | StmtClass::ObjCMessageExpr
        )
    }

    /// Look up a class by name.
    pub fn from_name(name: &str) -> Option<StmtClass> {
        StmtClass::ALL.iter().copied().find(|class| class.name() == name)
    }
}

impl fmt::Display for StmtClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
