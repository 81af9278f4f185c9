// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The closed enumeration of cursor kinds.
//!
//! Every cursor handed across the boundary carries exactly one [`CursorKind`].
//! The numeric value of each kind is part of the external contract: values are
//! only ever added, never renumbered, and the payload interpretation attached
//! to a kind never changes once assigned.
//!
//! # Ranges
//!
//! | Category | Range |
//! |----------|-------|
//! | Declarations | 1-39, 600-603 |
//! | References | 40-50 |
//! | Invalid | 70-73 |
//! | Expressions | 100-149 |
//! | Statements | 200-285 |
//! | Translation unit | 300 |
//! | Attributes | 400-441 |
//! | Preprocessing | 500-503 |
//! | Overload candidate | 700 |
//!
//! `BuiltinBitCastExpr` lives in the statement range (280) even though it is
//! an expression; it was added after the expression range was frozen.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! cursor_kinds {
    ($( $(#[$meta:meta])* $name:ident = $value:literal, )*) => {
        /// A stable cursor classification tag.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(i32)]
        pub enum CursorKind {
            $( $(#[$meta])* $name = $value, )*
        }

        impl CursorKind {
            /// Every kind, in ascending numeric order.
            pub const ALL: &'static [CursorKind] = &[ $( CursorKind::$name, )* ];

            /// Look up a kind by its stable numeric value.
            pub fn from_raw(raw: i32) -> Option<CursorKind> {
                match raw {
                    $( $value => Some(CursorKind::$name), )*
                    _ => None,
                }
            }

            /// The kind's name, e.g. `"BinaryOperator"`.
            pub fn spelling(self) -> &'static str {
                match self {
                    $( CursorKind::$name => stringify!($name), )*
                }
            }
        }
    };
}

cursor_kinds! {
    // ========================================================================
    // Declarations
    // ========================================================================
    /// A declaration whose specific kind is not exposed.
    UnexposedDecl = 1,
    StructDecl = 2,
    UnionDecl = 3,
    ClassDecl = 4,
    EnumDecl = 5,
    FieldDecl = 6,
    EnumConstantDecl = 7,
    FunctionDecl = 8,
    VarDecl = 9,
    ParmDecl = 10,
    ObjCInterfaceDecl = 11,
    ObjCCategoryDecl = 12,
    ObjCProtocolDecl = 13,
    ObjCPropertyDecl = 14,
    ObjCIvarDecl = 15,
    /// An Objective-C instance method; carries a selector index.
    ObjCInstanceMethodDecl = 16,
    /// An Objective-C class method; carries a selector index.
    ObjCClassMethodDecl = 17,
    ObjCImplementationDecl = 18,
    ObjCCategoryImplDecl = 19,
    TypedefDecl = 20,
    CXXMethod = 21,
    Namespace = 22,
    LinkageSpec = 23,
    Constructor = 24,
    Destructor = 25,
    ConversionFunction = 26,
    TemplateTypeParameter = 27,
    NonTypeTemplateParameter = 28,
    TemplateTemplateParameter = 29,
    FunctionTemplate = 30,
    ClassTemplate = 31,
    ClassTemplatePartialSpecialization = 32,
    NamespaceAlias = 33,
    UsingDirective = 34,
    UsingDeclaration = 35,
    TypeAliasDecl = 36,
    ObjCSynthesizeDecl = 37,
    ObjCDynamicDecl = 38,
    CXXAccessSpecifier = 39,

    // ========================================================================
    // References
    // ========================================================================
    ObjCSuperClassRef = 40,
    ObjCProtocolRef = 41,
    ObjCClassRef = 42,
    TypeRef = 43,
    CXXBaseSpecifier = 44,
    TemplateRef = 45,
    NamespaceRef = 46,
    MemberRef = 47,
    LabelRef = 48,
    OverloadedDeclRef = 49,
    VariableRef = 50,

    // ========================================================================
    // Invalid
    // ========================================================================
    InvalidFile = 70,
    /// The requested part of a construct is not present.
    NoDeclFound = 71,
    /// The node has no cursor kind of its own.
    NotImplemented = 72,
    /// The cursor was the wrong kind for the requested operation.
    InvalidCode = 73,

    // ========================================================================
    // Expressions
    // ========================================================================
    /// An expression whose specific kind is not exposed.
    UnexposedExpr = 100,
    DeclRefExpr = 101,
    MemberRefExpr = 102,
    CallExpr = 103,
    /// An Objective-C message send; carries a selector index.
    ObjCMessageExpr = 104,
    BlockExpr = 105,
    IntegerLiteral = 106,
    FloatingLiteral = 107,
    ImaginaryLiteral = 108,
    StringLiteral = 109,
    CharacterLiteral = 110,
    ParenExpr = 111,
    UnaryOperator = 112,
    ArraySubscriptExpr = 113,
    BinaryOperator = 114,
    CompoundAssignOperator = 115,
    ConditionalOperator = 116,
    CStyleCastExpr = 117,
    CompoundLiteralExpr = 118,
    InitListExpr = 119,
    AddrLabelExpr = 120,
    StmtExpr = 121,
    GenericSelectionExpr = 122,
    GNUNullExpr = 123,
    CXXStaticCastExpr = 124,
    CXXDynamicCastExpr = 125,
    CXXReinterpretCastExpr = 126,
    CXXConstCastExpr = 127,
    CXXFunctionalCastExpr = 128,
    CXXTypeidExpr = 129,
    CXXBoolLiteralExpr = 130,
    CXXNullPtrLiteralExpr = 131,
    CXXThisExpr = 132,
    CXXThrowExpr = 133,
    CXXNewExpr = 134,
    CXXDeleteExpr = 135,
    UnaryExpr = 136,
    ObjCStringLiteral = 137,
    ObjCEncodeExpr = 138,
    ObjCSelectorExpr = 139,
    ObjCProtocolExpr = 140,
    ObjCBridgedCastExpr = 141,
    PackExpansionExpr = 142,
    SizeOfPackExpr = 143,
    LambdaExpr = 144,
    ObjCBoolLiteralExpr = 145,
    /// A reference to the implicit `self` parameter of an Objective-C method.
    ObjCSelfExpr = 146,
    OMPArraySectionExpr = 147,
    ObjCAvailabilityCheckExpr = 148,
    FixedPointLiteral = 149,

    // ========================================================================
    // Statements
    // ========================================================================
    /// A statement whose specific kind is not exposed.
    UnexposedStmt = 200,
    LabelStmt = 201,
    CompoundStmt = 202,
    CaseStmt = 203,
    DefaultStmt = 204,
    IfStmt = 205,
    SwitchStmt = 206,
    WhileStmt = 207,
    DoStmt = 208,
    /// The three-clause `for` loop.
    ForStmt = 209,
    GotoStmt = 210,
    IndirectGotoStmt = 211,
    ContinueStmt = 212,
    BreakStmt = 213,
    ReturnStmt = 214,
    GCCAsmStmt = 215,
    ObjCAtTryStmt = 216,
    ObjCAtCatchStmt = 217,
    ObjCAtFinallyStmt = 218,
    ObjCAtThrowStmt = 219,
    ObjCAtSynchronizedStmt = 220,
    ObjCAutoreleasePoolStmt = 221,
    ObjCForCollectionStmt = 222,
    CXXCatchStmt = 223,
    CXXTryStmt = 224,
    CXXForRangeStmt = 225,
    SEHTryStmt = 226,
    SEHExceptStmt = 227,
    SEHFinallyStmt = 228,
    MSAsmStmt = 229,
    NullStmt = 230,
    DeclStmt = 231,
    OMPParallelDirective = 232,
    OMPSimdDirective = 233,
    OMPForDirective = 234,
    OMPSectionsDirective = 235,
    OMPSectionDirective = 236,
    OMPSingleDirective = 237,
    OMPParallelForDirective = 238,
    OMPParallelSectionsDirective = 239,
    OMPTaskDirective = 240,
    OMPMasterDirective = 241,
    OMPCriticalDirective = 242,
    OMPTaskyieldDirective = 243,
    OMPBarrierDirective = 244,
    OMPTaskwaitDirective = 245,
    OMPFlushDirective = 246,
    SEHLeaveStmt = 247,
    OMPOrderedDirective = 248,
    OMPAtomicDirective = 249,
    OMPForSimdDirective = 250,
    OMPParallelForSimdDirective = 251,
    OMPTargetDirective = 252,
    OMPTeamsDirective = 253,
    OMPTaskgroupDirective = 254,
    OMPCancellationPointDirective = 255,
    OMPCancelDirective = 256,
    OMPTargetDataDirective = 257,
    OMPTaskLoopDirective = 258,
    OMPTaskLoopSimdDirective = 259,
    OMPDistributeDirective = 260,
    OMPTargetEnterDataDirective = 261,
    OMPTargetExitDataDirective = 262,
    OMPTargetParallelDirective = 263,
    OMPTargetParallelForDirective = 264,
    OMPTargetUpdateDirective = 265,
    OMPDistributeParallelForDirective = 266,
    OMPDistributeParallelForSimdDirective = 267,
    OMPDistributeSimdDirective = 268,
    OMPTargetParallelForSimdDirective = 269,
    OMPTargetSimdDirective = 270,
    OMPTeamsDistributeDirective = 271,
    OMPTeamsDistributeSimdDirective = 272,
    OMPTeamsDistributeParallelForSimdDirective = 273,
    OMPTeamsDistributeParallelForDirective = 274,
    OMPTargetTeamsDirective = 275,
    OMPTargetTeamsDistributeDirective = 276,
    OMPTargetTeamsDistributeParallelForDirective = 277,
    OMPTargetTeamsDistributeParallelForSimdDirective = 278,
    OMPTargetTeamsDistributeSimdDirective = 279,
    BuiltinBitCastExpr = 280,
    OMPMasterTaskLoopDirective = 281,
    OMPParallelMasterTaskLoopDirective = 282,
    OMPMasterTaskLoopSimdDirective = 283,
    OMPParallelMasterTaskLoopSimdDirective = 284,
    OMPParallelMasterDirective = 285,

    // ========================================================================
    // Translation unit
    // ========================================================================
    TranslationUnit = 300,

    // ========================================================================
    // Attributes
    // ========================================================================
    UnexposedAttr = 400,
    IBActionAttr = 401,
    IBOutletAttr = 402,
    IBOutletCollectionAttr = 403,
    CXXFinalAttr = 404,
    CXXOverrideAttr = 405,
    AnnotateAttr = 406,
    AsmLabelAttr = 407,
    PackedAttr = 408,
    PureAttr = 409,
    ConstAttr = 410,
    NoDuplicateAttr = 411,
    CUDAConstantAttr = 412,
    CUDADeviceAttr = 413,
    CUDAGlobalAttr = 414,
    CUDAHostAttr = 415,
    CUDASharedAttr = 416,
    VisibilityAttr = 417,
    DLLExport = 418,
    DLLImport = 419,
    NSReturnsRetained = 420,
    NSReturnsNotRetained = 421,
    NSReturnsAutoreleased = 422,
    NSConsumesSelf = 423,
    NSConsumed = 424,
    ObjCException = 425,
    ObjCNSObject = 426,
    ObjCIndependentClass = 427,
    ObjCPreciseLifetime = 428,
    ObjCReturnsInnerPointer = 429,
    ObjCRequiresSuper = 430,
    ObjCRootClass = 431,
    ObjCSubclassingRestricted = 432,
    ObjCExplicitProtocolImpl = 433,
    ObjCDesignatedInitializer = 434,
    ObjCRuntimeVisible = 435,
    ObjCBoxable = 436,
    FlagEnum = 437,
    ConvergentAttr = 438,
    WarnUnusedAttr = 439,
    WarnUnusedResultAttr = 440,
    AlignedAttr = 441,

    // ========================================================================
    // Preprocessing
    // ========================================================================
    PreprocessingDirective = 500,
    MacroDefinition = 501,
    MacroExpansion = 502,
    InclusionDirective = 503,

    // ========================================================================
    // Extra declarations
    // ========================================================================
    ModuleImportDecl = 600,
    TypeAliasTemplateDecl = 601,
    StaticAssert = 602,
    FriendDecl = 603,

    OverloadCandidate = 700,
}

impl CursorKind {
    /// The stable numeric value of this kind.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Declarations, including the extra-declaration range.
    pub fn is_declaration(self) -> bool {
        matches!(self.as_raw(), 1..=39 | 600..=603)
    }

    pub fn is_reference(self) -> bool {
        matches!(self.as_raw(), 40..=50)
    }

    /// Sentinel kinds: the cursor refers to no node.
    pub fn is_invalid(self) -> bool {
        matches!(self.as_raw(), 70..=73)
    }

    pub fn is_expression(self) -> bool {
        matches!(self.as_raw(), 100..=149)
    }

    pub fn is_statement(self) -> bool {
        matches!(self.as_raw(), 200..=285)
    }

    pub fn is_translation_unit(self) -> bool {
        self == CursorKind::TranslationUnit
    }

    pub fn is_attribute(self) -> bool {
        matches!(self.as_raw(), 400..=441)
    }

    pub fn is_preprocessing(self) -> bool {
        matches!(self.as_raw(), 500..=503)
    }

    /// Kinds used for nodes whose specific kind is hidden from consumers.
    pub fn is_unexposed(self) -> bool {
        matches!(
            self,
            CursorKind::UnexposedDecl
                | CursorKind::UnexposedExpr
                | CursorKind::UnexposedStmt
                | CursorKind::UnexposedAttr
        )
    }

    /// Kinds whose cursor payload references a statement or expression node.
    pub fn has_stmt_payload(self) -> bool {
        self.is_statement() || self.is_expression()
    }

    /// Kinds whose auxiliary field holds a selector index.
    pub fn carries_selector_index(self) -> bool {
        matches!(
            self,
            CursorKind::ObjCMessageExpr
                | CursorKind::ObjCInstanceMethodDecl
                | CursorKind::ObjCClassMethodDecl
        )
    }
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

impl TryFrom<i32> for CursorKind {
    type Error = i32;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        CursorKind::from_raw(raw).ok_or(raw)
    }
}
