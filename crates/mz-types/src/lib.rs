//! Structured M type descriptors and the canonical type-name renderer.
//!
//! Downstream analyzers describe M types with the descriptor model in this
//! crate; [`name_of`] renders a descriptor back to its canonical surface
//! form (`"nullable number"`, `"type table [bar: text, ...]"`, ...). The
//! renderer is total, pure and deterministic — one stable public contract
//! the rest of the system exposes.

mod name_of;

pub use name_of::name_of;

use serde::{Deserialize, Serialize};

/// The closed set of M primitive type kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveTypeKind {
    Action,
    Any,
    AnyNonNull,
    Binary,
    Date,
    DateTime,
    DateTimeZone,
    Duration,
    Function,
    List,
    Logical,
    None,
    NotApplicable,
    Null,
    Number,
    Record,
    Table,
    Text,
    Time,
    Type,
    Unknown,
}

impl PrimitiveTypeKind {
    /// The literal surface word for this kind.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveTypeKind::Action => "action",
            PrimitiveTypeKind::Any => "any",
            PrimitiveTypeKind::AnyNonNull => "anynonnull",
            PrimitiveTypeKind::Binary => "binary",
            PrimitiveTypeKind::Date => "date",
            PrimitiveTypeKind::DateTime => "datetime",
            PrimitiveTypeKind::DateTimeZone => "datetimezone",
            PrimitiveTypeKind::Duration => "duration",
            PrimitiveTypeKind::Function => "function",
            PrimitiveTypeKind::List => "list",
            PrimitiveTypeKind::Logical => "logical",
            PrimitiveTypeKind::None => "none",
            PrimitiveTypeKind::NotApplicable => "not applicable",
            PrimitiveTypeKind::Null => "null",
            PrimitiveTypeKind::Number => "number",
            PrimitiveTypeKind::Record => "record",
            PrimitiveTypeKind::Table => "table",
            PrimitiveTypeKind::Text => "text",
            PrimitiveTypeKind::Time => "time",
            PrimitiveTypeKind::Type => "type",
            PrimitiveTypeKind::Unknown => "unknown",
        }
    }
}

/// A structured M type descriptor.
///
/// Every type carries a nullable flag; `anynonnull` is the one primitive
/// that can never be nullable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub is_nullable: bool,
    pub variant: TypeVariant,
}

impl Type {
    pub fn new(is_nullable: bool, variant: TypeVariant) -> Self {
        debug_assert!(
            !(is_nullable
                && matches!(
                    variant,
                    TypeVariant::Primitive(PrimitiveTypeKind::AnyNonNull)
                )),
            "anynonnull is never nullable"
        );
        Type {
            is_nullable,
            variant,
        }
    }

    /// A non-nullable primitive.
    pub fn primitive(kind: PrimitiveTypeKind) -> Self {
        Type::new(false, TypeVariant::Primitive(kind))
    }

    /// A nullable primitive.
    pub fn nullable_primitive(kind: PrimitiveTypeKind) -> Self {
        Type::new(true, TypeVariant::Primitive(kind))
    }
}

/// The descriptor variants the renderer accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeVariant {
    Primitive(PrimitiveTypeKind),
    /// Union of member descriptors, in declared order.
    AnyUnion(Vec<Type>),
    /// A list whose element types are known positionally: `{T1, T2}`.
    DefinedList(Vec<Type>),
    /// The type of a defined list: `type {T1, T2}`.
    DefinedListType(Vec<Type>),
    /// A homogeneous list type: `type {E}`.
    ListType(Box<Type>),
    /// A record with known fields; open records admit further fields.
    DefinedRecord {
        fields: Vec<RecordField>,
        is_open: bool,
    },
    /// The type of a defined record: `type [...]`.
    RecordType {
        fields: Vec<RecordField>,
        is_open: bool,
    },
    /// A table value with known columns: `table [...]`.
    DefinedTable {
        fields: Vec<RecordField>,
        is_open: bool,
    },
    /// The type of a table: `type table [...]`.
    TableType {
        fields: Vec<RecordField>,
        is_open: bool,
    },
    /// A table type given by a primary expression: `type table <primary>`.
    TableTypePrimaryExpression(Box<Type>),
    /// A primitive used in type position: `type number`.
    PrimaryPrimitiveType(PrimitiveTypeKind),
    /// A function value with a known signature: `(params) => ret`.
    DefinedFunction {
        parameters: Vec<FunctionParameter>,
        return_type: Box<Type>,
    },
    /// The type of a function: `type function (params) ret`.
    FunctionType {
        parameters: Vec<FunctionParameter>,
        return_type: Box<Type>,
    },
}

/// A named record or table field. Fields render in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordField {
    pub name: String,
    pub field_type: Type,
}

impl RecordField {
    pub fn new(name: impl Into<String>, field_type: Type) -> Self {
        RecordField {
            name: name.into(),
            field_type,
        }
    }
}

/// A function parameter. The `optional` marker precedes `nullable` when
/// both are present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionParameter {
    pub name: String,
    pub is_optional: bool,
    pub is_nullable: bool,
    pub parameter_type: Option<PrimitiveTypeKind>,
}

impl FunctionParameter {
    pub fn required(name: impl Into<String>, parameter_type: PrimitiveTypeKind) -> Self {
        FunctionParameter {
            name: name.into(),
            is_optional: false,
            is_nullable: false,
            parameter_type: Some(parameter_type),
        }
    }
}
