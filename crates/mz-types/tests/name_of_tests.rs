//! Rendering contracts for the canonical type-name renderer.

use mz_types::{
    name_of, FunctionParameter, PrimitiveTypeKind, RecordField, Type, TypeVariant,
};

fn number() -> Type {
    Type::primitive(PrimitiveTypeKind::Number)
}

fn text() -> Type {
    Type::primitive(PrimitiveTypeKind::Text)
}

// =========================================================================
// Primitives and nullable wrapping
// =========================================================================

#[test]
fn primitives_render_as_their_keyword() {
    assert_eq!(name_of(&number()), "number");
    assert_eq!(name_of(&Type::primitive(PrimitiveTypeKind::AnyNonNull)), "anynonnull");
    assert_eq!(
        name_of(&Type::primitive(PrimitiveTypeKind::DateTimeZone)),
        "datetimezone"
    );
    assert_eq!(
        name_of(&Type::primitive(PrimitiveTypeKind::NotApplicable)),
        "not applicable"
    );
}

#[test]
fn nullable_prefixes_the_underlying_form() {
    assert_eq!(
        name_of(&Type::nullable_primitive(PrimitiveTypeKind::Number)),
        "nullable number"
    );
    assert_eq!(
        name_of(&Type::new(
            true,
            TypeVariant::DefinedList(vec![number()])
        )),
        "nullable {number}"
    );
}

// =========================================================================
// Lists
// =========================================================================

#[test]
fn defined_list_renders_members_in_braces() {
    let ty = Type::new(false, TypeVariant::DefinedList(vec![number(), text()]));
    assert_eq!(name_of(&ty), "{number, text}");

    let empty = Type::new(false, TypeVariant::DefinedList(vec![]));
    assert_eq!(name_of(&empty), "{}");
}

#[test]
fn defined_list_type_takes_a_type_prefix() {
    let ty = Type::new(false, TypeVariant::DefinedListType(vec![number(), text()]));
    assert_eq!(name_of(&ty), "type {number, text}");
}

#[test]
fn list_type_wraps_its_element() {
    let ty = Type::new(
        false,
        TypeVariant::ListType(Box::new(Type::nullable_primitive(PrimitiveTypeKind::Text))),
    );
    assert_eq!(name_of(&ty), "type {nullable text}");
}

// =========================================================================
// Records and tables
// =========================================================================

#[test]
fn defined_record_renders_fields_in_insertion_order() {
    let ty = Type::new(
        false,
        TypeVariant::DefinedRecord {
            fields: vec![
                RecordField::new("b", number()),
                RecordField::new("a", text()),
            ],
            is_open: false,
        },
    );
    assert_eq!(name_of(&ty), "[b: number, a: text]");
}

#[test]
fn open_record_carries_a_trailing_ellipsis() {
    let ty = Type::new(
        false,
        TypeVariant::DefinedRecord {
            fields: vec![RecordField::new("foo", number())],
            is_open: true,
        },
    );
    assert_eq!(name_of(&ty), "[foo: number, ...]");
}

#[test]
fn empty_records_render_closed_and_open_forms() {
    let closed = Type::new(
        false,
        TypeVariant::DefinedRecord {
            fields: vec![],
            is_open: false,
        },
    );
    let open = Type::new(
        false,
        TypeVariant::DefinedRecord {
            fields: vec![],
            is_open: true,
        },
    );
    assert_eq!(name_of(&closed), "[]");
    assert_eq!(name_of(&open), "[...]");
}

#[test]
fn record_and_table_prefixes() {
    let fields = vec![RecordField::new("bar", text())];
    let record_type = Type::new(
        false,
        TypeVariant::RecordType {
            fields: fields.clone(),
            is_open: false,
        },
    );
    assert_eq!(name_of(&record_type), "type [bar: text]");

    let table = Type::new(
        false,
        TypeVariant::DefinedTable {
            fields: fields.clone(),
            is_open: false,
        },
    );
    assert_eq!(name_of(&table), "table [bar: text]");

    let table_type = Type::new(
        false,
        TypeVariant::TableType {
            fields,
            is_open: true,
        },
    );
    assert_eq!(name_of(&table_type), "type table [bar: text, ...]");
}

#[test]
fn table_type_over_a_primary_expression() {
    let ty = Type::new(
        false,
        TypeVariant::TableTypePrimaryExpression(Box::new(Type::primitive(
            PrimitiveTypeKind::Record,
        ))),
    );
    assert_eq!(name_of(&ty), "type table record");
}

#[test]
fn primary_primitive_type_takes_a_type_prefix() {
    let ty = Type::new(
        false,
        TypeVariant::PrimaryPrimitiveType(PrimitiveTypeKind::Number),
    );
    assert_eq!(name_of(&ty), "type number");
}

// =========================================================================
// S5 - complex union
// =========================================================================

#[test]
fn union_joins_member_renderings_in_declared_order() {
    let ty = Type::new(
        false,
        TypeVariant::AnyUnion(vec![
            Type::new(
                false,
                TypeVariant::DefinedRecord {
                    fields: vec![RecordField::new("foo", number())],
                    is_open: false,
                },
            ),
            Type::new(false, TypeVariant::DefinedList(vec![text()])),
            Type::new(
                false,
                TypeVariant::DefinedTable {
                    fields: vec![RecordField::new("bar", text())],
                    is_open: true,
                },
            ),
        ]),
    );
    assert_eq!(
        name_of(&ty),
        "[foo: number] | {text} | table [bar: text, ...]"
    );
}

// =========================================================================
// S6 - functions
// =========================================================================

#[test]
fn function_parameters_render_all_flavors() {
    let parameters = vec![
        FunctionParameter::required("param1", PrimitiveTypeKind::Number),
        FunctionParameter {
            name: "param2".to_string(),
            is_optional: false,
            is_nullable: true,
            parameter_type: Some(PrimitiveTypeKind::Number),
        },
        FunctionParameter {
            name: "param3".to_string(),
            is_optional: true,
            is_nullable: false,
            parameter_type: Some(PrimitiveTypeKind::Number),
        },
        FunctionParameter {
            name: "param4".to_string(),
            is_optional: true,
            is_nullable: true,
            parameter_type: Some(PrimitiveTypeKind::Number),
        },
    ];
    let ty = Type::new(
        false,
        TypeVariant::DefinedFunction {
            parameters,
            return_type: Box::new(Type::primitive(PrimitiveTypeKind::Any)),
        },
    );
    assert_eq!(
        name_of(&ty),
        "(param1: number, param2: nullable number, param3: optional number, \
         param4: optional nullable number) => any"
    );
}

#[test]
fn function_type_renders_without_an_arrow() {
    let ty = Type::new(
        false,
        TypeVariant::FunctionType {
            parameters: vec![FunctionParameter::required("x", PrimitiveTypeKind::Text)],
            return_type: Box::new(Type::nullable_primitive(PrimitiveTypeKind::Logical)),
        },
    );
    assert_eq!(name_of(&ty), "type function (x: text) nullable logical");
}

#[test]
fn parameter_without_a_type_renders_bare() {
    let ty = Type::new(
        false,
        TypeVariant::DefinedFunction {
            parameters: vec![FunctionParameter {
                name: "x".to_string(),
                is_optional: true,
                is_nullable: false,
                parameter_type: None,
            }],
            return_type: Box::new(Type::primitive(PrimitiveTypeKind::Any)),
        },
    );
    assert_eq!(name_of(&ty), "(x: optional) => any");
}

// =========================================================================
// Determinism
// =========================================================================

#[test]
fn rendering_is_deterministic() {
    let ty = Type::new(
        true,
        TypeVariant::AnyUnion(vec![
            Type::new(
                false,
                TypeVariant::RecordType {
                    fields: vec![RecordField::new("a", number())],
                    is_open: true,
                },
            ),
            Type::new(
                false,
                TypeVariant::ListType(Box::new(Type::primitive(PrimitiveTypeKind::Any))),
            ),
        ]),
    );
    assert_eq!(name_of(&ty), name_of(&ty));
    assert_eq!(name_of(&ty), "nullable type [a: number, ...] | type {any}");
}
