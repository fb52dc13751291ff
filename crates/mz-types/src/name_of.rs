//! Canonical type-name rendering.
//!
//! One public entry point, one private helper per descriptor family.

use crate::{FunctionParameter, PrimitiveTypeKind, RecordField, Type, TypeVariant};

/// Render a type descriptor to its canonical M surface form.
pub fn name_of(ty: &Type) -> String {
    let rendered = name_of_variant(&ty.variant);
    let never_nullable = matches!(
        ty.variant,
        TypeVariant::Primitive(PrimitiveTypeKind::AnyNonNull)
    );
    if ty.is_nullable && !never_nullable {
        format!("nullable {rendered}")
    } else {
        rendered
    }
}

fn name_of_variant(variant: &TypeVariant) -> String {
    match variant {
        TypeVariant::Primitive(kind) => kind.keyword().to_string(),
        TypeVariant::AnyUnion(members) => members
            .iter()
            .map(name_of)
            .collect::<Vec<_>>()
            .join(" | "),
        TypeVariant::DefinedList(elements) => format!("{{{}}}", comma_joined(elements)),
        TypeVariant::DefinedListType(elements) => {
            format!("type {{{}}}", comma_joined(elements))
        }
        TypeVariant::ListType(item_type) => format!("type {{{}}}", name_of(item_type)),
        TypeVariant::DefinedRecord { fields, is_open } => bracket_group(fields, *is_open),
        TypeVariant::RecordType { fields, is_open } => {
            format!("type {}", bracket_group(fields, *is_open))
        }
        TypeVariant::DefinedTable { fields, is_open } => {
            format!("table {}", bracket_group(fields, *is_open))
        }
        TypeVariant::TableType { fields, is_open } => {
            format!("type table {}", bracket_group(fields, *is_open))
        }
        TypeVariant::TableTypePrimaryExpression(primary) => {
            format!("type table {}", name_of(primary))
        }
        TypeVariant::PrimaryPrimitiveType(kind) => format!("type {}", kind.keyword()),
        TypeVariant::DefinedFunction {
            parameters,
            return_type,
        } => format!(
            "({}) => {}",
            parameter_group(parameters),
            name_of(return_type)
        ),
        TypeVariant::FunctionType {
            parameters,
            return_type,
        } => format!(
            "type function ({}) {}",
            parameter_group(parameters),
            name_of(return_type)
        ),
    }
}

fn comma_joined(types: &[Type]) -> String {
    types.iter().map(name_of).collect::<Vec<_>>().join(", ")
}

/// `[]`, `[...]`, `[k: T]`, or `[k: T, ...]` — fields in insertion order,
/// trailing ellipsis when the group is open.
fn bracket_group(fields: &[RecordField], is_open: bool) -> String {
    if fields.is_empty() {
        return if is_open { "[...]" } else { "[]" }.to_string();
    }
    let rendered = fields
        .iter()
        .map(|field| format!("{}: {}", field.name, name_of(&field.field_type)))
        .collect::<Vec<_>>()
        .join(", ");
    if is_open {
        format!("[{rendered}, ...]")
    } else {
        format!("[{rendered}]")
    }
}

fn parameter_group(parameters: &[FunctionParameter]) -> String {
    parameters
        .iter()
        .map(name_of_parameter)
        .collect::<Vec<_>>()
        .join(", ")
}

fn name_of_parameter(parameter: &FunctionParameter) -> String {
    let mut rendered = format!("{}:", parameter.name);
    if parameter.is_optional {
        rendered.push_str(" optional");
    }
    if parameter.is_nullable {
        rendered.push_str(" nullable");
    }
    if let Some(kind) = parameter.parameter_type {
        rendered.push(' ');
        rendered.push_str(kind.keyword());
    }
    rendered
}
