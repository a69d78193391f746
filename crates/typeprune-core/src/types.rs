//! Named types and their members.

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// Prefix of introspection type names. Such types are never analyzed or pruned.
pub const RESERVED_PREFIX: &str = "__";

/// Names of the built-in scalars every schema may reference without declaring.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// Category of a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    InputObject,
    Enum,
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::InputObject => "input object",
            Self::Enum => "enum",
        }
    }
}

/// An argument of an output field or directive, or a field of an input object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A field of an object or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<InputValue>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            arguments: Vec::new(),
        }
    }

    pub fn argument(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.arguments.push(InputValue::new(name, ty));
        self
    }
}

/// Category-specific payload of a named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    Scalar,
    Object {
        fields: Vec<Field>,
        interfaces: Vec<String>,
    },
    Interface {
        fields: Vec<Field>,
        interfaces: Vec<String>,
    },
    Union {
        members: Vec<String>,
    },
    InputObject {
        fields: Vec<InputValue>,
    },
    Enum {
        values: Vec<String>,
    },
}

/// A uniquely named node of the type graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
    pub shape: TypeShape,
}

impl NamedType {
    pub fn new(name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self::new(name, TypeShape::Scalar)
    }

    pub fn object(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::new(
            name,
            TypeShape::Object {
                fields,
                interfaces: Vec::new(),
            },
        )
    }

    pub fn interface(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::new(
            name,
            TypeShape::Interface {
                fields,
                interfaces: Vec::new(),
            },
        )
    }

    pub fn union(name: impl Into<String>, members: &[&str]) -> Self {
        Self::new(
            name,
            TypeShape::Union {
                members: members.iter().map(|m| m.to_string()).collect(),
            },
        )
    }

    pub fn input_object(name: impl Into<String>, fields: Vec<InputValue>) -> Self {
        Self::new(name, TypeShape::InputObject { fields })
    }

    pub fn enumeration(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(
            name,
            TypeShape::Enum {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
        )
    }

    /// Add an implemented interface. No effect on types that cannot implement one.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        if let TypeShape::Object { interfaces, .. } | TypeShape::Interface { interfaces, .. } =
            &mut self.shape
        {
            interfaces.push(interface.into());
        }
        self
    }

    pub fn kind(&self) -> TypeKind {
        match self.shape {
            TypeShape::Scalar => TypeKind::Scalar,
            TypeShape::Object { .. } => TypeKind::Object,
            TypeShape::Interface { .. } => TypeKind::Interface,
            TypeShape::Union { .. } => TypeKind::Union,
            TypeShape::InputObject { .. } => TypeKind::InputObject,
            TypeShape::Enum { .. } => TypeKind::Enum,
        }
    }

    pub fn is_reserved(&self) -> bool {
        is_reserved_name(&self.name)
    }

    /// Output fields of an object or interface; empty for every other category.
    pub fn fields(&self) -> &[Field] {
        match &self.shape {
            TypeShape::Object { fields, .. } | TypeShape::Interface { fields, .. } => fields,
            _ => &[],
        }
    }

    /// Fields of an input object; empty for every other category.
    pub fn input_fields(&self) -> &[InputValue] {
        match &self.shape {
            TypeShape::InputObject { fields } => fields,
            _ => &[],
        }
    }

    /// Interfaces declared as implemented by an object or interface.
    pub fn interfaces(&self) -> &[String] {
        match &self.shape {
            TypeShape::Object { interfaces, .. } | TypeShape::Interface { interfaces, .. } => {
                interfaces
            }
            _ => &[],
        }
    }

    pub fn members(&self) -> &[String] {
        match &self.shape {
            TypeShape::Union { members } => members,
            _ => &[],
        }
    }

    /// Number of fields of a composite type (object, interface, input object).
    pub fn field_count(&self) -> usize {
        self.fields().len() + self.input_fields().len()
    }

    /// Every type name this type points at, in declaration order.
    ///
    /// Covers field and argument types, input field types, implemented
    /// interfaces and union members.
    pub fn references(&self) -> impl Iterator<Item = &str> + '_ {
        let fields = self.fields().iter().flat_map(|field| {
            std::iter::once(field.ty.named_type())
                .chain(field.arguments.iter().map(|arg| arg.ty.named_type()))
        });
        let input_fields = self.input_fields().iter().map(|f| f.ty.named_type());
        let names = self
            .interfaces()
            .iter()
            .chain(self.members())
            .map(String::as_str);
        fields.chain(input_fields).chain(names)
    }
}

/// A schema-level directive definition. Its argument types are always reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<InputValue>,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn argument(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.arguments.push(InputValue::new(name, ty));
        self
    }
}
