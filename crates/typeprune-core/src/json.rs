//! JSON (de)serialization of type graphs.
//!
//! The document lists types as a `kind`-tagged array so declaration order is
//! preserved:
//!
//! ```json
//! {
//!   "query": "Query",
//!   "types": [
//!     { "kind": "OBJECT", "name": "Query", "fields": [{ "name": "me", "type": "User" }] },
//!     { "kind": "OBJECT", "name": "User", "fields": [{ "name": "id", "type": "ID!" }] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{Directive, Field, InputValue, NamedType, OperationKind, RootTypes, TypeGraph};
use crate::{SchemaGraph, TypeKind, TypeShape};

/// Error while loading a type graph document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("type `{0}` is defined more than once")]
    DuplicateType(String),

    #[error("{} root type `{name}` is not defined", .operation.as_str())]
    MissingRoot {
        operation: OperationKind,
        name: String,
    },

    #[error("{} root type `{name}` must be an object, found {}", .operation.as_str(), .kind.as_str())]
    RootNotObject {
        operation: OperationKind,
        name: String,
        kind: TypeKind,
    },

    #[error("`{owner}` references undefined type `{target}`")]
    UndefinedType { owner: String, target: String },
}

impl TypeGraph {
    /// Parse and check a type graph document.
    ///
    /// Built-in scalars that are referenced but not declared are added.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawSchema = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Serialize the graph back into the document format.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        let raw = RawSchema::from(self);
        if pretty {
            serde_json::to_string_pretty(&raw)
        } else {
            serde_json::to_string(&raw)
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RawSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subscription: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    directives: Vec<Directive>,
    types: Vec<RawType>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
enum RawType {
    Scalar {
        name: String,
    },
    Object {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        interfaces: Vec<String>,
        #[serde(default)]
        fields: Vec<Field>,
    },
    Interface {
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        interfaces: Vec<String>,
        #[serde(default)]
        fields: Vec<Field>,
    },
    Union {
        name: String,
        #[serde(default)]
        members: Vec<String>,
    },
    InputObject {
        name: String,
        #[serde(default)]
        fields: Vec<InputValue>,
    },
    Enum {
        name: String,
        #[serde(default)]
        values: Vec<String>,
    },
}

impl From<RawType> for NamedType {
    fn from(raw: RawType) -> Self {
        match raw {
            RawType::Scalar { name } => NamedType::new(name, TypeShape::Scalar),
            RawType::Object {
                name,
                interfaces,
                fields,
            } => NamedType::new(name, TypeShape::Object { fields, interfaces }),
            RawType::Interface {
                name,
                interfaces,
                fields,
            } => NamedType::new(name, TypeShape::Interface { fields, interfaces }),
            RawType::Union { name, members } => NamedType::new(name, TypeShape::Union { members }),
            RawType::InputObject { name, fields } => {
                NamedType::new(name, TypeShape::InputObject { fields })
            }
            RawType::Enum { name, values } => NamedType::new(name, TypeShape::Enum { values }),
        }
    }
}

impl From<&NamedType> for RawType {
    fn from(ty: &NamedType) -> Self {
        let name = ty.name.clone();
        match &ty.shape {
            TypeShape::Scalar => RawType::Scalar { name },
            TypeShape::Object { fields, interfaces } => RawType::Object {
                name,
                interfaces: interfaces.clone(),
                fields: fields.clone(),
            },
            TypeShape::Interface { fields, interfaces } => RawType::Interface {
                name,
                interfaces: interfaces.clone(),
                fields: fields.clone(),
            },
            TypeShape::Union { members } => RawType::Union {
                name,
                members: members.clone(),
            },
            TypeShape::InputObject { fields } => RawType::InputObject {
                name,
                fields: fields.clone(),
            },
            TypeShape::Enum { values } => RawType::Enum {
                name,
                values: values.clone(),
            },
        }
    }
}

impl TryFrom<RawSchema> for TypeGraph {
    type Error = LoadError;

    fn try_from(raw: RawSchema) -> Result<Self, Self::Error> {
        let roots = RootTypes {
            query: raw.query,
            mutation: raw.mutation,
            subscription: raw.subscription,
        };
        let mut graph = TypeGraph::new(roots);

        for raw_type in raw.types {
            if let Some(previous) = graph.add_type(raw_type.into()) {
                return Err(LoadError::DuplicateType(previous.name));
            }
        }
        for directive in raw.directives {
            graph.add_directive(directive);
        }
        graph.declare_missing_builtins();

        for (operation, name) in graph.roots().iter() {
            let Some(ty) = graph.get_type(name) else {
                return Err(LoadError::MissingRoot {
                    operation,
                    name: name.to_string(),
                });
            };
            if ty.kind() != TypeKind::Object {
                return Err(LoadError::RootNotObject {
                    operation,
                    name: name.to_string(),
                    kind: ty.kind(),
                });
            }
        }

        if let Some((owner, target)) = graph.undefined_references().into_iter().next() {
            return Err(LoadError::UndefinedType { owner, target });
        }

        Ok(graph)
    }
}

impl From<&TypeGraph> for RawSchema {
    fn from(graph: &TypeGraph) -> Self {
        let roots = graph.roots();
        RawSchema {
            query: roots.query.clone(),
            mutation: roots.mutation.clone(),
            subscription: roots.subscription.clone(),
            directives: graph.directives().to_vec(),
            types: graph.types().values().map(RawType::from).collect(),
        }
    }
}
