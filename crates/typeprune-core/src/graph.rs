//! The type graph and the collaborator seam the pruner works against.

use indexmap::{IndexMap, IndexSet};

use crate::{BUILTIN_SCALARS, Directive, Field, NamedType, TypeShape};

/// Operation kinds a schema can expose an entry point for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [Self::Query, Self::Mutation, Self::Subscription];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

/// Names of the root (entry point) types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

impl RootTypes {
    pub fn query(name: impl Into<String>) -> Self {
        Self {
            query: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn get(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.query.as_deref(),
            OperationKind::Mutation => self.mutation.as_deref(),
            OperationKind::Subscription => self.subscription.as_deref(),
        }
    }

    /// Root names in query, mutation, subscription order.
    pub fn iter(&self) -> impl Iterator<Item = (OperationKind, &str)> + '_ {
        OperationKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|name| (kind, name)))
    }

    fn without(&self, names: &IndexSet<String>) -> Self {
        let keep = |root: &Option<String>| root.clone().filter(|name| !names.contains(name));
        Self {
            query: keep(&self.query),
            mutation: keep(&self.mutation),
            subscription: keep(&self.subscription),
        }
    }
}

/// Read access to a type graph plus the ability to rebuild it without some types.
///
/// The pruner only ever talks to a graph through this trait.
pub trait SchemaGraph: Sized {
    /// Every named type, keyed by name.
    fn types(&self) -> &IndexMap<String, NamedType>;

    /// Schema-level directive definitions.
    fn directives(&self) -> &[Directive];

    /// Entry point types in query, mutation, subscription order.
    fn root_types(&self) -> Vec<&NamedType>;

    /// A new graph equal to `self` minus the types named in `names`.
    ///
    /// References to removed types must be resolved by the implementation.
    fn rebuild_excluding(&self, names: &IndexSet<String>) -> Self;

    fn get_type(&self, name: &str) -> Option<&NamedType> {
        self.types().get(name)
    }
}

/// Insertion-ordered arena of named types.
///
/// Types reference each other by name only, so the graph owns every node and
/// cycles need no back-pointers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeGraph {
    types: IndexMap<String, NamedType>,
    directives: Vec<Directive>,
    roots: RootTypes,
}

impl TypeGraph {
    pub fn new(roots: RootTypes) -> Self {
        Self {
            roots,
            ..Self::default()
        }
    }

    /// Insert a type, replacing (and returning) any previous type of the same name.
    pub fn add_type(&mut self, ty: NamedType) -> Option<NamedType> {
        self.types.insert(ty.name.clone(), ty)
    }

    pub fn with_type(mut self, ty: NamedType) -> Self {
        self.add_type(ty);
        self
    }

    pub fn add_directive(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.add_directive(directive);
        self
    }

    pub fn roots(&self) -> &RootTypes {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.types.keys().map(String::as_str)
    }

    /// Declare every built-in scalar that is referenced but not defined.
    pub fn declare_missing_builtins(&mut self) {
        let missing: Vec<&str> = BUILTIN_SCALARS
            .into_iter()
            .filter(|name| !self.types.contains_key(*name))
            .filter(|name| self.all_references().any(|(_, target)| target == *name))
            .collect();
        for name in missing {
            self.add_type(NamedType::scalar(name));
        }
    }

    /// Every `(owner, target)` pair whose target is not defined in the graph.
    ///
    /// Directive arguments are reported with an `@`-prefixed owner.
    pub fn undefined_references(&self) -> Vec<(String, String)> {
        self.all_references()
            .filter(|(_, target)| !self.types.contains_key(*target))
            .map(|(owner, target)| (owner, target.to_string()))
            .collect()
    }

    fn all_references(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        let types = self
            .types
            .values()
            .flat_map(|ty| ty.references().map(|target| (ty.name.clone(), target)));
        let directives = self.directives.iter().flat_map(|directive| {
            directive
                .arguments
                .iter()
                .map(|arg| (format!("@{}", directive.name), arg.ty.named_type()))
        });
        types.chain(directives)
    }
}

impl SchemaGraph for TypeGraph {
    fn types(&self) -> &IndexMap<String, NamedType> {
        &self.types
    }

    fn directives(&self) -> &[Directive] {
        &self.directives
    }

    fn root_types(&self) -> Vec<&NamedType> {
        self.roots
            .iter()
            .filter_map(|(_, name)| self.types.get(name))
            .collect()
    }

    /// Members that point at a removed type are dropped: fields, arguments,
    /// input fields, union members, implemented interfaces, directive
    /// arguments and roots.
    fn rebuild_excluding(&self, names: &IndexSet<String>) -> Self {
        let kept = |name: &str| !names.contains(name);

        let types = self
            .types
            .values()
            .filter(|ty| kept(ty.name.as_str()))
            .map(|ty| {
                let shape = match &ty.shape {
                    TypeShape::Object { fields, interfaces } => TypeShape::Object {
                        fields: retain_fields(fields, &kept),
                        interfaces: retain_names(interfaces, &kept),
                    },
                    TypeShape::Interface { fields, interfaces } => TypeShape::Interface {
                        fields: retain_fields(fields, &kept),
                        interfaces: retain_names(interfaces, &kept),
                    },
                    TypeShape::Union { members } => TypeShape::Union {
                        members: retain_names(members, &kept),
                    },
                    TypeShape::InputObject { fields } => TypeShape::InputObject {
                        fields: fields
                            .iter()
                            .filter(|f| kept(f.ty.named_type()))
                            .cloned()
                            .collect(),
                    },
                    shape @ (TypeShape::Scalar | TypeShape::Enum { .. }) => shape.clone(),
                };
                (ty.name.clone(), NamedType::new(ty.name.clone(), shape))
            })
            .collect();

        let directives = self
            .directives
            .iter()
            .map(|directive| Directive {
                name: directive.name.clone(),
                arguments: directive
                    .arguments
                    .iter()
                    .filter(|arg| kept(arg.ty.named_type()))
                    .cloned()
                    .collect(),
            })
            .collect();

        Self {
            types,
            directives,
            roots: self.roots.without(names),
        }
    }
}

fn retain_fields(fields: &[Field], kept: &impl Fn(&str) -> bool) -> Vec<Field> {
    fields
        .iter()
        .filter(|field| kept(field.ty.named_type()))
        .map(|field| Field {
            name: field.name.clone(),
            ty: field.ty.clone(),
            arguments: field
                .arguments
                .iter()
                .filter(|arg| kept(arg.ty.named_type()))
                .cloned()
                .collect(),
        })
        .collect()
}

fn retain_names(names: &[String], kept: &impl Fn(&str) -> bool) -> Vec<String> {
    names
        .iter()
        .filter(|name| kept(name.as_str()))
        .cloned()
        .collect()
}
