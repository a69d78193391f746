#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for schema type graphs.
//!
//! Two layers:
//! - **Document layer**: 1:1 mapping to the JSON schema document (`json`)
//! - **Graph layer**: the name-indexed `TypeGraph` arena the pruner analyzes
//!
//! The pruner never touches `TypeGraph` directly; it works against the
//! `SchemaGraph` trait, which `TypeGraph` implements.

mod graph;
mod json;
mod type_ref;
mod types;


pub use graph::{OperationKind, RootTypes, SchemaGraph, TypeGraph};
pub use json::LoadError;
pub use type_ref::{TypeRef, TypeRefError};
pub use types::{
    BUILTIN_SCALARS, Directive, Field, InputValue, NamedType, RESERVED_PREFIX, TypeKind,
    TypeShape, is_reserved_name,
};
