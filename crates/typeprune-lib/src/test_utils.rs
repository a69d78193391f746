//! Test helpers.

use typeprune_core::TypeGraph;

/// Load a schema document, panicking with the load error on failure.
pub fn load(json: &str) -> TypeGraph {
    TypeGraph::from_json(json).unwrap_or_else(|e| panic!("invalid test schema: {e}"))
}

pub fn names(graph: &TypeGraph) -> Vec<&str> {
    graph.type_names().collect()
}

/// Schema touching every category, edge kind and removal rule.
pub const KITCHEN_SINK: &str = r#"{
  "query": "Query",
  "mutation": "Mutation",
  "directives": [{ "name": "cached", "arguments": [{ "name": "scope", "type": "CacheScope" }] }],
  "types": [
    { "kind": "OBJECT", "name": "Query", "fields": [
      { "name": "node", "type": "Node", "arguments": [{ "name": "id", "type": "ID!" }] },
      { "name": "search", "type": "[SearchResult!]!", "arguments": [{ "name": "filter", "type": "SearchFilter" }] }
    ] },
    { "kind": "OBJECT", "name": "Mutation", "fields": [
      { "name": "createUser", "type": "User", "arguments": [{ "name": "input", "type": "CreateUserInput!" }] }
    ] },
    { "kind": "INTERFACE", "name": "Node", "fields": [{ "name": "id", "type": "ID!" }] },
    { "kind": "OBJECT", "name": "User", "interfaces": ["Node"], "fields": [
      { "name": "id", "type": "ID!" },
      { "name": "role", "type": "Role" },
      { "name": "friends", "type": "[User!]!" }
    ] },
    { "kind": "OBJECT", "name": "Post", "interfaces": ["Node"], "fields": [
      { "name": "id", "type": "ID!" },
      { "name": "author", "type": "User!" }
    ] },
    { "kind": "UNION", "name": "SearchResult", "members": ["User", "Post"] },
    { "kind": "INPUT_OBJECT", "name": "SearchFilter", "fields": [
      { "name": "term", "type": "String" },
      { "name": "since", "type": "DateTime" }
    ] },
    { "kind": "INPUT_OBJECT", "name": "CreateUserInput", "fields": [
      { "name": "name", "type": "String!" },
      { "name": "role", "type": "Role" }
    ] },
    { "kind": "ENUM", "name": "Role", "values": ["ADMIN", "MEMBER"] },
    { "kind": "SCALAR", "name": "DateTime" },
    { "kind": "ENUM", "name": "CacheScope", "values": ["PUBLIC", "PRIVATE"] },
    { "kind": "OBJECT", "name": "Legacy", "fields": [
      { "name": "id", "type": "ID!" },
      { "name": "replacement", "type": "Post" }
    ] },
    { "kind": "ENUM", "name": "LegacyKind", "values": ["OLD"] },
    { "kind": "INTERFACE", "name": "Timestamped", "fields": [{ "name": "at", "type": "DateTime" }] },
    { "kind": "UNION", "name": "EmptyResult", "members": [] },
    { "kind": "INPUT_OBJECT", "name": "VoidInput", "fields": [] }
  ]
}"#;
