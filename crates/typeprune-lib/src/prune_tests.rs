use indoc::indoc;
use typeprune_core::{SchemaGraph, TypeGraph};

use crate::test_utils::{KITCHEN_SINK, load, names};
use crate::{PruneOptions, RemovalReason, prune_graph, prune_graph_with_report, run_pass};

fn prune(graph: TypeGraph) -> TypeGraph {
    prune_graph(graph, &PruneOptions::new())
}

#[test]
fn removes_unreferenced_object() {
    let graph = load(indoc! {r#"
        { "query": "Query", "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [{ "name": "hello", "type": "String" }] },
          { "kind": "OBJECT", "name": "Orphan", "fields": [{ "name": "id", "type": "ID" }] }
        ] }
    "#});

    assert_eq!(names(&prune(graph)), ["Query", "String"]);
}

#[test]
fn interface_with_only_reserved_implementers() {
    let json = indoc! {r#"
        { "query": "Query", "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [
            { "name": "node", "type": "Node" },
            { "name": "version", "type": "String" }
          ] },
          { "kind": "INTERFACE", "name": "Node", "fields": [{ "name": "id", "type": "ID!" }] },
          { "kind": "OBJECT", "name": "__Meta", "interfaces": ["Node"], "fields": [{ "name": "id", "type": "ID!" }] }
        ] }
    "#};

    let options = PruneOptions::new().skip_unimplemented_interfaces(true);
    let kept = prune_graph(load(json), &options);
    assert_eq!(names(&kept), ["Query", "Node", "__Meta", "String", "ID"]);

    let (pruned, report) = prune_graph_with_report(load(json), &PruneOptions::new());
    assert_eq!(names(&pruned), ["Query", "__Meta", "String", "ID"]);
    assert_eq!(
        report.removed().collect::<Vec<_>>(),
        [("Node", RemovalReason::UnimplementedInterface)]
    );
    assert!(pruned.get_type("__Meta").unwrap().interfaces().is_empty());
}

#[test]
fn unreachable_cycle_removed_in_one_pass() {
    let graph = load(indoc! {r#"
        { "query": "Query", "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [{ "name": "ok", "type": "Boolean" }] },
          { "kind": "OBJECT", "name": "Chicken", "fields": [{ "name": "egg", "type": "Egg" }] },
          { "kind": "OBJECT", "name": "Egg", "fields": [{ "name": "chicken", "type": "Chicken" }] }
        ] }
    "#});

    let (pruned, report) = prune_graph_with_report(graph, &PruneOptions::new());
    assert_eq!(names(&pruned), ["Query", "Boolean"]);
    assert_eq!(report.passes().len(), 1);
    assert_eq!(report.removed_count(), 2);
}

#[test]
fn emptied_object_needs_another_pass() {
    let graph = load(indoc! {r#"
        { "query": "Query", "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [
            { "name": "a", "type": "A" },
            { "name": "hello", "type": "String" }
          ] },
          { "kind": "OBJECT", "name": "A", "fields": [{ "name": "b", "type": "B" }] },
          { "kind": "OBJECT", "name": "B", "fields": [] }
        ] }
    "#});

    let first = run_pass(&graph, &PruneOptions::new());
    assert_eq!(first.names().into_iter().collect::<Vec<_>>(), ["B"]);

    let (pruned, report) = prune_graph_with_report(graph, &PruneOptions::new());
    assert_eq!(names(&pruned), ["Query", "String"]);
    insta::assert_snapshot!(report.to_string(), @r"
    pass 1: 1 type
      B (empty composite)
    pass 2: 1 type
      A (empty composite)
    ");
}

#[test]
fn skip_pruning_keeps_type_verbatim() {
    let json = indoc! {r#"
        { "query": "Query", "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [{ "name": "hello", "type": "String" }] },
          { "kind": "OBJECT", "name": "Orphan", "fields": [{ "name": "name", "type": "String" }] }
        ] }
    "#};
    let original = load(json);
    let options = PruneOptions::new().skip_pruning(|ty| ty.name == "Orphan");

    let pruned = prune_graph(load(json), &options);
    assert_eq!(names(&pruned), ["Query", "Orphan", "String"]);
    assert_eq!(pruned.get_type("Orphan"), original.get_type("Orphan"));
}

#[test]
fn skip_pruning_keeps_dependencies_of_exempt_types() {
    let json = indoc! {r#"
        { "query": "Query", "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [{ "name": "ok", "type": "Boolean" }] },
          { "kind": "OBJECT", "name": "Keep", "fields": [{ "name": "at", "type": "Date" }] },
          { "kind": "SCALAR", "name": "Date" },
          { "kind": "SCALAR", "name": "Stray" }
        ] }
    "#};
    let original = load(json);
    let options = PruneOptions::new().skip_pruning(|ty| ty.name == "Keep");

    let (pruned, report) = prune_graph_with_report(load(json), &options);
    assert_eq!(names(&pruned), ["Query", "Keep", "Date", "Boolean"]);
    assert_eq!(pruned.get_type("Keep"), original.get_type("Keep"));
    assert_eq!(
        report.removed().collect::<Vec<_>>(),
        [("Stray", RemovalReason::Unused)]
    );
}

#[test]
fn removed_interface_detaches_from_implementers() {
    let graph = load(indoc! {r#"
        { "query": "Query", "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [{ "name": "me", "type": "User" }] },
          { "kind": "INTERFACE", "name": "Marker", "fields": [] },
          { "kind": "OBJECT", "name": "User", "interfaces": ["Marker"], "fields": [{ "name": "id", "type": "ID!" }] }
        ] }
    "#});

    let pruned = prune(graph);
    assert_eq!(names(&pruned), ["Query", "User", "ID"]);
    assert!(pruned.get_type("User").unwrap().interfaces().is_empty());
}

#[test]
fn emptied_union_and_orphaned_members_cascade() {
    let graph = load(indoc! {r#"
        { "query": "Query", "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [
            { "name": "result", "type": "Result" },
            { "name": "ok", "type": "Boolean" }
          ] },
          { "kind": "UNION", "name": "Result", "members": ["Void"] },
          { "kind": "OBJECT", "name": "Void", "fields": [] }
        ] }
    "#});

    let (pruned, report) = prune_graph_with_report(graph, &PruneOptions::new());
    assert_eq!(names(&pruned), ["Query", "Boolean"]);
    assert_eq!(
        report.removed().collect::<Vec<_>>(),
        [
            ("Void", RemovalReason::EmptyComposite),
            ("Result", RemovalReason::EmptyUnion),
        ]
    );
}

#[test]
fn kitchen_sink() {
    let (pruned, report) = prune_graph_with_report(load(KITCHEN_SINK), &PruneOptions::new());
    assert_eq!(
        names(&pruned),
        [
            "Query",
            "Mutation",
            "Node",
            "User",
            "Post",
            "SearchResult",
            "SearchFilter",
            "CreateUserInput",
            "Role",
            "DateTime",
            "CacheScope",
            "String",
            "ID",
        ]
    );
    insta::assert_snapshot!(report.to_string(), @r"
    pass 1: 5 types
      Legacy (unused)
      LegacyKind (unused)
      Timestamped (unused)
      EmptyResult (empty union)
      VoidInput (empty composite)
    ");
}

#[test]
fn pruning_is_idempotent() {
    let once = prune(load(KITCHEN_SINK));
    let (twice, report) = prune_graph_with_report(once.clone(), &PruneOptions::new());
    assert!(report.is_empty());
    assert_eq!(twice, once);
}

#[test]
fn output_is_subset_of_input() {
    let configurations = [
        PruneOptions::new(),
        PruneOptions::new().skip_unused_types(true),
        PruneOptions::new().skip_empty_composite_types(true),
        PruneOptions::new().skip_empty_unions(true),
        PruneOptions::new().skip_unimplemented_interfaces(true),
    ];

    let input = load(KITCHEN_SINK);
    for options in &configurations {
        let pruned = prune_graph(input.clone(), options);
        assert!(pruned.type_names().all(|name| input.contains(name)));
        assert!(pruned.undefined_references().is_empty());
    }
}

#[test]
fn reachable_types_are_never_removed_as_unused() {
    let configurations = [
        PruneOptions::new(),
        PruneOptions::new().skip_empty_composite_types(true),
        PruneOptions::new().skip_empty_unions(true),
    ];

    let graph = load(KITCHEN_SINK);
    let index = crate::ImplementationIndex::build(&graph);
    let used = crate::mark_reachable(&graph, &index, &PruneOptions::new());
    for options in &configurations {
        for (name, reason) in run_pass(&graph, options).iter() {
            if reason == RemovalReason::Unused {
                assert!(used.is_unused(name), "{name} is reachable");
            }
        }
    }
}

#[test]
fn graph_without_roots_keeps_only_reserved_types_and_their_members() {
    let graph = load(indoc! {r#"
        { "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [{ "name": "ok", "type": "Boolean" }] },
          { "kind": "OBJECT", "name": "__Type", "fields": [{ "name": "name", "type": "String" }] }
        ] }
    "#});
    let original = graph.clone();

    let pruned = prune(graph);
    assert_eq!(names(&pruned), ["__Type", "String"]);
    assert_eq!(pruned.get_type("__Type"), original.get_type("__Type"));
}

#[test]
fn reserved_types_keep_every_member() {
    let graph = load(indoc! {r#"
        { "query": "Query", "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [{ "name": "ok", "type": "Boolean" }] },
          { "kind": "OBJECT", "name": "__Type", "fields": [
            { "name": "name", "type": "String" },
            { "name": "kind", "type": "__TypeKind" }
          ] },
          { "kind": "ENUM", "name": "__TypeKind", "values": ["SCALAR", "OBJECT"] }
        ] }
    "#});
    let original = graph.clone();

    let (pruned, report) = prune_graph_with_report(graph, &PruneOptions::new());
    assert!(report.is_empty());
    assert_eq!(pruned, original);
    assert_eq!(pruned.get_type("__Type").unwrap().fields().len(), 2);
}

#[test]
fn already_minimal_graph_is_returned_unchanged() {
    let graph = load(indoc! {r#"
        { "query": "Query", "types": [
          { "kind": "OBJECT", "name": "Query", "fields": [{ "name": "ok", "type": "Boolean" }] }
        ] }
    "#});

    let (pruned, report) = prune_graph_with_report(graph.clone(), &PruneOptions::new());
    assert_eq!(pruned, graph);
    assert!(report.is_empty());
    assert_eq!(report.to_string(), "no types removed\n");
}
