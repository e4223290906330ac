use calltrace_studio::aggregator::extract_contexts;
use calltrace_studio::parser::{parse_edges, parse_stack_blocks, Edge, EdgeSet};
use calltrace_studio::utils::config::default_library_prefixes;
use calltrace_studio::validate::{
    compare_edge_sets, filter_event_lines, find_witness, validate_edges, ValidatorConfig,
};
use pretty_assertions::assert_eq;

const STACKS: &str = "\
org.app.A.run(A.java:10)
org.app.B.call(B.java:20)
org.app.C.main(C.java:30)

org.app.D.work(D.java:5)
java.util.ArrayList.forEach(ArrayList.java:1)
org.app.C.main(C.java:31)

org.app.D.work(D.java:6)
org.app.C.main(C.java:32)
";

fn edge_set(pairs: &[(&str, &str)]) -> EdgeSet {
    pairs.iter().map(|(callee, caller)| Edge::new(*callee, *caller)).collect()
}

#[test]
fn test_edge_direction_follows_stack_order() {
    let corpus = parse_stack_blocks("A\nB\nC\n");
    let config = ValidatorConfig::default();

    assert_eq!(find_witness(&Edge::new("A", "C"), &corpus, &config), Some(0));
    assert_eq!(find_witness(&Edge::new("C", "A"), &corpus, &config), None);
}

#[test]
fn test_library_stack_skipped_for_next_witness() {
    let corpus = parse_stack_blocks(STACKS);
    let config = ValidatorConfig::default();

    // stack 1 contains a java.* frame and cannot witness
    assert_eq!(
        find_witness(&Edge::new("org.app.D.work", "org.app.C.main"), &corpus, &config),
        Some(2)
    );
}

#[test]
fn test_validate_corpus_end_to_end() {
    let edges = parse_edges(
        "org.app.A.run org.app.C.main\n\
         org.app.A.run org.app.C.main\n\
         org.app.D.work org.app.C.main\n\
         org.app.C.main org.app.A.run\n\
         org.app.X.gone org.app.C.main\n",
        false,
    )
    .unwrap();
    let corpus = parse_stack_blocks(STACKS);

    let validation = validate_edges(&edges, &corpus, &ValidatorConfig::default());

    assert_eq!(
        validation.validated_set(),
        edge_set(&[
            ("org.app.A.run", "org.app.C.main"),
            ("org.app.D.work", "org.app.C.main"),
        ])
    );
    assert_eq!(validation.rejected_count(), 2);
    assert_eq!(
        validation.witness(&Edge::new("org.app.A.run", "org.app.C.main")),
        Some(0)
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let edges = parse_edges(
        "org.app.A.run org.app.B.call\n\
         org.app.B.call org.app.C.main\n\
         org.app.D.work org.app.C.main\n\
         org.app.C.main org.app.D.work\n",
        false,
    )
    .unwrap();
    let corpus = parse_stack_blocks(STACKS);

    let parallel = validate_edges(&edges, &corpus, &ValidatorConfig::new().with_parallel(true));
    let sequential = validate_edges(&edges, &corpus, &ValidatorConfig::new().with_parallel(false));

    assert_eq!(parallel, sequential);
}

#[test]
fn test_no_prefixes_lets_library_stacks_witness() {
    let corpus = parse_stack_blocks(STACKS);
    let config = ValidatorConfig::new().with_library_prefixes(Vec::new());

    assert_eq!(
        find_witness(&Edge::new("org.app.D.work", "org.app.C.main"), &corpus, &config),
        Some(1)
    );
}

#[test]
fn test_contexts_from_dump() {
    let corpus = parse_stack_blocks("x\nTarget.m\ny\nz\n\nTarget.m\nr\n");
    let contexts = extract_contexts(&corpus, "Target.m");

    assert_eq!(
        contexts.into_iter().collect::<Vec<_>>(),
        vec!["r\nTarget.m".to_string(), "z\ny\nTarget.m".to_string()]
    );
}

#[test]
fn test_compare_static_and_dynamic_edges() {
    let static_edges = edge_set(&[("a", "b"), ("c", "d"), ("e.<clinit>", "f")]);
    let dynamic_edges = edge_set(&[("a", "b"), ("g", "h")]);

    let comparison = compare_edge_sets(&static_edges, &dynamic_edges);

    assert_eq!(comparison.first_total, 3);
    assert_eq!(comparison.second_total, 2);
    assert_eq!(comparison.first_in_second.found, 1);
    assert_eq!(comparison.first_in_second.missing, vec![Edge::new("c", "d")]);
    assert_eq!(comparison.second_in_first.missing, vec![Edge::new("g", "h")]);
}

#[test]
fn test_filter_event_dump() {
    let dump = "\
{heap 1}
[1, org.app.Main.run, 2]
[2, java.lang.Thread.run, 1]
[3, NULL, 0]
trailing noise
";
    let filtered = filter_event_lines(dump, &default_library_prefixes()).unwrap();
    assert_eq!(filtered, "{heap 1}\n[1, org.app.Main.run, 2]\n");
}
