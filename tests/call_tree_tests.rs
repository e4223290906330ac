use calltrace_studio::aggregator::call_tree::{parse_call_trace, CallTree, NodeId};
use calltrace_studio::aggregator::stack_builder::build_collapsed_stacks;
use calltrace_studio::utils::error::ParseError;
use pretty_assertions::assert_eq;

const LUSEARCH_TRACE: &str = "\
>[0]org.dacapo.harness.TestHarness.main
>[1]org.dacapo.lusearch.Search:main=([Ljava/lang/String;)V
>[2]org.dacapo.lusearch.Search$QueryThread.run
>[3]org.apache.lucene.index.TermBuffer.set
<[3]org.apache.lucene.index.TermBuffer.set
>[3]org.apache.lucene.index.TermInfosReader.get
>[4]org.apache.lucene.index.TermBuffer.set
<[4]org.apache.lucene.index.TermBuffer.set
<[3]org.apache.lucene.index.TermInfosReader.get
<[2]org.dacapo.lusearch.Search$QueryThread.run
<[1]org.dacapo.lusearch.Search:main=([Ljava/lang/String;)V
<[0]org.dacapo.harness.TestHarness.main
";

/// (method, depth, child count) for every node in pre-order
fn shape(tree: &CallTree) -> Vec<(String, usize, usize)> {
    tree.roots()
        .iter()
        .flat_map(|&root| tree.preorder(root))
        .map(|id| {
            let node = tree.node(id);
            (node.method.clone(), node.depth, node.children.len())
        })
        .collect()
}

fn depth_from_root(tree: &CallTree, id: NodeId) -> usize {
    tree.ancestors(id).count()
}

#[test]
fn test_concrete_two_node_trace() {
    let tree = parse_call_trace(">[0]a.b.foo\n>[1]a.b.bar\n<[1]a.b.bar\n<[0]a.b.foo\n").unwrap();

    let root = tree.root().unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.node(root).method, "a.b.foo");
    assert_eq!(tree.node(root).children.len(), 1);

    let bar = tree.find("a.b.bar").unwrap();
    assert_eq!(tree.node(root).children[0], bar);
    assert!(tree.node(bar).children.is_empty());
}

#[test]
fn test_node_depth_matches_trace_depth() {
    let tree = parse_call_trace(LUSEARCH_TRACE).unwrap();

    for id in tree.preorder(tree.root().unwrap()) {
        assert_eq!(tree.node(id).depth, depth_from_root(&tree, id));
    }
    assert_eq!(tree.max_depth(), Some(4));
}

#[test]
fn test_reparse_is_isomorphic() {
    let first = parse_call_trace(LUSEARCH_TRACE).unwrap();
    let second = parse_call_trace(LUSEARCH_TRACE).unwrap();

    assert_eq!(shape(&first), shape(&second));
    assert_eq!(first, second);
}

#[test]
fn test_colon_encoded_methods_are_searchable() {
    let tree = parse_call_trace(LUSEARCH_TRACE).unwrap();
    assert!(tree.find("org.dacapo.lusearch.Search.main").is_some());
}

#[test]
fn test_find_single_and_missing() {
    let tree = parse_call_trace(LUSEARCH_TRACE).unwrap();

    let reader = tree.find("org.apache.lucene.index.TermInfosReader.get").unwrap();
    assert_eq!(tree.node(reader).children.len(), 1);

    assert!(tree.find("org.apache.lucene.search.IndexSearcher.search").is_none());
}

#[test]
fn test_find_first_in_preorder_and_subtree_search() {
    let tree = parse_call_trace(LUSEARCH_TRACE).unwrap();

    let first = tree.find("org.apache.lucene.index.TermBuffer.set").unwrap();
    assert_eq!(tree.node(first).depth, 3);

    let reader = tree.find("org.apache.lucene.index.TermInfosReader.get").unwrap();
    let nested = tree
        .find_from(reader, "org.apache.lucene.index.TermBuffer.set")
        .unwrap();
    assert_eq!(tree.node(nested).depth, 4);
    assert_eq!(
        tree.find_all("org.apache.lucene.index.TermBuffer.set"),
        vec![first, nested]
    );
}

#[test]
fn test_render_selected_subtree() {
    let tree = parse_call_trace(LUSEARCH_TRACE).unwrap();
    let run = tree.find("org.dacapo.lusearch.Search$QueryThread.run").unwrap();

    assert_eq!(
        tree.render_subtree(run, None),
        "org.dacapo.lusearch.Search$QueryThread.run\n\
         \x20 org.apache.lucene.index.TermBuffer.set\n\
         \x20 org.apache.lucene.index.TermInfosReader.get\n\
         \x20   org.apache.lucene.index.TermBuffer.set\n"
    );
}

#[test]
fn test_depth_mismatch_reports_line() {
    let trace = ">[0]a\n>[1]b\n>[1]c\n";
    let err = parse_call_trace(trace).unwrap_err();

    assert_eq!(
        err,
        ParseError::DepthMismatch {
            line_number: 3,
            line: ">[1]c".to_string(),
            expected: 2,
            actual: 1,
        }
    );
}

#[test]
fn test_malformed_line_aborts_parse() {
    let err = parse_call_trace(">[0]a\nnot a trace line\n<[0]a\n").unwrap_err();
    assert!(matches!(
        err,
        ParseError::MalformedTraceLine { line_number: 2, .. }
    ));
}

#[test]
fn test_truncated_trace_is_reported() {
    let truncated: String = LUSEARCH_TRACE.lines().take(5).map(|l| format!("{}\n", l)).collect();
    assert!(matches!(
        parse_call_trace(&truncated),
        Err(ParseError::TruncatedTrace { open: 3, .. })
    ));
}

#[test]
fn test_collapsed_stacks_count_activations() {
    let tree = parse_call_trace(LUSEARCH_TRACE).unwrap();
    let stacks = build_collapsed_stacks(&tree);

    let total: u64 = stacks.iter().map(|s| s.weight).sum();
    assert_eq!(total as usize, tree.len());
    assert!(stacks.iter().all(|s| s.stack.starts_with("org.dacapo.harness.TestHarness.main")));
}
