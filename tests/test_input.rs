use std::path::Path;
use treepatrol::input::{PatrolParser, parse_file, parse_str};
use treepatrol::parser::{ByteParser, ParsingErrorType};
use treepatrol::solve_file;

// --- TESTS VALID INPUT ---
#[test]
fn test_parse_basic_problem() {
    let input = parse_str("5 2\n0 4\n0 1\n1 2\n2 3\n3 4\n").unwrap();

    assert_eq!(input.tree.num_nodes(), 5);
    assert_eq!(input.tree.num_edges(), 4);
    assert!(input.tree.is_valid());
    assert_eq!(input.marked.iter().collect::<Vec<_>>(), vec![0, 4]);
}

#[test]
fn test_parse_ignores_line_structure() {
    let input = parse_str("  3 1 1\r\n 0 1  1\t2").unwrap();

    assert_eq!(input.tree.num_edges(), 2);
    assert!(input.tree.has_edge(1, 2));
    assert!(input.marked.contains(1));
}

#[test]
fn test_parse_without_marked_nodes() {
    let input = parse_str("3 0\n\n0 1\n0 2\n").unwrap();
    assert!(input.marked.is_empty());
    assert_eq!(input.tree.degree(0), 2);
}

#[test]
fn test_parse_single_node() {
    let input = parse_str("1 1\n0\n").unwrap();
    assert_eq!(input.tree.num_nodes(), 1);
    assert_eq!(input.tree.num_edges(), 0);
}

#[test]
fn test_default_parser_accepts_trailing_input() {
    assert!(parse_str("2 1\n0\n0 1\n0 0\n").is_ok());
}

// --- TESTS ERRORS ---
#[test]
fn test_error_on_truncated_edges() {
    let err = parse_str("4 1\n0\n0 1\n1 2\n").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedEOF);
}

#[test]
fn test_error_on_non_integer() {
    let err = parse_str("3 1\nx\n0 1\n1 2\n").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::InvalidInteger("x".to_string()));
    assert_eq!(err.position(), 5);
}

#[test]
fn test_error_on_marked_node_out_of_range() {
    let err = parse_str("3 1\n3\n0 1\n1 2\n").unwrap_err();
    assert_eq!(
        err.kind(),
        &ParsingErrorType::NodeOutOfRange {
            node: 3,
            num_nodes: 3
        }
    );
}

#[test]
fn test_error_on_edge_out_of_range() {
    let err = parse_str("3 1\n0\n0 1\n1 7\n").unwrap_err();
    assert_eq!(
        err.kind(),
        &ParsingErrorType::NodeOutOfRange {
            node: 7,
            num_nodes: 3
        }
    );
    assert!(err.to_string().starts_with("Node 7 out of range for tree with 3 nodes"));
}

// --- TESTS CONFIGURATION ---
#[test]
fn test_strict_rejects_trailing_input() {
    let mut byte_parser = ByteParser::for_str("2 1\n0\n0 1\n0 0\n");
    let err = PatrolParser::new_defaults()
        .with_strict(true)
        .parse(&mut byte_parser)
        .unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::TrailingInput);
}

#[test]
fn test_strict_accepts_trailing_whitespace() {
    let mut byte_parser = ByteParser::for_str("2 1\n0\n0 1\n\n  \n");
    let result = PatrolParser::new_defaults()
        .with_strict(true)
        .parse(&mut byte_parser);
    assert!(result.is_ok());
}

#[test]
fn test_validation_rejects_duplicate_marked_node() {
    let mut byte_parser = ByteParser::for_str("3 2\n1 1\n0 1\n1 2\n");
    let err = PatrolParser::new_defaults()
        .with_validation(true)
        .parse(&mut byte_parser)
        .unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::DuplicateMarkedNode(1));
}

#[test]
fn test_duplicate_marked_node_allowed_by_default() {
    let input = parse_str("3 2\n1 1\n0 1\n1 2\n").unwrap();
    assert_eq!(input.marked.len(), 1);
}

#[test]
fn test_validation_rejects_cycle() {
    // 4 nodes, 3 edges, but 0 - 1 - 2 - 0 is a cycle and 3 is disconnected
    let mut byte_parser = ByteParser::for_str("4 1\n0\n0 1\n1 2\n2 0\n");
    let err = PatrolParser::new_defaults()
        .with_validation(true)
        .parse(&mut byte_parser)
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        ParsingErrorType::InvalidTreeStructure(_)
    ));
}

#[test]
fn test_validation_rejects_self_loop() {
    let mut byte_parser = ByteParser::for_str("2 1\n0\n1 1\n");
    let err = PatrolParser::new_defaults()
        .with_validation(true)
        .parse(&mut byte_parser)
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        ParsingErrorType::InvalidTreeStructure(_)
    ));
}

#[test]
fn test_parser_is_reusable() {
    let mut parser = PatrolParser::new_defaults().with_validation(true);
    let first = parser
        .parse(&mut ByteParser::for_str("2 1\n0\n0 1\n"))
        .unwrap();
    let second = parser
        .parse(&mut ByteParser::for_str("3 1\n2\n0 1\n0 2\n"))
        .unwrap();

    assert_eq!(first.tree.num_nodes(), 2);
    assert_eq!(second.tree.num_nodes(), 3);
}

// --- TESTS FILES ---
#[test]
fn test_parse_file_and_solve() {
    let path = Path::new("tests/fixtures/branching.txt");
    let input = parse_file(path).unwrap();
    assert_eq!(input.tree.num_nodes(), 8);
    assert_eq!(input.marked.len(), 3);
    assert_eq!(solve_file(path).unwrap(), 7);
}

#[test]
fn test_parse_missing_file() {
    let err = parse_file("tests/fixtures/does_not_exist.txt").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}
