use super::read_problem;

#[test]
fn reads_two_line_form() {
    let problem = read_problem("6 5\n1 3 2 6 4\n".as_bytes()).unwrap();
    assert_eq!(problem.modulus, 6);
    assert_eq!(problem.values, vec![1, 3, 2, 6, 4]);
}

#[test]
fn whitespace_layout_does_not_matter() {
    let problem = read_problem("  5\t4\n\n1 2\n3   4".as_bytes()).unwrap();
    assert_eq!(problem.modulus, 5);
    assert_eq!(problem.values, vec![1, 2, 3, 4]);
}

#[test]
fn rejects_missing_elements() {
    let err = read_problem("6 5\n1 3 2\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("expected 5 elements"));
}

#[test]
fn rejects_empty_sequence() {
    let err = read_problem("6 0\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("element count"));
}

#[test]
fn rejects_non_positive_modulus() {
    let err = read_problem("0 3\n1 2 3\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("modulus"));
}

#[test]
fn rejects_garbage_token() {
    let err = read_problem("6 two\n1 2\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("element count"));
}

#[test]
fn rejects_empty_input() {
    assert!(read_problem("".as_bytes()).is_err());
}
