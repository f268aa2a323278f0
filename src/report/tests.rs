use super::render;
use crate::{divisible, input};

#[test]
fn renders_none() {
    assert_eq!(render(&None), "NONE\n");
}

#[test]
fn renders_interval_list() {
    let findings = divisible::search(&[2, 4, 5, 6], 2);
    assert_eq!(
        render(&findings),
        "Minimum interval length: 1\nFound intervals:\n[1, 1]\n[2, 2]\n[4, 4]\n",
    );
}

#[test]
fn end_to_end_sample() {
    let problem = input::read_problem("6 5\n1 3 2 6 4\n".as_bytes()).unwrap();
    let findings = divisible::search(&problem.values, problem.modulus);
    assert_eq!(
        render(&findings),
        "Minimum interval length: 1\nFound intervals:\n[4, 4]\n",
    );
}

#[test]
fn end_to_end_none() {
    let problem = input::read_problem("5 4\n1 2 3 4\n".as_bytes()).unwrap();
    let findings = divisible::search(&problem.values, problem.modulus);
    assert_eq!(render(&findings), "NONE\n");
}
