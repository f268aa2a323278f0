#![allow(dead_code)]

use std::io;

mod basis;
mod divisible;
mod input;
mod report;
mod seg_tree;

fn main() {
    let stdin = io::stdin();
    let problem = input::read_problem(stdin.lock()).expect("failed to read problem");

    let findings = divisible::search(&problem.values, problem.modulus);
    print!("{}", report::render(&findings));
}
