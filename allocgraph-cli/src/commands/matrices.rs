use std::path::Path;

use allocgraph::analysis::{allocation_matrix, availability, request_matrix, Availability, Matrix};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_graph,
    output::{print_output, Grid},
};

#[derive(Debug, Serialize)]
pub struct MatrixTables {
    pub allocation: Matrix,
    pub request: Matrix,
    pub available: Availability,
}

fn print_matrix(title: &str, matrix: &Matrix) {
    println!("{title}:");
    let mut grid = Grid::new("Process", matrix.resources().iter().map(String::as_str));
    for (process, row) in matrix.iter() {
        grid.push(process, row);
    }
    grid.print();
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path, &opts.limits())?;

    let tables = MatrixTables {
        allocation: allocation_matrix(&graph),
        request: request_matrix(&graph),
        available: availability(&graph),
    };

    print_output(&tables, opts, |t| {
        print_matrix("Allocation", &t.allocation);
        println!();
        print_matrix("Request", &t.request);
        println!();

        println!("Available:");
        let mut grid = Grid::new("Resource", ["Free"]);
        for (resource, free) in t.available.iter() {
            grid.push(resource, [free]);
        }
        grid.print();
    })
}
