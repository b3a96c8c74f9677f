use std::env;
use std::path::Path;
use std::process;

use itertools::Itertools;

use throttling::graph::am_text::read_am_file;

fn main() {
    // Get the filename and order from command-line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <am_file> <order>", args[0]);
        process::exit(1);
    }

    let am_file = &args[1];
    let order: usize = match args[2].parse() {
        Ok(order) => order,
        Err(_) => {
            eprintln!("order must be a positive integer, got {:?}", args[2]);
            process::exit(1);
        }
    };

    println!("Reading graphs from file: {}", am_file);
    let graphs = match read_am_file(Path::new(am_file), order) {
        Ok(graphs) => graphs,
        Err(e) => {
            eprintln!("Error reading adjacency matrix file: {}", e);
            process::exit(1);
        }
    };

    println!("Number of graphs: {}", graphs.len());
    if graphs.is_empty() {
        return;
    }

    let mut total_edges = 0;
    let mut with_self_loops = 0;
    for graph in &graphs {
        total_edges += (0..graph.n).map(|i| graph.degree(i)).sum::<usize>() / 2;
        if graph.has_self_loops() {
            with_self_loops += 1;
        }
    }

    println!("Total edges: {}", total_edges);
    println!(
        "Average edges per graph: {:.2}",
        total_edges as f64 / graphs.len() as f64
    );

    let degrees: Vec<usize> = graphs
        .iter()
        .flat_map(|graph| (0..graph.n).map(|i| graph.degree(i)).collect::<Vec<_>>())
        .collect();
    if let Some((min_degree, max_degree)) = degrees.iter().minmax().into_option() {
        println!("Degree range across all graphs: {} to {}", min_degree, max_degree);
    }

    // the propagation model assumes a zero diagonal
    if with_self_loops > 0 {
        println!(
            "\nNote: {} graphs have self-loops; results for them are unreliable",
            with_self_loops
        );
    }

    println!("\nGraph stats summary complete");
}
