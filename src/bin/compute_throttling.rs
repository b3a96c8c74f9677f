use clap::{Arg, ArgAction, Command};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

use throttling::graph::am_text::{read_am_file, write_results};
use throttling::search::{enumerate_color_sets, power_throttling_number_with_sets};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("Compute Throttling")
        .version("0.1.0")
        .about("Computes the power throttling number of every graph in an order file")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("Adjacency matrix file path")
                .required(true),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .short('n')
                .value_name("COUNT")
                .help("Number of vertices per graph")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Output file path for the results")
                .required(true),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Write results as CSV instead of the plain text report")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input_path = matches.get_one::<String>("input").unwrap();
    let order = matches.get_one::<String>("order").unwrap().parse::<usize>()?;
    let output_path = matches.get_one::<String>("output").unwrap();
    let as_csv = matches.get_flag("csv");

    println!("Loading graphs from {}", input_path);
    let start = Instant::now();
    let graphs = read_am_file(Path::new(input_path), order)?;
    println!(
        "Loaded {} graphs of order {} in {:?}",
        graphs.len(),
        order,
        start.elapsed()
    );

    let sets = enumerate_color_sets(order);
    println!("Enumerated {} configurations", sets.len());

    let pb = ProgressBar::new(graphs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {wide_bar:.green/gray} {pos}/{len} [{elapsed_precise}]({eta})")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message("Computing throttling numbers");

    let compute_start = Instant::now();
    let values: Vec<usize> = graphs
        .par_iter()
        .progress_with(pb)
        .map(|graph| power_throttling_number_with_sets(graph, &sets))
        .collect();
    println!(
        "Computed {} throttling numbers in {:?}",
        values.len(),
        compute_start.elapsed()
    );

    if as_csv {
        let mut writer = csv::Writer::from_path(output_path)?;
        writer.write_record(["graph", "power_throttling_number"])?;
        for (i, value) in values.iter().enumerate() {
            writer.write_record([(i + 1).to_string(), value.to_string()])?;
        }
        writer.flush()?;
    } else {
        write_results(Path::new(output_path), order, &values)?;
    }
    println!("Results written to {}", output_path);

    Ok(())
}
