use std::env::args;
use std::path::Path;
use std::process;
use std::time::Instant;

use throttling::graph::am_text::{read_am_file, write_results};
use throttling::search::{enumerate_color_sets, power_throttling_number_with_sets};

fn main() {
    let data_dir_arg = args().nth(1).unwrap_or(String::from("data"));
    let data_dir = Path::new(&data_dir_arg);

    for order in 1..10 {
        let input_path = data_dir.join(format!("order{}AM.txt", order));
        let output_path = data_dir.join(format!("order{}PTH.txt", order));

        let start = Instant::now();

        let graphs = match read_am_file(&input_path, order) {
            Ok(graphs) => graphs,
            Err(e) => {
                eprintln!("skipping order {}: {}", order, e);
                continue;
            }
        };

        // one configuration table serves every graph of this order
        let sets = enumerate_color_sets(order);

        let values: Vec<usize> = graphs
            .iter()
            .map(|graph| power_throttling_number_with_sets(graph, &sets))
            .collect();

        if let Err(e) = write_results(&output_path, order, &values) {
            eprintln!("could not write results for order {}: {}", order, e);
            process::exit(1);
        }

        let elapsed = start.elapsed();
        println!(
            "Generated power throttling numbers for all {} graphs on {} vertices in {}.{:03} seconds",
            values.len(),
            order,
            elapsed.as_secs(),
            elapsed.subsec_millis()
        );
    }
}
