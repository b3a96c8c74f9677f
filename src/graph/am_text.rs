//! reading and writing the per-order adjacency matrix text files
//!
//! An order file holds every graph of one order. Each graph is announced by a
//! header line containing '.', followed by `order` rows of '0'/'1' characters.

use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind, Result, Write};
use std::path::Path;

use crate::graph::AdjacencyMatrix;

fn malformed(message: String) -> Error {
    Error::new(ErrorKind::InvalidData, message)
}

/// Reads every graph of the given order from an order file.
///
/// A malformed block (short row, foreign character, truncated matrix) fails
/// the whole file rather than yielding a partial batch.
pub fn read_am_file(path: &Path, order: usize) -> Result<Vec<AdjacencyMatrix>> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let mut graphs: Vec<AdjacencyMatrix> = Vec::new();
    while let Some(line) = lines.next() {
        if !line?.contains('.') {
            continue;
        }

        let index = graphs.len() + 1;
        let mut rows: Vec<Vec<u8>> = Vec::with_capacity(order);
        for i in 0..order {
            let row = match lines.next() {
                Some(row) => row?,
                None => {
                    return Err(malformed(format!(
                        "graph {}: matrix truncated at row {}",
                        index, i
                    )))
                }
            };
            let row = row.trim_end();
            if row.len() != order {
                return Err(malformed(format!(
                    "graph {}: row {} has length {}, expected {}",
                    index,
                    i,
                    row.len(),
                    order
                )));
            }

            let mut entries = Vec::with_capacity(order);
            for c in row.chars() {
                match c {
                    '0' => entries.push(0),
                    '1' => entries.push(1),
                    _ => {
                        return Err(malformed(format!(
                            "graph {}: unexpected character {:?} in row {}",
                            index, c, i
                        )))
                    }
                }
            }
            rows.push(entries);
        }
        graphs.push(AdjacencyMatrix::from_rows(&rows));
    }

    Ok(graphs)
}

/// writes the per-order report: a header followed by one `Graph i: v` line per graph
pub fn write_results(path: &Path, order: usize, values: &[usize]) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Power throttling numbers for order {}\n", order)?;
    for (i, value) in values.iter().enumerate() {
        writeln!(file, "Graph {}: {}", i + 1, value)?;
    }
    Ok(())
}
