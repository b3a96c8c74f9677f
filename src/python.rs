//! Python bindings for the throttling library
//! This module is only compiled when the "python" feature is enabled

use numpy::PyReadonlyArray2;
use pyo3::prelude::*;

use crate::graph::AdjacencyMatrix;
use crate::search;

fn matrix_from_array(data: PyReadonlyArray2<u8>) -> PyResult<AdjacencyMatrix> {
    let array = data.as_array();
    let n = array.shape()[0];
    if array.shape()[1] != n {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Adjacency matrix must be square, got {}x{}",
            array.shape()[0],
            array.shape()[1]
        )));
    }
    if array.iter().any(|&entry| entry > 1) {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
            "Adjacency entries must be 0 or 1".to_string(),
        ));
    }

    // Create a contiguous copy of the data
    let entries: Vec<u8> = array.iter().copied().collect();
    Ok(AdjacencyMatrix::new(entries.into_boxed_slice(), n))
}

#[pyclass]
pub struct PyAdjacencyMatrix {
    graph: AdjacencyMatrix,
}

#[pymethods]
impl PyAdjacencyMatrix {
    #[new]
    fn new(data: PyReadonlyArray2<u8>) -> PyResult<Self> {
        Ok(PyAdjacencyMatrix {
            graph: matrix_from_array(data)?,
        })
    }

    #[getter]
    fn get_n(&self) -> usize {
        self.graph.n
    }

    fn degree(&self, i: usize) -> PyResult<usize> {
        if i >= self.graph.n {
            return Err(PyErr::new::<pyo3::exceptions::PyIndexError, _>(format!(
                "Vertex {} out of bounds for graph with {} vertices",
                i, self.graph.n
            )));
        }
        Ok(self.graph.degree(i))
    }

    fn has_self_loops(&self) -> bool {
        self.graph.has_self_loops()
    }

    fn power_throttling_number(&self) -> usize {
        search::power_throttling_number(&self.graph)
    }
}

/// computes the power throttling number of a 0/1 adjacency matrix
#[pyfunction]
fn power_throttling_number(data: PyReadonlyArray2<u8>) -> PyResult<usize> {
    let graph = matrix_from_array(data)?;
    Ok(search::power_throttling_number(&graph))
}

/// Python module for the throttling library
#[pymodule]
pub fn throttling(_py: Python<'_>, m: &Bound<PyModule>) -> PyResult<()> {
    m.add_class::<PyAdjacencyMatrix>()?;
    m.add_function(wrap_pyfunction!(power_throttling_number, m)?)?;
    Ok(())
}
