#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};

use crate::utils::{self, map_bio_err};
use bioseq_core::io::{fasta, text};

#[pyfunction]
fn read_text_file(path: &str) -> PyResult<String> {
    text::read_text_file(path).map_err(map_bio_err)
}

#[pyfunction]
#[pyo3(signature = (path, seq, mode="w"))]
fn write_text_file(path: &str, seq: Option<String>, mode: &str) -> PyResult<()> {
    let mode = utils::parse_write_mode(mode)?;
    text::write_text_file(path, seq.as_deref(), mode).map_err(map_bio_err)
}

#[pyfunction]
fn read_fasta<'py>(py: Python<'py>, path: &str) -> PyResult<Bound<'py, PyDict>> {
    let records = fasta::read_fasta(path).map_err(map_bio_err)?;

    let dict = PyDict::new_bound(py);
    for (header, seq) in records.iter() {
        dict.set_item(header.as_str(), seq.as_str())?;
    }
    Ok(dict)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_text_file, m)?)?;
    m.add_function(wrap_pyfunction!(write_text_file, m)?)?;
    m.add_function(wrap_pyfunction!(read_fasta, m)?)?;
    Ok(())
}
