use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use bioseq_core::alphabets::Biotype;
use bioseq_core::error::BioError;
use bioseq_core::io::WriteMode;

pub fn map_bio_err(err: BioError) -> PyErr {
    match err {
        BioError::Io(_) => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

pub fn parse_biotype(value: &str) -> PyResult<Biotype> {
    value.parse().map_err(map_bio_err)
}

pub fn parse_write_mode(value: &str) -> PyResult<WriteMode> {
    match value {
        "w" => Ok(WriteMode::Overwrite),
        "a" => Ok(WriteMode::Append),
        _ => Err(PyValueError::new_err("mode must be 'w' or 'a'")),
    }
}

pub fn single_token(value: &str) -> PyResult<u8> {
    match value.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(PyValueError::new_err(
            "aminoacid must be a single one-letter code",
        )),
    }
}
