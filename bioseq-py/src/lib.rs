use pyo3::prelude::*;

mod bio_seq;
mod io;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    bio_seq::register(m)?;
    io::register(m)?;
    Ok(())
}
