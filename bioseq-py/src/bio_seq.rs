#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};

use crate::utils::{self, map_bio_err};
use bioseq_core::seq::bio_seq::{BioSeq, DEFAULT_LABEL};
use bioseq_core::seq::ProteinSeq;

#[pyclass(name = "BioSeq")]
pub struct PyBioSeq {
    pub(crate) inner: BioSeq,
}

fn tokens(protein: &ProteinSeq) -> Vec<char> {
    protein.as_bytes().iter().map(|&b| b as char).collect()
}

#[pymethods]
impl PyBioSeq {
    #[new]
    #[pyo3(signature = (seq="ATCG", r#type="DNA", label=DEFAULT_LABEL))]
    fn new(seq: &str, r#type: &str, label: &str) -> PyResult<Self> {
        let biotype = utils::parse_biotype(r#type)?;
        let inner = BioSeq::with_label(seq, biotype, label).map_err(map_bio_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn seq(&self) -> &str {
        self.inner.as_str()
    }

    #[getter]
    fn label(&self) -> &str {
        self.inner.label()
    }

    fn get_sequence_info(&self) -> String {
        self.inner.info()
    }

    fn get_bio_type(&self) -> &'static str {
        self.inner.biotype().as_str()
    }

    #[pyo3(signature = (length=30, r#type="DNA"))]
    fn generate_random_seq(&mut self, length: usize, r#type: &str) -> PyResult<()> {
        let biotype = utils::parse_biotype(r#type)?;
        self.inner = BioSeq::random(length, biotype).map_err(map_bio_err)?;
        Ok(())
    }

    fn nucleotide_frequency<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for (symbol, count) in self.inner.nucleotide_frequency().iter() {
            dict.set_item(*symbol, *count)?;
        }
        Ok(dict)
    }

    /// `None` when the sequence is not DNA.
    fn transcription(&self) -> Option<String> {
        self.inner.transcribe().map(|rna| rna.to_string())
    }

    fn reverse_complement(&self) -> String {
        self.inner.reverse_complement().to_string()
    }

    fn gc_content(&self) -> u32 {
        self.inner.gc_content()
    }

    #[pyo3(signature = (k=20))]
    fn gc_content_sub_seq(&self, k: usize) -> PyResult<Vec<String>> {
        self.inner.gc_content_windowed(k).map_err(map_bio_err)
    }

    #[pyo3(signature = (init_pos=0))]
    fn translate_seq(&self, init_pos: usize) -> PyResult<Vec<char>> {
        let protein = self.inner.translate(init_pos).map_err(map_bio_err)?;
        Ok(tokens(&protein))
    }

    fn codon_usage<'py>(&self, py: Python<'py>, aminoacid: &str) -> PyResult<Bound<'py, PyDict>> {
        let token = utils::single_token(aminoacid)?;
        let usage = self.inner.codon_usage(token).map_err(map_bio_err)?;

        let dict = PyDict::new_bound(py);
        for (codon, freq) in usage.iter() {
            dict.set_item(codon.as_str(), *freq)?;
        }
        Ok(dict)
    }

    fn gen_reading_frames(&self) -> PyResult<Vec<Vec<char>>> {
        let frames = self.inner.reading_frames().map_err(map_bio_err)?;
        Ok(frames.iter().map(tokens).collect())
    }

    #[pyo3(signature = (start_read_pos=0, end_read_pos=0, ordered=false))]
    fn all_proteins_from_orfs(
        &self,
        start_read_pos: usize,
        end_read_pos: usize,
        ordered: bool,
    ) -> PyResult<Vec<String>> {
        self.inner
            .all_proteins_from_orfs(start_read_pos, end_read_pos, ordered)
            .map_err(map_bio_err)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "BioSeq({:?}, type={:?}, label={:?})",
            self.inner.as_str(),
            self.inner.biotype().as_str(),
            self.inner.label()
        )
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBioSeq>()?;
    Ok(())
}
