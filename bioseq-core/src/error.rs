use crate::alphabets::Biotype;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid character '{ch}' at position {pos} for {biotype} sequence")]
    InvalidChar {
        ch: char,
        pos: usize,
        biotype: Biotype,
    },

    #[error("unknown biotype '{name}' (expected DNA or RNA)")]
    UnknownBiotype { name: String },

    #[error("invalid window size: {window}")]
    InvalidWindow { window: usize },

    #[error("no {biotype} codon table entry for '{codon}'")]
    InvalidCodon { codon: String, biotype: Biotype },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("write payload is missing")]
    MissingPayload,

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type BioResult<T> = Result<T, BioError>;
