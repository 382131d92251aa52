pub mod fasta;
pub mod text;

pub use fasta::{read_fasta, read_fasta_sequences, FastaMap};
pub use text::{read_text_file, write_text_file, WriteMode};
