pub mod alphabets;
pub mod error;
pub mod io;
pub mod seq;

pub use alphabets::Biotype;
pub use error::{BioError, BioResult};
pub use seq::{BioSeq, ProteinSeq};
