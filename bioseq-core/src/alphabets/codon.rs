//! Standard genetic code for DNA and RNA codons.
//!
//! Amino acids use their one-letter codes. Stop codons translate to
//! [`STOP`] and the start codon (`ATG`/`AUG`) to [`START`].

use crate::alphabets::Biotype;
use crate::error::{BioError, BioResult};
use std::sync::LazyLock;

pub const CODON_LEN: usize = 3;

/// Reserved token for stop codons.
pub const STOP: u8 = b'_';

/// Token of the start codon (methionine).
pub const START: u8 = b'M';

// Indexed by (b1 << 4) | (b2 << 2) | b3 with A=0, C=1, G=2, T/U=3.
const STANDARD_CODE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV_Y_YSSSS_CWCLFLF";

#[derive(Debug)]
pub struct CodonTable {
    biotype: Biotype,
    base_index: [u8; 256],
}

static DNA_TABLE: LazyLock<CodonTable> = LazyLock::new(|| CodonTable::new(Biotype::Dna, b"ACGT"));
static RNA_TABLE: LazyLock<CodonTable> = LazyLock::new(|| CodonTable::new(Biotype::Rna, b"ACGU"));

pub fn table(biotype: Biotype) -> &'static CodonTable {
    match biotype {
        Biotype::Dna => &DNA_TABLE,
        Biotype::Rna => &RNA_TABLE,
    }
}

impl CodonTable {
    fn new(biotype: Biotype, bases: &[u8; 4]) -> Self {
        let mut base_index = [u8::MAX; 256];
        for (i, &b) in bases.iter().enumerate() {
            base_index[b as usize] = i as u8;
        }
        Self {
            biotype,
            base_index,
        }
    }

    /// Amino acid for `codon`, or `None` if it is not three bases of this
    /// table's alphabet.
    #[inline]
    pub fn lookup(&self, codon: &[u8]) -> Option<u8> {
        let &[b1, b2, b3] = codon else {
            return None;
        };
        let i1 = self.base_index[b1 as usize];
        let i2 = self.base_index[b2 as usize];
        let i3 = self.base_index[b3 as usize];
        if i1 < 4 && i2 < 4 && i3 < 4 {
            let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
            Some(STANDARD_CODE[idx])
        } else {
            None
        }
    }

    pub fn translate(&self, codon: &[u8]) -> BioResult<u8> {
        self.lookup(codon).ok_or_else(|| BioError::InvalidCodon {
            codon: String::from_utf8_lossy(codon).into_owned(),
            biotype: self.biotype,
        })
    }
}
