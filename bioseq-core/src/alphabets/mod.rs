pub mod codon;
pub mod dna;
pub mod rna;

use crate::error::BioError;
use bit_set::BitSet;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Nucleic acid classification of a sequence. Picks the alphabet, the
/// complement pairing and the codon table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biotype {
    Dna,
    Rna,
}

impl Biotype {
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Biotype::Dna => dna::alphabet(),
            Biotype::Rna => rna::alphabet(),
        }
    }

    #[inline]
    pub fn complement(self, a: u8) -> u8 {
        match self {
            Biotype::Dna => dna::complement(a),
            Biotype::Rna => rna::complement(a),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Biotype::Dna => "DNA",
            Biotype::Rna => "RNA",
        }
    }
}

impl fmt::Display for Biotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Biotype {
    type Err = BioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("dna") {
            Ok(Biotype::Dna)
        } else if s.eq_ignore_ascii_case("rna") {
            Ok(Biotype::Rna)
        } else {
            Err(BioError::UnknownBiotype {
                name: s.to_string(),
            })
        }
    }
}

#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter().all(|c| self.contains(*c.borrow()))
    }

    /// Position and value of the first byte outside the alphabet.
    pub fn first_invalid(&self, text: &[u8]) -> Option<(usize, u8)> {
        text.iter()
            .position(|&b| !self.contains(b))
            .map(|pos| (pos, text[pos]))
    }

    /// Symbols in ascending byte order.
    pub fn to_vec(&self) -> Vec<u8> {
        self.symbols.iter().map(|a| a as u8).collect()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
