use crate::alphabets::{dna, rna, Biotype};
use crate::error::{BioError, BioResult};

use memchr::memchr2_iter;
use rand::Rng;
use std::fmt;
use tracing::debug;
use vector_map::VecMap;

pub const DEFAULT_LABEL: &str = "No label";
pub const RANDOM_LABEL: &str = "Randomly generated sequence";

/// A validated DNA or RNA sequence.
///
/// Symbols are uppercased on construction and every one of them belongs to
/// the alphabet of `biotype`. The sequence is never mutated afterwards; all
/// transformations return new values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BioSeq {
    bytes: Vec<u8>,
    biotype: Biotype,
    label: Box<str>,
}

impl BioSeq {
    pub fn new(symbols: impl Into<Vec<u8>>, biotype: Biotype) -> BioResult<Self> {
        Self::with_label(symbols, biotype, DEFAULT_LABEL)
    }

    pub fn with_label(
        symbols: impl Into<Vec<u8>>,
        biotype: Biotype,
        label: impl Into<Box<str>>,
    ) -> BioResult<Self> {
        let mut bytes = symbols.into();
        bytes.make_ascii_uppercase();

        // everything before `pos` is ASCII, so it is also the char index
        if let Some((pos, _)) = biotype.alphabet().first_invalid(&bytes) {
            return Err(BioError::InvalidChar {
                ch: char_at(&bytes, pos),
                pos,
                biotype,
            });
        }

        Ok(Self {
            bytes,
            biotype,
            label: label.into(),
        })
    }

    /// `length` symbols drawn uniformly from the alphabet of `biotype`.
    pub fn random(length: usize, biotype: Biotype) -> BioResult<Self> {
        Self::random_with_rng(length, biotype, &mut rand::rng())
    }

    pub fn random_with_rng<R: Rng + ?Sized>(
        length: usize,
        biotype: Biotype,
        rng: &mut R,
    ) -> BioResult<Self> {
        let symbols = biotype.alphabet().to_vec();
        let bytes: Vec<u8> = (0..length)
            .map(|_| symbols[rng.random_range(0..symbols.len())])
            .collect();
        debug!(length, %biotype, "generated random sequence");

        Self::with_label(bytes, biotype, RANDOM_LABEL)
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>, biotype: Biotype, label: Box<str>) -> Self {
        Self {
            bytes,
            biotype,
            label,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn as_str(&self) -> &str {
        // validated symbols are ASCII
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn biotype(&self) -> Biotype {
        self.biotype
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label, symbols and biotype on three lines.
    pub fn info(&self) -> String {
        format!(
            "[Label]: {}\n[Sequence]: {}\n[Biotype]: {}",
            self.label, self, self.biotype
        )
    }

    /// Validated copy of `[start, end)`, bounds clamped to the sequence.
    pub fn subsequence(&self, start: usize, end: usize) -> BioResult<Self> {
        let end = end.min(self.bytes.len());
        let start = start.min(end);
        Self::new(&self.bytes[start..end], self.biotype)
    }

    /// Occurrences of every symbol present in the sequence.
    pub fn nucleotide_frequency(&self) -> VecMap<char, usize> {
        let mut counts = [0usize; 256];
        for &b in &self.bytes {
            counts[b as usize] += 1;
        }

        let mut freq = VecMap::new();
        for (b, &n) in counts.iter().enumerate() {
            if n > 0 {
                freq.insert(b as u8 as char, n);
            }
        }
        freq
    }

    /// DNA to RNA. `None` for sequences that are already RNA.
    pub fn transcribe(&self) -> Option<Self> {
        match self.biotype {
            Biotype::Dna => Some(Self::from_bytes_unchecked(
                dna::transcribe(&self.bytes),
                Biotype::Rna,
                self.label.clone(),
            )),
            Biotype::Rna => None,
        }
    }

    pub fn complement(&self) -> Self {
        let out = self
            .bytes
            .iter()
            .map(|&b| self.biotype.complement(b))
            .collect();
        Self::from_bytes_unchecked(out, self.biotype, self.label.clone())
    }

    pub fn reverse_complement(&self) -> Self {
        let out = match self.biotype {
            Biotype::Dna => dna::reverse_complement(&self.bytes),
            Biotype::Rna => rna::reverse_complement(&self.bytes),
        };
        Self::from_bytes_unchecked(out, self.biotype, self.label.clone())
    }

    /// Rounded percentage of C and G symbols; 0 for an empty sequence.
    pub fn gc_content(&self) -> u32 {
        super::percent(count_gc(&self.bytes), self.bytes.len())
    }

    /// GC percentage of consecutive, non-overlapping windows of `k` symbols.
    /// A trailing window shorter than `k` is dropped.
    pub fn gc_content_windowed(&self, k: usize) -> BioResult<Vec<String>> {
        if k == 0 {
            return Err(BioError::InvalidWindow { window: k });
        }

        Ok(self
            .bytes
            .chunks_exact(k)
            .map(|window| format!("{}%", super::percent(count_gc(window), window.len())))
            .collect())
    }
}

impl fmt::Display for BioSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[inline]
fn count_gc(bytes: &[u8]) -> usize {
    memchr2_iter(b'C', b'G', bytes).count()
}

/// Character starting at byte `pos`; U+FFFD when the bytes there are not UTF-8.
fn char_at(bytes: &[u8], pos: usize) -> char {
    let end = bytes.len().min(pos + 4);
    String::from_utf8_lossy(&bytes[pos..end])
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_uppercases_and_keeps_default_label() {
        let s = BioSeq::new("atgc", Biotype::Dna).unwrap();
        assert_eq!(s.as_bytes(), b"ATGC");
        assert_eq!(s.label(), DEFAULT_LABEL);
        assert_eq!(s.biotype(), Biotype::Dna);
    }

    #[test]
    fn new_rejects_foreign_symbol() {
        let err = BioSeq::new("ATXG", Biotype::Dna).unwrap_err();
        match err {
            BioError::InvalidChar { ch, pos, biotype } => {
                assert_eq!(ch, 'X');
                assert_eq!(pos, 2);
                assert_eq!(biotype, Biotype::Dna);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_char_names_the_input_character() {
        let err = BioSeq::new("ATé", Biotype::Dna).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid character 'é' at position 2 for DNA sequence"
        );
        match err {
            BioError::InvalidChar { ch, pos, .. } => {
                assert_eq!(ch, 'é');
                assert_eq!(pos, 2);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }

        match BioSeq::new(vec![b'A', 0xFF], Biotype::Dna) {
            Err(BioError::InvalidChar { ch, pos, .. }) => {
                assert_eq!(ch, char::REPLACEMENT_CHARACTER);
                assert_eq!(pos, 1);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn biotype_decides_alphabet() {
        assert!(BioSeq::new("AUGC", Biotype::Dna).is_err());
        assert!(BioSeq::new("ATGC", Biotype::Rna).is_err());
        assert!(BioSeq::new("AUGC", Biotype::Rna).is_ok());
    }

    #[test]
    fn empty_sequence_allowed() {
        let s = BioSeq::new("", Biotype::Dna).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.gc_content(), 0);
        assert!(s.gc_content_windowed(3).unwrap().is_empty());
    }

    #[test]
    fn info_format() {
        let s = BioSeq::with_label("ATGC", Biotype::Dna, "Test Sequence").unwrap();
        assert_eq!(
            s.info(),
            "[Label]: Test Sequence\n[Sequence]: ATGC\n[Biotype]: DNA"
        );
    }

    #[test]
    fn random_is_valid_and_labelled() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = BioSeq::random_with_rng(50, Biotype::Rna, &mut rng).unwrap();
        assert_eq!(s.len(), 50);
        assert_eq!(s.label(), RANDOM_LABEL);
        assert!(Biotype::Rna.alphabet().is_word(s.as_bytes()));

        let mut rng = StdRng::seed_from_u64(7);
        let again = BioSeq::random_with_rng(50, Biotype::Rna, &mut rng).unwrap();
        assert_eq!(s, again);
    }

    #[test]
    fn random_with_thread_rng() {
        let s = BioSeq::random(30, Biotype::Dna).unwrap();
        assert_eq!(s.len(), 30);
        assert!(Biotype::Dna.alphabet().is_word(s.as_bytes()));
    }

    #[test]
    fn nucleotide_frequency_counts_present_symbols() {
        let s = BioSeq::new("AACGTA", Biotype::Dna).unwrap();
        let freq = s.nucleotide_frequency();
        assert_eq!(freq.len(), 4);
        assert_eq!(freq.get(&'A'), Some(&3));
        assert_eq!(freq.get(&'C'), Some(&1));
        assert_eq!(freq.get(&'G'), Some(&1));
        assert_eq!(freq.get(&'T'), Some(&1));

        let s = BioSeq::new("AAA", Biotype::Dna).unwrap();
        assert_eq!(s.nucleotide_frequency().get(&'C'), None);
    }

    #[test]
    fn transcribe_dna() {
        let s = BioSeq::with_label("ATTGCA", Biotype::Dna, "gene").unwrap();
        let rna = s.transcribe().unwrap();
        assert_eq!(rna.as_bytes(), b"AUUGCA");
        assert_eq!(rna.biotype(), Biotype::Rna);
        assert_eq!(rna.label(), "gene");
    }

    #[test]
    fn transcribe_rna_is_not_applicable() {
        let s = BioSeq::new("AUUGCA", Biotype::Rna).unwrap();
        assert!(s.transcribe().is_none());
    }

    #[test]
    fn reverse_complement_basic() {
        let s = BioSeq::new("ATCG", Biotype::Dna).unwrap();
        assert_eq!(s.reverse_complement().as_bytes(), b"CGAT");
        assert_eq!(s.complement().as_bytes(), b"TAGC");

        let r = BioSeq::new("AUCG", Biotype::Rna).unwrap();
        assert_eq!(r.reverse_complement().as_bytes(), b"CGAU");
    }

    #[test]
    fn gc_content_basic() {
        assert_eq!(BioSeq::new("GCGC", Biotype::Dna).unwrap().gc_content(), 100);
        assert_eq!(BioSeq::new("ATAT", Biotype::Dna).unwrap().gc_content(), 0);
        assert_eq!(BioSeq::new("ATGC", Biotype::Dna).unwrap().gc_content(), 50);
        assert_eq!(BioSeq::new("GAU", Biotype::Rna).unwrap().gc_content(), 33);
    }

    #[test]
    fn gc_content_rounds_half_to_even() {
        // 1/8 = 12.5%, 3/8 = 37.5%
        assert_eq!(BioSeq::new("GAAAAAAA", Biotype::Dna).unwrap().gc_content(), 12);
        assert_eq!(BioSeq::new("GCGAAAAA", Biotype::Dna).unwrap().gc_content(), 38);
    }

    #[test]
    fn gc_content_windowed_steps_by_k() {
        let s = BioSeq::new("GGAATTCCAT", Biotype::Dna).unwrap();
        assert_eq!(s.gc_content_windowed(4).unwrap(), vec!["50%", "50%"]);
        assert_eq!(
            s.gc_content_windowed(5).unwrap(),
            vec!["40%".to_string(), "40%".to_string()]
        );
        assert_eq!(s.gc_content_windowed(10).unwrap(), vec!["40%"]);
        assert!(s.gc_content_windowed(11).unwrap().is_empty());
    }

    #[test]
    fn gc_content_windowed_rejects_zero() {
        let s = BioSeq::new("GGAA", Biotype::Dna).unwrap();
        match s.gc_content_windowed(0) {
            Err(BioError::InvalidWindow { window }) => assert_eq!(window, 0),
            other => panic!("expected invalid window error, got {other:?}"),
        }
    }

    #[test]
    fn subsequence_clamps_and_revalidates() {
        let s = BioSeq::with_label("ATGCGT", Biotype::Dna, "x").unwrap();
        let sub = s.subsequence(1, 4).unwrap();
        assert_eq!(sub.as_bytes(), b"TGC");
        assert_eq!(sub.label(), DEFAULT_LABEL);
        assert_eq!(s.subsequence(4, 100).unwrap().as_bytes(), b"GT");
        assert!(s.subsequence(9, 12).unwrap().is_empty());
    }

    #[test]
    fn display_is_symbols() {
        let s = BioSeq::new("acgu", Biotype::Rna).unwrap();
        assert_eq!(s.to_string(), "ACGU");
        assert_eq!(s.as_str(), "ACGU");
    }
}
