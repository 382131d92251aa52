use crate::alphabets::codon::{self, CodonTable, CODON_LEN};
use crate::error::BioResult;
use crate::seq::bio_seq::BioSeq;
use crate::seq::protein::ProteinSeq;

use vector_map::VecMap;

impl BioSeq {
    /// Translate non-overlapping codons starting at `offset`. Trailing bases
    /// that do not fill a codon are dropped; an offset past the end yields an
    /// empty translation.
    pub fn translate(&self, offset: usize) -> BioResult<ProteinSeq> {
        translate_bytes(self.as_bytes(), offset, codon::table(self.biotype()))
    }

    /// Relative frequency of each frame-0 codon that encodes `amino_acid`,
    /// rounded to two decimals. Empty when no codon matches.
    pub fn codon_usage(&self, amino_acid: u8) -> BioResult<VecMap<String, f64>> {
        let table = codon::table(self.biotype());

        let mut counts: Vec<(&[u8], usize)> = Vec::new();
        let mut total = 0usize;
        for c in self.as_bytes().chunks_exact(CODON_LEN) {
            if table.translate(c)? != amino_acid {
                continue;
            }
            total += 1;
            match counts.iter_mut().find(|(seen, _)| *seen == c) {
                Some((_, n)) => *n += 1,
                None => counts.push((c, 1)),
            }
        }

        let mut usage = VecMap::new();
        for (c, n) in counts {
            usage.insert(
                String::from_utf8_lossy(c).into_owned(),
                super::round_to(n as f64 / total as f64, 2),
            );
        }
        Ok(usage)
    }
}

pub fn translate_bytes(bytes: &[u8], offset: usize, table: &CodonTable) -> BioResult<ProteinSeq> {
    let frame = bytes.get(offset..).unwrap_or_default();
    let mut out = Vec::with_capacity(frame.len() / CODON_LEN);
    for c in frame.chunks_exact(CODON_LEN) {
        out.push(table.translate(c)?);
    }
    Ok(ProteinSeq::from_bytes_unchecked(out))
}
