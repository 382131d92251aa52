use crate::alphabets::Alphabet;
use std::sync::LazyLock;

static ALPHABET: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::new(b"ACGT"));

/// Unambiguous, uppercase DNA bases.
pub fn alphabet() -> &'static Alphabet {
    &ALPHABET
}

static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0; 256];
    comp.iter_mut().enumerate().for_each(|(v, a)| {
        *a = v as u8;
    });
    b"ACGT"
        .iter()
        .zip(b"TGCA".iter())
        .for_each(|(&a, &b)| comp[a as usize] = b);
    comp
});

#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

pub fn reverse_complement(text: &[u8]) -> Vec<u8> {
    text.iter().rev().map(|&a| complement(a)).collect()
}

/// T -> U, everything else unchanged.
pub fn transcribe(text: &[u8]) -> Vec<u8> {
    text.iter()
        .map(|&b| if b == b'T' { b'U' } else { b })
        .collect()
}
