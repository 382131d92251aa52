pub mod bio_seq;
pub mod frames;
pub mod orf;
pub mod protein;
pub mod translate;

pub use bio_seq::BioSeq;
pub use frames::{ReadingFrame, Strand};
pub use orf::{proteins_from_frame, OrfScanner};
pub use protein::ProteinSeq;


/// `part / total` as a whole percentage, ties rounded to even.
/// An empty total counts as 0%.
pub(crate) fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round_ties_even() as u32
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}
