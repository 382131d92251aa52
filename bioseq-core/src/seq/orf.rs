//! Candidate proteins from open reading frames.
//!
//! A protein opens at every start marker and closes at the next stop marker
//! in the same frame. Starts seen before a stop are nested: each opens its
//! own accumulator and all open accumulators grow in parallel. Accumulators
//! still open when the frame ends never reached a stop and are dropped.

use crate::alphabets::codon::{START, STOP};
use crate::error::BioResult;
use crate::seq::bio_seq::BioSeq;

use std::cmp::Reverse;
use tracing::trace;

/// Single-pass scanner over amino-acid tokens.
#[derive(Clone, Debug, Default)]
pub struct OrfScanner {
    open: Vec<String>,
    proteins: Vec<String>,
}

impl OrfScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: u8) {
        if token == STOP {
            // flush in opening order
            self.proteins.append(&mut self.open);
            return;
        }

        if token == START {
            self.open.push(String::new());
        }
        for protein in &mut self.open {
            protein.push(token as char);
        }
    }

    pub fn extend<I: IntoIterator<Item = u8>>(&mut self, tokens: I) {
        for token in tokens {
            self.push(token);
        }
    }

    /// Accumulators waiting for a stop marker.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Proteins completed so far.
    pub fn completed(&self) -> &[String] {
        &self.proteins
    }

    pub fn finish(self) -> Vec<String> {
        if !self.open.is_empty() {
            trace!(
                discarded = self.open.len(),
                "dropping open reading frames without a stop"
            );
        }
        self.proteins
    }
}

pub fn proteins_from_frame(tokens: &[u8]) -> Vec<String> {
    let mut scanner = OrfScanner::new();
    scanner.extend(tokens.iter().copied());
    scanner.finish()
}

impl BioSeq {
    /// Candidate proteins over all six reading frames, frame by frame.
    ///
    /// When `end > start` only `[start, end)` is scanned. With `ordered`
    /// the result is stable-sorted longest first.
    pub fn all_proteins_from_orfs(
        &self,
        start: usize,
        end: usize,
        ordered: bool,
    ) -> BioResult<Vec<String>> {
        let frames = if end > start {
            self.subsequence(start, end)?.reading_frames()?
        } else {
            self.reading_frames()?
        };

        let mut proteins: Vec<String> = frames
            .iter()
            .flat_map(|frame| frame.proteins())
            .collect();
        trace!(count = proteins.len(), "collected proteins from reading frames");

        if ordered {
            proteins.sort_by_key(|p| Reverse(p.len()));
        }
        Ok(proteins)
    }
}
