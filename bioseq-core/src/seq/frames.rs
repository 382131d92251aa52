use crate::error::BioResult;
use crate::seq::bio_seq::BioSeq;
use crate::seq::protein::ProteinSeq;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    ReverseComplement,
}

/// One of the six reading frames: a strand and a codon offset (0, 1 or 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReadingFrame {
    pub strand: Strand,
    pub offset: usize,
}

impl ReadingFrame {
    /// Forward offsets 0, 1, 2 followed by reverse-complement offsets 0, 1, 2.
    pub const ALL: [ReadingFrame; 6] = [
        ReadingFrame::new(Strand::Forward, 0),
        ReadingFrame::new(Strand::Forward, 1),
        ReadingFrame::new(Strand::Forward, 2),
        ReadingFrame::new(Strand::ReverseComplement, 0),
        ReadingFrame::new(Strand::ReverseComplement, 1),
        ReadingFrame::new(Strand::ReverseComplement, 2),
    ];

    pub const fn new(strand: Strand, offset: usize) -> Self {
        Self { strand, offset }
    }
}

impl BioSeq {
    pub fn translate_frame(&self, frame: ReadingFrame) -> BioResult<ProteinSeq> {
        match frame.strand {
            Strand::Forward => self.translate(frame.offset),
            Strand::ReverseComplement => self.reverse_strand()?.translate(frame.offset),
        }
    }

    /// Translations of all six reading frames, in [`ReadingFrame::ALL`] order.
    pub fn reading_frames(&self) -> BioResult<Vec<ProteinSeq>> {
        let reverse = self.reverse_strand()?;

        let mut frames = Vec::with_capacity(ReadingFrame::ALL.len());
        for frame in ReadingFrame::ALL {
            let strand = match frame.strand {
                Strand::Forward => self,
                Strand::ReverseComplement => &reverse,
            };
            frames.push(strand.translate(frame.offset)?);
        }
        Ok(frames)
    }

    fn reverse_strand(&self) -> BioResult<BioSeq> {
        BioSeq::new(self.reverse_complement().into_bytes(), self.biotype())
    }
}
