use crate::alphabets::Biotype;
use crate::error::{BioError, BioResult};
use crate::seq::bio_seq::BioSeq;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use tracing::debug;
use vector_map::VecMap;

/// Header line (verbatim, trimmed) to concatenated sequence, in file order.
pub type FastaMap = VecMap<String, String>;

/// Any line containing '>' starts a record; every other non-blank line is
/// appended to the current record. Sequence lines are not checked against
/// an alphabet. A repeated header starts its record over.
pub fn read_fasta_from_reader<R: BufRead>(reader: R) -> BioResult<FastaMap> {
    let mut records = FastaMap::new();
    let mut current: Option<(String, String)> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.contains('>') {
            if let Some((header, seq)) = current.take() {
                records.insert(header, seq);
            }
            current = Some((line.to_string(), String::new()));
            continue;
        }

        match current.as_mut() {
            Some((_, seq)) => seq.push_str(line),
            None => {
                return Err(BioError::FastaFormat {
                    msg: "sequence line before first header",
                    line: idx + 1,
                })
            }
        }
    }

    if let Some((header, seq)) = current {
        records.insert(header, seq);
    }
    Ok(records)
}

pub fn read_fasta(path: impl AsRef<Path>) -> BioResult<FastaMap> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let records = read_fasta_from_reader(reader)?;
    debug!(path = %path.display(), records = records.len(), "loaded fasta");
    Ok(records)
}

pub fn read_fasta_from_bytes(data: &[u8]) -> BioResult<FastaMap> {
    read_fasta_from_reader(BufReader::new(Cursor::new(data)))
}

/// Validate every record as a `biotype` sequence labelled with its header.
pub fn to_sequences(records: &FastaMap, biotype: Biotype) -> BioResult<Vec<BioSeq>> {
    records
        .iter()
        .map(|(header, seq)| {
            let label = header.trim_start_matches('>').trim();
            BioSeq::with_label(seq.as_bytes(), biotype, label)
        })
        .collect()
}

pub fn read_fasta_sequences(path: impl AsRef<Path>, biotype: Biotype) -> BioResult<Vec<BioSeq>> {
    to_sequences(&read_fasta(path)?, biotype)
}
