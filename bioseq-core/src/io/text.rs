use crate::error::{BioError, BioResult};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Overwrite,
    Append,
}

/// All lines of the file, each trimmed, joined without separators.
pub fn read_text_file(path: impl AsRef<Path>) -> BioResult<String> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    read_text_from_reader(reader).inspect(|text| {
        debug!(path = %path.display(), len = text.len(), "read text file");
    })
}

pub fn read_text_from_reader<R: BufRead>(reader: R) -> BioResult<String> {
    let mut out = String::new();
    for line in reader.lines() {
        out.push_str(line?.trim());
    }
    Ok(out)
}

/// Write `payload` and a trailing newline. A missing payload is rejected
/// before the file is touched.
pub fn write_text_file(
    path: impl AsRef<Path>,
    payload: Option<&str>,
    mode: WriteMode,
) -> BioResult<()> {
    let payload = payload.ok_or(BioError::MissingPayload)?;
    let path = path.as_ref();

    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Overwrite => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };
    let mut file = options.open(path)?;
    writeln!(file, "{payload}")?;

    debug!(path = %path.display(), ?mode, len = payload.len(), "wrote text file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bioseq-text-{}-{name}", std::process::id()))
    }

    #[test]
    fn reader_trims_and_joins() {
        let text = read_text_from_reader(Cursor::new("  ATG \nCCC\r\n\n  TAA")).unwrap();
        assert_eq!(text, "ATGCCCTAA");
    }

    #[test]
    fn overwrite_then_append() {
        let path = temp_path("write.txt");
        write_text_file(&path, Some("ATG"), WriteMode::Overwrite).unwrap();
        write_text_file(&path, Some("['M', 'K']"), WriteMode::Append).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ATG\n['M', 'K']\n");

        write_text_file(&path, Some("CCC"), WriteMode::Overwrite).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "CCC\n");
        assert_eq!(read_text_file(&path).unwrap(), "CCC");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_payload_is_rejected() {
        let path = temp_path("missing.txt");
        match write_text_file(&path, None, WriteMode::Overwrite) {
            Err(BioError::MissingPayload) => {}
            other => panic!("expected missing payload error, got {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let path = temp_path("does-not-exist.txt");
        match read_text_file(&path) {
            Err(BioError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
