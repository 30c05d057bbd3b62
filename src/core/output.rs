use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Text file holding a header followed by one sample per line.
pub struct SampleFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl SampleFile {
    /// Creates or truncates `path`. Nothing is written if this fails.
    pub fn create<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .with_context(|| format!("Error opening file: {}", path.display()))?;
        log::debug!("opened '{}' for writing", path.display());
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn writer(&mut self) -> &mut BufWriter<File> {
        &mut self.writer
    }

    pub fn finish(self) -> anyhow::Result<()> {
        let path = self.path;
        let file = self
            .writer
            .into_inner()
            .map_err(|err| err.into_error())
            .with_context(|| format!("Error writing to file: {}", path.display()))?;
        file.sync_all()
            .with_context(|| format!("Error writing to file: {}", path.display()))?;
        Ok(())
    }
}

pub fn write_header<W: Write>(
    writer: &mut W,
    count: u64,
    bounds: (u32, u32),
) -> std::io::Result<()> {
    writeln!(writer, "{}", count)?;
    writeln!(writer, "{} {}", bounds.0, bounds.1)
}

pub fn write_sample<W: Write>(writer: &mut W, value: u32) -> std::io::Result<()> {
    writeln!(writer, "{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        let mut buf = Vec::new();
        write_header(&mut buf, 5, (1, 4)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "5\n1 4\n");
    }

    #[test]
    fn sample_is_one_line() {
        let mut buf = Vec::new();
        write_sample(&mut buf, 3).unwrap();
        write_sample(&mut buf, 1).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3\n1\n");
    }

    #[test]
    fn create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old contents\nmore\n").unwrap();

        let mut file = SampleFile::create(&path).unwrap();
        write_header(file.writer(), 0, (1, 4)).unwrap();
        file.finish().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0\n1 4\n");
    }

    #[test]
    fn create_fails_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = SampleFile::create(&path).err().unwrap();
        assert!(format!("{:#}", err).contains(&path.display().to_string()));
        assert!(!path.exists());
    }
}
