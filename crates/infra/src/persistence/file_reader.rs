use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Stream the file's lines (terminators removed) into `visit`.
    ///
    /// The file is closed when this returns, on success or error.
    pub fn for_each_line(path: &Path, visit: &mut dyn FnMut(&str)) -> std::io::Result<()> {
        let mut reader = Self::open_buffered(path)?;
        let mut buf = String::new();
        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                return Ok(());
            }
            visit(buf.trim_end_matches(['\n', '\r']));
        }
    }
}
