//! Streaming line sources.
//!
//! A [`LineSource`] owns its reader (and, for `.gz` paths, the gzip decoder
//! wrapped around the file). The file handle is released when the source is
//! dropped, so every exit path of a load closes it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::error::{DecodeError, IngestError, Result};

/// Returns true when the path's extension marks gzip content.
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Iterator over the lines of a data file.
///
/// Yields `Err` at most once; after an error or end of input the source is
/// exhausted. A line that is not valid UTF-8 is a decode error carrying its
/// line number.
pub struct LineSource {
    reader: Box<dyn BufRead>,
    origin: PathBuf,
    line_number: usize,
    done: bool,
}

impl LineSource {
    /// Open a file, decompressing it when the extension is `.gz`.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
        let reader: Box<dyn BufRead> = if is_gzip_path(path) {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(Self {
            reader,
            origin: path.to_path_buf(),
            line_number: 0,
            done: false,
        })
    }

    /// Stream lines from any buffered reader.
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            origin: PathBuf::from("<reader>"),
            line_number: 0,
            done: false,
        }
    }

    /// Path (or placeholder) this source reads from.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// One-based number of the last line returned, zero before the first.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl Iterator for LineSource {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line_number += 1;
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                match String::from_utf8(buf) {
                    Ok(line) => Some(Ok(line)),
                    Err(err) => {
                        self.done = true;
                        Some(Err(IngestError::Decode {
                            line: self.line_number,
                            source: DecodeError::InvalidEncoding {
                                valid_up_to: err.utf8_error().valid_up_to(),
                            },
                        }))
                    }
                }
            }
            Err(e) => {
                self.done = true;
                Some(Err(IngestError::io(&self.origin, e)))
            }
        }
    }
}

impl std::iter::FusedIterator for LineSource {}

impl std::fmt::Debug for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSource")
            .field("origin", &self.origin)
            .field("line_number", &self.line_number)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
