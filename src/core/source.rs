//! Line sources: stdin, plain files and gzip-compressed files.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
};

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::core::error::PlotError;

const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Supplier of text lines, one at a time, without line terminators.
///
/// `Ok(None)` marks the end of the stream. Each call blocks until a line is
/// available.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<&str>, PlotError>;
}

/// [`LineSource`] over any buffered reader, reusing one line buffer.
///
/// Lines that are not valid UTF-8 are skipped and counted, not fatal.
pub struct LineReader<R> {
    rdr: R,
    buf: Vec<u8>,
    line_no: usize,
    invalid: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: Vec::with_capacity(256),
            line_no: 0,
            invalid: 0,
        }
    }

    /// Number of lines read so far, skipped ones included.
    #[inline]
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Number of lines dropped for not being valid UTF-8.
    #[inline]
    pub fn invalid_lines(&self) -> usize {
        self.invalid
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> Result<Option<&str>, PlotError> {
        loop {
            self.buf.clear();
            let n = self
                .rdr
                .read_until(b'\n', &mut self.buf)
                .map_err(|source| PlotError::Read {
                    line: self.line_no,
                    source,
                })?;
            if n == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            if self.buf.last() == Some(&b'\n') {
                self.buf.pop();
            }
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
            if std::str::from_utf8(&self.buf).is_ok() {
                break;
            }
            self.invalid += 1;
            debug!("line {}: not valid UTF-8, skipped", self.line_no);
        }
        // checked in the loop
        Ok(std::str::from_utf8(&self.buf).ok())
    }
}

/// Open `path` for line reading; `None` or `-` means stdin, `*.gz` is
/// decompressed on the fly.
pub fn open_input(path: Option<&Path>) -> Result<LineReader<Box<dyn BufRead>>, PlotError> {
    let rdr: Box<dyn BufRead> = match path {
        None => Box::new(BufReader::with_capacity(BUF_CAP, io::stdin())),
        Some(p) if p.as_os_str() == "-" => {
            Box::new(BufReader::with_capacity(BUF_CAP, io::stdin()))
        }
        Some(p) => open_file(p)?,
    };
    Ok(LineReader::new(rdr))
}

/// Buffered reader over a possibly gzip-compressed file.
pub fn open_file(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let is_gz = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));
    Ok(if is_gz {
        Box::new(BufReader::with_capacity(
            BUF_CAP,
            Box::new(MultiGzDecoder::new(file)) as Box<dyn Read>,
        ))
    } else {
        Box::new(BufReader::with_capacity(BUF_CAP, file))
    })
}
