//! Line-by-line reading that tolerates stray non-UTF-8 bytes.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use elotracker_core::util::strip_cr;

use crate::error::ImportError;

/// Lines of a text file, numbered from 1, with trailing `\r` removed.
///
/// Invalid UTF-8 is replaced rather than failing the file; rating exports
/// occasionally carry Latin-1 names.
pub struct SourceLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
}

impl SourceLines<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, ImportError> {
        let file = File::open(path).map_err(|e| ImportError::io(path, e))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> SourceLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = std::io::Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                let text = String::from_utf8_lossy(&self.buf);
                let text = text.strip_suffix('\n').unwrap_or(&text);
                Some(Ok((self.line_no, strip_cr(text).to_string())))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_lines_and_strips_crlf() {
        let input = b"first\r\nsecond\nthird";
        let lines: Vec<_> = SourceLines::new(&input[..])
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            lines,
            vec![
                (1, "first".to_string()),
                (2, "second".to_string()),
                (3, "third".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let input = b"M\xfcller\n";
        let (_, line) = SourceLines::new(&input[..]).next().unwrap().unwrap();
        assert_eq!(line, "M\u{fffd}ller");
    }
}
