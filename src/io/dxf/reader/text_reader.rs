//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

/// DXF ASCII text file reader
pub struct DxfTextReader<R: Read + Seek> {
    reader: BufReader<R>,
    line_number: usize,
    peeked_pair: Option<DxfCodePair>,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
    buffer: Vec<u8>,
}

impl<R: Read + Seek> DxfTextReader<R> {
    pub fn new(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_number: 0,
            peeked_pair: None,
            encoding: None,
            buffer: Vec::with_capacity(256),
        }
    }

    /// Line number of the last line read, 1-based
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read one line without its `\n` or `\r\n` terminator
    fn read_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }

        let line = match std::str::from_utf8(&self.buffer) {
            Ok(s) => s.to_string(),
            Err(_) => match self.encoding {
                Some(enc) => enc.decode(&self.buffer).0.into_owned(),
                // Latin-1 maps bytes 0-255 straight to code points
                None => self.buffer.iter().map(|&b| b as char).collect(),
            },
        };
        Ok(Some(line))
    }

    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        // Blank lines where a code is expected are skipped; trailing ones
        // after EOF are common
        let code_line = loop {
            match self.read_line()? {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
                None => return Ok(None),
            }
        };

        let code = code_line.trim().parse::<i32>().map_err(|_| {
            DxfError::Parse(format!(
                "invalid group code at line {}: '{}'",
                self.line_number,
                code_line.trim()
            ))
        })?;
        if !(-5..=1071).contains(&code) {
            return Err(DxfError::InvalidDxfCode(code));
        }

        let value_line = self.read_line()?.ok_or_else(|| {
            DxfError::Parse(format!(
                "unexpected end of input after group code {} at line {}",
                code, self.line_number
            ))
        })?;
        // Text values keep their spaces; record and variable names do not
        let value_line = match code {
            0 | 9 => value_line.trim().to_string(),
            _ => value_line,
        };

        Ok(Some(DxfCodePair::new(code, expand_carets(&value_line))))
    }
}

/// Expand the caret escapes used for control characters in string values
fn expand_carets(value: &str) -> String {
    if !value.contains('^') {
        return value.to_string();
    }
    value
        .replace("^J", "\n")
        .replace("^M", "\r")
        .replace("^I", "\t")
        .replace("^ ", "^")
}

impl<R: Read + Seek> DxfStreamReader for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(pair) = self.peeked_pair.take() {
            return Ok(Some(pair));
        }
        self.read_pair_internal()
    }

    fn peek_code(&mut self) -> Result<Option<i32>> {
        if let Some(ref pair) = self.peeked_pair {
            return Ok(Some(pair.code));
        }
        match self.read_pair_internal()? {
            Some(pair) => {
                let code = pair.code;
                self.peeked_pair = Some(pair);
                Ok(Some(code))
            }
            None => Ok(None),
        }
    }

    fn push_back(&mut self, pair: DxfCodePair) {
        self.peeked_pair = Some(pair);
    }

    fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.line_number = 0;
        self.peeked_pair = None;
        Ok(())
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}
