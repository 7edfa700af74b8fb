//! DXF file reader

mod record;
mod section_reader;
mod stream_reader;
mod text_reader;

pub use stream_reader::{DxfCodePair, DxfStreamReader, GroupCodeValueType};
pub use text_reader::DxfTextReader;

use section_reader::SectionReader;

use super::code_page::encoding_from_code_page;
use crate::assembler::{AssemblerConfiguration, EntityAssembler};
use crate::drawing::Drawing;
use crate::error::{DxfError, Result};
use crate::events::EventReceiver;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// First version whose text is always UTF-8 (AutoCAD 2007)
const UTF8_VERSION: &str = "AC1021";

/// Configuration for the DXF reader.
#[derive(Debug, Clone, Default)]
pub struct DxfReaderConfiguration {
    /// When `true`, a malformed stream ends the read early instead of
    /// failing it: the error is recorded as a notification and the entities
    /// assembled so far are returned.
    ///
    /// Default: `false` (strict mode, errors propagate).
    pub failsafe: bool,

    /// Configuration of the assembler used by [`DxfReader::read`].
    pub assembler: AssemblerConfiguration,
}

/// DXF file reader
pub struct DxfReader {
    reader: Box<dyn DxfStreamReader>,
    version: Option<String>,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a new DXF reader from any reader
    pub fn from_reader<R: Read + Seek + 'static>(reader: R) -> Result<Self> {
        let mut buf_reader = BufReader::new(reader);
        if Self::is_binary(&mut buf_reader)? {
            return Err(DxfError::InvalidFormat(
                "binary DXF is not supported".to_string(),
            ));
        }

        Ok(Self {
            reader: Box::new(DxfTextReader::new(buf_reader)),
            version: None,
            config: DxfReaderConfiguration::default(),
        })
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Check if a stream contains binary DXF data
    fn is_binary<R: Read + Seek>(reader: &mut R) -> Result<bool> {
        const SENTINEL: &[u8] = b"AutoCAD Binary DXF";
        let mut buffer = [0u8; SENTINEL.len()];

        let mut filled = 0;
        while filled < buffer.len() {
            match reader.read(&mut buffer[filled..])? {
                0 => break,
                n => filled += n,
            }
        }

        reader.seek(SeekFrom::Start(0))?;
        Ok(filled == SENTINEL.len() && buffer == SENTINEL)
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// `$ACADVER` of the file, once a read has started
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Read the file and assemble its entities
    pub fn read(mut self) -> Result<Drawing> {
        let mut assembler = EntityAssembler::with_configuration(self.config.assembler.clone());
        match self.read_into(&mut assembler) {
            Ok(()) => {}
            Err(e) if self.config.failsafe => {
                assembler.report_error(format!("read stopped early: {e}"));
            }
            Err(e) => return Err(e),
        }
        Ok(assembler.finish())
    }

    /// Drive any receiver with the file's records.
    ///
    /// `end_of_stream` is called once after the EOF marker or the end of
    /// input. It is not called when an error is returned.
    pub fn read_into<R: EventReceiver + ?Sized>(&mut self, receiver: &mut R) -> Result<()> {
        self.read_version()?;
        SectionReader::new(&mut self.reader, receiver).read_sections()?;
        receiver.end_of_stream();
        Ok(())
    }

    /// Pre-scan the HEADER section for $ACADVER and $DWGCODEPAGE.
    ///
    /// After this call the reader is reset to the beginning. If the version
    /// is older than AC1021 and a code page is found, the stream reader's
    /// encoding is set accordingly.
    fn read_version(&mut self) -> Result<()> {
        let mut code_page: Option<String> = None;
        let mut in_header = false;

        while let Some(pair) = self.reader.read_pair()? {
            match pair.code {
                2 if pair.value_string.trim() == "HEADER" => in_header = true,
                0 if in_header && pair.value_string == "ENDSEC" => break,
                // No HEADER in this file
                0 if !in_header && pair.value_string != "SECTION" => break,
                9 if in_header => {
                    let name = pair.value_string;
                    let Some(value) = self.reader.read_pair()? else {
                        break;
                    };
                    let value = value.value_string.trim().to_string();
                    match name.as_str() {
                        "$ACADVER" => self.version = Some(value),
                        "$DWGCODEPAGE" => code_page = Some(value),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let pre_utf8 = self
            .version
            .as_deref()
            .map_or(true, |v| v < UTF8_VERSION);
        if let (true, Some(cp)) = (pre_utf8, code_page) {
            if let Some(encoding) = encoding_from_code_page(&cp) {
                debug!(code_page = %cp, encoding = encoding.name(), "decoding non-UTF-8 text");
                self.reader.set_encoding(encoding);
            }
        }

        self.reader.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(text: &str) -> DxfReader {
        DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec())).unwrap()
    }

    #[test]
    fn test_version_prescan() {
        let mut r = reader(
            "0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015\n9\n$DWGCODEPAGE\n3\nANSI_1252\n0\nENDSEC\n0\nEOF\n",
        );
        r.read_version().unwrap();
        assert_eq!(r.version(), Some("AC1015"));
        // Reset to the start
        assert!(r.reader.read_pair().unwrap().unwrap().is_record("SECTION"));
    }

    #[test]
    fn test_binary_is_rejected() {
        let data = b"AutoCAD Binary DXF\r\n\x1a\x00".to_vec();
        let result = DxfReader::from_reader(Cursor::new(data));
        assert!(matches!(result, Err(DxfError::InvalidFormat(_))));
    }

    #[test]
    fn test_failsafe_returns_partial_drawing() {
        let text = "0\nSECTION\n2\nENTITIES\n0\nPOINT\n10\n1\n20\n2\n0\nLINE\nxx\n";
        let strict = reader(text).read();
        assert!(matches!(strict, Err(DxfError::Parse(_))));

        let drawing = reader(text)
            .with_configuration(DxfReaderConfiguration {
                failsafe: true,
                ..Default::default()
            })
            .read()
            .unwrap();
        assert_eq!(drawing.len(), 1);
        assert_eq!(
            drawing
                .notifications()
                .count_of(crate::notification::NotificationType::Error),
            1
        );
    }
}
