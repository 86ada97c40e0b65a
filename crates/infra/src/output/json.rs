// crates/infra/src/output/json.rs
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use collect_files_ports::sink::RecordSink;
use collect_files_shared_kernel::{FileRecord, InfrastructureError, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::persistence::{AtomicFile, FileWriter};

const INDENT: &[u8] = b"    ";

/// Character set of the JSON text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Charset {
    /// Non-ASCII characters are written as raw UTF-8.
    #[default]
    Utf8,
    /// Everything outside printable ASCII is written as `\uXXXX` escapes.
    Ascii,
}

impl Charset {
    pub fn from_ascii_flag(ascii: bool) -> Self {
        if ascii { Self::Ascii } else { Self::Utf8 }
    }
}

/// Serialize `value` as pretty JSON with 4-space indentation.
pub fn encode_pretty<T: Serialize + ?Sized>(value: &T, charset: Charset) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let pretty = PrettyFormatter::with_indent(INDENT);
    match charset {
        Charset::Utf8 => value.serialize(&mut Serializer::with_formatter(&mut buf, pretty))?,
        Charset::Ascii => value.serialize(&mut Serializer::with_formatter(&mut buf, AsciiFormatter(pretty)))?,
    }
    Ok(buf)
}

// Pretty layout with string fragments restricted to printable ASCII. Characters outside
// the BMP become surrogate pairs.
struct AsciiFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Write `records` to `output` as one JSON array, replacing any existing file.
pub fn save(records: &[FileRecord], output: &Path, charset: Charset) -> Result<()> {
    let data = encode_pretty(records, charset)?;
    FileWriter::atomic_write(output, &data).map_err(|source| write_error(output, source))?;
    Ok(())
}

fn write_error(output: &Path, source: io::Error) -> collect_files_shared_kernel::CollectFilesError {
    InfrastructureError::FileWrite { path: output.to_path_buf(), source }.into()
}

/// Holds records in memory and writes them in one go on [`RecordSink::finish`].
#[derive(Debug)]
pub struct JsonFileSink {
    output: PathBuf,
    charset: Charset,
    records: Vec<FileRecord>,
}

impl JsonFileSink {
    pub fn new(output: impl Into<PathBuf>, charset: Charset) -> Self {
        Self { output: output.into(), charset, records: Vec::new() }
    }
}

impl RecordSink for JsonFileSink {
    fn accept(&mut self, record: FileRecord) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        save(&self.records, &self.output, self.charset)
    }
}

/// Writes each record as soon as it arrives.
///
/// The bytes on disk are the same as [`save`] would produce for the same sequence. The
/// destination only changes when [`RecordSink::finish`] commits the temporary file.
#[derive(Debug)]
pub struct StreamingJsonSink {
    output: PathBuf,
    charset: Charset,
    file: Option<AtomicFile>,
    written: usize,
}

impl StreamingJsonSink {
    pub fn create(output: impl Into<PathBuf>, charset: Charset) -> Result<Self> {
        let output = output.into();
        let file = AtomicFile::create(&output).map_err(|source| write_error(&output, source))?;
        Ok(Self { output, charset, file: Some(file), written: 0 })
    }

    fn file(&mut self) -> Result<&mut AtomicFile> {
        match self.file.as_mut() {
            Some(file) => Ok(file),
            None => Err(InfrastructureError::OutputError {
                message: format!("{} was already finished", self.output.display()),
                source: None,
            }
            .into()),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let output = self.output.clone();
        self.file()?.write_all(bytes).map_err(|source| write_error(&output, source))
    }
}

impl RecordSink for StreamingJsonSink {
    fn accept(&mut self, record: FileRecord) -> Result<()> {
        let element = encode_pretty(&record, self.charset)?;
        let mut chunk = Vec::with_capacity(element.len() + 64);
        chunk.extend_from_slice(if self.written == 0 { b"[\n" } else { b",\n" });
        // Serialized strings escape newlines, so every newline here is structural.
        for (i, line) in element.split(|b| *b == b'\n').enumerate() {
            if i > 0 {
                chunk.push(b'\n');
            }
            chunk.extend_from_slice(INDENT);
            chunk.extend_from_slice(line);
        }
        self.write_bytes(&chunk)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let closing: &[u8] = if self.written == 0 { b"[]" } else { b"\n]" };
        self.write_bytes(closing)?;
        let output = self.output.clone();
        match self.file.take() {
            Some(file) => file.commit().map_err(|source| write_error(&output, source)),
            None => Ok(()),
        }
    }

    fn owned_paths(&self) -> Vec<PathBuf> {
        self.file.iter().map(|file| file.temp_path().to_path_buf()).collect()
    }
}
