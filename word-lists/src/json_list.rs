use crate::prelude::*;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io;

/// Pretty formatter writing every non-ASCII char as a `\uXXXX` escape
/// (UTF-16 surrogate pairs above the BMP), so output files are plain ASCII.
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
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
                continue;
            }
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
        }
        Ok(())
    }
}

/// Writes `words` as a JSON array indented with 2 spaces, replacing any existing file.
pub fn write_json_list(path: impl AsRef<Path>, words: &[String]) -> Result<(), WordListError> {
    let path = path.as_ref();
    let mut json = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut json, AsciiFormatter(PrettyFormatter::with_indent(b"  ")));
    words.serialize(&mut serializer)?;
    std::fs::write(path, json)?;
    trace!("Wrote {} words to {}", words.len(), path.display());
    Ok(())
}

pub fn read_json_list(path: impl AsRef<Path>) -> Result<Vec<String>, WordListError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        write_json_list(&path, &[String::from("dog"), String::from("cat")]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\n  \"dog\",\n  \"cat\"\n]");

        write_json_list(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn non_ascii_is_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        let words = vec![String::from("résumé"), String::from("a\"b"), String::from("𝒜bc")];
        write_json_list(&path, &words).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[\n  \"r\\u00e9sum\\u00e9\",\n  \"a\\\"b\",\n  \"\\ud835\\udc9cbc\"\n]");
        assert!(written.is_ascii());
        assert_eq!(read_json_list(&path).unwrap(), words);
    }

    #[test]
    fn rejects_non_string_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbers.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(read_json_list(&path), Err(WordListError::Json(_))));
    }
}
