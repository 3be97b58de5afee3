//! Provides the `contents_of` function, which returns a `Vec<u8>` containing
//! the entire contents of one operand file. Both operands are small enough to
//! read whole, so there's a single code path for translating UTF16 files into
//! UTF8.
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Return the contents of the file at `path` as a `Vec<u8>`, translated to
/// UTF-8 if the file began with a UTF-16 Byte Order Mark.
pub fn contents_of(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .with_context(|| format!("Can't read file: {}", path.display()))
        .map(decode_if_utf16)
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning of `candidate`.
/// Otherwise return `candidate` unchanged
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // Translate UTF16 to UTF8
    // Note: `decode_without_bom_handling` will change malformed sequences to the
    // Unicode REPLACEMENT CHARACTER. Should we report an error instead?
    //
    // "with BOM handling" means that the UTF-16 BOM is translated to a UTF-8 BOM
    //
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    return candidate;
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    const UTF8_BOM: &str = "\u{FEFF}";

    fn abominate(expected: &str) -> String {
        UTF8_BOM.to_string() + expected
    }

    fn to_utf_16le(source: &str) -> Vec<u8> {
        let mut result = b"\xff\xfe".to_vec();
        for b in source.as_bytes().iter() {
            result.push(*b);
            result.push(0);
        }
        result
    }

    fn to_utf_16be(source: &str) -> Vec<u8> {
        let mut result = b"\xfe\xff".to_vec();
        for b in source.as_bytes().iter() {
            result.push(0);
            result.push(*b);
        }
        result
    }

    #[test]
    fn utf_16le_is_translated_to_utf8() {
        let expected = "The old file had this line\n and also this one\n";
        assert_eq!(decode_if_utf16(to_utf_16le(expected)), abominate(expected).as_bytes());
    }

    #[test]
    fn utf_16be_is_translated_to_utf8() {
        let expected = "The old file had this line\n and also this one\n";
        assert_eq!(decode_if_utf16(to_utf_16be(expected)), abominate(expected).as_bytes());
    }

    #[test]
    fn plain_utf8_is_passed_through_untouched() {
        let contents = b"alpha\nbeta\n".to_vec();
        assert_eq!(decode_if_utf16(contents.clone()), contents);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = contents_of(Path::new("no/such/file.txt")).unwrap_err();
        assert!(format!("{err}").contains("no/such/file.txt"));
    }
}
