//! # Line Codec
//!
//! Translation between the store file's text and [`Book`] records.
//!
//! ## Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  isbn          | title          | author       | total | borrowed      │
//! │  9780134685991 | Effective Java | Joshua Bloch | 5     | 2             │
//! │                                                                         │
//! │  9780134685991|Effective Java|Joshua Bloch|5|2\n                       │
//! │  9781492078005|Designing Data|Martin Kleppmann|3|3\n                   │
//! │                                                                         │
//! │  • one record per line, fields joined by '|'                           │
//! │  • trailing newline after the last record                              │
//! │  • empty collection = zero-byte file                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decoding is best effort: blank lines are ignored and malformed lines are
//! collected in [`Decoded::rejected`] instead of failing the whole file.

use biblio_core::{Book, RECORD_DELIMITER};

use crate::error::MalformedRecord;

/// A line that was skipped during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    /// The trimmed line content.
    pub content: String,
    /// Why it was skipped.
    pub reason: MalformedRecord,
}

/// Result of decoding a whole store file.
#[derive(Debug, Default)]
pub struct Decoded {
    /// Well-formed records, in line order.
    pub books: Vec<Book>,
    /// Lines that were dropped.
    pub rejected: Vec<RejectedLine>,
}

/// Parses one non-blank line into a record.
pub fn decode_line(line: &str) -> Result<Book, MalformedRecord> {
    let fields: Vec<&str> = line.trim().split(RECORD_DELIMITER).map(str::trim).collect();

    let [isbn, title, author, total, borrowed] = fields[..] else {
        return Err(MalformedRecord::FieldCount(fields.len()));
    };

    let total = parse_count("total", total)?;
    let borrowed = parse_count("borrowed", borrowed)?;

    Ok(Book::new(isbn, title, author, total, borrowed)?)
}

fn parse_count(field: &'static str, value: &str) -> Result<i64, MalformedRecord> {
    value.parse().map_err(|_| MalformedRecord::InvalidCount {
        field,
        value: value.to_string(),
    })
}

/// Decodes the full contents of a store file.
pub fn decode(contents: &str) -> Decoded {
    decode_bytes(contents.as_bytes())
}

/// Decodes raw file bytes line by line.
///
/// A line that is not valid UTF-8 is rejected on its own; the rest of the
/// file still decodes.
pub fn decode_bytes(contents: &[u8]) -> Decoded {
    let mut decoded = Decoded::default();

    for (index, raw) in contents.split(|b| *b == b'\n').enumerate() {
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim(),
            Err(_) => {
                decoded.rejected.push(RejectedLine {
                    line_number: index + 1,
                    content: String::from_utf8_lossy(raw).trim().to_string(),
                    reason: MalformedRecord::InvalidUtf8,
                });
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        match decode_line(line) {
            Ok(book) => decoded.books.push(book),
            Err(reason) => decoded.rejected.push(RejectedLine {
                line_number: index + 1,
                content: line.to_string(),
                reason,
            }),
        }
    }

    decoded
}

/// Encodes one record as a line (without the newline).
pub fn encode_line(book: &Book) -> String {
    let d = RECORD_DELIMITER;
    format!(
        "{}{d}{}{d}{}{d}{}{d}{}",
        book.isbn(),
        book.title(),
        book.author(),
        book.total(),
        book.borrowed(),
    )
}

/// Encodes a collection, one line per record, newline-terminated.
pub fn encode(books: &[Book]) -> String {
    books.iter().fold(String::new(), |mut out, book| {
        out.push_str(&encode_line(book));
        out.push('\n');
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "9780134685991|Effective Java|Joshua Bloch|5|2\n\
                          9781492078005|Designing Data|Martin Kleppmann|3|3\n";

    #[test]
    fn test_decode_sample() {
        let decoded = decode(SAMPLE);
        assert!(decoded.rejected.is_empty());
        assert_eq!(decoded.books.len(), 2);

        let first = &decoded.books[0];
        assert_eq!(first.isbn(), "9780134685991");
        assert_eq!(first.title(), "Effective Java");
        assert_eq!(first.author(), "Joshua Bloch");
        assert_eq!(first.total(), 5);
        assert_eq!(first.borrowed(), 2);
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        assert_eq!(encode(&decode(SAMPLE).books), SAMPLE);
    }

    #[test]
    fn test_empty_collection_encodes_to_nothing() {
        assert_eq!(encode(&[]), "");
        assert!(decode("").books.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let book = decode_line("  9780132350884 | Clean Code | Robert C. Martin | 4 | 4  ").unwrap();
        assert_eq!(book.title(), "Clean Code");
        assert_eq!(book.available(), 0);
        assert_eq!(encode_line(&book), "9780132350884|Clean Code|Robert C. Martin|4|4");
    }

    #[test]
    fn test_malformed_lines_are_rejected_not_fatal() {
        let contents = "9780134685991|Effective Java|Joshua Bloch|5|2\n\
                        linea_malformada\n\
                        \n\
                        9781492078005|Designing Data|Martin|3|0\n\
                        1111111111111|Too|Many|1|0|extra\n\
                        2222222222222|Bad Count|Someone|five|0\n\
                        3333333333333|Over Lent|Someone|2|5\n\
                        4444444444444|Negative|Someone|-1|0\n";

        let decoded = decode(contents);
        assert_eq!(decoded.books.len(), 2);
        assert_eq!(decoded.rejected.len(), 5);

        let reasons: Vec<_> = decoded
            .rejected
            .iter()
            .map(|r| (r.line_number, r.reason.clone()))
            .collect();
        assert_eq!(reasons[0], (2, MalformedRecord::FieldCount(1)));
        assert_eq!(reasons[1], (5, MalformedRecord::FieldCount(6)));
        assert!(matches!(
            reasons[2],
            (6, MalformedRecord::InvalidCount { field: "total", .. })
        ));
        assert!(matches!(reasons[3], (7, MalformedRecord::InvalidRecord(_))));
        assert!(matches!(reasons[4], (8, MalformedRecord::InvalidRecord(_))));
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_alone() {
        let mut contents = b"9780134685991|Effective Java|Joshua Bloch|5|2\n".to_vec();
        contents.extend_from_slice(b"9780000000000|T\xff\xfetulo|Autor|1|0\r\n");
        contents.extend_from_slice(b"9781492078005|Designing Data|Martin Kleppmann|3|3\n");

        let decoded = decode_bytes(&contents);
        assert_eq!(decoded.books.len(), 2);
        assert_eq!(decoded.books[1].isbn(), "9781492078005");
        assert_eq!(decoded.rejected.len(), 1);
        assert_eq!(decoded.rejected[0].line_number, 2);
        assert_eq!(decoded.rejected[0].reason, MalformedRecord::InvalidUtf8);
    }

    #[test]
    fn test_non_isbn_identifier_is_kept() {
        let book = decode_line("ABC|Odd Identifier|Someone|1|0").unwrap();
        assert_eq!(book.isbn(), "ABC");
    }
}
