//! Reading golden dumps back in.

use thiserror::Error;

use crate::class::{Class, ClassSet};
use crate::sweep::SweepLine;

/// Why a single dump line failed to parse. Columns are 1-based byte offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected a line starting with `0x`")]
    MissingPrefix,
    #[error("expected two uppercase hex digits after `0x`")]
    BadValue,
    #[error("unknown class name at column {column}")]
    UnknownClass { column: usize },
    #[error("class `{class}` at column {column} is repeated or out of order")]
    OutOfOrder { class: Class, column: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DumpError {
    #[error("expected 256 lines, found {0}")]
    LineCount(usize),
    #[error("line {line}: {source}")]
    Line { line: usize, source: LineError },
    #[error("line {line}: found 0x{found:02X} out of sequence")]
    OutOfSequence { line: usize, found: u8 },
}

/// Parses one line in exactly the form [`SweepLine`] displays.
pub fn parse_line(text: &str) -> Result<SweepLine, LineError> {
    let rest = text.strip_prefix("0x").ok_or(LineError::MissingPrefix)?;
    let digits = rest.get(..2).ok_or(LineError::BadValue)?;
    let value = parse_hex_byte(digits).ok_or(LineError::BadValue)?;

    let mut rest = &rest[2..];
    let mut column = 5;
    let mut classes = ClassSet::EMPTY;
    let mut last: Option<Class> = None;

    while !rest.is_empty() {
        // every class name is introduced by exactly one space
        let Some(tail) = rest.strip_prefix(' ') else {
            return Err(LineError::BadValue);
        };
        column += 1;
        let len = tail.find(' ').unwrap_or(tail.len());
        let class: Class = tail[..len]
            .parse()
            .map_err(|_| LineError::UnknownClass { column })?;
        if last.is_some_and(|last| last >= class) {
            return Err(LineError::OutOfOrder { class, column });
        }
        classes.insert(class);
        last = Some(class);
        rest = &tail[len..];
        column += len;
    }

    Ok(SweepLine { value, classes })
}

fn parse_hex_byte(digits: &str) -> Option<u8> {
    let mut value = 0u8;
    for b in digits.bytes() {
        let nibble = match b {
            b'0'..=b'9' => b - b'0',
            b'A'..=b'F' => b - b'A' + 10,
            _ => return None,
        };
        value = (value << 4) | nibble;
    }
    Some(value)
}
