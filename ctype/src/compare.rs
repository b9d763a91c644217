//! Byte-by-byte comparison of two tables.

use core::fmt;

use crate::class::ClassSet;
use crate::table::ClassTable;

/// A byte whose classes differ between two tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub value: u8,
    pub expected: ClassSet,
    pub actual: ClassSet,
}

impl Mismatch {
    /// Classes the expected table has and the actual one lacks.
    pub fn missing(&self) -> ClassSet {
        self.expected.difference(self.actual)
    }

    /// Classes the actual table has and the expected one lacks.
    pub fn extra(&self) -> ClassSet {
        self.actual.difference(self.expected)
    }
}

/// `0xHH` followed by `-name` for each missing class and `+name` for each
/// extra one.
impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.value)?;
        for class in self.missing().iter() {
            write!(f, " -{}", class)?;
        }
        for class in self.extra().iter() {
            write!(f, " +{}", class)?;
        }
        Ok(())
    }
}

/// Yields every differing byte in ascending order.
pub fn compare<'a>(
    expected: &'a ClassTable,
    actual: &'a ClassTable,
) -> impl Iterator<Item = Mismatch> + 'a {
    (0..=u8::MAX).filter_map(move |value| {
        let (expected, actual) = (expected[value], actual[value]);
        (expected != actual).then_some(Mismatch {
            value,
            expected,
            actual,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::compare;
    use crate::ascii::Ascii;
    use crate::class::{Class, ClassSet};
    use crate::latin1::Latin1;
    use crate::table::ClassTable;

    #[test]
    fn identical_tables() {
        let table = ClassTable::snapshot(&Latin1);
        assert_eq!(compare(&table, &table.clone()).count(), 0);
    }

    #[test]
    fn ascii_and_latin1_differ_only_in_high_half() {
        let ascii = ClassTable::snapshot(&Ascii);
        let latin1 = ClassTable::snapshot(&Latin1);
        let diffs: Vec<_> = compare(&ascii, &latin1).collect();
        assert!(diffs.iter().all(|m| m.value >= 0x80));
        // every high byte is at least cntrl or print under Latin-1
        assert_eq!(diffs.len(), 128);
        assert!(diffs.iter().all(|m| m.missing().is_empty()));
    }

    #[test]
    fn renders_missing_then_extra() {
        let expected = ClassTable::snapshot(&Ascii);
        let mut actual = expected.clone();
        actual.set(
            b'a',
            ClassSet::EMPTY
                .with(Class::Alnum)
                .with(Class::Alpha)
                .with(Class::Graph)
                .with(Class::Print)
                .with(Class::Upper)
                .with(Class::Xdigit),
        );
        let diffs: Vec<String> = compare(&expected, &actual).map(|m| m.to_string()).collect();
        assert_eq!(diffs, vec!["0x61 -lower +upper"]);
    }
}
