use core::ops::Index;

use crate::class::{Class, ClassSet};
use crate::golden::{parse_line, DumpError};
use crate::ruleset::Ruleset;

/// A ruleset stored as one class set per byte value.
#[derive(Clone, PartialEq, Eq)]
pub struct ClassTable {
    name: &'static str,
    entries: [ClassSet; 256],
}

impl ClassTable {
    pub const fn empty(name: &'static str) -> Self {
        Self {
            name,
            entries: [ClassSet::EMPTY; 256],
        }
    }

    /// Captures every answer `rules` gives.
    pub fn snapshot<R: Ruleset + ?Sized>(rules: &R) -> Self {
        let mut table = Self::empty("snapshot");
        for c in 0..=u8::MAX {
            table.entries[usize::from(c)] = rules.classify(c);
        }
        table
    }

    /// Reads a golden dump. The dump must hold exactly 256 lines, one per
    /// byte value in ascending order.
    pub fn from_dump(dump: &str) -> Result<Self, DumpError> {
        let count = dump.lines().count();
        if count != 256 {
            return Err(DumpError::LineCount(count));
        }

        let mut table = Self::empty("dump");
        for (index, text) in dump.lines().enumerate() {
            let line = index + 1;
            let parsed = parse_line(text).map_err(|source| DumpError::Line { line, source })?;
            if usize::from(parsed.value) != index {
                return Err(DumpError::OutOfSequence {
                    line,
                    found: parsed.value,
                });
            }
            table.entries[index] = parsed.classes;
        }
        Ok(table)
    }

    /// Replaces the name reported through [`Ruleset::name`].
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn get(&self, c: u8) -> ClassSet {
        self.entries[usize::from(c)]
    }

    pub fn set(&mut self, c: u8, classes: ClassSet) {
        self.entries[usize::from(c)] = classes;
    }
}

impl Index<u8> for ClassTable {
    type Output = ClassSet;

    fn index(&self, c: u8) -> &ClassSet {
        &self.entries[usize::from(c)]
    }
}

impl Ruleset for ClassTable {
    fn name(&self) -> &str {
        self.name
    }

    fn test(&self, class: Class, c: u8) -> bool {
        self.get(c).contains(class)
    }

    fn classify(&self, c: u8) -> ClassSet {
        self.get(c)
    }
}

impl core::fmt::Debug for ClassTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClassTable")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
