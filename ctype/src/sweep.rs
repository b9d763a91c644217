//! Walks every byte value and renders the golden dump.

use core::fmt;

use crate::class::ClassSet;
use crate::ruleset::Ruleset;

/// One line of a dump: a byte and the classes it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepLine {
    pub value: u8,
    pub classes: ClassSet,
}

impl SweepLine {
    pub fn new<R: Ruleset + ?Sized>(value: u8, rules: &R) -> Self {
        Self {
            value,
            classes: rules.classify(value),
        }
    }
}

/// `0xHH` followed by ` name` for each class. No trailing newline.
impl fmt::Display for SweepLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}{}", self.value, self.classes)
    }
}

/// Classifies 0x00 through 0xFF, in order.
pub fn sweep<R: Ruleset + ?Sized>(rules: &R) -> impl Iterator<Item = SweepLine> + '_ {
    (0..=u8::MAX).map(move |value| SweepLine::new(value, rules))
}

/// Writes the full 256-line dump, each line terminated by `\n`.
pub fn write_sweep<W, R>(out: &mut W, rules: &R) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    R: Ruleset + ?Sized,
{
    for line in sweep(rules) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
