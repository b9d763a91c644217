//! Byte classification rulesets and the sweep that dumps them.
//!
//! A [`Ruleset`] answers the twelve `<ctype.h>` predicates for a single byte.
//! [`sweep`] walks every byte value under one ruleset and yields the lines
//! of a golden dump, which [`ClassTable::from_dump`] can read back.

#![cfg_attr(not(test), no_std)]

pub mod ascii;
pub mod class;
pub mod compare;
pub mod ctype;
pub mod golden;
pub mod latin1;
pub mod locale;
pub mod ruleset;
pub mod sweep;
pub mod table;

pub use ascii::Ascii;
pub use class::{Class, ClassSet, UnknownClass};
pub use compare::{compare, Mismatch};
pub use golden::{parse_line, DumpError, LineError};
pub use latin1::Latin1;
pub use locale::{setlocale, Active, Locale};
pub use ruleset::Ruleset;
pub use sweep::{sweep, write_sweep, SweepLine};
pub use table::ClassTable;
