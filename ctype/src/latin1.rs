//! ISO-8859-1, classified by the Unicode properties of U+0000..=U+00FF.
//!
//! Digits stay ASCII-only, as C requires of `isdigit` and `isxdigit` in
//! every locale. The C1 controls (0x80..=0x9F) are `cntrl`; NEL (0x85) and
//! NBSP (0xA0) are `space`, and NBSP is also `blank`.

use crate::ascii;
use crate::class::Class;
use crate::ruleset::Ruleset;

fn isspace(c: u8) -> bool {
    char::from(c).is_whitespace()
}

fn isblank(c: u8) -> bool {
    isspace(c) && !matches!(c, b'\n' | 0x0b | 0x0c | b'\r' | 0x85)
}

fn iscntrl(c: u8) -> bool {
    char::from(c).is_control()
}

fn isprint(c: u8) -> bool {
    !iscntrl(c)
}

fn isgraph(c: u8) -> bool {
    isprint(c) && !isspace(c)
}

fn isalnum(c: u8) -> bool {
    char::from(c).is_alphabetic() || ascii::isdigit(c)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Latin1;

impl Ruleset for Latin1 {
    fn name(&self) -> &str {
        "C.ISO-8859-1"
    }

    fn test(&self, class: Class, c: u8) -> bool {
        match class {
            Class::Alnum => isalnum(c),
            Class::Alpha => char::from(c).is_alphabetic(),
            Class::Blank => isblank(c),
            Class::Cntrl => iscntrl(c),
            Class::Digit => ascii::isdigit(c),
            Class::Graph => isgraph(c),
            Class::Lower => char::from(c).is_lowercase(),
            Class::Print => isprint(c),
            Class::Punct => isgraph(c) && !isalnum(c),
            Class::Space => isspace(c),
            Class::Upper => char::from(c).is_uppercase(),
            Class::Xdigit => ascii::isxdigit(c),
        }
    }
}
