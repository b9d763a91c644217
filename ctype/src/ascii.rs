//! The "C" (POSIX) locale. Nothing above 0x7F belongs to any class.

use crate::class::Class;
use crate::ruleset::Ruleset;

pub const fn isdigit(c: u8) -> bool {
    c >= b'0' && c <= b'9'
}

pub const fn isupper(c: u8) -> bool {
    c >= b'A' && c <= b'Z'
}

pub const fn islower(c: u8) -> bool {
    c >= b'a' && c <= b'z'
}

pub const fn isalpha(c: u8) -> bool {
    isupper(c) || islower(c)
}

pub const fn isalnum(c: u8) -> bool {
    isalpha(c) || isdigit(c)
}

pub const fn isxdigit(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'A'..=b'F' | b'a'..=b'f')
}

pub const fn isblank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

pub const fn isspace(c: u8) -> bool {
    c == b' ' || c == b'\t' || c == b'\n' || c == b'\r' || c == 0x0b || c == 0x0c
}

pub const fn iscntrl(c: u8) -> bool {
    c < 0x20 || c == 0x7f
}

pub const fn isprint(c: u8) -> bool {
    c >= 0x20 && c <= 0x7e
}

pub const fn isgraph(c: u8) -> bool {
    c > 0x20 && c <= 0x7e
}

pub const fn ispunct(c: u8) -> bool {
    isgraph(c) && !isalnum(c)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Ascii;

impl Ruleset for Ascii {
    fn name(&self) -> &str {
        "C"
    }

    fn test(&self, class: Class, c: u8) -> bool {
        match class {
            Class::Alnum => isalnum(c),
            Class::Alpha => isalpha(c),
            Class::Blank => isblank(c),
            Class::Cntrl => iscntrl(c),
            Class::Digit => isdigit(c),
            Class::Graph => isgraph(c),
            Class::Lower => islower(c),
            Class::Print => isprint(c),
            Class::Punct => ispunct(c),
            Class::Space => isspace(c),
            Class::Upper => isupper(c),
            Class::Xdigit => isxdigit(c),
        }
    }
}
