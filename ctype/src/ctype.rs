//! `<ctype.h>`-style entry points over the active locale.
//!
//! Arguments outside 0..=255, including [`EOF`], belong to no class.

use core::ffi::c_int;

use crate::class::Class;
use crate::locale;

pub const EOF: c_int = -1;

fn query(class: Class, c: c_int) -> c_int {
    match u8::try_from(c) {
        Ok(c) => locale::current().rules().test(class, c) as c_int,
        Err(_) => 0,
    }
}

pub fn isalnum(c: c_int) -> c_int {
    query(Class::Alnum, c)
}

pub fn isalpha(c: c_int) -> c_int {
    query(Class::Alpha, c)
}

pub fn isblank(c: c_int) -> c_int {
    query(Class::Blank, c)
}

pub fn iscntrl(c: c_int) -> c_int {
    query(Class::Cntrl, c)
}

pub fn isdigit(c: c_int) -> c_int {
    query(Class::Digit, c)
}

pub fn isgraph(c: c_int) -> c_int {
    query(Class::Graph, c)
}

pub fn islower(c: c_int) -> c_int {
    query(Class::Lower, c)
}

pub fn isprint(c: c_int) -> c_int {
    query(Class::Print, c)
}

pub fn ispunct(c: c_int) -> c_int {
    query(Class::Punct, c)
}

pub fn isspace(c: c_int) -> c_int {
    query(Class::Space, c)
}

pub fn isupper(c: c_int) -> c_int {
    query(Class::Upper, c)
}

pub fn isxdigit(c: c_int) -> c_int {
    query(Class::Xdigit, c)
}
