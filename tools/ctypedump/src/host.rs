//! Classification by the platform C library's `<ctype.h>`.

use std::ffi::{CStr, CString};
use std::ptr;

use anyhow::{bail, Context, Result};
use libc::c_int;

use ctype_rules::{Class, Ruleset};

pub struct Host {
    locale: String,
}

impl Host {
    /// Classifies under the process's current `LC_CTYPE`, which is "C"
    /// unless something has called `setlocale`.
    pub fn current() -> Self {
        Self {
            locale: query_locale().unwrap_or_else(|| "C".to_string()),
        }
    }

    /// Switches `LC_CTYPE` to `locale` first.
    pub fn with_locale(locale: &str) -> Result<Self> {
        let requested = CString::new(locale).context("locale name contains a NUL byte")?;
        // SAFETY: the pointer is a valid C string for the duration of the call.
        let applied = unsafe { libc::setlocale(libc::LC_CTYPE, requested.as_ptr()) };
        if applied.is_null() {
            bail!("the C library does not know locale `{locale}`");
        }
        // SAFETY: a non-null return is a C string owned by the C library.
        let locale = unsafe { CStr::from_ptr(applied) }.to_string_lossy().into_owned();
        Ok(Self { locale })
    }
}

fn query_locale() -> Option<String> {
    // SAFETY: a null locale only queries the current setting.
    let current = unsafe { libc::setlocale(libc::LC_CTYPE, ptr::null()) };
    if current.is_null() {
        return None;
    }
    // SAFETY: a non-null return is a C string owned by the C library.
    Some(unsafe { CStr::from_ptr(current) }.to_string_lossy().into_owned())
}

impl Ruleset for Host {
    fn name(&self) -> &str {
        &self.locale
    }

    fn test(&self, class: Class, c: u8) -> bool {
        let c = c_int::from(c);
        // SAFETY: every value representable as unsigned char is a valid
        // argument to the <ctype.h> functions.
        let result = unsafe {
            match class {
                Class::Alnum => libc::isalnum(c),
                Class::Alpha => libc::isalpha(c),
                Class::Blank => libc::isblank(c),
                Class::Cntrl => libc::iscntrl(c),
                Class::Digit => libc::isdigit(c),
                Class::Graph => libc::isgraph(c),
                Class::Lower => libc::islower(c),
                Class::Print => libc::isprint(c),
                Class::Punct => libc::ispunct(c),
                Class::Space => libc::isspace(c),
                Class::Upper => libc::isupper(c),
                Class::Xdigit => libc::isxdigit(c),
            }
        };
        result != 0
    }
}
