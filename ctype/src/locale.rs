//! Builtin locales and the process-wide selection the [`crate::ctype`]
//! functions read.

use spin::RwLock;

use crate::ascii::Ascii;
use crate::class::Class;
use crate::latin1::Latin1;
use crate::ruleset::Ruleset;

static ACTIVE: RwLock<Locale> = RwLock::new(Locale::C);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    C,
    Latin1,
}

impl Locale {
    pub const fn name(self) -> &'static str {
        match self {
            Locale::C => "C",
            Locale::Latin1 => "C.ISO-8859-1",
        }
    }

    pub fn rules(self) -> &'static (dyn Ruleset + Sync) {
        match self {
            Locale::C => &Ascii,
            Locale::Latin1 => &Latin1,
        }
    }
}

/// Resolves a builtin locale name. Names are matched exactly.
pub fn lookup(name: &str) -> Option<Locale> {
    match name {
        "C" | "POSIX" => Some(Locale::C),
        "C.ISO-8859-1" | "ISO-8859-1" | "latin1" => Some(Locale::Latin1),
        _ => None,
    }
}

pub fn current() -> Locale {
    *ACTIVE.read()
}

/// Selects the active locale by name and returns its canonical name.
///
/// With `None`, only reports the active locale. An unknown name returns
/// `None` and leaves the selection unchanged.
pub fn setlocale(name: Option<&str>) -> Option<&'static str> {
    let Some(name) = name else {
        return Some(current().name());
    };
    let locale = lookup(name)?;
    *ACTIVE.write() = locale;
    Some(locale.name())
}

/// Classifies with whichever locale is active at the time of each query.
#[derive(Clone, Copy, Debug, Default)]
pub struct Active;

impl Ruleset for Active {
    fn name(&self) -> &str {
        current().name()
    }

    fn test(&self, class: Class, c: u8) -> bool {
        current().rules().test(class, c)
    }
}
