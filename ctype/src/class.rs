//! The twelve classification predicates, and sets of them.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// One `<ctype.h>` predicate.
///
/// Variants are declared in dump order, so the derived `Ord` is the order in
/// which class names appear on a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Class {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Xdigit,
}

impl Class {
    /// Every class, in dump order.
    pub const ALL: [Class; 12] = [
        Class::Alnum,
        Class::Alpha,
        Class::Blank,
        Class::Cntrl,
        Class::Digit,
        Class::Graph,
        Class::Lower,
        Class::Print,
        Class::Punct,
        Class::Space,
        Class::Upper,
        Class::Xdigit,
    ];

    /// The short name, as written in a dump (`isalnum` is `alnum`).
    pub const fn name(self) -> &'static str {
        match self {
            Class::Alnum => "alnum",
            Class::Alpha => "alpha",
            Class::Blank => "blank",
            Class::Cntrl => "cntrl",
            Class::Digit => "digit",
            Class::Graph => "graph",
            Class::Lower => "lower",
            Class::Print => "print",
            Class::Punct => "punct",
            Class::Space => "space",
            Class::Upper => "upper",
            Class::Xdigit => "xdigit",
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u8
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown character class")]
pub struct UnknownClass;

impl FromStr for Class {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Class::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or(UnknownClass)
    }
}

/// A set of classes that hold for one byte.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u16);

impl ClassSet {
    pub const EMPTY: ClassSet = ClassSet(0);

    pub const fn contains(self, class: Class) -> bool {
        self.0 & class.bit() != 0
    }

    pub const fn with(self, class: Class) -> Self {
        ClassSet(self.0 | class.bit())
    }

    pub fn insert(&mut self, class: Class) {
        self.0 |= class.bit();
    }

    /// Classes in `self` that are not in `other`.
    pub const fn difference(self, other: ClassSet) -> Self {
        ClassSet(self.0 & !other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in dump order.
    pub fn iter(self) -> impl Iterator<Item = Class> {
        Class::ALL
            .into_iter()
            .filter(move |&class| self.contains(class))
    }
}

impl FromIterator<Class> for ClassSet {
    fn from_iter<I: IntoIterator<Item = Class>>(iter: I) -> Self {
        let mut set = ClassSet::EMPTY;
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Writes each member as ` name`, so an empty set writes nothing.
impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in self.iter() {
            write!(f, " {}", class)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
