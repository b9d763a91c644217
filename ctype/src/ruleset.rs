use crate::class::{Class, ClassSet};

/// A classification context: the locale or table that decides which
/// predicates hold for a byte.
pub trait Ruleset {
    /// Name reported in logs and error messages.
    fn name(&self) -> &str;

    /// Whether `c` belongs to `class`.
    fn test(&self, class: Class, c: u8) -> bool;

    /// Evaluates every predicate for `c`, one `test` per class in dump order.
    fn classify(&self, c: u8) -> ClassSet {
        Class::ALL
            .into_iter()
            .filter(|&class| self.test(class, c))
            .collect()
    }
}

impl<R: Ruleset + ?Sized> Ruleset for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn test(&self, class: Class, c: u8) -> bool {
        (**self).test(class, c)
    }

    fn classify(&self, c: u8) -> ClassSet {
        (**self).classify(c)
    }
}
