//! Name classification.

/// Decides whether an entity name is a trigger target.
///
/// Called with the *normalized* (lowercased, non-blank) name.  The policy
/// caches negative answers for the lifetime of the instance, so an
/// implementation must be a pure function of the name: a name that returned
/// `false` once is never asked about again.
///
/// Any `Fn(&str) -> bool` is a `NamePredicate`.
pub trait NamePredicate {
    fn matches(&self, name: &str) -> bool;
}

impl<F> NamePredicate for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn matches(&self, name: &str) -> bool {
        self(name)
    }
}

/// Matches names containing a fixed substring, case-insensitively.
#[derive(Clone, Debug)]
pub struct ContainsPredicate {
    needle: String,
}

impl ContainsPredicate {
    pub fn new(needle: &str) -> Self {
        Self { needle: needle.to_lowercase() }
    }

    /// The buff-statue rule: any name containing `"statue"`.
    pub fn statue() -> Self {
        Self::new("statue")
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl Default for ContainsPredicate {
    fn default() -> Self {
        Self::statue()
    }
}

impl NamePredicate for ContainsPredicate {
    #[inline]
    fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }
}
