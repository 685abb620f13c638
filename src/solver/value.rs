/// The capability trait for anything used as a variable identifier.
///
/// A variable is an opaque label: it must be cloneable, debuggable,
/// equatable, and hashable so it can key the assignment and the registries.
/// `Send + Sync` lets independent searches over distinct problems run on
/// separate threads. This is a marker trait, so any type that satisfies
/// these bounds implements `Variable`.
pub trait Variable:
    Clone + std::fmt::Debug + Eq + std::hash::Hash + Send + Sync + 'static
{
}
impl<T> Variable for T where
    T: Clone + std::fmt::Debug + Eq + std::hash::Hash + Send + Sync + 'static
{
}

/// The capability trait for anything used as a candidate value in a domain.
///
/// Values carry the same bounds as variables. Equality and hashing are what
/// the standard constraints (equal, not-equal, all-different) compare with;
/// a puzzle value can be as small as a digit or as large as a full placement
/// path, as long as it satisfies these bounds.
pub trait Value: Clone + std::fmt::Debug + Eq + std::hash::Hash + Send + Sync + 'static {}
impl<T> Value for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + Send + Sync + 'static {}
