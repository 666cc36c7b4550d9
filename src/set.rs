//! Finite collections with the classical set operations.
//!
//! Elements keep their insertion order and duplicates are allowed, so two
//! sets are equal only when they hold the same elements in the same order.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Set<T> {
    elements: Vec<T>,
}

impl<T: PartialEq + Clone> Set<T> {
    pub const fn new() -> Self {
        Set { elements: Vec::new() }
    }

    /// `{}`
    pub const fn empty() -> Self {
        Set::new()
    }

    pub const fn from_vec(elements: Vec<T>) -> Self {
        Set { elements }
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn cardinality(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Same elements in the same order.
    pub fn equal_to(&self, other: &Set<T>) -> bool {
        self == other
    }

    /// Every element of `self` is in `other`; a set is a subset of itself.
    pub fn subset_of(&self, other: &Set<T>) -> bool {
        self.elements.iter().all(|e| other.contains(e))
    }

    /// A subset with at least one element of `other` missing from `self`.
    pub fn proper_subset_of(&self, other: &Set<T>) -> bool {
        self.subset_of(other) && other.elements.iter().any(|e| !self.contains(e))
    }

    pub fn superset_of(&self, other: &Set<T>) -> bool {
        other.subset_of(self)
    }

    pub fn proper_superset_of(&self, other: &Set<T>) -> bool {
        other.proper_subset_of(self)
    }

    /// `self` followed by the elements of `other` not already present.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let mut joined = self.clone();
        for e in &other.elements {
            if !joined.contains(e) {
                joined.elements.push(e.clone());
            }
        }
        joined
    }

    /// Elements of `other` that are also in `self`, in `other`'s order.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        other
            .elements
            .iter()
            .filter(|e| self.contains(e))
            .cloned()
            .collect()
    }

    /// Relative complement `self \ other`.
    pub fn complement(&self, other: &Set<T>) -> Set<T> {
        self.elements
            .iter()
            .filter(|e| !other.contains(e))
            .cloned()
            .collect()
    }

    /// All ordered pairs `(a, b)` with `a` from `self` and `b` from `other`.
    pub fn cartesian_product<U: PartialEq + Clone>(&self, other: &Set<U>) -> Set<(T, U)> {
        self.elements
            .iter()
            .flat_map(|a| other.elements.iter().map(move |b| (a.clone(), b.clone())))
            .collect()
    }

    /// Appends `element`, even if it is already present.
    pub fn add_element(&mut self, element: T) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Removes every occurrence of `element`.
    pub fn remove_element(&mut self, element: &T) -> &mut Self {
        self.elements.retain(|e| e != element);
        self
    }

    /// 1-indexed position of the first occurrence.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == element).map(|i| i + 1)
    }
}

impl<T: PartialEq + Clone + Default> Set<T> {
    /// `n` copies of `T::default()`, i.e. `n` zeros for numeric `T`.
    pub fn zero(n: usize) -> Self {
        Set {
            elements: vec![T::default(); n],
        }
    }
}

impl<T> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Set {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        Set { elements }
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "}}")
    }
}
