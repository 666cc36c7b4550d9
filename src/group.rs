//! A finite [`Set`] paired with a binary operation.
//!
//! Only the structure is modelled; nothing here checks the group axioms.

use crate::set::Set;
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul};

/// The binary operation of a [`Group`].
pub type Operation<T> = fn(&T, &T) -> T;

#[derive(Clone)]
pub struct Group<T> {
    set: Set<T>,
    operation: Operation<T>,
}

impl<T: PartialEq + Clone> Group<T> {
    pub fn new(set: impl Into<Set<T>>, operation: Operation<T>) -> Self {
        Group {
            set: set.into(),
            operation,
        }
    }

    /// The elements under `+`.
    pub fn additive(set: impl Into<Set<T>>) -> Self
    where
        T: Add<Output = T>,
    {
        Group::new(set, |a, b| a.clone() + b.clone())
    }

    /// The elements under `*`.
    pub fn multiplicative(set: impl Into<Set<T>>) -> Self
    where
        T: Mul<Output = T>,
    {
        Group::new(set, |a, b| a.clone() * b.clone())
    }

    pub const fn set(&self) -> &Set<T> {
        &self.set
    }

    /// Replaces the underlying set, keeping the operation.
    pub fn set_set(&mut self, set: impl Into<Set<T>>) -> &mut Self {
        self.set = set.into();
        self
    }

    pub fn set_operation(&mut self, operation: Operation<T>) -> &mut Self {
        self.operation = operation;
        self
    }

    /// `a ∘ b`. The result need not belong to the set.
    pub fn operand(&self, a: &T, b: &T) -> T {
        (self.operation)(a, b)
    }

    /// The first idempotent element (`e ∘ e = e`), which in a group is the
    /// identity.
    pub fn identity(&self) -> Option<&T> {
        self.set
            .elements()
            .iter()
            .find(|e| self.operand(e, e) == **e)
    }
}

impl<T: Debug> Debug for Group<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group").field("set", &self.set).finish_non_exhaustive()
    }
}

impl<T: Display> Display for Group<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.set, f)
    }
}
