use crate::consts::{is_even, is_high, PICK_COUNT};
use serde::Serialize;
use std::fmt;

/// A finished candidate set: seven distinct numbers, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ticket {
    numbers: [u8; PICK_COUNT],
}

impl Ticket {
    pub(crate) fn from_unsorted(mut numbers: [u8; PICK_COUNT]) -> Self {
        numbers.sort_unstable();
        Self { numbers }
    }

    pub fn numbers(&self) -> &[u8; PICK_COUNT] {
        &self.numbers
    }

    pub fn contains(&self, n: u8) -> bool {
        self.numbers.contains(&n)
    }

    pub fn high_count(&self) -> usize {
        self.numbers.iter().filter(|&&n| is_high(n)).count()
    }

    pub fn low_count(&self) -> usize {
        PICK_COUNT - self.high_count()
    }

    pub fn even_count(&self) -> usize {
        self.numbers.iter().filter(|&&n| is_even(n)).count()
    }

    pub fn odd_count(&self) -> usize {
        PICK_COUNT - self.even_count()
    }

    /// "03-11-17-24-30-41-48"
    pub fn joined(&self, sep: &str) -> String {
        self.numbers
            .iter()
            .map(|n| format!("{:02}", n))
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined(" - "))
    }
}
