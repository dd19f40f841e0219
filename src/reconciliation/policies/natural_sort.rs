//! Human ordering of component names ("Gi1/2" before "Gi1/10").
//!
//! A name is split into alternating (digit run, non-digit run) chunks. Digit
//! runs compare numerically with leading zeros ignored and an empty run
//! counting as zero; text runs compare lexicographically.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Number<'a>(&'a str);

impl Ord for Number<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Digits are ASCII and trimmed, so length decides magnitude
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for Number<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Chunk<'a> {
    number: Number<'a>,
    text: &'a str,
}

fn natural_key(s: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (digits, tail) = rest.split_at(digits_end);
        let text_end = tail.find(|c: char| c.is_ascii_digit()).unwrap_or(tail.len());
        let (text, tail) = tail.split_at(text_end);
        chunks.push(Chunk {
            number: Number(digits.trim_start_matches('0')),
            text,
        });
        rest = tail;
    }
    chunks
}

/// Total order over names; ties between numerically equal names
/// ("01" and "1") fall back to plain string order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b)).then_with(|| a.cmp(b))
}

/// Sorts names in place in natural order
pub fn natural_sort<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}
