//! Binomial coefficients and monomial exponent enumeration.
//!
//! ## Purpose
//!
//! Polynomial feature expansion needs every monomial of `k` predictors with
//! total degree in `[1, d]`, in a fixed order that fitting, prediction and
//! feature naming all share. This module owns that order.
//!
//! ## Design notes
//!
//! * **Odometer order**: exponent vectors are produced like an odometer with
//!   `k` dials, each running `0..=d`; dial 0 (the first predictor) turns
//!   fastest. Vectors whose total degree falls outside `[1, d]` are skipped.
//!   With `d = 1` this yields `x1, x2, ..., xk` in their natural order.
//! * **Count**: the number of produced vectors equals
//!   `sum_{deg=1}^{d} C(k + deg - 1, deg)`.
//!
//! ## Invariants
//!
//! * Every yielded vector has length `k` and total degree in `[1, d]`.
//! * Enumeration is deterministic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Binomial Coefficients
// ============================================================================

/// Binomial coefficient `C(n, r)`; zero when `r > n`.
pub fn binomial(n: usize, r: usize) -> usize {
    if r > n {
        return 0;
    }
    let r = r.min(n - r);
    let mut acc = 1usize;
    for i in 0..r {
        // Exact at every step: acc * (n - i) is divisible by (i + 1).
        acc = acc * (n - i) / (i + 1);
    }
    acc
}

/// Number of monomials of `k` variables with total degree in `[1, d]`.
pub fn monomial_count(k: usize, d: usize) -> usize {
    (1..=d)
        .map(|deg| binomial((k + deg).saturating_sub(1), deg))
        .sum()
}

// ============================================================================
// Exponent Enumeration
// ============================================================================

/// Iterator over exponent vectors of `k` variables with total degree in `[1, d]`.
#[derive(Debug, Clone)]
pub struct MonomialExponents {
    dials: Vec<usize>,
    max_degree: usize,
    done: bool,
}

impl MonomialExponents {
    /// Enumerate monomials of `k` variables up to total degree `d`.
    pub fn new(k: usize, d: usize) -> Self {
        Self {
            dials: vec![0; k],
            max_degree: d,
            done: k == 0 || d == 0,
        }
    }

    /// Advance the odometer; returns false after the last state.
    fn advance(&mut self) -> bool {
        for dial in self.dials.iter_mut() {
            if *dial < self.max_degree {
                *dial += 1;
                return true;
            }
            *dial = 0;
        }
        false
    }
}

impl Iterator for MonomialExponents {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            if !self.advance() {
                self.done = true;
                break;
            }
            let total: usize = self.dials.iter().sum();
            if total >= 1 && total <= self.max_degree {
                return Some(self.dials.clone());
            }
        }
        None
    }
}
