//! Multivariate polynomial regression via the normal equations.
//!
//! ## Purpose
//!
//! This module expands a design matrix into polynomial features, fits the
//! coefficients by ordinary least squares and evaluates fitted models.
//!
//! ## Design notes
//!
//! * **Design matrix**: `n x (k + 1)`, column 0 is the bias (all ones) and
//!   columns `1..=k` hold the raw predictors.
//! * **Expansion**: every monomial of the `k` predictors with total degree in
//!   `[1, d]`, in the order of [`MonomialExponents`]. Fitting, prediction
//!   and feature naming share this order.
//! * **Fit**: `beta = (X^T X)^-1 X^T y` with the augmented inverse, on
//!   column-equilibrated normal equations.
//! * **Prediction** dots the expanded input with the coefficients over their
//!   common length; a length mismatch is logged, not rejected.
//!
//! ## Key concepts
//!
//! ```text
//! columns(k, d) = 1 + sum_{deg=1}^{d} C(k + deg - 1, deg)
//! ```
//!
//! ## Invariants
//!
//! * Degree 0 is rejected.
//! * Degree 1 leaves the design matrix unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

// External dependencies
use log::warn;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::inverse::inverse_augment;
use crate::math::combinatorics::{monomial_count, MonomialExponents};
use crate::math::ops::{dot, multiply};
use crate::primitives::errors::LinalgError;
use crate::primitives::matrix::Matrix;
use crate::primitives::trace::NoTrace;

// ============================================================================
// Feature Expansion
// ============================================================================

/// Expand a design matrix with bias column into polynomial features.
pub fn expand_features<T: Float>(x: &Matrix<T>, degree: usize) -> Result<Matrix<T>, LinalgError> {
    ensure_degree(degree)?;
    if x.cols() == 0 {
        return Err(LinalgError::invalid("design matrix needs a bias column"));
    }
    if degree == 1 {
        return Ok(x.clone());
    }

    let k = x.cols() - 1;
    let exponents: Vec<Vec<usize>> = MonomialExponents::new(k, degree).collect();
    let mut expanded = Matrix::zeros(x.rows(), 1 + exponents.len());

    for i in 0..x.rows() {
        let row = x.row_slice(i);
        expanded[(i, 0)] = row[0];
        for (c, e) in exponents.iter().enumerate() {
            expanded[(i, c + 1)] = monomial(&row[1..], e);
        }
    }

    Ok(expanded)
}

/// Column labels matching [`expand_features`]; the bias label is empty.
pub fn feature_names(predictors: usize, degree: usize) -> Result<Vec<String>, LinalgError> {
    ensure_degree(degree)?;

    let mut names = Vec::with_capacity(1 + monomial_count(predictors, degree));
    names.push(String::new());
    for e in MonomialExponents::new(predictors, degree) {
        let mut name = String::new();
        for (p, &power) in e.iter().enumerate() {
            match power {
                0 => {}
                1 => name.push_str(&format!("x{}", p + 1)),
                _ => name.push_str(&format!("x{}^{}", p + 1, power)),
            }
        }
        names.push(name);
    }
    Ok(names)
}

fn monomial<T: Float>(values: &[T], exponents: &[usize]) -> T {
    values
        .iter()
        .zip(exponents.iter())
        .fold(T::one(), |acc, (&v, &e)| acc * v.powi(e as i32))
}

fn ensure_degree(degree: usize) -> Result<(), LinalgError> {
    if degree == 0 {
        return Err(LinalgError::InvalidDegree(degree));
    }
    Ok(())
}

// ============================================================================
// Fitting and Prediction
// ============================================================================

/// Least-squares coefficients `(X^T X)^-1 X^T y` for an `n x 1` target.
///
/// The normal equations are equilibrated by `sqrt(diag(X^T X))` before
/// inversion and the scaling is undone on the coefficients, so predictors
/// of very different magnitudes share one tolerance.
pub fn fit<T: Float>(x: &Matrix<T>, y: &Matrix<T>, tol: T) -> Result<Vec<T>, LinalgError> {
    if y.cols() != 1 || y.rows() != x.rows() {
        return Err(LinalgError::invalid(format!(
            "target must be {}x1, got {}x{}",
            x.rows(),
            y.rows(),
            y.cols()
        )));
    }

    let xt = x.transpose();
    let mut gram = multiply(&xt, x)?;
    let mut moment = multiply(&xt, y)?;
    let p = gram.rows();

    // Column equilibration
    let norms: Vec<T> = (0..p)
        .map(|j| {
            let diag = gram[(j, j)];
            if diag > T::zero() {
                diag.sqrt()
            } else {
                T::one()
            }
        })
        .collect();
    for i in 0..p {
        for j in 0..p {
            gram[(i, j)] = gram[(i, j)] / (norms[i] * norms[j]);
        }
        moment[(i, 0)] = moment[(i, 0)] / norms[i];
    }

    let inverse = inverse_augment(&gram, tol, &mut NoTrace)?;
    let beta = multiply(&inverse, &moment)?;

    // Undo equilibration
    Ok((0..p).map(|j| beta[(j, 0)] / norms[j]).collect())
}

/// Features `[1, monomials...]` of one raw input vector.
pub fn expand_input<T: Float>(input: &[T], degree: usize) -> Result<Vec<T>, LinalgError> {
    ensure_degree(degree)?;

    let mut features = Vec::with_capacity(1 + monomial_count(input.len(), degree));
    features.push(T::one());
    features.extend(MonomialExponents::new(input.len(), degree).map(|e| monomial(input, &e)));
    Ok(features)
}

/// Model value at a raw input vector.
pub fn predict<T: Float>(coefficients: &[T], input: &[T], degree: usize) -> Result<T, LinalgError> {
    let features = expand_input(input, degree)?;
    if features.len() != coefficients.len() {
        warn!(
            "prediction uses {} of {} features against {} coefficients",
            features.len().min(coefficients.len()),
            features.len(),
            coefficients.len()
        );
    }
    Ok(dot(coefficients, &features))
}
