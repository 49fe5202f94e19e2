//! High-level API for the linear-algebra engine.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! validates the numeric configuration and produces a [`LinearEngine`], whose
//! methods run every supported operation and return result records with
//! their step traces.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every option.
//! * **Validated**: Options are checked once, in [`EngineBuilder::build`];
//!   inputs are checked on every call.
//! * **Stateless**: The engine holds configuration only and can be shared
//!   freely between threads.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`EngineBuilder`] via `Engine::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.trace_threshold()`).
//! 3. Call `.build()` to get a [`LinearEngine`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::determinant::{cofactor_expansion, row_reduction};
use crate::algorithms::elimination::{echelon_form, rank, reduced_echelon_form};
use crate::algorithms::interpolation::{domain, polynomial_coefficients, spline_control_points};
use crate::algorithms::inverse::{cofactor_matrix, inverse_adjoint, inverse_augment};
use crate::algorithms::regression::{expand_features, feature_names, fit};
use crate::algorithms::system::{gauss, gauss_jordan, solve};
use crate::engine::executor::DEFAULT_TRACE_THRESHOLD;
use crate::engine::validator::Validator;
use crate::math::tolerance::DEFAULT_TOLERANCE;

// Publicly re-exported types
pub use crate::algorithms::determinant::DeterminantMethod;
pub use crate::algorithms::inverse::InverseMethod;
pub use crate::algorithms::system::{Solution, SplMethod};
pub use crate::engine::output::{
    CofactorResult, DeterminantResult, EchelonResult, InverseResult, PolynomialInterpolation,
    RegressionModel, SplResult, SplineResult,
};
pub use crate::engine::executor::SolverConfig;
pub use crate::primitives::errors::LinalgError;
pub use crate::primitives::matrix::Matrix;
pub use crate::primitives::trace::{NoTrace, StepLog, TraceSink};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`LinearEngine`].
#[derive(Debug, Clone)]
pub struct EngineBuilder<T = f64> {
    /// Absolute tolerance for zero tests (default: 1e-9).
    pub tolerance: Option<T>,

    /// Largest input dimension whose steps are recorded (default: 11).
    pub trace_threshold: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for EngineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> EngineBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            trace_threshold: None,
            duplicate_param: None,
        }
    }

    /// Set the absolute tolerance used by every zero test.
    pub fn tolerance(mut self, tol: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tol);
        self
    }

    /// Set the largest input dimension for which steps are recorded.
    pub fn trace_threshold(mut self, threshold: usize) -> Self {
        if self.trace_threshold.is_some() {
            self.duplicate_param = Some("trace_threshold");
        }
        self.trace_threshold = Some(threshold);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<LinearEngine<T>, LinalgError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tolerance = match self.tolerance {
            Some(tol) => tol,
            None => T::from(DEFAULT_TOLERANCE).ok_or(LinalgError::InvalidTolerance(DEFAULT_TOLERANCE))?,
        };
        Validator::validate_tolerance(tolerance)?;

        Ok(LinearEngine {
            config: SolverConfig {
                tolerance,
                trace_threshold: self.trace_threshold.unwrap_or(DEFAULT_TRACE_THRESHOLD),
            },
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Configured linear-algebra engine.
///
/// Every method validates its inputs, runs one algorithm and returns a
/// record holding the value and the step trace. Steps are recorded only
/// when the input has at most `trace_threshold` rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEngine<T = f64> {
    config: SolverConfig<T>,
}

impl<T: Float> Default for LinearEngine<T> {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }
}

impl<T: Float> LinearEngine<T> {
    /// Engine settings.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    // ========================================================================
    // Determinant and Inverse
    // ========================================================================

    /// Determinant of a square matrix.
    pub fn determinant(
        &self,
        a: &Matrix<T>,
        method: DeterminantMethod,
    ) -> Result<DeterminantResult<T>, LinalgError> {
        Validator::validate_square(a)?;
        let (value, trace) = self.config.execute("determinant", a.rows(), |sink, tol| match method {
            DeterminantMethod::Cofactor => cofactor_expansion(a, sink),
            DeterminantMethod::RowReduction => row_reduction(a, tol, sink),
        })?;
        Ok(DeterminantResult { value, trace })
    }

    /// Inverse of a square, non-singular matrix.
    pub fn inverse(
        &self,
        a: &Matrix<T>,
        method: InverseMethod,
    ) -> Result<InverseResult<T>, LinalgError> {
        Validator::validate_square(a)?;
        let (matrix, trace) = self.config.execute("inverse", a.rows(), |sink, tol| match method {
            InverseMethod::Augment => inverse_augment(a, tol, sink),
            InverseMethod::Adjoint => inverse_adjoint(a, tol, sink),
        })?;
        Ok(InverseResult { matrix, trace })
    }

    /// Cofactor matrix of a square matrix.
    pub fn cofactor_matrix(&self, a: &Matrix<T>) -> Result<CofactorResult<T>, LinalgError> {
        Validator::validate_square(a)?;
        let (matrix, trace) = self
            .config
            .execute("cofactor_matrix", a.rows(), |sink, tol| cofactor_matrix(a, tol, sink))?;
        Ok(CofactorResult { matrix, trace })
    }

    // ========================================================================
    // Linear Systems
    // ========================================================================

    /// Solve `A x = b` for an `n x 1` constant vector `b`.
    pub fn solve(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        method: SplMethod,
    ) -> Result<SplResult<T>, LinalgError> {
        Validator::validate_system(a, b)?;
        let (solution, trace) = self
            .config
            .execute("solve", a.rows(), |sink, tol| solve(a, b, method, tol, sink))?;
        Ok(SplResult { solution, trace })
    }

    /// Solve a system given as one augmented matrix `[A|b]`.
    pub fn solve_augmented(
        &self,
        augmented: &Matrix<T>,
        method: SplMethod,
    ) -> Result<SplResult<T>, LinalgError> {
        Validator::validate_augmented(augmented)?;
        let (solution, trace) =
            self.config
                .execute("solve_augmented", augmented.rows(), |sink, tol| match method {
                    SplMethod::Gauss => gauss(augmented, tol, sink),
                    SplMethod::GaussJordan => gauss_jordan(augmented, tol, sink),
                    SplMethod::Cramer | SplMethod::Inverse => {
                        let cols = augmented.cols();
                        let a = augmented.remove_last_col()?;
                        let b = augmented.columns_range(cols - 1, cols)?;
                        solve(&a, &b, method, tol, sink)
                    }
                })?;
        Ok(SplResult { solution, trace })
    }

    /// Row-echelon form of an augmented matrix `[A|b]`.
    pub fn echelon_form(&self, augmented: &Matrix<T>) -> Result<EchelonResult<T>, LinalgError> {
        Validator::validate_augmented(augmented)?;
        let (matrix, trace) = self
            .config
            .execute("echelon_form", augmented.rows(), |sink, tol| {
                echelon_form(augmented, tol, sink)
            })?;
        Ok(EchelonResult { matrix, trace })
    }

    /// Reduced row-echelon form of any matrix.
    pub fn reduced_echelon_form(&self, m: &Matrix<T>) -> Result<EchelonResult<T>, LinalgError> {
        Validator::validate_finite(m, "M")?;
        let (matrix, trace) = self
            .config
            .execute("reduced_echelon_form", m.rows(), |sink, tol| {
                reduced_echelon_form(m, tol, sink)
            })?;
        Ok(EchelonResult { matrix, trace })
    }

    /// Rank of a matrix.
    pub fn rank(&self, m: &Matrix<T>) -> Result<usize, LinalgError> {
        Validator::validate_finite(m, "M")?;
        rank(m, self.config.tolerance)
    }

    // ========================================================================
    // Interpolation
    // ========================================================================

    /// Polynomial through `n` points given as an `n x 2` matrix.
    pub fn interpolate(&self, points: &Matrix<T>) -> Result<PolynomialInterpolation<T>, LinalgError> {
        Validator::validate_points(points, 1)?;
        let (coefficients, trace) = self
            .config
            .execute("interpolate", points.rows(), |sink, tol| {
                polynomial_coefficients(points, tol, sink)
            })?;
        Ok(PolynomialInterpolation {
            coefficients,
            domain: domain(points),
            trace,
        })
    }

    /// Interior cubic-spline control points of at least 3 points.
    pub fn spline_control_points(&self, points: &Matrix<T>) -> Result<SplineResult<T>, LinalgError> {
        Validator::validate_points(points, 3)?;
        let (control_points, trace) = self
            .config
            .execute("spline_control_points", points.rows(), |sink, tol| {
                spline_control_points(points, tol, sink)
            })?;
        Ok(SplineResult {
            control_points,
            trace,
        })
    }

    // ========================================================================
    // Regression
    // ========================================================================

    /// Polynomial feature expansion of a design matrix with bias column.
    pub fn expand_features(&self, x: &Matrix<T>, degree: usize) -> Result<Matrix<T>, LinalgError> {
        Validator::validate_degree(degree)?;
        Validator::validate_finite(x, "X")?;
        expand_features(x, degree)
    }

    /// Fit a polynomial regression model.
    ///
    /// `x` is `n x (k + 1)` with the bias column first; `y` is `n x 1`.
    pub fn fit_regression(
        &self,
        x: &Matrix<T>,
        y: &Matrix<T>,
        degree: usize,
    ) -> Result<RegressionModel<T>, LinalgError> {
        Validator::validate_degree(degree)?;
        Validator::validate_system(x, y)?;

        let predictors = x.cols() - 1;
        let features = expand_features(x, degree)?;
        debug!(
            "fit_regression: {} samples, {} features, degree {}",
            x.rows(),
            features.cols(),
            degree
        );
        let coefficients = fit(&features, y, self.config.tolerance)?;
        let feature_names = feature_names(predictors, degree)?;

        Ok(RegressionModel {
            coefficients,
            degree,
            predictors,
            feature_names,
        })
    }

    /// Fit a regression model from raw samples, one row of predictors per
    /// target value; the bias column is added here.
    pub fn fit_regression_samples(
        &self,
        samples: &[Vec<T>],
        targets: &[T],
        degree: usize,
    ) -> Result<RegressionModel<T>, LinalgError> {
        let rows = samples
            .iter()
            .map(|s| core::iter::once(T::one()).chain(s.iter().copied()).collect())
            .collect();
        let x = Matrix::from_rows(rows)?;
        self.fit_regression(&x, &Matrix::column_vector(targets), degree)
    }
}
