//! Core error types

use thiserror::Error;

/// Errors produced by the domain core.
///
/// Both variants are caller-input errors: the pure pipeline itself never
/// fails on well-formed input (normalization and ranking are total).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A numeric field required by the classifier was absent upstream.
    ///
    /// Missing values are never silently defaulted to zero — the field name
    /// is carried so the caller can report which signal was missing.
    #[error("incomplete features: missing '{field}'")]
    IncompleteFeatures { field: &'static str },

    /// A season string outside the closed kharif/rabi/zaid set.
    #[error("invalid season '{0}': expected one of kharif, rabi, zaid")]
    InvalidSeason(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
