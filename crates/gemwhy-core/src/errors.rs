use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all gemwhy operations.
#[derive(Debug, Error, Diagnostic)]
pub enum GemwhyError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed Gemfile.lock.
    #[error("Lockfile error: {message}")]
    #[diagnostic(help("Run `bundle install` to generate an up-to-date Gemfile.lock"))]
    Lockfile { message: String },

    /// The queried package is not part of the resolved bundle.
    #[error("Package '{name}' not found in Gemfile.lock")]
    #[diagnostic(help("Check the spelling, or run `bundle list` to see installed gems"))]
    PackageNotFound { name: String },

    /// The CLI was invoked without a package name.
    #[error("Please specify a package name")]
    #[diagnostic(help("Usage: gemwhy <package_name>"))]
    MissingPackageName,

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type GemwhyResult<T> = miette::Result<T>;
