//! Centralized validation and helper functions.

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Parallelism must be at least 1")]
    ZeroParallelism,
}

/// Number of worker threads the platform offers by default.
#[must_use]
pub fn platform_parallelism() -> usize {
    num_cpus::get().max(1)
}

/// Resolve the worker count for a run.
///
/// A requested limit can only lower the platform default, never raise it.
///
/// # Examples
///
/// ```
/// use fuzzy_pairs::utils::validation::{effective_parallelism, platform_parallelism};
///
/// assert_eq!(effective_parallelism(None).unwrap(), platform_parallelism());
/// assert_eq!(effective_parallelism(Some(1)).unwrap(), 1);
/// assert_eq!(
///     effective_parallelism(Some(usize::MAX)).unwrap(),
///     platform_parallelism()
/// );
/// ```
///
/// # Errors
///
/// Returns `ValidationError::ZeroParallelism` if a limit of zero is requested.
pub fn effective_parallelism(requested: Option<usize>) -> Result<usize, ValidationError> {
    let platform = platform_parallelism();
    match requested {
        None => Ok(platform),
        Some(0) => Err(ValidationError::ZeroParallelism),
        Some(limit) => Ok(limit.min(platform)),
    }
}
