use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::core::types::{MatchOutcome, MismatchPolicy};
use crate::matching::results::MatchMapping;
use crate::matching::scanner::classify;
use crate::utils::validation::{effective_parallelism, ValidationError};

/// Default mismatch threshold
pub const DEFAULT_MAX_MISMATCHES: usize = 1;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid matching configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Configuration for the matching engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingConfig {
    /// Mismatches after which a comparison is abandoned
    pub max_mismatches: usize,
    /// Which mismatch counts are accepted
    pub policy: MismatchPolicy,
    /// Upper bound on worker threads (platform default when `None`)
    pub max_parallelism: Option<usize>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_mismatches: DEFAULT_MAX_MISMATCHES,
            policy: MismatchPolicy::default(),
            max_parallelism: None,
        }
    }
}

/// Matches queries against a fixed library
pub struct MatchingEngine<'a> {
    library: &'a [String],
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    #[must_use]
    pub fn new(library: &'a [String]) -> Self {
        Self {
            library,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    #[must_use]
    pub fn with_config(library: &'a [String], config: MatchingConfig) -> Self {
        Self { library, config }
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Classify a single query against the library
    #[must_use]
    pub fn find_match(&self, query: &str) -> MatchOutcome {
        classify(
            query,
            self.library,
            self.config.max_mismatches,
            self.config.policy,
        )
    }

    /// Match every query in parallel and collect the unique matches
    ///
    /// Each query is scanned independently on a pool sized for this run.
    /// Unique matches are sent to a single consumer that owns the mapping;
    /// the call returns once every query has been scanned and the consumer
    /// has drained its channel.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::Config` if the parallelism limit is zero, or
    /// `MatchError::ThreadPool` if the worker pool cannot be created.
    pub fn run(&self, queries: &[String]) -> Result<MatchMapping, MatchError> {
        let threads = effective_parallelism(self.config.max_parallelism)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;

        debug!(
            "Matching {} queries against {} library sequences on {threads} threads \
             (max mismatches {}, policy {})",
            queries.len(),
            self.library.len(),
            self.config.max_mismatches,
            self.config.policy,
        );

        let unmatched = AtomicUsize::new(0);
        let ambiguous = AtomicUsize::new(0);
        let library = self.library;

        let (sender, receiver) = crossbeam_channel::unbounded::<(usize, usize)>();

        let mut mapping = std::thread::scope(|scope| {
            let consumer = scope.spawn(move || {
                let mut mapping = MatchMapping::for_queries(queries.len());
                for (query_idx, library_idx) in receiver {
                    mapping.insert(queries[query_idx].clone(), library[library_idx].clone());
                }
                mapping
            });

            pool.install(|| {
                queries
                    .par_iter()
                    .enumerate()
                    .for_each_with(sender, |sender, (query_idx, query)| {
                        match self.find_match(query) {
                            MatchOutcome::Unique(library_idx) => {
                                sender.send((query_idx, library_idx)).ok();
                            }
                            MatchOutcome::NoMatch => {
                                unmatched.fetch_add(1, Ordering::Relaxed);
                            }
                            MatchOutcome::Ambiguous(_) => {
                                ambiguous.fetch_add(1, Ordering::Relaxed);
                            }
                        }
                    });
            });

            match consumer.join() {
                Ok(mapping) => mapping,
                Err(panic) => std::panic::resume_unwind(panic),
            }
        });

        mapping.set_dropped(unmatched.into_inner(), ambiguous.into_inner());

        let summary = mapping.summary();
        debug!(
            "Matched {} of {} queries ({} without a close sequence, {} ambiguous)",
            summary.matched, summary.total, summary.unmatched, summary.ambiguous
        );

        Ok(mapping)
    }
}
