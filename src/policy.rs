use lazy_static::lazy_static;
use std::env;
use std::error::Error;
use std::fmt;
use tracing::{debug, trace, warn};

// ranges at or below this length are processed sequentially
pub const SEQ_THRESHOLD: usize = 16;

pub const THREADS_VAR: &str = "PARALLEL_ALGORITHMS_THREADS";
pub const SEQ_THRESHOLD_VAR: &str = "PARALLEL_ALGORITHMS_SEQ_THRESHOLD";

lazy_static! {
    static ref DEFAULT_TUNING: Tuning = Tuning::from_env().unwrap_or_else(|err| {
        warn!("ignoring tuning environment: {}", err);
        Tuning::default()
    });
}

// How a bulk operation may schedule its work.
//
// `Default` behaves like `Sequential`. `ParallelUnordered` lets the operation
// call the supplied function concurrently and in any order, so that function
// must be pure: no shared mutable state and no dependence on call order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionPolicy {
    #[default]
    Default,
    Sequential,
    ParallelUnordered,
}

// Concrete schedule consumed by every operation.
//
// `threads` bounds how many workers a call may use and `seq_threshold` is the
// range length at which a worker stops splitting and runs sequentially.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuning {
    threads: usize,
    seq_threshold: usize,
}

impl Tuning {
    pub fn new(threads: usize, seq_threshold: usize) -> Result<Self, TuningError> {
        if threads == 0 {
            return Err(TuningError::ZeroThreads);
        }
        if seq_threshold == 0 {
            return Err(TuningError::ZeroThreshold);
        }
        Ok(Tuning { threads, seq_threshold })
    }

    pub fn sequential() -> Self {
        Tuning {
            threads: 1,
            seq_threshold: usize::MAX,
        }
    }

    // Reads the environment overrides, falling back to the defaults for any
    // variable that is not set.
    pub fn from_env() -> Result<Self, TuningError> {
        let defaults = Tuning::default();
        let threads = read_var(THREADS_VAR)?.unwrap_or(defaults.threads);
        let seq_threshold = read_var(SEQ_THRESHOLD_VAR)?.unwrap_or(defaults.seq_threshold);
        Tuning::new(threads, seq_threshold)
    }

    // The process-wide schedule used by `ExecutionPolicy::ParallelUnordered`.
    pub fn parallel() -> Self {
        *DEFAULT_TUNING
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn seq_threshold(&self) -> usize {
        self.seq_threshold
    }

    pub fn is_sequential(&self) -> bool {
        self.threads == 1
    }

    // should a range of this length be processed without splitting?
    pub(crate) fn is_leaf(&self, len: usize) -> bool {
        self.threads == 1 || len <= self.seq_threshold
    }

    // split the thread budget between the spawned left half and the current thread
    pub(crate) fn split(&self) -> (Tuning, Tuning) {
        let left_threads: usize = self.threads / 2;
        let right_threads: usize = self.threads - left_threads;
        (
            Tuning {
                threads: left_threads,
                seq_threshold: self.seq_threshold,
            },
            Tuning {
                threads: right_threads,
                seq_threshold: self.seq_threshold,
            },
        )
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            threads: num_cpus::get().max(1),
            seq_threshold: SEQ_THRESHOLD,
        }
    }
}

impl From<ExecutionPolicy> for Tuning {
    fn from(policy: ExecutionPolicy) -> Self {
        let tuning = match policy {
            ExecutionPolicy::Default | ExecutionPolicy::Sequential => Tuning::sequential(),
            ExecutionPolicy::ParallelUnordered => Tuning::parallel(),
        };
        trace!(?policy, threads = tuning.threads, seq_threshold = tuning.seq_threshold, "resolved policy");
        tuning
    }
}

fn read_var(name: &'static str) -> Result<Option<usize>, TuningError> {
    match env::var(name) {
        Ok(value) => {
            let parsed = value.trim().parse::<usize>().map_err(|_| TuningError::InvalidVariable {
                name,
                value: value.clone(),
            })?;
            debug!("{} = {}", name, parsed);
            Ok(Some(parsed))
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(raw)) => Err(TuningError::InvalidVariable {
            name,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

// Errors from building a `Tuning`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TuningError {
    // A schedule needs at least one thread.
    ZeroThreads,
    // A zero leaf size would never stop splitting.
    ZeroThreshold,
    // An environment override is not a non-negative integer.
    InvalidVariable {
        // Variable name.
        name: &'static str,
        // The rejected value.
        value: String,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroThreads => write!(f, "threads cannot be zero"),
            Self::ZeroThreshold => write!(f, "seq_threshold cannot be zero"),
            Self::InvalidVariable { name, value } => {
                write!(f, "{name} must be a non-negative integer, found '{value}'")
            }
        }
    }
}

impl Error for TuningError {}

#[cfg(test)]
mod tests {
    use crate::policy::*;

    #[test]
    fn test_sequential_policies_use_one_thread() {
        assert_eq!(Tuning::from(ExecutionPolicy::Sequential), Tuning::sequential());
        assert_eq!(Tuning::from(ExecutionPolicy::Default), Tuning::sequential());
        assert!(Tuning::from(ExecutionPolicy::Default).is_sequential());
    }

    #[test]
    fn test_parallel_policy_uses_default_tuning() {
        let tuning = Tuning::from(ExecutionPolicy::ParallelUnordered);
        assert!(tuning.threads() >= 1);
        assert!(tuning.seq_threshold() >= 1);
    }

    #[test]
    fn test_bad_tuning_args() {
        assert_eq!(Tuning::new(0, 1), Err(TuningError::ZeroThreads));
        assert_eq!(Tuning::new(1, 0), Err(TuningError::ZeroThreshold));
        assert_eq!(Tuning::new(0, 0), Err(TuningError::ZeroThreads));
        assert!(Tuning::new(4, 2).is_ok());
    }

    #[test]
    fn test_split_keeps_thread_budget() {
        let tuning = Tuning::new(5, 3).unwrap();
        let (left, right) = tuning.split();
        assert_eq!(left.threads() + right.threads(), 5);
        assert_eq!(left.seq_threshold(), 3);
        assert_eq!(right.seq_threshold(), 3);
        assert!(tuning.is_leaf(3));
        assert!(!tuning.is_leaf(4));
    }

    #[test]
    fn test_error_messages() {
        let err = TuningError::InvalidVariable {
            name: THREADS_VAR,
            value: "many".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "PARALLEL_ALGORITHMS_THREADS must be a non-negative integer, found 'many'"
        );
        assert_eq!(TuningError::ZeroThreads.to_string(), "threads cannot be zero");
    }
}
