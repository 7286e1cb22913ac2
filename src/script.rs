//! Scripted cache runs.
//!
//! A script is a JSON document with parallel `operations` and `arguments`
//! arrays and an optional `expected` array:
//!
//! ```json
//! {
//!   "operations": ["LRUCache", "put", "put", "get", "put", "get"],
//!   "arguments":  [[2],        [1, 1], [2, 2], [1],   [3, 3], [2]],
//!   "expected":   [null,       null,   null,   1,     null,   -1]
//! }
//! ```
//!
//! Each step produces one observed output:
//!
//! | operation            | arguments  | output                       |
//! |----------------------|------------|------------------------------|
//! | `LRUCache` / `new`   | `[cap]`    | `null`                       |
//! | `put`                | `[k, v]`   | `null`                       |
//! | `get`                | `[k]`      | value, or `-1` on a miss     |
//! | `contains`           | `[k]`      | `true` / `false`             |
//! | `remove`             | `[k]`      | removed value, or `-1`       |
//! | `len`                | `[]`       | entry count                  |
//! | `clear`              | `[]`       | `null`                       |
//! | `dump`               | `[]`       | keys, most recent first      |
//!
//! The miss encoding is in-band: a stored value of `-1` is reported exactly
//! like a miss. Use `contains` when the two must be told apart.
//!
//! ## Example
//!
//! ```
//! use slotlru::script::{run_script, Observed, Script};
//!
//! let script: Script = r#"{
//!     "operations": ["LRUCache", "put", "get", "get"],
//!     "arguments": [[1], [7, 70], [7], [8]]
//! }"#
//! .parse()
//! .unwrap();
//!
//! let report = run_script(&script, None).unwrap();
//! assert_eq!(report.observed[2], Some(Observed::Int(70)));
//! assert_eq!(report.observed[3], Some(Observed::Int(-1)));
//! assert!(report.passed());
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::policy::lru::LruCache;

/// Output encoding for a `get` or `remove` miss.
pub const MISS: i64 = -1;

/// Errors raised while loading or running a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("script has {operations} operations but {arguments} argument lists")]
    LengthMismatch { operations: usize, arguments: usize },

    #[error("script has {operations} operations but {expected} expected outputs")]
    ExpectedLength { operations: usize, expected: usize },

    #[error("step {step}: unknown operation {name:?}")]
    UnknownOperation { step: usize, name: String },

    #[error("step {step}: {operation} takes {expected} argument(s), got {got}")]
    Arity {
        step: usize,
        operation: Operation,
        expected: usize,
        got: usize,
    },

    #[error("step {step}: {operation} before the cache was constructed")]
    NotConstructed { step: usize, operation: Operation },

    #[error("step {step}: {source}")]
    InvalidCapacity {
        step: usize,
        #[source]
        source: ConfigError,
    },
}

pub type Result<T> = std::result::Result<T, ScriptError>;

/// One script step's output. `None` (JSON `null`) for steps without output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Observed {
    Flag(bool),
    Int(i64),
    Keys(Vec<i64>),
}

impl fmt::Display for Observed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observed::Flag(flag) => write!(f, "{flag}"),
            Observed::Int(value) => write!(f, "{value}"),
            Observed::Keys(keys) => write!(f, "{keys:?}"),
        }
    }
}

/// Operations a script may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Construct,
    Put,
    Get,
    Contains,
    Remove,
    Len,
    Clear,
    Dump,
}

impl Operation {
    /// Number of integer arguments the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::Put => 2,
            Operation::Construct | Operation::Get | Operation::Contains | Operation::Remove => 1,
            Operation::Len | Operation::Clear | Operation::Dump => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Construct => "LRUCache",
            Operation::Put => "put",
            Operation::Get => "get",
            Operation::Contains => "contains",
            Operation::Remove => "remove",
            Operation::Len => "len",
            Operation::Clear => "clear",
            Operation::Dump => "dump",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "LRUCache" | "new" => Ok(Operation::Construct),
            "put" => Ok(Operation::Put),
            "get" => Ok(Operation::Get),
            "contains" => Ok(Operation::Contains),
            "remove" => Ok(Operation::Remove),
            "len" => Ok(Operation::Len),
            "clear" => Ok(Operation::Clear),
            "dump" => Ok(Operation::Dump),
            _ => Err(()),
        }
    }
}

/// A parsed, not yet validated, script document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub operations: Vec<String>,
    pub arguments: Vec<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Vec<Option<Observed>>>,
}

impl Script {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Checks shape and operation names, returning the decoded steps.
    pub fn steps(&self) -> Result<Vec<Step<'_>>> {
        if self.operations.len() != self.arguments.len() {
            return Err(ScriptError::LengthMismatch {
                operations: self.operations.len(),
                arguments: self.arguments.len(),
            });
        }
        if let Some(expected) = &self.expected
            && expected.len() != self.operations.len()
        {
            return Err(ScriptError::ExpectedLength {
                operations: self.operations.len(),
                expected: expected.len(),
            });
        }

        self.operations
            .iter()
            .zip(&self.arguments)
            .enumerate()
            .map(|(step, (name, args))| {
                let operation: Operation =
                    name.parse().map_err(|()| ScriptError::UnknownOperation {
                        step,
                        name: name.clone(),
                    })?;
                if args.len() != operation.arity() {
                    return Err(ScriptError::Arity {
                        step,
                        operation,
                        expected: operation.arity(),
                        got: args.len(),
                    });
                }
                Ok(Step { operation, args })
            })
            .collect()
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// A decoded step whose argument count matches its operation.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    pub operation: Operation,
    pub args: &'a [i64],
}

/// A step whose observed output differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub step: usize,
    pub operation: String,
    pub expected: Option<Observed>,
    pub observed: Option<Observed>,
}

/// Result of running a script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub observed: Vec<Option<Observed>>,
    pub mismatches: Vec<Mismatch>,
}

impl Report {
    /// `true` when every expected output matched (or none were given).
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Runs `script` against a fresh [`LruCache`].
///
/// `capacity_override` replaces the capacity argument of every construction
/// step.
pub fn run_script(script: &Script, capacity_override: Option<usize>) -> Result<Report> {
    let steps = script.steps()?;
    info!(steps = steps.len(), ?capacity_override, "running cache script");

    let mut cache: Option<LruCache<i64, i64>> = None;
    let mut report = Report::default();

    for (index, step) in steps.iter().enumerate() {
        let observed = apply(&mut cache, index, *step, capacity_override)?;

        if let Some(expected) = script.expected.as_ref().and_then(|all| all.get(index))
            && *expected != observed
        {
            warn!(
                step = index,
                operation = %step.operation,
                expected = ?expected,
                observed = ?observed,
                "script output mismatch"
            );
            report.mismatches.push(Mismatch {
                step: index,
                operation: script.operations[index].clone(),
                expected: expected.clone(),
                observed: observed.clone(),
            });
        }
        report.observed.push(observed);
    }

    debug!(
        mismatches = report.mismatches.len(),
        final_len = cache.as_ref().map_or(0, LruCache::len),
        "cache script finished"
    );
    Ok(report)
}

fn apply(
    cache: &mut Option<LruCache<i64, i64>>,
    step: usize,
    Step { operation, args }: Step<'_>,
    capacity_override: Option<usize>,
) -> Result<Option<Observed>> {
    if operation == Operation::Construct {
        let capacity = match capacity_override {
            Some(capacity) => capacity,
            None => LruCache::<i64, i64>::try_new(args[0])
                .map_err(|source| ScriptError::InvalidCapacity { step, source })?
                .capacity(),
        };
        *cache = Some(LruCache::new(capacity));
        return Ok(None);
    }

    let cache = cache
        .as_mut()
        .ok_or(ScriptError::NotConstructed { step, operation })?;

    let observed = match operation {
        Operation::Put => {
            cache.put(args[0], args[1]);
            None
        },
        Operation::Get => Some(Observed::Int(cache.get(&args[0]).copied().unwrap_or(MISS))),
        Operation::Contains => Some(Observed::Flag(cache.contains(&args[0]))),
        Operation::Remove => Some(Observed::Int(cache.remove(&args[0]).unwrap_or(MISS))),
        Operation::Len => Some(Observed::Int(cache.len() as i64)),
        Operation::Clear => {
            cache.clear();
            None
        },
        Operation::Dump => Some(Observed::Keys(cache.dump_recency_order())),
        Operation::Construct => None,
    };
    Ok(observed)
}
