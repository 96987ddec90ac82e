use serde::Serialize;
use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
/// Route-keyed collection of validation messages. An empty tree means
/// validation passed; every message names the offending key so failures
/// are never silently coerced.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    errors: BTreeMap<String, Vec<String>>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of messages across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Add a message at the root route.
    pub fn add(&mut self, err: impl ToString) {
        self.add_at(String::new(), err);
    }

    /// Add a message under a specific route.
    pub fn add_at(&mut self, route: impl Into<String>, err: impl ToString) {
        self.errors
            .entry(route.into())
            .or_default()
            .push(err.to_string());
    }

    /// Merge another tree, prefixing its routes with `route`.
    pub fn merge_at(&mut self, route: &str, other: Self) {
        for (key, messages) in other.errors {
            self.errors
                .entry(join_route(route, &key))
                .or_default()
                .extend(messages);
        }
    }

    /// Ok when empty, otherwise the tree itself.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// All (route, message) pairs in deterministic order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().flat_map(|(route, messages)| {
            messages.iter().map(move |msg| (route.as_str(), msg.as_str()))
        })
    }
}

fn join_route(prefix: &str, suffix: &str) -> String {
    match (prefix.is_empty(), suffix.is_empty()) {
        (true, _) => suffix.to_string(),
        (_, true) => prefix.to_string(),
        _ => format!("{prefix}.{suffix}"),
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (route, message) in self.messages() {
            if !first {
                write!(f, "; ")?;
            }
            first = false;

            if route.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{route}: {message}")?;
            }
        }

        Ok(())
    }
}

/// Push a formatted message onto an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}
