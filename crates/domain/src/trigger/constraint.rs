//! Constraint — one named condition a trigger places on an event.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A named condition with an operator and one or more candidate values.
///
/// All constraints of a trigger must match (logical AND). How the values of
/// a single constraint combine is decided by the resource variant; the
/// stock [`Operator`] rules are OR for positive and AND for negated operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub name: String,
    /// Operator token; empty means equality.
    #[serde(default)]
    pub op: String,
    pub values: Vec<String>,
}

impl Constraint {
    #[must_use]
    pub fn new<V>(name: impl Into<String>, op: impl Into<String>, values: V) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            name: name.into(),
            op: op.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Parsed operator, or `None` for an unknown token.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.op.parse().ok()
    }

    /// Check that the constraint carries values and a known operator.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyConstraintValues`] when `values` is empty
    /// - [`ValidationError::UnknownOperator`] when `op` does not parse
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.values.is_empty() {
            return Err(ValidationError::EmptyConstraintValues {
                name: self.name.clone(),
            });
        }
        if self.operator().is_none() {
            return Err(ValidationError::UnknownOperator {
                name: self.name.clone(),
                op: self.op.clone(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} [{}]", self.name, self.op, self.values.join(", "))
    }
}

/// Comparison applied between a resource's subject values and constraint values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    /// Case-insensitive wildcard match; `*`/`%` match any run, `?`/`_` one character.
    Like,
    NotLike,
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "eq" | "=" | "==" => Ok(Self::Equal),
            "ne" | "!=" | "<>" => Ok(Self::NotEqual),
            "like" => Ok(Self::Like),
            "not like" | "nlike" => Ok(Self::NotLike),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}

/// Returned when an operator token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator {0:?}")]
pub struct UnknownOperator(pub String);

impl Operator {
    /// Compare `subjects` (the resource's identifying strings, e.g. handle and
    /// id) against the constraint `values`.
    ///
    /// Positive operators succeed when any value hits any subject; negated
    /// operators succeed when no value does. Empty subjects are skipped.
    #[must_use]
    pub fn check(self, subjects: &[&str], values: &[String]) -> bool {
        let hit = |value: &String| {
            subjects
                .iter()
                .filter(|s| !s.is_empty())
                .any(|subject| match self {
                    Self::Equal | Self::NotEqual => subject == value,
                    Self::Like | Self::NotLike => like(value, subject),
                })
        };
        match self {
            Self::Equal | Self::Like => values.iter().any(hit),
            Self::NotEqual | Self::NotLike => !values.iter().any(hit),
        }
    }
}

/// Case-insensitive wildcard match of `text` against `pattern`.
fn like(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let text: Vec<char> = text.to_lowercase().chars().collect();

    let (mut p, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*' | '%') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == '_' || c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, matched)) => {
                    p = star + 1;
                    t = matched + 1;
                    backtrack = Some((star, matched + 1));
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|c| matches!(c, '*' | '%'))
}
