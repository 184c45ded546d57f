//! Constraint expressions.
//!
//! A [`Constraint`] turns a raw constraint value returned by a problem's
//! evaluation function into a non-negative violation magnitude. Zero means
//! the constraint is satisfied.
//!
//! Constraints are usually written in a tiny textual form: a relational
//! operator immediately followed by a numeric literal, e.g. `"<=0"`,
//! `">=5"`, `"==3.2"`, `"!=0"`. Arbitrary closures are accepted too.

use crate::error::{MoeaError, Result};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Relational operator of a textual constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `==`
    Equal,
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
}

impl Operator {
    /// The operator's textual symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::LessOrEqual => "<=",
            Operator::GreaterOrEqual => ">=",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::Greater => ">",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(Operator::Equal),
            "<=" => Some(Operator::LessOrEqual),
            ">=" => Some(Operator::GreaterOrEqual),
            "!=" => Some(Operator::NotEqual),
            "<" => Some(Operator::Less),
            ">" => Some(Operator::Greater),
            _ => None,
        }
    }

    /// Violation of `x <op> y`.
    ///
    /// Strict operators add [`Constraint::DELTA`] so that a value sitting
    /// exactly on the bound is still reported as violated.
    pub fn violation(self, x: f64, y: f64) -> f64 {
        match self {
            Operator::Equal => (x - y).abs(),
            Operator::LessOrEqual if x <= y => 0.0,
            Operator::GreaterOrEqual if x >= y => 0.0,
            Operator::LessOrEqual | Operator::GreaterOrEqual => (x - y).abs(),
            Operator::NotEqual if x != y => 0.0,
            Operator::NotEqual => 1.0,
            Operator::Less if x < y => 0.0,
            Operator::Greater if x > y => 0.0,
            Operator::Less | Operator::Greater => (x - y).abs() + Constraint::DELTA,
        }
    }
}

#[derive(Clone)]
enum Kind {
    Relational { op: Operator, target: f64 },
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

/// A parsed constraint. Immutable once built.
///
/// # Example
///
/// ```
/// use u_moea::model::Constraint;
///
/// let c: Constraint = "<=0".parse().unwrap();
/// assert_eq!(c.violation(-1.0), 0.0);
/// assert_eq!(c.violation(1.0), 1.0);
///
/// let strict = Constraint::parse("<0").unwrap();
/// assert_eq!(strict.violation(0.0), 0.0001);
/// ```
#[derive(Clone)]
pub struct Constraint {
    kind: Kind,
}

impl Constraint {
    /// Margin added to violated strict inequalities.
    pub const DELTA: f64 = 0.0001;

    /// `value == 0`, the default constraint of a problem.
    pub const EQUALS_ZERO: &'static str = "==0";
    /// `value <= 0`
    pub const LEQ_ZERO: &'static str = "<=0";
    /// `value >= 0`
    pub const GEQ_ZERO: &'static str = ">=0";
    /// `value < 0`
    pub const LESS_THAN_ZERO: &'static str = "<0";
    /// `value > 0`
    pub const GREATER_THAN_ZERO: &'static str = ">0";

    /// Builds a relational constraint `value <op> target`.
    pub fn new(op: Operator, target: f64) -> Self {
        Self {
            kind: Kind::Relational { op, target },
        }
    }

    /// Wraps a closure mapping a raw value to its violation magnitude.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            kind: Kind::Custom(Arc::new(f)),
        }
    }

    /// Parses the textual form.
    ///
    /// The operator is two characters long when the second character is
    /// `=`, otherwise one character. The rest must be a numeric literal.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let split = if text.as_bytes().get(1) == Some(&b'=') { 2 } else { 1 };

        let (symbol, literal) = match (text.get(..split), text.get(split..)) {
            (Some(symbol), Some(literal)) => (symbol, literal),
            _ => return Err(MoeaError::InvalidConstraint(text.to_string())),
        };

        let op = Operator::from_symbol(symbol)
            .ok_or_else(|| MoeaError::InvalidConstraint(text.to_string()))?;
        let target = literal
            .trim()
            .parse::<f64>()
            .map_err(|_| MoeaError::InvalidConstraint(text.to_string()))?;

        Ok(Self::new(op, target))
    }

    /// Violation magnitude of `value`; zero when satisfied.
    pub fn violation(&self, value: f64) -> f64 {
        match &self.kind {
            Kind::Relational { op, target } => op.violation(value, *target),
            Kind::Custom(f) => f(value),
        }
    }

    /// The operator, for textual constraints.
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            Kind::Relational { op, .. } => Some(op),
            Kind::Custom(_) => None,
        }
    }

    /// The right-hand constant, for textual constraints.
    pub fn target(&self) -> Option<f64> {
        match self.kind {
            Kind::Relational { target, .. } => Some(target),
            Kind::Custom(_) => None,
        }
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::new(Operator::Equal, 0.0)
    }
}

impl FromStr for Constraint {
    type Err = MoeaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Relational { op, target } => write!(f, "{}{}", op.symbol(), target),
            Kind::Custom(_) => write!(f, "<custom>"),
        }
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constraint({self})")
    }
}
