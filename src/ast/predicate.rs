//! Predicate tree for WHERE clauses.

use super::{LogicalOp, Operator, Value};

/// Right-hand side of a condition. Which shape is valid depends on the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// No operand (IS NULL / IS NOT NULL).
    None,
    Scalar(Value),
    /// Value set for IN / NOT IN.
    Set(Vec<Value>),
    /// Inclusive range for BETWEEN / NOT BETWEEN.
    Range(Value, Value),
}

/// A leaf comparison: `column <op> operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Column name, optionally qualified as `alias.column`.
    pub column: String,
    pub op: Operator,
    pub operand: Operand,
}

impl Condition {
    /// Build a condition, rewriting `= NULL` / `!= NULL` to `IS [NOT] NULL`.
    pub fn new(column: impl Into<String>, op: Operator, operand: Operand) -> Self {
        let (op, operand) = match (op, operand) {
            (Operator::Eq, Operand::Scalar(Value::Null)) => (Operator::IsNull, Operand::None),
            (Operator::Ne, Operand::Scalar(Value::Null)) => (Operator::IsNotNull, Operand::None),
            other => other,
        };
        Self {
            column: column.into(),
            op,
            operand,
        }
    }
}

/// Recursive WHERE predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Condition(Condition),
    /// AND / OR over at least one child.
    Group {
        op: LogicalOp,
        children: Vec<Predicate>,
    },
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn group(op: LogicalOp, children: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::Group {
            op,
            children: children.into_iter().collect(),
        }
    }

    /// Combine with another predicate under AND, flattening into an existing AND group.
    pub fn and(self, other: impl Into<Predicate>) -> Self {
        self.combine(LogicalOp::And, other.into())
    }

    /// Combine with another predicate under OR, flattening into an existing OR group.
    pub fn or(self, other: impl Into<Predicate>) -> Self {
        self.combine(LogicalOp::Or, other.into())
    }

    fn combine(self, op: LogicalOp, other: Predicate) -> Self {
        match self {
            Predicate::Group {
                op: existing,
                mut children,
            } if existing == op => {
                children.push(other);
                Predicate::Group { op, children }
            }
            lhs => Predicate::Group {
                op,
                children: vec![lhs, other],
            },
        }
    }
}

impl From<Condition> for Predicate {
    fn from(c: Condition) -> Self {
        Predicate::Condition(c)
    }
}
