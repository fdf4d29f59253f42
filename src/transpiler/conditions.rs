//! WHERE clause compilation.

use crate::ast::*;
use crate::error::{SqlweaveError, SqlweaveResult};
use crate::transpiler::dialect::CaseInsensitiveLike;
use crate::transpiler::traits::SqlGenerator;

/// Context for parameterized query building.
#[derive(Debug, Default)]
pub struct ParamContext {
    /// Current parameter index (1-based for Postgres $1, $2, etc.)
    pub index: usize,
    /// Collected parameter values in order
    pub params: Vec<Value>,
}

impl ParamContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value and return the placeholder for it.
    pub fn add_param(&mut self, value: Value, generator: &dyn SqlGenerator) -> String {
        self.index += 1;
        self.params.push(value);
        generator.placeholder(self.index)
    }
}

/// Renders a predicate tree into a WHERE fragment (without the keyword).
///
/// Values are inlined as literals, or, when built with
/// [`WhereCompiler::parameterized`], replaced by placeholders and collected
/// into a [`ParamContext`]. NULL is always inlined.
pub struct WhereCompiler<'a> {
    generator: &'a dyn SqlGenerator,
    alias: &'a str,
    params: Option<ParamContext>,
}

impl<'a> WhereCompiler<'a> {
    pub fn new(generator: &'a dyn SqlGenerator, alias: &'a str) -> Self {
        Self {
            generator,
            alias,
            params: None,
        }
    }

    pub fn parameterized(generator: &'a dyn SqlGenerator, alias: &'a str) -> Self {
        Self {
            generator,
            alias,
            params: Some(ParamContext::new()),
        }
    }

    /// Compile an optional predicate. `None` yields no fragment.
    pub fn compile(&mut self, predicate: Option<&Predicate>) -> SqlweaveResult<Option<String>> {
        match predicate {
            None => Ok(None),
            Some(p) => {
                let fragment = self.render(p, None)?;
                tracing::trace!("compiled WHERE fragment: {}", fragment);
                Ok(Some(fragment))
            }
        }
    }

    /// Values collected so far, if parameterized.
    pub fn into_params(self) -> Vec<Value> {
        self.params.map(|p| p.params).unwrap_or_default()
    }

    fn render(&mut self, predicate: &Predicate, parent: Option<LogicalOp>) -> SqlweaveResult<String> {
        match predicate {
            Predicate::Condition(cond) => self.render_condition(cond),
            Predicate::Group { op, children } => match children.as_slice() {
                [] => Err(SqlweaveError::predicate(format!(
                    "{} group has no conditions",
                    op.keyword()
                ))),
                // A single-child group is transparent.
                [only] => self.render(only, parent),
                _ => {
                    let parts = children
                        .iter()
                        .map(|child| self.render(child, Some(*op)))
                        .collect::<SqlweaveResult<Vec<_>>>()?;
                    let joined = parts.join(&format!(" {} ", op.keyword()));
                    match parent {
                        Some(outer) if outer != *op => Ok(format!("({})", joined)),
                        _ => Ok(joined),
                    }
                }
            },
            Predicate::Not(inner) => Ok(format!("NOT ({})", self.render(inner, None)?)),
        }
    }

    fn render_condition(&mut self, cond: &Condition) -> SqlweaveResult<String> {
        let col = self.generator.quote_column(self.alias, &cond.column);

        match (cond.op, &cond.operand) {
            (Operator::Eq, Operand::Scalar(Value::Null)) | (Operator::IsNull, Operand::None) => {
                Ok(format!("{} IS NULL", col))
            }
            (Operator::Ne, Operand::Scalar(Value::Null))
            | (Operator::IsNotNull, Operand::None) => Ok(format!("{} IS NOT NULL", col)),
            (op @ (Operator::Eq | Operator::Lt | Operator::Lte | Operator::Gt | Operator::Gte), Operand::Scalar(v)) => {
                let val = self.comparable(cond, v)?;
                let symbol = op.symbol().unwrap_or("=");
                Ok(format!("{} {} {}", col, symbol, val))
            }
            (Operator::Ne, Operand::Scalar(v)) => {
                let val = self.comparable(cond, v)?;
                Ok(format!("{} {} {}", col, self.generator.not_equal_operator(), val))
            }
            (Operator::Like, Operand::Scalar(v)) => {
                Ok(format!("{} LIKE {}", col, self.pattern(cond, v)?))
            }
            (Operator::NotLike, Operand::Scalar(v)) => {
                Ok(format!("{} NOT LIKE {}", col, self.pattern(cond, v)?))
            }
            (Operator::ILike | Operator::NotILike, Operand::Scalar(v)) => {
                let negation = if cond.op == Operator::NotILike { "NOT " } else { "" };
                match self.generator.case_insensitive_like() {
                    CaseInsensitiveLike::Native => {
                        Ok(format!("{} {}ILIKE {}", col, negation, self.pattern(cond, v)?))
                    }
                    CaseInsensitiveLike::LowerFold => Ok(format!(
                        "LOWER({}) {}LIKE LOWER({})",
                        col,
                        negation,
                        self.pattern(cond, v)?
                    )),
                    CaseInsensitiveLike::Unsupported => {
                        Err(SqlweaveError::UnsupportedOperatorForDialect {
                            operator: cond.op,
                            dialect: self.generator.dialect_name().to_string(),
                        })
                    }
                }
            }
            (Operator::In | Operator::NotIn, Operand::Set(values)) => {
                if values.is_empty() {
                    return Err(SqlweaveError::predicate(format!(
                        "'{}' on column '{}' has an empty value list",
                        cond.op, cond.column
                    )));
                }
                let list = self.value_list(values)?;
                let keyword = if cond.op == Operator::In { "IN" } else { "NOT IN" };
                Ok(format!("{} {} {}", col, keyword, list))
            }
            (Operator::Between | Operator::NotBetween, Operand::Range(lo, hi)) => {
                let lo = self.comparable(cond, lo)?;
                let hi = self.comparable(cond, hi)?;
                let keyword = if cond.op == Operator::Between { "BETWEEN" } else { "NOT BETWEEN" };
                Ok(format!("({} {} {} AND {})", col, keyword, lo, hi))
            }
            (op, operand) => Err(SqlweaveError::predicate(format!(
                "operator '{}' on column '{}' cannot take {}",
                op,
                cond.column,
                describe_operand(operand)
            ))),
        }
    }

    /// A non-NULL operand for an ordering or range comparison.
    fn comparable(&mut self, cond: &Condition, value: &Value) -> SqlweaveResult<String> {
        if value.is_null() {
            return Err(SqlweaveError::predicate(format!(
                "operator '{}' on column '{}' cannot compare against NULL",
                cond.op, cond.column
            )));
        }
        self.value(value)
    }

    fn pattern(&mut self, cond: &Condition, value: &Value) -> SqlweaveResult<String> {
        match value {
            Value::String(_) => self.value(value),
            other => Err(SqlweaveError::predicate(format!(
                "operator '{}' on column '{}' expects a string pattern, got {}",
                cond.op,
                cond.column,
                other.kind()
            ))),
        }
    }

    fn value(&mut self, value: &Value) -> SqlweaveResult<String> {
        let literal = self.generator.literal(value)?;
        match &mut self.params {
            Some(ctx) if !value.is_null() => Ok(ctx.add_param(value.clone(), self.generator)),
            _ => Ok(literal),
        }
    }

    fn value_list(&mut self, values: &[Value]) -> SqlweaveResult<String> {
        if self.params.is_none() {
            return self.generator.literal_list(values);
        }
        let parts = values
            .iter()
            .map(|v| self.value(v))
            .collect::<SqlweaveResult<Vec<_>>>()?;
        Ok(format!("({})", parts.join(", ")))
    }
}

fn describe_operand(operand: &Operand) -> String {
    match operand {
        Operand::None => "no operand".to_string(),
        Operand::Scalar(v) => format!("a scalar ({})", v.kind()),
        Operand::Set(_) => "a value list".to_string(),
        Operand::Range(_, _) => "a range".to_string(),
    }
}

/// Compile a predicate with inlined literals.
pub fn compile_where(
    generator: &dyn SqlGenerator,
    alias: &str,
    predicate: Option<&Predicate>,
) -> SqlweaveResult<Option<String>> {
    WhereCompiler::new(generator, alias).compile(predicate)
}
