use serde::Deserialize;

/// Logical operator joining the children of a combinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogicalOp {
    #[default]
    And,
    Or,
}

impl LogicalOp {
    pub fn keyword(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}', expected asc or desc", other)),
        }
    }
}

/// Comparison operator of a leaf condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Like,
    NotLike,
    ILike,
    NotILike,
    In,
    NotIn,
    Between,
    NotBetween,
    IsNull,
    IsNotNull,
}

impl Operator {
    /// Operator keys accepted in declarative filter descriptions.
    pub fn from_key(key: &str) -> Option<Self> {
        let op = match key {
            "eq" => Operator::Eq,
            "ne" => Operator::Ne,
            "lt" => Operator::Lt,
            "lte" => Operator::Lte,
            "gt" => Operator::Gt,
            "gte" => Operator::Gte,
            "like" => Operator::Like,
            "notLike" => Operator::NotLike,
            "iLike" => Operator::ILike,
            "notILike" => Operator::NotILike,
            "in" => Operator::In,
            "notIn" => Operator::NotIn,
            "between" => Operator::Between,
            "notBetween" => Operator::NotBetween,
            _ => return None,
        };
        Some(op)
    }

    /// SQL spelling for operators with a dialect-independent symbol.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Operator::Eq => Some("="),
            Operator::Lt => Some("<"),
            Operator::Lte => Some("<="),
            Operator::Gt => Some(">"),
            Operator::Gte => Some(">="),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Eq => write!(f, "eq"),
            Operator::Ne => write!(f, "ne"),
            Operator::Lt => write!(f, "lt"),
            Operator::Lte => write!(f, "lte"),
            Operator::Gt => write!(f, "gt"),
            Operator::Gte => write!(f, "gte"),
            Operator::Like => write!(f, "like"),
            Operator::NotLike => write!(f, "notLike"),
            Operator::ILike => write!(f, "iLike"),
            Operator::NotILike => write!(f, "notILike"),
            Operator::In => write!(f, "in"),
            Operator::NotIn => write!(f, "notIn"),
            Operator::Between => write!(f, "between"),
            Operator::NotBetween => write!(f, "notBetween"),
            Operator::IsNull => write!(f, "isNull"),
            Operator::IsNotNull => write!(f, "isNotNull"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_keys_match_display() {
        for key in ["eq", "ne", "gte", "notILike", "notBetween"] {
            let op = Operator::from_key(key).unwrap();
            assert_eq!(op.to_string(), key);
        }
        assert_eq!(Operator::from_key("contains"), None);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
