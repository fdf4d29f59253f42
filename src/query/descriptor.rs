use std::sync::Arc;

use crate::ast::{Predicate, SortOrder};

/// Whether the query has entered SELECT mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Unset,
    Select,
}

/// One projected column, optionally renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub column: String,
    pub alias: Option<String>,
}

impl Attribute {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            alias: None,
        }
    }

    pub fn aliased(column: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for Attribute {
    fn from(column: &str) -> Self {
        Attribute::new(column)
    }
}

impl From<String> for Attribute {
    fn from(column: String) -> Self {
        Attribute::new(column)
    }
}

impl From<(&str, &str)> for Attribute {
    fn from((column, alias): (&str, &str)) -> Self {
        Attribute::aliased(column, alias)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub column: String,
    pub order: SortOrder,
}

/// Accumulated, immutable state of one in-progress SELECT.
///
/// Fields hold `Arc`s so that derived descriptors share unchanged parts with
/// the descriptor they were derived from. Nothing behind an `Arc` is ever
/// mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryDescriptor {
    pub mode: Mode,
    /// `None` projects `*`; `Some([])` is an error at render time.
    pub attributes: Option<Arc<[Attribute]>>,
    pub predicate: Option<Arc<Predicate>>,
    pub order: Option<Arc<[OrderItem]>>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl QueryDescriptor {
    /// A fresh SELECT with nothing set.
    pub fn select() -> Self {
        Self {
            mode: Mode::Select,
            ..Default::default()
        }
    }

    pub fn with_attributes(&self, attributes: Vec<Attribute>) -> Self {
        Self {
            attributes: Some(attributes.into()),
            ..self.clone()
        }
    }

    pub fn with_predicate(&self, predicate: Option<Predicate>) -> Self {
        Self {
            predicate: predicate.map(Arc::new),
            ..self.clone()
        }
    }

    pub fn with_order(&self, item: OrderItem) -> Self {
        let mut items: Vec<OrderItem> = self.order.as_deref().unwrap_or_default().to_vec();
        items.push(item);
        Self {
            order: Some(items.into()),
            ..self.clone()
        }
    }

    pub fn with_limit(&self, limit: u64) -> Self {
        Self {
            limit: Some(limit),
            ..self.clone()
        }
    }

    pub fn with_offset(&self, offset: u64) -> Self {
        Self {
            offset: Some(offset),
            ..self.clone()
        }
    }

    pub fn is_paginated(&self) -> bool {
        self.limit.is_some() || self.offset.is_some()
    }
}
