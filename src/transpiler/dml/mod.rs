//! DML statement builders.

pub mod select;
