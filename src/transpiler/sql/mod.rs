//! Built-in dialect descriptors.

pub mod mariadb;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod snowflake;
pub mod sqlite;
pub mod sqlserver;
