use crate::transpiler::dialect::*;

use super::mysql;

/// MariaDB shares the MySQL surface.
pub fn descriptor() -> DialectDescriptor {
    DialectDescriptor {
        name: "mariadb".to_string(),
        ..mysql::descriptor()
    }
}
