use std::fmt;
use std::str::FromStr;

use sea_orm::DatabaseConnection;

/// Logical databases the application talks to. Keeping the names in a closed
/// enum makes an unknown-database request unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalDb {
    User,
    Health,
}

impl LogicalDb {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalDb::User => "user",
            LogicalDb::Health => "health",
        }
    }
}

impl FromStr for LogicalDb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(LogicalDb::User),
            "health" => Ok(LogicalDb::Health),
            other => Err(format!("unknown logical database: {other}")),
        }
    }
}

impl fmt::Display for LogicalDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoped handle to one logical database, acquired per request.
///
/// Wraps a pooled connection handle; dropping the session returns the handle
/// to the pool on every exit path, including unwinds.
pub struct Session {
    db: LogicalDb,
    conn: DatabaseConnection,
}

impl Session {
    pub fn new(db: LogicalDb, conn: DatabaseConnection) -> Self {
        tracing::trace!(database = db.as_str(), "database session acquired");
        Self { db, conn }
    }

    pub fn database(&self) -> LogicalDb {
        self.db
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::trace!(database = self.db.as_str(), "database session released");
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("db", &self.db).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_db_name_roundtrip() {
        for db in [LogicalDb::User, LogicalDb::Health] {
            assert_eq!(db.as_str().parse::<LogicalDb>(), Ok(db));
        }
    }

    #[test]
    fn unknown_logical_db_is_rejected() {
        assert!("billing".parse::<LogicalDb>().is_err());
    }
}
