//! In-memory SQLite table of SpaceX launch records.
//!
//! The dashboard loads its CSV once at startup into this database and every
//! chart update is answered by a typed query against it. Nothing writes to
//! the table after loading.
//!
//! - `Rc<RefCell<Connection>>` wrapper, shared across Dioxus components in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to `wasm32-unknown-unknown`)
//! - CSV text supplied by the caller, typically via `include_str!`
//! - Query methods return serializable structs from [`models`]
//!
//! # Usage
//!
//! ```rust
//! use spacex_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_launches(
//!     "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
//!      KSC LC-39A,1,5300.0,FT\n",
//! )
//! .unwrap();
//!
//! let (min, max) = db.query_payload_bounds().unwrap();
//! assert_eq!((min, max), (5300.0, 5300.0));
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

pub use loader::REQUIRED_COLUMNS;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the launch table.
///
/// Cheaply cloneable (via `Rc`); clones share one connection.
#[derive(Clone, Debug)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The table is empty until [`Database::load_launches`] is called.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_LAUNCH: &str = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,5300.0,FT
";

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_launches(ONE_LAUNCH).unwrap();
        assert_eq!(
            db2.query_launch_count().unwrap(),
            1,
            "Clone should see same data via shared Rc"
        );
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.query_launch_count().unwrap(), 0);
        assert!(db.query_launch_sites().unwrap().is_empty());
    }
}
