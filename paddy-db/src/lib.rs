//! In-memory SQLite data layer for the rice irrigation advisory dashboard.
//!
//! This crate loads the project's pre-computed CSV artifacts into an
//! in-memory SQLite database and exposes typed query methods for
//! consumption by the Dioxus/D3.js dashboard compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV artifacts embedded via `include_str!` at compile time in the consuming crate
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! All artifacts are produced upstream (Prophet/Jupyter work outside this
//! repository); nothing here creates, updates, or deletes data. Every load
//! is strict: a missing column or unparseable date/number aborts the load
//! with [`error::Error::MalformedRow`] rather than skipping the row.
//!
//! # Usage
//!
//! ```rust
//! use paddy_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_eto_daily("time,variable,value\n2020-01-01,T_mean,26.4\n").unwrap();
//! let points = db.query_eto_daily().unwrap();
//! assert_eq!(points.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `eto_daily` - daily reference evapotranspiration variables (melt format)
//! - `eto_period` - weekly/monthly ETo variables keyed by period and year
//! - `crop_daily` - daily irrigation need (INRice) and crop coefficient (Kc)
//! - `crop_period` - weekly/monthly INRice and Kc series keyed by period and year
//! - `irrigation_daily` - daily irrigation water need variables (melt format)
//! - `forecast_points` - forecast series accompanying each trained artifact

pub mod error;
pub mod schema;
mod loader;
mod queries;
pub mod models;

pub use error::{Error, Result};

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the dashboard's tabular artifacts.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV artifact data.
    pub fn new() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

/// Aggregation interval for the period-keyed series tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Weekly,
    Monthly,
}

impl Interval {
    /// Value stored in the `interval` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
        }
    }

    /// Human label for the period axis ("week" or "month").
    pub fn period_label(&self) -> &'static str {
        match self {
            Interval::Weekly => "week",
            Interval::Monthly => "month",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_eto_daily("time,variable,value\n2020-01-01,T_mean,26.4\n")
            .unwrap();
        let points = db2.query_eto_daily().unwrap();
        assert_eq!(points.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let points = db.query_eto_daily().unwrap();
        assert!(points.is_empty(), "New database should have no ETo rows");
    }

    #[test]
    fn interval_labels() {
        assert_eq!(Interval::Weekly.as_str(), "weekly");
        assert_eq!(Interval::Monthly.period_label(), "month");
    }
}
