//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains CREATE TABLE statements for all tabular artifact tables.
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `eto_daily` - daily ETo variables in melt format (time, variable, value)
/// - `eto_period` - weekly/monthly ETo variables (interval, period, year, variable, value)
/// - `crop_daily` - daily INRice and Kc values keyed by date
/// - `crop_period` - weekly/monthly INRice and Kc series (interval, period, year, series, value)
/// - `irrigation_daily` - daily irrigation need variables in melt format
/// - `forecast_points` - forecast series per variable (ds, y, yhat, yhat_lower, yhat_upper)
///
/// Weekly and monthly series share one table per family, distinguished by
/// the `interval` column, since their shape is identical apart from the
/// period axis label.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS eto_daily (
        time TEXT NOT NULL,
        variable TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (time, variable)
    );
    CREATE INDEX IF NOT EXISTS idx_eto_daily_variable ON eto_daily(variable);

    CREATE TABLE IF NOT EXISTS eto_period (
        interval TEXT NOT NULL,
        period INTEGER NOT NULL,
        year INTEGER NOT NULL,
        variable TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (interval, period, year, variable)
    );
    CREATE INDEX IF NOT EXISTS idx_eto_period_variable ON eto_period(interval, variable);

    CREATE TABLE IF NOT EXISTS crop_daily (
        time TEXT PRIMARY KEY,
        in_rice REAL NOT NULL,
        kc REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS crop_period (
        interval TEXT NOT NULL,
        period INTEGER NOT NULL,
        year INTEGER NOT NULL,
        series TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (interval, period, year, series)
    );
    CREATE INDEX IF NOT EXISTS idx_crop_period_series ON crop_period(interval, series);

    CREATE TABLE IF NOT EXISTS irrigation_daily (
        time TEXT NOT NULL,
        variable TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (time, variable)
    );

    CREATE TABLE IF NOT EXISTS forecast_points (
        variable TEXT NOT NULL,
        ds TEXT NOT NULL,
        y REAL,
        yhat REAL NOT NULL,
        yhat_lower REAL NOT NULL,
        yhat_upper REAL NOT NULL,
        PRIMARY KEY (variable, ds)
    );
    CREATE INDEX IF NOT EXISTS idx_forecast_variable ON forecast_points(variable);

    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let expected_tables = [
            "eto_daily",
            "eto_period",
            "crop_daily",
            "crop_period",
            "irrigation_daily",
            "forecast_points",
        ];

        for table in &expected_tables {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='{}'",
                        table
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        // Applying schema a second time should not fail due to IF NOT EXISTS.
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
