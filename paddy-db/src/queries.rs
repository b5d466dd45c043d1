//! Typed query methods for retrieving dashboard series from the database.
//!
//! All queries return structs from [`crate::models`] that serialize to
//! JSON for the D3.js chart components. Queries are pure reads ordered by
//! their period axis: re-running one against unchanged data yields an
//! identical result, which is what keeps every render idempotent.

use crate::error::Result;
use crate::models::{CropDailyPoint, ForecastPoint, VariablePoint, YearPoint};
use crate::{Database, Interval};
use rusqlite::params;

impl Database {
    /// All daily ETo melt rows, every variable, ordered chronologically.
    ///
    /// The daily chart draws one line per variable, so no categorical
    /// filter is applied here.
    pub fn query_eto_daily(&self) -> Result<Vec<VariablePoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT time, variable, value FROM eto_daily ORDER BY time, variable",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(VariablePoint {
                    time: row.get(0)?,
                    variable: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!("query: query_eto_daily returned {} records", rows.len());
        Ok(rows)
    }

    /// Weekly or monthly ETo rows restricted to one variable, ordered by
    /// period so each year traces a single left-to-right line.
    pub fn query_eto_period(&self, interval: Interval, variable: &str) -> Result<Vec<YearPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT period, year, value FROM eto_period
             WHERE interval = ?1 AND variable = ?2
             ORDER BY period, year",
        )?;
        let rows = stmt
            .query_map(params![interval.as_str(), variable], |row| {
                Ok(YearPoint {
                    period: row.get(0)?,
                    year: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_eto_period({}, {}) returned {} records",
            interval.as_str(),
            variable,
            rows.len()
        );
        Ok(rows)
    }

    /// The wide daily crop table (INRice and Kc per date), chronological.
    pub fn query_crop_daily(&self) -> Result<Vec<CropDailyPoint>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare("SELECT time, in_rice, kc FROM crop_daily ORDER BY time")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CropDailyPoint {
                    time: row.get(0)?,
                    in_rice: row.get(1)?,
                    kc: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!("query: query_crop_daily returned {} records", rows.len());
        Ok(rows)
    }

    /// Weekly or monthly crop series ("INRice" or "Kc"), ordered by period.
    pub fn query_crop_period(&self, interval: Interval, series: &str) -> Result<Vec<YearPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT period, year, value FROM crop_period
             WHERE interval = ?1 AND series = ?2
             ORDER BY period, year",
        )?;
        let rows = stmt
            .query_map(params![interval.as_str(), series], |row| {
                Ok(YearPoint {
                    period: row.get(0)?,
                    year: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_crop_period({}, {}) returned {} records",
            interval.as_str(),
            series,
            rows.len()
        );
        Ok(rows)
    }

    /// All daily irrigation melt rows, every variable, chronological.
    pub fn query_irrigation_daily(&self) -> Result<Vec<VariablePoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT time, variable, value FROM irrigation_daily ORDER BY time, variable",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(VariablePoint {
                    time: row.get(0)?,
                    variable: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_irrigation_daily returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// The forecast series for one variable, ordered by date stamp.
    pub fn query_forecast(&self, variable: &str) -> Result<Vec<ForecastPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT ds, y, yhat, yhat_lower, yhat_upper FROM forecast_points
             WHERE variable = ?1
             ORDER BY ds",
        )?;
        let rows = stmt
            .query_map(params![variable], |row| {
                Ok(ForecastPoint {
                    ds: row.get(0)?,
                    y: row.get(1)?,
                    yhat: row.get(2)?,
                    yhat_lower: row.get(3)?,
                    yhat_upper: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_forecast({}) returned {} records",
            variable,
            rows.len()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, Interval};

    fn weekly_fixture() -> Database {
        let db = Database::new().unwrap();
        db.load_eto_period(
            Interval::Weekly,
            "week,year,variable,value\n\
             2,2020,T_mean,26.8\n\
             1,2020,T_mean,26.4\n\
             1,2021,T_mean,26.1\n\
             1,2020,T_min,22.0\n\
             1,2020,T_max,31.2\n",
        )
        .unwrap();
        db
    }

    #[test]
    fn daily_query_returns_all_variables_unfiltered() {
        let db = Database::new().unwrap();
        db.load_eto_daily(
            "time,variable,value\n2020-01-01,T_mean,26.4\n2020-01-01,T_min,22.1\n",
        )
        .unwrap();
        let points = db.query_eto_daily().unwrap();
        assert_eq!(points.len(), 2, "Daily chart takes every variable's rows");
    }

    #[test]
    fn period_query_filters_to_one_variable() {
        let db = weekly_fixture();
        let points = db.query_eto_period(Interval::Weekly, "T_mean").unwrap();
        assert_eq!(points.len(), 3);
        // Only the requested variable survives the categorical filter.
        let t_min = db.query_eto_period(Interval::Weekly, "T_min").unwrap();
        assert_eq!(t_min.len(), 1);
    }

    #[test]
    fn period_query_is_ordered_by_period() {
        let db = weekly_fixture();
        let points = db.query_eto_period(Interval::Weekly, "T_mean").unwrap();
        let periods: Vec<i64> = points.iter().map(|p| p.period).collect();
        let mut sorted = periods.clone();
        sorted.sort();
        assert_eq!(periods, sorted, "Rows arrive sorted by period");
    }

    #[test]
    fn unknown_variable_yields_empty_not_error() {
        let db = weekly_fixture();
        let points = db.query_eto_period(Interval::Weekly, "Humidity").unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn queries_are_idempotent_across_renders() {
        let db = weekly_fixture();
        let first = db.query_eto_period(Interval::Weekly, "T_mean").unwrap();
        let second = db.query_eto_period(Interval::Weekly, "T_mean").unwrap();
        assert_eq!(first, second, "Unchanged data must re-render identically");
    }

    #[test]
    fn interval_partitions_are_independent() {
        let db = weekly_fixture();
        db.load_eto_period(
            Interval::Monthly,
            "month,year,variable,value\n1,2020,T_mean,26.6\n",
        )
        .unwrap();
        let weekly = db.query_eto_period(Interval::Weekly, "T_mean").unwrap();
        let monthly = db.query_eto_period(Interval::Monthly, "T_mean").unwrap();
        assert_eq!(weekly.len(), 3);
        assert_eq!(monthly.len(), 1);
    }

    #[test]
    fn forecast_query_scopes_by_variable() {
        let db = Database::new().unwrap();
        db.load_forecast_points(
            "T_mean",
            "ds,y,yhat,yhat_lower,yhat_upper\n2021-06-01,26.9,26.7,25.8,27.6\n",
        )
        .unwrap();
        db.load_forecast_points(
            "T_min",
            "ds,y,yhat,yhat_lower,yhat_upper\n2021-06-01,22.2,22.0,21.1,23.0\n",
        )
        .unwrap();
        let t_mean = db.query_forecast("T_mean").unwrap();
        assert_eq!(t_mean.len(), 1);
        assert!((t_mean[0].yhat - 26.7).abs() < f64::EPSILON);
    }
}
