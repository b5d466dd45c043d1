//! CSV artifact loading functions for populating the in-memory database.
//!
//! Each loader parses one artifact format from a string slice (the
//! consuming crate embeds the files with `include_str!`) and inserts rows
//! into the corresponding table. Loading is strict: a missing expected
//! column, an unparseable date, or a non-numeric value aborts the whole
//! load with [`Error::MalformedRow`]. No row is silently skipped; a load
//! failure is fatal to the consuming render, so partially inserted rows
//! are never read.
//!
//! # CSV Formats (all with headers)
//!
//! - **ETo daily (melt)**: `time,variable,value`
//! - **ETo weekly/monthly (melt)**: `week,year,variable,value` / `month,year,variable,value`
//! - **Crop daily (wide)**: `time,INRice,Kc`
//! - **Crop weekly/monthly**: `week,year,INRice` / `month,year,Kc` etc.
//! - **Irrigation daily (melt)**: `time,variable,value`
//! - **Forecast series**: `ds,y,yhat,yhat_lower,yhat_upper` (`y` may be blank)

use crate::error::{Error, Result};
use crate::{Database, Interval};
use chrono::NaiveDate;
use rusqlite::params;

/// Column positions resolved from a header row.
struct Columns<'a> {
    artifact: &'a str,
    indices: Vec<usize>,
}

impl<'a> Columns<'a> {
    /// Resolve each expected header name to its position, case-sensitively.
    fn resolve(artifact: &'a str, headers: &csv::StringRecord, expected: &[&str]) -> Result<Self> {
        let mut indices = Vec::with_capacity(expected.len());
        for name in expected {
            let idx = headers
                .iter()
                .position(|h| h.trim() == *name)
                .ok_or_else(|| Error::malformed(artifact, format!("missing column '{}'", name)))?;
            indices.push(idx);
        }
        Ok(Self { artifact, indices })
    }

    /// Fetch field `slot` (position within the expected-name list) from a record.
    fn field(&self, record: &csv::StringRecord, slot: usize) -> Result<String> {
        record
            .get(self.indices[slot])
            .map(|s| s.trim().to_string())
            .ok_or_else(|| Error::malformed(self.artifact, "row shorter than header"))
    }

    fn date(&self, record: &csv::StringRecord, slot: usize) -> Result<String> {
        let raw = self.field(record, slot)?;
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| Error::malformed(self.artifact, format!("unparseable date '{}'", raw)))?;
        Ok(raw)
    }

    fn number(&self, record: &csv::StringRecord, slot: usize) -> Result<f64> {
        let raw = self.field(record, slot)?;
        raw.parse::<f64>()
            .map_err(|_| Error::malformed(self.artifact, format!("unparseable number '{}'", raw)))
    }

    fn integer(&self, record: &csv::StringRecord, slot: usize) -> Result<i64> {
        let raw = self.field(record, slot)?;
        raw.parse::<i64>()
            .map_err(|_| Error::malformed(self.artifact, format!("unparseable integer '{}'", raw)))
    }

    /// Numeric field that may legitimately be blank (observed `y` on horizon rows).
    fn optional_number(&self, record: &csv::StringRecord, slot: usize) -> Result<Option<f64>> {
        let raw = self.field(record, slot)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<f64>()
            .map(Some)
            .map_err(|_| Error::malformed(self.artifact, format!("unparseable number '{}'", raw)))
    }
}

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes())
}

impl Database {
    /// Load the daily ETo melt table.
    ///
    /// Expected format: `time,variable,value` where `time` is an ISO date.
    ///
    /// # Example CSV
    /// ```text
    /// time,variable,value
    /// 2020-01-01,T_mean,26.4
    /// ```
    pub fn load_eto_daily(&self, csv_data: &str) -> Result<()> {
        const ARTIFACT: &str = "final_daily_melt_eto.csv";
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);
        let cols = Columns::resolve(ARTIFACT, rdr.headers()?, &["time", "variable", "value"])?;

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let time = cols.date(&r, 0)?;
            let variable = cols.field(&r, 1)?;
            let value = cols.number(&r, 2)?;

            conn.execute(
                "INSERT OR REPLACE INTO eto_daily (time, variable, value) VALUES (?1, ?2, ?3)",
                params![time, variable, value],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} daily ETo rows", count);
        Ok(())
    }

    /// Load a weekly or monthly ETo melt table.
    ///
    /// Expected format: `week,year,variable,value` for weekly data,
    /// `month,year,variable,value` for monthly data. The period column
    /// name follows the interval.
    pub fn load_eto_period(&self, interval: Interval, csv_data: &str) -> Result<()> {
        let artifact = match interval {
            Interval::Weekly => "final_weekly_melt_eto.csv",
            Interval::Monthly => "final_monthly_melt_eto.csv",
        };
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);
        let cols = Columns::resolve(
            artifact,
            rdr.headers()?,
            &[interval.period_label(), "year", "variable", "value"],
        )?;

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let period = cols.integer(&r, 0)?;
            let year = cols.integer(&r, 1)?;
            let variable = cols.field(&r, 2)?;
            let value = cols.number(&r, 3)?;

            conn.execute(
                "INSERT OR REPLACE INTO eto_period (interval, period, year, variable, value)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![interval.as_str(), period, year, variable, value],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} {} ETo rows", count, interval.as_str());
        Ok(())
    }

    /// Load the wide-format daily crop table.
    ///
    /// Expected format: `time,INRice,Kc` where `time` is an ISO date.
    pub fn load_crop_daily(&self, csv_data: &str) -> Result<()> {
        const ARTIFACT: &str = "ml_final_df_daily.csv";
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);
        let cols = Columns::resolve(ARTIFACT, rdr.headers()?, &["time", "INRice", "Kc"])?;

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let time = cols.date(&r, 0)?;
            let in_rice = cols.number(&r, 1)?;
            let kc = cols.number(&r, 2)?;

            conn.execute(
                "INSERT OR REPLACE INTO crop_daily (time, in_rice, kc) VALUES (?1, ?2, ?3)",
                params![time, in_rice, kc],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} daily crop rows", count);
        Ok(())
    }

    /// Load a weekly or monthly single-series crop table (INRice or Kc).
    ///
    /// Expected format: `week,year,<series>` or `month,year,<series>`,
    /// where `<series>` is the column named by `series` ("INRice" or "Kc").
    pub fn load_crop_period(&self, interval: Interval, series: &str, csv_data: &str) -> Result<()> {
        let series_slug = match series {
            "INRice" => "in_rice".to_string(),
            other => other.to_lowercase(),
        };
        let artifact = format!("final_{}_{}.csv", interval.as_str(), series_slug);
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);
        let cols = Columns::resolve(
            &artifact,
            rdr.headers()?,
            &[interval.period_label(), "year", series],
        )?;

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let period = cols.integer(&r, 0)?;
            let year = cols.integer(&r, 1)?;
            let value = cols.number(&r, 2)?;

            conn.execute(
                "INSERT OR REPLACE INTO crop_period (interval, period, year, series, value)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![interval.as_str(), period, year, series, value],
            )?;
            count += 1;
        }
        log::info!(
            "loader: loaded {} {} {} rows",
            count,
            interval.as_str(),
            series
        );
        Ok(())
    }

    /// Load the daily irrigation melt table.
    ///
    /// Expected format: `time,variable,value` where `time` is an ISO date.
    pub fn load_irrigation_daily(&self, csv_data: &str) -> Result<()> {
        const ARTIFACT: &str = "final_daily_irrigation.csv";
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);
        let cols = Columns::resolve(ARTIFACT, rdr.headers()?, &["time", "variable", "value"])?;

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let time = cols.date(&r, 0)?;
            let variable = cols.field(&r, 1)?;
            let value = cols.number(&r, 2)?;

            conn.execute(
                "INSERT OR REPLACE INTO irrigation_daily (time, variable, value)
                 VALUES (?1, ?2, ?3)",
                params![time, variable, value],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} daily irrigation rows", count);
        Ok(())
    }

    /// Load one forecast series for a named variable.
    ///
    /// Expected format: `ds,y,yhat,yhat_lower,yhat_upper` where `ds` is an
    /// ISO date and `y` may be blank for horizon rows past the training
    /// window.
    pub fn load_forecast_points(&self, variable: &str, csv_data: &str) -> Result<()> {
        let artifact = format!("fb_prophet_monthly_{}.csv", variable);
        let conn = self.conn.borrow();
        let mut rdr = reader(csv_data);
        let cols = Columns::resolve(
            &artifact,
            rdr.headers()?,
            &["ds", "y", "yhat", "yhat_lower", "yhat_upper"],
        )?;

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let ds = cols.date(&r, 0)?;
            let y = cols.optional_number(&r, 1)?;
            let yhat = cols.number(&r, 2)?;
            let yhat_lower = cols.number(&r, 3)?;
            let yhat_upper = cols.number(&r, 4)?;

            conn.execute(
                "INSERT OR REPLACE INTO forecast_points (variable, ds, y, yhat, yhat_lower, yhat_upper)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![variable, ds, y, yhat, yhat_lower, yhat_upper],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} forecast rows for {}", count, variable);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, Error, Interval};

    #[test]
    fn loads_daily_eto_melt() {
        let db = Database::new().unwrap();
        db.load_eto_daily(
            "time,variable,value\n2020-01-01,T_mean,26.4\n2020-01-01,T_min,22.1\n2020-01-02,T_mean,27.0\n",
        )
        .unwrap();
        let points = db.query_eto_daily().unwrap();
        assert_eq!(points.len(), 3, "All rows should load");
    }

    #[test]
    fn loads_weekly_eto_with_week_header() {
        let db = Database::new().unwrap();
        db.load_eto_period(
            Interval::Weekly,
            "week,year,variable,value\n1,2020,T_mean,26.4\n2,2020,T_mean,26.8\n",
        )
        .unwrap();
        let points = db.query_eto_period(Interval::Weekly, "T_mean").unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn monthly_loader_rejects_weekly_header() {
        let db = Database::new().unwrap();
        let err = db
            .load_eto_period(Interval::Monthly, "week,year,variable,value\n1,2020,T_mean,26.4\n")
            .unwrap_err();
        assert!(
            matches!(err, Error::MalformedRow { .. }),
            "Monthly loader needs a 'month' column, got: {}",
            err
        );
    }

    #[test]
    fn missing_column_aborts_load() {
        let db = Database::new().unwrap();
        let err = db
            .load_eto_daily("time,value\n2020-01-01,26.4\n")
            .unwrap_err();
        match err {
            Error::MalformedRow { detail, .. } => {
                assert!(detail.contains("variable"), "Detail should name the column: {}", detail)
            }
            other => panic!("Expected MalformedRow, got {}", other),
        }
    }

    #[test]
    fn unparseable_date_aborts_load() {
        let db = Database::new().unwrap();
        let err = db
            .load_eto_daily("time,variable,value\nnot-a-date,T_mean,26.4\n")
            .unwrap_err();
        assert!(matches!(err, Error::MalformedRow { .. }));
    }

    #[test]
    fn non_numeric_value_aborts_instead_of_skipping() {
        let db = Database::new().unwrap();
        let err = db
            .load_eto_daily("time,variable,value\n2020-01-01,T_mean,---\n")
            .unwrap_err();
        assert!(
            matches!(err, Error::MalformedRow { .. }),
            "Strict loading: bad values abort, they are never skipped"
        );
        // The failed load must not leave partial data visible as success.
        assert!(db.query_eto_daily().is_ok());
    }

    #[test]
    fn column_order_does_not_matter() {
        let db = Database::new().unwrap();
        db.load_eto_daily("variable,value,time\nT_mean,26.4,2020-01-01\n")
            .unwrap();
        let points = db.query_eto_daily().unwrap();
        assert_eq!(points[0].variable, "T_mean");
        assert_eq!(points[0].time, "2020-01-01");
    }

    #[test]
    fn loads_wide_crop_daily() {
        let db = Database::new().unwrap();
        db.load_crop_daily("time,INRice,Kc\n2020-01-01,5.2,1.05\n2020-01-02,5.4,1.07\n")
            .unwrap();
        let points = db.query_crop_daily().unwrap();
        assert_eq!(points.len(), 2);
        assert!((points[0].kc - 1.05).abs() < f64::EPSILON);
    }

    #[test]
    fn loads_crop_period_series_column() {
        let db = Database::new().unwrap();
        db.load_crop_period(Interval::Weekly, "INRice", "week,year,INRice\n1,2020,36.1\n")
            .unwrap();
        db.load_crop_period(Interval::Weekly, "Kc", "week,year,Kc\n1,2020,1.05\n")
            .unwrap();
        let in_rice = db.query_crop_period(Interval::Weekly, "INRice").unwrap();
        let kc = db.query_crop_period(Interval::Weekly, "Kc").unwrap();
        assert_eq!(in_rice.len(), 1);
        assert_eq!(kc.len(), 1);
        assert!((in_rice[0].value - 36.1).abs() < f64::EPSILON);
    }

    #[test]
    fn forecast_loader_accepts_blank_observed_values() {
        let db = Database::new().unwrap();
        db.load_forecast_points(
            "T_mean",
            "ds,y,yhat,yhat_lower,yhat_upper\n2021-06-01,26.9,26.7,25.8,27.6\n2021-07-01,,27.1,25.9,28.3\n",
        )
        .unwrap();
        let points = db.query_forecast("T_mean").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].y, Some(26.9));
        assert_eq!(points[1].y, None, "Horizon row has no observed value");
    }

    #[test]
    fn forecast_loader_rejects_missing_bounds() {
        let db = Database::new().unwrap();
        let err = db
            .load_forecast_points("T_mean", "ds,yhat\n2021-06-01,26.7\n")
            .unwrap_err();
        assert!(matches!(err, Error::MalformedRow { .. }));
    }
}
