//! Daily case records and the series handed to the numeric core

use crate::error::{ChartError, Result};
use chrono::{Days, NaiveDate};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// Which count a series holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseField {
    /// Cases reported on that day
    #[default]
    NewCases,
    /// Running total of cases up to that day
    TotalCases,
}

impl CaseField {
    /// Human-readable label used in the chart legend
    pub fn label(&self) -> &'static str {
        match self {
            CaseField::NewCases => "New Cases",
            CaseField::TotalCases => "Total Cases",
        }
    }
}

impl fmt::Display for CaseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseField {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "new" | "new-cases" | "new_cases" => Ok(CaseField::NewCases),
            "1" | "total" | "total-cases" | "total_cases" => Ok(CaseField::TotalCases),
            other => Err(ChartError::InvalidParameter(format!(
                "Unknown case field: {}",
                other
            ))),
        }
    }
}

/// One day of upstream data
///
/// Deserializes from the covidtracking daily payload (`date` as a `yyyyMMdd`
/// number, `positiveIncrease`, `positive`) and from CSV rows with a
/// `date,positive_increase,positive` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar day the counts belong to
    #[serde(deserialize_with = "deserialize_day")]
    pub date: NaiveDate,
    /// Cases reported that day
    #[serde(default, alias = "positiveIncrease")]
    pub positive_increase: Option<i64>,
    /// Cumulative cases
    #[serde(default)]
    pub positive: Option<i64>,
}

impl DailyRecord {
    /// Create a record with both counts present
    pub fn new(date: NaiveDate, positive_increase: i64, positive: i64) -> Self {
        Self {
            date,
            positive_increase: Some(positive_increase),
            positive: Some(positive),
        }
    }

    /// The requested count, with a missing value read as zero
    pub fn count(&self, field: CaseField) -> Result<u64> {
        let raw = match field {
            CaseField::NewCases => self.positive_increase,
            CaseField::TotalCases => self.positive,
        }
        .unwrap_or(0);

        u64::try_from(raw).map_err(|_| {
            ChartError::DataError(format!(
                "Negative {} count {} on {}",
                field.label(),
                raw,
                self.date
            ))
        })
    }
}

struct DayVisitor;

impl<'de> Visitor<'de> for DayVisitor {
    type Value = NaiveDate;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a date as yyyyMMdd or YYYY-MM-DD")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<NaiveDate, E> {
        let year = i32::try_from(v / 10_000).map_err(E::custom)?;
        let month = ((v / 100) % 100) as u32;
        let day = (v % 100) as u32;
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| E::custom(format!("invalid date {}", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<NaiveDate, E> {
        let v = u64::try_from(v).map_err(|_| E::custom(format!("invalid date {}", v)))?;
        self.visit_u64(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<NaiveDate, E> {
        let v = v.trim();
        NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(v, "%Y%m%d"))
            .map_err(|_| E::custom(format!("invalid date {:?}", v)))
    }
}

fn deserialize_day<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DayVisitor)
}

/// A JSON payload may hold one day or many
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Many(Vec<DailyRecord>),
    One(DailyRecord),
}

/// Gap-free run of daily counts for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseSeries {
    start: NaiveDate,
    field: CaseField,
    values: Vec<u64>,
}

impl CaseSeries {
    /// Create a series whose first value belongs to `start`
    pub fn new(start: NaiveDate, field: CaseField, values: Vec<u64>) -> Self {
        Self {
            start,
            field,
            values,
        }
    }

    /// Build a series from daily records.
    ///
    /// Records are sorted by date first. Duplicate days, missing days and
    /// negative counts are rejected rather than patched over.
    pub fn from_records(mut records: Vec<DailyRecord>, field: CaseField) -> Result<Self> {
        records.sort_by_key(|record| record.date);

        let start = match records.first() {
            Some(first) => first.date,
            None => {
                return Err(ChartError::DataError(
                    "No daily records to build a series from".to_string(),
                ))
            }
        };

        for pair in records.windows(2) {
            let gap = (pair[1].date - pair[0].date).num_days();
            if gap == 0 {
                return Err(ChartError::DataError(format!(
                    "Duplicate records for {}",
                    pair[0].date
                )));
            }
            if gap > 1 {
                return Err(ChartError::DataError(format!(
                    "Missing days between {} and {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        let values = records
            .iter()
            .map(|record| record.count(field))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(start, field, values))
    }

    /// Daily values in chronological order
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Date of the first value
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Date of the last value, or `None` for an empty series
    pub fn end(&self) -> Option<NaiveDate> {
        let offset = self.values.len().checked_sub(1)?;
        self.start.checked_add_days(Days::new(offset as u64))
    }

    /// Field the values were taken from
    pub fn field(&self) -> CaseField {
        self.field
    }

    /// Number of days in the series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no days
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keep only the most recent `days` values
    pub fn tail(&self, days: usize) -> Self {
        let skip = self.values.len().saturating_sub(days);
        let start = self
            .start
            .checked_add_days(Days::new(skip as u64))
            .unwrap_or(self.start);

        Self::new(start, self.field, self.values[skip..].to_vec())
    }
}

/// Loads daily records from local files
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load records from a CSV file with a `date,positive_increase,positive` header
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<DailyRecord>> {
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }

        Ok(records)
    }

    /// Load records from a JSON file holding one record or an array of them
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Vec<DailyRecord>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse records from JSON text
    pub fn from_json_str(content: &str) -> Result<Vec<DailyRecord>> {
        Ok(match serde_json::from_str::<Payload>(content)? {
            Payload::Many(records) => records,
            Payload::One(record) => vec![record],
        })
    }

    /// Load records, picking the format from the file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<DailyRecord>> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("csv") => Self::from_csv(path),
            Some("json") => Self::from_json(path),
            _ => Err(ChartError::DataError(format!(
                "Unsupported input format: {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 8, d).unwrap()
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("0".parse::<CaseField>().unwrap(), CaseField::NewCases);
        assert_eq!("Total".parse::<CaseField>().unwrap(), CaseField::TotalCases);
        assert!("active".parse::<CaseField>().is_err());
    }

    #[test]
    fn test_json_record() {
        let records = DataLoader::from_json_str(
            r#"{"date":20200818,"state":"NY","positive":427000,"positiveIncrease":604,"death":25000}"#,
        )
        .unwrap();
        assert_eq!(records, vec![DailyRecord::new(day(18), 604, 427000)]);
    }

    #[test]
    fn test_missing_count_reads_as_zero() {
        let records =
            DataLoader::from_json_str(r#"[{"date":20200818,"positiveIncrease":null}]"#).unwrap();
        assert_eq!(records[0].count(CaseField::NewCases).unwrap(), 0);
        assert_eq!(records[0].count(CaseField::TotalCases).unwrap(), 0);
    }

    #[test]
    fn test_negative_count_rejected() {
        let record = DailyRecord::new(day(3), -12, 100);
        assert!(matches!(
            record.count(CaseField::NewCases),
            Err(ChartError::DataError(_))
        ));
        assert_eq!(record.count(CaseField::TotalCases).unwrap(), 100);
    }

    #[test]
    fn test_series_sorted_from_records() {
        let records = vec![
            DailyRecord::new(day(3), 30, 60),
            DailyRecord::new(day(1), 10, 10),
            DailyRecord::new(day(2), 20, 30),
        ];
        let series = CaseSeries::from_records(records, CaseField::TotalCases).unwrap();
        assert_eq!(series.start(), day(1));
        assert_eq!(series.end(), Some(day(3)));
        assert_eq!(series.values(), &[10, 30, 60]);
    }

    #[test]
    fn test_series_tail() {
        let series = CaseSeries::new(day(1), CaseField::NewCases, vec![1, 2, 3, 4, 5]);
        let tail = series.tail(2);
        assert_eq!(tail.start(), day(4));
        assert_eq!(tail.values(), &[4, 5]);
        assert_eq!(series.tail(10), series);
    }

    #[test]
    fn test_empty_series_has_no_end() {
        let series = CaseSeries::new(day(1), CaseField::NewCases, Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.end(), None);
    }
}
