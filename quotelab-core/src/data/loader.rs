//! CSV quote loader.
//!
//! Expects the Yahoo-style header `Date,Open,High,Low,Close,AdjClose,Volume`
//! with one record per trading day in ascending date order.
//!
//! Record-level problems never abort a load. A malformed numeric field is
//! reported and stored as NaN (the analyzer skips any window touching it);
//! a malformed date drops the record, since a quote without a date has no
//! position on the time axis. Only I/O failures, structural CSV errors, and
//! a missing header column are fatal.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::Quote;

const DATE_FORMAT: &str = "%Y-%m-%d";
const REQUIRED_COLUMNS: [&str; 7] =
    ["Date", "Open", "High", "Low", "Close", "AdjClose", "Volume"];

/// One CSV row, exactly as received — every field still a string.
#[derive(Debug, Clone, Deserialize)]
struct RawQuoteRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open")]
    open: String,
    #[serde(rename = "High")]
    high: String,
    #[serde(rename = "Low")]
    low: String,
    #[serde(rename = "Close")]
    close: String,
    #[serde(rename = "AdjClose")]
    adj_close: String,
    #[serde(rename = "Volume")]
    volume: String,
}

/// Fatal load failures. Anything per-record is a [`ParseWarning`] instead.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read quote file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column {name:?}")]
    MissingColumn { name: &'static str },
}

/// Recoverable, per-record parse problems, aggregated into the load report.
///
/// `record` is the 1-based data row number (header excluded), which is what
/// a person grepping the source file will count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    #[error("record {record}: field {field} is not numeric: {value:?}")]
    MalformedNumeric {
        record: usize,
        field: &'static str,
        value: String,
    },

    #[error("record {record}: unparseable date {value:?} (record dropped)")]
    MalformedDate { record: usize, value: String },

    #[error("record {record}: volume is not an integer: {value:?}")]
    MalformedVolume { record: usize, value: String },

    #[error("record {record}: unreadable row ({message})")]
    UnreadableRecord { record: usize, message: String },
}

/// Result of a load: the parsed quotes plus everything worth telling the
/// user about, without having aborted.
#[derive(Debug, Clone, Default)]
pub struct QuoteLoad {
    pub quotes: Vec<Quote>,
    pub warnings: Vec<ParseWarning>,
}

/// Load quotes from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<QuoteLoad, LoadError> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Load quotes from any reader. Tests feed in-memory fixtures through this.
pub fn load_from_reader<R: Read>(reader: R) -> Result<QuoteLoad, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    ensure_columns(rdr.headers()?)?;

    let mut load = QuoteLoad::default();
    for (i, row) in rdr.deserialize::<RawQuoteRecord>().enumerate() {
        let record = i + 1;
        match row {
            Ok(raw) => {
                if let Some(quote) = parse_record(record, &raw, &mut load.warnings) {
                    load.quotes.push(quote);
                }
            }
            Err(err) => load.warnings.push(ParseWarning::UnreadableRecord {
                record,
                message: err.to_string(),
            }),
        }
    }

    Ok(load)
}

fn ensure_columns(headers: &csv::StringRecord) -> Result<(), LoadError> {
    for name in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == name) {
            return Err(LoadError::MissingColumn { name });
        }
    }
    Ok(())
}

/// Parse one raw record. Returns `None` (after warning) only when the date
/// itself is unusable; numeric trouble degrades to NaN and keeps the record.
fn parse_record(
    record: usize,
    raw: &RawQuoteRecord,
    warnings: &mut Vec<ParseWarning>,
) -> Option<Quote> {
    let date = match NaiveDate::parse_from_str(&raw.date, DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => {
            warnings.push(ParseWarning::MalformedDate {
                record,
                value: raw.date.clone(),
            });
            return None;
        }
    };

    let open = coerce_numeric(record, "Open", &raw.open, warnings);
    let high = coerce_numeric(record, "High", &raw.high, warnings);
    let low = coerce_numeric(record, "Low", &raw.low, warnings);
    let close = coerce_numeric(record, "Close", &raw.close, warnings);
    let adj_close = coerce_numeric(record, "AdjClose", &raw.adj_close, warnings);

    let volume = match raw.volume.parse::<u64>() {
        Ok(v) => v,
        Err(_) => {
            warnings.push(ParseWarning::MalformedVolume {
                record,
                value: raw.volume.clone(),
            });
            0
        }
    };

    Some(Quote {
        date,
        time_ms: Quote::time_ms_for(date),
        open,
        high,
        low,
        close,
        adj_close,
        volume,
        sma: None,
    })
}

fn coerce_numeric(
    record: usize,
    field: &'static str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) -> f64 {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            warnings.push(ParseWarning::MalformedNumeric {
                record,
                field,
                value: value.to_string(),
            });
            f64::NAN
        }
    }
}
