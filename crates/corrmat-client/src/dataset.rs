use anyhow::anyhow;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Price fields available on every bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceField {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl PriceField {
    pub const ALL: [PriceField; 5] = [
        PriceField::Open,
        PriceField::High,
        PriceField::Low,
        PriceField::Close,
        PriceField::Volume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::Open => "Open",
            PriceField::High => "High",
            PriceField::Low => "Low",
            PriceField::Close => "Close",
            PriceField::Volume => "Volume",
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        PriceField::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == token)
            .ok_or_else(|| anyhow!("unrecognised price field: {s}"))
    }
}

/// One bar of price history. The upstream feed nulls out individual values
/// for bars it has no data for, so every field is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCell {
    pub time: DateTime<Utc>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl PriceCell {
    pub fn field(&self, field: PriceField) -> Option<f64> {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
            PriceField::Volume => self.volume,
        }
    }
}

/// Price history for a single ticker, bars in ascending time order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerSeries {
    pub ticker: String,
    pub cells: Vec<PriceCell>,
}

impl TickerSeries {
    /// Projects `(time, value)` observations for one field, dropping bars
    /// where that field is missing.
    pub fn project(&self, field: PriceField) -> Vec<(DateTime<Utc>, f64)> {
        self.cells
            .iter()
            .filter_map(|cell| cell.field(field).map(|value| (cell.time, value)))
            .collect()
    }
}

/// All fetched history for one (ticker set, interval) request; one entry per
/// requested ticker, in request order. Replaced wholesale on re-fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceDataset {
    pub series: Vec<TickerSeries>,
}

impl PriceDataset {
    pub fn get(&self, ticker: &str) -> Option<&TickerSeries> {
        self.series.iter().find(|series| series.ticker == ticker)
    }
}
