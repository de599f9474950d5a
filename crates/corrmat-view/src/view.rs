use crate::stats::CorrelationMatrix;
use crate::table::DisplayTable;
use crate::tickers;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use corrmat_client::{FetchWindow, Granularity, Interval, PriceDataset, PriceField, PriceSource};
use tracing::debug;

/// One round of user input; immutable per evaluation.
#[derive(Debug, Clone)]
pub struct RequestParams {
    pub raw_tickers: String,
    pub field: PriceField,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
}

/// Holds the last-requested ticker set and interval alongside the most
/// recently fetched dataset, and re-fetches only when either changes.
/// Date-range and field changes are served from the cached dataset.
pub struct CorrelationView<S> {
    source: S,
    last_tickers: Vec<String>,
    last_interval: Interval,
    dataset: PriceDataset,
}

impl<S: PriceSource> CorrelationView<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_tickers: Vec::new(),
            last_interval: Interval::default(),
            dataset: PriceDataset::default(),
        }
    }

    /// Evaluates one round of input into a display table.
    ///
    /// `Ok(None)` covers the silent cases: ticker text still being typed,
    /// no tickers parsed, or a single-ticker selection (a 1x1 correlation
    /// matrix is not meaningful output). Only transport failures from the
    /// data source surface as `Err`; those leave the cache untouched so the
    /// next evaluation retries the fetch.
    pub async fn evaluate(&mut self, params: &RequestParams) -> Result<Option<DisplayTable>> {
        let Some(parsed) = tickers::parse(&params.raw_tickers) else {
            return Ok(None);
        };
        if parsed.is_empty() {
            return Ok(None);
        }

        if parsed != self.last_tickers || params.interval != self.last_interval {
            let window = match params.interval.granularity() {
                Granularity::Calendar => FetchWindow::MaxPeriod,
                Granularity::SubDaily => FetchWindow::Range {
                    start: params.start,
                    end: params.end,
                },
            };
            debug!("refreshing dataset for {parsed:?} at {}", params.interval);
            self.dataset = self.source.fetch(&parsed, params.interval, window).await?;
            self.last_tickers = parsed.clone();
            self.last_interval = params.interval;
        } else {
            debug!("tickers and interval unchanged; reusing cached dataset");
        }

        if parsed.len() < 2 {
            return Ok(None);
        }

        let series: Vec<(String, Vec<(DateTime<Utc>, f64)>)> = parsed
            .iter()
            .map(|ticker| {
                let points = self
                    .dataset
                    .get(ticker)
                    .map(|series| series.project(params.field))
                    .unwrap_or_default();

                // bulk-fetched history is narrowed to the requested dates;
                // sub-daily data was already fetched for exactly that window
                let points = match params.interval.granularity() {
                    Granularity::Calendar => points
                        .into_iter()
                        .filter(|(time, _)| {
                            let date = time.date_naive();
                            date >= params.start && date <= params.end
                        })
                        .collect(),
                    Granularity::SubDaily => points,
                };

                (ticker.clone(), points)
            })
            .collect();

        let matrix = CorrelationMatrix::compute(&series);
        Ok(Some(DisplayTable::from_matrix(&matrix)))
    }
}
