use crate::dataset::{PriceCell, PriceDataset, TickerSeries};
use crate::interval::Interval;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, NaiveTime};
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, trace, warn};

/// Window requested from the data source: the full available history, or an
/// explicit date range (inclusive at both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchWindow {
    MaxPeriod,
    Range { start: NaiveDate, end: NaiveDate },
}

/// Seam over the market-data service. Unknown tickers yield empty series
/// rather than errors; only transport failures surface as `Err`.
#[async_trait]
pub trait PriceSource {
    async fn fetch(
        &self,
        tickers: &[String],
        interval: Interval,
        window: FetchWindow,
    ) -> Result<PriceDataset>;
}

/// Yahoo Finance v8 chart API client.
pub struct YahooFinance {
    client: Client,
}

impl YahooFinance {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Fetches one ticker's history. A reply without chart data is logged
    /// and collapsed to an empty series instead of failing the whole fetch.
    async fn fetch_one(
        &self,
        ticker: &str,
        interval: Interval,
        window: FetchWindow,
    ) -> Result<TickerSeries> {
        let url = url(ticker, interval, window);
        trace!("fetching price history for [{ticker}]");
        let response: PriceHistory = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                error!("[{ticker}] price fetch failed: {e} | URL: {url}");
                e
            })?
            .json()
            .await
            .map_err(|e| {
                error!("[{ticker}] price response failed to deserialize: {e} | URL: {url}");
                e
            })?;

        let cells = match response.chart.result.as_deref() {
            Some([base, ..]) => {
                let quote = base.indicators.quote.first();
                transform(base.timestamp.as_slice(), quote)
            }
            _ => {
                warn!("[{ticker}] reply contained no \"chart.result\" data | URL: {url}");
                vec![]
            }
        };

        trace!("[{ticker}] {} bars fetched", cells.len());
        Ok(TickerSeries { ticker: ticker.to_string(), cells })
    }
}

#[async_trait]
impl PriceSource for YahooFinance {
    async fn fetch(
        &self,
        tickers: &[String],
        interval: Interval,
        window: FetchWindow,
    ) -> Result<PriceDataset> {
        let fetches = tickers
            .iter()
            .map(|ticker| self.fetch_one(ticker, interval, window));

        // concurrent per-ticker requests; try_join_all keeps request order
        let series = futures::future::try_join_all(fetches).await?;
        Ok(PriceDataset { series })
    }
}

fn url(ticker: &str, interval: Interval, window: FetchWindow) -> String {
    let tckr = ticker.to_uppercase();
    let interval = interval.as_str();
    match window {
        FetchWindow::MaxPeriod => format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{tckr}?symbol={tckr}&interval={interval}&range=max&events=div|split|capitalGains",
        ),
        FetchWindow::Range { start, end } => {
            let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
            // upper bound is exclusive upstream; push it past the end date
            let period2 = end
                .checked_add_days(Days::new(1))
                .unwrap_or(end)
                .and_time(NaiveTime::MIN)
                .and_utc()
                .timestamp();
            format!(
                "https://query1.finance.yahoo.com/v8/finance/chart/{tckr}?symbol={tckr}&interval={interval}&period1={period1}&period2={period2}&events=div|split|capitalGains",
            )
        }
    }
}

/// Zips the parallel quote arrays back into bars, skipping entries with
/// unusable timestamps.
fn transform(timestamps: &[i64], quote: Option<&Quote>) -> Vec<PriceCell> {
    let Some(quote) = quote else {
        return vec![];
    };

    timestamps
        .iter()
        .zip(quote.open.iter())
        .zip(quote.high.iter())
        .zip(quote.low.iter())
        .zip(quote.close.iter())
        .zip(quote.volume.iter())
        .filter_map(|(((((timestamp, open), high), low), close), volume)| {
            let time = DateTime::from_timestamp(*timestamp, 0)?;
            Some(PriceCell {
                time,
                open: *open,
                high: *high,
                low: *low,
                close: *close,
                volume: volume.map(|v| v as f64),
            })
        })
        .collect()
}

// Input: Yahoo Finance
// ==========================================================================
#[derive(Deserialize, Debug)]
struct PriceHistory {
    chart: PriceResponse,
}

#[derive(Deserialize, Debug)]
struct PriceResponse {
    result: Option<Vec<PriceCategories>>,
}

#[derive(Deserialize, Debug)]
struct PriceCategories {
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Indicators,
}

#[derive(Deserialize, Debug, Default)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

// Missing bars arrive as JSON nulls inside the arrays.
#[derive(Deserialize, Debug)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}
