pub mod dataset;
pub mod interval;
pub mod yahoo;

pub use crate::dataset::{PriceCell, PriceDataset, PriceField, TickerSeries};
pub use crate::interval::{Granularity, Interval};
pub use crate::yahoo::{FetchWindow, PriceSource, YahooFinance};
