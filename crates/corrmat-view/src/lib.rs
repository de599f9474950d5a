pub mod stats;
pub mod table;
pub mod tickers;
pub mod view;

pub use crate::stats::CorrelationMatrix;
pub use crate::table::{classify, CellTag, DisplayTable};
pub use crate::view::{CorrelationView, RequestParams};
