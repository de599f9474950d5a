use crate::stats::CorrelationMatrix;

/// Render-independent color classification of a display cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTag {
    /// Leading label column; excluded from numeric formatting.
    Neutral,
    Identity,
    Positive,
    Negative,
}

/// Tags the cell at display column `col` holding `value`.
///
/// NaN lands in `Negative`: the upstream tool colored every cell that was
/// not strictly positive as anti-correlated, missing data included.
pub fn classify(col: usize, value: f64) -> CellTag {
    if col == 0 {
        CellTag::Neutral
    } else if value == 1.0 {
        CellTag::Identity
    } else if value > 0.0 {
        CellTag::Positive
    } else {
        CellTag::Negative
    }
}

/// A correlation matrix reshaped for rendering: a header row, one row per
/// ticker with a leading label cell, and a parallel tag matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub tags: Vec<Vec<CellTag>>,
}

impl DisplayTable {
    pub fn from_matrix(matrix: &CorrelationMatrix) -> Self {
        let mut headers = Vec::with_capacity(matrix.tickers.len() + 1);
        headers.push(String::new());
        headers.extend(matrix.tickers.iter().cloned());

        let mut rows = Vec::with_capacity(matrix.tickers.len());
        let mut tags = Vec::with_capacity(matrix.tickers.len());
        for (ticker, values) in matrix.tickers.iter().zip(matrix.values.iter()) {
            let mut row = Vec::with_capacity(values.len() + 1);
            let mut row_tags = Vec::with_capacity(values.len() + 1);
            row.push(ticker.clone());
            row_tags.push(CellTag::Neutral);

            for (col, value) in values.iter().enumerate() {
                row.push(format!("{value:.2}"));
                row_tags.push(classify(col + 1, *value));
            }

            rows.push(row);
            tags.push(row_tags);
        }

        Self { headers, rows, tags }
    }
}
