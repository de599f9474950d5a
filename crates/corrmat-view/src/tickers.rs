/// Tickers are typed free-form; a trailing separator marks the list as
/// complete and ready to evaluate.
pub const SEPARATOR: char = ',';

/// Parses raw ticker text into an ordered, de-duplicated symbol list.
///
/// Returns `None` while the input is still being typed, i.e. when the text
/// is empty or does not yet end with the separator.
pub fn parse(raw: &str) -> Option<Vec<String>> {
    if raw.is_empty() || !raw.ends_with(SEPARATOR) {
        return None;
    }

    let mut tickers = Vec::new();
    for part in raw.split(SEPARATOR) {
        let ticker = part.trim().to_uppercase();
        if !ticker.is_empty() && !tickers.contains(&ticker) {
            tickers.push(ticker);
        }
    }
    Some(tickers)
}
