use crate::render;
use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use corrmat_client::{Interval, PriceField, PriceSource};
use corrmat_view::{CorrelationView, RequestParams};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::error;

/// Reads one full round of parameters, evaluates, renders, repeats.
///
/// The view lives across iterations, so repeat evaluations with unchanged
/// tickers and interval are served from its cache.
pub async fn run<S: PriceSource>(view: &mut CorrelationView<S>) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("corrmat — correlation matrices for a set of tickers (empty input quits)");

    loop {
        let raw_tickers: String = Input::with_theme(&theme)
            .with_prompt("Tickers, ending with ','")
            .allow_empty(true)
            .interact_text()?;
        if raw_tickers.trim().is_empty() {
            break;
        }

        let field = Select::with_theme(&theme)
            .with_prompt("Price field")
            .items(&PriceField::ALL)
            .default(3) // Close
            .interact()?;

        let today = Utc::now().date_naive();
        let start = prompt_date(&theme, "Start date", today - Duration::days(365))?;
        let end = prompt_date(&theme, "End date", today)?;

        let interval = Select::with_theme(&theme)
            .with_prompt("Interval")
            .items(&Interval::ALL)
            .default(8) // 1d
            .interact()?;

        let params = RequestParams {
            raw_tickers,
            field: PriceField::ALL[field],
            start,
            end,
            interval: Interval::ALL[interval],
        };

        match view.evaluate(&params).await {
            Ok(Some(table)) => render::print_table(&table),
            Ok(None) => println!("nothing to show: need two or more tickers, ending with ','"),
            Err(e) => error!("evaluation failed: {e}"),
        }
    }

    Ok(())
}

fn prompt_date(theme: &ColorfulTheme, prompt: &str, default: NaiveDate) -> Result<NaiveDate> {
    let text: String = Input::with_theme(theme)
        .with_prompt(format!("{prompt} (YYYY-MM-DD)"))
        .default(default.to_string())
        .validate_with(|input: &String| {
            input
                .parse::<NaiveDate>()
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(text.parse::<NaiveDate>()?)
}
