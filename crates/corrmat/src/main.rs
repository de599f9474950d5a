use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, TraceLevel};
use corrmat_client::YahooFinance;
use corrmat_view::{CorrelationView, RequestParams};
use dotenv::{dotenv, var};
use tracing::{subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod prompt;
mod render;

const DEFAULT_USER_AGENT: &str = "corrmat/0.1";

fn preprocess(trace_level: Level) {
    dotenv().ok();
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(trace_level)
        .finish();
    subscriber::set_global_default(my_subscriber).expect("Set subscriber");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.trace {
        TraceLevel::DEBUG => Level::DEBUG,
        TraceLevel::INFO => Level::INFO,
        TraceLevel::WARN => Level::WARN,
        TraceLevel::ERROR => Level::ERROR,
    };

    preprocess(log_level);
    trace!("Command line input recorded: {cli:#?}");

    let user_agent = var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
    let source = YahooFinance::new(&user_agent)?;
    let mut view = CorrelationView::new(source);

    // cli framework:
    // "> corrmat <COMMAND>"
    match &cli.command {
        // "> corrmat interactive"
        // prompt loop; one view holds the dataset cache across rounds
        Commands::Interactive => prompt::run(&mut view).await?,

        // "> corrmat once --tickers "AAPL,TSLA," --start 2024-01-01 --end 2024-12-31"
        // single evaluation, print (and optionally export), then exit
        Commands::Once {
            tickers,
            field,
            start,
            end,
            interval,
            export,
        } => {
            let params = RequestParams {
                raw_tickers: tickers.clone(),
                field: *field,
                start: *start,
                end: *end,
                interval: *interval,
            };

            match view.evaluate(&params).await? {
                Some(table) => {
                    render::print_table(&table);
                    if let Some(path) = export {
                        render::export_csv(&table, path)?;
                    }
                }
                None => eprintln!("no table: need two or more tickers, ending with ','"),
            }
        }
    }

    Ok(())
}
