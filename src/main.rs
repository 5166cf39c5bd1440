use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use table_to_json::{
    default_user_agent, run, to_json, ExtractConfig, FetchConfig, HttpFetcher, OutputConfig,
    DEFAULT_HEADER_CELL_SELECTOR, DEFAULT_ROW_CELL_SELECTOR, DEFAULT_ROW_SELECTOR,
    DEFAULT_TABLE_SELECTOR,
};

#[derive(Parser)]
#[command(
    name = "table-to-json",
    version,
    about = "Convert HTML tables on web pages into JSON records"
)]
struct Cli {
    /// Pages to read tables from, processed in order
    #[arg(required = true, value_name = "URL")]
    urls: Vec<String>,

    /// The css selector to grab the table(s) to pull data from on each url
    #[arg(short = 't', long, default_value = DEFAULT_TABLE_SELECTOR)]
    table_selector: String,

    /// The css selector to grab the table header names
    #[arg(short = 'H', long, default_value = DEFAULT_HEADER_CELL_SELECTOR)]
    header_cell_selector: String,

    /// The css selector to grab the table rows
    #[arg(short = 'r', long, default_value = DEFAULT_ROW_SELECTOR)]
    row_selector: String,

    /// The css selector to grab the cells within each row
    #[arg(short = 'd', long, default_value = DEFAULT_ROW_CELL_SELECTOR)]
    row_cell_selector: String,

    /// Print json in a more human-readable way
    #[arg(short, long)]
    pretty: bool,

    /// Treat all values as strings instead of converting booleans and numbers
    #[arg(short, long)]
    string_values: bool,

    /// Add a '<column>_link' field for the first link found in a cell
    #[arg(short = 'l', long)]
    include_links: bool,

    /// Omit rows that don't have a value for each column, e.g. colspan summary rows
    #[arg(short, long)]
    omit_partial_rows: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// User-Agent header sent with each request
    #[arg(long, default_value_t = default_user_agent())]
    user_agent: String,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn extract_config(&self) -> ExtractConfig {
        ExtractConfig {
            table_selector: self.table_selector.clone(),
            header_cell_selector: self.header_cell_selector.clone(),
            row_selector: self.row_selector.clone(),
            row_cell_selector: self.row_cell_selector.clone(),
            string_values: self.string_values,
            include_links: self.include_links,
            omit_partial_rows: self.omit_partial_rows,
        }
    }

    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
        }
    }

    fn output_config(&self) -> OutputConfig {
        OutputConfig {
            pretty: self.pretty,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries only the JSON
    let default_filter = if cli.verbose {
        "table_to_json=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let fetcher = HttpFetcher::new(&cli.fetch_config());
    let records = run(&cli.urls, &cli.extract_config(), &fetcher)?;
    let json = to_json(&records, cli.output_config().pretty)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write output")?;
    Ok(())
}
