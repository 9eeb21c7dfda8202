mod cli;
mod github;
mod markdown;
mod report;

pub const USER_AGENT: &str = concat!("stargaze/", env!("CARGO_PKG_VERSION"));

use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use tracing::{error, info};

use cli::Cli;
use github::GitHubClient;
use report::Report;

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Global HTTP client timeout covering DNS + connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
/// Maximum redirect hops before aborting.
const MAX_REDIRECTS: usize = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stargaze=info".parse()?),
        )
        .init();

    let args = Cli::parse();
    let user = github::validate_user(&args.user).inspect_err(|e| error!("{e}"))?;

    let http = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()?;
    let github = GitHubClient::new(http, &args.api_url);

    info!(user, api = %args.api_url, "fetching starred repositories");
    let Some(starred) = github.fetch_starred(user, args.per_page).await else {
        return Err(format!("no report generated for '{user}'").into());
    };

    let report = Report::new(user, report::normalize(&starred), usize::from(args.top));
    let paths = report::export::write_outputs(&report, &args.output_dir)
        .inspect_err(|e| error!("{e}"))?;

    info!(
        repositories = report.repositories.len(),
        stars = report.total_stars(),
        "report written"
    );
    println!("{}", paths.markdown.display());
    println!("{}", paths.json.display());
    Ok(())
}
