use std::path::PathBuf;

use clap::Parser;

use crate::github::API_BASE;

/// GitHub caps `per_page` at 100; only one page is ever requested.
const MAX_PER_PAGE: i64 = 100;
const MAX_TOP: i64 = 100;

#[derive(Parser, Debug)]
#[command(
    name = "stargaze",
    version,
    about = "Report a GitHub user's starred repositories as Markdown and JSON"
)]
pub struct Cli {
    /// GitHub login (also accepts `@login` or a profile URL)
    pub user: String,

    /// Directory that receives `starred-<user>.md` and `starred-<user>.json`
    #[arg(short, long, env = "STARGAZE_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Number of repositories in the ranked summary
    #[arg(
        short = 'n',
        long,
        env = "STARGAZE_TOP",
        default_value_t = 10,
        value_parser = clap::value_parser!(u8).range(1..=MAX_TOP)
    )]
    pub top: u8,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE, value_parser = parse_api_url)]
    pub api_url: String,

    /// Repositories requested in the single API call
    #[arg(
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(u8).range(1..=MAX_PER_PAGE)
    )]
    pub per_page: u8,
}

/// Accept only absolute http(s) URLs; drops a trailing `/`.
pub fn parse_api_url(s: &str) -> Result<String, String> {
    let url = url::Url::parse(s).map_err(|e| format!("invalid URL '{s}': {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("URL must use http or https scheme, got '{}'", url.scheme()));
    }
    Ok(s.trim_end_matches('/').to_string())
}
