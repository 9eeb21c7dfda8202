use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::{RepoRecord, Report, format::render_markdown};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct JsonExport<'a> {
    user: &'a str,
    total_count: usize,
    total_stars: u64,
    repositories: &'a [RepoRecord],
}

/// Locations of the two files produced for a report.
#[derive(Debug)]
pub struct OutputPaths {
    pub markdown: PathBuf,
    pub json: PathBuf,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError {
    let path = path.to_path_buf();
    move |source| ExportError::Io { path, source }
}

/// Pretty-printed JSON export of the report.
pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonExport {
        user: &report.user,
        total_count: report.repositories.len(),
        total_stars: report.total_stars(),
        repositories: &report.repositories,
    })
}

/// Write `starred-{user}.md` and `starred-{user}.json` into `dir`, creating it if needed.
pub fn write_outputs(report: &Report, dir: &Path) -> Result<OutputPaths, ExportError> {
    fs::create_dir_all(dir).map_err(io_error(dir))?;

    let stem = format!("starred-{}", report.user);
    let paths = OutputPaths {
        markdown: dir.join(format!("{stem}.md")),
        json: dir.join(format!("{stem}.json")),
    };

    // Both bodies are rendered before either file is written.
    let json = to_json(report)?;
    let markdown = render_markdown(report);

    fs::write(&paths.markdown, &markdown).map_err(io_error(&paths.markdown))?;
    if let Err(source) = fs::write(&paths.json, json + "\n") {
        // Never leave a Markdown report without its JSON partner.
        let _ = fs::remove_file(&paths.markdown);
        return Err(io_error(&paths.json)(source));
    }
    debug!(
        markdown = %paths.markdown.display(),
        json = %paths.json.display(),
        "report files written"
    );
    Ok(paths)
}
