use super::{Report, RepoRecord, UNKNOWN_LANGUAGE, language_breakdown};
use crate::markdown::{
    escape_md_link, escape_md_url, escape_table_cell, sanitize_heading, truncate_chars,
};

/// Description length in the ranked summary.
const SUMMARY_DESCRIPTION_CHARS: usize = 100;
/// Description length in the full listing table.
const TABLE_DESCRIPTION_CHARS: usize = 60;

/// Render the full Markdown report: summary, top-N ranking, language table, full listing.
pub fn render_markdown(report: &Report) -> String {
    let mut out = format!(
        "# Starred Repositories: {}\n\n",
        sanitize_heading(&report.user)
    );

    if report.repositories.is_empty() {
        out.push_str("No starred repositories.\n");
        return out;
    }

    out.push_str(&format!(
        "{} repositories, {} stars combined.\n\n",
        report.repositories.len(),
        report.total_stars()
    ));

    format_top_section(report, &mut out);
    format_languages_section(&report.repositories, &mut out);
    format_listing_section(&report.repositories, &mut out);

    out
}

fn repo_link(repo: &RepoRecord) -> String {
    format!(
        "[{}]({})",
        escape_md_link(&repo.full_name),
        escape_md_url(&repo.html_url)
    )
}

fn format_top_section(report: &Report, out: &mut String) {
    let top = report.top_repositories();
    if top.is_empty() {
        return;
    }
    out.push_str(&format!("## Top {} by Stars\n\n", top.len()));
    for (i, repo) in top.iter().enumerate() {
        let lang = repo
            .language
            .as_deref()
            .map(|l| format!(" · {l}"))
            .unwrap_or_default();
        let desc = repo
            .description
            .as_deref()
            .map(|d| {
                format!(
                    " — {}",
                    escape_md_link(&truncate_chars(d, SUMMARY_DESCRIPTION_CHARS))
                )
            })
            .unwrap_or_default();
        let archived = if repo.archived { " [archived]" } else { "" };
        out.push_str(&format!(
            "{}. {} ★ {}{}{}{}\n",
            i + 1,
            repo_link(repo),
            repo.stars,
            lang,
            archived,
            desc
        ));
    }
    out.push('\n');
}

fn format_languages_section(records: &[RepoRecord], out: &mut String) {
    out.push_str("## Languages\n\n");
    out.push_str("| Language | Repositories |\n|----------|--------------|\n");
    for (lang, count) in language_breakdown(records) {
        out.push_str(&format!("| {} | {count} |\n", escape_table_cell(&lang)));
    }
    out.push('\n');
}

fn format_listing_section(records: &[RepoRecord], out: &mut String) {
    out.push_str("## All Repositories\n\n");
    out.push_str(
        "| # | Repository | Language | Stars | Forks | Updated | Description |\n\
         |---|------------|----------|-------|-------|---------|-------------|\n",
    );
    for (i, repo) in records.iter().enumerate() {
        let lang = repo.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE);
        let updated = repo
            .updated_at
            .as_deref()
            .and_then(|d| d.get(..10))
            .unwrap_or("-");
        let desc = repo
            .description
            .as_deref()
            .map(|d| escape_md_link(&truncate_chars(d, TABLE_DESCRIPTION_CHARS)))
            .unwrap_or_default();
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            i + 1,
            escape_table_cell(&repo_link(repo)),
            escape_table_cell(lang),
            repo.stars,
            repo.forks,
            updated,
            escape_table_cell(&desc)
        ));
    }
}
