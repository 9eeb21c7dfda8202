pub mod export;
pub mod format;

use std::collections::HashMap;

use serde::Serialize;

use crate::github::types::StarredRepo;

/// Label used for repositories GitHub reports no language for.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Normalized repository record. Every field is always serialized, missing values as `null`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepoRecord {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub topics: Vec<String>,
    pub archived: bool,
    pub fork: bool,
    pub html_url: String,
    pub homepage: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub pushed_at: Option<String>,
}

impl From<&StarredRepo> for RepoRecord {
    fn from(repo: &StarredRepo) -> Self {
        Self {
            name: repo.name.clone(),
            full_name: repo.full_name.clone(),
            owner: repo.owner.login.clone(),
            description: non_blank(repo.description.as_deref())
                .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" ")),
            language: non_blank(repo.language.as_deref()).map(String::from),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            open_issues: repo.open_issues_count,
            topics: repo.topics.clone(),
            archived: repo.archived,
            fork: repo.fork,
            html_url: repo.html_url.clone(),
            homepage: non_blank(repo.homepage.as_deref()).map(|h| h.trim().to_string()),
            created_at: repo.created_at.clone(),
            updated_at: repo.updated_at.clone(),
            pushed_at: repo.pushed_at.clone(),
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Normalize raw API records, one output per input, preserving order.
pub fn normalize(repos: &[StarredRepo]) -> Vec<RepoRecord> {
    repos.iter().map(RepoRecord::from).collect()
}

/// Top `n` records by star count. Ties keep their input (starred) order.
pub fn rank_by_stars(records: &[RepoRecord], n: usize) -> Vec<&RepoRecord> {
    let mut ranked: Vec<&RepoRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.stars.cmp(&a.stars));
    ranked.truncate(n);
    ranked
}

/// Repository count per language, most common first, then alphabetical.
pub fn language_breakdown(records: &[RepoRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let lang = record.language.as_deref().unwrap_or(UNKNOWN_LANGUAGE);
        *counts.entry(lang).or_default() += 1;
    }
    let mut breakdown: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(lang, count)| (lang.to_string(), count))
        .collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    breakdown
}

/// Everything needed to render both output formats for one user.
#[derive(Debug)]
pub struct Report {
    pub user: String,
    pub repositories: Vec<RepoRecord>,
    pub top: usize,
}

impl Report {
    pub fn new(user: &str, repositories: Vec<RepoRecord>, top: usize) -> Self {
        Self {
            user: user.to_string(),
            repositories,
            top,
        }
    }

    pub fn total_stars(&self) -> u64 {
        self.repositories.iter().map(|r| r.stars).sum()
    }

    pub fn top_repositories(&self) -> Vec<&RepoRecord> {
        rank_by_stars(&self.repositories, self.top)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::record;
    use super::*;
    use crate::github::types::OwnerInfo;

    fn starred(name: &str, stars: u64) -> StarredRepo {
        StarredRepo {
            name: name.into(),
            full_name: format!("octo/{name}"),
            owner: OwnerInfo {
                login: "octo".into(),
            },
            description: Some("  A   multi\nline\tdescription ".into()),
            language: Some("Go".into()),
            stargazers_count: stars,
            forks_count: 4,
            open_issues_count: 1,
            topics: vec!["cli".into()],
            html_url: format!("https://github.com/octo/{name}"),
            homepage: Some("   ".into()),
            created_at: Some("2020-01-01T00:00:00Z".into()),
            updated_at: None,
            pushed_at: Some("2024-01-01T00:00:00Z".into()),
            archived: true,
            fork: false,
        }
    }

    #[test]
    fn normalize_one_record_per_input_in_order() {
        let input = vec![starred("a", 1), starred("b", 2), starred("c", 3)];
        let records = normalize(&input);
        assert_eq!(records.len(), 3);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn normalize_maps_fields() {
        let record = &normalize(&[starred("tool", 42)])[0];
        assert_eq!(record.full_name, "octo/tool");
        assert_eq!(record.owner, "octo");
        assert_eq!(record.stars, 42);
        assert_eq!(record.forks, 4);
        assert_eq!(record.open_issues, 1);
        assert_eq!(record.language.as_deref(), Some("Go"));
        assert_eq!(record.topics, ["cli"]);
        assert!(record.archived);
        assert_eq!(record.pushed_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn normalize_collapses_description_whitespace() {
        let record = &normalize(&[starred("tool", 1)])[0];
        assert_eq!(
            record.description.as_deref(),
            Some("A multi line description")
        );
    }

    #[test]
    fn normalize_blank_homepage_becomes_none() {
        let record = &normalize(&[starred("tool", 1)])[0];
        assert!(record.homepage.is_none());
    }

    #[test]
    fn normalize_blank_description_becomes_none() {
        let mut repo = starred("tool", 1);
        repo.description = Some("  \n ".into());
        let record = &normalize(&[repo])[0];
        assert!(record.description.is_none());
    }

    #[test]
    fn normalize_blank_language_becomes_none() {
        let mut repo = starred("tool", 1);
        repo.language = Some(" ".into());
        let record = &normalize(&[repo])[0];
        assert!(record.language.is_none());
    }

    #[test]
    fn normalize_empty_input() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn record_serializes_fixed_field_set() {
        let mut r = record("x", 1, None);
        r.description = None;
        let value = serde_json::to_value(&r).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "archived",
                "created_at",
                "description",
                "fork",
                "forks",
                "full_name",
                "homepage",
                "html_url",
                "language",
                "name",
                "open_issues",
                "owner",
                "pushed_at",
                "stars",
                "topics",
                "updated_at",
            ]
        );
        assert!(obj["description"].is_null());
        assert!(obj["language"].is_null());
    }

    #[test]
    fn rank_by_stars_descending_and_truncated() {
        let records = vec![
            record("low", 1, None),
            record("high", 100, None),
            record("mid", 50, None),
        ];
        let top = rank_by_stars(&records, 2);
        let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["high", "mid"]);
    }

    #[test]
    fn rank_by_stars_ties_keep_input_order() {
        let records = vec![
            record("first", 10, None),
            record("big", 99, None),
            record("second", 10, None),
            record("third", 10, None),
        ];
        let top = rank_by_stars(&records, 10);
        let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["big", "first", "second", "third"]);
    }

    #[test]
    fn rank_by_stars_n_larger_than_input() {
        let records = vec![record("only", 3, None)];
        assert_eq!(rank_by_stars(&records, 10).len(), 1);
        assert!(rank_by_stars(&records, 0).is_empty());
    }

    #[test]
    fn language_breakdown_counts_and_orders() {
        let records = vec![
            record("a", 1, Some("Rust")),
            record("b", 1, Some("Go")),
            record("c", 1, Some("Rust")),
            record("d", 1, None),
            record("e", 1, Some("C")),
        ];
        let breakdown = language_breakdown(&records);
        assert_eq!(
            breakdown,
            vec![
                ("Rust".to_string(), 2),
                ("C".to_string(), 1),
                ("Go".to_string(), 1),
                (UNKNOWN_LANGUAGE.to_string(), 1),
            ]
        );
    }

    #[test]
    fn report_totals() {
        let report = Report::new(
            "octo",
            vec![record("a", 5, None), record("b", 7, None)],
            1,
        );
        assert_eq!(report.total_stars(), 12);
        assert_eq!(report.top_repositories().len(), 1);
        assert_eq!(report.top_repositories()[0].name, "b");
    }
}
