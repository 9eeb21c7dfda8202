use serde::Deserialize;

/// Repository record from `GET /users/{user}/starred`.
#[derive(Deserialize, Debug, Clone)]
pub struct StarredRepo {
    pub name: String,
    pub full_name: String,
    pub owner: OwnerInfo,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub topics: Vec<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub pushed_at: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub fork: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OwnerInfo {
    pub login: String,
}
