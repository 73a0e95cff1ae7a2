use serde::{Deserialize, Serialize};

pub const MIN_DESCRIPTION_LEN: usize = 20;
pub const URL_PREFIX: &str = "https://";

/// Raw submission fields as posted by the form. Missing keys fall back to "".
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ArticleParams {
    #[serde(rename = "article[title]", default)]
    pub title: String,
    #[serde(rename = "article[url]", default)]
    pub url: String,
    #[serde(rename = "article[description]", default)]
    pub description: String,
}

// Strips Unicode whitespace and the byte order mark from both ends.
fn normalize(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}

/// A bookmarked link. Only the three text fields are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip)]
    errors: Vec<String>,
}

impl Article {
    pub fn new(params: ArticleParams) -> Self {
        Article {
            title: normalize(&params.title),
            url: normalize(&params.url),
            description: normalize(&params.description),
            errors: Vec::new(),
        }
    }

    /// Runs every rule against the current fields and records the failures.
    /// Returns true when no rule failed.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.title.is_empty() {
            self.errors.push("Title can't be blank".to_string());
        }

        if self.description.chars().count() < MIN_DESCRIPTION_LEN {
            self.errors
                .push("Description must be greater than 20 characters".to_string());
        }

        if !self.url.starts_with(URL_PREFIX) {
            self.errors.push("URL must start with https://".to_string());
        }

        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
