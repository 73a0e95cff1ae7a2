use serde::Deserialize;

pub use crate::article::ArticleParams;

pub const SAVED_NOTICE: &str = "Article saved.";

/// Query string accepted by the homepage. `saved=1` is set by the redirect
/// that follows a successful submission.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub saved: Option<String>,
}

impl IndexQuery {
    pub fn notice(&self) -> Option<&'static str> {
        match self.saved.as_deref() {
            Some("1") => Some(SAVED_NOTICE),
            _ => None,
        }
    }
}
