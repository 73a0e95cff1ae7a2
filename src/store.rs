use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::article::Article;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Article store not found at {}", .path.display())]
    Missing { path: PathBuf },

    #[error("Article store is not a JSON array of articles: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Article store I/O failure: {0}")]
    Io(#[from] io::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The whole collection lives in one JSON file that is re-read on every call.
#[derive(Debug)]
pub struct ArticleStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl ArticleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ArticleStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads and parses the whole file. A missing file is an error here;
    /// use [`ArticleStore::load_or_empty`] for the display path.
    pub fn load_all(&self) -> StoreResult<Vec<Article>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::Missing {
                    path: self.path.clone(),
                });
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&content)?)
    }

    /// Display read path. Does not take the write lock, so a read racing a
    /// save can observe a truncated file and fail as malformed.
    pub fn load_or_empty(&self) -> StoreResult<Vec<Article>> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        self.load_all()
    }

    /// Appends one record and rewrites the entire file.
    pub fn append_and_save(&self, article: &Article) -> StoreResult<usize> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut articles = self.load_or_empty()?;
        articles.push(article.clone());

        let serialized = serde_json::to_vec_pretty(&articles)?;
        fs::write(&self.path, serialized)?;

        tracing::debug!(path = %self.path.display(), count = articles.len(), "article store rewritten");
        Ok(articles.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleParams;
    use std::sync::Arc;
    use std::thread;
    use tempfile::tempdir;

    fn article(n: usize) -> Article {
        let mut article = Article::new(ArticleParams {
            title: format!("  Article {n}  "),
            url: format!("https://example.com/{n}"),
            description: format!("Description number {n} that is long enough"),
        });
        assert!(article.validate());
        article
    }

    #[test]
    fn load_all_reports_missing_file() {
        let dir = tempdir().expect("tempdir");
        let store = ArticleStore::new(dir.path().join("data.json"));
        assert!(!store.exists());
        assert!(matches!(store.load_all(), Err(StoreError::Missing { .. })));
        assert!(store.load_or_empty().expect("empty").is_empty());
    }

    #[test]
    fn load_all_rejects_malformed_content() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        let store = ArticleStore::new(&path);

        fs::write(&path, "not json").expect("write");
        assert!(matches!(store.load_all(), Err(StoreError::Malformed(_))));

        fs::write(&path, r#"{"title":"x"}"#).expect("write");
        assert!(matches!(store.load_all(), Err(StoreError::Malformed(_))));
    }

    #[test]
    fn append_creates_file_on_first_save() {
        let dir = tempdir().expect("tempdir");
        let store = ArticleStore::new(dir.path().join("data.json"));

        assert_eq!(store.append_and_save(&article(0)).expect("append"), 1);
        assert!(store.exists());
        assert_eq!(store.load_all().expect("load"), vec![article(0)]);
    }

    #[test]
    fn appends_preserve_insertion_order() {
        let dir = tempdir().expect("tempdir");
        let store = ArticleStore::new(dir.path().join("data.json"));

        for n in 0..5 {
            store.append_and_save(&article(n)).expect("append");
        }

        let loaded = store.load_all().expect("load");
        assert_eq!(loaded.len(), 5);
        for (n, stored) in loaded.iter().enumerate() {
            assert_eq!(stored.title, format!("Article {n}"));
            assert_eq!(stored.url, format!("https://example.com/{n}"));
            assert!(stored.errors().is_empty());
        }
    }

    #[test]
    fn append_fails_on_malformed_file_without_clobbering() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        fs::write(&path, "[oops").expect("write");

        let store = ArticleStore::new(&path);
        assert!(matches!(
            store.append_and_save(&article(1)),
            Err(StoreError::Malformed(_))
        ));
        assert_eq!(fs::read_to_string(&path).expect("read"), "[oops");
    }

    #[test]
    fn records_with_missing_keys_load_with_blank_fields() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        fs::write(&path, r#"[{"title":"a","url":"https://a"}]"#).expect("write");

        let loaded = ArticleStore::new(&path).load_all().expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "a");
        assert_eq!(loaded[0].url, "https://a");
        assert_eq!(loaded[0].description, "");
    }

    #[test]
    fn concurrent_appends_are_serialized() {
        let dir = tempdir().expect("tempdir");
        let store = Arc::new(ArticleStore::new(dir.path().join("data.json")));

        let handles: Vec<_> = (0..16)
            .map(|n| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.append_and_save(&article(n)).expect("append"))
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        let loaded = store.load_all().expect("load");
        assert_eq!(loaded.len(), 16);
        for n in 0..16 {
            assert!(loaded.contains(&article(n)), "article {n} lost");
        }
    }

    #[test]
    fn reads_records_with_extra_keys() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"[{"title":"a","url":"https://a","description":"d","errors":[]}]"#,
        )
        .expect("write");

        let loaded = ArticleStore::new(&path).load_all().expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "a");
    }
}
