//! Web history: maps address-bar URLs to in-app locations and back.
//!
//! # Responsibilities
//! - Normalize the configured base path
//! - Strip the base from incoming URLs
//! - Prefix in-app paths with the base to build hrefs
//!
//! # Design Decisions
//! - The base is stored without a trailing slash ("/app"), or "/" for the root
//! - The base is only stripped on a segment boundary ("/apple" is not under "/app")
//! - The base is compared ignoring ASCII case ("/APP/gallery" is under "/app")
//! - URLs outside the base pass through unchanged

/// An in-app location after the base has been removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLocation {
    /// Path relative to the base, always starting with '/'.
    pub path: String,

    /// Query string without the leading '?'.
    pub query: Option<String>,

    /// Fragment without the leading '#'.
    pub hash: Option<String>,
}

/// History-mode URL handling rooted at a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    base: String,
}

impl WebHistory {
    /// Create a history rooted at `base`.
    ///
    /// `""`, `"/"` give the root; `"app"`, `"/app"` and `"/app/"` all give `/app`.
    pub fn new(base: &str) -> Self {
        let base = normalize_base(base);
        tracing::debug!(base = %base, "Web history created");
        Self { base }
    }

    /// The normalized base path.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Full href for an in-app path.
    pub fn create_href(&self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        if self.base == "/" {
            path
        } else {
            format!("{}{}", self.base, path)
        }
    }

    /// Split `url` into path, query and hash, and strip the base from the path.
    pub fn location(&self, url: &str) -> HistoryLocation {
        let (rest, hash) = match url.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (url, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        HistoryLocation {
            path: self.strip_base(path),
            query,
            hash,
        }
    }

    /// Whether `path` lies under the base, on a segment boundary.
    ///
    /// The comparison ignores ASCII case, like route matching.
    pub fn is_under_base(&self, path: &str) -> bool {
        self.base_remainder(path).is_some()
    }

    fn base_remainder<'p>(&self, path: &'p str) -> Option<&'p str> {
        if self.base == "/" {
            return Some(path);
        }

        let head = path.get(..self.base.len())?;
        if !head.eq_ignore_ascii_case(&self.base) {
            return None;
        }

        let rest = &path[self.base.len()..];
        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    }

    fn strip_base(&self, path: &str) -> String {
        match self.base_remainder(path) {
            Some("") => "/".to_string(),
            Some(rest) => ensure_leading_slash(rest),
            None => ensure_leading_slash(path),
        }
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        ensure_leading_slash(trimmed)
    }
}

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_normalization() {
        assert_eq!(WebHistory::new("").base(), "/");
        assert_eq!(WebHistory::new("/").base(), "/");
        assert_eq!(WebHistory::new("app").base(), "/app");
        assert_eq!(WebHistory::new("/app/").base(), "/app");
        assert_eq!(WebHistory::new("/app").base(), "/app");
        assert_eq!(WebHistory::new("/nested/app/").base(), "/nested/app");
    }

    #[test]
    fn test_create_href() {
        let history = WebHistory::new("/app/");
        assert_eq!(history.create_href("/"), "/app/");
        assert_eq!(history.create_href("/gallery"), "/app/gallery");
        assert_eq!(history.create_href("gallery"), "/app/gallery");

        let root = WebHistory::default();
        assert_eq!(root.create_href("/"), "/");
        assert_eq!(root.create_href("/gallery"), "/gallery");
    }

    #[test]
    fn test_location_strips_base() {
        let history = WebHistory::new("/app/");

        assert_eq!(history.location("/app").path, "/");
        assert_eq!(history.location("/app/").path, "/");
        assert_eq!(history.location("/app/gallery").path, "/gallery");
    }

    #[test]
    fn test_location_respects_segment_boundary() {
        let history = WebHistory::new("/app");

        assert_eq!(history.location("/apple").path, "/apple");
        assert_eq!(history.location("/other/gallery").path, "/other/gallery");
    }

    #[test]
    fn test_location_strips_base_ignoring_case() {
        let history = WebHistory::new("/app/");

        assert_eq!(history.location("/APP/gallery").path, "/gallery");
        assert_eq!(history.location("/App").path, "/");
        assert_eq!(history.location("/APPLE").path, "/APPLE");
        assert!(history.is_under_base("/aPp/"));
        assert!(!history.is_under_base("/apple"));
    }

    #[test]
    fn test_base_with_pattern_characters() {
        let history = WebHistory::new("/my{app/");

        assert_eq!(history.base(), "/my{app");
        assert_eq!(history.location("/my{app/_routes").path, "/_routes");
        assert!(!history.is_under_base("/anything/_routes"));
    }

    #[test]
    fn test_location_keeps_query_and_hash() {
        let history = WebHistory::new("/app/");
        let location = history.location("/app/gallery?page=2#top");

        assert_eq!(
            location,
            HistoryLocation {
                path: "/gallery".into(),
                query: Some("page=2".into()),
                hash: Some("top".into()),
            }
        );
    }

    #[test]
    fn test_location_at_root_base() {
        let history = WebHistory::default();

        assert_eq!(history.location("/gallery").path, "/gallery");
        assert_eq!(history.location("").path, "/");
        assert_eq!(history.location("#x").hash.as_deref(), Some("x"));
    }
}
