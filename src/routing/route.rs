//! Route and view definitions.

use serde::Serialize;
use std::fmt;

/// A page-level view a route renders.
///
/// Views are opaque to the router; only the component identity is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    #[serde(rename = "HomeView")]
    Home,
    #[serde(rename = "GalleryView")]
    Gallery,
}

impl View {
    /// Name of the component backing this view.
    pub fn component(&self) -> &'static str {
        match self {
            View::Home => "HomeView",
            View::Gallery => "GalleryView",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.component())
    }
}

/// A single route: URL path, symbolic name and the view it renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Literal URL path, e.g. "/gallery".
    pub path: String,

    /// Symbolic name used for navigation by name.
    pub name: String,

    /// View rendered at this path.
    pub view: View,
}

impl Route {
    /// Create a new route.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_component_names() {
        assert_eq!(View::Home.component(), "HomeView");
        assert_eq!(View::Gallery.to_string(), "GalleryView");
    }

    #[test]
    fn test_route_serializes_view_as_component() {
        let route = Route::new("/gallery", "gallery", View::Gallery);
        let json = serde_json::to_value(&route).unwrap();

        assert_eq!(json["path"], "/gallery");
        assert_eq!(json["name"], "gallery");
        assert_eq!(json["view"], "GalleryView");
    }
}
