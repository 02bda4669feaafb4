//! Host documents with named mount points.
//!
//! A [`HostDocument`] stands in for the page a visualization is embedded in.
//! It owns a set of mount points, each addressed by an `#id` selector and
//! holding at most one SVG surface. Rendering into a mount that already holds
//! a surface replaces it.
//!
//! # Example
//!
//! ```
//! use stillgraph::{GraphRenderer, geometry::Size, graph::Graph, host::HostDocument};
//!
//! let mut host = HostDocument::new("Report").with_mount("visualization").unwrap();
//! let graph = Graph::placeholder("Lab", Size::new(800.0, 600.0));
//!
//! GraphRenderer::default()
//!     .render(&mut host, "#visualization", &graph, Size::new(800.0, 600.0))
//!     .unwrap();
//!
//! assert!(host.surface("#visualization").unwrap().is_some());
//! assert!(host.to_html().contains("<div id=\"visualization\">"));
//! ```

use indexmap::IndexMap;
use log::{debug, info};
use svg::Document;

use crate::error::StillgraphError;

/// An in-memory page with named mount points.
#[derive(Debug, Clone, Default)]
pub struct HostDocument {
    title: String,
    mounts: IndexMap<String, Option<Document>>,
}

impl HostDocument {
    /// Creates a host page without mount points.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mounts: IndexMap::new(),
        }
    }

    /// Adds an empty mount point (builder style).
    ///
    /// # Errors
    ///
    /// Returns [`StillgraphError::InvalidSelector`] if `id` is not a valid
    /// element id.
    pub fn with_mount(mut self, id: &str) -> Result<Self, StillgraphError> {
        self.add_mount(id)?;
        Ok(self)
    }

    /// Adds an empty mount point. Adding an existing id keeps its surface.
    pub fn add_mount(&mut self, id: &str) -> Result<(), StillgraphError> {
        if !is_valid_id(id) {
            return Err(StillgraphError::InvalidSelector(id.to_string()));
        }
        self.mounts.entry(id.to_string()).or_insert(None);
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the surface attached under `selector`, if any.
    ///
    /// # Errors
    ///
    /// Fails if the selector is malformed or names no mount point.
    pub fn surface(&self, selector: &str) -> Result<Option<&Document>, StillgraphError> {
        let id = mount_id(selector)?;
        self.mounts
            .get(id)
            .map(Option::as_ref)
            .ok_or_else(|| StillgraphError::MountNotFound(selector.to_string()))
    }

    /// Checks that `selector` addresses an existing mount point.
    pub(crate) fn ensure_mount(&self, selector: &str) -> Result<(), StillgraphError> {
        self.surface(selector).map(|_| ())
    }

    /// Attaches `surface` under `selector`, returning the surface it replaced.
    pub(crate) fn attach(
        &mut self,
        selector: &str,
        surface: Document,
    ) -> Result<Option<Document>, StillgraphError> {
        let id = mount_id(selector)?;
        let slot = self
            .mounts
            .get_mut(id)
            .ok_or_else(|| StillgraphError::MountNotFound(selector.to_string()))?;

        let previous = slot.replace(surface);
        if previous.is_some() {
            debug!(selector; "Replaced existing surface");
        }
        info!(selector; "Surface attached");

        Ok(previous)
    }

    /// Serializes the page, inlining every attached surface inside its mount.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n</head>\n<body>\n",
            escape_html(&self.title)
        );
        for (id, surface) in &self.mounts {
            html.push_str(&format!("<div id=\"{id}\">\n"));
            if let Some(surface) = surface {
                html.push_str(&format!("{surface}\n"));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

fn mount_id(selector: &str) -> Result<&str, StillgraphError> {
    selector
        .strip_prefix('#')
        .filter(|id| is_valid_id(id))
        .ok_or_else(|| StillgraphError::InvalidSelector(selector.to_string()))
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_id_parsing() {
        assert_eq!(mount_id("#visualization").unwrap(), "visualization");
        assert!(matches!(
            mount_id("visualization"),
            Err(StillgraphError::InvalidSelector(_))
        ));
        assert!(matches!(
            mount_id("#"),
            Err(StillgraphError::InvalidSelector(_))
        ));
        assert!(matches!(
            mount_id(".chart"),
            Err(StillgraphError::InvalidSelector(_))
        ));
        assert!(matches!(
            mount_id("#a b"),
            Err(StillgraphError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_add_mount_rejects_invalid_id() {
        let mut host = HostDocument::new("t");
        assert!(host.add_mount("has space").is_err());
        assert!(host.add_mount("").is_err());
        assert!(host.add_mount("chart-1").is_ok());
        assert!(host.surface("#chart-1").unwrap().is_none());
        assert!(matches!(
            host.surface("#has space"),
            Err(StillgraphError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_surface_missing_mount() {
        let host = HostDocument::new("t").with_mount("visualization").unwrap();
        assert!(host.surface("#visualization").unwrap().is_none());
        assert!(matches!(
            host.surface("#other"),
            Err(StillgraphError::MountNotFound(sel)) if sel == "#other"
        ));
    }

    #[test]
    fn test_attach_replaces_surface() {
        let mut host = HostDocument::new("t").with_mount("visualization").unwrap();

        let first = host
            .attach("#visualization", Document::new().set("width", 1))
            .unwrap();
        assert!(first.is_none());

        let second = host
            .attach("#visualization", Document::new().set("width", 2))
            .unwrap();
        assert!(second.is_some());

        let html = host.to_html();
        assert_eq!(html.matches("<svg").count(), 1);
        assert!(html.contains("width=\"2\""));
    }

    #[test]
    fn test_attach_unknown_mount() {
        let mut host = HostDocument::new("t");
        assert!(matches!(
            host.attach("#missing", Document::new()),
            Err(StillgraphError::MountNotFound(_))
        ));
    }

    #[test]
    fn test_add_existing_mount_keeps_surface() {
        let mut host = HostDocument::new("t").with_mount("viz").unwrap();
        host.attach("#viz", Document::new()).unwrap();
        host.add_mount("viz").unwrap();
        assert!(host.surface("#viz").unwrap().is_some());
    }

    #[test]
    fn test_to_html_escapes_title_and_keeps_order() {
        let host = HostDocument::new("A <b> & \"c\"")
            .with_mount("first")
            .and_then(|host| host.with_mount("second"))
            .unwrap();

        let html = host.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &lt;b&gt; &amp; &quot;c&quot;</title>"));
        let first = html.find("<div id=\"first\">").unwrap();
        let second = html.find("<div id=\"second\">").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_to_html_empty_mount_layout() {
        let html = HostDocument::new("Report")
            .with_mount("chart")
            .unwrap()
            .to_html();

        assert_eq!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Report</title>\n</head>\n<body>\n<div id=\"chart\">\n</div>\n\
             </body>\n</html>\n"
        );
    }
}
