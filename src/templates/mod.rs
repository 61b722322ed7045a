//! Embedded site templates using the Tera template engine
//!
//! The public page is rendered server-side from the reconciled content
//! document. All templates are embedded in the binary; there is no theme
//! directory to deploy.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::content::Icon;

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all site templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            ("partials/hero.html", include_str!("site/partials/hero.html")),
            ("partials/tour.html", include_str!("site/partials/tour.html")),
            (
                "partials/music.html",
                include_str!("site/partials/music.html"),
            ),
            (
                "partials/gallery.html",
                include_str!("site/partials/gallery.html"),
            ),
            (
                "partials/testimonials.html",
                include_str!("site/partials/testimonials.html"),
            ),
            (
                "partials/about.html",
                include_str!("site/partials/about.html"),
            ),
            (
                "partials/contact.html",
                include_str!("site/partials/contact.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
        ])?;

        tera.register_filter("icon", icon_filter);

        Ok(Self { tera })
    }

    /// Render the public page from a reconciled content document
    pub fn render_index(&self, content: &serde_json::Value) -> Result<String> {
        let mut context = Context::new();
        context.insert("content", content);
        Ok(self.tera.render("index.html", &context)?)
    }
}

/// Tera filter: resolve a stored icon name to its markup identifier
fn icon_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let name = tera::try_get_value!("icon", "value", String, value);
    Ok(tera::Value::String(Icon::resolve(&name).name().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_document;

    #[test]
    fn test_render_index_with_defaults() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_index(&default_document()).unwrap();

        assert!(html.contains("Aniruddh Aithal"));
        assert!(html.contains("Carnegie Hall"));
        assert!(html.contains("booking@acousticedge.com"));
        // icon names resolve through the closed lookup
        assert!(html.contains("icon-volume-2"));
    }

    #[test]
    fn test_unknown_icons_render_fallback() {
        let mut doc = default_document();
        doc["infoCards"][0]["icon"] = serde_json::json!("Theremin");
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_index(&doc).unwrap();
        assert!(html.contains("icon-note"));
    }
}
