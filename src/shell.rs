//! Document shell wrapping a host page
//!
//! The shell owns everything outside the page body: doctype, `<head>`
//! metadata, and the end-of-body list of scripts. Scripts are passed in as an
//! explicit ordered [`PostBody`] so the loader-before-glue dependency stays
//! visible at the call site.

use crate::assets::{PostBody, ScriptInjector};
use crate::html::Element;
use crate::page::{HostPage, PageConfig};

const DOCTYPE: &str = "<!DOCTYPE html>";

/// Builds full HTML documents around page markup
#[derive(Debug, Clone)]
pub struct PageShell {
    title: String,
    post_body: PostBody,
}

impl PageShell {
    /// Shell with the given document title and no post-body scripts
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            post_body: PostBody::new(),
        }
    }

    /// Replace the end-of-body list
    pub fn with_post_body(mut self, post_body: PostBody) -> Self {
        self.post_body = post_body;
        self
    }

    pub fn post_body(&self) -> &PostBody {
        &self.post_body
    }

    /// Wrap `body` into a complete document.
    ///
    /// Post-body scripts follow the page markup, in list order.
    pub fn render(&self, body: Element) -> Document {
        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").child(self.title.as_str()));

        let body = Element::new("body")
            .child(body)
            .children(self.post_body.to_elements());

        Document {
            root: Element::new("html").attr("lang", "en").child(head).child(body),
        }
    }
}

/// A rendered HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// The `<html>` element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Text of the `<title>` element
    pub fn title(&self) -> Option<String> {
        self.root
            .find_all("title")
            .first()
            .map(|title| title.text_content())
    }

    /// Serialized document including the doctype, newline terminated
    pub fn to_html(&self) -> String {
        let mut out = String::from(DOCTYPE);
        out.push('\n');
        out.push_str(&self.root.to_html());
        out.push('\n');
        out
    }
}

/// Render a configured host page with the injected runtime scripts.
pub fn render_page(config: &PageConfig) -> Document {
    let page = HostPage::new(config.clone());
    let mut post_body = PostBody::new();
    ScriptInjector::new().on_render_body(&mut post_body);

    PageShell::new(page.title())
        .with_post_body(post_body)
        .render(page.render())
}
