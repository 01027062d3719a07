//! Markdown to HTML rendering.
//!
//! Parsing and HTML generation are delegated to comrak. This module only fixes
//! the extension set and adds one document pass: a paragraph holding nothing but
//! `[TOC]` becomes a nested list of links to the document's headings.

use anyhow::anyhow;
use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::{format_html, parse_document, Anchorizer, Arena, Options};

/// Paragraph text that is replaced by the table of contents.
pub const TOC_MARKER: &str = "[TOC]";

/// Renders Markdown documents into HTML fragments with a fixed extension set.
pub struct MarkdownRenderer {
    options: Options<'static>,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self { options: options() }
    }
}

impl MarkdownRenderer {
    /// Converts `markdown` into an HTML fragment (no `<html>`/`<body>` shell).
    pub fn render(&self, markdown: &str) -> anyhow::Result<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &self.options);

        insert_table_of_contents(root);

        let mut html = String::new();
        format_html(root, &self.options, &mut html)
            .map_err(|err| anyhow!("Failed to format HTML: {err}"))?;
        Ok(html)
    }
}

/// Renders `markdown` with the default extension set.
pub fn render_markdown(markdown: &str) -> anyhow::Result<String> {
    MarkdownRenderer::default().render(markdown)
}

fn options() -> Options<'static> {
    let mut options = Options::default();
    // extra
    options.extension.footnotes = true;
    options.extension.description_lists = true;
    options.render.r#unsafe = true;
    // tables
    options.extension.table = true;
    // toc
    options.extension.header_ids = Some(String::new());
    options
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TocEntry {
    level: u8,
    anchor: String,
    text: String,
}

fn insert_table_of_contents<'a>(root: &'a AstNode<'a>) {
    let markers: Vec<_> = root.descendants().filter(|&node| is_toc_marker(node)).collect();
    if markers.is_empty() {
        return;
    }

    let entries = collect_headings(root);
    log::debug!(
        "Replacing {} table of contents marker(s) with {} heading(s)",
        markers.len(),
        entries.len()
    );
    let literal = toc_html(&entries);

    for marker in markers {
        let children: Vec<_> = marker.children().collect();
        for child in children {
            child.detach();
        }
        marker.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: 6,
            literal: literal.clone(),
        });
    }
}

fn is_toc_marker<'a>(node: &'a AstNode<'a>) -> bool {
    if !matches!(node.data.borrow().value, NodeValue::Paragraph) {
        return false;
    }
    let only_text = node
        .children()
        .all(|child| matches!(child.data.borrow().value, NodeValue::Text(_)));
    only_text && collect_text(node).trim() == TOC_MARKER
}

fn collect_headings<'a>(root: &'a AstNode<'a>) -> Vec<TocEntry> {
    // Headings are visited in the same order as the HTML formatter assigns ids.
    let mut anchorizer = Anchorizer::new();
    root.descendants()
        .filter_map(|node| {
            let level = match &node.data.borrow().value {
                NodeValue::Heading(heading) => heading.level,
                _ => return None,
            };
            let text = collect_text(node);
            Some(TocEntry {
                level,
                anchor: anchorizer.anchorize(&text),
                text,
            })
        })
        .collect()
}

fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect(node, &mut text);
    text
}

fn collect<'a>(node: &'a AstNode<'a>, buf: &mut String) {
    use NodeValue::*;
    let value = node.data.borrow();
    match &value.value {
        Text(literal) => buf.push_str(literal),
        Code(code) => buf.push_str(&code.literal),
        SoftBreak | LineBreak => buf.push(' '),
        _ => {
            for child in node.children() {
                collect(child, buf);
            }
        }
    }
}

fn toc_html(entries: &[TocEntry]) -> String {
    let mut html = String::from("<div class=\"toc\">\n");
    let mut open_levels: Vec<u8> = Vec::new();

    for entry in entries {
        match open_levels.last() {
            None => {
                html.push_str("<ul>\n");
                open_levels.push(entry.level);
            }
            Some(&top) if entry.level > top => {
                html.push_str("\n<ul>\n");
                open_levels.push(entry.level);
            }
            Some(_) => {
                html.push_str("</li>\n");
                while let Some(&top) = open_levels.last() {
                    if entry.level >= top {
                        break;
                    }
                    let parent = open_levels
                        .len()
                        .checked_sub(2)
                        .map(|index| open_levels[index]);
                    match parent {
                        Some(parent) if entry.level <= parent => {
                            open_levels.pop();
                            html.push_str("</ul>\n</li>\n");
                        }
                        // Still deeper than the parent: stay in the current sublist.
                        _ => {
                            if let Some(last) = open_levels.last_mut() {
                                *last = entry.level;
                            }
                            break;
                        }
                    }
                }
            }
        }
        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            escape_html(&entry.anchor),
            escape_html(&entry.text)
        ));
    }

    if !open_levels.is_empty() {
        html.push_str("</li>\n");
        while open_levels.len() > 1 {
            open_levels.pop();
            html.push_str("</ul>\n</li>\n");
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</div>\n");
    html
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
