//! Substitutes rendered content into an HTML page template.

/// Replaced by the rendered HTML fragment.
pub const CONTENT_PLACEHOLDER: &str = "{{CONTENT}}";
/// Replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{TITLE}}";

/// Fills `template` with `content` and `title`.
///
/// Every occurrence of [`CONTENT_PLACEHOLDER`] is replaced first, then every
/// occurrence of [`TITLE_PLACEHOLDER`]. Replacement is literal: nothing is
/// escaped, and a missing placeholder simply drops the corresponding value.
pub fn compose(content: &str, template: &str, title: &str) -> String {
    for placeholder in [CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER] {
        if !template.contains(placeholder) {
            log::warn!("Template has no {placeholder} placeholder; its value will be omitted.");
        }
    }

    template
        .replace(CONTENT_PLACEHOLDER, content)
        .replace(TITLE_PLACEHOLDER, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn fills_both_placeholders() {
        let page = compose(
            "<p>Some <em>text</em>.</p>",
            "<html><title>{{TITLE}}</title><body>{{CONTENT}}</body></html>",
            "Hello",
        );
        assert_snapshot!(page, @"<html><title>Hello</title><body><p>Some <em>text</em>.</p></body></html>");
    }

    #[test]
    fn replaces_every_occurrence() {
        let page = compose("C", "{{TITLE}}|{{CONTENT}}|{{TITLE}}|{{CONTENT}}", "T");
        assert_eq!(page, "T|C|T|C");
    }

    #[test]
    fn missing_placeholders_are_not_an_error() {
        assert_eq!(compose("<p>x</p>", "<html></html>", "Title"), "<html></html>");
        assert_eq!(compose("<p>x</p>", "<h1>{{TITLE}}</h1>", "Title"), "<h1>Title</h1>");
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let page = compose("<b>&amp;</b>", "{{TITLE}}:{{CONTENT}}", "A & <B>");
        assert_eq!(page, "A & <B>:<b>&amp;</b>");
    }

    #[test]
    fn title_placeholder_inside_content_is_also_replaced() {
        let page = compose("<p>{{TITLE}}</p>", "{{CONTENT}}", "Doc");
        assert_eq!(page, "<p>Doc</p>");
    }

    #[test]
    fn surrounding_template_text_is_untouched() {
        let template = "<!doctype html>\n<meta charset=\"utf-8\">\n{{CONTENT}}\n<footer>{ }</footer>\n";
        let page = compose("BODY", template, "unused");
        assert_eq!(
            page,
            "<!doctype html>\n<meta charset=\"utf-8\">\nBODY\n<footer>{ }</footer>\n"
        );
    }
}
