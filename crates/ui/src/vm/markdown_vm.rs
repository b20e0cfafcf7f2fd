use std::collections::{HashMap, HashSet};

/// Render a model reply as sanitized HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "a", "h1", "h2", "h3", "h4", "table", "thead", "tbody", "tr", "th", "td",
        "del",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, sanitize_html};

    #[test]
    fn reply_headings_and_bold_survive() {
        let html = markdown_to_html("## Translation\n**Chinese:** 你好");
        assert!(html.contains("<h2>Translation</h2>"), "{html}");
        assert!(html.contains("<strong>Chinese:</strong> 你好"), "{html}");
    }

    #[test]
    fn scripts_and_javascript_links_are_removed() {
        let html = markdown_to_html("[Link](javascript:alert(1))\n\n<script>alert(1)</script>");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn sanitize_keeps_allowed_tags_only() {
        let html = sanitize_html("<p onclick=\"x()\">Hi<img src=x></p>");
        assert_eq!(html, "<p>Hi</p>");
    }
}
