use std::collections::HashSet;

/// Render a lesson body to sanitized HTML.
///
/// Lesson content is authored in markdown (bold runs and bullet lists);
/// the output is cleaned before it is injected into the DOM.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let parser = pulldown_cmark::Parser::new(input);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = ["p", "br", "em", "strong", "b", "i", "ul", "ol", "li"]
        .into_iter()
        .collect();

    ammonia::Builder::new().tags(tags).clean(html).to_string()
}
