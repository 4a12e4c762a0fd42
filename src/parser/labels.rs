use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Find the first text node equal to `label` and return the first `div`
/// that starts after it in document order.
///
/// The walk is pre-order, so ancestors of the label (which start before it)
/// are never candidates; the container may be a sibling, a cousin or any
/// later element.
pub fn value_container<'a>(document: &'a Html, label: &str) -> Option<ElementRef<'a>> {
    let mut nodes = document.tree.root().descendants();
    nodes
        .by_ref()
        .find(|n| matches!(n.value(), Node::Text(t) if &**t == label))?;
    nodes
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "div")
}

/// Concatenated descendant text of an element.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_following_div_not_ancestor() {
        let doc = Html::parse_document(
            r#"<div id="outer"><h3>Cover Date</h3><div id="v">May 1963</div></div>"#,
        );
        let el = value_container(&doc, "Cover Date").unwrap();
        assert_eq!(el.value().attr("id"), Some("v"));
    }

    #[test]
    fn first_label_occurrence_wins() {
        let doc = Html::parse_document(
            "<h3>Editor(s)</h3><div>first</div><h3>Editor(s)</h3><div>second</div>",
        );
        let el = value_container(&doc, "Editor(s)").unwrap();
        assert_eq!(text_of(el), "first");
    }

    #[test]
    fn container_need_not_be_a_sibling() {
        let doc = Html::parse_document(
            "<section><span>Release Date</span></section><p><div>June 1963</div></p>",
        );
        let el = value_container(&doc, "Release Date").unwrap();
        assert_eq!(text_of(el), "June 1963");
    }

    #[test]
    fn label_must_match_whole_text_node() {
        let doc = Html::parse_document("<h3>Release Date (US)</h3><div>x</div>");
        assert!(value_container(&doc, "Release Date").is_none());
    }

    #[test]
    fn missing_label_or_container() {
        let doc = Html::parse_document("<h3>Release Date</h3><span>x</span>");
        assert!(value_container(&doc, "Cover Date").is_none());
        assert!(value_container(&doc, "Release Date").is_none());
    }
}
