use std::sync::LazyLock;

use scraper::{Html, Selector};

static DIV: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div[class]").unwrap());

/// Flattened text of every `div` whose `class` attribute is exactly
/// `class_name`, in document order.
///
/// The match is on the whole attribute value, so `class="def note"` is not a
/// `def` block. Text comes back untrimmed; nested elements contribute their
/// text, comments do not.
pub fn collect_text(document: &Html, class_name: &str) -> Vec<String> {
    document
        .select(&DIV)
        .filter(|div| div.value().attr("class") == Some(class_name))
        .map(|div| div.text().collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_fragment;

    #[test]
    fn single_block() {
        let doc = parse_fragment(r#"<div class="def">  hello world  </div>"#);
        assert_eq!(collect_text(&doc, "def"), vec!["  hello world  "]);
    }

    #[test]
    fn nested_markup_is_flattened() {
        let doc = parse_fragment(r#"<div class="q"><i>quick</i> brown <b>f<u>o</u>x</b></div>"#);
        assert_eq!(collect_text(&doc, "q"), vec!["quick brown fox"]);
    }

    #[test]
    fn document_order() {
        let doc = parse_fragment(
            r#"<div class="def">one</div><p><div class="def">two</div></p><div class="def">three</div>"#,
        );
        assert_eq!(collect_text(&doc, "def"), vec!["one", "two", "three"]);
    }

    #[test]
    fn nested_matches_each_yield_text() {
        let doc = parse_fragment(r#"<div class="def">outer <div class="def">inner</div></div>"#);
        assert_eq!(collect_text(&doc, "def"), vec!["outer inner", "inner"]);
    }

    #[test]
    fn class_must_match_exactly() {
        let doc = parse_fragment(
            r#"<div class="def note">a</div><div class="Def">b</div><div class=" def">c</div><div class="def">d</div>"#,
        );
        assert_eq!(collect_text(&doc, "def"), vec!["d"]);
    }

    #[test]
    fn only_div_elements() {
        let doc = parse_fragment(r#"<span class="def">a</span><p class="def">b</p>"#);
        assert!(collect_text(&doc, "def").is_empty());
    }

    #[test]
    fn comments_are_skipped() {
        let doc = parse_fragment(r#"<div class="ety">from <!-- hidden -->Latin</div>"#);
        assert_eq!(collect_text(&doc, "ety"), vec!["from Latin"]);
    }

    #[test]
    fn empty_div_yields_empty_string() {
        let doc = parse_fragment(r#"<div class="cs"></div>"#);
        assert_eq!(collect_text(&doc, "cs"), vec![String::new()]);
    }

    #[test]
    fn unclosed_tags_are_tolerated() {
        let doc = parse_fragment(r#"<div class="note">see <i>also<div class="note">x"#);
        assert_eq!(collect_text(&doc, "note").len(), 2);
    }
}
