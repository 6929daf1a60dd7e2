use std::sync::OnceLock;

use regex::Regex;

fn tag_pattern() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"))
}

/// Remove every `<...>` sequence
pub fn strip_tags(html: &str) -> String {
    tag_pattern().replace_all(html, "").into_owned()
}

pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// Strip markup, trim, and cap at `max_chars` characters
pub fn plain_excerpt(html: &str, max_chars: usize) -> String {
    let text = strip_tags(html);
    truncate_chars(text.trim(), max_chars).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags(r#"<p class="lead">Plastic <b>waste</b> rises</p><br/>"#),
            "Plastic waste rises"
        );
        assert_eq!(strip_tags("no markup"), "no markup");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("océan", 3), "océ");
        assert_eq!(truncate_chars("sea", 10), "sea");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn test_plain_excerpt_caps_length() {
        let html = format!("<div>{}</div>", "é".repeat(1500));
        let excerpt = plain_excerpt(&html, 1000);
        assert_eq!(excerpt.chars().count(), 1000);
        assert!(!excerpt.contains('<'));
    }
}
