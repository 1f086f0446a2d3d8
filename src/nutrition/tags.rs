//! Locale-prefixed tag filtering

const ENGLISH_PREFIX: &str = "en:";

/// Collapse locale-prefixed tags into one English display string.
///
/// `["en:whole-grain", "en:organic"]` becomes `"whole grain, organic"`. When
/// no tag is English the first tag is used instead, stripped the same way.
/// An empty list yields `None`.
pub fn english_tags(tags: &[String]) -> Option<String> {
    let english: Vec<String> = tags
        .iter()
        .filter_map(|tag| tag.strip_prefix(ENGLISH_PREFIX))
        .map(dehyphenate)
        .collect();

    if !english.is_empty() {
        return Some(english.join(", "));
    }

    tags.first().map(|tag| dehyphenate(strip_locale(tag)))
}

/// Drop a leading `xx:` locale marker, if there is one
fn strip_locale(tag: &str) -> &str {
    match tag.split_once(':') {
        Some((locale, rest))
            if (2..=3).contains(&locale.len())
                && locale.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            rest
        }
        _ => tag,
    }
}

fn dehyphenate(tag: &str) -> String {
    tag.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_english_tags_joined() {
        assert_eq!(
            english_tags(&tags(&["en:whole-grain", "en:organic"])).as_deref(),
            Some("whole grain, organic")
        );
    }

    #[test]
    fn test_non_english_tags_are_dropped() {
        assert_eq!(
            english_tags(&tags(&["fr:sans-gluten", "en:gluten-free", "de:bio"])).as_deref(),
            Some("gluten free")
        );
    }

    #[test]
    fn test_falls_back_to_first_tag() {
        assert_eq!(english_tags(&tags(&["fr:bio"])).as_deref(), Some("bio"));
        assert_eq!(
            english_tags(&tags(&["fr:agriculture-biologique", "de:bio"])).as_deref(),
            Some("agriculture biologique")
        );
    }

    #[test]
    fn test_unprefixed_first_tag_kept() {
        assert_eq!(
            english_tags(&tags(&["no-added-sugar"])).as_deref(),
            Some("no added sugar")
        );
    }

    #[test]
    fn test_empty_is_absent() {
        assert!(english_tags(&[]).is_none());
    }
}
