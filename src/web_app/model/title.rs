// web_app/model/title.rs - Product titles derived from page URLs
//
// Product pages usually end in a dash-separated slug
// (".../p/peanut-butter-cups"). When the user pastes a URL directly there is
// no search result to take a title from, so the slug is turned into one.

use url::Url;

/// Upper-case the first character of a word, leaving the rest untouched
pub fn capitalize_first_letter(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a dash-separated slug into space-separated capitalized words
///
/// `"peanut-butter-cups"` becomes `"Peanut Butter Cups"`.
pub fn beautify_dirty_url(slug: &str) -> String {
    slug.split('-')
        .map(capitalize_first_letter)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last meaningful path segment of a URL, or its host when there is none
///
/// Input without a scheme (`shop.example/p/oat-milk`) is read as https.
pub fn url_slug(input: &str) -> String {
    let input = input.trim();
    let parsed = match Url::parse(input) {
        Ok(url) if !url.cannot_be_a_base() => Some(url),
        _ => Url::parse(&format!("https://{input}")).ok(),
    };
    let Some(url) = parsed else {
        return String::new();
    };

    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .or_else(|| url.host_str())
        .unwrap_or("")
        .to_string()
}

/// Display title for a product known only by its page URL
pub fn title_from_url(url: &str) -> String {
    beautify_dirty_url(&url_slug(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("peanut"), "Peanut");
        assert_eq!(capitalize_first_letter("Peanut"), "Peanut");
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("éclair"), "Éclair");
    }

    #[test]
    fn test_beautify_dirty_url() {
        assert_eq!(beautify_dirty_url("peanut-butter-cups"), "Peanut Butter Cups");
        assert_eq!(beautify_dirty_url("nutella"), "Nutella");
    }

    #[test]
    fn test_url_slug_strips_query_and_fragment() {
        assert_eq!(
            url_slug("https://shop.example/p/oat-milk-barista?ref=home#reviews"),
            "oat-milk-barista"
        );
    }

    #[test]
    fn test_url_slug_trailing_slash() {
        assert_eq!(url_slug("https://shop.example/p/oat-milk/"), "oat-milk");
    }

    #[test]
    fn test_url_slug_falls_back_to_host() {
        assert_eq!(url_slug("https://shop.example"), "shop.example");
        assert_eq!(url_slug("https://shop.example/"), "shop.example");
    }

    #[test]
    fn test_url_slug_without_scheme() {
        assert_eq!(url_slug("shop.example/p/oat-milk"), "oat-milk");
        assert_eq!(url_slug("localhost:3000/p/oat-milk"), "oat-milk");
    }

    #[test]
    fn test_url_slug_ignores_urls_in_query() {
        assert_eq!(
            url_slug("shop.example/p/oat-milk?ref=https://ads.example/x"),
            "oat-milk"
        );
    }

    #[test]
    fn test_title_from_url() {
        assert_eq!(
            title_from_url("https://www.walmart.com/ip/great-value-creamy-peanut-butter/10315475"),
            "10315475"
        );
        assert_eq!(
            title_from_url("https://shop.example/products/dark-chocolate-bar"),
            "Dark Chocolate Bar"
        );
    }
}
