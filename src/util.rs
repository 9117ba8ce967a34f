/// Turn a display title into a URL path segment: lowercase, with any
/// whitespace run collapsed to a single hyphen.
pub fn title_to_slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(title_to_slug("Hello World"), "hello-world");
        assert_eq!(title_to_slug("MAXIMIZE VALUE"), "maximize-value");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(title_to_slug("Tools  and \t SW directory"), "tools-and-sw-directory");
    }

    #[test]
    fn leaves_single_words_alone() {
        assert_eq!(title_to_slug("Events"), "events");
    }
}
