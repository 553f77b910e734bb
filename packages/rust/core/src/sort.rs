//! Final row ordering.

use linkdigest_shared::ClassifiedLink;

/// Sort rows by the digit-string key of their source label, descending.
///
/// The key is every digit character of the source label concatenated in
/// encounter order, and keys compare as strings, not numbers: "3" sorts
/// above "12", which sorts above "105". Downstream sheet consumers depend
/// on this ordering, so it is preserved as-is. The sort is stable; rows
/// with equal keys keep their input order.
pub fn by_source_digits(links: &mut [ClassifiedLink]) {
    links.sort_by(|a, b| digit_key(&b.source).cmp(&digit_key(&a.source)));
}

/// Digits of the source label, concatenated in encounter order.
fn digit_key(source: &str) -> String {
    source.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(source: &str, url: &str) -> ClassifiedLink {
        ClassifiedLink {
            url: format!("{url} "),
            category: "others".into(),
            source: source.into(),
            published: "0".into(),
            title: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn digit_key_concatenates_in_encounter_order() {
        assert_eq!(digit_key("Issue #105"), "105");
        assert_eq!(digit_key("Week 3, part 2"), "32");
        assert_eq!(digit_key("no digits"), "");
    }

    #[test]
    fn string_descending_not_numeric() {
        let mut links = vec![
            link("Issue #105", "https://c.example.com"),
            link("Issue #3", "https://a.example.com"),
            link("Issue #12", "https://b.example.com"),
        ];
        by_source_digits(&mut links);

        let sources: Vec<&str> = links.iter().map(|l| l.source.as_str()).collect();
        // "3" > "12" > "105" as strings: the preserved quirk.
        assert_eq!(sources, vec!["Issue #3", "Issue #12", "Issue #105"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut links = vec![
            link("Issue #7", "https://first.example.com"),
            link("Issue #7", "https://second.example.com"),
        ];
        by_source_digits(&mut links);
        assert_eq!(links[0].url, "https://first.example.com ");
        assert_eq!(links[1].url, "https://second.example.com ");
    }
}
