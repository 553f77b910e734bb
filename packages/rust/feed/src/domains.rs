//! Domain frequency reporting over a link list.
//!
//! Standalone utility, not wired into classification: used to see which
//! hosts the newsletter links to most.

use std::collections::HashMap;

use url::Url;

/// Cap on the number of reported domains.
const MAX_DOMAINS: usize = 500;

/// Count URL hosts and return the most frequent, descending by count.
///
/// Ties keep first-seen order; at most 500 entries are returned.
/// URLs that fail to parse count under the empty host.
pub fn most_frequent_domains<'a>(urls: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut order = 0usize;

    for url in urls {
        let host = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();

        let entry = counts.entry(host).or_insert((0, order));
        entry.0 += 1;
        order += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(host, (count, first_seen))| (host, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(MAX_DOMAINS);

    ranked.into_iter().map(|(host, count, _)| (host, count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_descending() {
        let urls = [
            "https://a.example.com/1",
            "https://b.example.com/1",
            "https://a.example.com/2",
            "https://a.example.com/3",
        ];
        let domains = most_frequent_domains(urls);
        assert_eq!(
            domains,
            vec![("a.example.com".to_string(), 3), ("b.example.com".to_string(), 1)]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let urls = [
            "https://z.example.com/1",
            "https://a.example.com/1",
            "https://z.example.com/2",
            "https://a.example.com/2",
        ];
        let domains = most_frequent_domains(urls);
        // z seen first, so it precedes a despite equal counts.
        assert_eq!(domains[0].0, "z.example.com");
        assert_eq!(domains[1].0, "a.example.com");
    }

    #[test]
    fn unparseable_urls_count_under_empty_host() {
        let urls = ["not a url", "also-not-a-url"];
        let domains = most_frequent_domains(urls);
        assert_eq!(domains, vec![(String::new(), 2)]);
    }

    #[test]
    fn output_capped_at_500() {
        let urls: Vec<String> = (0..600)
            .map(|i| format!("https://host{i}.example.com/"))
            .collect();
        let domains = most_frequent_domains(urls.iter().map(String::as_str));
        assert_eq!(domains.len(), 500);
    }
}
