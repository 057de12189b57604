//! Name filtering for the listings table.

use api::listing::Listing;

/// Narrows `listings` to coins whose name contains `query`, ignoring case.
///
/// Runs against the already-fetched rows on every keystroke; it never
/// refetches. An empty query keeps every row, and order is preserved.
pub fn filter_by_name(listings: &[Listing], query: &str) -> Vec<Listing> {
    let needle = query.to_lowercase();
    listings
        .iter()
        .filter(|listing| listing.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use api::listing::Listing;

    use super::filter_by_name;

    fn coin(name: &str) -> Listing {
        Listing {
            id: name.to_lowercase().replace(' ', "-"),
            symbol: name[..3.min(name.len())].to_lowercase(),
            name: name.to_string(),
            image: String::new(),
            current_price: Some(1.0),
            market_cap: Some(1_000_000.0),
            change_1h: None,
            change_24h: None,
            change_7d: None,
        }
    }

    fn table() -> Vec<Listing> {
        vec![
            coin("Bitcoin"),
            coin("Ethereum"),
            coin("Bitcoin Cash"),
            coin("Dogecoin"),
        ]
    }

    #[test]
    fn an_empty_query_keeps_every_row_in_order() {
        let rows = table();
        assert_eq!(filter_by_name(&rows, ""), rows);
    }

    #[test]
    fn matching_is_substring_and_case_insensitive() {
        let rows = table();

        let bit = filter_by_name(&rows, "bIt");
        let names: Vec<&str> = bit.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Bitcoin", "Bitcoin Cash"]);

        let eth = filter_by_name(&rows, "eth");
        let names: Vec<&str> = eth.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Ethereum"]);

        let inner = filter_by_name(&rows, "coin");
        assert_eq!(inner.len(), 3);
    }

    #[test]
    fn no_match_yields_an_empty_table() {
        assert!(filter_by_name(&table(), "solana").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = table();
        let once = filter_by_name(&rows, "bitcoin");
        let twice = filter_by_name(&once, "bitcoin");
        assert_eq!(once, twice);
    }
}
