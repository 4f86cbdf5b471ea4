//! Fixed location list backing the search-bar autocomplete.
//!
//! The list is not a gazetteer; it exists so typing in the destination field
//! can offer suggestions, and a free-text location that matches nothing is
//! still accepted.

/// Cities offered by the location autocomplete, in display order.
pub const LOCATIONS: [&str; 6] = [
    "New York City, NY",
    "Los Angeles, CA",
    "San Francisco, CA",
    "Miami, FL",
    "Chicago, IL",
    "Las Vegas, NV",
];

/// Locations whose name contains `query`, case-insensitively, preserving
/// list order. An empty query matches every location.
#[must_use]
pub fn suggest(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    LOCATIONS
        .iter()
        .filter(|location| location.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_all_locations() {
        assert_eq!(suggest(""), LOCATIONS.to_vec());
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(suggest("new york"), vec!["New York City, NY"]);
        assert_eq!(suggest("NEW YORK"), vec!["New York City, NY"]);
    }

    #[test]
    fn substring_matches_anywhere_in_the_name() {
        assert_eq!(
            suggest("ca"),
            vec!["Los Angeles, CA", "San Francisco, CA", "Chicago, IL"]
        );
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(suggest("tokyo").is_empty());
    }

    #[test]
    fn order_follows_the_list_not_the_match() {
        let matches = suggest("a");
        let positions: Vec<usize> = matches
            .iter()
            .map(|m| LOCATIONS.iter().position(|l| l == m).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
