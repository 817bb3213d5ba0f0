//! Pure search filtering over the country list.

use crate::model::Country;

/// Returns the countries whose name or region contains `query`,
/// case-insensitively, preserving input order.
///
/// The query is trimmed first; a trimmed-empty query returns the input
/// unchanged. Matching is plain case-folded substring search, with no accent
/// or locale folding. Pure and allocation-bounded, safe to run per keystroke.
pub fn filter_countries(countries: &[Country], query: &str) -> Vec<Country> {
    let query = query.trim();
    if query.is_empty() {
        return countries.to_vec();
    }
    let needle = query.to_lowercase();
    countries
        .iter()
        .filter(|country| {
            country.name.to_lowercase().contains(&needle)
                || country.region.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usa() -> Country {
        Country::new("USA", "Americas")
    }

    fn canada() -> Country {
        Country::new("Canada", "Americas")
    }

    #[test]
    fn empty_query_returns_the_input_unchanged() {
        assert_eq!(filter_countries(&[], ""), vec![]);
        assert_eq!(filter_countries(&[usa(), canada()], ""), vec![usa(), canada()]);
    }

    #[test]
    fn whitespace_only_query_counts_as_empty() {
        assert_eq!(filter_countries(&[usa(), canada()], "   "), vec![usa(), canada()]);
    }

    #[test]
    fn matches_names_case_insensitively() {
        assert_eq!(filter_countries(&[usa(), canada()], "usa"), vec![usa()]);
    }

    #[test]
    fn matches_regions_and_preserves_order() {
        let countries = [usa(), Country::new("Mexico", "Americas")];
        assert_eq!(filter_countries(&countries, "americas"), countries.to_vec());
    }

    #[test]
    fn matches_partial_region_words() {
        let countries = [usa(), Country::new("Canada", "North America")];
        assert_eq!(
            filter_countries(&countries, "north"),
            vec![Country::new("Canada", "North America")]
        );
    }

    #[test]
    fn returns_empty_when_nothing_matches() {
        let countries = [
            Country::new("Brazil", "South America"),
            Country::new("Argentina", "South America"),
        ];
        assert_eq!(filter_countries(&countries, "Europe"), vec![]);
    }

    #[test]
    fn trims_the_query_before_matching() {
        assert_eq!(filter_countries(&[usa(), canada()], "  usa "), vec![usa()]);
    }
}
