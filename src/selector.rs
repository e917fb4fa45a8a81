//! Filtering and letter-index derivation for the item list.
//!
//! These are the pure halves of the drawer: every signal in
//! [`crate::state::AppState`] that shows a list goes through them.

use std::collections::BTreeSet;

use crate::types::Item;

/// Uppercased first character of `name`, or `None` for an empty name.
///
/// Some characters uppercase to more than one char (`ß` -> `SS`), so the
/// letter is a `String`.
pub fn first_letter(name: &str) -> Option<String> {
    name.chars().next().map(|c| c.to_uppercase().collect())
}

fn matches_letter(item: &Item, letter: &str) -> bool {
    first_letter(&item.name).is_some_and(|first| first == letter)
}

/// Items matching both the selected letter and the search term.
///
/// The letter is compared against the uppercased first character of each
/// name; an empty letter is ignored. The search term is trimmed and matched
/// as a case-insensitive substring; a blank term matches everything. Order is
/// preserved.
pub fn filter_items(items: &[Item], search_term: &str, selected_letter: Option<&str>) -> Vec<Item> {
    // An empty letter means "All"
    let letter = selected_letter
        .filter(|letter| !letter.is_empty())
        .map(str::to_uppercase);
    let search = search_term.trim().to_lowercase();

    items
        .iter()
        .filter(|item| match &letter {
            Some(letter) => matches_letter(item, letter),
            None => true,
        })
        .filter(|item| search.is_empty() || item.name.to_lowercase().contains(&search))
        .cloned()
        .collect()
}

/// Sorted, deduplicated uppercase first letters of all non-empty names.
pub fn index_letters(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| first_letter(&item.name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Fallback text for an empty filtered list
pub fn no_results_message(search_term: &str, selected_letter: Option<&str>) -> String {
    if !search_term.is_empty() {
        format!("No results for \"{search_term}\"")
    } else if let Some(letter) = selected_letter {
        format!("No clients found starting with \"{letter}\"")
    } else {
        "No clients match the current filters.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<Item> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Item::new(i.to_string(), *name))
            .collect()
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_items(&[], "", None).is_empty());
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let data = vec![Item::new("1", "Alice")];
        assert_eq!(filter_items(&data, "al", None), data);
        assert_eq!(filter_items(&data, "LIC", None), data);
    }

    #[test]
    fn test_filter_search_is_trimmed() {
        let data = items(&["Alice", "Bob"]);
        assert_eq!(names(&filter_items(&data, "  bo ", None)), vec!["Bob"]);
    }

    #[test]
    fn test_filter_blank_search_matches_all() {
        let data = items(&["Alice", "Bob"]);
        assert_eq!(filter_items(&data, "   ", None), data);
    }

    #[test]
    fn test_filter_by_letter() {
        let data = items(&["Bob", "alice", "barbara", "Carl"]);
        assert_eq!(
            names(&filter_items(&data, "", Some("B"))),
            vec!["Bob", "barbara"]
        );
    }

    #[test]
    fn test_filter_by_lowercase_letter() {
        let data = items(&["Bob", "alice"]);
        assert_eq!(names(&filter_items(&data, "", Some("b"))), vec!["Bob"]);
    }

    #[test]
    fn test_filter_letter_skips_empty_names() {
        let data = items(&["", "Bob"]);
        assert_eq!(names(&filter_items(&data, "", Some("B"))), vec!["Bob"]);
    }

    #[test]
    fn test_filter_empty_letter_matches_all() {
        let data = items(&["Bob", "alice", ""]);
        assert_eq!(filter_items(&data, "", Some("")), data);
    }

    #[test]
    fn test_filter_letter_and_search_combined() {
        let data = items(&["Bob", "Barbara", "Alice"]);
        assert_eq!(
            names(&filter_items(&data, "arb", Some("B"))),
            vec!["Barbara"]
        );
    }

    #[test]
    fn test_filter_letter_with_non_matching_search_is_empty() {
        let data = items(&["Bob", "Barbara", "Alice"]);
        assert!(filter_items(&data, "alice", Some("B")).is_empty());
    }

    #[test]
    fn test_index_letters_sorted_unique() {
        let data = items(&["bob", "Ann", "alice"]);
        assert_eq!(index_letters(&data), vec!["A", "B"]);
    }

    #[test]
    fn test_index_letters_empty() {
        assert!(index_letters(&[]).is_empty());
    }

    #[test]
    fn test_index_letters_skips_empty_names() {
        let data = items(&["", "zed", ""]);
        assert_eq!(index_letters(&data), vec!["Z"]);
    }

    #[test]
    fn test_index_letters_non_alphabetic() {
        let data = items(&["3M", "éclair", "Apple"]);
        assert_eq!(index_letters(&data), vec!["3", "A", "É"]);
    }

    #[test]
    fn test_first_letter() {
        assert_eq!(first_letter("bob"), Some("B".to_string()));
        assert_eq!(first_letter("ßeta"), Some("SS".to_string()));
        assert_eq!(first_letter(""), None);
    }

    #[test]
    fn test_no_results_message() {
        assert_eq!(no_results_message("zz", Some("A")), "No results for \"zz\"");
        assert_eq!(
            no_results_message("", Some("A")),
            "No clients found starting with \"A\""
        );
        assert_eq!(
            no_results_message("", None),
            "No clients match the current filters."
        );
    }
}
