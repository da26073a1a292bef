use fnv::{FnvHashMap, FnvHashSet};
use super::substructures::Item;

/// Extracted items after disambiguation: each canonical item with its occurrence index
pub type ItemSet = FnvHashSet<(Item, usize)>;

/// Canonical form of an item. Entity names are compared case-insensitively, everything else
/// is compared as is.
pub fn canonicalize(item: Item) -> Item {
    match item {
        Item::NamedEntity { name, entity_type } => Item::NamedEntity { name: name.to_lowercase(), entity_type },
        Item::Wiki { name, link } => Item::Wiki { name: name.to_lowercase(), link },
        item => item
    }
}

/// Canonicalize items and number the repetitions of the same canonical item (0, 1, ...), so
/// that repeated items are counted as many times as they occur.
pub fn disambiguate<I: IntoIterator<Item=Item>>(items: I) -> ItemSet {
    let mut n_occurrences: FnvHashMap<Item, usize> = FnvHashMap::default();
    items.into_iter()
        .map(|item| {
            let item = canonicalize(item);
            let occurrence = n_occurrences.entry(item.clone()).or_insert(0);
            *occurrence += 1;
            (item, *occurrence - 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(c: &str) -> Item {
        Item::Concept(c.to_owned())
    }

    #[test]
    pub fn test_repeated_items_are_kept() {
        let items = disambiguate(vec![concept("person"), concept("go-01"), concept("person")]);
        assert_eq!(items.len(), 3);
        assert!(items.contains(&(concept("person"), 0)));
        assert!(items.contains(&(concept("person"), 1)));
        assert!(items.contains(&(concept("go-01"), 0)));
    }

    #[test]
    pub fn test_entity_names_ignore_case() {
        let pred = disambiguate(vec![Item::NamedEntity { name: "JOHN".to_owned(), entity_type: "person".to_owned() }]);
        let gold = disambiguate(vec![Item::NamedEntity { name: "John".to_owned(), entity_type: "person".to_owned() }]);
        assert_eq!(pred, gold);

        // links and types are case sensitive
        let pred = disambiguate(vec![Item::Wiki { name: "Paris".to_owned(), link: "paris".to_owned() }]);
        let gold = disambiguate(vec![Item::Wiki { name: "paris".to_owned(), link: "Paris".to_owned() }]);
        assert_eq!(pred.intersection(&gold).count(), 0);
        assert_eq!(canonicalize(concept("Person")), concept("Person"));
    }
}
