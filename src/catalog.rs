//! Static content catalogs with id lookup and pure filtering.
//!
//! Each listing page (services, blog, portfolio) works over a `Catalog`:
//! an insertion-ordered list of entries with an id index so detail routes
//! resolve without scanning.

use std::collections::HashMap;

/// An entry that can live in a [`Catalog`].
///
/// Ids double as URL path segments, so they must not contain `/`.
pub trait CatalogItem {
    fn id(&self) -> &str;

    /// Concatenation of the fields a free-text search should match against.
    fn search_text(&self) -> String;

    fn category(&self) -> Option<&str> {
        None
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Catalog<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Builds a catalog preserving insertion order. A duplicate id keeps the
    /// first entry; static content is author-controlled so this is not an
    /// error path.
    pub fn new(entries: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.id().to_string()).or_insert(i);
        }
        Self { entries, index }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derives a filtered view of the catalog. Case-insensitive substring
    /// match of `query` against each entry's search text, AND-composed with
    /// a substring match of `category` against the entry's category field.
    /// An empty/whitespace query matches everything, as does an empty or
    /// `"all"` category. Never mutates the catalog; order is preserved.
    pub fn filter(&self, query: &str, category: &str) -> Vec<&T> {
        let query = query.trim().to_lowercase();
        let category = category.trim().to_lowercase();
        let category_active = !category.is_empty() && category != "all";

        self.entries
            .iter()
            .filter(|entry| {
                if category_active {
                    let matches = entry
                        .category()
                        .map(|c| c.to_lowercase().contains(&category))
                        .unwrap_or(false);
                    if !matches {
                        return false;
                    }
                }
                if query.is_empty() {
                    return true;
                }
                entry.search_text().to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Entry {
        id: &'static str,
        title: &'static str,
        category: &'static str,
    }

    impl CatalogItem for Entry {
        fn id(&self) -> &str {
            self.id
        }

        fn search_text(&self) -> String {
            self.title.to_string()
        }

        fn category(&self) -> Option<&str> {
            Some(self.category)
        }
    }

    fn sample() -> Catalog<Entry> {
        Catalog::new(vec![
            Entry { id: "biology", title: "Genome Browsers", category: "Life Sciences" },
            Entry { id: "chemistry", title: "Reaction Search", category: "Chemistry" },
            Entry { id: "physics", title: "Telemetry Dashboards", category: "Physics" },
        ])
    }

    #[test]
    fn lookup_by_id() {
        let catalog = sample();
        assert_eq!(catalog.get("chemistry").unwrap().title, "Reaction Search");
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn duplicate_ids_keep_first_entry() {
        let catalog = Catalog::new(vec![
            Entry { id: "a", title: "first", category: "x" },
            Entry { id: "a", title: "second", category: "x" },
        ]);
        assert_eq!(catalog.get("a").unwrap().title, "first");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_query_and_all_category_returns_everything_in_order() {
        let catalog = sample();
        let all = catalog.filter("", "all");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, "biology");
        assert_eq!(all[2].id, "physics");
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let catalog = sample();
        let hits = catalog.filter("REACTION", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "chemistry");
    }

    #[test]
    fn category_and_query_compose_with_and() {
        let catalog = sample();
        assert_eq!(catalog.filter("dashboards", "physics").len(), 1);
        assert!(catalog.filter("dashboards", "chemistry").is_empty());
    }

    #[test]
    fn no_match_returns_empty_without_mutating_source() {
        let catalog = sample();
        let before = catalog.clone();
        assert!(catalog.filter("zzz-no-such-entry", "").is_empty());
        assert_eq!(catalog, before);
    }

    #[test]
    fn filtering_is_stable_across_calls() {
        let catalog = sample();
        let first: Vec<&str> = catalog.filter("e", "").iter().map(|e| e.id).collect();
        let second: Vec<&str> = catalog.filter("e", "").iter().map(|e| e.id).collect();
        assert_eq!(first, second);
    }
}
