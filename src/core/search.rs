//! # Lesson Search
//!
//! Substring search over lesson text, recomputed from the catalog on
//! every query. The catalog is small and static, so there is no index
//! structure to maintain.
//!
//! The searchable text is the lesson title, the explanation paragraphs,
//! the key points, and the why-it-matters blurb. Common mistakes,
//! interview tips, exam tips, and trainer notes are deliberately not
//! searched.

use crate::core::catalog::{Catalog, Lesson, Module};

/// A matching lesson, paired with its owning module for display.
pub struct SearchHit<'a> {
    pub module: &'a Module,
    pub lesson: &'a Lesson,
}

/// Case-insensitive substring search.
///
/// An empty or whitespace-only query returns no hits (not "everything").
/// Results follow catalog order: module order, then lesson order — there
/// is no relevance ranking.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<SearchHit<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for module in &catalog.modules {
        for lesson in &module.lessons {
            if searchable_text(lesson).contains(&query) {
                hits.push(SearchHit { module, lesson });
            }
        }
    }
    hits
}

fn searchable_text(lesson: &Lesson) -> String {
    let mut parts: Vec<&str> = vec![lesson.title];
    parts.extend(&lesson.content.explanation);
    parts.extend(&lesson.content.key_points);
    parts.push(lesson.content.why_it_matters);
    parts.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;

    #[test]
    fn test_blank_queries_match_nothing() {
        let catalog = test_catalog();
        assert!(search(&catalog, "").is_empty());
        assert!(search(&catalog, "   ").is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let catalog = test_catalog();
        let hits = search(&catalog, "ROUTING");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].lesson.id, "a2");
    }

    #[test]
    fn test_results_follow_catalog_order() {
        let catalog = test_catalog();
        // "lesson" appears in every test lesson's title
        let hits = search(&catalog, "lesson");
        let ids: Vec<&str> = hits.iter().map(|h| h.lesson.id).collect();
        assert_eq!(ids, vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn test_every_hit_contains_the_query() {
        let catalog = test_catalog();
        let query = "mail";
        for hit in search(&catalog, query) {
            assert!(searchable_text(hit.lesson).contains(query));
        }
    }

    #[test]
    fn test_excluded_sections_are_not_searched() {
        let catalog = test_catalog();
        // "pitfall" only occurs in a common-mistakes entry of the fixture
        assert!(search(&catalog, "pitfall").is_empty());
    }

    #[test]
    fn test_why_it_matters_is_searched() {
        let catalog = test_catalog();
        let hits = search(&catalog, "foundation");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].lesson.id, "a1");
    }
}
