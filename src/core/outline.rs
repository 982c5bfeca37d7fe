//! # Course Outline
//!
//! Flattens the catalog's module/lesson tree into one ordered sequence,
//! which is the sole basis for "previous" and "next" semantics and for
//! the progress percentage denominator.
//!
//! The flattening is a pure projection of the catalog: module order,
//! then lesson order within each module. The catalog never changes at
//! runtime, so the outline is computed once and cached in [`App`].
//! Index stability matters — navigation stores a flat index, and the
//! same catalog must always produce the same ordering.
//!
//! [`App`]: crate::core::state::App

use crate::core::catalog::{Catalog, Lesson, Module};

/// One lesson in the flattened sequence, tagged with its owning module.
///
/// Holds indices back into the catalog plus the `'static` display fields
/// so callers can render an entry without re-resolving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatEntry {
    pub module_idx: usize,
    pub lesson_idx: usize,
    pub module_slug: &'static str,
    pub module_title: &'static str,
    pub lesson_slug: &'static str,
    pub lesson_title: &'static str,
    pub lesson_id: &'static str,
}

/// Previous/next neighbors of a flat index. Either side is `None` at the
/// corresponding edge of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub previous: Option<&'a FlatEntry>,
    pub next: Option<&'a FlatEntry>,
}

/// Direction of a keyboard/toolbar step through the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// The cached flat ordering of every lesson in the catalog.
pub struct Outline {
    entries: Vec<FlatEntry>,
}

impl Outline {
    pub fn new(catalog: &Catalog) -> Self {
        let mut entries = Vec::with_capacity(catalog.lesson_count());
        for (module_idx, module) in catalog.modules.iter().enumerate() {
            for (lesson_idx, lesson) in module.lessons.iter().enumerate() {
                entries.push(FlatEntry {
                    module_idx,
                    lesson_idx,
                    module_slug: module.slug,
                    module_title: module.title,
                    lesson_slug: lesson.slug,
                    lesson_title: lesson.title,
                    lesson_id: lesson.id,
                });
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[FlatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FlatEntry> {
        self.entries.get(index)
    }

    /// Position of a lesson in the flat sequence, by slug pair.
    pub fn index_of(&self, module_slug: &str, lesson_slug: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.module_slug == module_slug && e.lesson_slug == lesson_slug)
    }

    /// The entries immediately before and after `index`. Crossing a module
    /// boundary is ordinary — neighbors may belong to a different module.
    pub fn adjacent(&self, index: usize) -> Neighbors<'_> {
        Neighbors {
            previous: index.checked_sub(1).and_then(|i| self.entries.get(i)),
            next: self.entries.get(index + 1),
        }
    }

    /// Target index for a single step, or `None` when the step would leave
    /// `[0, len)`. No wraparound — out-of-bounds steps are no-ops.
    pub fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        let target = match direction {
            Direction::Back => index.checked_sub(1)?,
            Direction::Forward => index + 1,
        };
        (target < self.entries.len()).then_some(target)
    }

    /// Resolve an entry back to its catalog module and lesson.
    pub fn resolve<'a>(&self, catalog: &'a Catalog, index: usize) -> Option<(&'a Module, &'a Lesson)> {
        let entry = self.entries.get(index)?;
        let module = catalog.modules.get(entry.module_idx)?;
        let lesson = module.lessons.get(entry.lesson_idx)?;
        Some((module, lesson))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;

    #[test]
    fn test_length_matches_lesson_count() {
        let catalog = test_catalog();
        let outline = Outline::new(&catalog);
        assert_eq!(outline.len(), catalog.lesson_count());
    }

    #[test]
    fn test_order_matches_nested_iteration() {
        let catalog = test_catalog();
        let outline = Outline::new(&catalog);
        let ids: Vec<&str> = outline.entries().iter().map(|e| e.lesson_id).collect();
        assert_eq!(ids, vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn test_order_stable_across_rebuilds() {
        let catalog = test_catalog();
        let first = Outline::new(&catalog);
        let second = Outline::new(&catalog);
        assert_eq!(first.entries(), second.entries());
    }

    #[test]
    fn test_index_of() {
        let catalog = test_catalog();
        let outline = Outline::new(&catalog);
        assert_eq!(outline.index_of("alpha", "a2"), Some(1));
        assert_eq!(outline.index_of("beta", "b1"), Some(2));
        assert_eq!(outline.index_of("alpha", "missing"), None);
    }

    #[test]
    fn test_adjacent_none_at_edges() {
        let catalog = test_catalog();
        let outline = Outline::new(&catalog);
        assert!(outline.adjacent(0).previous.is_none());
        assert!(outline.adjacent(outline.len() - 1).next.is_none());
    }

    #[test]
    fn test_adjacent_crosses_module_boundary() {
        let catalog = test_catalog();
        let outline = Outline::new(&catalog);
        let neighbors = outline.adjacent(1);
        assert_eq!(neighbors.previous.map(|e| e.lesson_id), Some("a1"));
        // a2 is the last lesson of alpha; its next neighbor lives in beta
        assert_eq!(neighbors.next.map(|e| e.lesson_id), Some("b1"));
        assert_eq!(neighbors.next.map(|e| e.module_slug), Some("beta"));
    }

    #[test]
    fn test_step_clamps_at_bounds() {
        let catalog = test_catalog();
        let outline = Outline::new(&catalog);
        assert_eq!(outline.step(0, Direction::Back), None);
        assert_eq!(outline.step(outline.len() - 1, Direction::Forward), None);
        assert_eq!(outline.step(0, Direction::Forward), Some(1));
        assert_eq!(outline.step(2, Direction::Back), Some(1));
    }

    #[test]
    fn test_resolve_round_trips() {
        let catalog = test_catalog();
        let outline = Outline::new(&catalog);
        let (module, lesson) = outline.resolve(&catalog, 2).expect("index 2 exists");
        assert_eq!(module.slug, "beta");
        assert_eq!(lesson.id, "b1");
    }
}
