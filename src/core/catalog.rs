//! # Course Catalog
//!
//! The immutable tree of modules and lessons. Built once at startup from
//! the static payload in [`crate::core::content`] and never mutated —
//! every other component (outline, search, rendering) reads from it.
//!
//! Slugs identify modules uniquely; lesson slugs are only unique within
//! their owning module, so lesson lookup always takes the pair. Lesson
//! `id`s are globally unique and are what the progress store keys on.

/// The full course: metadata plus the module tree.
pub struct Catalog {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub certification_code: &'static str,
    pub trainer: TrainerInfo,
    pub what_you_will_learn: Vec<&'static str>,
    pub prerequisites: Vec<&'static str>,
    pub modules: Vec<Module>,
}

pub struct TrainerInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub linkedin: Option<&'static str>,
}

pub struct Module {
    pub id: &'static str,
    pub title: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub duration: &'static str,
    pub lessons: Vec<Lesson>,
}

pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub slug: &'static str,
    pub duration: &'static str,
    pub content: LessonContent,
    pub trainer_notes: Option<TrainerNotes>,
}

/// Ordered text sections of a lesson. Order is display order only.
pub struct LessonContent {
    pub explanation: Vec<&'static str>,
    pub key_points: Vec<&'static str>,
    pub architecture: Option<Architecture>,
    pub why_it_matters: &'static str,
    pub common_mistakes: Vec<&'static str>,
    pub interview_tips: Vec<&'static str>,
    pub exam_tips: Vec<&'static str>,
}

pub struct Architecture {
    pub title: &'static str,
    pub steps: Vec<ArchitectureStep>,
}

/// `step` is a 1-based display label, unique only within its lesson.
pub struct ArchitectureStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}

/// Supplementary teaching content, shown only in trainer mode.
pub struct TrainerNotes {
    pub talking_points: Vec<&'static str>,
    pub real_examples: Vec<&'static str>,
    pub questions_to_ask: Vec<&'static str>,
}

impl Catalog {
    /// Look up a lesson by its `(module_slug, lesson_slug)` pair.
    ///
    /// `None` is a display-level "not found" condition, not an error —
    /// callers render a not-found state and carry on.
    pub fn locate(&self, module_slug: &str, lesson_slug: &str) -> Option<(&Module, &Lesson)> {
        let module = self.modules.iter().find(|m| m.slug == module_slug)?;
        let lesson = module.lessons.iter().find(|l| l.slug == lesson_slug)?;
        Some((module, lesson))
    }

    /// Total lesson count across all modules (denominator for progress %).
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_catalog;

    #[test]
    fn test_locate_finds_existing_lesson() {
        let catalog = test_catalog();
        let (module, lesson) = catalog.locate("alpha", "a2").expect("lesson should exist");
        assert_eq!(module.slug, "alpha");
        assert_eq!(lesson.id, "a2");
    }

    #[test]
    fn test_locate_unknown_module_is_none() {
        let catalog = test_catalog();
        assert!(catalog.locate("gamma", "a1").is_none());
    }

    #[test]
    fn test_locate_lesson_slug_scoped_to_module() {
        // b1 exists, but only under beta
        let catalog = test_catalog();
        assert!(catalog.locate("alpha", "b1").is_none());
        assert!(catalog.locate("beta", "b1").is_some());
    }

    #[test]
    fn test_lesson_count_sums_modules() {
        assert_eq!(test_catalog().lesson_count(), 3);
    }
}
