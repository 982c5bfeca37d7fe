//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{
    Architecture, ArchitectureStep, Catalog, Lesson, LessonContent, Module, TrainerInfo,
    TrainerNotes,
};
use crate::core::state::App;

fn lesson(id: &'static str, title: &'static str, slug: &'static str) -> Lesson {
    Lesson {
        id,
        title,
        slug,
        duration: "10 mins",
        content: LessonContent {
            explanation: vec!["Placeholder explanation."],
            key_points: vec!["Placeholder key point"],
            architecture: None,
            why_it_matters: "Placeholder.",
            common_mistakes: vec!["A classic pitfall"],
            interview_tips: vec![],
            exam_tips: vec![],
        },
        trainer_notes: None,
    }
}

/// A small fixed catalog: module `alpha` with lessons `[a1, a2]` and
/// module `beta` with lesson `[b1]`. Enough to exercise module-boundary
/// traversal and search.
pub fn test_catalog() -> Catalog {
    let mut a1 = lesson("a1", "First Lesson", "a1");
    a1.content.explanation = vec!["Mail basics, from envelope to delivery."];
    a1.content.why_it_matters = "It is the foundation for everything after it.";

    let mut a2 = lesson("a2", "Second Lesson", "a2");
    a2.content.key_points = vec!["Routing decisions happen per message"];
    a2.content.architecture = Some(Architecture {
        title: "Two Step Flow",
        steps: vec![
            ArchitectureStep { step: 1, title: "Ingest", description: "Accept the message" },
            ArchitectureStep { step: 2, title: "Deliver", description: "Hand it off" },
        ],
    });
    a2.trainer_notes = Some(TrainerNotes {
        talking_points: vec!["Walk through the flow diagram"],
        real_examples: vec!["A relay misconfigured at a client site"],
        questions_to_ask: vec!["Where could this pipeline stall?"],
    });

    let b1 = lesson("b1", "Third Lesson", "b1");

    Catalog {
        title: "Test Course",
        subtitle: "Fixture",
        certification_code: "TST-1",
        trainer: TrainerInfo { name: "Test Trainer", title: "Instructor", linkedin: None },
        what_you_will_learn: vec!["Things"],
        prerequisites: vec![],
        modules: vec![
            Module {
                id: "mod-alpha",
                title: "Alpha",
                slug: "alpha",
                description: "First module.",
                icon: "Map",
                duration: "20 mins",
                lessons: vec![a1, a2],
            },
            Module {
                id: "mod-beta",
                title: "Beta",
                slug: "beta",
                description: "Second module.",
                icon: "Mail",
                duration: "10 mins",
                lessons: vec![b1],
            },
        ],
    }
}

/// Creates a test App over the fixture catalog with a throwaway state dir.
///
/// The temp dir is intentionally leaked for the life of the test process;
/// nothing is written to it unless the test saves.
pub fn test_app() -> App {
    let dir = tempfile::TempDir::new().expect("temp state dir");
    App::new(test_catalog(), dir.keep())
}
