//! Keyword-based task breakdown.
//!
//! Splits a task into a checklist of subtasks using fixed templates
//! keyed by domain keywords. The first keyword hit (in table order)
//! picks the template; otherwise a write/create fallback or a generic
//! three-step plan applies.

use serde::{Deserialize, Serialize};

/// Minutes budgeted per subtask in the overall estimate.
const MINUTES_PER_SUBTASK: u32 = 30;

/// Subtask templates in fixed lookup order; first keyword hit wins.
const TEMPLATES: &[(&str, &[&str])] = &[
    (
        "project",
        &[
            "Research and planning",
            "Design phase",
            "Implementation",
            "Testing",
            "Documentation",
        ],
    ),
    (
        "study",
        &[
            "Read materials",
            "Take notes",
            "Create summary",
            "Practice problems",
            "Review",
        ],
    ),
    (
        "presentation",
        &[
            "Research topic",
            "Create outline",
            "Design slides",
            "Practice delivery",
            "Prepare Q&A",
        ],
    ),
    (
        "report",
        &[
            "Gather data",
            "Outline structure",
            "Write draft",
            "Review and edit",
            "Final formatting",
        ],
    ),
    (
        "exam",
        &[
            "Review syllabus",
            "Study notes",
            "Practice questions",
            "Create cheat sheet",
            "Mock test",
        ],
    ),
];

const WRITING_FALLBACK: &[&str] = &[
    "Research and gather information",
    "Create outline or plan",
    "Complete first draft",
    "Review and revise",
];

const GENERIC_FALLBACK: &[&str] = &[
    "Plan the approach",
    "Execute main tasks",
    "Review and finalize",
];

/// A single step in a breakdown plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subtask {
    /// Step title.
    pub title: String,
    /// Always false for a fresh plan.
    pub completed: bool,
}

/// A proposed decomposition of one task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakdownPlan {
    /// Ordered checklist steps.
    pub subtasks: Vec<Subtask>,
    /// Total estimate: 30 minutes per step.
    pub estimated_minutes: u32,
    /// One-line summary of the plan.
    pub suggestion: String,
}

/// Break a task into manageable subtasks.
///
/// Keywords are matched against the lowercased title and description
/// together.
pub fn suggest_breakdown(title: &str, description: Option<&str>) -> BreakdownPlan {
    let combined = format!(
        "{} {}",
        title.to_lowercase(),
        description.unwrap_or("").to_lowercase()
    );

    let steps = TEMPLATES
        .iter()
        .find(|(keyword, _)| combined.contains(keyword))
        .map(|(_, steps)| *steps)
        .unwrap_or_else(|| {
            if combined.contains("write") || combined.contains("create") {
                WRITING_FALLBACK
            } else {
                GENERIC_FALLBACK
            }
        });

    let subtasks: Vec<Subtask> = steps
        .iter()
        .map(|step| Subtask {
            title: step.to_string(),
            completed: false,
        })
        .collect();

    BreakdownPlan {
        estimated_minutes: subtasks.len() as u32 * MINUTES_PER_SUBTASK,
        suggestion: format!(
            "This task can be broken down into {} manageable steps.",
            subtasks.len()
        ),
        subtasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_keyword_picks_project_template() {
        let plan = suggest_breakdown("Ship the onboarding project", None);
        assert_eq!(plan.subtasks.len(), 5);
        assert_eq!(plan.subtasks[0].title, "Research and planning");
        assert_eq!(plan.estimated_minutes, 150);
        assert!(plan.subtasks.iter().all(|s| !s.completed));
    }

    #[test]
    fn first_template_hit_wins_in_table_order() {
        // Both "study" and "exam" appear; "study" comes first in the table.
        let plan = suggest_breakdown("study for the exam", None);
        assert_eq!(plan.subtasks[0].title, "Read materials");
    }

    #[test]
    fn description_participates_in_matching() {
        let plan = suggest_breakdown("Quarterly numbers", Some("compile the report"));
        assert_eq!(plan.subtasks[0].title, "Gather data");
    }

    #[test]
    fn write_fallback_has_four_steps() {
        let plan = suggest_breakdown("write thank-you notes", None);
        assert_eq!(plan.subtasks.len(), 4);
        assert_eq!(plan.estimated_minutes, 120);
        assert_eq!(
            plan.suggestion,
            "This task can be broken down into 4 manageable steps."
        );
    }

    #[test]
    fn generic_fallback_has_three_steps() {
        let plan = suggest_breakdown("clean the garage", None);
        assert_eq!(plan.subtasks.len(), 3);
        assert_eq!(plan.subtasks[0].title, "Plan the approach");
        assert_eq!(plan.estimated_minutes, 90);
    }
}
