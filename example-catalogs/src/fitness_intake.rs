//! A gym intake questionnaire, showing that tracks generalize beyond two.

use survey_flow::{Catalog, Question, QuestionKind};

pub const TRAINING: &str = "Personal training";
pub const CLASSES: &str = "Group classes";
pub const NUTRITION: &str = "Nutrition coaching";

/// Build the fitness-intake catalog.
pub fn fitness_intake() -> Catalog {
    Catalog::new(vec![
        Question::new(1, "What brings you in?", {
            QuestionKind::single_choice([TRAINING, CLASSES, NUTRITION])
        }),
        Question::new(2, "What are you training for?", {
            QuestionKind::single_select(["Strength", "Endurance", "Rehab", "General fitness"])
        })
        .on_track(TRAINING),
        Question::new(3, "Which class times work for you?", {
            QuestionKind::multi_select(["Early morning", "Lunchtime", "Evening", "Weekend"])
        })
        .on_track(CLASSES),
        Question::new(4, "Any dietary restrictions?", QuestionKind::free_text())
            .on_track(NUTRITION),
        Question::new(5, "How many days a week can you commit?", {
            QuestionKind::single_choice(["1-2", "3-4", "5+"])
        }),
    ])
    .expect("fitness-intake catalog is well formed")
}
