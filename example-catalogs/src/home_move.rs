//! A real-estate lead-qualification survey with a buyer and a seller track.

use survey_flow::{Catalog, FreeTextQuestion, Question, QuestionId, QuestionKind};

pub const INTENT: QuestionId = QuestionId(1);
pub const PRICE_RANGE: QuestionId = QuestionId(2);
pub const FINANCING: QuestionId = QuestionId(3);
pub const FEATURES: QuestionId = QuestionId(4);
pub const PROPERTY_TYPE: QuestionId = QuestionId(5);
pub const ASKING_PRICE: QuestionId = QuestionId(6);
pub const REASON: QuestionId = QuestionId(7);
pub const TIMELINE: QuestionId = QuestionId(8);
pub const REFERRAL: QuestionId = QuestionId(9);

pub const BUYING: &str = "Buying";
pub const SELLING: &str = "Selling";

/// Build the home-move catalog.
pub fn home_move() -> Catalog {
    Catalog::new(vec![
        Question::new(INTENT, "Are you looking to buy or sell?", {
            QuestionKind::single_choice([BUYING, SELLING])
        }),
        Question::new(PRICE_RANGE, "What is your price range?", {
            QuestionKind::single_select(["Under 300k", "300k-600k", "600k-1M", "Over 1M"])
        })
        .on_track(BUYING),
        Question::new(FINANCING, "How will you finance the purchase?", {
            QuestionKind::single_choice(["Cash", "Mortgage", "Not sure yet"])
        })
        .on_track(BUYING),
        Question::new(FEATURES, "Which features matter most to you?", {
            QuestionKind::multi_select([
                "Garage",
                "Garden",
                "Pool",
                "Home office",
                "Walkable neighborhood",
            ])
        })
        .with_help("Pick as many as you like.")
        .on_track(BUYING),
        Question::new(PROPERTY_TYPE, "What type of property are you selling?", {
            QuestionKind::single_select(["House", "Condo", "Townhouse", "Land"])
        })
        .on_track(SELLING),
        Question::new(ASKING_PRICE, "What do you hope to sell for?", {
            QuestionKind::FreeText(FreeTextQuestion::with_placeholder("e.g. 450,000"))
        })
        .on_track(SELLING),
        Question::new(REASON, "Why are you selling?", QuestionKind::free_text())
            .with_help("A sentence or two is plenty.")
            .on_track(SELLING),
        Question::new(TIMELINE, "How soon do you want to move?", {
            QuestionKind::single_choice(["0-3 months", "3-6 months", "6+ months"])
        }),
        Question::new(REFERRAL, "How did you hear about us?", {
            QuestionKind::single_select(["Search", "Social media", "A friend", "Other"])
        }),
    ])
    .expect("home-move catalog is well formed")
}
