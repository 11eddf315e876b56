use chrono::{Datelike, NaiveDate};

pub const AFFIRMATIONS: [&str; 6] = [
    "You are stronger than you think.",
    "Today is a fresh start.",
    "You deserve kindness, especially from yourself.",
    "Progress, not perfection.",
    "Your feelings are valid.",
    "You are growing every day.",
];

/// Same text all day, rotating through the list as the year goes on.
pub fn affirmation_for(date: NaiveDate) -> &'static str {
    AFFIRMATIONS[date.ordinal0() as usize % AFFIRMATIONS.len()]
}
