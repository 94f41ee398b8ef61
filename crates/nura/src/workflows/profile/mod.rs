//! Personal fact table the companion answers from.
//!
//! The profile is plain immutable data: it is built once at startup (see
//! [`UserProfile::sample`]) and shared by reference with every workflow that
//! renders text about the user.

mod sample;

use serde::{Deserialize, Serialize};

/// Everything the companion knows about the person it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub personal: PersonalDetails,
    pub family: Family,
    pub home: Home,
    pub career: Career,
    pub important_dates: Vec<ImportantDate>,
    pub memories: Vec<Memory>,
    /// Pastimes mentioned after the hobby memories ("reading", ...).
    pub pastimes: Vec<String>,
    pub daily_routine: DailyRoutine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub name: String,
    pub nickname: String,
    pub birth_date: String,
    pub birth_place: String,
    pub current_age: u8,
    pub favorite_color: String,
    pub favorite_food: String,
    /// Sentence about where the favourite food comes from.
    pub favorite_food_story: String,
    pub favorite_song: String,
    pub pet: Pet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub name: String,
    pub breed: String,
}

impl Pet {
    pub fn describe(&self) -> String {
        format!("a {} named {}", self.breed, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub spouse: Spouse,
    pub children: Vec<Child>,
    pub grandchildren: Vec<Grandchild>,
    pub siblings: Vec<Sibling>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spouse {
    /// How the user refers to their partner ("husband", "wife", ...).
    pub title: String,
    pub name: String,
    pub nickname: String,
    pub married_since: String,
    pub years_married: u8,
    pub wedding_date: String,
    pub wedding_location: String,
    pub first_dance: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Daughter,
    Son,
    Sister,
    Brother,
}

impl Relation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daughter => "daughter",
            Self::Son => "son",
            Self::Sister => "sister",
            Self::Brother => "brother",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub name: String,
    pub relation: Relation,
    pub born: u16,
    pub occupation: String,
    pub children: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grandchild {
    pub name: String,
    pub age: u8,
    pub parent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sibling {
    pub name: String,
    pub relation: Relation,
    pub lives_in: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Home {
    pub address: String,
    pub city: String,
    pub moved_in: u16,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    pub role: String,
    pub employer: String,
    pub years: u8,
    pub highlights: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantDate {
    pub date: String,
    pub event: String,
}

/// Theme a memory belongs to, so responders can pick memories without
/// matching on titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryTheme {
    Wedding,
    Vacation,
    Hobby,
    Career,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub title: String,
    pub description: String,
    pub theme: MemoryTheme,
}

impl UserProfile {
    pub fn memories_about(&self, theme: MemoryTheme) -> impl Iterator<Item = &Memory> {
        self.memories
            .iter()
            .filter(move |memory| memory.theme == theme)
    }

    /// City part of the birth place ("Boston" for "Boston, Massachusetts").
    pub fn home_town(&self) -> &str {
        self.personal
            .birth_place
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRoutine {
    pub morning: String,
    pub medication: Medication,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    /// One entry per dose, in the order they are taken.
    pub doses: Vec<String>,
}

impl Medication {
    /// "once a day", "twice a day", then "3 times a day" and up.
    pub fn frequency(&self) -> String {
        match self.doses.len() {
            1 => "once a day".to_string(),
            2 => "twice a day".to_string(),
            count => format!("{count} times a day"),
        }
    }
}

/// Spells out small counts the way a caregiver would say them.
pub fn count_word(count: usize) -> String {
    const WORDS: [&str; 11] = [
        "no", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS
        .get(count)
        .map(|word| word.to_string())
        .unwrap_or_else(|| count.to_string())
}

/// Joins names as "A", "A and B", or "A, B, and C".
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [rest @ .., last] => {
            let head = rest
                .iter()
                .map(|name| name.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head}, and {}", last.as_ref())
        }
    }
}
