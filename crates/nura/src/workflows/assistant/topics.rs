use serde::{Deserialize, Serialize};

use crate::workflows::profile::{count_word, join_names, MemoryTheme, UserProfile};

/// Category attached to every assistant answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerCategory {
    Family,
    Personal,
    Home,
    Career,
    Hobbies,
    Memories,
    Health,
    General,
}

impl AnswerCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Personal => "personal",
            Self::Home => "home",
            Self::Career => "career",
            Self::Hobbies => "hobbies",
            Self::Memories => "memories",
            Self::Health => "health",
            Self::General => "general",
        }
    }
}

/// Topic a rule answers; each topic renders its answer from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Grandchildren,
    Spouse,
    Children,
    Siblings,
    Identity,
    Birthday,
    FavoriteColor,
    FavoriteFood,
    Pet,
    Music,
    Home,
    Career,
    Hobbies,
    Vacation,
    Wedding,
    Medication,
    ImportantDates,
    Routine,
}

impl Topic {
    pub const fn category(self) -> AnswerCategory {
        match self {
            Self::Grandchildren | Self::Spouse | Self::Children | Self::Siblings => {
                AnswerCategory::Family
            }
            Self::Identity
            | Self::Birthday
            | Self::FavoriteColor
            | Self::FavoriteFood
            | Self::Pet
            | Self::Music
            | Self::ImportantDates => AnswerCategory::Personal,
            Self::Home => AnswerCategory::Home,
            Self::Career => AnswerCategory::Career,
            Self::Hobbies => AnswerCategory::Hobbies,
            Self::Vacation | Self::Wedding => AnswerCategory::Memories,
            Self::Medication | Self::Routine => AnswerCategory::Health,
        }
    }

    pub fn render(self, profile: &UserProfile) -> String {
        let personal = &profile.personal;
        let family = &profile.family;
        let spouse = &family.spouse;

        match self {
            Self::Spouse => format!(
                "Your {}'s name is {}, but you call him {}. You got married in {} at {}. \
                 You've been happily married for over {} years!",
                spouse.title,
                spouse.name,
                spouse.nickname,
                spouse.married_since,
                spouse.wedding_location,
                spouse.years_married
            ),
            Self::Children => render_children(profile),
            Self::Grandchildren => render_grandchildren(profile),
            Self::Siblings => {
                let siblings = family
                    .siblings
                    .iter()
                    .map(|sibling| {
                        format!(
                            "a {} named {} who lives in {}",
                            sibling.relation.label(),
                            sibling.name,
                            sibling.lives_in
                        )
                    })
                    .collect::<Vec<_>>();
                format!(
                    "You have {}. You grew up together in {}.",
                    join_names(&siblings),
                    profile.home_town()
                )
            }
            Self::Identity => format!(
                "Your name is {}, but your loved ones call you {}. You were born on {} in {}.",
                personal.name, personal.nickname, personal.birth_date, personal.birth_place
            ),
            Self::Birthday => format!(
                "You were born on {} in {}. You are {} years old.",
                personal.birth_date, personal.birth_place, personal.current_age
            ),
            Self::FavoriteColor => format!(
                "Your favorite color is {}. You've always loved wearing {} clothes!",
                personal.favorite_color,
                personal.favorite_color.to_lowercase()
            ),
            Self::FavoriteFood => format!(
                "Your favorite food is {}. {}",
                personal.favorite_food, personal.favorite_food_story
            ),
            Self::Pet => format!(
                "You have {}. {} loves going on walks with you and playing in the backyard.",
                personal.pet.describe(),
                personal.pet.name
            ),
            Self::Music => {
                let mut answer = format!("Your favorite song is \"{}\".", personal.favorite_song);
                if spouse.first_dance == personal.favorite_song {
                    answer.push_str(&format!(
                        " It was the song you and {} danced to at your wedding.",
                        spouse.nickname
                    ));
                }
                answer
            }
            Self::Home => {
                let home = &profile.home;
                format!(
                    "You live at {} in {}. It's {}. You've lived there since {}.",
                    home.address, home.city, home.description, home.moved_in
                )
            }
            Self::Career => {
                let career = &profile.career;
                format!(
                    "You worked as {} {} for {} years at {}. {}",
                    article(&career.role),
                    career.role,
                    career.years,
                    career.employer,
                    career.highlights
                )
            }
            Self::Hobbies => {
                let mut answer = sentences(profile, MemoryTheme::Hobby);
                if !profile.pastimes.is_empty() {
                    if !answer.is_empty() {
                        answer.push(' ');
                    }
                    answer.push_str(&format!(
                        "You also enjoy {}.",
                        join_names(&profile.pastimes)
                    ));
                }
                answer
            }
            Self::Vacation => {
                let answer = sentences(profile, MemoryTheme::Vacation);
                if answer.is_empty() {
                    "Your family has shared many wonderful trips together.".to_string()
                } else {
                    answer
                }
            }
            Self::Wedding => format!(
                "You married {} on {} at {}. Your first dance was to \"{}.\"",
                spouse.nickname, spouse.wedding_date, spouse.wedding_location, spouse.first_dance
            ),
            Self::Medication => {
                let medication = &profile.daily_routine.medication;
                format!(
                    "You take {} {} - at {}. It's important to take it with water.",
                    medication.name,
                    medication.frequency(),
                    join_names(&medication.doses)
                )
            }
            Self::ImportantDates => {
                let dates = profile
                    .important_dates
                    .iter()
                    .map(|date| format!("{} is {}", date.date, date.event))
                    .collect::<Vec<_>>();
                if dates.is_empty() {
                    "You haven't saved any important dates yet.".to_string()
                } else {
                    format!("Here are your important dates: {}.", join_names(&dates))
                }
            }
            Self::Routine => {
                let routine = &profile.daily_routine;
                let mut answer = format!("Your mornings start with {}.", routine.morning);
                if !routine.activities.is_empty() {
                    answer.push_str(&format!(
                        " During the day you enjoy {}.",
                        join_names(&routine.activities)
                    ));
                }
                answer
            }
        }
    }
}

/// Answer returned when no rule matches the question.
pub fn general_summary(profile: &UserProfile) -> String {
    let personal = &profile.personal;
    let family = &profile.family;
    let children = family
        .children
        .iter()
        .map(|child| child.name.as_str())
        .collect::<Vec<_>>();

    format!(
        "I'd be happy to help you remember! You are {} ({}), living at {} in {} with your {} {}. \
         You have {} children, {}, and {} grandchildren. \
         Is there something specific you'd like to know about?",
        personal.name,
        personal.nickname,
        profile.home.address,
        profile.home.city,
        family.spouse.title,
        family.spouse.nickname,
        count_word(children.len()),
        join_names(&children),
        count_word(family.grandchildren.len()),
    )
}

fn render_children(profile: &UserProfile) -> String {
    let children = &profile.family.children;
    let described = children
        .iter()
        .map(|child| {
            format!(
                "{} (your {}, born in {}) who is {} {}",
                child.name,
                child.relation.label(),
                child.born,
                article(&child.occupation),
                child.occupation
            )
        })
        .collect::<Vec<_>>();

    let mut answer = format!(
        "You have {} wonderful children: {}.",
        count_word(children.len()),
        join_names(&described)
    );

    for child in children.iter().filter(|child| !child.children.is_empty()) {
        let noun = if child.children.len() == 1 {
            "child"
        } else {
            "children"
        };
        answer.push_str(&format!(
            " {} has {} {}, {}.",
            child.name,
            count_word(child.children.len()),
            noun,
            join_names(&child.children)
        ));
    }

    answer
}

fn render_grandchildren(profile: &UserProfile) -> String {
    let family = &profile.family;
    let mut answer = format!(
        "You have {} beautiful grandchildren.",
        count_word(family.grandchildren.len())
    );

    for child in &family.children {
        let group = family
            .grandchildren
            .iter()
            .filter(|grandchild| grandchild.parent == child.name)
            .map(|grandchild| format!("{} ({} years old)", grandchild.name, grandchild.age))
            .collect::<Vec<_>>();

        match group.len() {
            0 => {}
            1 => answer.push_str(&format!(" {} is {}'s child.", group[0], child.name)),
            _ => answer.push_str(&format!(
                " {} are {}'s children.",
                join_names(&group),
                child.name
            )),
        }
    }

    answer.push_str(" They all love visiting you!");
    answer
}

fn sentences(profile: &UserProfile, theme: MemoryTheme) -> String {
    profile
        .memories_about(theme)
        .map(|memory| {
            let description = memory.description.trim();
            if description.ends_with(['.', '!', '?']) {
                description.to_string()
            } else {
                format!("{description}.")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn article(noun: &str) -> &'static str {
    match noun.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
