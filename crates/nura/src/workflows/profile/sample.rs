use super::{
    Career, Child, DailyRoutine, Family, Grandchild, Home, ImportantDate, Medication, Memory,
    MemoryTheme, PersonalDetails, Pet, Relation, Sibling, Spouse, UserProfile,
};

impl UserProfile {
    /// Profile served by the demo deployment.
    pub fn sample() -> Self {
        Self {
            personal: PersonalDetails {
                name: "Margaret".to_string(),
                nickname: "Maggie".to_string(),
                birth_date: "March 15, 1948".to_string(),
                birth_place: "Boston, Massachusetts".to_string(),
                current_age: 76,
                favorite_color: "Blue".to_string(),
                favorite_food: "Apple pie".to_string(),
                favorite_food_story:
                    "Your mother used to make it for you, and you continued the tradition."
                        .to_string(),
                favorite_song: "Moon River".to_string(),
                pet: Pet {
                    name: "Sunny".to_string(),
                    breed: "golden retriever".to_string(),
                },
            },
            family: Family {
                spouse: Spouse {
                    title: "husband".to_string(),
                    name: "Robert".to_string(),
                    nickname: "Bob".to_string(),
                    married_since: "June 1972".to_string(),
                    years_married: 50,
                    wedding_date: "June 22, 1972".to_string(),
                    wedding_location: "St. Mary's Church in Boston".to_string(),
                    first_dance: "Moon River".to_string(),
                },
                children: vec![
                    Child {
                        name: "Sarah".to_string(),
                        relation: Relation::Daughter,
                        born: 1975,
                        occupation: "teacher".to_string(),
                        children: vec!["Emma".to_string(), "Jack".to_string()],
                    },
                    Child {
                        name: "Michael".to_string(),
                        relation: Relation::Son,
                        born: 1978,
                        occupation: "engineer".to_string(),
                        children: vec!["Lily".to_string()],
                    },
                ],
                grandchildren: vec![
                    grandchild("Emma", 12, "Sarah"),
                    grandchild("Jack", 9, "Sarah"),
                    grandchild("Lily", 7, "Michael"),
                ],
                siblings: vec![
                    Sibling {
                        name: "Dorothy".to_string(),
                        relation: Relation::Sister,
                        lives_in: "Florida".to_string(),
                    },
                    Sibling {
                        name: "James".to_string(),
                        relation: Relation::Brother,
                        lives_in: "California".to_string(),
                    },
                ],
            },
            home: Home {
                address: "42 Maple Street".to_string(),
                city: "Cambridge".to_string(),
                moved_in: 1980,
                description:
                    "a white two-story house with a red door and a big oak tree in the front yard"
                        .to_string(),
            },
            career: Career {
                role: "librarian".to_string(),
                employer: "Cambridge Public Library".to_string(),
                years: 30,
                highlights:
                    "You loved helping people find books and organizing reading programs for children."
                        .to_string(),
            },
            important_dates: vec![
                date("March 15", "your birthday"),
                date("June 22", "your wedding anniversary with Bob"),
                date("December 3", "Sarah's birthday"),
                date("August 17", "Michael's birthday"),
            ],
            memories: vec![
                memory(
                    "First dance",
                    "You and Bob danced to 'Moon River' at your wedding",
                    MemoryTheme::Wedding,
                ),
                memory(
                    "Family vacation",
                    "Your family used to go to Cape Cod every summer! It's a wonderful beach destination. \
                     The whole family would swim, build sandcastles, and have clam chowder together.",
                    MemoryTheme::Vacation,
                ),
                memory(
                    "Garden",
                    "You love gardening! You have a beautiful rose garden in your backyard.",
                    MemoryTheme::Hobby,
                ),
                memory(
                    "Career",
                    "You worked as a librarian for 30 years at Cambridge Public Library",
                    MemoryTheme::Career,
                ),
            ],
            pastimes: vec![
                "reading".to_string(),
                "walking in the park".to_string(),
                "spending time with your grandchildren".to_string(),
            ],
            daily_routine: DailyRoutine {
                morning: "coffee with toast and the newspaper".to_string(),
                medication: Medication {
                    name: "blood pressure medicine".to_string(),
                    doses: vec![
                        "8 in the morning".to_string(),
                        "8 in the evening".to_string(),
                    ],
                },
                activities: vec![
                    "walking in the park".to_string(),
                    "reading".to_string(),
                    "gardening".to_string(),
                ],
            },
        }
    }
}

fn grandchild(name: &str, age: u8, parent: &str) -> Grandchild {
    Grandchild {
        name: name.to_string(),
        age,
        parent: parent.to_string(),
    }
}

fn date(date: &str, event: &str) -> ImportantDate {
    ImportantDate {
        date: date.to_string(),
        event: event.to_string(),
    }
}

fn memory(title: &str, description: &str, theme: MemoryTheme) -> Memory {
    Memory {
        title: title.to_string(),
        description: description.to_string(),
        theme,
    }
}
