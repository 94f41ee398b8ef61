/// Demo facts with fixed 2025 timestamps, in insertion order.
pub const SEED_FACTS: [(&str, &str); 10] = [
    (
        "The Eiffel Tower can be 15 cm taller during the summer.",
        "2025-03-14T09:12:00Z",
    ),
    (
        "Bananas are berries, but strawberries aren't.",
        "2025-07-02T16:45:00Z",
    ),
    ("Honey never spoils.", "2025-01-21T08:30:00Z"),
    ("Octopuses have three hearts.", "2025-11-05T19:05:00Z"),
    (
        "A group of flamingos is called a 'flamboyance'.",
        "2025-05-18T12:00:00Z",
    ),
    (
        "There are more stars in the universe than grains of sand on Earth.",
        "2025-09-27T21:40:00Z",
    ),
    ("Wombat poop is cube-shaped.", "2025-02-09T14:15:00Z"),
    (
        "Humans share about 60% of their DNA with bananas.",
        "2025-12-11T10:20:00Z",
    ),
    (
        "The shortest war in history lasted 38 minutes.",
        "2025-06-30T07:55:00Z",
    ),
    (
        "A day on Venus is longer than a year on Venus.",
        "2025-08-16T18:25:00Z",
    ),
];
