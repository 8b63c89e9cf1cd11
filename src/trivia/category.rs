//! Fixed table of Open Trivia DB categories.

use std::fmt;

/// A question category known to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    /// Human-readable name shown to the user and accepted on input.
    pub name: &'static str,
    /// Provider-specific identifier sent on the wire.
    pub id: u32,
}

/// All categories the provider serves, in provider id order.
pub const CATEGORIES: &[Category] = &[
    Category { name: "General Knowledge", id: 9 },
    Category { name: "Books", id: 10 },
    Category { name: "Film", id: 11 },
    Category { name: "Music", id: 12 },
    Category { name: "Musicals & Theatres", id: 13 },
    Category { name: "Television", id: 14 },
    Category { name: "Video Games", id: 15 },
    Category { name: "Board Games", id: 16 },
    Category { name: "Science & Nature", id: 17 },
    Category { name: "Computers", id: 18 },
    Category { name: "Mathematics", id: 19 },
    Category { name: "Mythology", id: 20 },
    Category { name: "Sports", id: 21 },
    Category { name: "Geography", id: 22 },
    Category { name: "History", id: 23 },
    Category { name: "Politics", id: 24 },
    Category { name: "Art", id: 25 },
    Category { name: "Celebrities", id: 26 },
    Category { name: "Animals", id: 27 },
    Category { name: "Vehicles", id: 28 },
    Category { name: "Comics", id: 29 },
    Category { name: "Gadgets", id: 30 },
    Category { name: "Anime & Manga", id: 31 },
    Category { name: "Cartoon & Animations", id: 32 },
];

impl Category {
    /// Look up a category by name, ignoring case and surrounding whitespace.
    pub fn lookup(name: &str) -> Option<Category> {
        let name = name.trim();
        CATEGORIES
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
