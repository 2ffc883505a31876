//! Story data shared across test suites.

/// A clean classic story: four arcs, four choices, five paragraphs, no
/// broken links.
pub const CLASSIC_STORY: &str = r#"{
    "intro": {
        "title": "Introduction",
        "story": ["Welcome to the story.", "Choose wisely."],
        "options": [
            {"text": "Go left", "arc": "chapter1"},
            {"text": "Go right", "arc": "chapter2"}
        ]
    },
    "chapter1": {
        "title": "Chapter 1",
        "story": ["Chapter 1 content"],
        "options": [{"text": "Finish", "arc": "ending"}]
    },
    "chapter2": {
        "title": "Chapter 2",
        "story": ["Chapter 2 content"],
        "options": [{"text": "Start over", "arc": "intro"}]
    },
    "ending": {
        "title": "The End",
        "story": ["Goodbye."],
        "options": []
    }
}"#;

/// Two gopher storylines.
///
/// Blue has four arcs, 17 words, five choices and one broken link
/// (`forest` → `lake`). Cyan has two arcs, six words and one choice.
pub const GOPHER_STORY: &str = r#"{
    "blue": {
        "intro": {
            "title": "Blue Begins",
            "story": ["Blue wakes up early.", "The sun is bright."],
            "options": [
                {"text": "Into the woods", "arc": "forest"},
                {"text": "Down to the water", "arc": "river"}
            ]
        },
        "forest": {
            "title": "The Forest",
            "story": ["Trees tower overhead."],
            "options": [
                {"text": "Head home", "arc": "ending"},
                {"text": "Look for the lake", "arc": "lake"}
            ]
        },
        "river": {
            "title": "The River",
            "story": ["Water rushes past."],
            "options": [{"text": "Head home", "arc": "ending"}]
        },
        "ending": {
            "title": "Home Again",
            "story": ["Blue sleeps soundly."],
            "options": []
        }
    },
    "cyan": {
        "intro": {
            "title": "Cyan Begins",
            "story": ["Cyan reads a book."],
            "options": [{"text": "Rest", "arc": "home"}]
        },
        "home": {
            "title": "Cyan Rests",
            "story": ["The end."],
            "options": []
        }
    }
}"#;
