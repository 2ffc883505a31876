//! A single narrative arc and its outgoing choices.

use serde::{Deserialize, Deserializer, Serialize};

/// A choice presented at the end of an arc, leading to another arc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcOption {
    /// Text shown to the reader.
    pub text: String,
    /// Name of the arc this choice leads to. Not guaranteed to exist.
    #[serde(rename = "arc")]
    pub target: String,
}

/// One named narrative unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryArc {
    /// Display title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Text blocks in reading order.
    #[serde(rename = "story", default, deserialize_with = "null_as_default")]
    pub paragraphs: Vec<String>,
    /// Choices in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<ArcOption>,
    /// Illustration, derived from the arc's identity at load time.
    #[serde(skip_deserializing)]
    pub image: String,
}

/// Reads an explicit `null` as the field's default, as Go-encoded story
/// data writes empty slices that way.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl StoryArc {
    /// Whether this arc has a title the classic resolver will serve.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// An arc without choices ends the storyline.
    #[must_use]
    pub fn is_ending(&self) -> bool {
        self.options.is_empty()
    }

    /// Whitespace-separated tokens across all paragraphs.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|paragraph| paragraph.split_whitespace().count())
            .sum()
    }

    /// Iterates the target arc names of every choice, in display order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.target.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_image_in_source() {
        // Arrange
        let json = r#"{
            "title": "Denver",
            "story": ["Snow everywhere."],
            "options": [{"text": "Go home", "arc": "home"}],
            "image": "evil.png"
        }"#;

        // Act
        let arc: StoryArc = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(arc.title, "Denver");
        assert_eq!(arc.paragraphs, vec!["Snow everywhere.".to_owned()]);
        assert_eq!(arc.options[0].target, "home");
        assert!(arc.image.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let arc: StoryArc = serde_json::from_str("{}").unwrap();

        assert!(!arc.has_title());
        assert!(arc.paragraphs.is_empty());
        assert!(arc.is_ending());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let arc: StoryArc =
            serde_json::from_str(r#"{"title": null, "story": null, "options": null}"#).unwrap();

        assert!(!arc.has_title());
        assert!(arc.paragraphs.is_empty());
        assert!(arc.is_ending());
    }

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        let arc = StoryArc {
            paragraphs: vec!["one two\tthree".to_owned(), "  four\nfive  ".to_owned()],
            ..StoryArc::default()
        };

        assert_eq!(arc.word_count(), 5);
    }
}
