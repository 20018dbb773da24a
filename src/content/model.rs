use crate::foundation::error::{KeepsakeError, KeepsakeResult};

/// Accent color tag carried by quotes and timeline events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Pink,
    Purple,
    Rose,
    Fuchsia,
}

/// Icon tag carried by timeline events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTag {
    Heart,
    Star,
    Calendar,
    Phone,
}

/// Category tag carried by quotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteKind {
    Quote,
    Lyric,
    Poem,
}

impl QuoteKind {
    /// Display badge shown next to a quote.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Lyric => "Lirik Lagu",
            Self::Poem => "Puisi",
            Self::Quote => "Quote",
        }
    }
}

/// One gallery memory: a photo with its caption and story.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Memory {
    /// Relative path to the photo.
    pub image: String,
    pub caption: String,
    pub date: String,
    pub location: String,
    pub note: String,
}

/// One relationship milestone on the timeline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub icon: IconTag,
    pub color: ColorTag,
    /// Relative path to the event photo.
    pub image: String,
}

/// A quote, lyric, or poem shown in the quotes carousel.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub kind: QuoteKind,
    pub color: ColorTag,
}

/// A birthday wish from a friend.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Wish {
    pub name: String,
    pub message: String,
    pub relation: String,
}

fn non_empty(value: &str, field: &str) -> KeepsakeResult<()> {
    if value.trim().is_empty() {
        return Err(KeepsakeError::validation(format!(
            "{field} must be non-empty"
        )));
    }
    Ok(())
}

impl Memory {
    pub fn validate(&self) -> KeepsakeResult<()> {
        non_empty(&self.image, "memory image")?;
        non_empty(&self.caption, "memory caption")?;
        non_empty(&self.date, "memory date")?;
        non_empty(&self.location, "memory location")?;
        non_empty(&self.note, "memory note")
    }
}

impl TimelineEvent {
    pub fn validate(&self) -> KeepsakeResult<()> {
        non_empty(&self.date, "timeline event date")?;
        non_empty(&self.title, "timeline event title")?;
        non_empty(&self.description, "timeline event description")?;
        non_empty(&self.location, "timeline event location")?;
        non_empty(&self.image, "timeline event image")
    }
}

impl Quote {
    pub fn validate(&self) -> KeepsakeResult<()> {
        non_empty(&self.text, "quote text")?;
        non_empty(&self.author, "quote author")
    }
}

impl Wish {
    pub fn validate(&self) -> KeepsakeResult<()> {
        non_empty(&self.name, "wish name")?;
        non_empty(&self.message, "wish message")?;
        non_empty(&self.relation, "wish relation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_display_string_is_rejected() {
        let wish = Wish {
            name: "Andi".into(),
            message: "  ".into(),
            relation: "Teman".into(),
        };
        assert!(wish.validate().is_err());
    }

    #[test]
    fn quote_kind_badges() {
        assert_eq!(QuoteKind::Lyric.badge(), "Lirik Lagu");
        assert_eq!(QuoteKind::Poem.badge(), "Puisi");
        assert_eq!(QuoteKind::Quote.badge(), "Quote");
    }
}
