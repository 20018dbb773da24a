use crate::{
    content::model::{Memory, Quote, TimelineEvent, Wish},
    foundation::core::{FrameIndex, FrameRange, Fps, PageCanvas},
    foundation::error::{KeepsakeError, KeepsakeResult},
    particles::field::ParticleField,
};

/// Which scroll region of the page a section is.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SectionKind {
    Hero,
    LoveLetter,
    Gallery,
    Timeline,
    Gift,
    Quotes,
    Wishes,
    Outro,
}

/// Per-kind content payload of a section.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum SectionContent {
    Hero {
        title: String,
        name: String,
        subtitle: String,
    },
    LoveLetter {
        heading: String,
        message: String,
    },
    Gallery {
        heading: String,
        intro: String,
        memories: Vec<Memory>,
    },
    Timeline {
        heading: String,
        intro: String,
        events: Vec<TimelineEvent>,
    },
    Gift {
        heading: String,
        intro: String,
        message: String,
    },
    Quotes {
        heading: String,
        quotes: Vec<Quote>,
    },
    Wishes {
        heading: String,
        wishes: Vec<Wish>,
    },
    Outro {
        heading: String,
        farewell: String,
        credit: String,
    },
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Hero { .. } => SectionKind::Hero,
            Self::LoveLetter { .. } => SectionKind::LoveLetter,
            Self::Gallery { .. } => SectionKind::Gallery,
            Self::Timeline { .. } => SectionKind::Timeline,
            Self::Gift { .. } => SectionKind::Gift,
            Self::Quotes { .. } => SectionKind::Quotes,
            Self::Wishes { .. } => SectionKind::Wishes,
            Self::Outro { .. } => SectionKind::Outro,
        }
    }

    fn validate(&self) -> KeepsakeResult<()> {
        let non_empty = |value: &str, field: &str| -> KeepsakeResult<()> {
            if value.trim().is_empty() {
                return Err(KeepsakeError::validation(format!(
                    "{field} must be non-empty"
                )));
            }
            Ok(())
        };

        match self {
            Self::Hero {
                title,
                name,
                subtitle,
            } => {
                non_empty(title, "hero title")?;
                non_empty(name, "hero name")?;
                non_empty(subtitle, "hero subtitle")
            }
            Self::LoveLetter { heading, message } => {
                non_empty(heading, "letter heading")?;
                non_empty(message, "letter message")
            }
            Self::Gallery {
                heading,
                intro,
                memories,
            } => {
                non_empty(heading, "gallery heading")?;
                non_empty(intro, "gallery intro")?;
                if memories.is_empty() {
                    return Err(KeepsakeError::validation("gallery must have memories"));
                }
                memories.iter().try_for_each(Memory::validate)
            }
            Self::Timeline {
                heading,
                intro,
                events,
            } => {
                non_empty(heading, "timeline heading")?;
                non_empty(intro, "timeline intro")?;
                if events.is_empty() {
                    return Err(KeepsakeError::validation("timeline must have events"));
                }
                events.iter().try_for_each(TimelineEvent::validate)
            }
            Self::Gift {
                heading,
                intro,
                message,
            } => {
                non_empty(heading, "gift heading")?;
                non_empty(intro, "gift intro")?;
                non_empty(message, "gift message")
            }
            Self::Quotes { heading, quotes } => {
                non_empty(heading, "quotes heading")?;
                if quotes.is_empty() {
                    return Err(KeepsakeError::validation("quotes section must have quotes"));
                }
                quotes.iter().try_for_each(Quote::validate)
            }
            Self::Wishes { heading, wishes } => {
                non_empty(heading, "wishes heading")?;
                if wishes.is_empty() {
                    return Err(KeepsakeError::validation("wishes section must have wishes"));
                }
                wishes.iter().try_for_each(Wish::validate)
            }
            Self::Outro {
                heading,
                farewell,
                credit,
            } => {
                non_empty(heading, "outro heading")?;
                non_empty(farewell, "outro farewell")?;
                non_empty(credit, "outro credit")
            }
        }
    }
}

/// One scroll region: content plus its decorative fields and timers.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub content: SectionContent,
    /// Decorative particle fields layered behind the content.
    #[serde(default)]
    pub fields: Vec<ParticleField>,
    /// Autoplay cadence in seconds for carousel content, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_s: Option<f64>,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.content.kind()
    }

    pub fn validate(&self) -> KeepsakeResult<()> {
        self.content.validate()?;
        for field in &self.fields {
            field.validate()?;
        }
        if let Some(interval) = self.autoplay_interval_s
            && !(interval.is_finite() && interval > 0.0)
        {
            return Err(KeepsakeError::validation(
                "section autoplay_interval_s must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// The complete tribute page model.
///
/// A tribute is pure data: built programmatically (see
/// [`crate::TributeBuilder`]), serializable via Serde, and consumed by the
/// evaluator ([`crate::Evaluator::eval_frame`]). Nothing in it mutates at
/// runtime; live UI state lives in [`crate::PageState`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Tribute {
    /// Animation frame rate.
    pub fps: Fps,
    /// Logical viewport dimensions.
    pub canvas: PageCanvas,
    /// Length of the ambient animation loop, in frames.
    pub duration: FrameIndex,
    /// Seed for unreplayed randomness (confetti jitter).
    pub seed: u64,
    /// Relative path to the looping background track.
    pub background_music: String,
    /// Per-section parallax factors, same length as `sections`.
    pub parallax: Vec<f64>,
    /// Sections in document order, top of page first.
    pub sections: Vec<Section>,
}

impl Tribute {
    /// Validate the model invariants and section contents.
    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(KeepsakeError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(KeepsakeError::validation("canvas width/height must be > 0"));
        }
        if self.duration.0 == 0 {
            return Err(KeepsakeError::validation("duration must be > 0 frames"));
        }
        if self.sections.is_empty() {
            return Err(KeepsakeError::validation("tribute must have sections"));
        }
        if self.parallax.len() != self.sections.len() {
            return Err(KeepsakeError::validation(format!(
                "parallax has {} factors for {} sections",
                self.parallax.len(),
                self.sections.len()
            )));
        }
        if self.parallax.iter().any(|f| !f.is_finite()) {
            return Err(KeepsakeError::validation("parallax factors must be finite"));
        }
        validate_rel_source(&self.background_music, "background_music")?;

        let mut seen = std::collections::BTreeSet::new();
        for section in &self.sections {
            section.validate()?;
            if !seen.insert(section.kind()) {
                return Err(KeepsakeError::validation(format!(
                    "duplicate section kind {:?}",
                    section.kind()
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a tribute from JSON.
    pub fn from_json(json: &str) -> KeepsakeResult<Self> {
        let tribute: Self = serde_json::from_str(json)
            .map_err(|e| KeepsakeError::serde(format!("parse tribute: {e}")))?;
        tribute.validate()?;
        Ok(tribute)
    }

    /// Load and validate a tribute from a JSON file.
    pub fn from_path(path: &std::path::Path) -> KeepsakeResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| KeepsakeError::serde(format!("read tribute '{}': {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Serialize the tribute as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> KeepsakeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| KeepsakeError::serde(format!("serialize tribute: {e}")))
    }

    /// The valid frame range of the ambient loop, `[0, duration)`.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration,
        }
    }

    /// Section index for a kind, if the page composes one.
    pub fn section_index(&self, kind: SectionKind) -> Option<usize> {
        self.sections.iter().position(|s| s.kind() == kind)
    }
}

fn validate_rel_source(source: &str, field: &str) -> KeepsakeResult<()> {
    if source.trim().is_empty() {
        return Err(KeepsakeError::validation(format!(
            "{field} must be non-empty"
        )));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(KeepsakeError::validation(format!(
            "{field} must be a relative path"
        )));
    }
    for part in s.split('/') {
        if part == ".." {
            return Err(KeepsakeError::validation(format!(
                "{field} must not contain '..'"
            )));
        }
    }
    Ok(())
}
