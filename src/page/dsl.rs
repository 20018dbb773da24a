//! Builder DSL for assembling a [`Tribute`] programmatically.

use crate::{
    content::builtin,
    foundation::core::{FrameIndex, Fps, PageCanvas},
    foundation::error::KeepsakeResult,
    page::model::{Section, SectionContent, Tribute},
    particles::field::{self, ParticleField},
    scroll::view::PARALLAX_FACTORS,
};

/// Fluent builder for a [`Tribute`].
#[derive(Clone, Debug)]
pub struct TributeBuilder {
    fps: Fps,
    canvas: PageCanvas,
    duration: FrameIndex,
    seed: u64,
    background_music: String,
    parallax: Vec<f64>,
    sections: Vec<Section>,
}

impl TributeBuilder {
    pub fn new(fps: Fps, canvas: PageCanvas, duration: FrameIndex) -> Self {
        Self {
            fps,
            canvas,
            duration,
            seed: 0,
            background_music: String::new(),
            parallax: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn background_music(mut self, source: impl Into<String>) -> Self {
        self.background_music = source.into();
        self
    }

    /// Append a section with an explicit parallax factor.
    pub fn section(mut self, section: SectionBuilder, parallax: f64) -> Self {
        self.sections.push(section.build());
        self.parallax.push(parallax);
        self
    }

    /// Validate and produce the tribute.
    pub fn build(self) -> KeepsakeResult<Tribute> {
        let tribute = Tribute {
            fps: self.fps,
            canvas: self.canvas,
            duration: self.duration,
            seed: self.seed,
            background_music: self.background_music,
            parallax: self.parallax,
            sections: self.sections,
        };
        tribute.validate()?;
        Ok(tribute)
    }
}

/// Fluent builder for a [`Section`].
#[derive(Clone, Debug)]
pub struct SectionBuilder {
    content: SectionContent,
    fields: Vec<ParticleField>,
    autoplay_interval_s: Option<f64>,
}

impl SectionBuilder {
    pub fn new(content: SectionContent) -> Self {
        Self {
            content,
            fields: Vec::new(),
            autoplay_interval_s: None,
        }
    }

    /// Layer a decorative particle field behind the content.
    pub fn field(mut self, field: ParticleField) -> Self {
        self.fields.push(field);
        self
    }

    /// Autoplay cadence in seconds for carousel content.
    pub fn autoplay(mut self, interval_s: f64) -> Self {
        self.autoplay_interval_s = Some(interval_s);
        self
    }

    pub fn build(self) -> Section {
        Section {
            content: self.content,
            fields: self.fields,
            autoplay_interval_s: self.autoplay_interval_s,
        }
    }
}

impl Tribute {
    /// The compiled-in birthday page: eight sections in document order,
    /// a sixty second ambient loop at 30fps.
    pub fn builtin() -> Self {
        let fps = Fps { num: 30, den: 1 };
        let duration = FrameIndex(fps.secs_to_frames_floor(60.0));
        let p = PARALLAX_FACTORS;

        // build() only fails on invariant violations; the builtin content
        // is covered by tests, so an error here is a bug in this file.
        #[allow(clippy::expect_used)]
        TributeBuilder::new(
            fps,
            PageCanvas {
                width: 1440,
                height: 900,
            },
            duration,
        )
            .seed(2025)
            .background_music(builtin::BACKGROUND_MUSIC)
            .section(
                SectionBuilder::new(SectionContent::Hero {
                    title: builtin::HERO_TITLE.into(),
                    name: builtin::HERO_NAME.into(),
                    subtitle: builtin::HERO_SUBTITLE.into(),
                })
                .field(field::hero_drift())
                .field(field::hero_hearts())
                .field(field::hero_stars()),
                p[0],
            )
            .section(
                SectionBuilder::new(SectionContent::LoveLetter {
                    heading: builtin::LETTER_HEADING.into(),
                    message: builtin::LETTER_MESSAGE.into(),
                }),
                p[1],
            )
            .section(
                SectionBuilder::new(SectionContent::Gallery {
                    heading: builtin::GALLERY_HEADING.into(),
                    intro: builtin::GALLERY_INTRO.into(),
                    memories: builtin::memories(),
                })
                .field(field::gallery_orbs())
                .autoplay(5.0),
                p[2],
            )
            .section(
                SectionBuilder::new(SectionContent::Timeline {
                    heading: builtin::TIMELINE_HEADING.into(),
                    intro: builtin::TIMELINE_INTRO.into(),
                    events: builtin::timeline_events(),
                })
                .field(field::timeline_hearts()),
                p[3],
            )
            .section(
                SectionBuilder::new(SectionContent::Gift {
                    heading: builtin::GIFT_HEADING.into(),
                    intro: builtin::GIFT_INTRO.into(),
                    message: builtin::GIFT_MESSAGE.into(),
                })
                .field(field::gift_stars()),
                p[4],
            )
            .section(
                SectionBuilder::new(SectionContent::Quotes {
                    heading: builtin::QUOTES_HEADING.into(),
                    quotes: builtin::quotes(),
                })
                .autoplay(8.0),
                p[5],
            )
            .section(
                SectionBuilder::new(SectionContent::Wishes {
                    heading: builtin::WISHES_HEADING.into(),
                    wishes: builtin::wishes(),
                })
                .autoplay(5.0),
                p[6],
            )
            .section(
                SectionBuilder::new(SectionContent::Outro {
                    heading: builtin::OUTRO_HEADING.into(),
                    farewell: builtin::OUTRO_FAREWELL.into(),
                    credit: builtin::OUTRO_CREDIT.into(),
                }),
                p[7],
            )
            .build()
            .expect("builtin tribute must validate")
    }
}
