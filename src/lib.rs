//! Keepsake is a programmatic engine for an animated birthday tribute page.
//!
//! The page is modelled as pure data (`Tribute`): eight sections in document
//! order, each carrying compiled-in content and decorative particle fields.
//! Live behavior sits beside it in `PageState` (scroll, carousels, lightbox,
//! gift box), and a pure evaluator turns both into an `EvaluatedPage` for any
//! frame.
//!
//! # Pipeline overview
//!
//! 1. **Compose**: `Tribute::builtin()` or [`TributeBuilder`] -> `Tribute`
//! 2. **Drive**: viewer input and `PageState::tick` advance the live state
//! 3. **Evaluate**: `Tribute + PageState + FrameIndex -> EvaluatedPage`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: decoration is derived from the seeded
//!   generator ([`seeded_unit`]), so evaluating a frame twice against the
//!   same state yields identical output.
//! - **No IO in evaluation**: audio and confetti go through the
//!   [`PageEffects`] capability and default to silent no-ops.
#![forbid(unsafe_code)]

pub mod animation;
pub mod content;
pub mod effects;
pub mod eval;
pub mod foundation;
pub mod page;
pub mod particles;
pub mod scroll;
pub mod state;

pub use animation::anim::{InterpMode, Keyframe, Keyframes, LoopMode, ramp};
pub use animation::ease::Ease;
pub use content::model::{ColorTag, IconTag, Memory, Quote, QuoteKind, TimelineEvent, Wish};
pub use effects::confetti::{CONFETTI_COLORS, ConfettiConfig, ConfettiSchedule};
pub use effects::shell::{NullEffects, PageEffects, RecordingEffects};
pub use eval::evaluator::{
    EvaluatedPage, Evaluator, PageState, ParticleInstant, SectionNode, SectionReadout,
};
pub use foundation::core::{FrameIndex, FrameRange, Fps, PageCanvas};
pub use foundation::error::{KeepsakeError, KeepsakeResult};
pub use foundation::seeded::{AttrFamily, Rng64, seeded_unit};
pub use page::dsl::{SectionBuilder, TributeBuilder};
pub use page::model::{Section, SectionContent, SectionKind, Tribute};
pub use particles::field::{ParticleField, ParticleSpec};
pub use particles::glitter::{GlitterParticle, GlitterSim};
pub use scroll::view::{
    PARALLAX_FACTORS, ScrollSpring, Viewport, parallax_offset, section_visible,
};
pub use state::carousel::{Carousel, ManualNavPolicy, RotatingDeck};
pub use state::gift::{Envelope, GiftBox, GiftPhase};
pub use state::lightbox::Lightbox;
