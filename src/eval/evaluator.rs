//! Page evaluation: live UI state plus the pure per-frame pass.
//!
//! [`PageState`] owns everything that mutates while the page is on screen:
//! scroll position, carousel timers, the lightbox, the gift box. The
//! [`Evaluator`] is a read-only pass over a [`Tribute`] and a [`PageState`]
//! that produces an [`EvaluatedPage`] for one frame. Evaluating the same
//! frame twice against the same state yields identical output.

use crate::{
    animation::anim::{InterpMode, Keyframe, Keyframes, LoopMode},
    animation::ease::Ease,
    effects::shell::PageEffects,
    foundation::core::{FrameIndex, Fps},
    foundation::error::{KeepsakeError, KeepsakeResult},
    page::model::{Section, SectionContent, SectionKind, Tribute},
    particles::field::ParticleField,
    scroll::view::{
        self, ScrollSpring, Viewport, hero_photo_opacity, hero_photo_scale, hero_title_y,
    },
    state::carousel::{ManualNavPolicy, RotatingDeck},
    state::gift::{Envelope, GiftBox, GiftPhase},
    state::lightbox::Lightbox,
};

/// Everything on the page that changes after load.
///
/// Constructed from a [`Tribute`]; the tribute itself stays immutable.
/// All timers are frame-driven: call [`PageState::tick`] once per frame.
#[derive(Debug)]
pub struct PageState {
    fps: Fps,
    viewport: Viewport,
    spring: ScrollSpring,
    quotes: Option<RotatingDeck>,
    wishes: Option<RotatingDeck>,
    lightbox: Option<Lightbox>,
    gift: Option<GiftBox>,
    envelope: Envelope,
    audio_started: bool,
}

impl PageState {
    /// Build the initial state for a tribute. Fails if the tribute is invalid.
    pub fn new(tribute: &Tribute) -> KeepsakeResult<Self> {
        tribute.validate()?;

        let mut quotes = None;
        let mut wishes = None;
        let mut lightbox = None;
        let mut gift = None;
        for section in &tribute.sections {
            match &section.content {
                SectionContent::Quotes { quotes: items, .. } => {
                    let interval = section.autoplay_interval_s.unwrap_or(8.0);
                    quotes = Some(RotatingDeck::new(
                        items.len(),
                        tribute.fps,
                        interval,
                        ManualNavPolicy::DisableAutoplay,
                    )?);
                }
                SectionContent::Wishes { wishes: items, .. } => {
                    let interval = section.autoplay_interval_s.unwrap_or(5.0);
                    wishes = Some(RotatingDeck::new(
                        items.len(),
                        tribute.fps,
                        interval,
                        ManualNavPolicy::KeepAutoplay,
                    )?);
                }
                SectionContent::Gallery { memories, .. } => {
                    lightbox = Some(Lightbox::new(memories.len(), tribute.fps)?);
                }
                SectionContent::Gift { .. } => {
                    gift = Some(GiftBox::new(tribute.fps, tribute.seed, tribute.canvas));
                }
                _ => {}
            }
        }

        Ok(Self {
            fps: tribute.fps,
            viewport: Viewport::new(0.0, f64::from(tribute.canvas.height)),
            spring: ScrollSpring::new(0.0),
            quotes,
            wishes,
            lightbox,
            gift,
            envelope: Envelope::default(),
            audio_started: false,
        })
    }

    /// Raw scroll offset in CSS pixels from the top of the page.
    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.viewport.scroll_y = scroll_y.max(0.0);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The spring-smoothed scroll position the presentation layer follows.
    pub fn smoothed_scroll(&self) -> f64 {
        self.spring.position
    }

    fn quotes_deck(&mut self) -> KeepsakeResult<&mut RotatingDeck> {
        self.quotes
            .as_mut()
            .ok_or_else(|| KeepsakeError::validation("page has no quotes section"))
    }

    fn wishes_deck(&mut self) -> KeepsakeResult<&mut RotatingDeck> {
        self.wishes
            .as_mut()
            .ok_or_else(|| KeepsakeError::validation("page has no wishes section"))
    }

    fn lightbox_mut(&mut self) -> KeepsakeResult<&mut Lightbox> {
        self.lightbox
            .as_mut()
            .ok_or_else(|| KeepsakeError::validation("page has no gallery section"))
    }

    fn gift_mut(&mut self) -> KeepsakeResult<&mut GiftBox> {
        self.gift
            .as_mut()
            .ok_or_else(|| KeepsakeError::validation("page has no gift section"))
    }

    /// Manual next on the quotes deck. Switches its autoplay off.
    pub fn next_quote(&mut self, frame: FrameIndex) -> KeepsakeResult<usize> {
        Ok(self.quotes_deck()?.next_manual(frame))
    }

    /// Manual previous on the quotes deck. Switches its autoplay off.
    pub fn prev_quote(&mut self, frame: FrameIndex) -> KeepsakeResult<usize> {
        Ok(self.quotes_deck()?.prev_manual(frame))
    }

    pub fn select_quote(&mut self, index: usize, frame: FrameIndex) -> KeepsakeResult<()> {
        self.quotes_deck()?.select(index, frame)
    }

    pub fn set_quotes_autoplay(&mut self, enabled: bool) -> KeepsakeResult<()> {
        self.quotes_deck()?.set_autoplay(enabled);
        Ok(())
    }

    /// Manual next on the wishes deck. Autoplay keeps running.
    pub fn next_wish(&mut self, frame: FrameIndex) -> KeepsakeResult<usize> {
        Ok(self.wishes_deck()?.next_manual(frame))
    }

    /// Manual previous on the wishes deck. Autoplay keeps running.
    pub fn prev_wish(&mut self, frame: FrameIndex) -> KeepsakeResult<usize> {
        Ok(self.wishes_deck()?.prev_manual(frame))
    }

    pub fn set_wishes_hovered(&mut self, hovered: bool) -> KeepsakeResult<()> {
        self.wishes_deck()?.set_hovered(hovered);
        Ok(())
    }

    /// Open the gallery lightbox on a memory.
    pub fn open_memory(&mut self, index: usize, frame: FrameIndex) -> KeepsakeResult<()> {
        self.lightbox_mut()?.open(index, frame)
    }

    /// Close the lightbox, restoring its pre-open state.
    pub fn close_memory(&mut self) -> KeepsakeResult<()> {
        self.lightbox_mut()?.close();
        Ok(())
    }

    pub fn next_memory(&mut self) -> KeepsakeResult<Option<usize>> {
        Ok(self.lightbox_mut()?.next())
    }

    pub fn prev_memory(&mut self) -> KeepsakeResult<Option<usize>> {
        Ok(self.lightbox_mut()?.prev())
    }

    pub fn set_memory_auto_rotate(&mut self, on: bool, frame: FrameIndex) -> KeepsakeResult<()> {
        self.lightbox_mut()?.set_auto_rotate(on, frame);
        Ok(())
    }

    pub fn selected_memory(&self) -> Option<usize> {
        self.lightbox.as_ref().and_then(Lightbox::selected)
    }

    /// Click the gift box. Ignored unless it is closed.
    pub fn open_gift(&mut self, frame: FrameIndex) -> KeepsakeResult<()> {
        self.gift_mut()?.open(frame);
        Ok(())
    }

    /// Dismiss the gift reveal. Ignored unless it is open.
    pub fn close_gift(&mut self, frame: FrameIndex) -> KeepsakeResult<()> {
        self.gift_mut()?.close(frame);
        Ok(())
    }

    pub fn gift_phase(&self) -> Option<GiftPhase> {
        self.gift.as_ref().map(GiftBox::phase)
    }

    /// Break the envelope seal. Permanent for the life of the page.
    pub fn open_envelope(&mut self) {
        self.envelope.open();
    }

    /// Open the full-letter modal. Requires the envelope to be opened first.
    pub fn open_letter_modal(&mut self) {
        self.envelope.open_modal();
    }

    pub fn close_letter_modal(&mut self) {
        self.envelope.close_modal();
    }

    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    /// Advance every frame-driven timer by one frame.
    ///
    /// Deck autoplay only runs while its section is on screen, so scrolling
    /// a carousel away is all it takes to stop it. The gift box ticks
    /// regardless: its open/close delays and the confetti schedule keep
    /// running once started.
    pub fn tick(
        &mut self,
        tribute: &Tribute,
        frame: FrameIndex,
        effects: &mut dyn PageEffects,
    ) {
        if !self.audio_started {
            effects.play_background_audio(&tribute.background_music);
            self.audio_started = true;
        }

        let target = self.viewport.scroll_y;
        self.spring.step(target, self.fps.frame_duration_secs());

        let viewport = self.viewport;
        let visible = |kind: SectionKind| -> bool {
            tribute
                .section_index(kind)
                .is_some_and(|i| section_on_screen(i, viewport))
        };

        if let Some(deck) = self.quotes.as_mut() {
            if visible(SectionKind::Quotes) {
                deck.tick(frame);
            }
        }
        if let Some(deck) = self.wishes.as_mut() {
            if visible(SectionKind::Wishes) {
                deck.tick(frame);
            }
        }
        if let Some(lightbox) = self.lightbox.as_mut() {
            // The overlay covers the whole viewport, so it ticks while open
            // no matter where the page is scrolled.
            lightbox.tick(frame);
        }
        if let Some(gift) = self.gift.as_mut() {
            gift.tick(frame, effects);
        }
    }
}

/// Sections stack top to bottom, each one viewport tall.
fn section_on_screen(index: usize, viewport: Viewport) -> bool {
    let top = (index as f64) * viewport.height;
    view::section_visible(top, top + viewport.height, viewport)
}

/// One decorative particle at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParticleInstant {
    pub index: u32,
    /// Horizontal anchor in percent of section width.
    pub x_pct: f64,
    /// Vertical anchor in percent of section height.
    pub y_pct: f64,
    pub size: f64,
    pub color: String,
    /// Vertical offset from the anchor, negative is up.
    pub rise_px: f64,
    pub opacity: f64,
}

/// Per-kind live values a renderer would bind to.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind")]
pub enum SectionReadout {
    Hero {
        title_y: f64,
        photo_scale: f64,
        photo_opacity: f64,
    },
    LoveLetter {
        envelope_opened: bool,
        modal_open: bool,
    },
    Gallery {
        selected: Option<usize>,
        auto_rotate: bool,
    },
    Timeline {
        line_progress: f64,
    },
    Gift {
        phase: GiftPhase,
        glitter: bool,
    },
    Quotes {
        index: usize,
        autoplay: bool,
    },
    Wishes {
        index: usize,
    },
    Outro,
}

/// One section at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionNode {
    pub kind: SectionKind,
    pub visible: bool,
    /// Parallax translation in CSS pixels, driven by the smoothed scroll.
    pub parallax_y: f64,
    pub particles: Vec<ParticleInstant>,
    pub readout: SectionReadout,
}

/// The whole page at one frame, sections in document order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedPage {
    pub frame: FrameIndex,
    /// Smoothed scroll position at this frame.
    pub scroll_y: f64,
    pub nodes: Vec<SectionNode>,
}

/// Pure per-frame evaluation over a tribute and its state.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one frame of the page.
    ///
    /// Errors if the tribute is invalid, the frame is past the ambient loop
    /// duration, or the state was built for a different tribute.
    #[tracing::instrument(skip_all, fields(frame = frame.0))]
    pub fn eval_frame(
        tribute: &Tribute,
        state: &PageState,
        frame: FrameIndex,
    ) -> KeepsakeResult<EvaluatedPage> {
        tribute.validate()?;
        if !tribute.frame_range().contains(frame) {
            return Err(KeepsakeError::evaluation(format!(
                "frame {} out of range (duration {} frames)",
                frame.0, tribute.duration.0
            )));
        }

        let scroll_y = state.smoothed_scroll();
        let viewport = state.viewport();

        let mut nodes = Vec::with_capacity(tribute.sections.len());
        for (i, section) in tribute.sections.iter().enumerate() {
            let visible = section_on_screen(i, viewport);
            let parallax_y = view::parallax_offset(scroll_y, tribute.parallax[i]);

            let mut particles = Vec::new();
            for field in &section.fields {
                eval_field(field, tribute.fps, frame, &mut particles)?;
            }

            let readout = section_readout(section, state, scroll_y, visible)?;
            nodes.push(SectionNode {
                kind: section.kind(),
                visible,
                parallax_y,
                particles,
                readout,
            });
        }

        tracing::trace!(sections = nodes.len(), "evaluated page frame");
        Ok(EvaluatedPage {
            frame,
            scroll_y,
            nodes,
        })
    }
}

/// Rise-and-fade envelope: 0 at rest, 1 at mid-cycle, back to 0.
fn wave_track(period: u64) -> Keyframes<f64> {
    Keyframes {
        keys: vec![
            Keyframe {
                frame: FrameIndex(0),
                value: 0.0,
                ease: Ease::InOutQuad,
            },
            Keyframe {
                frame: FrameIndex(period / 2),
                value: 1.0,
                ease: Ease::InOutQuad,
            },
            Keyframe {
                frame: FrameIndex(period),
                value: 0.0,
                ease: Ease::InOutQuad,
            },
        ],
        mode: InterpMode::Linear,
    }
}

fn eval_field(
    field: &ParticleField,
    fps: Fps,
    frame: FrameIndex,
    out: &mut Vec<ParticleInstant>,
) -> KeepsakeResult<()> {
    for spec in field.expand() {
        let period = fps.secs_to_frames_floor(spec.duration_s).max(2);
        let delay = fps.secs_to_frames_floor(spec.delay_s);
        let wave = wave_track(period).sample_looped(frame, delay, period, LoopMode::Repeat)?;
        out.push(ParticleInstant {
            index: spec.index,
            x_pct: spec.x_pct,
            y_pct: spec.y_pct,
            size: spec.size,
            color: spec.color,
            rise_px: -field.rise_px * wave,
            opacity: field.opacity_lo + (field.opacity_hi - field.opacity_lo) * wave,
        });
    }
    Ok(())
}

fn section_readout(
    section: &Section,
    state: &PageState,
    scroll_y: f64,
    visible: bool,
) -> KeepsakeResult<SectionReadout> {
    let missing = |what: &str| KeepsakeError::evaluation(format!("state has no {what}"));

    Ok(match &section.content {
        SectionContent::Hero { .. } => SectionReadout::Hero {
            title_y: hero_title_y(scroll_y),
            photo_scale: hero_photo_scale(scroll_y),
            photo_opacity: hero_photo_opacity(scroll_y),
        },
        SectionContent::LoveLetter { .. } => {
            let envelope = state.envelope();
            SectionReadout::LoveLetter {
                envelope_opened: envelope.is_opened(),
                modal_open: envelope.is_modal_open(),
            }
        }
        SectionContent::Gallery { .. } => {
            let lightbox = state.lightbox.as_ref().ok_or_else(|| missing("lightbox"))?;
            SectionReadout::Gallery {
                selected: lightbox.selected(),
                auto_rotate: lightbox.auto_rotate(),
            }
        }
        SectionContent::Timeline { .. } => SectionReadout::Timeline {
            // The connecting line grows to full height once the section is
            // in view and stays there.
            line_progress: if visible { 1.0 } else { 0.0 },
        },
        SectionContent::Gift { .. } => {
            let gift = state.gift.as_ref().ok_or_else(|| missing("gift box"))?;
            SectionReadout::Gift {
                phase: gift.phase(),
                glitter: gift.glitter_active(),
            }
        }
        SectionContent::Quotes { .. } => {
            let deck = state.quotes.as_ref().ok_or_else(|| missing("quotes deck"))?;
            SectionReadout::Quotes {
                index: deck.index(),
                autoplay: deck.autoplay_enabled(),
            }
        }
        SectionContent::Wishes { .. } => {
            let deck = state.wishes.as_ref().ok_or_else(|| missing("wishes deck"))?;
            SectionReadout::Wishes { index: deck.index() }
        }
        SectionContent::Outro { .. } => SectionReadout::Outro,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::shell::{NullEffects, RecordingEffects};

    fn page() -> (Tribute, PageState) {
        let tribute = Tribute::builtin();
        let state = PageState::new(&tribute).unwrap();
        (tribute, state)
    }

    #[test]
    fn eval_is_deterministic_for_same_state() {
        let (tribute, state) = page();
        let a = Evaluator::eval_frame(&tribute, &state, FrameIndex(42)).unwrap();
        let b = Evaluator::eval_frame(&tribute, &state, FrameIndex(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn eval_rejects_frame_past_duration() {
        let (tribute, state) = page();
        let last = FrameIndex(tribute.duration.0 - 1);
        assert!(Evaluator::eval_frame(&tribute, &state, last).is_ok());
        assert!(Evaluator::eval_frame(&tribute, &state, tribute.duration).is_err());
    }

    #[test]
    fn nodes_follow_document_order() {
        let (tribute, state) = page();
        let page = Evaluator::eval_frame(&tribute, &state, FrameIndex(0)).unwrap();
        let kinds: Vec<_> = page.nodes.iter().map(|n| n.kind).collect();
        let expected: Vec<_> = tribute.sections.iter().map(Section::kind).collect();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn only_hero_visible_at_top_of_page() {
        let (tribute, state) = page();
        let page = Evaluator::eval_frame(&tribute, &state, FrameIndex(0)).unwrap();
        assert!(page.nodes[0].visible);
        for node in &page.nodes[1..] {
            assert!(!node.visible, "{:?} should be off screen", node.kind);
        }
    }

    #[test]
    fn hero_carries_ninety_particles() {
        let (tribute, state) = page();
        let page = Evaluator::eval_frame(&tribute, &state, FrameIndex(0)).unwrap();
        // 40 drift + 30 hearts + 20 stars.
        assert_eq!(page.nodes[0].particles.len(), 90);
    }

    #[test]
    fn particle_opacity_stays_in_declared_band() {
        let (tribute, state) = page();
        for f in [0, 7, 90, 450, 901, 1799] {
            let page = Evaluator::eval_frame(&tribute, &state, FrameIndex(f)).unwrap();
            for p in &page.nodes[0].particles {
                assert!((0.0..=1.0).contains(&p.opacity), "frame {f}: {p:?}");
                assert!(p.rise_px <= 0.0);
            }
        }
    }

    #[test]
    fn quotes_autoplay_holds_while_section_off_screen() {
        let (tribute, mut state) = page();
        let mut fx = NullEffects;
        // Page stays at the top; quotes never enter the viewport.
        for f in 0..1000 {
            state.tick(&tribute, FrameIndex(f), &mut fx);
        }
        let snapshot = Evaluator::eval_frame(&tribute, &state, FrameIndex(999)).unwrap();
        let quotes = tribute.section_index(SectionKind::Quotes).unwrap();
        match snapshot.nodes[quotes].readout {
            SectionReadout::Quotes { index, .. } => assert_eq!(index, 0),
            ref other => panic!("unexpected readout {other:?}"),
        }
    }

    #[test]
    fn quotes_autoplay_rotates_on_screen() {
        let (tribute, mut state) = page();
        let mut fx = NullEffects;
        let quotes = tribute.section_index(SectionKind::Quotes).unwrap();
        // Scroll the quotes section fully into view.
        state.set_scroll((quotes as f64) * 900.0);
        // 8 s at 30 fps = 240 frames.
        for f in 0..=240 {
            state.tick(&tribute, FrameIndex(f), &mut fx);
        }
        let snapshot = Evaluator::eval_frame(&tribute, &state, FrameIndex(240)).unwrap();
        match snapshot.nodes[quotes].readout {
            SectionReadout::Quotes { index, .. } => assert_eq!(index, 1),
            ref other => panic!("unexpected readout {other:?}"),
        }
    }

    #[test]
    fn manual_quote_nav_disables_autoplay_in_readout() {
        let (tribute, mut state) = page();
        state.next_quote(FrameIndex(10)).unwrap();
        let quotes = tribute.section_index(SectionKind::Quotes).unwrap();
        let snapshot = Evaluator::eval_frame(&tribute, &state, FrameIndex(10)).unwrap();
        match snapshot.nodes[quotes].readout {
            SectionReadout::Quotes { index, autoplay } => {
                assert_eq!(index, 1);
                assert!(!autoplay);
            }
            ref other => panic!("unexpected readout {other:?}"),
        }
    }

    #[test]
    fn background_audio_requested_once() {
        let (tribute, mut state) = page();
        let mut fx = RecordingEffects::default();
        for f in 0..10 {
            state.tick(&tribute, FrameIndex(f), &mut fx);
        }
        assert_eq!(fx.audio_plays, vec![tribute.background_music.clone()]);
    }

    #[test]
    fn gift_open_fires_confetti_after_reveal_delay() {
        let (tribute, mut state) = page();
        let mut fx = RecordingEffects::default();
        state.open_gift(FrameIndex(0)).unwrap();
        // 1.5 s reveal delay at 30 fps = 45 frames; the first paired shot
        // lands one cadence (7 frames) after that.
        for f in 0..=51 {
            state.tick(&tribute, FrameIndex(f), &mut fx);
        }
        assert!(fx.confetti_bursts.is_empty());
        assert_eq!(state.gift_phase(), Some(GiftPhase::Open));
        state.tick(&tribute, FrameIndex(52), &mut fx);
        assert!(!fx.confetti_bursts.is_empty());
    }

    #[test]
    fn ops_on_absent_sections_error() {
        let fps = Fps { num: 30, den: 1 };
        let canvas = crate::foundation::core::PageCanvas {
            width: 800,
            height: 600,
        };
        let tribute = crate::page::dsl::TributeBuilder::new(fps, canvas, FrameIndex(300))
            .background_music("music/track.mp3")
            .section(
                crate::page::dsl::SectionBuilder::new(SectionContent::Outro {
                    heading: "h".into(),
                    farewell: "f".into(),
                    credit: "c".into(),
                }),
                0.0,
            )
            .build()
            .unwrap();
        let mut state = PageState::new(&tribute).unwrap();
        assert!(state.next_quote(FrameIndex(0)).is_err());
        assert!(state.open_memory(0, FrameIndex(0)).is_err());
        assert!(state.open_gift(FrameIndex(0)).is_err());
    }
}
