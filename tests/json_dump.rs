//! Serde round-trips over the page model.

use keepsake::{Evaluator, FrameIndex, PageState, SectionKind, Tribute};

#[test]
fn builtin_tribute_roundtrips_through_json() {
    let tribute = Tribute::builtin();
    let json = tribute.to_json_pretty().unwrap();
    // from_json validates on the way in.
    let back = Tribute::from_json(&json).unwrap();
    assert_eq!(back.sections.len(), tribute.sections.len());
    assert_eq!(back.parallax, tribute.parallax);
    assert_eq!(back.background_music, tribute.background_music);
    let kinds: Vec<_> = back.sections.iter().map(|s| s.kind()).collect();
    let expected: Vec<_> = tribute.sections.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, expected);
}

#[test]
fn evaluated_page_serializes() {
    let tribute = Tribute::builtin();
    let state = PageState::new(&tribute).unwrap();
    let page = Evaluator::eval_frame(&tribute, &state, FrameIndex(0)).unwrap();

    let json = serde_json::to_string(&page).unwrap();
    assert!(json.contains("\"Hero\""));
    assert!(json.contains("\"Outro\""));
}

#[test]
fn section_content_tags_by_kind() {
    let tribute = Tribute::builtin();
    let json = serde_json::to_string(&tribute).unwrap();
    for kind in [
        SectionKind::Hero,
        SectionKind::Gallery,
        SectionKind::Gift,
        SectionKind::Wishes,
    ] {
        assert!(json.contains(&format!("\"{kind:?}\"")), "missing {kind:?}");
    }
}
