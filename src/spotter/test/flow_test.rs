use crate::image_file::ImageFile;
use crate::spotter::core::{init, transition, Effect, Event, Phase, PreviewHandle};
use crate::spotter::test::fixture::{sample_png_file, Fixture};
use std::time::Duration;

#[test]
fn test_submit_effect_round_trips_a_completion_event() {
    let f = Fixture::new();

    let (state, _) = transition(init().0, Event::FileSelected(sample_png_file()));
    let (state, effects) = transition(state, Event::SubmitPressed);

    let submit = effects
        .iter()
        .find(|effect| matches!(effect, Effect::SubmitImage { .. }))
        .cloned()
        .unwrap();
    f.spotter.run_effect(submit);

    let event = f
        .spotter
        .event_receiver
        .lock()
        .unwrap()
        .recv_timeout(Duration::from_secs(2))
        .unwrap();

    let (state, effects) = transition(state, event);
    match state.phase {
        Phase::Classified { ref prediction, .. } => {
            assert!(!prediction.species.is_empty());
        }
        _ => panic!("Unexpected state"),
    }
    assert!(effects.is_empty());
}

#[test]
fn test_create_preview_effect_populates_the_store() {
    let f = Fixture::new();
    let handle = PreviewHandle(0);

    f.spotter.run_effect(Effect::CreatePreview {
        file: sample_png_file(),
        preview: handle,
    });
    assert!(f.spotter.previews.contains(handle));

    f.spotter.run_effect(Effect::ReleasePreview(handle));
    assert!(!f.spotter.previews.contains(handle));
}

#[test]
fn test_undecodable_file_leaves_the_store_empty() {
    let f = Fixture::new();
    let handle = PreviewHandle(0);

    let file = ImageFile {
        name: "notes.txt".to_string(),
        mime: "application/octet-stream".to_string(),
        bytes: b"not an image".to_vec(),
    };
    f.spotter.run_effect(Effect::CreatePreview {
        file,
        preview: handle,
    });

    assert!(!f.spotter.previews.contains(handle));
}
