use crate::image_file::ImageFile;
use crate::prediction_api::interface::{Prediction, PredictionError};

/// Every failure kind collapses to this one user-facing message. The effect
/// interpreter logs the specific error before the completion event arrives.
pub const FAILURE_MESSAGE: &str =
    "Oops! Something went wrong. Is your backend running and reachable?";

/// Revocable reference to a decoded preview. Minted on every selection;
/// the superseded handle is released exactly once via `Effect::ReleasePreview`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewHandle(pub u64);

/// Token attached to a submission so a completion that arrives after the
/// user has moved on can be recognized as stale and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Default)]
pub struct State {
    pub phase: Phase,
    next_preview: u64,
    next_request: u64,
}

/// The workflow as a tagged variant: a prediction and an error can never
/// coexist, and "loading" is its own phase rather than a flag.
#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Idle,
    FileSelected {
        file: ImageFile,
        preview: PreviewHandle,
    },
    Submitting {
        file: ImageFile,
        preview: PreviewHandle,
        request: RequestId,
    },
    Classified {
        file: ImageFile,
        preview: PreviewHandle,
        prediction: Prediction,
    },
    Failed {
        file: ImageFile,
        preview: PreviewHandle,
        message: String,
    },
}

impl Phase {
    pub fn preview(&self) -> Option<PreviewHandle> {
        match self {
            Phase::Idle => None,
            Phase::FileSelected { preview, .. }
            | Phase::Submitting { preview, .. }
            | Phase::Classified { preview, .. }
            | Phase::Failed { preview, .. } => Some(*preview),
        }
    }

    pub fn file(&self) -> Option<&ImageFile> {
        match self {
            Phase::Idle => None,
            Phase::FileSelected { file, .. }
            | Phase::Submitting { file, .. }
            | Phase::Classified { file, .. }
            | Phase::Failed { file, .. } => Some(file),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Phase::Submitting { .. })
    }
}

#[derive(Debug)]
pub enum Event {
    FileSelected(ImageFile),
    SubmitPressed,
    SubmitDone {
        request: RequestId,
        result: Result<Prediction, PredictionError>,
    },
    Shutdown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CreatePreview {
        file: ImageFile,
        preview: PreviewHandle,
    },
    ReleasePreview(PreviewHandle),
    SubmitImage {
        file: ImageFile,
        request: RequestId,
    },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![])
}

pub fn transition(mut state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.phase, event) {
        // Selecting a file is valid from any phase. The old preview is
        // released, the prior prediction or error disappears with its
        // variant, and an in-flight submission is left to finish and be
        // discarded by its stale token.
        (phase, Event::FileSelected(file)) => {
            let mut effects = Vec::new();
            if let Some(old) = phase.preview() {
                effects.push(Effect::ReleasePreview(old));
            }

            let preview = PreviewHandle(state.next_preview);
            state.next_preview += 1;

            effects.push(Effect::CreatePreview {
                file: file.clone(),
                preview,
            });
            state.phase = Phase::FileSelected { file, preview };
            (state, effects)
        }

        // Submission is allowed whenever a file is present and no request
        // is outstanding: fresh selection, or retrying after a result.
        (
            Phase::FileSelected { file, preview }
            | Phase::Classified { file, preview, .. }
            | Phase::Failed { file, preview, .. },
            Event::SubmitPressed,
        ) => {
            let request = RequestId(state.next_request);
            state.next_request += 1;

            let effects = vec![Effect::SubmitImage {
                file: file.clone(),
                request,
            }];
            state.phase = Phase::Submitting {
                file,
                preview,
                request,
            };
            (state, effects)
        }

        (
            Phase::Submitting {
                file,
                preview,
                request,
            },
            Event::SubmitDone {
                request: done_request,
                result,
            },
        ) if done_request == request => {
            state.phase = match result {
                Ok(prediction) => Phase::Classified {
                    file,
                    preview,
                    prediction,
                },
                Err(_) => Phase::Failed {
                    file,
                    preview,
                    message: FAILURE_MESSAGE.to_string(),
                },
            };
            (state, vec![])
        }

        (phase, Event::Shutdown) => {
            let effects = phase
                .preview()
                .map(Effect::ReleasePreview)
                .into_iter()
                .collect();
            state.phase = Phase::Idle;
            (state, effects)
        }

        // Everything else is a no-op: submit with no file, submit while
        // already submitting, stale or out-of-phase completions.
        (phase, _) => {
            state.phase = phase;
            (state, vec![])
        }
    }
}
