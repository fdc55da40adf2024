use crate::msg::{AnalysisOutcome, SaveOutcome};
use crate::view_model::{Notice, SAVE_ERROR_FALLBACK};
use crate::{Effect, Msg, Phase, PopupState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PopupState, msg: Msg) -> (PopupState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageUrlResolved(url) => {
            state.set_page_url(url);
            Vec::new()
        }
        Msg::AnalyzeClicked => {
            // Re-triggerable from Idle, Ready and Error; one request in
            // flight at a time.
            match state.phase() {
                Phase::Idle | Phase::Ready | Phase::Error => {}
                Phase::Analyzing | Phase::Saving => {
                    return (state, Vec::new());
                }
            }
            let url = state.page_url().to_owned();
            let request = state.begin_analysis();
            vec![Effect::RequestAnalysis { request, url }]
        }
        Msg::AnalysisCompleted { request, outcome } => {
            if state.phase() != Phase::Analyzing || !state.accepts_completion(request) {
                return (state, Vec::new());
            }
            match outcome {
                AnalysisOutcome::Success(classification) => {
                    state.finish_analysis_ok(classification);
                }
                AnalysisOutcome::Failed => {
                    state.finish_analysis_err();
                }
            }
            Vec::new()
        }
        Msg::TagAdded(tag) => {
            state.add_tag(&tag);
            Vec::new()
        }
        Msg::TagRemoved(tag) => {
            state.remove_tag(&tag);
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            state.select_category(&category);
            Vec::new()
        }
        Msg::SaveClicked => {
            if state.phase() != Phase::Ready {
                return (state, Vec::new());
            }
            match state.begin_save() {
                Some((request, payload)) => vec![Effect::RequestSave { request, payload }],
                None => Vec::new(),
            }
        }
        Msg::SaveCompleted { request, outcome } => {
            if state.phase() != Phase::Saving || !state.accepts_completion(request) {
                return (state, Vec::new());
            }
            let notice = match outcome {
                SaveOutcome::Saved => Notice::Saved,
                SaveOutcome::Duplicate => Notice::AlreadySaved,
                SaveOutcome::Failed { message } => Notice::SaveFailed(
                    message.unwrap_or_else(|| SAVE_ERROR_FALLBACK.to_owned()),
                ),
            };
            state.finish_save(notice);
            Vec::new()
        }
        Msg::ExploreClicked => vec![Effect::OpenExplore],
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
