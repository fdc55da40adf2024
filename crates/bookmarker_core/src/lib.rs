//! Bookmarker core: pure popup state machine and view-model helpers.
mod effect;
mod msg;
mod record;
mod state;
mod tags;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{AnalysisOutcome, Msg, SaveOutcome};
pub use record::{
    derive_site_name, CategoryOptions, Classification, PageRecord, SavePayload, DEFAULT_FAVICON,
};
pub use state::{Phase, PopupState, RequestId};
pub use tags::TagSet;
pub use update::update;
pub use view_model::{
    Notice, PopupViewModel, ResultView, TagRowView, ANALYZE_ERROR_MESSAGE, SAVE_ERROR_FALLBACK,
};
