use crate::state::Phase;

/// Fixed message shown when analysis fails; the underlying cause is only
/// logged.
pub const ANALYZE_ERROR_MESSAGE: &str =
    "Error: Unable to process the request. Please try again.";

/// Fallback save-failure text used when the collaborator supplies none.
pub const SAVE_ERROR_FALLBACK: &str = "Unknown error occurred";

/// Save outcome notification for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Saved,
    AlreadySaved,
    SaveFailed(String),
}

/// One tag row in display order. The `tag` value doubles as the remove
/// affordance: wire the row's remove control to [`crate::Msg::TagRemoved`]
/// with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRowView {
    pub tag: String,
}

/// The populated, editable result projection. Present only while the
/// session is in `Ready` or `Saving`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub favicon_url: String,
    pub title: String,
    pub site_name: String,
    pub category: Option<String>,
    pub category_options: Vec<String>,
    pub tags: Vec<TagRowView>,
    /// Serialized tag form, refreshed on every mutation.
    pub tags_delimited: String,
    pub content: String,
    pub visit_url: String,
}

/// Snapshot of everything the display surface needs to render a popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupViewModel {
    pub page_url: String,
    pub phase: Phase,
    /// In-progress indicator; true only while analyzing.
    pub busy: bool,
    pub error: Option<String>,
    pub notice: Option<Notice>,
    pub results: Option<ResultView>,
    pub dirty: bool,
}
