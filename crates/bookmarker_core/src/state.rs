use crate::record::{
    CategoryOptions, Classification, PageRecord, SavePayload, DEFAULT_FAVICON,
};
use crate::view_model::{
    Notice, PopupViewModel, ResultView, TagRowView, ANALYZE_ERROR_MESSAGE,
};

/// Token tying a service completion back to the request that issued it.
pub type RequestId = u64;

/// The popup session phases. Results are visible only in `Ready` and
/// `Saving`; the in-progress indicator shows only in `Analyzing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Analyzing,
    Ready,
    Saving,
    Error,
}

/// State for one popup session, mutated only through [`crate::update`].
///
/// One classification or save request is in flight at a time; completions
/// carrying anything but the current [`RequestId`] are stale and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupState {
    phase: Phase,
    page_url: String,
    record: Option<PageRecord>,
    error: Option<String>,
    notice: Option<Notice>,
    categories: CategoryOptions,
    default_favicon: String,
    next_request: RequestId,
    in_flight: Option<RequestId>,
    dirty: bool,
}

impl Default for PopupState {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupState {
    /// Empty session with no category options configured.
    pub fn new() -> Self {
        Self::with_config(CategoryOptions::default(), DEFAULT_FAVICON)
    }

    /// Session configured with the UI's category option list and default
    /// icon reference.
    pub fn with_config(categories: CategoryOptions, default_favicon: impl Into<String>) -> Self {
        Self {
            phase: Phase::Idle,
            page_url: String::new(),
            record: None,
            error: None,
            notice: None,
            categories,
            default_favicon: default_favicon.into(),
            next_request: 0,
            in_flight: None,
            dirty: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The active-page URL snapshot delivered by the host environment.
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn record(&self) -> Option<&PageRecord> {
        self.record.as_ref()
    }

    /// Returns whether the state changed since the last call, resetting the
    /// flag. The shell re-renders only when this reports true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> PopupViewModel {
        let results = match self.phase {
            Phase::Ready | Phase::Saving => self.record.as_ref().map(|record| ResultView {
                favicon_url: record.favicon_url.clone(),
                title: record.title.clone(),
                site_name: record.site_name.clone(),
                category: record.category.clone(),
                category_options: self.categories.iter().map(str::to_owned).collect(),
                tags: record
                    .tags
                    .iter()
                    .map(|tag| TagRowView {
                        tag: tag.to_owned(),
                    })
                    .collect(),
                tags_delimited: record.tags.to_delimited(),
                content: record.content.clone(),
                visit_url: record.url.clone(),
            }),
            Phase::Idle | Phase::Analyzing | Phase::Error => None,
        };

        PopupViewModel {
            page_url: self.page_url.clone(),
            phase: self.phase,
            busy: self.phase == Phase::Analyzing,
            error: self.error.clone(),
            notice: self.notice.clone(),
            results,
            dirty: self.dirty,
        }
    }

    pub(crate) fn set_page_url(&mut self, url: String) {
        if self.page_url != url {
            self.page_url = url;
            self.mark_dirty();
        }
    }

    /// Enters `Analyzing`: clears the previous error and notice, hides any
    /// prior results via the phase, and issues a fresh request token.
    pub(crate) fn begin_analysis(&mut self) -> RequestId {
        self.next_request += 1;
        let request = self.next_request;
        self.in_flight = Some(request);
        self.phase = Phase::Analyzing;
        self.error = None;
        self.notice = None;
        self.mark_dirty();
        request
    }

    pub(crate) fn accepts_completion(&self, request: RequestId) -> bool {
        self.in_flight == Some(request)
    }

    /// Repopulates the record wholesale from a classification and enters
    /// `Ready`.
    pub(crate) fn finish_analysis_ok(&mut self, classification: Classification) {
        self.record = Some(PageRecord::from_classification(
            classification,
            &self.categories,
            &self.page_url,
            &self.default_favicon,
        ));
        self.phase = Phase::Ready;
        self.in_flight = None;
        self.error = None;
        self.mark_dirty();
    }

    /// Enters `Error` with the fixed generic message. A previously
    /// populated record survives untouched.
    pub(crate) fn finish_analysis_err(&mut self) {
        self.phase = Phase::Error;
        self.in_flight = None;
        self.error = Some(ANALYZE_ERROR_MESSAGE.to_owned());
        self.mark_dirty();
    }

    pub(crate) fn add_tag(&mut self, tag: &str) -> bool {
        let changed = match self.record.as_mut() {
            Some(record) => record.tags.add(tag),
            None => false,
        };
        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub(crate) fn remove_tag(&mut self, tag: &str) -> bool {
        let changed = match self.record.as_mut() {
            Some(record) => record.tags.remove(tag),
            None => false,
        };
        if changed {
            self.mark_dirty();
        }
        changed
    }

    /// Sets the record's category. Values outside the configured option
    /// list are ignored.
    pub(crate) fn select_category(&mut self, category: &str) -> bool {
        if !self.categories.contains(category) {
            return false;
        }
        let changed = match self.record.as_mut() {
            Some(record) if record.category.as_deref() != Some(category) => {
                record.category = Some(category.to_owned());
                true
            }
            _ => false,
        };
        if changed {
            self.mark_dirty();
        }
        changed
    }

    /// Enters `Saving` with a payload read live from the current record and
    /// page URL. Returns None when there is nothing to save.
    pub(crate) fn begin_save(&mut self) -> Option<(RequestId, SavePayload)> {
        let payload = self.record.as_ref()?.to_save_payload(&self.page_url);
        self.next_request += 1;
        let request = self.next_request;
        self.in_flight = Some(request);
        self.phase = Phase::Saving;
        self.notice = None;
        self.mark_dirty();
        Some((request, payload))
    }

    /// Returns to `Ready` with the save outcome notice. The record is never
    /// cleared by a save, whatever the outcome.
    pub(crate) fn finish_save(&mut self, notice: Notice) {
        self.phase = Phase::Ready;
        self.in_flight = None;
        self.notice = Some(notice);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
