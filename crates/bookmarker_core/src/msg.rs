use crate::record::Classification;
use crate::state::RequestId;

/// Everything that can happen to a popup session: user actions arriving
/// from the display surface and completions from the service collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host environment delivered the active-page URL snapshot.
    PageUrlResolved(String),
    /// User clicked Analyze.
    AnalyzeClicked,
    /// Classification collaborator finished the request issued as `request`.
    AnalysisCompleted {
        request: RequestId,
        outcome: AnalysisOutcome,
    },
    /// User submitted a new tag.
    TagAdded(String),
    /// User clicked a tag row's remove control.
    TagRemoved(String),
    /// User picked a category from the configured option list.
    CategorySelected(String),
    /// User clicked Save.
    SaveClicked,
    /// Persistence collaborator finished the request issued as `request`.
    SaveCompleted {
        request: RequestId,
        outcome: SaveOutcome,
    },
    /// User clicked Explore.
    ExploreClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Outcome of one classification request, as mapped by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Success(Classification),
    /// Transport failure, service rejection, or a response without the
    /// success marker. Detail is logged at the boundary, never displayed.
    Failed,
}

/// Disjoint save outcomes. `Duplicate` is not an error: the record already
/// exists remotely and the user is told so distinctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Duplicate,
    /// Any other collaborator response. `message` is the collaborator's
    /// error text when it supplied one.
    Failed { message: Option<String> },
}
