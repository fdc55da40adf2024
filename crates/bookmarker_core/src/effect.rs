use crate::record::SavePayload;
use crate::state::RequestId;

/// Side effects requested by [`crate::update`] and executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the classification collaborator to analyze `url`.
    RequestAnalysis { request: RequestId, url: String },
    /// Hand the payload to the persistence collaborator.
    RequestSave {
        request: RequestId,
        payload: SavePayload,
    },
    /// Open the explore reference view in a new browsing context.
    OpenExplore,
}
