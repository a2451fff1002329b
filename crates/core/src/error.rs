use crate::types::DbId;
use crate::wizard::WizardStage;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Field-level validation failure on a stage payload. The inner
    /// [`validator::ValidationErrors`] carries a field -> message map
    /// that the API layer surfaces in the error response body.
    #[error("Payload validation failed")]
    InvalidPayload(#[from] validator::ValidationErrors),

    /// A wizard stage was entered before its prerequisite stages were
    /// populated. `missing` names the earliest unpopulated stage.
    #[error("Cannot enter stage '{stage}': stage '{missing}' has not been completed")]
    PrerequisiteMissing {
        stage: WizardStage,
        missing: WizardStage,
    },

    /// Trip aggregation was attempted before every stage completed.
    #[error("Wizard state is incomplete: missing {missing}")]
    IncompleteWizardState { missing: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
