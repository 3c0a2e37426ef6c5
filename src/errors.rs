use thiserror::Error;

/// Failures raised by the auto-sorting operation.
///
/// These never surface as HTTP errors: the responder catches them and
/// degrades to returning unsorted data with `autoSorting.status = "failed"`.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("not a valid direction \"{0}\"")]
    InvalidDirection(String),

    #[error("cannot sort because the key \"{0}\" does not exist")]
    MissingSortKey(String),
}
