use std::path::PathBuf;

use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("node `{node_id}` has malformed date `{date}`: no leading year")]
    MalformedDate { node_id: String, date: String },

    #[error("node not found: `{id}`")]
    NodeNotFound { id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
