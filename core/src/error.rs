use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    /// A container operation reached a fixture that is neither a unit
    /// nor a fortress. World state is structurally broken; abort.
    #[error("Fixture {id} of kind '{kind}' is not a container")]
    NotAContainer { id: i32, kind: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SyncResult<T> = Result<T, SyncError>;
