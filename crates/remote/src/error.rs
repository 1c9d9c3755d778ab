use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    /// The one total failure of the adapter: a record that cannot supply a
    /// non-empty extension id has no usable identity. Every other malformed
    /// sub-field degrades in place instead of erroring.
    #[error("Remote extension record has no usable id")]
    MissingId,
}

pub type Result<T> = std::result::Result<T, AdapterError>;
