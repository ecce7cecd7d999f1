use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConvertError {
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}
