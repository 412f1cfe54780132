//! Shared error types for the art service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Config file {path} could not be read: {message}")]
    ConfigFile { path: String, message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
