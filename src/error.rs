use std::io;
use thiserror::Error;

/// Custom error type for devinfo
#[derive(Error, Debug)]
pub enum DeviceInfoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Non-finite value for field '{0}'")]
    NonFiniteValue(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Receiver registration failed: {0}")]
    Registration(String),
}

/// Result type alias for devinfo
pub type Result<T> = std::result::Result<T, DeviceInfoError>;

impl DeviceInfoError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DeviceInfoError::Config(msg.into())
    }

    /// Create a service unavailable error
    pub fn service_unavailable<S: Into<String>>(msg: S) -> Self {
        DeviceInfoError::ServiceUnavailable(msg.into())
    }

    pub fn registration<S: Into<String>>(msg: S) -> Self {
        DeviceInfoError::Registration(msg.into())
    }
}

impl From<battery::Error> for DeviceInfoError {
    fn from(err: battery::Error) -> Self {
        DeviceInfoError::Platform(format!("battery: {}", err))
    }
}
