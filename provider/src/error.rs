use crate::resource::Resource;

/// Failures surfaced to callers of the provider
///
/// Remote failures are converted into one of these at the point of call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested resource or its stack does not exist
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The request was rejected before any remote call was made
    #[error("{0}")]
    Validation(String),

    /// CloudFormation rejected the call or returned unusable data
    #[error("{0}")]
    Substrate(String),

    /// The stack was created but announcing it on the notification topic failed
    ///
    /// The created resource is kept so callers can handle the partial success.
    #[error("resource {name} was created but its notification failed: {message}", name = .resource.name)]
    Publish {
        resource: Box<Resource>,
        message: String,
    },
}

impl Error {
    pub(crate) fn publish(resource: Resource, message: impl Into<String>) -> Self {
        Error::Publish {
            resource: Box::new(resource),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
