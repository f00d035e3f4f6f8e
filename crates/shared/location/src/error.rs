/// Errors produced while expanding a route path template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The template references a required parameter the caller did not provide.
    #[error("missing value for required path parameter `:{name}`")]
    MissingParam { name: String },
}
