use super::error::AuthzError;

/// The `namespace/repository` pair a request targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    namespace: String,
    repository: String,
}

impl ResourcePath {
    /// Resolve the resource from a wildcard path capture
    ///
    /// The first segment is the namespace, the second the repository. Any
    /// further segments (`tags/latest`, `manifests/v1`, ...) belong to the
    /// downstream handler and are ignored here.
    pub fn parse(capture: &str) -> Result<Self, AuthzError> {
        let mut segments = capture.split('/');

        match (segments.next(), segments.next()) {
            (Some(namespace), Some(repository))
                if !namespace.is_empty() && !repository.is_empty() =>
            {
                Ok(Self {
                    namespace: namespace.to_string(),
                    repository: repository.to_string(),
                })
            }
            _ => Err(AuthzError::MalformedResourcePath(capture.to_string())),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.repository)
    }
}
