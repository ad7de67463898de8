use axum::http::Method;

/// Access level a request needs on its repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Push, tag or delete
    Write,
    /// Pull or inspect
    Read,
}

impl Permission {
    /// Classify an HTTP method
    ///
    /// `POST`, `PUT` and `DELETE` need write access. Everything else,
    /// including methods the registry does not route, is a read.
    pub fn from_method(method: &Method) -> Self {
        match *method {
            Method::POST | Method::PUT | Method::DELETE => Self::Write,
            _ => Self::Read,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Read => "read",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
