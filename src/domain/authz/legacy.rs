use regex::Regex;

/// Paths under the v1 images root
///
/// v1 image endpoints address layers by image ID rather than by repository,
/// so there is no namespace to check ownership against.
pub const DEFAULT_LEGACY_IMAGE_PATTERN: &str = r"^/v1/images(/|$)";

/// Recognizes legacy single-image resources that skip ownership checks
///
/// Matching only bypasses authorization; callers must already be authenticated.
#[derive(Debug, Clone)]
pub struct LegacyResourceMatcher {
    pattern: Regex,
}

impl LegacyResourceMatcher {
    /// Compile a matcher from a regular expression over the request path
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Matcher for the registry's `/v1/images/...` endpoints
    pub fn v1_images() -> Self {
        Self::new(DEFAULT_LEGACY_IMAGE_PATTERN).expect("default legacy image pattern is valid")
    }

    /// Check a request path; any query string is ignored
    pub fn is_legacy(&self, path: &str) -> bool {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        self.pattern.is_match(path)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}
