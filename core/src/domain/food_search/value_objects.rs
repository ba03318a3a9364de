use crate::domain::common::entities::app_errors::CoreError;

/// Number of products requested from the nutrition database per search.
pub const SEARCH_PAGE_SIZE: usize = 10;

pub const NAME_PLACEHOLDER: &str = "Name unavailable";

pub const MISSING_QUERY_MESSAGE: &str = "search term (query) is required";

/// Free-text search term. Guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CoreError::InvalidRequest(MISSING_QUERY_MESSAGE.to_string()));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct SearchFoodsInput {
    pub query: Option<String>,
}
