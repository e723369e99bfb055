//! Query module - the immutable input to an orchestration run

/// A research query
///
/// Created once per request and never mutated afterwards. Validation happens
/// at construction so no run ever starts from a malformed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    max_sources: usize,
    include_history: bool,
}

impl Query {
    /// Create a new query
    ///
    /// # Errors
    /// Returns an error if the text is empty/whitespace-only or
    /// `max_sources` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use inquest_domain::Query;
    ///
    /// let query = Query::new("Do AI agents improve efficiency?", 5).unwrap();
    /// assert_eq!(query.max_sources(), 5);
    /// assert!(!query.include_history());
    /// ```
    pub fn new(text: impl Into<String>, max_sources: usize) -> Result<Self, String> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err("Query text must not be empty".to_string());
        }
        if max_sources == 0 {
            return Err("max_sources must be a positive integer".to_string());
        }
        Ok(Self {
            text,
            max_sources,
            include_history: false,
        })
    }

    /// Enable or disable past-session context for this query
    pub fn with_history(mut self, include_history: bool) -> Self {
        self.include_history = include_history;
        self
    }

    /// The query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Requested maximum number of sources
    pub fn max_sources(&self) -> usize {
        self.max_sources
    }

    /// Whether past-session context was requested
    pub fn include_history(&self) -> bool {
        self.include_history
    }
}
