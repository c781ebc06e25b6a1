/// Default opening marker for template actions.
pub const DEFAULT_LEFT_DELIM: &str = "{{";

/// Default closing marker for template actions.
pub const DEFAULT_RIGHT_DELIM: &str = "}}";

/// The marker pair that encloses template actions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiters {
    left: String,
    right: String,
}

impl Delimiters {
    /// Create a marker pair, defaulting each empty side independently.
    ///
    /// ```
    /// use plural_template::Delimiters;
    ///
    /// let d = Delimiters::resolve("<<", "");
    /// assert_eq!(d.left(), "<<");
    /// assert_eq!(d.right(), "}}");
    /// ```
    pub fn resolve(left: &str, right: &str) -> Self {
        let pick = |given: &str, fallback: &str| {
            if given.is_empty() {
                fallback.to_string()
            } else {
                given.to_string()
            }
        };
        Self {
            left: pick(left, DEFAULT_LEFT_DELIM),
            right: pick(right, DEFAULT_RIGHT_DELIM),
        }
    }

    /// The opening marker.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The closing marker.
    pub fn right(&self) -> &str {
        &self.right
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::resolve("", "")
    }
}
