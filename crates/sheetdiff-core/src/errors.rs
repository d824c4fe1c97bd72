use thiserror::Error;

/// Result type alias using SheetDiffError
pub type Result<T> = std::result::Result<T, SheetDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The comparison functions themselves never fail: shape mismatches are
/// reported as difference records. These kinds cover the configurable
/// comparator and input decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    /// `CompareOptions` failed validation
    InvalidOptions,

    // Traversal
    /// Input nesting exceeded the configured `max_depth`
    DepthLimitExceeded,

    // Integration
    /// Input could not be decoded
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidOptions => "ERR_INVALID_OPTIONS",
            ExErrorKind::DepthLimitExceeded => "ERR_DEPTH_LIMIT_EXCEEDED",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation and
/// value path at which the failure was observed.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    depth: Option<usize>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            depth: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add value path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add nesting depth context
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the value path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the nesting depth context, if any
    ///
    /// For `DepthLimitExceeded` this is the configured `max_depth` that the
    /// input went past; the walk stops at the first level beyond it.
    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: '{}')", path)?;
        }
        if let Some(depth) = self.depth {
            write!(f, " (depth: {})", depth)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for sheetdiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SheetDiffError {
    /// Nesting went deeper than the comparator allows
    #[error("Depth limit {max_depth} exceeded at path '{path}'")]
    DepthLimitExceeded { path: String, max_depth: usize },

    /// Comparator configuration rejected
    #[error("Invalid compare options: {reason}")]
    InvalidOptions { reason: String },

    /// Input could not be decoded as JSON
    #[error("JSON error: {message}")]
    Json { message: String },
}

impl From<SheetDiffError> for ExError {
    fn from(err: SheetDiffError) -> Self {
        match err {
            SheetDiffError::DepthLimitExceeded { path, max_depth } => {
                ExError::new(ExErrorKind::DepthLimitExceeded)
                    .with_path(path)
                    .with_depth(max_depth)
                    .with_message(format!(
                        "nesting deeper than {} levels; input may be cyclic",
                        max_depth
                    ))
            }

            SheetDiffError::InvalidOptions { reason } => {
                ExError::new(ExErrorKind::InvalidOptions)
                    .with_message(format!("Invalid compare options: {}", reason))
            }

            SheetDiffError::Json { message } => ExError::new(ExErrorKind::Serialization)
                .with_message(format!("JSON error: {}", message)),
        }
    }
}

impl From<serde_json::Error> for SheetDiffError {
    fn from(err: serde_json::Error) -> Self {
        SheetDiffError::Json {
            message: err.to_string(),
        }
    }
}
