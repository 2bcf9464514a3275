//! Error types for the session layer.

/// Main error type for wallet and contract operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No wallet provider is reachable, or no account has been bound yet.
    #[error("wallet unavailable: {0}")]
    WalletUnavailable(String),

    /// The user declined authorization, or the provider errored during
    /// connect.
    #[error("wallet authorization failed: {0}")]
    AuthorizationFailed(String),

    /// A submitted call was rejected, reverted, or never confirmed.
    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    /// A cache index that does not point at a tracked profile.
    #[error("no cached profile at index {index} ({len} tracked)")]
    InvalidCacheIndex { index: usize, len: usize },
}

impl SessionError {
    /// True when re-invoking the same operation can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::AuthorizationFailed(_) | Self::TransactionFailed(_)
        )
    }
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
