//! Error types for order total search.

use thiserror::Error;

/// Errors surfaced while registering against the host platform.
///
/// Registration is the only operation in this crate that can fail. Once the
/// handler is registered, every degenerate per-request input (non-numeric
/// terms, zero or negative totals) resolves to pass-through instead of an
/// error, so the request path has no error type at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderSearchError {
    /// The host e-commerce platform is not installed or not active.
    #[error("Order Total Search requires the e-commerce platform to be installed and active.")]
    PlatformInactive,

    /// Orders are not stored in the dedicated high-performance table, so the
    /// `total_amount` attribute cannot be queried directly.
    #[error(
        "Order Total Search requires high-performance order storage to be enabled on the host."
    )]
    HighPerformanceStorageDisabled,
}

/// Result type for order total search operations.
pub type Result<T> = std::result::Result<T, OrderSearchError>;
