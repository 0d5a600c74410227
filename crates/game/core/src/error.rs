//! Common error infrastructure for battle-core.
//!
//! This module provides the shared severity classification used across all
//! error types in the crate. Domain-specific errors (`CapacityError`,
//! `LoadoutError`) live next to the data they guard.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure domain has its own error type
//! - **Severity Classification**: Errors are categorized for handling strategies
//! - **Silent Gameplay Edges**: Missing targets or spent runes are not errors

/// Severity level of an error, used for categorization and handling strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Environment or setup failures that require investigation
/// - **Fatal**: Unrecoverable errors; the run must stop without partial results
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown deck entry, too many runes
    Validation,

    /// Internal error - the host environment failed us.
    ///
    /// Examples: worker thread pool construction
    Internal,

    /// Fatal error - a fixed capacity was exceeded mid-battle.
    ///
    /// Examples: attribute list overflow, roster overflow
    Fatal,
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
