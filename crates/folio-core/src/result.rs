//! Result type aliases for Folio.

use crate::FolioError;

/// A specialized `Result` type for Folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

/// A boxed future returning a `FolioResult`.
pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = FolioResult<T>> + Send + 'a>>;
