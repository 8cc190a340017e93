mod storage_error;
mod venue_error;

pub use storage_error::StorageError;
pub use venue_error::VenueError;

/// Result alias used across the workspace.
pub type VenueResult<T> = Result<T, VenueError>;
