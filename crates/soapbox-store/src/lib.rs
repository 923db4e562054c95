// ABOUTME: Persistence layer for soapbox, binding the feedback codec to disk.
// ABOUTME: Provides the file store and the query-capable feedback repository.

pub mod file;
pub mod repository;

pub use file::{FeedbackFile, StoreError};
pub use repository::{FeedbackRepository, faculty_id_from_entry};
