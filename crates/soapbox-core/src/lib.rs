// ABOUTME: Core library for soapbox, containing the feedback domain types and codec.
// ABOUTME: This crate defines the record schema shared by the store and any front end.

pub mod codec;
pub mod record;
pub mod subject;

pub use record::{ANONYMOUS, Feedback, FeedbackDraft};
pub use subject::{Subject, SubjectCatalog};
