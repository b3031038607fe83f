//! Roadmap Lifecycle Manager.
//!
//! States: Generating -> Active -> (Updated)* -> Deleted. There is no
//! separate "completed" terminal state; 100% progress is just a value and the
//! roadmap stays editable until the owner deletes it.

pub mod handlers;
pub mod lifecycle;
pub mod validation;
