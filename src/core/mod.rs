//! Core module - session selection and message merging

mod locator;
mod merger;
mod message;
mod types;

pub(crate) use locator::locate_session;
pub(crate) use merger::merge_messages;
pub(crate) use types::{MergedSession, Session};
