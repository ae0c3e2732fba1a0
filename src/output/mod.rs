mod json;

pub(crate) use json::{destination_dir, write_session};
