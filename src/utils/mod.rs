pub(crate) mod date;
pub(crate) mod debug;

pub(crate) use date::format_mtime;
pub(crate) use debug::{debug_enabled, set_debug};
