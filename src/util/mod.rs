//! Small shared helpers with no state of their own.

pub mod countdown;
pub mod format;
