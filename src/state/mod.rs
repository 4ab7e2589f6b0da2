pub mod touch;

pub use touch::TouchSessions;
