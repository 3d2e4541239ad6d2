pub mod uptime;

pub use uptime::*;
