pub mod id;
pub mod password;
pub mod time;

pub use id::*;
pub use password::*;
pub use time::*;
