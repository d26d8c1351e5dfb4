pub mod responses;
pub mod user;

pub use responses::*;
pub use user::*;
