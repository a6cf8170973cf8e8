pub mod bearer;
pub mod local;

pub use bearer::bearer_token;
pub use bearer::BearerStrategy;
pub use local::LocalStrategy;
