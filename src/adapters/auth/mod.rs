//! Authentication adapters implementing the `SessionValidator` port.

mod gotrue;
mod mock;

pub use gotrue::{GoTrueConfig, GoTrueSessionValidator};
pub use mock::MockSessionValidator;
