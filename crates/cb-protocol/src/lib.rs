//! Shared types for Car-bon (decoder, estimators, HTTP transport).

pub mod error;
pub mod estimate;
pub mod reading;
pub mod requests;
pub mod session;
pub mod trip;

pub use error::*;
pub use estimate::*;
pub use reading::*;
pub use requests::*;
pub use session::*;
pub use trip::*;
