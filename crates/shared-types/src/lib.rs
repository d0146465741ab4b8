pub mod error;
pub mod feature_flags;

pub mod clinic;
pub mod config;
pub mod forms;
pub mod gate;
pub mod session;

pub use error::*;
pub use feature_flags::*;

pub use clinic::*;
pub use config::*;
pub use forms::*;
pub use gate::*;
pub use session::*;
