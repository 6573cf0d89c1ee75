pub mod config;
pub mod extent;
pub mod input;
pub mod series;
pub mod state;

pub use config::*;
pub use extent::*;
pub use input::*;
pub use series::*;
pub use state::*;
