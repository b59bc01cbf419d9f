mod manager;
mod traits;

pub use manager::App;
pub use traits::{AppEvent, Presentation};
