mod models;
mod root;
mod util;

pub use models::*;
pub use root::*;
