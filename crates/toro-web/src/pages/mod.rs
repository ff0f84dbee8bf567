//! Page Components

mod home;
mod tool;

pub use home::HomePage;
pub use tool::ToolPage;
