mod builder;
mod window;

pub use builder::ContextBuilder;
pub use window::ContextWindow;
