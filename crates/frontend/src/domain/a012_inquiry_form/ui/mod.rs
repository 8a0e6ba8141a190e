pub mod builder;
pub mod list;
pub mod renderer;
pub mod submissions;
