pub mod animation;
pub mod builder;
pub mod picking;
pub mod render;
