//! Resume templates: style resolution, the template factory, built-in
//! presets and the registry that serves them.

pub mod dates;
pub mod factory;
pub mod handlers;
pub mod presets;
pub mod registry;
pub mod style;
pub mod tree;
