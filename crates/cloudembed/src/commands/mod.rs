//! CLI command implementations.

pub(crate) mod buttons;
pub(crate) mod codes;
pub(crate) mod render;

pub(crate) use buttons::ButtonsArgs;
pub(crate) use codes::CodesArgs;
pub(crate) use render::RenderArgs;
