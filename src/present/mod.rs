pub mod config;
pub mod depth;

pub use config::{build_render_config, RenderConfig, TextFormat, UiControl, UiOption};
pub use depth::{parse_depth_chain, reorder_depths, DepthOption};
