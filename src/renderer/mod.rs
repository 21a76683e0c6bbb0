mod config;
pub use self::config::RendererConfig;
pub use self::config::Validation;
mod entry;
pub use self::entry::bootstrap_value;
pub use self::entry::cgs_renderer_main;
pub use self::entry::renderer_main;
pub use self::entry::renderer_main_with_config;
pub use self::entry::RawProjectInfo;
mod error;
pub use self::error::RendererError;
#[allow(clippy::module_inception)]
mod renderer;
pub use self::renderer::Renderer;
mod selection;
pub use self::selection::select_device;
pub use self::selection::DeviceCandidate;
pub use self::selection::DeviceKind;
