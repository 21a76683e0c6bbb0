mod context;
mod debug;
mod device;
mod instance;
mod physical;
mod util;

// entry point for vulkan
pub use self::context::VulkanContext;
