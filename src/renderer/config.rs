use crate::project::ApiVersion;
use std::str::FromStr;

/// Whether the Vulkan validation layers should be enabled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Validation {
    /// Enabled in debug builds, disabled in release builds.
    #[default]
    Auto,
    Enabled,
    Disabled,
}

impl Validation {
    /// Resolves the setting for the current build.
    pub fn is_enabled(&self) -> bool {
        match self {
            Validation::Auto => cfg!(debug_assertions),
            Validation::Enabled => true,
            Validation::Disabled => false,
        }
    }
}

impl FromStr for Validation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Validation::Auto),
            "on" | "enabled" | "true" => Ok(Validation::Enabled),
            "off" | "disabled" | "false" => Ok(Validation::Disabled),
            _ => Err(format!(
                "unknown validation mode \"{}\", expected auto, on or off",
                s
            )),
        }
    }
}

/// Tunables of the [Renderer](crate::renderer::Renderer) that are not part of the project
/// identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// Enables the Khronos validation layers and routes their messages to the logger.
    pub validation: Validation,
    /// Use the GPU with this id instead of the automatically selected one.
    ///
    /// The id is composed by the vendor id in the 32 most significant bits and the device id in
    /// the 32 least significant bits. If no device matches, the default one is used.
    pub device_id: Option<u64>,
    /// Vulkan API version requested to the driver.
    pub api_version: ApiVersion,
}

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig {
            validation: Validation::Auto,
            device_id: None,
            api_version: ApiVersion::VULKAN_1_2,
        }
    }
}
