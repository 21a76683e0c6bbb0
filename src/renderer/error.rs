use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors that can happen while creating or driving a [Renderer](crate::renderer::Renderer).
#[derive(Debug)]
pub enum RendererError {
    /// A project name can not be handed to the graphics driver.
    InvalidName { name: String, reason: &'static str },
    /// The Vulkan loader could not be found or loaded.
    Loading(String),
    /// No GPU on the system satisfies the renderer requirements.
    NoCompatibleDevice,
    /// A Vulkan call failed.
    #[cfg(feature = "vulkan")]
    Vulkan(ash::vk::Result),
}

impl Display for RendererError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RendererError::InvalidName { name, reason } => {
                write!(f, "Invalid project name {:?}: {}", name, reason)
            }
            RendererError::Loading(err) => write!(f, "Failed to load the Vulkan library: {}", err),
            RendererError::NoCompatibleDevice => write!(f, "Failed to find a compatible device"),
            #[cfg(feature = "vulkan")]
            RendererError::Vulkan(err) => write!(f, "Vulkan call failed: {}", err),
        }
    }
}

impl Error for RendererError {}

#[cfg(feature = "vulkan")]
impl From<ash::vk::Result> for RendererError {
    fn from(err: ash::vk::Result) -> Self {
        RendererError::Vulkan(err)
    }
}

#[cfg(feature = "vulkan")]
impl From<ash::LoadingError> for RendererError {
    fn from(err: ash::LoadingError) -> Self {
        RendererError::Loading(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::RendererError;

    #[test]
    fn display_invalid_name() {
        let err = RendererError::InvalidName {
            name: "a\0b".to_string(),
            reason: "contains a NUL byte",
        };
        assert_eq!(
            err.to_string(),
            "Invalid project name \"a\\0b\": contains a NUL byte"
        );
    }

    #[test]
    fn display_no_device() {
        let err = RendererError::NoCompatibleDevice;
        assert_eq!(err.to_string(), "Failed to find a compatible device");
    }
}
