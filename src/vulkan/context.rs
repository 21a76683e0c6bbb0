use super::device::DeviceVulkan;
use super::instance::VulkanInstance;
use super::physical::PhysicalDeviceVulkan;
use crate::project::RendererCreateInfo;
use crate::renderer::{RendererConfig, RendererError};

/// Vulkan objects owned by a [Renderer](crate::renderer::Renderer).
pub struct VulkanContext {
    device: DeviceVulkan,
    device_name: String,
    //the following one must be destroyed for last
    _instance: VulkanInstance,
}

impl VulkanContext {
    pub fn new(
        create_info: &RendererCreateInfo,
        config: &RendererConfig,
    ) -> Result<Self, RendererError> {
        let instance = VulkanInstance::new(create_info, config)?;
        let physical = PhysicalDeviceVulkan::select(&instance, config.device_id)?;
        let device_name = physical.name();
        let device = DeviceVulkan::new(&instance, &physical)?;
        log::debug!(
            "Vulkan context ready (validation layers: {})",
            instance.has_validations()
        );
        Ok(VulkanContext {
            device,
            device_name,
            _instance: instance,
        })
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn wait_idle(&self) -> Result<(), RendererError> {
        self.device.wait_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::VulkanContext;
    use crate::project::{ApiVersion, ProjectInfo, RendererCreateInfo};
    use crate::renderer::{RendererConfig, RendererError};

    #[test]
    fn create_and_idle() -> Result<(), RendererError> {
        let ci = RendererCreateInfo::for_application(ProjectInfo::new(
            "context-test",
            ApiVersion::new(0, 0, 0, 1),
        ));
        let context = VulkanContext::new(&ci, &RendererConfig::default())?;
        assert!(!context.device_name().is_empty());
        context.wait_idle()?;
        Ok(())
    }
}
