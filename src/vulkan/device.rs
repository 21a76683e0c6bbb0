use super::instance::VulkanInstance;
use super::physical::PhysicalDeviceVulkan;
use crate::renderer::RendererError;
use ash::vk;

/// Logical device with a single graphics queue.
pub struct DeviceVulkan {
    logical: ash::Device,
    graphics_queue: vk::Queue,
}

impl DeviceVulkan {
    pub fn new(
        instance: &VulkanInstance,
        physical: &PhysicalDeviceVulkan,
    ) -> Result<Self, RendererError> {
        let graphics_family = physical
            .graphics_family()
            .ok_or(RendererError::NoCompatibleDevice)?;
        let priorities = [1.0_f32];
        let queues_ci = [vk::DeviceQueueCreateInfo {
            queue_family_index: graphics_family,
            queue_count: 1,
            p_queue_priorities: priorities.as_ptr(),
            ..Default::default()
        }];
        let device_ci = vk::DeviceCreateInfo {
            s_type: vk::StructureType::DEVICE_CREATE_INFO,
            queue_create_info_count: queues_ci.len() as u32,
            p_queue_create_infos: queues_ci.as_ptr(),
            ..Default::default()
        };
        let logical = unsafe {
            instance
                .vk_instance()
                .create_device(physical.device, &device_ci, None)
        }?;
        let graphics_queue = unsafe { logical.get_device_queue(graphics_family, 0) };
        log::info!(
            "Opened device {} (graphics family {})",
            physical.name(),
            graphics_family
        );
        Ok(DeviceVulkan {
            logical,
            graphics_queue,
        })
    }

    /// Blocks until the graphics queue, the only one of this device, is idle.
    pub fn wait_idle(&self) -> Result<(), RendererError> {
        unsafe { self.logical.queue_wait_idle(self.graphics_queue) }?;
        Ok(())
    }
}

impl Drop for DeviceVulkan {
    fn drop(&mut self) {
        unsafe {
            self.logical.destroy_device(None);
        }
    }
}
