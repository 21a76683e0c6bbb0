use super::instance::VulkanInstance;
use super::util::cchars_to_string;
use crate::renderer::{select_device, DeviceCandidate, DeviceKind, RendererError};
use ash::vk;

/// Wrapper for a physical device (`VkPhysicalDevice`), with its properties.
#[derive(Clone)]
pub struct PhysicalDeviceVulkan {
    pub device: vk::PhysicalDevice,
    pub properties: vk::PhysicalDeviceProperties,
    pub queue_families: Vec<vk::QueueFamilyProperties>,
}

impl PhysicalDeviceVulkan {
    /// Returns the id used to request this device explicitly.
    pub fn id(&self) -> u64 {
        DeviceCandidate::compose_id(self.properties.vendor_id, self.properties.device_id)
    }

    pub fn name(&self) -> String {
        cchars_to_string(&self.properties.device_name)
    }

    /// Returns the index of the queue family used for graphics operations.
    pub fn graphics_family(&self) -> Option<u32> {
        find_queue(&self.queue_families, |q| q.contains(vk::QueueFlags::GRAPHICS))
            .map(|index| index as u32)
    }

    /// Summarizes the device for [select_device].
    fn candidate(&self) -> DeviceCandidate {
        DeviceCandidate {
            id: self.id(),
            name: self.name(),
            kind: device_kind(self.properties.device_type),
            has_graphics: self.graphics_family().is_some(),
        }
    }

    /// Selects the best suited physical device.
    ///
    /// It is not possible to get a "default" GPU with vulkan, so this routine tries to select
    /// the best dedicated device possible, or the one with the given id if it exists.
    pub fn select(
        instance: &VulkanInstance,
        device_id: Option<u64>,
    ) -> Result<PhysicalDeviceVulkan, RendererError> {
        let all = PhysicalDeviceVulkan::list_all(instance)?;
        let candidates = all.iter().map(|d| d.candidate()).collect::<Vec<_>>();
        for candidate in &candidates {
            log::debug!(
                "Found {:?} device {} (id {}, graphics: {})",
                candidate.kind,
                candidate.name,
                candidate.id,
                candidate.has_graphics
            );
        }
        let index = select_device(&candidates, device_id).ok_or(RendererError::NoCompatibleDevice)?;
        Ok(all[index].clone())
    }

    /// Lists all the physical devices on the system.
    pub fn list_all(instance: &VulkanInstance) -> Result<Vec<PhysicalDeviceVulkan>, RendererError> {
        let vk_instance = instance.vk_instance();
        let physical_devices = unsafe { vk_instance.enumerate_physical_devices() }?;
        let mut retval = Vec::with_capacity(physical_devices.len());
        for device in physical_devices {
            let properties = unsafe { vk_instance.get_physical_device_properties(device) };
            let queue_families =
                unsafe { vk_instance.get_physical_device_queue_family_properties(device) };
            retval.push(PhysicalDeviceVulkan {
                device,
                properties,
                queue_families,
            });
        }
        Ok(retval)
    }
}

fn device_kind(device_type: vk::PhysicalDeviceType) -> DeviceKind {
    match device_type {
        vk::PhysicalDeviceType::DISCRETE_GPU => DeviceKind::Discrete,
        vk::PhysicalDeviceType::INTEGRATED_GPU => DeviceKind::Integrated,
        vk::PhysicalDeviceType::VIRTUAL_GPU => DeviceKind::Virtual,
        vk::PhysicalDeviceType::CPU => DeviceKind::Cpu,
        _ => DeviceKind::Other,
    }
}

// finds the queue family with the specified flags and returns the family with the most queues
// available
fn find_queue<F>(props: &[vk::QueueFamilyProperties], find_queue: F) -> Option<usize>
where
    F: Fn(vk::QueueFlags) -> bool,
{
    props
        .iter()
        .enumerate()
        .filter(|(_, prop)| prop.queue_count > 0 && find_queue(prop.queue_flags))
        .max_by_key(|(_, prop)| prop.queue_count)
        .map(|prop| prop.0)
}
