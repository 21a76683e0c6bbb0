use super::debug::logger::VulkanDebugLogger;
use super::debug::ValidationLayers;
use crate::project::{ProjectInfo, RendererCreateInfo};
use crate::renderer::{RendererConfig, RendererError};
use ash::vk;
use std::ffi::{CStr, CString};
use std::ptr;

/// Contains the entry point for the vulkan library.
///
/// Vulkan library does not have a global state and application state is stored in this struct.
/// Alongside the application state, using [ash::Instance] the library loader [ash::Entry] is
/// stored.
pub struct VulkanInstance {
    logger: Option<VulkanDebugLogger>,
    instance: ash::Instance,
    // the library must stay loaded until the instance is destroyed
    _entry: ash::Entry,
}

impl VulkanInstance {
    /// Creates a new vulkan instance identified by the given application and engine.
    ///
    /// If validation is enabled in the config and the validation layers are installed,
    /// `VK_LAYER_KHRONOS_validation` and `VK_EXT_debug_utils` are enabled and every warning or
    /// error reported by the layers is forwarded to the logger.
    pub fn new(
        create_info: &RendererCreateInfo,
        config: &RendererConfig,
    ) -> Result<Self, RendererError> {
        let entry = unsafe { ash::Entry::load() }?;
        let validations = if config.validation.is_enabled() {
            let validations = ValidationLayers::application_default();
            if validations.check_support(&entry) {
                Some(validations)
            } else {
                log::warn!(
                    "Validation requested, but validation layers are not available. Is the vulkan SDK installed?"
                );
                None
            }
        } else {
            None
        };
        let mut extensions = Vec::new();
        if validations.is_some() {
            extensions.push(ash::extensions::ext::DebugUtils::name());
        }
        let layers = validations
            .as_ref()
            .map(|v| v.names())
            .unwrap_or_default();
        let instance = create_instance(&entry, create_info, config, &extensions, layers)?;
        let logger = if validations.is_some() {
            match VulkanDebugLogger::new(&entry, &instance) {
                Ok(logger) => Some(logger),
                Err(e) => {
                    unsafe { instance.destroy_instance(None) };
                    return Err(e);
                }
            }
        } else {
            None
        };
        Ok(VulkanInstance {
            logger,
            instance,
            _entry: entry,
        })
    }

    /// Returns the raw vulkan instance.
    pub fn vk_instance(&self) -> &ash::Instance {
        &self.instance
    }

    /// Returns true if the validation layers are active on this instance.
    pub fn has_validations(&self) -> bool {
        self.logger.is_some()
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        // the messenger belongs to the instance
        self.logger.take();
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}

fn to_cstring(info: &ProjectInfo) -> Result<CString, RendererError> {
    CString::new(info.name.as_str()).map_err(|_| RendererError::InvalidName {
        name: info.name.clone(),
        reason: "contains a NUL byte",
    })
}

/// Creates a new vulkan instance.
fn create_instance(
    entry: &ash::Entry,
    create_info: &RendererCreateInfo,
    config: &RendererConfig,
    extensions: &[&'static CStr],
    validations: &[CString],
) -> Result<ash::Instance, RendererError> {
    let application_name = to_cstring(&create_info.application_info)?;
    let engine_name = to_cstring(&create_info.engine_info)?;
    let app_info = vk::ApplicationInfo {
        s_type: vk::StructureType::APPLICATION_INFO,
        p_next: ptr::null(),
        p_application_name: application_name.as_ptr(),
        application_version: create_info.application_info.version.raw(),
        p_engine_name: engine_name.as_ptr(),
        engine_version: create_info.engine_info.version.raw(),
        api_version: config.api_version.raw(),
    };
    let extensions_array = extensions.iter().map(|x| x.as_ptr()).collect::<Vec<_>>();
    let validations_array = validations.iter().map(|x| x.as_ptr()).collect::<Vec<_>>();
    let creation_info = vk::InstanceCreateInfo {
        s_type: vk::StructureType::INSTANCE_CREATE_INFO,
        p_next: ptr::null(),
        flags: vk::InstanceCreateFlags::empty(),
        p_application_info: &app_info,
        enabled_layer_count: validations_array.len() as u32,
        pp_enabled_layer_names: validations_array.as_ptr(),
        enabled_extension_count: extensions_array.len() as u32,
        pp_enabled_extension_names: extensions_array.as_ptr(),
    };
    let instance = unsafe { entry.create_instance(&creation_info, None) }?;
    log::debug!(
        "Created Vulkan instance (API {}, {} layers, {} extensions)",
        config.api_version,
        validations_array.len(),
        extensions_array.len()
    );
    Ok(instance)
}

#[cfg(test)]
mod tests {
    use super::VulkanInstance;
    use crate::project::{ApiVersion, ProjectInfo, RendererCreateInfo};
    use crate::renderer::{RendererConfig, Validation};

    fn create_info() -> RendererCreateInfo {
        RendererCreateInfo::for_application(ProjectInfo::new(
            "instance-test",
            ApiVersion::new(0, 0, 0, 1),
        ))
    }

    #[test]
    fn create_default() {
        let instance = VulkanInstance::new(&create_info(), &RendererConfig::default());
        assert!(instance.is_ok())
    }

    #[test]
    fn create_without_validations() {
        let config = RendererConfig {
            validation: Validation::Disabled,
            ..Default::default()
        };
        let instance = VulkanInstance::new(&create_info(), &config).unwrap();
        assert!(!instance.has_validations());
    }
}
