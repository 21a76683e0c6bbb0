use super::{RendererConfig, RendererError};
use crate::project::{ProjectInfo, RendererCreateInfo};
#[cfg(feature = "vulkan")]
use crate::vulkan::VulkanContext;

/// Entry object of the rendering engine.
///
/// When the crate is compiled with the `vulkan` feature, creating a renderer loads the Vulkan
/// library, creates an instance identified by the [RendererCreateInfo] and opens a logical
/// device on the best suited GPU. Otherwise the renderer is headless and only keeps track of
/// its identity.
pub struct Renderer {
    #[cfg(feature = "vulkan")]
    context: VulkanContext,
    create_info: RendererCreateInfo,
    config: RendererConfig,
}

impl Renderer {
    /// Creates a renderer with the default [RendererConfig].
    /// # Examples
    /// ``` no_run
    /// use cgs::project::{ApiVersion, ProjectInfo, RendererCreateInfo};
    /// use cgs::renderer::Renderer;
    ///
    /// let app = ProjectInfo::new("RendererMain", ApiVersion::new(0, 0, 0, 1));
    /// let renderer = Renderer::new(RendererCreateInfo::for_application(app)).unwrap();
    /// ```
    pub fn new(create_info: RendererCreateInfo) -> Result<Self, RendererError> {
        Renderer::with_config(create_info, RendererConfig::default())
    }

    /// Creates a renderer with the given configuration.
    pub fn with_config(
        create_info: RendererCreateInfo,
        config: RendererConfig,
    ) -> Result<Self, RendererError> {
        check_name(&create_info.application_info)?;
        check_name(&create_info.engine_info)?;
        log::info!(
            "Creating {} renderer for {} {} (engine {} {})",
            backend_name(),
            create_info.application_info.name,
            create_info.application_info.version,
            create_info.engine_info.name,
            create_info.engine_info.version
        );
        #[cfg(feature = "vulkan")]
        let context = VulkanContext::new(&create_info, &config)?;
        Ok(Renderer {
            #[cfg(feature = "vulkan")]
            context,
            create_info,
            config,
        })
    }

    /// Returns the parameters used to create this renderer.
    pub fn create_info(&self) -> &RendererCreateInfo {
        &self.create_info
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Returns the name of the backend driving this renderer.
    pub fn backend_name(&self) -> &'static str {
        backend_name()
    }

    /// Returns the name of the GPU used by this renderer, if any.
    pub fn device_name(&self) -> Option<&str> {
        #[cfg(feature = "vulkan")]
        {
            Some(self.context.device_name())
        }
        #[cfg(not(feature = "vulkan"))]
        {
            None
        }
    }

    /// Blocks until the GPU has finished every submitted work.
    pub fn wait_idle(&self) -> Result<(), RendererError> {
        #[cfg(feature = "vulkan")]
        self.context.wait_idle()?;
        Ok(())
    }
}

const fn backend_name() -> &'static str {
    if cfg!(feature = "vulkan") {
        "vulkan"
    } else {
        "headless"
    }
}

/// Names are handed to the driver as C strings.
fn check_name(info: &ProjectInfo) -> Result<(), RendererError> {
    let reason = if info.name.is_empty() {
        Some("the name is empty")
    } else if info.name.contains('\0') {
        Some("contains a NUL byte")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(RendererError::InvalidName {
            name: info.name.clone(),
            reason,
        }),
        None => Ok(()),
    }
}
