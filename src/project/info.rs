use super::ApiVersion;

/// Name of the engine reported to the graphics driver.
pub const ENGINE_NAME: &str = "Renderer";
/// Version of the engine reported to the graphics driver.
pub const ENGINE_VERSION: ApiVersion = ApiVersion::new(0, 0, 0, 1);

/// Identity of a project, either the application or the engine.
///
/// This is what ends up in `VkApplicationInfo` when a Vulkan instance is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectInfo {
    /// Human readable name of the project.
    pub name: String,
    /// Packed version of the project.
    pub version: ApiVersion,
}

impl ProjectInfo {
    /// Creates a new project identity.
    /// # Examples
    /// ```
    /// use cgs::project::{ApiVersion, ProjectInfo};
    ///
    /// let info = ProjectInfo::new("RendererMain", ApiVersion::new(0, 0, 0, 1));
    ///
    /// assert_eq!(info.name, "RendererMain");
    /// assert_eq!(info.version.raw(), 1);
    /// ```
    pub fn new<S: Into<String>>(name: S, version: ApiVersion) -> ProjectInfo {
        ProjectInfo {
            name: name.into(),
            version,
        }
    }

    /// Returns the identity of this engine.
    pub fn engine() -> ProjectInfo {
        ProjectInfo::new(ENGINE_NAME, ENGINE_VERSION)
    }
}

/// Parameters required to create a [Renderer](crate::renderer::Renderer).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RendererCreateInfo {
    /// Identity of the application using the renderer.
    pub application_info: ProjectInfo,
    /// Identity of the engine driving the renderer.
    pub engine_info: ProjectInfo,
}

impl RendererCreateInfo {
    pub fn new(application_info: ProjectInfo, engine_info: ProjectInfo) -> RendererCreateInfo {
        RendererCreateInfo {
            application_info,
            engine_info,
        }
    }

    /// Creates the parameters for the given application, using this crate as engine.
    pub fn for_application(application_info: ProjectInfo) -> RendererCreateInfo {
        RendererCreateInfo::new(application_info, ProjectInfo::engine())
    }
}
