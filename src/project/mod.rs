mod info;
pub use self::info::ProjectInfo;
pub use self::info::RendererCreateInfo;
mod version;
pub use self::version::ApiVersion;
pub use self::version::VersionError;
