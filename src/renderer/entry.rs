use super::{Renderer, RendererConfig, RendererError};
use crate::math::{Matrix4, Vec2, Vec3};
use crate::project::{ApiVersion, ProjectInfo, RendererCreateInfo};
use std::ffi::{c_char, c_int, CStr};

/// Combines the sample geometry into a single integer.
///
/// Returns `trunc(v2.x * v2.y + v3.x * v3.y * v3.z) * trunc(mat[0][0])`, where both conversions
/// truncate towards zero and saturate at the `i32` bounds. The product wraps around on overflow,
/// in debug and release builds alike.
/// # Examples
/// ```
/// use cgs::math::{Matrix4, Vec2, Vec3};
/// use cgs::renderer::bootstrap_value;
///
/// let value = bootstrap_value(
///     &Vec2::new(10.0, 2.0),
///     &Vec3::new(2.5, 5.0, 7.5),
///     &Matrix4::default(),
/// );
///
/// assert_eq!(value, 113);
/// ```
pub fn bootstrap_value(vec2: &Vec2, vec3: &Vec3, mat: &Matrix4) -> i32 {
    let geometry = (vec2.x * vec2.y) + (vec3.x * vec3.y * vec3.z);
    (geometry as i32).wrapping_mul(mat.at(0, 0) as i32)
}

/// Brings up a renderer for the given application and returns the bootstrap value.
///
/// Equivalent to [renderer_main_with_config] with the default [RendererConfig].
pub fn renderer_main(application_info: &ProjectInfo) -> Result<i32, RendererError> {
    renderer_main_with_config(application_info, RendererConfig::default())
}

/// Brings up a renderer for the given application and configuration.
///
/// The renderer is created with this crate as engine, and the sample vectors `(10, 2)` and
/// `(2.5, 5, 7.5)` are combined with a default matrix through [bootstrap_value].
pub fn renderer_main_with_config(
    application_info: &ProjectInfo,
    config: RendererConfig,
) -> Result<i32, RendererError> {
    let vec2 = Vec2::new(10.0, 2.0);
    let vec3 = Vec3::new(2.5, 5.0, 7.5);
    let mat = Matrix4::default();
    let create_info = RendererCreateInfo::for_application(application_info.clone());
    let renderer = Renderer::with_config(create_info, config)?;
    if let Some(device) = renderer.device_name() {
        log::info!("Renderer running on {}", device);
    }
    let result = bootstrap_value(&vec2, &vec3, &mat);
    log::debug!("Bootstrap value for {}: {}", application_info.name, result);
    Ok(result)
}

/// Project identity as passed through the C interface.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct RawProjectInfo {
    /// NUL-terminated, UTF-8 encoded name.
    pub name: *const c_char,
    /// Packed version, see [ApiVersion].
    pub version: u32,
}

/// C entry point of the library. Same as [renderer_main].
///
/// Returns -1 if `info` is null, the name is null or not UTF-8, or the renderer can not be
/// created. The reason is reported through the logger.
///
/// # Safety
/// `info` must be null or point to a valid [RawProjectInfo], whose `name` is null or points to
/// a NUL-terminated string alive for the whole call.
#[no_mangle]
pub unsafe extern "C" fn cgs_renderer_main(info: *const RawProjectInfo) -> c_int {
    let info = match info.as_ref() {
        Some(info) => info,
        None => {
            log::error!("cgs_renderer_main called with a null project info");
            return -1;
        }
    };
    if info.name.is_null() {
        log::error!("cgs_renderer_main called with a null project name");
        return -1;
    }
    let name = match CStr::from_ptr(info.name).to_str() {
        Ok(name) => name,
        Err(err) => {
            log::error!("Project name is not valid UTF-8: {}", err);
            return -1;
        }
    };
    let application_info = ProjectInfo::new(name, ApiVersion::from_raw(info.version));
    match renderer_main(&application_info) {
        Ok(result) => result,
        Err(err) => {
            log::error!("{}", err);
            -1
        }
    }
}
