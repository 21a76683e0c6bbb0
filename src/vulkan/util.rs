use std::ffi::{c_char, CStr};

/// converts a fixed-size C string, as found in Vulkan properties, to a Rust String
pub fn cchars_to_string(cchars: &[c_char]) -> String {
    let raw_string = unsafe {
        let pointer = cchars.as_ptr();
        CStr::from_ptr(pointer)
    };
    raw_string.to_string_lossy().into_owned()
}
