use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const VARIANT_SHIFT: u32 = 29;
const MAJOR_SHIFT: u32 = 22;
const MINOR_SHIFT: u32 = 12;
const VARIANT_MASK: u32 = 0x7;
const MAJOR_MASK: u32 = 0x7F;
const MINOR_MASK: u32 = 0x3FF;
const PATCH_MASK: u32 = 0xFFF;

/// A version number packed into a single 32-bit word.
///
/// The layout is the same used by Vulkan for `VkApplicationInfo`:
/// - `variant` occupies the 3 most significant bits.
/// - `major` occupies the next 7 bits.
/// - `minor` occupies the next 10 bits.
/// - `patch` occupies the 12 least significant bits.
///
/// Ordering compares the packed word, so the variant is the most significant field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ApiVersion(u32);

impl ApiVersion {
    /// Vulkan 1.0 API version.
    pub const VULKAN_1_0: ApiVersion = ApiVersion::new(0, 1, 0, 0);
    /// Vulkan 1.1 API version.
    pub const VULKAN_1_1: ApiVersion = ApiVersion::new(0, 1, 1, 0);
    /// Vulkan 1.2 API version.
    pub const VULKAN_1_2: ApiVersion = ApiVersion::new(0, 1, 2, 0);
    /// Vulkan 1.3 API version.
    pub const VULKAN_1_3: ApiVersion = ApiVersion::new(0, 1, 3, 0);

    /// Packs the four components into a version.
    ///
    /// Components wider than their bit field are truncated to the field width. Use
    /// [ApiVersion::try_new] to reject them instead.
    /// # Examples
    /// ```
    /// use cgs::project::ApiVersion;
    ///
    /// let version = ApiVersion::new(0, 0, 0, 1);
    ///
    /// assert_eq!(version.raw(), 1);
    /// assert_eq!(version.patch(), 1);
    /// ```
    pub const fn new(variant: u32, major: u32, minor: u32, patch: u32) -> ApiVersion {
        ApiVersion(
            ((variant & VARIANT_MASK) << VARIANT_SHIFT)
                | ((major & MAJOR_MASK) << MAJOR_SHIFT)
                | ((minor & MINOR_MASK) << MINOR_SHIFT)
                | (patch & PATCH_MASK),
        )
    }

    /// Packs the four components into a version, failing if any of them does not fit in its bit
    /// field.
    /// # Examples
    /// ```
    /// use cgs::project::ApiVersion;
    ///
    /// assert!(ApiVersion::try_new(0, 1, 2, 3).is_ok());
    /// assert!(ApiVersion::try_new(0, 128, 0, 0).is_err());
    /// ```
    pub fn try_new(
        variant: u32,
        major: u32,
        minor: u32,
        patch: u32,
    ) -> Result<ApiVersion, VersionError> {
        check_field("variant", variant, VARIANT_MASK)?;
        check_field("major", major, MAJOR_MASK)?;
        check_field("minor", minor, MINOR_MASK)?;
        check_field("patch", patch, PATCH_MASK)?;
        Ok(ApiVersion::new(variant, major, minor, patch))
    }

    /// Wraps an already packed version word.
    pub const fn from_raw(raw: u32) -> ApiVersion {
        ApiVersion(raw)
    }

    /// Returns the packed version word.
    pub const fn raw(&self) -> u32 {
        self.0
    }

    pub const fn variant(&self) -> u32 {
        self.0 >> VARIANT_SHIFT
    }

    pub const fn major(&self) -> u32 {
        (self.0 >> MAJOR_SHIFT) & MAJOR_MASK
    }

    pub const fn minor(&self) -> u32 {
        (self.0 >> MINOR_SHIFT) & MINOR_MASK
    }

    pub const fn patch(&self) -> u32 {
        self.0 & PATCH_MASK
    }
}

fn check_field(field: &'static str, value: u32, max: u32) -> Result<(), VersionError> {
    if value > max {
        Err(VersionError::FieldOverflow { field, value, max })
    } else {
        Ok(())
    }
}

impl From<ApiVersion> for u32 {
    fn from(version: ApiVersion) -> Self {
        version.0
    }
}

impl From<u32> for ApiVersion {
    fn from(raw: u32) -> Self {
        ApiVersion(raw)
    }
}

impl Display for ApiVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.variant(),
            self.major(),
            self.minor(),
            self.patch()
        )
    }
}

impl FromStr for ApiVersion {
    type Err = VersionError;

    /// Parses either `major.minor.patch` (variant 0) or `variant.major.minor.patch`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s
            .trim()
            .split('.')
            .map(|field| {
                field
                    .parse::<u32>()
                    .map_err(|_| VersionError::Malformed(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        match fields[..] {
            [major, minor, patch] => ApiVersion::try_new(0, major, minor, patch),
            [variant, major, minor, patch] => ApiVersion::try_new(variant, major, minor, patch),
            _ => Err(VersionError::Malformed(s.to_string())),
        }
    }
}

/// Error returned when building an [ApiVersion] from invalid components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// A component does not fit in its bit field.
    FieldOverflow {
        field: &'static str,
        value: u32,
        max: u32,
    },
    /// The textual version is not in the `[variant.]major.minor.patch` form.
    Malformed(String),
}

impl Display for VersionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionError::FieldOverflow { field, value, max } => {
                write!(f, "version {} {} exceeds the maximum of {}", field, value, max)
            }
            VersionError::Malformed(s) => write!(
                f,
                "malformed version \"{}\", expected [variant.]major.minor.patch",
                s
            ),
        }
    }
}

impl Error for VersionError {}

#[cfg(test)]
mod tests {
    use super::{ApiVersion, VersionError};

    #[test]
    fn patch_only_packs_to_one() {
        assert_eq!(ApiVersion::new(0, 0, 0, 1).raw(), 1);
    }

    #[test]
    fn fields_occupy_their_bits() {
        assert_eq!(ApiVersion::new(1, 0, 0, 0).raw(), 1 << 29);
        assert_eq!(ApiVersion::new(0, 1, 0, 0).raw(), 1 << 22);
        assert_eq!(ApiVersion::new(0, 0, 1, 0).raw(), 1 << 12);
        assert_eq!(ApiVersion::new(7, 127, 1023, 4095).raw(), u32::MAX);
    }

    #[test]
    fn accessors_unpack() {
        let version = ApiVersion::new(3, 100, 700, 4000);
        assert_eq!(version.variant(), 3);
        assert_eq!(version.major(), 100);
        assert_eq!(version.minor(), 700);
        assert_eq!(version.patch(), 4000);
        assert_eq!(ApiVersion::from_raw(version.raw()), version);
    }

    #[test]
    fn new_truncates_wide_fields() {
        let version = ApiVersion::new(0, 0, 0, 0x1001);
        assert_eq!(version.patch(), 1);
        assert_eq!(version.minor(), 0);
    }

    #[test]
    fn try_new_rejects_overflow() {
        let err = ApiVersion::try_new(0, 0, 1024, 0).unwrap_err();
        assert_eq!(
            err,
            VersionError::FieldOverflow {
                field: "minor",
                value: 1024,
                max: 1023
            }
        );
        assert!(ApiVersion::try_new(8, 0, 0, 0).is_err());
    }

    #[test]
    fn vulkan_constants_match_loader_layout() {
        assert_eq!(ApiVersion::VULKAN_1_0.raw(), 0x0040_0000);
        assert_eq!(ApiVersion::VULKAN_1_2.raw(), 0x0040_2000);
        assert!(ApiVersion::VULKAN_1_3 > ApiVersion::VULKAN_1_2);
    }

    #[test]
    fn parse_three_and_four_fields() {
        let short = "1.2.3".parse::<ApiVersion>().unwrap();
        assert_eq!(short, ApiVersion::new(0, 1, 2, 3));
        let long = "1.0.0.1".parse::<ApiVersion>().unwrap();
        assert_eq!(long, ApiVersion::new(1, 0, 0, 1));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("1.2".parse::<ApiVersion>().is_err());
        assert!("a.b.c".parse::<ApiVersion>().is_err());
        assert!("1.2.3.4.5".parse::<ApiVersion>().is_err());
        assert!("0.0.5000".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        let version = ApiVersion::new(0, 0, 0, 1);
        assert_eq!(version.to_string(), "0.0.0.1");
        assert_eq!(version.to_string().parse::<ApiVersion>().unwrap(), version);
    }
}
