//! Platform-mandatory additions to the negotiated capability list
//!
//! Some Vulkan implementations (MoltenVK on Apple platforms) are only
//! enumerated when the application opts in to portability enumeration. That
//! opt-in is not something the windowing layer asks for, so it is applied after
//! verification as a pure transformation keyed on a [`PlatformTag`].

use super::RequirementList;
use bitflags::bitflags;
use std::fmt;

/// Instance extension that enables enumeration of portability implementations
pub const PORTABILITY_ENUMERATION_EXTENSION: &str = "VK_KHR_portability_enumeration";

bitflags! {
    /// Backend-independent instance creation flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InstanceFlags: u32 {
        /// Include portability (non-conformant) implementations when enumerating
        const ENUMERATE_PORTABILITY = 1 << 0;
    }
}

/// Platform family the instance is being created on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTag {
    /// Microsoft Windows
    Windows,
    /// macOS and iOS, served through a portability layer
    Apple,
    /// Linux and other Unix-likes
    Linux,
    /// Anything else
    Other,
}

impl PlatformTag {
    /// Tag of the platform this binary was compiled for
    pub const fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::Apple
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(any(target_os = "linux", target_os = "freebsd", target_os = "openbsd")) {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Whether the platform only exposes Vulkan through portability enumeration
    pub const fn requires_portability_enumeration(self) -> bool {
        matches!(self, Self::Apple)
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::Apple => "apple",
            Self::Linux => "linux",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Extension list and flags that go into the instance creation request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NegotiatedCapabilities {
    /// Extensions to enable, windowing requirements first
    pub extensions: Vec<String>,
    /// Creation flags
    pub flags: InstanceFlags,
}

/// Append the platform-mandatory extensions and flags to a verified list
///
/// The input list is kept intact and in order; additions are appended and
/// never duplicated.
pub fn augment_for_platform(list: &RequirementList, platform: PlatformTag) -> NegotiatedCapabilities {
    let mut extensions = list.names().to_vec();
    let mut flags = InstanceFlags::empty();

    if platform.requires_portability_enumeration() {
        if !list.contains(PORTABILITY_ENUMERATION_EXTENSION) {
            extensions.push(PORTABILITY_ENUMERATION_EXTENSION.to_string());
        }
        flags |= InstanceFlags::ENUMERATE_PORTABILITY;
    }

    NegotiatedCapabilities { extensions, flags }
}
