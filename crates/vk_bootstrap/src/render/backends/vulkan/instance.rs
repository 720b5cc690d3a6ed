//! Vulkan instance management
//!
//! Loads the Vulkan loader through ash, enumerates instance extensions and
//! creates the instance from a negotiated [`InstanceRequest`].

use ash::{vk, Entry, Instance};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use thiserror::Error;

use crate::capabilities::{platform::InstanceFlags, Capability, CapabilityCatalog};
use crate::render::bootstrap::{GraphicsBackend, InstanceRequest};

/// Vulkan-specific error types
#[derive(Error, Debug)]
pub enum VulkanError {
    /// The Vulkan loader library could not be found or loaded
    #[error("Failed to load Vulkan: {0}")]
    LoaderUnavailable(String),

    /// General Vulkan API error with result code
    #[error("Vulkan API error: {0:?}")]
    Api(vk::Result),

    /// A name could not be passed to Vulkan as a C string
    #[error("Invalid name for Vulkan: {0:?}")]
    InvalidName(String),
}

/// Result type for Vulkan operations
pub type VulkanResult<T> = Result<T, VulkanError>;

/// Vulkan loader entry points
pub struct AshBackend {
    entry: Entry,
}

impl AshBackend {
    /// Load the system Vulkan loader
    pub fn load() -> VulkanResult<Self> {
        let entry = unsafe { Entry::load() }
            .map_err(|e| VulkanError::LoaderUnavailable(e.to_string()))?;
        Ok(Self { entry })
    }

    /// Wrap an already loaded entry
    pub fn from_entry(entry: Entry) -> Self {
        Self { entry }
    }
}

fn c_string(name: &str) -> VulkanResult<CString> {
    CString::new(name).map_err(|_| VulkanError::InvalidName(name.to_string()))
}

const fn version(major: u32, minor: u32, patch: u32) -> u32 {
    vk::make_api_version(0, major, minor, patch)
}

fn create_flags(flags: InstanceFlags) -> vk::InstanceCreateFlags {
    let mut vk_flags = vk::InstanceCreateFlags::empty();
    if flags.contains(InstanceFlags::ENUMERATE_PORTABILITY) {
        vk_flags |= vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR;
    }
    vk_flags
}

impl GraphicsBackend for AshBackend {
    type Instance = VulkanInstance;
    type Error = VulkanError;

    fn available_capabilities(&self) -> VulkanResult<CapabilityCatalog> {
        let properties = self
            .entry
            .enumerate_instance_extension_properties(None)
            .map_err(VulkanError::Api)?;

        Ok(properties
            .iter()
            .map(|property| {
                let name = unsafe { CStr::from_ptr(property.extension_name.as_ptr()) };
                Capability::new(name.to_string_lossy(), property.spec_version)
            })
            .collect())
    }

    fn create_instance(&self, request: &InstanceRequest) -> VulkanResult<VulkanInstance> {
        let metadata = &request.metadata;
        let app_name = c_string(&metadata.application_name)?;
        let engine_name = c_string(&metadata.engine_name)?;

        let (app_major, app_minor, app_patch) = metadata.application_version;
        let (engine_major, engine_minor, engine_patch) = metadata.engine_version;
        let (api_major, api_minor) = metadata.api_version;

        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(version(app_major, app_minor, app_patch))
            .engine_name(&engine_name)
            .engine_version(version(engine_major, engine_minor, engine_patch))
            .api_version(version(api_major, api_minor, 0));

        let extension_names = request
            .extensions
            .iter()
            .map(|name| c_string(name))
            .collect::<VulkanResult<Vec<CString>>>()?;
        let extension_ptrs: Vec<*const c_char> =
            extension_names.iter().map(|name| name.as_ptr()).collect();

        let create_info = vk::InstanceCreateInfo::builder()
            .flags(create_flags(request.flags))
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs);

        let instance = unsafe {
            self.entry
                .create_instance(&create_info, None)
                .map_err(VulkanError::Api)?
        };

        Ok(VulkanInstance {
            instance,
            enabled_extensions: request.extensions.clone(),
        })
    }
}

/// Vulkan instance wrapper with RAII cleanup
pub struct VulkanInstance {
    instance: Instance,
    enabled_extensions: Vec<String>,
}

impl VulkanInstance {
    /// Raw ash instance for later device selection
    pub const fn raw(&self) -> &Instance {
        &self.instance
    }

    /// Raw Vulkan handle
    pub fn handle(&self) -> vk::Instance {
        self.instance.handle()
    }

    /// Extensions enabled at creation
    pub fn enabled_extensions(&self) -> &[String] {
        &self.enabled_extensions
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        log::debug!("Destroying Vulkan instance");
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portability_flag_maps_to_vulkan() {
        assert_eq!(
            create_flags(InstanceFlags::ENUMERATE_PORTABILITY),
            vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR
        );
        assert!(create_flags(InstanceFlags::empty()).is_empty());
    }

    #[test]
    fn test_version_packing() {
        assert_eq!(version(1, 0, 0), vk::API_VERSION_1_0);
        assert_eq!(version(1, 2, 0), vk::API_VERSION_1_2);
    }

    #[test]
    fn test_interior_nul_rejected() {
        assert!(matches!(c_string("VK_\0bad"), Err(VulkanError::InvalidName(_))));
    }
}
