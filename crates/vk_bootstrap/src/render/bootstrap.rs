//! Instance bootstrap
//!
//! Turns application metadata and a verified capability list into exactly one
//! backend instance. The sequence is all-or-nothing:
//!
//! 1. take the windowing layer's [`RequirementList`]
//! 2. query the backend's [`CapabilityCatalog`]
//! 3. [`verify`] one against the other, failing before any creation call
//! 4. append platform-mandatory extensions ([`augment_for_platform`])
//! 5. dispatch an [`InstanceRequest`] to the backend
//!
//! There are no retries: the same inputs would produce the same verdict.

use crate::capabilities::{
    platform::{augment_for_platform, InstanceFlags, PlatformTag},
    verify, CapabilityCatalog, RequirementList, RequirementSource, VerificationVerdict,
};
use crate::core::config::InstanceConfig;
use thiserror::Error;

/// Boxed backend error carried as an opaque reason
pub type BackendReason = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Instance bootstrap errors
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The backend could not be reached to enumerate capabilities
    #[error("Failed to query instance extensions: {0}")]
    CapabilityQuery(#[source] BackendReason),

    /// Required capabilities are absent from the backend's catalog
    #[error("Required instance extensions not supported: {}", .missing.join(", "))]
    VerificationFailure {
        /// Every missing capability name
        missing: Vec<String>,
    },

    /// The backend refused to create the instance after verification passed
    #[error("Instance creation rejected: {0}")]
    BackendRejection(#[source] BackendReason),
}

impl BootstrapError {
    /// Missing capability names for a verification failure, empty otherwise
    pub fn missing(&self) -> &[String] {
        match self {
            Self::VerificationFailure { missing } => missing,
            _ => &[],
        }
    }
}

/// Application metadata embedded in the creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMetadata {
    /// Application name
    pub application_name: String,
    /// Application version (major, minor, patch)
    pub application_version: (u32, u32, u32),
    /// Engine name
    pub engine_name: String,
    /// Engine version (major, minor, patch)
    pub engine_version: (u32, u32, u32),
    /// Vulkan API version (major, minor)
    pub api_version: (u32, u32),
}

impl From<&InstanceConfig> for AppMetadata {
    fn from(config: &InstanceConfig) -> Self {
        Self {
            application_name: config.application_name.clone(),
            application_version: config.application_version,
            engine_name: config.engine_name.clone(),
            engine_version: config.engine_version,
            api_version: config.api_version,
        }
    }
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self::from(&InstanceConfig::default())
    }
}

/// Fully negotiated instance creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRequest {
    /// Application and engine identification
    pub metadata: AppMetadata,
    /// Extensions to enable
    pub extensions: Vec<String>,
    /// Creation flags
    pub flags: InstanceFlags,
}

/// Graphics backend collaborator
///
/// Implementations own whatever loader state they need. The returned
/// `Instance` releases the backend instance when dropped.
pub trait GraphicsBackend {
    /// Live instance handle
    type Instance;
    /// Backend failure reason
    type Error: std::error::Error + Send + Sync + 'static;

    /// Enumerate the instance-level extensions the backend exposes
    fn available_capabilities(&self) -> Result<CapabilityCatalog, Self::Error>;

    /// Create an instance from a negotiated request
    fn create_instance(&self, request: &InstanceRequest) -> Result<Self::Instance, Self::Error>;
}

/// Runs the verify-then-create sequence against a backend
pub struct InstanceBootstrapper<'a, B: GraphicsBackend> {
    backend: &'a B,
    platform: PlatformTag,
}

impl<'a, B: GraphicsBackend> InstanceBootstrapper<'a, B> {
    /// Bootstrapper for the platform this binary targets
    pub const fn new(backend: &'a B) -> Self {
        Self::for_platform(backend, PlatformTag::current())
    }

    /// Bootstrapper for an explicit platform
    pub const fn for_platform(backend: &'a B, platform: PlatformTag) -> Self {
        Self { backend, platform }
    }

    /// Platform whose mandatory extensions are appended
    pub const fn platform(&self) -> PlatformTag {
        self.platform
    }

    /// Query the requirement source once, then create the instance
    pub fn bootstrap(
        &self,
        metadata: &AppMetadata,
        source: &dyn RequirementSource,
    ) -> Result<B::Instance, BootstrapError> {
        let required = source.required_capabilities();
        log::info!("Windowing layer requires {} instance extension(s)", required.len());
        for name in required.iter() {
            log::debug!("  required: {}", name);
        }
        self.create_instance(metadata, &required)
    }

    /// Verify `required` against the backend and create the instance
    pub fn create_instance(
        &self,
        metadata: &AppMetadata,
        required: &RequirementList,
    ) -> Result<B::Instance, BootstrapError> {
        let available = self
            .backend
            .available_capabilities()
            .map_err(|e| BootstrapError::CapabilityQuery(Box::new(e)))?;

        log::info!("Backend exposes {} instance extension(s)", available.len());
        for capability in available.capabilities() {
            log::debug!("  available: {}", capability);
        }

        if let VerificationVerdict::Missing(missing) = verify(required, &available) {
            log::error!("Missing required instance extensions: {}", missing.join(", "));
            return Err(BootstrapError::VerificationFailure { missing });
        }
        log::info!("All required instance extensions are supported");

        let negotiated = augment_for_platform(required, self.platform);
        if !negotiated.flags.is_empty() {
            log::info!(
                "Platform '{}' adds flags {:?}, extensions: {}",
                self.platform,
                negotiated.flags,
                negotiated.extensions.join(", ")
            );
        }

        let request = InstanceRequest {
            metadata: metadata.clone(),
            extensions: negotiated.extensions,
            flags: negotiated.flags,
        };

        let instance = self
            .backend
            .create_instance(&request)
            .map_err(|e| BootstrapError::BackendRejection(Box::new(e)))?;

        log::info!(
            "Created instance for '{}' with {} extension(s)",
            request.metadata.application_name,
            request.extensions.len()
        );
        Ok(instance)
    }
}
