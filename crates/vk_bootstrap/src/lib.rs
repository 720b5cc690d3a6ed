//! # vk_bootstrap
//!
//! Opens a GLFW window and connects it to a Vulkan instance, proving at startup
//! that every instance extension the windowing layer needs for presentation is
//! advertised by the Vulkan loader before the instance is created.
//!
//! ## Startup sequence
//!
//! 1. Initialise GLFW and create the window
//! 2. Ask GLFW which instance extensions it needs for its surface type
//! 3. Enumerate the extensions the Vulkan loader exposes
//! 4. Verify the first list against the second (set difference)
//! 5. Append platform-mandatory extensions and create the instance
//! 6. Pump window events until close is requested
//! 7. Release the instance, then the window, then GLFW
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vk_bootstrap::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::default();
//!     vk_bootstrap::foundation::logging::init_with_level(&config.engine.log_level);
//!
//!     let mut app = Application::new(config);
//!     app.run(GlfwWindowSystem::init, AshBackend::load)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod capabilities;
pub mod render;

mod application;

pub use application::{Application, AppError, LifecycleState};

#[cfg(test)]
mod tests;

/// Common imports for bootstrap users
pub mod prelude {
    pub use crate::{
        Application, AppError, LifecycleState,
        capabilities::{
            Capability, CapabilityCatalog, RequirementList, RequirementSource,
            VerificationVerdict, verify,
            platform::{augment_for_platform, InstanceFlags, NegotiatedCapabilities, PlatformTag},
        },
        core::config::{ApplicationConfig, EngineConfig, InstanceConfig, WindowConfig},
        render::{
            bootstrap::{AppMetadata, BootstrapError, GraphicsBackend, InstanceBootstrapper, InstanceRequest},
            window::{PlatformWindow, WindowError, WindowSystem},
            backends::vulkan::{AshBackend, GlfwWindow, GlfwWindowSystem, VulkanError, VulkanInstance},
        },
    };
}
