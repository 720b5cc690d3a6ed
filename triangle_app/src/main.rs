//! Hello triangle bootstrap
//!
//! Opens an 800x600 window, creates a Vulkan instance once the window's
//! surface extensions are verified, and waits for the window to close.

use vk_bootstrap::foundation::logging;
use vk_bootstrap::prelude::*;

fn main() {
    let config = ApplicationConfig::default();
    logging::init_with_level(&config.engine.log_level);

    let mut app: Application<GlfwWindowSystem, AshBackend> = Application::new(config);
    if let Err(e) = app.run(GlfwWindowSystem::init, AshBackend::load) {
        log::error!("Application error: {}", e);
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
