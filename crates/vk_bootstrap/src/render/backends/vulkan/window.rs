//! Window management using GLFW
//!
//! Provides cross-platform window creation and event handling for Vulkan

use crate::capabilities::{RequirementList, RequirementSource};
use crate::core::config::WindowConfig;
use crate::render::window::{PlatformWindow, WindowError, WindowResult, WindowSystem};

/// GLFW library handle
///
/// GLFW terminates once this and every window created from it are dropped.
pub struct GlfwWindowSystem {
    glfw: glfw::Glfw,
}

impl GlfwWindowSystem {
    /// Initialize GLFW
    pub fn init() -> WindowResult<Self> {
        let glfw = glfw::init(glfw::log_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{:?}", e)))?;

        log::info!("GLFW {} initialized", glfw::get_version_string());
        Ok(Self { glfw })
    }
}

impl RequirementSource for GlfwWindowSystem {
    fn required_capabilities(&self) -> RequirementList {
        match self.glfw.get_required_instance_extensions() {
            Some(extensions) => RequirementList::new(extensions),
            None => {
                log::warn!("GLFW found no Vulkan loader; no surface extensions reported");
                RequirementList::default()
            }
        }
    }
}

impl WindowSystem for GlfwWindowSystem {
    type Window = GlfwWindow;

    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<GlfwWindow> {
        // Configure for Vulkan (no OpenGL context)
        self.glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        self.glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));

        let (mut window, events) = self
            .glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| WindowError::CreationFailed {
                title: config.title.clone(),
            })?;

        window.set_key_polling(true);
        window.set_close_polling(true);

        log::info!("Created {}x{} window '{}'", config.width, config.height, config.title);
        Ok(GlfwWindow { window, events })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }
}

/// GLFW window; destroyed on drop
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl PlatformWindow for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn process_events(&mut self) {
        for (_, event) in glfw::flush_messages(&self.events) {
            log::trace!("{:?}", event);
            match event {
                glfw::WindowEvent::Key(glfw::Key::Escape, _, glfw::Action::Press, _)
                | glfw::WindowEvent::Close => self.window.set_should_close(true),
                _ => {}
            }
        }
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        log::debug!("Destroying window");
    }
}
