use anyhow::{anyhow, Result};
use imgui::{Condition, Context as ImContext, FontSource};
use imgui_glfw_rs::glfw::{self, Action, Context, Key, WindowEvent};
use imgui_glfw_rs::ImguiGLFW;
use log::info;

use super::control_panel::ControlPanel;
use super::r#trait::{ControlEvent, WindowEngine};
use crate::renderer_engine::tools::{setup_opengl_debug, show_opengl_context_info};

pub type WindowEvents = glfw::GlfwReceiver<(f64, WindowEvent)>;

pub struct ImguiSystem {
    pub context: ImContext,
    pub glfw: ImguiGLFW,
}

/// Fenêtre glfw + contexte OpenGL 3.3 core + panneau imgui.
pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
    imgui_system: ImguiSystem,
}

fn translate_event(event: &WindowEvent) -> Option<ControlEvent> {
    match *event {
        WindowEvent::FramebufferSize(width, height) => Some(ControlEvent::Resized { width, height }),
        WindowEvent::Key(Key::Escape, _, Action::Press, _) | WindowEvent::Close => {
            Some(ControlEvent::CloseRequested)
        }
        _ => None,
    }
}

impl WindowEngine for GlfwWindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| anyhow!("Unable to initialise GLFW: {:?}", e))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        let (mut window, events) = glfw
            .create_window(
                width.max(1) as u32,
                height.max(1) as u32,
                title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| anyhow!("Unable to create the GLFW window / OpenGL context"))?;

        window.make_current();
        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_close_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);

        // load OpenGL function pointers
        gl::load_with(|s| window.get_proc_address(s).map_or(std::ptr::null(), |f| f as *const _));
        if !gl::Viewport::is_loaded() || !gl::DrawArrays::is_loaded() {
            return Err(anyhow!("OpenGL functions could not be loaded for '{}'", title));
        }

        info!("✅ OpenGL context ready for '{}'", title);

        unsafe {
            show_opengl_context_info();
            setup_opengl_debug();
        }

        let mut imgui = ImContext::create();
        imgui.set_ini_filename(None::<std::path::PathBuf>);
        imgui
            .fonts()
            .add_font(&[FontSource::DefaultFontData { config: None }]);
        imgui.fonts().build_rgba32_texture();
        imgui.style_mut().use_dark_colors();

        let imgui_glfw = ImguiGLFW::new(&mut imgui, &mut window)?;

        Ok(Self {
            glfw,
            window,
            events,
            imgui_system: ImguiSystem {
                context: imgui,
                glfw: imgui_glfw,
            },
        })
    }

    fn poll_events(&mut self) -> Vec<ControlEvent> {
        self.glfw.poll_events();

        let mut out = Vec::new();
        for (_, event) in glfw::flush_messages(&self.events) {
            self.imgui_system
                .glfw
                .handle_event(&mut self.imgui_system.context, &event);
            if let Some(control) = translate_event(&event) {
                out.push(control);
            }
        }
        out
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.glfw.set_swap_interval(if enabled {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });
        info!("🔁 VSync {}", if enabled { "on" } else { "off" });
    }

    fn draw_controls(&mut self, panel: &mut ControlPanel) -> Vec<ControlEvent> {
        let mut out = Vec::new();

        let ui = self
            .imgui_system
            .glfw
            .frame(&mut self.window, &mut self.imgui_system.context);

        ui.window("Particles")
            .position([10.0, 10.0], Condition::FirstUseEver)
            .always_auto_resize(true)
            .build(|| {
                if ui.input_text("count", &mut panel.count_text).build() {
                    out.push(ControlEvent::ParticleCountInput(panel.count_text.clone()));
                }
                if let Some(err) = &panel.input_error {
                    ui.text_colored([1.0, 0.4, 0.4, 1.0], err);
                }
                if ui.checkbox("alternate shader", &mut panel.alternate_shader) {
                    out.push(ControlEvent::ShaderToggled(panel.alternate_shader));
                }
                ui.separator();
                ui.text(format!("{} particles", panel.active_count));
                ui.text(format!("{:.1} FPS", panel.fps));
            });

        self.imgui_system
            .glfw
            .draw(&mut self.imgui_system.context, &mut self.window);

        out
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_framebuffer_resize() {
        assert_eq!(
            translate_event(&WindowEvent::FramebufferSize(1024, 768)),
            Some(ControlEvent::Resized {
                width: 1024,
                height: 768
            })
        );
    }

    #[test]
    fn test_translate_escape_and_close() {
        let escape = WindowEvent::Key(Key::Escape, 9, Action::Press, glfw::Modifiers::empty());
        assert_eq!(translate_event(&escape), Some(ControlEvent::CloseRequested));
        assert_eq!(
            translate_event(&WindowEvent::Close),
            Some(ControlEvent::CloseRequested)
        );
    }

    #[test]
    fn test_other_events_are_ignored() {
        let release = WindowEvent::Key(Key::Escape, 9, Action::Release, glfw::Modifiers::empty());
        assert_eq!(translate_event(&release), None);
        assert_eq!(translate_event(&WindowEvent::Char('a')), None);
    }
}
