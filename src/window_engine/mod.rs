pub mod r#trait;
pub use r#trait::{ControlEvent, WindowEngine};

pub mod control_panel;
pub use self::control_panel::ControlPanel;

pub mod glfw_window_engine;
pub use self::glfw_window_engine::GlfwWindowEngine;
