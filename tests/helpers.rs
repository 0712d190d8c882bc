use particle_cloud::renderer_engine::recording_device::RecordingDevice;
use particle_cloud::renderer_engine::{Renderer, RendererConfig};
use particle_cloud::window_engine::{ControlEvent, ControlPanel, WindowEngine};
use std::collections::VecDeque;

/// Fenêtre factice : rejoue une liste d'événements, une entrée par frame.
#[derive(Default)]
pub struct ScriptedWindow {
    pub size: (i32, i32),
    pub frames: VecDeque<Vec<ControlEvent>>,
    /// Événements « panneau » renvoyés par `draw_controls`, un lot par frame.
    pub panel_edits: VecDeque<Vec<ControlEvent>>,
    pub swaps: usize,
    pub vsync: Option<bool>,
    pub last_panel: Option<ControlPanel>,
    pub closed: bool,
}

#[allow(dead_code)]
impl ScriptedWindow {
    pub fn with_frames(frames: Vec<Vec<ControlEvent>>) -> Self {
        Self {
            size: (800, 600),
            frames: frames.into(),
            ..Default::default()
        }
    }
}

impl WindowEngine for ScriptedWindow {
    fn init(width: i32, height: i32, _title: &str) -> anyhow::Result<Self> {
        Ok(Self {
            size: (width, height),
            ..Default::default()
        })
    }

    fn poll_events(&mut self) -> Vec<ControlEvent> {
        self.frames.pop_front().unwrap_or_default()
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.size
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.vsync = Some(enabled);
    }

    fn draw_controls(&mut self, panel: &mut ControlPanel) -> Vec<ControlEvent> {
        self.last_panel = Some(panel.clone());
        self.panel_edits.pop_front().unwrap_or_default()
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn should_close(&self) -> bool {
        self.closed
    }

    fn set_should_close(&mut self, value: bool) {
        self.closed = value;
    }
}

#[allow(dead_code)]
pub fn recording_renderer(width: i32, height: i32) -> Renderer<RecordingDevice> {
    Renderer::new(
        RecordingDevice::new(),
        width,
        height,
        &RendererConfig::default(),
    )
    .expect("recording renderer")
}
