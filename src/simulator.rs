use log::{info, warn};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::cloud_engine::{parse_particle_count, CloudConfig, CountError};
use crate::cloud_engine::{ParticleGenerator, ParticleSet};
use crate::frame_stats::FrameStats;
use crate::renderer_engine::{FrameReport, RendererEngine};
use crate::window_engine::{ControlEvent, ControlPanel, WindowEngine};

/// État mutable partagé de l'application, possédé par la boucle de rendu.
///
/// Le lot de particules n'est jamais modifié en place : un changement de
/// nombre génère un lot complet puis le substitue à l'ancien, et incrémente
/// la génération.
pub struct RenderContext {
    particles: ParticleSet,
    generation: u64,
    generator: ParticleGenerator,
    max_count: usize,
}

impl RenderContext {
    pub fn new(config: &CloudConfig) -> Self {
        Self::with_generator(config, ParticleGenerator::new(config.seed))
    }

    pub fn with_generator(config: &CloudConfig, mut generator: ParticleGenerator) -> Self {
        let count = config.initial_count.min(config.max_count);
        let particles = generator.generate(count);
        info!("✨ Generated {} particles", particles.len());
        Self {
            particles,
            generation: 0,
            generator,
            max_count: config.max_count,
        }
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Valide la saisie puis remplace le lot. En cas de refus, le lot
    /// courant reste en place.
    pub fn set_particle_count(&mut self, raw: &str) -> Result<usize, CountError> {
        let count = parse_particle_count(raw, self.max_count)?;
        self.particles = self.generator.generate(count);
        self.generation += 1;
        info!(
            "✨ Generated {} particles (generation {})",
            count, self.generation
        );
        Ok(count)
    }
}

/// Demande d'arrêt de la boucle, partageable entre threads.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Boucle de rendu : une frame par rafraîchissement écran (vsync).
///
/// Chaque `step` applique d'abord tous les événements en attente, puis envoie
/// la géométrie si le lot a changé, puis dessine. L'upload d'un lot précède
/// donc toujours la frame qui le dessine.
pub struct Simulator<R, W>
where
    R: RendererEngine,
    W: WindowEngine,
{
    renderer_engine: R,
    window_engine: W,
    context: RenderContext,
    panel: ControlPanel,
    pending: VecDeque<ControlEvent>,
    stop: StopHandle,
    upload_every_frame: bool,
    stats: FrameStats,
    last_report: Option<FrameReport>,
    first_frame: bool,
}

impl<R, W> Simulator<R, W>
where
    R: RendererEngine,
    W: WindowEngine,
{
    pub fn new(
        renderer_engine: R,
        window_engine: W,
        context: RenderContext,
        upload_every_frame: bool,
    ) -> Self {
        let panel = ControlPanel::new(context.particles().len());
        Self {
            renderer_engine,
            window_engine,
            context,
            panel,
            pending: VecDeque::new(),
            stop: StopHandle::default(),
            upload_every_frame,
            stats: FrameStats::new(200, Duration::from_secs(5)),
            last_report: None,
            first_frame: true,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("🚀 Render loop started");
        while self.step() {}
        info!("🛑 Render loop stopped after {} frames", self.stats.frames());
        Ok(())
    }

    /// Exécute une frame. Renvoie `false` quand la boucle doit s'arrêter.
    pub fn step(&mut self) -> bool {
        if self.stop.is_stopped() || self.window_engine.should_close() {
            return false;
        }

        let events = self.window_engine.poll_events();
        self.pending.extend(events);
        while let Some(event) = self.pending.pop_front() {
            self.handle_event(event);
        }
        if self.stop.is_stopped() || self.window_engine.should_close() {
            return false;
        }

        let generation = self.context.generation();
        if self.upload_every_frame || self.renderer_engine.needs_upload(generation) {
            self.renderer_engine
                .upload(self.context.particles(), generation);
        }

        let report = self.renderer_engine.render_frame();
        self.last_report = Some(report);

        self.stats.tick();
        self.panel.active_count = report.vertex_count;
        self.panel.fps = self.stats.fps_ema();
        // Appliqués au début de la frame suivante, avant son upload.
        let panel_events = self.window_engine.draw_controls(&mut self.panel);
        self.pending.extend(panel_events);

        self.window_engine.swap_buffers();

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }
        if self.stats.should_log() {
            info!(
                "📊 {} particles | FPS (EMA) {:.1} | avg frame {:.2?} | max frame {:.2?}",
                report.vertex_count,
                self.stats.fps_ema(),
                self.stats.average_frame_time().unwrap_or_default(),
                self.stats.max_frame_time().unwrap_or_default(),
            );
        }

        true
    }

    pub fn handle_event(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Resized { width, height } => {
                self.renderer_engine.resize(width, height);
            }
            ControlEvent::ParticleCountInput(raw) => {
                match self.context.set_particle_count(&raw) {
                    Ok(_) => self.panel.input_error = None,
                    Err(e) => {
                        warn!(
                            "⚠️ Particle count rejected ({}), keeping {} particles",
                            e,
                            self.context.particles().len()
                        );
                        self.panel.input_error = Some(e.to_string());
                    }
                }
            }
            ControlEvent::ShaderToggled(alternate) => {
                self.panel.alternate_shader = alternate;
                self.renderer_engine.select_shader(alternate);
            }
            ControlEvent::CloseRequested => {
                self.window_engine.set_should_close(true);
            }
        }
    }

    /// Poignée permettant d'arrêter la boucle depuis l'extérieur.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn close(&mut self) {
        self.renderer_engine.close();
    }

    pub fn renderer_engine(&self) -> &R {
        &self.renderer_engine
    }

    pub fn window_engine(&self) -> &W {
        &self.window_engine
    }

    pub fn window_engine_mut(&mut self) -> &mut W {
        &mut self.window_engine
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn last_report(&self) -> Option<&FrameReport> {
        self.last_report.as_ref()
    }
}
