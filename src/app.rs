use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use cinder_mesh::{Batch, BatchSink, ChunkCache, Tesselator};
use cinder_physics::{MoveInput, Player, Pose};
use cinder_world::{Block, Edit, HitResult, World, pick};

use crate::config::Config;
use crate::timer::Timer;

/// How far the look ray reaches for edits.
const REACH: f32 = 3.0;

/// Render collaborator for the headless driver: counts what would be drawn.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameStats {
    pub batches: u64,
    pub vertices: u64,
}

impl BatchSink for FrameStats {
    fn submit(&mut self, batch: &Batch<'_>) {
        self.batches += 1;
        self.vertices += batch.vertex_count as u64;
    }
}

/// Scripted stand-in for keyboard and mouse.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub walk: bool,
    pub jump: bool,
    /// Alternate remove/place at the look target once per simulated second.
    pub dig: bool,
    /// Horizontal mouse delta applied every frame.
    pub spin: f32,
}

pub struct App {
    pub world: World,
    pub player: Player,
    pub cache: Rc<RefCell<ChunkCache>>,
    tess: Tesselator<FrameStats>,
    timer: Timer,
    script: Script,
    save_path: Option<PathBuf>,
    rebuild_budget: usize,
    tick: u64,
    edits: u64,
    pub hit: Option<HitResult>,
    pub last_pose: Option<Pose>,
}

impl App {
    pub fn new(cfg: &Config, script: Script, save_path: Option<PathBuf>, load: bool, seed: u64) -> Self {
        let w = &cfg.world;
        let mut world = World::new(w.width, w.height, w.depth);
        if load {
            if let Some(path) = save_path.as_deref() {
                if path.exists() {
                    if let Err(e) = cinder_io::load_world(path, &mut world) {
                        log::warn!("could not load {}: {}", path.display(), e);
                    }
                } else {
                    log::info!("no save at {}, starting fresh", path.display());
                }
            }
        }

        let cache = Rc::new(RefCell::new(ChunkCache::new(&world)));
        world.add_listener(&cache);

        let mut player = Player::new(&world, cfg.physics, fastrand::Rng::with_seed(seed));
        if script.dig {
            player.pitch = 60.0;
        }
        log::info!(
            "world {}x{}x{}, {} chunks, seed {}",
            world.width(),
            world.height(),
            world.depth(),
            cache.borrow().chunk_count(),
            seed
        );

        Self {
            world,
            player,
            cache,
            tess: Tesselator::new(FrameStats::default()),
            timer: Timer::new(cfg.render.ticks_per_second),
            script,
            save_path,
            rebuild_budget: cfg.render.rebuild_budget,
            tick: 0,
            edits: 0,
            hit: None,
            last_pose: None,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn edits(&self) -> u64 {
        self.edits
    }

    pub fn stats(&self) -> FrameStats {
        *self.tess.sink()
    }

    /// Runs `frames` frames of `frame` wall time each, logging a summary for
    /// every simulated second.
    pub fn run(&mut self, frames: u64, frame: Duration) {
        let mut window = Duration::ZERO;
        let mut window_frames = 0u32;
        let mut window_rebuilds = self.cache.borrow().rebuilds();
        for _ in 0..frames {
            self.timer.advance(frame);
            for _ in 0..self.timer.ticks {
                self.step();
            }
            if self.script.spin != 0.0 {
                self.player.turn(self.script.spin, 0.0);
            }
            self.render(self.timer.alpha);

            window += frame;
            window_frames += 1;
            if window >= Duration::from_secs(1) {
                let rebuilds = self.cache.borrow().rebuilds();
                log::info!(
                    "{} fps, {} chunk updates",
                    window_frames,
                    rebuilds - window_rebuilds
                );
                window = Duration::ZERO;
                window_frames = 0;
                window_rebuilds = rebuilds;
            }
        }
    }

    /// One fixed simulation step.
    pub fn step(&mut self) {
        self.tick += 1;
        let input = MoveInput {
            forward: self.script.walk,
            jump: self.script.jump,
            ..MoveInput::default()
        };
        self.player.tick(&self.world, &input);
        log::trace!(
            target: "events",
            "[tick {}] pos=({:.2}, {:.2}, {:.2}) ground={}",
            self.tick,
            self.player.pos.x,
            self.player.pos.y,
            self.player.pos.z,
            self.player.on_ground
        );

        let per_second = self.timer.ticks_per_second().max(1.0) as u64;
        if self.script.dig && self.tick % per_second == 0 {
            let place = self.edits % 2 == 1;
            self.edit_at_look(place);
        }
    }

    /// Removes the targeted block, or places one against the targeted face.
    pub fn edit_at_look(&mut self, place: bool) -> Option<HitResult> {
        let (origin, dir) = self.player.look_ray();
        let hit = pick(&self.world, origin, dir, REACH)?;
        let edit = if place {
            Edit::Place(hit, Block::SOLID)
        } else {
            Edit::Remove(hit)
        };
        log::info!(
            target: "events",
            "[tick {}] {} at ({}, {}, {}) face={:?}",
            self.tick,
            if place { "place" } else { "remove" },
            hit.x,
            hit.y,
            hit.z,
            hit.face
        );
        self.world.apply_edit(edit);
        self.edits += 1;
        Some(hit)
    }

    fn render(&mut self, alpha: f32) {
        let pose = self.player.pose(alpha);
        let (origin, dir) = self.player.look_ray();
        self.hit = pick(&self.world, origin, dir, REACH);
        self.cache
            .borrow_mut()
            .rebuild_dirty(&self.world, &mut self.tess, self.rebuild_budget);
        self.last_pose = Some(pose);
    }

    pub fn save(&self) {
        let Some(path) = self.save_path.as_deref() else {
            return;
        };
        if let Err(e) = cinder_io::save_world(path, &self.world) {
            log::warn!("could not save {}: {}", path.display(), e);
        }
    }

    /// Saves the world and reports totals.
    pub fn shutdown(self) {
        self.save();
        let stats = self.stats();
        log::info!(
            "shutdown after {} ticks, {} edits, {} batches, {} vertices",
            self.tick,
            self.edits,
            stats.batches,
            stats.vertices
        );
    }
}
