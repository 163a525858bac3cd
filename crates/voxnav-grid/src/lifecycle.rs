use voxnav_core::{Aabb, ConfigError, NavConfig, ObstacleSource};

use crate::volume::NavVolume;

/// Decides when to (re)build the navigation volume.
///
/// Tick-driven and cooperative: call [`tick`](Self::tick) once per frame or
/// scheduling slice. The first tick always builds. With a positive
/// `refresh_interval` the volume is rebuilt from the source's current
/// obstacle set every time the accumulated tick time reaches the interval;
/// otherwise the first build is the only one. Every rebuild swaps in a
/// brand-new [`NavVolume`] as a unit.
#[derive(Debug)]
pub struct GridLifecycle<S> {
    source: S,
    config: NavConfig,
    volume: Option<NavVolume>,
    since_rebuild: f32,
    scratch: Vec<Aabb>,
}

impl<S: ObstacleSource> GridLifecycle<S> {
    /// Fails fast on configuration that cannot produce a meaningful grid.
    pub fn new(source: S, config: NavConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source,
            config,
            volume: None,
            since_rebuild: 0.0,
            scratch: Vec::new(),
        })
    }

    /// Advance lifecycle time; returns true when this tick rebuilt the
    /// volume.
    pub fn tick(&mut self, dt_seconds: f32) -> bool {
        if self.volume.is_some() {
            if self.config.refresh_interval <= 0.0 {
                return false;
            }
            self.since_rebuild += dt_seconds.max(0.0);
            if self.since_rebuild < self.config.refresh_interval {
                return false;
            }
        }
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        self.scratch.clear();
        self.source.collect_bounds(&mut self.scratch);
        let volume = NavVolume::from_obstacles(&self.scratch, self.config);
        tracing::debug!(
            obstacles = self.scratch.len(),
            nodes = volume.grid().len(),
            "Navigation volume rebuilt"
        );
        self.volume = Some(volume);
        self.since_rebuild = 0.0;
    }

    /// The current snapshot, or `None` before the first tick.
    pub fn volume(&self) -> Option<&NavVolume> {
        self.volume.as_ref()
    }

    pub fn config(&self) -> NavConfig {
        self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the obstacle source, e.g. to move obstacles between
    /// ticks. Changes become visible at the next rebuild.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
