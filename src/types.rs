//! Application states, shared markers and system sets.

use bevy::prelude::*;

/// Top-level view of the application.
#[derive(States, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppState {
    /// Hero screen with the start action.
    #[default]
    Landing,
    /// The 3D solar-system scene.
    Galaxy,
}

/// Lifecycle of the scene while [`AppState::Galaxy`] is active.
///
/// Leaving `Running` (or the parent state) is the cancellation signal for the
/// per-tick update loop.
#[derive(SubStates, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[source(AppState = AppState::Galaxy)]
pub enum GalaxyPhase {
    /// Waiting for every texture request to settle.
    #[default]
    Loading,
    /// Bodies are built and the tick loop runs every frame.
    Running,
}

/// Marker for root entities owned by the scene; despawned on teardown.
///
/// Only roots carry it: despawning a root takes its children along.
#[derive(Component, Default)]
pub struct SceneEntity;

/// System set for ordering the per-tick update.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSystemSet {
    /// Advance spin and orbit accumulators.
    Motion,
    /// Camera-dependent updates (glow drivers, label orientation).
    ViewDependent,
}

/// Tick counter for the scene update loop.
#[derive(Resource, Clone, Debug, Default)]
pub struct SceneClock {
    /// Ticks elapsed since the scene started running.
    pub ticks: u64,
    /// When paused, the motion systems do not run.
    pub paused: bool,
}

impl SceneClock {
    pub fn is_running(clock: Res<SceneClock>) -> bool {
        !clock.paused
    }
}
