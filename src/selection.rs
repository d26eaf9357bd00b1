//! Click-to-select for the scene's bodies.
//!
//! A click becomes a ray through the main camera. Every pickable shape is
//! intersected and the nearest hit that belongs to a selectable body wins;
//! glow shells, rings and labels in front of it do not block the selection.

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::catalog::{BodyId, FactSheet};
use crate::picking::{Hit, PickShape, cast_ray, ray_from_ndc};
use crate::types::GalaxyPhase;

/// Plugin providing body selection.
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedBody>()
            .add_message::<SceneClick>()
            .add_systems(
                Update,
                handle_scene_click.run_if(in_state(GalaxyPhase::Running)),
            );
    }
}

/// The body whose fact sheet is open, if any.
#[derive(Resource, Default, Clone, Debug, PartialEq)]
pub struct SelectedBody {
    pub body: Option<BodyId>,
}

impl SelectedBody {
    pub fn select(&mut self, id: BodyId) {
        self.body = Some(id);
    }

    pub fn dismiss(&mut self) {
        self.body = None;
    }

    pub fn sheet(&self) -> Option<&'static FactSheet> {
        self.body.map(|id| id.fact_sheet())
    }
}

/// Marks an entity that opens a fact sheet when hit.
#[derive(Component, Clone, Copy, Debug)]
pub struct Selectable {
    /// Index into [`BodyId::ALL`].
    pub index: usize,
}

/// A completed click on the scene, in normalized device coordinates.
#[derive(Message, Clone, Copy, Debug)]
pub struct SceneClick {
    pub ndc: Vec2,
}

/// First hit, nearest first, that maps to a selectable body.
pub fn resolve_selection(hits: &[Hit], lookup: impl Fn(Entity) -> Option<BodyId>) -> Option<BodyId> {
    hits.iter().find_map(|hit| lookup(hit.entity))
}

/// Cast each click into the scene and update the selection.
///
/// A click that hits nothing selectable leaves the selection as it was.
pub fn handle_scene_click(
    mut clicks: MessageReader<SceneClick>,
    camera_query: Query<(&GlobalTransform, &Projection), With<MainCamera>>,
    shapes: Query<(Entity, &PickShape, &GlobalTransform)>,
    selectables: Query<&Selectable>,
    mut selected: ResMut<SelectedBody>,
) {
    let Ok((camera_transform, projection)) = camera_query.single() else {
        clicks.clear();
        return;
    };

    for click in clicks.read() {
        let ray = match ray_from_ndc(click.ndc, camera_transform, projection) {
            Ok(ray) => ray,
            Err(e) => {
                warn!("Ignoring click: {e}");
                continue;
            }
        };

        let hits = cast_ray(ray, shapes.iter());
        let lookup = |entity| {
            selectables
                .get(entity)
                .ok()
                .and_then(|s| BodyId::from_index(s.index))
        };

        if let Some(id) = resolve_selection(&hits, lookup) {
            info!("Selected {}", id.name());
            selected.select(id);
        }
    }
}
