//! Sky backdrop for the scene.
//!
//! A large inward-facing sphere shows the galaxy texture. The background
//! video, a numbered frame sequence, replaces that texture once every frame
//! has loaded. If any frame fails the static texture stays in place.

use bevy::prelude::*;

use crate::assets::AssetStatus;

/// Radius of the backdrop sphere; inside the camera's far plane.
pub const BACKDROP_RADIUS: f32 = 2000.0;

/// Marker for the backdrop sphere.
#[derive(Component)]
pub struct Backdrop;

/// Playback of the background video.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VideoStatus {
    #[default]
    Loading,
    Playing,
    Failed,
}

/// Frame-sequence player for the backdrop.
#[derive(Resource, Clone, Debug)]
pub struct BackgroundVideo {
    pub frames: Vec<Handle<Image>>,
    pub fps: f32,
    pub status: VideoStatus,
    elapsed: f32,
    current: Option<usize>,
}

impl BackgroundVideo {
    pub fn new(frames: Vec<Handle<Image>>, fps: f32) -> Self {
        Self {
            frames,
            fps,
            status: VideoStatus::Loading,
            elapsed: 0.0,
            current: None,
        }
    }

    /// Length of one loop in seconds.
    pub fn duration(&self) -> f32 {
        self.frames.len() as f32 / self.fps
    }

    /// Advance playback; returns the frame to show when it changes.
    pub fn advance(&mut self, dt: f32) -> Option<usize> {
        if self.status != VideoStatus::Playing || self.frames.is_empty() || self.fps <= 0.0 {
            return None;
        }

        self.elapsed = (self.elapsed + dt) % self.duration();
        let frame = ((self.elapsed * self.fps) as usize).min(self.frames.len() - 1);
        if self.current == Some(frame) {
            return None;
        }
        self.current = Some(frame);
        Some(frame)
    }

    /// Fold per-frame load states into the playback status.
    pub fn settle(&mut self, statuses: impl IntoIterator<Item = AssetStatus>) {
        if self.status != VideoStatus::Loading {
            return;
        }

        let mut all_loaded = true;
        for status in statuses {
            match status {
                AssetStatus::Failed => {
                    self.status = VideoStatus::Failed;
                    return;
                }
                AssetStatus::Pending => all_loaded = false,
                AssetStatus::Loaded => {}
            }
        }
        if all_loaded {
            self.status = VideoStatus::Playing;
        }
    }
}

/// Watch the frame loads until playback can start or has failed.
pub fn poll_video_frames(video: Option<ResMut<BackgroundVideo>>, asset_server: Res<AssetServer>) {
    let Some(mut video) = video else {
        return;
    };
    if video.status != VideoStatus::Loading {
        return;
    }

    let statuses: Vec<AssetStatus> = video
        .frames
        .iter()
        .map(|frame| AssetStatus::from_load_state(asset_server.get_load_state(frame)))
        .collect();
    video.settle(statuses);

    match video.status {
        VideoStatus::Playing => info!("Background video ready ({} frames)", video.frames.len()),
        VideoStatus::Failed => error!("Background video failed to load; keeping the static backdrop"),
        VideoStatus::Loading => {}
    }
}

/// Swap the backdrop texture to the current video frame.
pub fn play_background_video(
    time: Res<Time>,
    video: Option<ResMut<BackgroundVideo>>,
    backdrop: Query<&MeshMaterial3d<StandardMaterial>, With<Backdrop>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(mut video) = video else {
        return;
    };
    let Some(frame) = video.advance(time.delta_secs()) else {
        return;
    };
    let Ok(handle) = backdrop.single() else {
        return;
    };

    if let Some(mut material) = materials.get_mut(&handle.0) {
        material.base_color = Color::WHITE;
        material.base_color_texture = Some(video.frames[frame].clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(frames: usize) -> BackgroundVideo {
        BackgroundVideo::new(vec![Handle::default(); frames], 24.0)
    }

    #[test]
    fn test_no_frames_until_playing() {
        let mut v = video(48);
        assert_eq!(v.advance(0.1), None);
    }

    #[test]
    fn test_playback_advances_and_loops() {
        let mut v = video(48);
        v.status = VideoStatus::Playing;

        assert_eq!(v.advance(0.0), Some(0));
        // Same frame again is not reported
        assert_eq!(v.advance(0.01), None);
        assert_eq!(v.advance(1.0 / 24.0), Some(1));

        // Two seconds is exactly one loop of 48 frames at 24 fps
        let frame = v.advance(2.0);
        assert_eq!(frame, None);
        assert_eq!(v.advance(0.5), Some(13));
    }

    #[test]
    fn test_any_failed_frame_fails_playback() {
        let mut v = video(3);
        v.settle([AssetStatus::Loaded, AssetStatus::Pending, AssetStatus::Failed]);
        assert_eq!(v.status, VideoStatus::Failed);
        assert_eq!(v.advance(1.0), None);
    }

    #[test]
    fn test_waits_for_pending_frames() {
        let mut v = video(2);
        v.settle([AssetStatus::Loaded, AssetStatus::Pending]);
        assert_eq!(v.status, VideoStatus::Loading);
        v.settle([AssetStatus::Loaded, AssetStatus::Loaded]);
        assert_eq!(v.status, VideoStatus::Playing);
    }
}
