use log::debug;
use serde::Serialize;

use crate::geo::Coordinate;
use crate::options::NavigationOptions;

/// Whether position updates also drive the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CameraFollowMode {
    #[default]
    Following,
    ManualOverride,
}

/// A camera move for the map collaborator to schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraCommand {
    pub center: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
    /// Wait this long before applying, so an in-flight animation can settle.
    pub delay_ms: u32,
    pub animation_ms: u32,
}

#[derive(Debug, Clone)]
pub struct CameraFollow {
    mode: CameraFollowMode,
    settle_delay_ms: u32,
    follow_animation_ms: u32,
    recenter_animation_ms: u32,
    latitude_delta: f64,
    longitude_delta: f64,
}

impl CameraFollow {
    pub fn new(opts: &NavigationOptions) -> Self {
        Self {
            mode: CameraFollowMode::Following,
            settle_delay_ms: opts.camera_settle_delay_ms,
            follow_animation_ms: opts.follow_animation_ms,
            recenter_animation_ms: opts.recenter_animation_ms,
            latitude_delta: opts.camera_latitude_delta,
            longitude_delta: opts.camera_longitude_delta,
        }
    }

    pub fn mode(&self) -> CameraFollowMode {
        self.mode
    }

    /// The user dragged, pinched or rotated the map.
    pub fn on_manual_gesture(&mut self) {
        if self.mode == CameraFollowMode::Following {
            debug!("Camera follow suspended by map gesture");
        }
        self.mode = CameraFollowMode::ManualOverride;
    }

    /// The user asked to recenter. Resumes following and, when a position
    /// is known, snaps the camera back to it right away.
    pub fn recenter(
        &mut self,
        position: Option<Coordinate>,
        heading: Option<f64>,
    ) -> Option<CameraCommand> {
        if self.mode == CameraFollowMode::ManualOverride {
            debug!("Camera follow resumed");
        }
        self.mode = CameraFollowMode::Following;
        position.map(|center| CameraCommand {
            center,
            heading,
            latitude_delta: self.latitude_delta,
            longitude_delta: self.longitude_delta,
            delay_ms: 0,
            animation_ms: self.recenter_animation_ms,
        })
    }

    /// Camera move for a new sample, if the camera is following.
    pub fn follow(&self, position: Coordinate, heading: Option<f64>) -> Option<CameraCommand> {
        match self.mode {
            CameraFollowMode::Following => Some(CameraCommand {
                center: position,
                heading,
                latitude_delta: self.latitude_delta,
                longitude_delta: self.longitude_delta,
                delay_ms: self.settle_delay_ms,
                animation_ms: self.follow_animation_ms,
            }),
            CameraFollowMode::ManualOverride => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraFollow {
        CameraFollow::new(&NavigationOptions::default())
    }

    #[test]
    fn test_starts_following() {
        let cam = camera();
        assert_eq!(cam.mode(), CameraFollowMode::Following);
        let cmd = cam.follow(Coordinate::new(1.0, 2.0), Some(90.0)).unwrap();
        assert_eq!(cmd.center, Coordinate::new(1.0, 2.0));
        assert_eq!(cmd.heading, Some(90.0));
        assert_eq!(cmd.delay_ms, 250);
    }

    #[test]
    fn test_follow_timing_is_independent() {
        let cam = CameraFollow::new(&NavigationOptions {
            camera_settle_delay_ms: 100,
            follow_animation_ms: 600,
            ..Default::default()
        });
        let cmd = cam.follow(Coordinate::new(1.0, 2.0), None).unwrap();
        assert_eq!(cmd.delay_ms, 100);
        assert_eq!(cmd.animation_ms, 600);
    }

    #[test]
    fn test_gesture_suspends_follow() {
        let mut cam = camera();
        cam.on_manual_gesture();
        assert_eq!(cam.mode(), CameraFollowMode::ManualOverride);
        assert!(cam.follow(Coordinate::new(1.0, 2.0), None).is_none());

        // Repeated gestures stay in override
        cam.on_manual_gesture();
        assert_eq!(cam.mode(), CameraFollowMode::ManualOverride);
    }

    #[test]
    fn test_recenter_resumes_and_snaps() {
        let mut cam = camera();
        cam.on_manual_gesture();
        let cmd = cam.recenter(Some(Coordinate::new(3.0, 4.0)), None).unwrap();
        assert_eq!(cam.mode(), CameraFollowMode::Following);
        assert_eq!(cmd.delay_ms, 0);
        assert_eq!(cmd.animation_ms, 1000);
        assert!((cmd.latitude_delta - 0.0922).abs() < 1e-12);
        assert!(cam.follow(Coordinate::new(3.0, 4.0), None).is_some());
    }

    #[test]
    fn test_recenter_without_fix() {
        let mut cam = camera();
        cam.on_manual_gesture();
        assert!(cam.recenter(None, Some(10.0)).is_none());
        assert_eq!(cam.mode(), CameraFollowMode::Following);
    }
}
