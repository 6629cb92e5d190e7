//! Render-side state types shared with front-ends.
//!
//! These types avoid referencing platform-specific APIs. A front-end takes an
//! `EngineSnapshot` once per frame and draws from it; `InstanceData` is laid
//! out for direct upload into a GPU instance buffer.

use crate::object::{ObjectId, ObjectStatus};
use crate::pose::{Gesture, TrackingStatus};
use glam::Vec3;

/// Per-object instance record, `#[repr(C)]` so it can be cast to bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub emissive: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectView {
    pub id: ObjectId,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub status: ObjectStatus,
    /// Caption above the object (empty while idle).
    pub caption: &'static str,
}

impl ObjectView {
    pub fn label(&self) -> &'static str {
        self.status.label()
    }
}

/// Counters for the HUD.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub grabs: u32,
    pub successes: u32,
    pub failures: u32,
    /// Released inside the neutral band.
    pub drops: u32,
    /// Auto-released after the hand vanished.
    pub tracking_releases: u32,
}

/// Everything a presentation layer needs for one frame.
#[derive(Clone, Debug)]
pub struct EngineSnapshot {
    pub objects: Vec<ObjectView>,
    pub score: u64,
    pub lock_holder: Option<ObjectId>,
    pub control_point: Option<Vec3>,
    pub tracking: TrackingStatus,
    pub gesture: Gesture,
    pub stats: SessionStats,
    pub instances: Vec<InstanceData>,
}

impl EngineSnapshot {
    pub fn object(&self, id: ObjectId) -> Option<&ObjectView> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Raw bytes of `instances` for a GPU buffer write.
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}
