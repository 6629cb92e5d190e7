//! Single-owner grab lock.
//!
//! At most one object may hold the lock. A request while another object holds
//! it is ignored rather than queued.

use crate::object::ObjectId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrabLock {
    #[default]
    Free,
    HeldBy(ObjectId),
}

impl GrabLock {
    pub fn holder(&self) -> Option<ObjectId> {
        match self {
            GrabLock::Free => None,
            GrabLock::HeldBy(id) => Some(*id),
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, GrabLock::Free)
    }
}

#[derive(Clone, Debug, Default)]
pub struct GrabArbiter {
    lock: GrabLock,
}

impl GrabArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> GrabLock {
        self.lock
    }

    pub fn holder(&self) -> Option<ObjectId> {
        self.lock.holder()
    }

    pub fn is_free(&self) -> bool {
        self.lock.is_free()
    }

    pub fn is_held_by(&self, id: ObjectId) -> bool {
        self.lock == GrabLock::HeldBy(id)
    }

    /// Grant the lock to `id` if nobody holds it. Returns whether `id` holds it afterwards.
    pub fn request_grab(&mut self, id: ObjectId) -> bool {
        match self.lock {
            GrabLock::Free => {
                self.lock = GrabLock::HeldBy(id);
                log::debug!("[arbiter] lock granted to {id}");
                true
            }
            GrabLock::HeldBy(holder) => holder == id,
        }
    }

    /// Clear the lock if `id` holds it; otherwise nothing changes.
    pub fn release_grab(&mut self, id: ObjectId) -> bool {
        if self.is_held_by(id) {
            self.lock = GrabLock::Free;
            log::debug!("[arbiter] lock released by {id}");
            true
        } else {
            false
        }
    }

    /// Teardown only: drop whatever is held.
    pub(crate) fn force_release(&mut self) -> Option<ObjectId> {
        let prev = self.lock.holder();
        self.lock = GrabLock::Free;
        prev
    }
}
