// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::scene::Scene;
use crate::zone::ZoneId;

/// The at-most-one active zone.
///
/// Selection is sticky: a zone becomes active when selected and stays active
/// until another zone replaces it. Nothing auto-clears it; [`clear`] exists
/// for callers that want an explicit reset.
///
/// A monotonically increasing revision counter bumps whenever the selection
/// actually changes, so render layers can cheaply detect staleness.
///
/// [`clear`]: ActiveZone::clear
#[derive(Clone, Debug, Default)]
pub struct ActiveZone {
    selected: Option<ZoneId>,
    revision: u64,
}

impl ActiveZone {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            revision: 0,
        }
    }

    /// Returns the active zone id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ZoneId> {
        self.selected.as_ref()
    }

    /// Returns `true` if no zone is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Returns the current revision. Bumps on every actual change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Makes the given zone the active one, replacing any prior selection.
    ///
    /// Ids that do not name a zone in `scene` leave the selection unchanged;
    /// the return value reports whether the id was known. Re-selecting the
    /// already-active zone is a successful no-op (no revision bump).
    pub fn select(&mut self, scene: &Scene, id: &ZoneId) -> bool {
        if scene.zone(id).is_none() {
            return false;
        }
        if self.selected.as_ref() != Some(id) {
            self.selected = Some(id.clone());
            self.revision += 1;
        }
        true
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            self.revision += 1;
        }
    }
}
