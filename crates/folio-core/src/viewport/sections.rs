//! Active section tracking
//!
//! Emulates an intersection observer over the registered sections. The
//! observation box is the viewport shrunk by a fixed header margin at the
//! top and a fraction of the height at the bottom, so a section turns
//! active a little before it reaches the middle of the screen.
//!
//! ```text
//!  ┌──────────────────────┐ 0
//!  │  root_margin_top_px  │
//!  ├──────────────────────┤ ← observation box
//!  │                      │
//!  ├──────────────────────┤ height * (1 - bottom_fraction)
//!  │                      │
//!  │                      │
//!  └──────────────────────┘ height
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::SectionConfig;
use crate::error::{FolioError, FolioResult};
use crate::types::{SectionId, ViewportSize};

/// Measured position of one section, relative to the viewport top
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRect {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn new(id: SectionId, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Single authority over which section is active
#[derive(Debug, Clone)]
pub struct SectionTracker {
    config: SectionConfig,
    order: Vec<SectionId>,
    ratios: HashMap<SectionId, f64>,
    active: Option<SectionId>,
}

impl SectionTracker {
    /// Register the ordered section list. Duplicates are rejected.
    pub fn new(config: SectionConfig, sections: Vec<SectionId>) -> FolioResult<Self> {
        let mut ratios = HashMap::with_capacity(sections.len());
        for id in &sections {
            if ratios.insert(id.clone(), 0.0).is_some() {
                return Err(FolioError::DuplicateSection(id.to_string()));
            }
        }
        Ok(Self {
            config,
            order: sections,
            ratios,
            active: None,
        })
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.order
    }

    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active.as_ref() == Some(id)
    }

    /// Last computed visibility ratio for a section
    pub fn ratio(&self, id: &SectionId) -> Option<f64> {
        self.ratios.get(id).copied()
    }

    /// Record that `id` crossed the visibility threshold.
    ///
    /// The most recent crossing wins regardless of prior state.
    pub fn observe_crossing(&mut self, id: &SectionId) -> FolioResult<()> {
        if !self.ratios.contains_key(id) {
            return Err(FolioError::UnknownSection(id.to_string()));
        }
        self.set_active(id.clone());
        Ok(())
    }

    /// Recompute visibility from fresh geometry.
    ///
    /// Rects for unregistered ids are ignored; registered sections missing
    /// from `rects` keep their previous ratio. Returns the newly active
    /// section if it changed.
    pub fn measure(&mut self, viewport: ViewportSize, rects: &[SectionRect]) -> Option<SectionId> {
        let (root_top, root_bottom) = self.root_box(viewport);
        let threshold = self.config.visibility_threshold;

        let mut crossed: Vec<&SectionRect> = Vec::new();
        for rect in rects {
            let Some(previous) = self.ratios.get_mut(&rect.id) else {
                tracing::trace!(section = %rect.id, "Ignoring unregistered section rect");
                continue;
            };
            let ratio = visibility_ratio(rect, root_top, root_bottom);
            if *previous < threshold && ratio >= threshold {
                crossed.push(rect);
            }
            *previous = ratio;
        }

        let anchor = viewport.height * self.config.anchor_fraction;
        let winner = crossed
            .into_iter()
            .min_by(|a, b| {
                let da = (a.midpoint() - anchor).abs();
                let db = (b.midpoint() - anchor).abs();
                da.total_cmp(&db)
                    .then_with(|| self.position(&a.id).cmp(&self.position(&b.id)))
            })
            .map(|rect| rect.id.clone())?;

        if self.active.as_ref() == Some(&winner) {
            return None;
        }
        self.set_active(winner.clone());
        Some(winner)
    }

    fn root_box(&self, viewport: ViewportSize) -> (f64, f64) {
        let top = self.config.root_margin_top_px;
        let bottom = viewport.height * (1.0 - self.config.root_margin_bottom_fraction);
        (top, bottom)
    }

    fn position(&self, id: &SectionId) -> usize {
        self.order
            .iter()
            .position(|s| s == id)
            .unwrap_or(usize::MAX)
    }

    fn set_active(&mut self, id: SectionId) {
        if self.active.as_ref() != Some(&id) {
            tracing::debug!(section = %id, "Active section changed");
        }
        self.active = Some(id);
    }
}

/// Fraction of a section visible inside the observation box.
///
/// Normalised by the smaller of the section and the box, so a section
/// taller than the box still reaches 1.0 when it fills it.
fn visibility_ratio(rect: &SectionRect, root_top: f64, root_bottom: f64) -> f64 {
    let root_height = root_bottom - root_top;
    if rect.height <= 0.0 || root_height <= 0.0 {
        return 0.0;
    }
    let visible = (rect.top + rect.height).min(root_bottom) - rect.top.max(root_top);
    if visible <= 0.0 {
        return 0.0;
    }
    (visible / rect.height.min(root_height)).min(1.0)
}
