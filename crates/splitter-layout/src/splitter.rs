//! The splitter container.
//!
//! [`Splitter`] owns the size model, collapse memory, and both input
//! controllers for one run of panels. Hosts feed it pointer and key input,
//! render from [`Splitter::current_sizes`] (or [`Splitter::panel_extents`]),
//! and observe changes through a [`SplitterListener`] or the values each call
//! returns.
//!
//! # Notification contract
//!
//! - `on_sizes_change` fires once per completed atomic operation: every drag
//!   move (even when clamping yields the previous vector), every keypress that
//!   moves a divider, every collapse or expand.
//! - `on_collapse` fires once per user toggle, before the matching
//!   `on_sizes_change`. Host-driven changes to a controlled `collapsed` flag
//!   only produce `on_sizes_change`.
//! - Ignored input (locked divider, unmapped key, refused collapse or
//!   expand) fires nothing.

use std::fmt;
use std::rc::Rc;

use splitter_core::{Axis, BodyStyleHost, CursorIcon, KeyEvent, PointerPosition};

use crate::collapse::{CollapseMemory, collapse, expand};
use crate::config::{PanelSpec, SizeMode, SplitterConfig, SplitterConfigError};
use crate::drag::{DragController, DragEffect, DragEndReason, DragNoopReason, DragState};
use crate::keyboard::KeyboardController;
use crate::size_model::{
    PercentBounds, RENORMALIZE_TOLERANCE, SizeModel, TOTAL_PERCENT, controlled_panel_sizes,
};

/// Host-side observer for published changes.
pub trait SplitterListener {
    /// A new size vector was computed.
    fn on_sizes_change(&mut self, _sizes: &[f64]) {}

    /// Panel `panel` was collapsed (`true`) or expanded (`false`) by a toggle.
    fn on_collapse(&mut self, _panel: usize, _collapsed: bool) {}
}

/// Rendering hints for one divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GutterInfo {
    pub divider: usize,
    /// Both neighbours resizable and expanded.
    pub can_resize: bool,
    /// Tab stop: the start-side panel is resizable and expanded.
    pub focusable: bool,
    /// Orientation of the divider bar itself.
    pub orientation: Axis,
    /// Start-side panel size, rounded to a whole percent.
    pub value_now: u32,
    pub cursor: CursorIcon,
    /// Show the toggle for the start-side panel.
    pub show_start: bool,
    /// Show the toggle for the end-side panel.
    pub show_end: bool,
    pub start_collapsed: bool,
    pub end_collapsed: bool,
}

/// Pixel layout along the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelExtents {
    /// Length of each panel.
    pub panels: Vec<f64>,
    /// Offset of each divider's leading edge.
    pub dividers: Vec<f64>,
}

/// Resizable split-panel container.
pub struct Splitter {
    config: SplitterConfig,
    panels: Vec<PanelSpec>,
    mode: SizeMode,
    model: SizeModel,
    controlled_sizes: Option<Vec<f64>>,
    memory: CollapseMemory,
    drag: DragController,
    keyboard: KeyboardController,
    container_length: f64,
    body_style: Option<Rc<dyn BodyStyleHost>>,
    listener: Option<Box<dyn SplitterListener>>,
}

impl Splitter {
    /// Build a splitter that owns its size vector.
    pub fn new(config: SplitterConfig, panels: Vec<PanelSpec>) -> Result<Self, SplitterConfigError> {
        config.validate_panels(&panels)?;
        let model = SizeModel::new(&panels, &config);
        tracing::debug!(
            target: "splitter.layout",
            panels = panels.len(),
            direction = ?config.direction,
            "splitter created"
        );
        Ok(Self {
            keyboard: KeyboardController::new(config.keyboard),
            config,
            panels,
            mode: SizeMode::Owned,
            model,
            controlled_sizes: None,
            memory: CollapseMemory::new(),
            drag: DragController::new(),
            container_length: 0.0,
            body_style: None,
            listener: None,
        })
    }

    /// Build a splitter whose size vector is owned by the host.
    pub fn controlled(
        config: SplitterConfig,
        panels: Vec<PanelSpec>,
        sizes: Vec<f64>,
    ) -> Result<Self, SplitterConfigError> {
        let mut splitter = Self::new(config, panels)?;
        splitter.mode = SizeMode::Controlled;
        splitter.set_sizes(sizes)?;
        Ok(splitter)
    }

    #[must_use]
    pub fn with_listener(mut self, listener: impl SplitterListener + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn set_listener(&mut self, listener: impl SplitterListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Route drag-time cursor/selection overrides to `host`.
    #[must_use]
    pub fn with_body_style(mut self, host: Rc<dyn BodyStyleHost>) -> Self {
        self.body_style = Some(host);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    #[must_use]
    pub fn panels(&self) -> &[PanelSpec] {
        &self.panels
    }

    #[must_use]
    pub const fn mode(&self) -> SizeMode {
        self.mode
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn divider_count(&self) -> usize {
        self.panels.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_collapsed(&self, index: usize) -> bool {
        self.model.is_collapsed(index)
    }

    #[must_use]
    pub fn collapsed_flags(&self) -> &[bool] {
        self.model.collapsed_flags()
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    #[must_use]
    pub const fn container_length(&self) -> f64 {
        self.container_length
    }

    /// Record the container's current length along the axis, in pixels.
    pub fn set_container_length(&mut self, length: f64) {
        self.container_length = if length.is_finite() {
            length.max(0.0)
        } else {
            0.0
        };
    }

    /// Container length minus all dividers.
    #[must_use]
    pub fn available_length(&self) -> f64 {
        crate::size_model::available_length(
            self.container_length,
            self.panel_count(),
            self.config.gutter_size,
        )
    }

    /// The vector the host should render right now.
    ///
    /// Controlled mode returns the latest host-supplied vector. Owned mode
    /// returns the engine's vector, merged with any per-panel controlled
    /// `size` on expanded panels and renormalized.
    #[must_use]
    pub fn current_sizes(&self) -> Vec<f64> {
        match (self.mode, &self.controlled_sizes) {
            (SizeMode::Controlled, Some(sizes)) => sizes.clone(),
            _ => controlled_panel_sizes(
                &self.panels,
                self.model.sizes(),
                self.model.collapsed_flags(),
            )
            .unwrap_or_else(|| self.model.sizes().to_vec()),
        }
    }

    /// Replace the size vector from outside (no notification).
    ///
    /// In owned mode the vector is repaired and persisted; in controlled mode
    /// it becomes the new base for every subsequent operation.
    pub fn set_sizes(&mut self, sizes: Vec<f64>) -> Result<(), SplitterConfigError> {
        if sizes.len() != self.panel_count() {
            return Err(SplitterConfigError::LengthMismatch {
                expected: self.panel_count(),
                actual: sizes.len(),
            });
        }
        match self.mode {
            SizeMode::Owned => {
                let _ = self.model.apply_vector(sizes);
            }
            SizeMode::Controlled => self.controlled_sizes = Some(sizes),
        }
        Ok(())
    }

    /// Replace container-level settings; ends any in-flight drag.
    pub fn set_config(&mut self, config: SplitterConfig) -> Result<(), SplitterConfigError> {
        config.validate_panels(&self.panels)?;
        if self.drag.is_dragging() {
            let _ = self.end_drag(DragEndReason::ConfigChanged);
        }
        self.model.set_constraints(&self.panels, &config);
        self.keyboard = KeyboardController::new(config.keyboard);
        self.config = config;
        Ok(())
    }

    /// Sync a new panel list.
    ///
    /// A change in panel count ends any in-flight drag, reinitializes the
    /// sizes, and clears collapse memory. Otherwise constraints are refreshed
    /// and controlled `collapsed` flags are applied.
    pub fn set_panels(&mut self, panels: Vec<PanelSpec>) -> Result<(), SplitterConfigError> {
        self.config.validate_panels(&panels)?;

        if panels.len() != self.panels.len() {
            if self.drag.is_dragging() {
                let _ = self.end_drag(DragEndReason::PanelSetChanged);
            }
            tracing::debug!(
                target: "splitter.layout",
                from = self.panels.len(),
                to = panels.len(),
                "panel count changed; sizes reinitialized"
            );
            self.model = SizeModel::new(&panels, &self.config);
            self.memory.clear();
            if self
                .controlled_sizes
                .as_ref()
                .is_some_and(|sizes| sizes.len() != panels.len())
            {
                self.controlled_sizes = None;
            }
            self.panels = panels;
            return Ok(());
        }

        self.model.set_constraints(&panels, &self.config);
        let targets: Vec<Option<bool>> = panels.iter().map(|panel| panel.collapsed).collect();
        self.panels = panels;
        for (index, target) in targets.into_iter().enumerate() {
            match target {
                Some(true) if !self.model.is_collapsed(index) => {
                    let _ = self.collapse_unchecked(index, false);
                }
                Some(false) if self.model.is_collapsed(index) => {
                    let _ = self.expand_unchecked(index, false);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Pointer pressed on `divider`.
    ///
    /// Starts a drag when both neighbours are resizable and expanded.
    ///
    /// # Panics
    ///
    /// Panics when `divider` does not exist.
    pub fn pointer_down(&mut self, divider: usize, position: PointerPosition) -> DragEffect {
        self.assert_divider(divider);
        let _span = tracing::debug_span!("splitter.pointer_down", divider).entered();

        if !self.model.divider_resizable(divider) {
            tracing::trace!(target: "splitter.layout", divider, "divider locked; drag ignored");
            return DragEffect::Noop {
                reason: DragNoopReason::DividerLocked,
            };
        }

        let axis = self.config.direction;
        let body = self
            .body_style
            .clone()
            .map(|host| (host, CursorIcon::resize_for(axis)));
        let start_sizes = self.current_sizes();
        let effect = self
            .drag
            .begin(divider, position.along(axis), start_sizes, body);
        if let DragEffect::Started { origin, .. } = effect {
            tracing::debug!(target: "splitter.layout", divider, origin, "drag started");
        }
        effect
    }

    /// Pointer moved anywhere while a drag may be active.
    pub fn pointer_move(&mut self, position: PointerPosition) -> DragEffect {
        let available = self.available_length();
        let bounds = self.bounds(available);
        let along = position.along(self.config.direction);
        let Some(effect) = self.drag.update(along, available, &bounds) else {
            return DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            };
        };

        match effect {
            DragEffect::Updated {
                divider,
                total_delta_px,
                sizes,
            } => {
                let sizes = self.publish(sizes);
                tracing::trace!(
                    target: "splitter.layout",
                    divider,
                    total_delta_px,
                    sizes = ?sizes,
                    "drag updated"
                );
                DragEffect::Updated {
                    divider,
                    total_delta_px,
                    sizes,
                }
            }
            other => other,
        }
    }

    /// Pointer released anywhere.
    pub fn pointer_up(&mut self) -> DragEffect {
        self.end_drag(DragEndReason::PointerUp)
    }

    /// The host aborted the pointer stream.
    pub fn pointer_cancel(&mut self) -> DragEffect {
        self.end_drag(DragEndReason::PointerCancel)
    }

    /// Key pressed on the focused `divider`. Returns the published vector when
    /// the key moved it.
    ///
    /// # Panics
    ///
    /// Panics when `divider` does not exist.
    pub fn key_down(&mut self, divider: usize, key: &KeyEvent) -> Option<Vec<f64>> {
        self.assert_divider(divider);
        if self.drag.is_dragging() || !self.model.divider_resizable(divider) {
            return None;
        }

        let bounds = self.bounds(self.available_length());
        let next = self.keyboard.resize(
            &self.current_sizes(),
            divider,
            self.config.direction,
            key,
            &bounds,
        )?;
        let sizes = self.publish(next);
        tracing::trace!(target: "splitter.layout", divider, sizes = ?sizes, "keyboard resize");
        Some(sizes)
    }

    /// Flip the collapsed state of a collapsible panel.
    pub fn toggle_collapse(&mut self, index: usize) -> Option<Vec<f64>> {
        if self.model.is_collapsed(index) {
            self.expand(index)
        } else {
            self.collapse(index)
        }
    }

    /// Collapse a collapsible panel. Returns `None` when the panel is not
    /// collapsible, already collapsed, or the last expanded panel.
    pub fn collapse(&mut self, index: usize) -> Option<Vec<f64>> {
        if !self.panels[index].collapsible {
            return None;
        }
        self.collapse_unchecked(index, true)
    }

    /// Expand a collapsed, collapsible panel. Returns `None` when the panel is
    /// not collapsible, not collapsed, or its siblings have no room to give.
    pub fn expand(&mut self, index: usize) -> Option<Vec<f64>> {
        if !self.panels[index].collapsible {
            return None;
        }
        self.expand_unchecked(index, true)
    }

    /// Rendering hints for `divider`.
    #[must_use]
    pub fn gutter_info(&self, divider: usize) -> GutterInfo {
        self.assert_divider(divider);
        let (start, end) = (divider, divider + 1);
        let start_collapsed = self.model.is_collapsed(start);
        let end_collapsed = self.model.is_collapsed(end);
        let can_resize = self.model.divider_resizable(divider);
        let sizes = self.current_sizes();

        GutterInfo {
            divider,
            can_resize,
            focusable: self.panels[start].resizable && !start_collapsed,
            orientation: self.config.direction.divider_orientation(),
            value_now: sizes[start].round().clamp(0.0, TOTAL_PERCENT) as u32,
            cursor: if can_resize {
                CursorIcon::resize_for(self.config.direction)
            } else {
                CursorIcon::Default
            },
            show_start: self.panels[start].collapsible && !end_collapsed,
            show_end: self.panels[end].collapsible && !start_collapsed,
            start_collapsed,
            end_collapsed,
        }
    }

    /// Pixel lengths for the current sizes at the recorded container length.
    ///
    /// Collapsed panels get `0`; every other panel gets its share of the
    /// container minus an even share of the divider thickness.
    #[must_use]
    pub fn panel_extents(&self) -> PanelExtents {
        let count = self.panel_count();
        let gutter = self.config.gutter_size;
        let gutter_share = self.divider_count() as f64 * gutter / count as f64;

        let panels: Vec<f64> = self
            .current_sizes()
            .iter()
            .enumerate()
            .map(|(index, &size)| {
                if self.model.is_collapsed(index) {
                    0.0
                } else {
                    (size / TOTAL_PERCENT * self.container_length - gutter_share).max(0.0)
                }
            })
            .collect();

        let mut dividers = Vec::with_capacity(self.divider_count());
        let mut offset = 0.0;
        for &length in &panels[..self.divider_count()] {
            offset += length;
            dividers.push(offset);
            offset += gutter;
        }
        PanelExtents { panels, dividers }
    }

    fn collapse_unchecked(&mut self, index: usize, notify: bool) -> Option<Vec<f64>> {
        if self.model.is_collapsed(index) || self.model.expanded_count() <= 1 {
            return None;
        }
        if self.drag.is_dragging() {
            let _ = self.end_drag(DragEndReason::CollapseToggled);
        }

        let sizes = self.current_sizes();
        self.memory.remember(index, &sizes);
        let next = collapse(&sizes, index, &self.model.expanded_flags());
        let _ = self.model.set_collapsed(index, true);
        tracing::debug!(target: "splitter.layout", panel = index, "panel collapsed");

        if notify && let Some(listener) = self.listener.as_mut() {
            listener.on_collapse(index, true);
        }
        Some(self.publish(next))
    }

    fn expand_unchecked(&mut self, index: usize, notify: bool) -> Option<Vec<f64>> {
        if !self.model.is_collapsed(index) {
            return None;
        }

        let sizes = self.current_sizes();
        let remembered = self.memory.restore_size(index, self.panel_count());
        let mut expanded = self.model.expanded_flags();
        expanded[index] = true;
        let min_percents = self.model.min_percents(self.available_length());
        let next = expand(&sizes, index, remembered, &expanded, &min_percents);

        // Siblings pinned at their minimums leave nothing to grant; the panel
        // stays collapsed rather than turning expanded at zero.
        let granted = next[index] - sizes[index];
        if granted <= RENORMALIZE_TOLERANCE {
            tracing::debug!(
                target: "splitter.layout",
                panel = index,
                requested = remembered,
                "no room to expand; panel stays collapsed"
            );
            return None;
        }

        if self.drag.is_dragging() {
            let _ = self.end_drag(DragEndReason::CollapseToggled);
        }
        let _ = self.model.set_collapsed(index, false);
        tracing::debug!(
            target: "splitter.layout",
            panel = index,
            requested = remembered,
            granted,
            "panel expanded"
        );

        if notify && let Some(listener) = self.listener.as_mut() {
            listener.on_collapse(index, false);
        }
        Some(self.publish(next))
    }

    fn end_drag(&mut self, reason: DragEndReason) -> DragEffect {
        let effect = self.drag.end(reason);
        if let DragEffect::Ended { divider, reason } = effect {
            tracing::debug!(target: "splitter.layout", divider, reason = ?reason, "drag ended");
        }
        effect
    }

    fn publish(&mut self, sizes: Vec<f64>) -> Vec<f64> {
        let published = match self.mode {
            SizeMode::Owned => self.model.apply_vector(sizes).to_vec(),
            SizeMode::Controlled => self.model.normalized(sizes),
        };
        if let Some(listener) = self.listener.as_mut() {
            listener.on_sizes_change(&published);
        }
        published
    }

    fn bounds(&self, available: f64) -> Vec<PercentBounds> {
        self.model.percent_bounds(available)
    }

    fn assert_divider(&self, divider: usize) {
        assert!(
            divider < self.divider_count(),
            "divider {divider} out of range for {} panels",
            self.panel_count()
        );
    }
}

impl Drop for Splitter {
    fn drop(&mut self) {
        if self.drag.is_dragging() {
            let _ = self.end_drag(DragEndReason::Teardown);
        }
    }
}

impl fmt::Debug for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Splitter")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("sizes", &self.current_sizes())
            .field("collapsed", &self.model.collapsed_flags())
            .field("drag", &self.drag.state())
            .field("container_length", &self.container_length)
            .finish_non_exhaustive()
    }
}
