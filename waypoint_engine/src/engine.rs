// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation engine: section registry, candidate collection, focus
//! transitions, and directional dispatch.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use waypoint_geometry::{Candidate, Direction, NavQuery, navigate};

use crate::config::{Config, ConfigPatch, EnterTo, LeaveTarget, Restrict};
use crate::error::EngineError;
use crate::events::{Cause, EventOutcome, NavEvent};
use crate::host::Host;
use crate::keys::{KeyCode, Modifiers};
use crate::section::{PreviousLink, Section};

/// Outcome of consulting a section's leave-for override for one direction.
enum LeaveOutcome {
    /// No override configured; continue with normal navigation.
    NoOverride,
    /// The override explicitly blocks navigation in this direction.
    Blocked,
    /// The override selector resolved and its target received focus.
    Focused,
    /// The override selector resolved to nothing focusable.
    Unresolved,
}

/// A directional focus-navigation engine.
///
/// One engine instance manages a set of named [`Section`]s and a single
/// focus. The hosting application constructs the engine explicitly and
/// passes its [`Host`] implementation into every call; there is no hidden
/// process-wide instance, so tests can run many engines in parallel.
///
/// All engine state is confined to the caller's thread. The engine performs
/// no locking; a multi-threaded host must funnel all calls (including the
/// native focus/blur notifications) through one logical thread.
pub struct Engine<H: Host> {
    sections: Vec<Section<H::Element>>,
    global: Config<H::Element>,
    default_section_id: Option<String>,
    last_section_id: Option<String>,
    paused: bool,
    during_focus_change: bool,
    id_counter: u64,
    pending_refocus: Option<H::Element>,
}

impl<H: Host> core::fmt::Debug for Engine<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("sections", &self.sections.len())
            .field("default_section_id", &self.default_section_id)
            .field("last_section_id", &self.last_section_id)
            .field("paused", &self.paused)
            .field("during_focus_change", &self.during_focus_change)
            .finish_non_exhaustive()
    }
}

impl<H: Host> Default for Engine<H> {
    fn default() -> Self {
        Self::new()
    }
}

fn with_rects<H: Host>(host: &H, pool: &[H::Element]) -> Vec<Candidate<H::Element>> {
    pool.iter()
        .map(|&e| Candidate {
            id: e,
            rect: host.bounding_box(e),
        })
        .collect()
}

impl<H: Host> Engine<H> {
    /// Create an engine with stock defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an engine whose engine-wide default configuration is `config`.
    #[must_use]
    pub fn with_config(config: Config<H::Element>) -> Self {
        Self {
            sections: Vec::new(),
            global: config,
            default_section_id: None,
            last_section_id: None,
            paused: false,
            during_focus_change: false,
            id_counter: 0,
            pending_refocus: None,
        }
    }

    // ---------------------------------------------------------------------
    // Registry

    /// Register a section and return its id.
    ///
    /// When `id` is `None` a fresh `section-<n>` id is generated from a
    /// monotonic counter. An explicit id that is already registered fails
    /// with [`EngineError::DuplicateSection`].
    pub fn add_section(
        &mut self,
        id: Option<&str>,
        patch: ConfigPatch<H::Element>,
    ) -> Result<String, EngineError> {
        let id = match id {
            Some(id) => {
                if self.section_index(id).is_some() {
                    return Err(EngineError::DuplicateSection(id.to_string()));
                }
                id.to_string()
            }
            None => self.generate_id(),
        };
        let disabled = patch.disabled.unwrap_or(self.global.disabled);
        self.sections.push(Section::new(id.clone(), patch, disabled));
        Ok(id)
    }

    /// Remove a section. Returns false if the id is unknown.
    ///
    /// Removing the section pointed to by the last-used or default id also
    /// clears that pointer.
    pub fn remove_section(&mut self, id: &str) -> bool {
        let Some(index) = self.section_index(id) else {
            return false;
        };
        self.sections.remove(index);
        if self.last_section_id.as_deref() == Some(id) {
            self.last_section_id = None;
        }
        if self.default_section_id.as_deref() == Some(id) {
            self.default_section_id = None;
        }
        true
    }

    /// Re-enable navigation on a section. Returns false if the id is unknown.
    pub fn enable_section(&mut self, id: &str) -> bool {
        match self.section_index(id) {
            Some(index) => {
                self.sections[index].disabled = false;
                true
            }
            None => false,
        }
    }

    /// Disable navigation on a section. Returns false if the id is unknown.
    pub fn disable_section(&mut self, id: &str) -> bool {
        match self.section_index(id) {
            Some(index) => {
                self.sections[index].disabled = true;
                true
            }
            None => false,
        }
    }

    /// Merge `patch` into a section's configuration, or into the engine-wide
    /// default configuration when `id` is `None`.
    pub fn configure(
        &mut self,
        id: Option<&str>,
        patch: ConfigPatch<H::Element>,
    ) -> Result<(), EngineError> {
        match id {
            Some(id) => {
                let Some(index) = self.section_index(id) else {
                    return Err(EngineError::UnknownSection(id.to_string()));
                };
                if let Some(disabled) = patch.disabled {
                    self.sections[index].disabled = disabled;
                }
                self.sections[index].patch.merge(patch);
                Ok(())
            }
            None => {
                patch.apply_to(&mut self.global);
                Ok(())
            }
        }
    }

    /// Choose the section tried first by [`Engine::focus_section`] when no
    /// explicit target is given. `None` clears the default.
    pub fn set_default_section(&mut self, id: Option<&str>) -> Result<(), EngineError> {
        match id {
            Some(id) => {
                if self.section_index(id).is_none() {
                    return Err(EngineError::UnknownSection(id.to_string()));
                }
                self.default_section_id = Some(id.to_string());
                Ok(())
            }
            None => {
                self.default_section_id = None;
                Ok(())
            }
        }
    }

    /// Clear the remembered focus state (`last_focused` and the previous
    /// link) of one section, or of every section when `id` is `None`.
    pub fn reset_section(&mut self, id: Option<&str>) -> Result<(), EngineError> {
        match id {
            Some(id) => {
                let Some(index) = self.section_index(id) else {
                    return Err(EngineError::UnknownSection(id.to_string()));
                };
                self.sections[index].forget();
                Ok(())
            }
            None => {
                for section in &mut self.sections {
                    section.forget();
                }
                Ok(())
            }
        }
    }

    /// Drop every section and reset navigation state.
    ///
    /// The pause flag and the id counter survive, so ids generated after a
    /// clear never collide with ids handed out before it.
    pub fn clear(&mut self) {
        self.sections.clear();
        self.default_section_id = None;
        self.last_section_id = None;
        self.during_focus_change = false;
        self.pending_refocus = None;
    }

    /// Number of registered sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether a section with this id is registered.
    #[must_use]
    pub fn has_section(&self, id: &str) -> bool {
        self.section_index(id).is_some()
    }

    /// The section registered under `id`.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section<H::Element>> {
        self.section_index(id).map(|i| &self.sections[i])
    }

    /// The effective (default-merged) configuration of a section.
    ///
    /// This is also how wrapper layers read options the engine itself never
    /// consults, such as the tab-index ignore list.
    #[must_use]
    pub fn section_config(&self, id: &str) -> Option<Config<H::Element>> {
        self.section_index(id).map(|i| self.effective_config(i))
    }

    /// The id of the default section, if set.
    #[must_use]
    pub fn default_section(&self) -> Option<&str> {
        self.default_section_id.as_deref()
    }

    /// The id of the section that most recently held focus, if any.
    #[must_use]
    pub fn last_section(&self) -> Option<&str> {
        self.last_section_id.as_deref()
    }

    /// Whether the engine is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspend event-emitting navigation. While paused, focus changes take
    /// the silent path and key input is ignored. Idempotent.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume normal navigation. Idempotent.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    fn generate_id(&mut self) -> String {
        loop {
            self.id_counter += 1;
            let id = format!("section-{}", self.id_counter);
            if self.section_index(&id).is_none() {
                return id;
            }
        }
    }

    fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    fn effective_config(&self, index: usize) -> Config<H::Element> {
        self.global.with_patch(&self.sections[index].patch)
    }

    // ---------------------------------------------------------------------
    // Candidate collection

    /// The first registered section whose selector matches `element`.
    fn section_index_of(&self, host: &H, element: H::Element) -> Option<usize> {
        (0..self.sections.len())
            .find(|&i| host.matches(element, &self.effective_config(i).selector))
    }

    fn is_navigable(
        &self,
        host: &H,
        element: H::Element,
        index: usize,
        verify_selector: bool,
    ) -> bool {
        let section = &self.sections[index];
        if section.disabled || !host.is_attached(element) {
            return false;
        }
        let rect = host.bounding_box(element);
        if rect.width() <= 0.0 && rect.height() <= 0.0 {
            return false;
        }
        if host.is_element_disabled(element) {
            return false;
        }
        let config = self.effective_config(index);
        if verify_selector && !host.matches(element, &config.selector) {
            return false;
        }
        if let Some(filter) = config.navigable_filter.as_deref() {
            if !filter(element, &section.id) {
                return false;
            }
        }
        true
    }

    /// The section's currently navigable elements, in query order.
    fn collect(&self, host: &H, index: usize) -> Vec<H::Element> {
        let config = self.effective_config(index);
        host.query(&config.selector)
            .into_iter()
            .filter(|&e| self.is_navigable(host, e, index, false))
            .collect()
    }

    fn section_default_element(&self, host: &H, index: usize) -> Option<H::Element> {
        let config = self.effective_config(index);
        if config.default_element.is_empty() {
            return None;
        }
        let element = host.query(&config.default_element).into_iter().next()?;
        self.is_navigable(host, element, index, true).then_some(element)
    }

    fn section_last_focused(&self, host: &H, index: usize) -> Option<H::Element> {
        let element = self.sections[index].last_focused?;
        self.is_navigable(host, element, index, true).then_some(element)
    }

    fn first_navigable(&self, host: &H, index: usize) -> Option<H::Element> {
        self.collect(host, index).into_iter().next()
    }

    // ---------------------------------------------------------------------
    // Focus controller

    fn focus_changed(&mut self, element: H::Element, index: usize) {
        self.sections[index].last_focused = Some(element);
        self.last_section_id = Some(self.sections[index].id.clone());
    }

    fn apply_focus(&self, host: &mut H, element: H::Element, index: usize) {
        match self.effective_config(index).scroll_options {
            Some(options) => {
                host.scroll_into_view(element, &options);
                host.focus(element);
            }
            None => host.focus(element),
        }
    }

    fn silent_focus(
        &mut self,
        host: &mut H,
        current: Option<H::Element>,
        element: H::Element,
        index: usize,
    ) {
        if let Some(current) = current {
            host.blur(current);
        }
        self.apply_focus(host, element, index);
        self.focus_changed(element, index);
    }

    /// Perform one focus transition onto `element` in the section at
    /// `index`, firing the focus lifecycle events.
    ///
    /// Re-entrant calls (the transition guard is already engaged) and calls
    /// while paused take the silent path: blur, scroll + focus, bookkeeping,
    /// no events.
    ///
    /// Known asymmetry, kept for compatibility with the source behavior: a
    /// vetoed `willfocus` aborts the transition *after* the previous element
    /// was blurred, leaving nothing focused. Listeners that veto `willfocus`
    /// are expected to place focus themselves.
    ///
    /// Every exit path clears the transition guard; only a nested call
    /// leaves it engaged, because the outer transition owns it.
    fn focus_element(
        &mut self,
        host: &mut H,
        element: H::Element,
        index: usize,
        direction: Option<Direction>,
    ) -> bool {
        if !host.is_attached(element) {
            return false;
        }
        let current = host.focused_element();

        if self.during_focus_change {
            self.silent_focus(host, current, element, index);
            return true;
        }
        self.during_focus_change = true;

        if self.paused {
            self.silent_focus(host, current, element, index);
            self.during_focus_change = false;
            return true;
        }

        let section_id = self.sections[index].id.clone();

        if let Some(current) = current {
            let detail = NavEvent::WillUnfocus {
                next: Some(element),
                next_section: Some(section_id.clone()),
                direction,
                native: false,
            };
            if host.emit(current, &detail) == EventOutcome::Cancelled {
                self.during_focus_change = false;
                return false;
            }
            host.blur(current);
            let detail = NavEvent::Unfocused {
                next: Some(element),
                next_section: Some(section_id.clone()),
                direction,
                native: false,
            };
            host.emit(current, &detail);
        }

        let detail = NavEvent::WillFocus {
            previous: current,
            section: section_id.clone(),
            direction,
            native: false,
        };
        if host.emit(element, &detail) == EventOutcome::Cancelled {
            self.during_focus_change = false;
            return false;
        }

        self.apply_focus(host, element, index);
        let detail = NavEvent::Focused {
            previous: current,
            section: section_id,
            direction,
            native: false,
        };
        host.emit(element, &detail);

        self.during_focus_change = false;
        self.focus_changed(element, index);
        true
    }

    // ---------------------------------------------------------------------
    // Dispatcher

    /// Focus a target: a section id, a selector, or (with `None`) the best
    /// available section.
    ///
    /// With `silent` the engine is paused around the call (unless it already
    /// was), so the change fires no lifecycle events.
    pub fn focus(
        &mut self,
        host: &mut H,
        target: Option<&str>,
        silent: bool,
        direction: Option<Direction>,
    ) -> bool {
        let auto_pause = !self.paused && silent;
        if auto_pause {
            self.pause();
        }
        let result = match target {
            None => self.focus_section(host, None, direction),
            Some(target) if self.has_section(target) => {
                self.focus_section(host, Some(target), direction)
            }
            Some(target) => self.focus_extended_selector(host, target, direction),
        };
        if auto_pause {
            self.resume();
        }
        result
    }

    /// Focus the first element matching `selector`, if it is navigable.
    fn focus_extended_selector(
        &mut self,
        host: &mut H,
        selector: &str,
        direction: Option<Direction>,
    ) -> bool {
        let Some(element) = host.query(selector).into_iter().next() else {
            return false;
        };
        let Some(index) = self.section_index_of(host, element) else {
            return false;
        };
        if !self.is_navigable(host, element, index, false) {
            return false;
        }
        self.focus_element(host, element, index, direction)
    }

    /// Focus a section's entry element.
    ///
    /// With an explicit `id`, only that section is tried. With `None` the
    /// default section is tried first, then the section that most recently
    /// held focus, then every remaining section in registration order;
    /// disabled and unknown sections are skipped. The entry element is
    /// resolved per the section's enter-to policy: last-focused → default →
    /// first navigable under [`EnterTo::LastFocused`], default →
    /// last-focused → first navigable otherwise.
    pub fn focus_section(
        &mut self,
        host: &mut H,
        id: Option<&str>,
        direction: Option<Direction>,
    ) -> bool {
        let mut range: Vec<usize> = Vec::new();
        let push = |sections: &[Section<H::Element>], range: &mut Vec<usize>, id: &str| {
            if let Some(index) = sections.iter().position(|s| s.id == id) {
                if !sections[index].disabled && !range.contains(&index) {
                    range.push(index);
                }
            }
        };

        match id {
            Some(id) => push(&self.sections, &mut range, id),
            None => {
                if let Some(default) = self.default_section_id.clone() {
                    push(&self.sections, &mut range, &default);
                }
                if let Some(last) = self.last_section_id.clone() {
                    push(&self.sections, &mut range, &last);
                }
                for index in 0..self.sections.len() {
                    if !self.sections[index].disabled && !range.contains(&index) {
                        range.push(index);
                    }
                }
            }
        }

        for index in range {
            let entry = match self.effective_config(index).enter_to {
                EnterTo::LastFocused => self
                    .section_last_focused(host, index)
                    .or_else(|| self.section_default_element(host, index))
                    .or_else(|| self.first_navigable(host, index)),
                _ => self
                    .section_default_element(host, index)
                    .or_else(|| self.section_last_focused(host, index))
                    .or_else(|| self.first_navigable(host, index)),
            };
            if let Some(element) = entry {
                return self.focus_element(host, element, index, direction);
            }
        }
        false
    }

    /// Move focus in `direction` from the first match of `selector`, or
    /// from the currently focused element.
    ///
    /// Emits a cancelable `willmove` before any candidate search; returns
    /// false when the move was vetoed, the element has no section, or no
    /// destination could be reached.
    pub fn move_focus(
        &mut self,
        host: &mut H,
        direction: Direction,
        selector: Option<&str>,
    ) -> bool {
        let element = match selector {
            Some(selector) => host.query(selector).into_iter().next(),
            None => host.focused_element(),
        };
        let Some(element) = element else {
            return false;
        };
        let Some(index) = self.section_index_of(host, element) else {
            return false;
        };

        let detail = NavEvent::WillMove {
            direction,
            section: self.sections[index].id.clone(),
            cause: Cause::Api,
        };
        if host.emit(element, &detail) == EventOutcome::Cancelled {
            return false;
        }
        self.focus_next(host, direction, element, index)
    }

    fn fire_navigate_failed(&self, host: &mut H, element: H::Element, direction: Direction) {
        host.emit(element, &NavEvent::NavigateFailed { direction });
    }

    fn goto_leave_for(&mut self, host: &mut H, index: usize, direction: Direction) -> LeaveOutcome {
        let config = self.effective_config(index);
        match config.leave_for.get(direction) {
            None => LeaveOutcome::NoOverride,
            Some(LeaveTarget::Block) => LeaveOutcome::Blocked,
            Some(LeaveTarget::Selector(selector)) => {
                let selector = selector.clone();
                if self.focus_extended_selector(host, &selector, Some(direction)) {
                    LeaveOutcome::Focused
                } else {
                    LeaveOutcome::Unresolved
                }
            }
        }
    }

    fn focus_next(
        &mut self,
        host: &mut H,
        direction: Direction,
        element: H::Element,
        index: usize,
    ) -> bool {
        // A per-element override preempts geometric navigation entirely: an
        // empty override fails the move on the spot, a selector that
        // resolves wins, and one that doesn't fails the move.
        if let Some(override_selector) = host.direction_override(element, direction) {
            if override_selector.is_empty()
                || !self.focus_extended_selector(host, &override_selector, Some(direction))
            {
                self.fire_navigate_failed(host, element, direction);
                return false;
            }
            return true;
        }

        let per_section: Vec<Vec<H::Element>> = (0..self.sections.len())
            .map(|i| self.collect(host, i))
            .collect();
        let all: Vec<H::Element> = per_section.iter().flatten().copied().collect();

        let config = self.effective_config(index);
        let preferred = if config.remember_source {
            self.sections[index].previous.as_ref().and_then(|previous| {
                (previous.destination == element && previous.reverse == direction)
                    .then_some(previous.target)
            })
        } else {
            None
        };
        let query = NavQuery {
            direction,
            straight_only: config.straight_only,
            straight_overlap_threshold: config.straight_overlap_threshold,
        };
        let target_rect = host.bounding_box(element);

        let next = match config.restrict {
            Restrict::SelfOnly | Restrict::SelfFirst => {
                let own: Vec<H::Element> = per_section[index]
                    .iter()
                    .copied()
                    .filter(|&e| e != element)
                    .collect();
                let mut next =
                    navigate(target_rect, &query, &with_rects(host, &own), preferred);
                if next.is_none() && config.restrict == Restrict::SelfFirst {
                    let others: Vec<H::Element> = all
                        .iter()
                        .copied()
                        .filter(|e| !per_section[index].contains(e))
                        .collect();
                    next = navigate(target_rect, &query, &with_rects(host, &others), preferred);
                }
                next
            }
            Restrict::None => {
                let universe: Vec<H::Element> =
                    all.iter().copied().filter(|&e| e != element).collect();
                navigate(target_rect, &query, &with_rects(host, &universe), preferred)
            }
        };

        let Some(mut next) = next else {
            match self.goto_leave_for(host, index, direction) {
                LeaveOutcome::Focused => return true,
                LeaveOutcome::NoOverride | LeaveOutcome::Blocked | LeaveOutcome::Unresolved => {
                    self.fire_navigate_failed(host, element, direction);
                    return false;
                }
            }
        };

        let Some(next_index) = self.section_index_of(host, next) else {
            return false;
        };

        if next_index != index {
            match self.goto_leave_for(host, index, direction) {
                LeaveOutcome::Focused => return true,
                LeaveOutcome::Blocked => {
                    self.fire_navigate_failed(host, element, direction);
                    return false;
                }
                // An unresolvable override falls through to the
                // destination's entry policy.
                LeaveOutcome::NoOverride | LeaveOutcome::Unresolved => {}
            }

            let entry = match self.effective_config(next_index).enter_to {
                EnterTo::LastFocused => self
                    .section_last_focused(host, next_index)
                    .or_else(|| self.section_default_element(host, next_index)),
                EnterTo::DefaultElement => self.section_default_element(host, next_index),
                EnterTo::Nearest => None,
            };
            if let Some(entry) = entry {
                next = entry;
            }
        }

        self.sections[index].previous = Some(PreviousLink {
            target: element,
            destination: next,
            reverse: direction.reverse(),
        });
        self.focus_element(host, next, next_index, Some(direction))
    }

    // ---------------------------------------------------------------------
    // Key input

    /// Translate a key press into navigation.
    ///
    /// Returns true when the host should suppress the key's default action.
    /// Any held modifier, an unrecognized key, a paused engine, or an empty
    /// registry makes this a no-op.
    pub fn on_key_down(&mut self, host: &mut H, key: KeyCode, modifiers: Modifiers) -> bool {
        if !modifiers.is_empty() || self.sections.is_empty() || self.paused {
            return false;
        }

        let Some(direction) = key.direction() else {
            // Enter.
            if let Some(element) = host.focused_element() {
                if self.section_index_of(host, element).is_some() {
                    return host.emit(element, &NavEvent::EnterDown) == EventOutcome::Cancelled;
                }
            }
            return false;
        };

        let mut current = host.focused_element();
        if current.is_none() {
            if let Some(last) = self.last_section_id.clone() {
                if let Some(index) = self.section_index(&last) {
                    current = self.section_last_focused(host, index);
                }
            }
        }
        let Some(element) = current else {
            self.focus_section(host, None, Some(direction));
            return true;
        };
        let Some(index) = self.section_index_of(host, element) else {
            return false;
        };

        let detail = NavEvent::WillMove {
            direction,
            section: self.sections[index].id.clone(),
            cause: Cause::Keydown,
        };
        if host.emit(element, &detail) == EventOutcome::Allowed {
            self.focus_next(host, direction, element, index);
        }
        true
    }

    /// Translate a key release. Only Enter is observed; returns true when
    /// the host should suppress the key's default action.
    pub fn on_key_up(&mut self, host: &mut H, key: KeyCode, modifiers: Modifiers) -> bool {
        if !modifiers.is_empty() || self.sections.is_empty() || self.paused {
            return false;
        }
        if key != KeyCode::Enter {
            return false;
        }
        if let Some(element) = host.focused_element() {
            if self.section_index_of(host, element).is_some() {
                return host.emit(element, &NavEvent::EnterUp) == EventOutcome::Cancelled;
            }
        }
        false
    }

    // ---------------------------------------------------------------------
    // Native focus integration

    /// Notify the engine that `element` received focus natively (pointer
    /// click, host-driven focus), outside an engine transition.
    ///
    /// Fires `willfocus`/`focused` with `native: true`; a veto blurs the
    /// element back under the transition guard. While paused only the
    /// bookkeeping is updated.
    pub fn on_native_focus(&mut self, host: &mut H, element: H::Element) {
        if self.sections.is_empty() || self.during_focus_change {
            return;
        }
        let Some(index) = self.section_index_of(host, element) else {
            return;
        };
        if self.paused {
            self.focus_changed(element, index);
            return;
        }
        let section_id = self.sections[index].id.clone();
        let detail = NavEvent::WillFocus {
            previous: None,
            section: section_id.clone(),
            direction: None,
            native: true,
        };
        if host.emit(element, &detail) == EventOutcome::Cancelled {
            self.during_focus_change = true;
            host.blur(element);
            self.during_focus_change = false;
        } else {
            let detail = NavEvent::Focused {
                previous: None,
                section: section_id,
                direction: None,
                native: true,
            };
            host.emit(element, &detail);
            self.focus_changed(element, index);
        }
    }

    /// Notify the engine that `element` lost focus natively.
    ///
    /// Fires `willunfocus`/`unfocused` with `native: true`. Native blur
    /// cannot be synchronously cancelled, so a veto parks the element and
    /// asks the host (via [`Host::schedule_refocus`]) to run
    /// [`Engine::apply_deferred_refocus`] on the next event-loop turn; the
    /// transition guard stays engaged for the whole deferred window.
    pub fn on_native_blur(&mut self, host: &mut H, element: H::Element) {
        if self.paused || self.sections.is_empty() || self.during_focus_change {
            return;
        }
        if self.section_index_of(host, element).is_none() {
            return;
        }
        let detail = NavEvent::WillUnfocus {
            next: None,
            next_section: None,
            direction: None,
            native: true,
        };
        if host.emit(element, &detail) == EventOutcome::Cancelled {
            self.during_focus_change = true;
            self.pending_refocus = Some(element);
            host.schedule_refocus();
        } else {
            let detail = NavEvent::Unfocused {
                next: None,
                next_section: None,
                direction: None,
                native: true,
            };
            host.emit(element, &detail);
        }
    }

    /// Complete a deferred refocus requested by a vetoed native blur,
    /// restoring focus and releasing the transition guard.
    ///
    /// A no-op when no refocus is pending.
    pub fn apply_deferred_refocus(&mut self, host: &mut H) {
        if let Some(element) = self.pending_refocus.take() {
            host.focus(element);
            self.during_focus_change = false;
        }
    }
}
