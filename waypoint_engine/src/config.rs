// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section and engine-wide configuration.
//!
//! Configuration is layered: the engine carries one complete [`Config`] of
//! defaults, and each section carries a [`ConfigPatch`] holding only the
//! options it overrides. The effective configuration of a section is
//! computed per call by applying the patch option by option — never by
//! wholesale replacement — so later changes to the engine defaults shine
//! through every option a section left unset.

use alloc::string::String;
use alloc::sync::Arc;

use waypoint_geometry::Direction;

/// Predicate deciding whether an element may be navigated to.
///
/// Receives the element and the id of the section being searched; returning
/// `false` excludes the element from the candidate set.
pub type NavigableFilter<E> = Arc<dyn Fn(E, &str) -> bool>;

/// Cross-section entry policy: which element receives focus when a move
/// enters a different section.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EnterTo {
    /// Keep the geometrically chosen candidate.
    #[default]
    Nearest,
    /// Prefer the element that last held focus in the section, falling back
    /// to the default element, then the first navigable element.
    LastFocused,
    /// Prefer the section's configured default element.
    DefaultElement,
}

/// How far a candidate search extends beyond the current section.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Restrict {
    /// Search the current section first; widen to all other sections only
    /// when it yields nothing.
    #[default]
    SelfFirst,
    /// Never leave the current section.
    SelfOnly,
    /// Search the full candidate universe at once.
    None,
}

/// Target of a per-direction leave override.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeaveTarget {
    /// Explicitly block navigation out of the section in this direction.
    Block,
    /// Redirect to the first element matching this selector.
    Selector(String),
}

/// Per-direction leave overrides for a section.
///
/// A direction with no entry falls through to normal geometric navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaveFor {
    /// Override applied when leaving upward.
    pub up: Option<LeaveTarget>,
    /// Override applied when leaving downward.
    pub down: Option<LeaveTarget>,
    /// Override applied when leaving leftward.
    pub left: Option<LeaveTarget>,
    /// Override applied when leaving rightward.
    pub right: Option<LeaveTarget>,
}

impl LeaveFor {
    /// The override configured for `direction`, if any.
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<&LeaveTarget> {
        match direction {
            Direction::Up => self.up.as_ref(),
            Direction::Down => self.down.as_ref(),
            Direction::Left => self.left.as_ref(),
            Direction::Right => self.right.as_ref(),
        }
    }

    /// Set the override for `direction`.
    pub fn set(&mut self, direction: Direction, target: Option<LeaveTarget>) {
        match direction {
            Direction::Up => self.up = target,
            Direction::Down => self.down = target,
            Direction::Left => self.left = target,
            Direction::Right => self.right = target,
        }
    }
}

/// Scroll animation style, mirroring `ScrollIntoViewOptions.behavior`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Host-defined default.
    #[default]
    Auto,
    /// Animated scrolling.
    Smooth,
    /// Jump without animation.
    Instant,
}

/// Scroll target alignment within the scrollport.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollAlignment {
    /// Align to the starting edge.
    Start,
    /// Center within the scrollport.
    Center,
    /// Align to the ending edge.
    End,
    /// Scroll the minimal amount that makes the element visible.
    Nearest,
}

/// Scroll-into-view behavior applied when focusing an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollOptions {
    /// Animation style.
    pub behavior: ScrollBehavior,
    /// Block-axis (vertical) alignment.
    pub block: ScrollAlignment,
    /// Inline-axis (horizontal) alignment.
    pub inline: ScrollAlignment,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Auto,
            block: ScrollAlignment::Start,
            inline: ScrollAlignment::Nearest,
        }
    }
}

/// A complete, effective configuration.
///
/// `Default` reproduces the engine's stock behavior; the engine-wide default
/// config starts from it, and a section's effective config is derived from
/// the engine default via [`Config::with_patch`].
pub struct Config<E> {
    /// Query defining a section's member elements.
    pub selector: String,
    /// Restrict candidates to those directly in line (no diagonal-only
    /// matches).
    pub straight_only: bool,
    /// Minimum fractional overlap (0–1) on the cross axis to count as
    /// straight.
    pub straight_overlap_threshold: f64,
    /// Prefer re-entering via the element that previously left, when
    /// returning along the reverse direction.
    pub remember_source: bool,
    /// Section-level navigation kill switch.
    pub disabled: bool,
    /// Query for the element to prefer on first entry; empty for none.
    pub default_element: String,
    /// Cross-section entry policy.
    pub enter_to: EnterTo,
    /// Per-direction overrides applied when leaving the section.
    pub leave_for: LeaveFor,
    /// How far candidate search extends beyond the current section.
    pub restrict: Restrict,
    /// Query of elements the (external) discoverability layer must not tag
    /// with a tab index. The engine itself never consults this; it is
    /// carried so wrapper layers can read it off the resolved config.
    pub tab_index_ignore_list: String,
    /// Optional predicate excluding elements from navigation.
    pub navigable_filter: Option<NavigableFilter<E>>,
    /// Scroll behavior applied on focus; `None` means a plain focus call.
    pub scroll_options: Option<ScrollOptions>,
}

impl<E> Default for Config<E> {
    fn default() -> Self {
        Self {
            selector: "[data-focusable=true]".into(),
            straight_only: false,
            straight_overlap_threshold: 0.5,
            remember_source: false,
            disabled: false,
            default_element: String::new(),
            enter_to: EnterTo::Nearest,
            leave_for: LeaveFor::default(),
            restrict: Restrict::SelfFirst,
            tab_index_ignore_list: "a, input, select, textarea, button, iframe, [contentEditable=true]"
                .into(),
            navigable_filter: None,
            scroll_options: None,
        }
    }
}

impl<E> Clone for Config<E> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
            straight_only: self.straight_only,
            straight_overlap_threshold: self.straight_overlap_threshold,
            remember_source: self.remember_source,
            disabled: self.disabled,
            default_element: self.default_element.clone(),
            enter_to: self.enter_to,
            leave_for: self.leave_for.clone(),
            restrict: self.restrict,
            tab_index_ignore_list: self.tab_index_ignore_list.clone(),
            navigable_filter: self.navigable_filter.clone(),
            scroll_options: self.scroll_options,
        }
    }
}

impl<E> core::fmt::Debug for Config<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("selector", &self.selector)
            .field("straight_only", &self.straight_only)
            .field("straight_overlap_threshold", &self.straight_overlap_threshold)
            .field("remember_source", &self.remember_source)
            .field("disabled", &self.disabled)
            .field("default_element", &self.default_element)
            .field("enter_to", &self.enter_to)
            .field("leave_for", &self.leave_for)
            .field("restrict", &self.restrict)
            .field("tab_index_ignore_list", &self.tab_index_ignore_list)
            .field("navigable_filter", &self.navigable_filter.is_some())
            .field("scroll_options", &self.scroll_options)
            .finish()
    }
}

impl<E> Config<E> {
    /// Derive an effective configuration by applying `patch` option by
    /// option on top of `self`.
    #[must_use]
    pub fn with_patch(&self, patch: &ConfigPatch<E>) -> Self {
        let mut out = self.clone();
        patch.apply_to(&mut out);
        out
    }
}

/// A partial configuration: only the options a caller sets.
///
/// Built with the chainable setters and applied over a base [`Config`].
pub struct ConfigPatch<E> {
    /// Overrides [`Config::selector`].
    pub selector: Option<String>,
    /// Overrides [`Config::straight_only`].
    pub straight_only: Option<bool>,
    /// Overrides [`Config::straight_overlap_threshold`].
    pub straight_overlap_threshold: Option<f64>,
    /// Overrides [`Config::remember_source`].
    pub remember_source: Option<bool>,
    /// Overrides [`Config::disabled`].
    pub disabled: Option<bool>,
    /// Overrides [`Config::default_element`].
    pub default_element: Option<String>,
    /// Overrides [`Config::enter_to`].
    pub enter_to: Option<EnterTo>,
    /// Overrides [`Config::leave_for`].
    pub leave_for: Option<LeaveFor>,
    /// Overrides [`Config::restrict`].
    pub restrict: Option<Restrict>,
    /// Overrides [`Config::tab_index_ignore_list`].
    pub tab_index_ignore_list: Option<String>,
    /// Overrides [`Config::navigable_filter`].
    pub navigable_filter: Option<NavigableFilter<E>>,
    /// Overrides [`Config::scroll_options`].
    pub scroll_options: Option<ScrollOptions>,
}

impl<E> Default for ConfigPatch<E> {
    fn default() -> Self {
        Self {
            selector: None,
            straight_only: None,
            straight_overlap_threshold: None,
            remember_source: None,
            disabled: None,
            default_element: None,
            enter_to: None,
            leave_for: None,
            restrict: None,
            tab_index_ignore_list: None,
            navigable_filter: None,
            scroll_options: None,
        }
    }
}

impl<E> Clone for ConfigPatch<E> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
            straight_only: self.straight_only,
            straight_overlap_threshold: self.straight_overlap_threshold,
            remember_source: self.remember_source,
            disabled: self.disabled,
            default_element: self.default_element.clone(),
            enter_to: self.enter_to,
            leave_for: self.leave_for.clone(),
            restrict: self.restrict,
            tab_index_ignore_list: self.tab_index_ignore_list.clone(),
            navigable_filter: self.navigable_filter.clone(),
            scroll_options: self.scroll_options,
        }
    }
}

impl<E> core::fmt::Debug for ConfigPatch<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConfigPatch")
            .field("selector", &self.selector)
            .field("straight_only", &self.straight_only)
            .field("straight_overlap_threshold", &self.straight_overlap_threshold)
            .field("remember_source", &self.remember_source)
            .field("disabled", &self.disabled)
            .field("default_element", &self.default_element)
            .field("enter_to", &self.enter_to)
            .field("leave_for", &self.leave_for)
            .field("restrict", &self.restrict)
            .field("tab_index_ignore_list", &self.tab_index_ignore_list)
            .field("navigable_filter", &self.navigable_filter.is_some())
            .field("scroll_options", &self.scroll_options)
            .finish()
    }
}

impl<E> ConfigPatch<E> {
    /// An empty patch; applying it changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the member-element selector.
    #[must_use]
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Restrict candidates to straight matches.
    #[must_use]
    pub fn straight_only(mut self, value: bool) -> Self {
        self.straight_only = Some(value);
        self
    }

    /// Set the straight-overlap threshold (0–1).
    #[must_use]
    pub fn straight_overlap_threshold(mut self, value: f64) -> Self {
        self.straight_overlap_threshold = Some(value);
        self
    }

    /// Prefer retracing the move that previously left.
    #[must_use]
    pub fn remember_source(mut self, value: bool) -> Self {
        self.remember_source = Some(value);
        self
    }

    /// Start the section disabled (or enabled).
    #[must_use]
    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = Some(value);
        self
    }

    /// Set the first-entry default element selector.
    #[must_use]
    pub fn default_element(mut self, selector: impl Into<String>) -> Self {
        self.default_element = Some(selector.into());
        self
    }

    /// Set the cross-section entry policy.
    #[must_use]
    pub fn enter_to(mut self, value: EnterTo) -> Self {
        self.enter_to = Some(value);
        self
    }

    /// Set the per-direction leave overrides.
    #[must_use]
    pub fn leave_for(mut self, value: LeaveFor) -> Self {
        self.leave_for = Some(value);
        self
    }

    /// Set the candidate-search restriction.
    #[must_use]
    pub fn restrict(mut self, value: Restrict) -> Self {
        self.restrict = Some(value);
        self
    }

    /// Set the discoverability-layer ignore list.
    #[must_use]
    pub fn tab_index_ignore_list(mut self, selector: impl Into<String>) -> Self {
        self.tab_index_ignore_list = Some(selector.into());
        self
    }

    /// Set the navigability predicate.
    #[must_use]
    pub fn navigable_filter(mut self, filter: NavigableFilter<E>) -> Self {
        self.navigable_filter = Some(filter);
        self
    }

    /// Set the scroll-into-view behavior.
    #[must_use]
    pub fn scroll_options(mut self, options: ScrollOptions) -> Self {
        self.scroll_options = Some(options);
        self
    }

    /// Overwrite `target` with every option this patch sets.
    pub fn apply_to(&self, target: &mut Config<E>) {
        if let Some(v) = &self.selector {
            target.selector = v.clone();
        }
        if let Some(v) = self.straight_only {
            target.straight_only = v;
        }
        if let Some(v) = self.straight_overlap_threshold {
            target.straight_overlap_threshold = v.clamp(0.0, 1.0);
        }
        if let Some(v) = self.remember_source {
            target.remember_source = v;
        }
        if let Some(v) = self.disabled {
            target.disabled = v;
        }
        if let Some(v) = &self.default_element {
            target.default_element = v.clone();
        }
        if let Some(v) = self.enter_to {
            target.enter_to = v;
        }
        if let Some(v) = &self.leave_for {
            target.leave_for = v.clone();
        }
        if let Some(v) = self.restrict {
            target.restrict = v;
        }
        if let Some(v) = &self.tab_index_ignore_list {
            target.tab_index_ignore_list = v.clone();
        }
        if let Some(v) = &self.navigable_filter {
            target.navigable_filter = Some(v.clone());
        }
        if let Some(v) = self.scroll_options {
            target.scroll_options = Some(v);
        }
    }

    /// Fold another patch into this one; options set by `other` win.
    pub fn merge(&mut self, other: Self) {
        if other.selector.is_some() {
            self.selector = other.selector;
        }
        if other.straight_only.is_some() {
            self.straight_only = other.straight_only;
        }
        if other.straight_overlap_threshold.is_some() {
            self.straight_overlap_threshold = other.straight_overlap_threshold;
        }
        if other.remember_source.is_some() {
            self.remember_source = other.remember_source;
        }
        if other.disabled.is_some() {
            self.disabled = other.disabled;
        }
        if other.default_element.is_some() {
            self.default_element = other.default_element;
        }
        if other.enter_to.is_some() {
            self.enter_to = other.enter_to;
        }
        if other.leave_for.is_some() {
            self.leave_for = other.leave_for;
        }
        if other.restrict.is_some() {
            self.restrict = other.restrict;
        }
        if other.tab_index_ignore_list.is_some() {
            self.tab_index_ignore_list = other.tab_index_ignore_list;
        }
        if other.navigable_filter.is_some() {
            self.navigable_filter = other.navigable_filter;
        }
        if other.scroll_options.is_some() {
            self.scroll_options = other.scroll_options;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Cfg = Config<u32>;
    type Patch = ConfigPatch<u32>;

    #[test]
    fn defaults_match_the_stock_behavior() {
        let config = Cfg::default();
        assert_eq!(config.selector, "[data-focusable=true]");
        assert!(!config.straight_only);
        assert_eq!(config.straight_overlap_threshold, 0.5);
        assert!(!config.remember_source);
        assert!(!config.disabled);
        assert_eq!(config.enter_to, EnterTo::Nearest);
        assert_eq!(config.restrict, Restrict::SelfFirst);
        assert!(config.navigable_filter.is_none());
        assert!(config.scroll_options.is_none());
    }

    #[test]
    fn patch_overrides_option_by_option() {
        let base = Cfg::default();
        let patch = Patch::new()
            .selector(".menu-item")
            .restrict(Restrict::SelfOnly)
            .enter_to(EnterTo::LastFocused);
        let effective = base.with_patch(&patch);
        assert_eq!(effective.selector, ".menu-item");
        assert_eq!(effective.restrict, Restrict::SelfOnly);
        assert_eq!(effective.enter_to, EnterTo::LastFocused);
        // Untouched options shine through from the base.
        assert_eq!(effective.straight_overlap_threshold, 0.5);
        assert_eq!(
            effective.tab_index_ignore_list,
            base.tab_index_ignore_list
        );
    }

    #[test]
    fn overlap_threshold_is_clamped_on_application() {
        let base = Cfg::default();
        let high = base.with_patch(&Patch::new().straight_overlap_threshold(7.5));
        assert_eq!(high.straight_overlap_threshold, 1.0);
        let low = base.with_patch(&Patch::new().straight_overlap_threshold(-3.0));
        assert_eq!(low.straight_overlap_threshold, 0.0);
    }

    #[test]
    fn merge_lets_the_later_patch_win() {
        let mut patch = Patch::new().selector(".a").straight_only(true);
        patch.merge(Patch::new().selector(".b"));
        assert_eq!(patch.selector.as_deref(), Some(".b"));
        // Options the later patch left unset survive.
        assert_eq!(patch.straight_only, Some(true));
    }

    #[test]
    fn leave_for_is_addressed_by_direction() {
        let mut leave_for = LeaveFor::default();
        leave_for.set(Direction::Right, Some(LeaveTarget::Block));
        leave_for.set(
            Direction::Up,
            Some(LeaveTarget::Selector(".header".into())),
        );
        assert_eq!(leave_for.get(Direction::Right), Some(&LeaveTarget::Block));
        assert_eq!(
            leave_for.get(Direction::Up),
            Some(&LeaveTarget::Selector(".header".into()))
        );
        assert_eq!(leave_for.get(Direction::Down), None);
    }

    #[test]
    fn filter_presence_survives_patching() {
        let base = Cfg::default();
        let filter: NavigableFilter<u32> = Arc::new(|element, _section| element != 3);
        let effective = base.with_patch(&Patch::new().navigable_filter(filter));
        let filter = effective.navigable_filter.expect("filter is set");
        assert!(filter.as_ref()(1, "s"));
        assert!(!filter.as_ref()(3, "s"));
    }
}
