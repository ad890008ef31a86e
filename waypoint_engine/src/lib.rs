// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Engine: directional focus navigation for D-pad and remote-control UIs.
//!
//! ## Overview
//!
//! Applications group focusable elements into named **sections** and move
//! focus between them with up/down/left/right intents instead of pointer
//! input. The [`Engine`] owns the section registry and the focus-transition
//! state machine; the geometric candidate choice is delegated to
//! [`waypoint_geometry`]; everything the engine needs from the UI layer —
//! element queries, layout boxes, focus/blur/scroll primitives, event
//! delivery — comes in through the [`Host`] trait.
//!
//! The engine is an explicit instance: the application constructs one,
//! keeps it wherever it keeps its other UI state, and passes its host into
//! every call. Element handles are small, copyable, host-defined values;
//! the engine never owns elements and tolerates handles going stale at any
//! time.
//!
//! ## Minimal example
//!
//! ```rust
//! use waypoint_engine::{ConfigPatch, Direction, Engine, EnterTo};
//!
//! # fn demo<H: waypoint_engine::Host>(mut host: H) -> Result<(), waypoint_engine::EngineError> {
//! let mut engine: Engine<H> = Engine::new();
//!
//! // Register two sections over the host's selector language.
//! engine.add_section(Some("menu"), ConfigPatch::new().selector(".menu-item"))?;
//! engine.add_section(
//!     Some("content"),
//!     ConfigPatch::new()
//!         .selector(".card")
//!         .enter_to(EnterTo::LastFocused),
//! )?;
//!
//! // Enter the UI, then drive it with directional intents.
//! engine.focus(&mut host, Some("menu"), false, None);
//! engine.move_focus(&mut host, Direction::Right, None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Lifecycle events
//!
//! Transitions fire `willmove`, `willunfocus`, `unfocused`, `willfocus`,
//! `focused`, `navigatefailed`, `enter-down`, and `enter-up` on the affected
//! elements through [`Host::emit`], with typed payloads ([`NavEvent`]) and a
//! typed cancellation result ([`EventOutcome`]). The `will*` events and the
//! enter pair are cancelable; vetoing one aborts the transition as a normal
//! policy outcome, not an error.
//!
//! ## Re-entrancy
//!
//! Everything is single-threaded and synchronous; the only "concurrency" is
//! listeners re-entering the engine from inside an event callback. A single
//! transition guard serializes this: while a transition is in flight, nested
//! focus changes coalesce into silent state updates, so at most one
//! event-emitting transition ever runs. The one asynchronous deferral is the
//! refocus scheduled after a vetoed native blur (see
//! [`Engine::apply_deferred_refocus`]); the guard stays engaged for that
//! window.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
mod engine;
mod error;
pub mod events;
mod host;
pub mod keys;
mod section;

pub use config::{
    Config, ConfigPatch, EnterTo, LeaveFor, LeaveTarget, NavigableFilter, Restrict,
    ScrollAlignment, ScrollBehavior, ScrollOptions,
};
pub use engine::Engine;
pub use error::EngineError;
pub use events::{Cause, EventOutcome, NavEvent};
pub use host::Host;
pub use keys::{KeyCode, Modifiers};
pub use section::{PreviousLink, Section};

// Re-export the geometry surface callers need alongside the engine.
pub use waypoint_geometry::{Candidate, Direction, NavQuery};
