// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural-misuse errors surfaced by registry operations.

use alloc::string::String;

/// An error from a mutating registry operation.
///
/// Navigational outcomes ("nothing to move to", a listener veto) are never
/// errors; they are reported through events and boolean returns. This type
/// covers structural misuse only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// An operation referenced a section id that is not registered.
    UnknownSection(String),
    /// A section was created with an id that is already registered.
    DuplicateSection(String),
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownSection(id) => write!(f, "section {id:?} doesn't exist"),
            Self::DuplicateSection(id) => write!(f, "section {id:?} already exists"),
        }
    }
}

impl core::error::Error for EngineError {}
