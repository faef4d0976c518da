// ABOUTME: Contrast platform domain models shared across the workspace
// ABOUTME: Re-exports application, vulnerability, library, session and attack DTOs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod application;
mod attack;
mod library;
mod session;
mod vulnerability;

pub use application::Application;
pub use attack::{Attack, AttackStatus};
pub use library::{Library, LibraryObservation};
pub use session::{MetadataItem, SessionMetadata};
pub use vulnerability::{Environment, Severity, Trace, TraceStatus};
