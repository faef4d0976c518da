// ABOUTME: Contrast domain models re-exported from contrast-core
// ABOUTME: Implements ParamEnum so platform enums can be parsed from tool arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use contrast_core::models::{
    Application, Attack, AttackStatus, Environment, Library, LibraryObservation, MetadataItem,
    SessionMetadata, Severity, Trace, TraceStatus,
};

use crate::validation::ParamEnum;

impl ParamEnum for Severity {
    fn variants() -> &'static [Self] {
        Self::ALL
    }

    fn wire_name(self) -> &'static str {
        self.as_str()
    }
}

impl ParamEnum for TraceStatus {
    fn variants() -> &'static [Self] {
        Self::ALL
    }

    fn wire_name(self) -> &'static str {
        self.as_str()
    }
}

impl ParamEnum for Environment {
    fn variants() -> &'static [Self] {
        Self::ALL
    }

    fn wire_name(self) -> &'static str {
        self.as_str()
    }
}

impl ParamEnum for AttackStatus {
    fn variants() -> &'static [Self] {
        Self::ALL
    }

    fn wire_name(self) -> &'static str {
        self.as_str()
    }
}
