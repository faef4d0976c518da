// ABOUTME: Enum-set parameter spec parsing comma-separated tokens into a typed set
// ABOUTME: Each unknown token is reported as its own error naming every valid value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use super::{non_blank, split_tokens, ParamSpec, Resolution};

/// An enum usable as a set-valued tool argument.
///
/// `wire_name` must be upper case; tokens are upper-cased before matching.
pub trait ParamEnum: Copy + Ord + 'static {
    /// Every member, in display order
    fn variants() -> &'static [Self];

    /// Canonical upper-case name
    fn wire_name(self) -> &'static str;

    /// Member whose wire name equals `token` after upper-casing
    fn from_token(token: &str) -> Option<Self> {
        let normalized = token.to_uppercase();
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.wire_name() == normalized)
    }

    /// Comma-separated list of every wire name
    fn valid_values() -> String {
        Self::variants()
            .iter()
            .map(|variant| variant.wire_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Spec for a comma-separated set of enum members
#[derive(Debug, Clone)]
pub struct EnumSetSpec<E: ParamEnum> {
    name: String,
    raw: Option<String>,
    default: Option<(BTreeSet<E>, String)>,
}

impl<E: ParamEnum> EnumSetSpec<E> {
    /// Describe argument `name` with raw input `raw`
    #[must_use]
    pub fn new(name: &str, raw: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            raw: raw.map(str::to_owned),
            default: None,
        }
    }

    /// Blank input resolves to a copy of `values` and records `warning`
    #[must_use]
    pub fn default_to(mut self, values: &[E], warning: &str) -> Self {
        self.default = Some((values.iter().copied().collect(), warning.to_owned()));
        self
    }
}

impl<E: ParamEnum> ParamSpec for EnumSetSpec<E> {
    type Value = BTreeSet<E>;

    fn resolve(&self) -> Resolution<BTreeSet<E>> {
        let Some(raw) = non_blank(self.raw.as_deref()) else {
            return self.default.as_ref().map_or_else(Resolution::empty, |(values, warning)| {
                Resolution::of(values.clone()).with_warning(warning.clone())
            });
        };

        let mut members = BTreeSet::new();
        let mut resolution = Resolution::empty();
        for token in split_tokens(raw) {
            match E::from_token(token) {
                Some(member) => {
                    members.insert(member);
                }
                None => {
                    resolution = resolution.with_error(format!(
                        "Invalid {}: '{token}'. Valid values: {}",
                        self.name,
                        E::valid_values()
                    ));
                }
            }
        }

        if !resolution.is_valid() || members.is_empty() {
            return resolution;
        }
        resolution.set_value(Some(members))
    }
}
