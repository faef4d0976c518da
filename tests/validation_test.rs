// ABOUTME: Tests for the parameter spec DSL and the validation context rules
// ABOUTME: Covers string, int, date, enum set, string list and metadata filter specs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used)]

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use contrast_mcp_server::models::{Severity, TraceStatus};
use contrast_mcp_server::validation::{
    DateSpec, EnumSetSpec, IntSpec, MetadataFilter, MetadataFilterSpec, ParamSpec, StringListSpec,
    StringSpec, ValidationContext,
};

// ============================================================================
// StringSpec
// ============================================================================

#[test]
fn test_string_is_trimmed() {
    let resolution = StringSpec::new("name", Some("  webgoat  ")).resolve();
    assert_eq!(resolution.value().map(String::as_str), Some("webgoat"));
    assert!(resolution.errors().is_empty());
    assert!(resolution.warnings().is_empty());
}

#[test]
fn test_blank_string_resolves_to_none() {
    for raw in [None, Some(""), Some("   ")] {
        let resolution = StringSpec::new("name", raw).resolve();
        assert!(resolution.value().is_none());
        assert!(resolution.is_valid());
    }
}

#[test]
fn test_required_string_reports_missing() {
    let mut ctx = ValidationContext::new();
    let value = StringSpec::new("appId", Some(" ")).required().apply(&mut ctx);
    assert!(value.is_none());
    assert_eq!(ctx.errors(), ["appId is required"]);
}

#[test]
fn test_string_default_carries_warning() {
    let resolution = StringSpec::new("sort", None)
        .default_to("-startTime", "No sort specified, using -startTime")
        .resolve();
    assert_eq!(resolution.value().map(String::as_str), Some("-startTime"));
    assert_eq!(resolution.warnings(), ["No sort specified, using -startTime"]);
}

#[test]
fn test_string_outside_allowed_set() {
    let resolution = StringSpec::new("quickFilter", Some("SOMETIMES"))
        .allowed_values(&["ALL", "ACTIVE"])
        .resolve();
    assert!(resolution.value().is_none());
    assert_eq!(
        resolution.errors(),
        ["Invalid quickFilter: 'SOMETIMES'. Valid values: ALL, ACTIVE"]
    );
}

#[test]
fn test_allowed_set_skipped_when_absent() {
    let resolution = StringSpec::new("quickFilter", None)
        .allowed_values(&["ALL"])
        .resolve();
    assert!(resolution.is_valid());
    assert!(resolution.value().is_none());
}

#[test]
fn test_resolve_is_repeatable() {
    let spec = StringSpec::new("appId", None).required();
    assert_eq!(spec.resolve(), spec.resolve());

    let mut ctx = ValidationContext::new();
    spec.apply(&mut ctx);
    assert_eq!(ctx.errors().len(), 1);
}

// ============================================================================
// IntSpec
// ============================================================================

#[test]
fn test_int_clamps_to_bounds_with_warning() {
    let high = IntSpec::new("limit", Some(500)).range(1, 100).resolve();
    assert_eq!(high.value(), Some(&100));
    assert_eq!(high.warnings(), ["limit 500 exceeds maximum 100, using 100"]);
    assert!(high.is_valid());

    let low = IntSpec::new("limit", Some(-3)).range(1, 100).resolve();
    assert_eq!(low.value(), Some(&1));
    assert_eq!(low.warnings(), ["limit -3 is below minimum 1, using 1"]);
}

#[test]
fn test_int_default_and_required() {
    let defaulted = IntSpec::new("limit", None)
        .default_to(25, "No limit specified, using 25")
        .resolve();
    assert_eq!(defaulted.value(), Some(&25));
    assert_eq!(defaulted.warnings().len(), 1);

    let missing = IntSpec::new("limit", None).required().resolve();
    assert_eq!(missing.errors(), ["limit is required"]);

    let absent = IntSpec::new("limit", None).range(1, 10).resolve();
    assert!(absent.value().is_none());
    assert!(absent.is_valid());
}

// ============================================================================
// DateSpec
// ============================================================================

#[test]
fn test_date_accepts_epoch_millis() {
    let resolution = DateSpec::new("lastSeenAfter", Some("1700000000000")).resolve();
    assert_eq!(
        resolution.value().copied(),
        DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000)
    );
}

#[test]
fn test_date_accepts_iso_date() {
    let resolution = DateSpec::new("lastSeenAfter", Some("2024-03-15")).resolve();
    assert!(resolution.is_valid());
    assert!(resolution.value().is_some());
}

#[test]
fn test_date_rejects_other_formats() {
    let resolution = DateSpec::new("lastSeenAfter", Some("15/03/2024")).resolve();
    assert!(resolution.value().is_none());
    assert_eq!(
        resolution.errors(),
        ["Invalid lastSeenAfter: '15/03/2024'. Expected epoch milliseconds or ISO date format (YYYY-MM-DD)"]
    );
}

#[test]
fn test_blank_date_is_absent() {
    let resolution = DateSpec::new("lastSeenAfter", Some("  ")).resolve();
    assert!(resolution.value().is_none());
    assert!(resolution.is_valid());
}

// ============================================================================
// EnumSetSpec
// ============================================================================

#[test]
fn test_enum_set_drops_empty_tokens() {
    let resolution = EnumSetSpec::<Severity>::new("severities", Some("LOW,,HIGH,  ,MEDIUM")).resolve();
    let expected: BTreeSet<Severity> = [Severity::Low, Severity::High, Severity::Medium]
        .into_iter()
        .collect();
    assert_eq!(resolution.value(), Some(&expected));
    assert!(resolution.is_valid());
}

#[test]
fn test_enum_set_is_case_insensitive_and_deduplicated() {
    let resolution = EnumSetSpec::<Severity>::new("severities", Some("critical, CRITICAL ,Critical")).resolve();
    assert_eq!(resolution.value().map(BTreeSet::len), Some(1));
}

#[test]
fn test_enum_set_invalid_token_names_valid_values() {
    let resolution = EnumSetSpec::<Severity>::new("severities", Some("LOW, INVALID")).resolve();
    assert!(resolution.value().is_none());
    assert_eq!(resolution.errors().len(), 1);
    let error = &resolution.errors()[0];
    assert!(error.contains("INVALID"));
    assert!(error.contains("CRITICAL, HIGH, MEDIUM, LOW, NOTE"));
}

#[test]
fn test_enum_set_reports_each_bad_token() {
    let resolution = EnumSetSpec::<Severity>::new("severities", Some("BAD,LOW,WORSE")).resolve();
    assert_eq!(resolution.errors().len(), 2);
    assert!(resolution.errors()[0].contains("'BAD'"));
    assert!(resolution.errors()[1].contains("'WORSE'"));
}

#[test]
fn test_enum_set_default_is_a_copy() {
    let mut defaults = vec![TraceStatus::Reported];
    let spec = EnumSetSpec::<TraceStatus>::new("statuses", None)
        .default_to(&defaults, "Using default statuses");
    defaults.push(TraceStatus::Fixed);

    let resolution = spec.resolve();
    let expected: BTreeSet<TraceStatus> = [TraceStatus::Reported].into_iter().collect();
    assert_eq!(resolution.value(), Some(&expected));
    assert_eq!(resolution.warnings(), ["Using default statuses"]);
}

#[test]
fn test_enum_set_blank_without_default_is_absent() {
    let resolution = EnumSetSpec::<Severity>::new("severities", Some(" , ")).resolve();
    assert!(resolution.value().is_none());
    assert!(resolution.is_valid());
}

// ============================================================================
// StringListSpec
// ============================================================================

#[test]
fn test_string_list_tokenizes_and_deduplicates() {
    let resolution = StringListSpec::new("vulnTags", Some("reviewed, ,urgent,reviewed")).resolve();
    assert_eq!(
        resolution.value().cloned(),
        Some(vec!["reviewed".to_owned(), "urgent".to_owned()])
    );
}

#[test]
fn test_string_list_allowed_values_are_case_sensitive() {
    let resolution = StringListSpec::new("fields", Some("name,Name"))
        .allowed_values(&["name", "language"])
        .resolve();
    assert!(resolution.value().is_none());
    assert_eq!(
        resolution.errors(),
        ["Invalid fields: 'Name'. Valid values: name, language"]
    );
}

#[test]
fn test_string_list_default() {
    let resolution = StringListSpec::new("fields", None)
        .default_to(&["name"], "Returning name only")
        .resolve();
    assert_eq!(resolution.value().cloned(), Some(vec!["name".to_owned()]));
    assert_eq!(resolution.warnings(), ["Returning name only"]);
}

// ============================================================================
// MetadataFilterSpec
// ============================================================================

#[test]
fn test_metadata_filter_preserves_field_order() {
    let raw = r#"{"branch": "main", "build": [41, "42"], "nightly": true}"#;
    let resolution = MetadataFilterSpec::new("metadataFilters", Some(raw)).resolve();
    assert_eq!(
        resolution.value().cloned(),
        Some(vec![
            MetadataFilter {
                field: "branch".to_owned(),
                values: vec!["main".to_owned()],
            },
            MetadataFilter {
                field: "build".to_owned(),
                values: vec!["41".to_owned(), "42".to_owned()],
            },
            MetadataFilter {
                field: "nightly".to_owned(),
                values: vec!["true".to_owned()],
            },
        ])
    );
}

#[test]
fn test_metadata_filter_rejects_nested_values() {
    let raw = r#"{"branch": {"name": "main"}, "build": [{"id": 1}]}"#;
    let resolution = MetadataFilterSpec::new("metadataFilters", Some(raw)).resolve();
    assert!(resolution.value().is_none());
    assert_eq!(resolution.errors().len(), 2);
    assert!(resolution.errors()[0].contains("field 'branch'"));
    assert!(resolution.errors()[0].contains("Only string or array-of-string values are accepted"));
    assert!(resolution.errors()[1].contains("field 'build'"));
}

#[test]
fn test_metadata_filter_empty_inputs_mean_no_filter() {
    for raw in [None, Some(""), Some("{}")] {
        let resolution = MetadataFilterSpec::new("metadataFilters", raw).resolve();
        assert!(resolution.value().is_none());
        assert!(resolution.is_valid());
    }
}

#[test]
fn test_metadata_filter_rejects_malformed_json() {
    let invalid = MetadataFilterSpec::new("metadataFilters", Some("{branch:")).resolve();
    assert_eq!(invalid.errors().len(), 1);
    assert!(invalid.errors()[0].starts_with("Invalid metadataFilters: not valid JSON"));

    let not_object = MetadataFilterSpec::new("metadataFilters", Some("[1, 2]")).resolve();
    assert_eq!(not_object.errors().len(), 1);
}

// ============================================================================
// ValidationContext rules
// ============================================================================

#[test]
fn test_require_if_present() {
    let mut ctx = ValidationContext::new();
    ctx.require_if_present(Some("value"), "A", None, "B");
    assert_eq!(ctx.errors(), ["A requires B to be specified"]);

    let mut ctx = ValidationContext::new();
    ctx.require_if_present(None, "A", None, "B");
    assert!(ctx.is_valid());
}

#[test]
fn test_require_uuid() {
    let mut ctx = ValidationContext::new();
    let upper = ctx.require_uuid(Some("550E8400-E29B-41D4-A716-446655440000"), "appId");
    assert!(upper.is_some());
    assert!(ctx.is_valid());

    let bad = ctx.require_uuid(Some("550e8400e29b41d4a716446655440000"), "appId");
    assert!(bad.is_none());
    assert_eq!(ctx.errors().len(), 1);
    assert!(ctx.errors()[0].contains("UUID format"));

    ctx.require_uuid(None, "appId");
    assert_eq!(ctx.errors()[1], "appId is required");
}

#[test]
fn test_mutually_exclusive() {
    let mut ctx = ValidationContext::new();
    ctx.mutually_exclusive(true, "appId", false, "appName", "");
    assert!(ctx.is_valid());

    ctx.mutually_exclusive(true, "appId", true, "appName", "Provide only one");
    assert_eq!(
        ctx.errors(),
        ["appId and appName are mutually exclusive. Provide only one"]
    );
}

#[test]
fn test_require_at_least_one() {
    let mut ctx = ValidationContext::new();
    ctx.require_at_least_one("Provide appId or appName", &[None, Some("  ")]);
    assert_eq!(ctx.errors(), ["Provide appId or appName"]);

    let mut ctx = ValidationContext::new();
    ctx.require_at_least_one("Provide appId or appName", &[None, Some("webgoat")]);
    assert!(ctx.is_valid());
}

#[test]
fn test_validate_date_range() {
    let early = DateTime::<Utc>::from_timestamp_millis(1_000);
    let late = DateTime::<Utc>::from_timestamp_millis(2_000);

    let mut ctx = ValidationContext::new();
    ctx.validate_date_range(late, early, "startDate", "endDate");
    assert_eq!(
        ctx.errors(),
        ["Invalid date range: startDate must be before endDate"]
    );

    let mut ctx = ValidationContext::new();
    ctx.validate_date_range(early, late, "startDate", "endDate");
    ctx.validate_date_range(None, early, "startDate", "endDate");
    ctx.validate_date_range(late, None, "startDate", "endDate");
    assert!(ctx.is_valid());
}

#[test]
fn test_warnings_never_affect_validity() {
    let mut ctx = ValidationContext::new();
    ctx.warn_if(true, "Defaulted something");
    ctx.warn_if(false, "Never recorded");
    assert!(ctx.is_valid());
    assert_eq!(ctx.warnings(), ["Defaulted something"]);
}

#[test]
fn test_context_accumulates_across_specs() {
    let mut ctx = ValidationContext::new();
    StringSpec::new("appId", None).required().apply(&mut ctx);
    EnumSetSpec::<Severity>::new("severities", Some("LOUD")).apply(&mut ctx);
    IntSpec::new("limit", Some(0)).range(1, 10).apply(&mut ctx);

    let (errors, warnings) = ctx.into_parts();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], "appId is required");
    assert_eq!(warnings.len(), 1);
}
