// ABOUTME: Re-export of the unified error types defined in contrast-core
// ABOUTME: Lets server modules import errors via crate::errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use contrast_core::errors::{AppError, AppResult, ErrorCode};
