// Copyright 2026 Cortex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Coursepack library: scrape a course schedule page into a week bundle.
//!
//! This library crate exposes the core modules for integration testing.

pub mod acquisition;
pub mod bundle;
pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
