//! Test utilities for creating LSP clients and configs.
