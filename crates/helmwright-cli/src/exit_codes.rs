//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

#![allow(dead_code)]

/// Success - operation completed without errors
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// Configuration error - invalid project file or domain objects
pub const CONFIG_ERROR: i32 = 2;

/// Task error - unknown task, dead dependency edge, or cycle
pub const TASK_ERROR: i32 = 3;

/// Execution error - a helm invocation failed
pub const EXEC_ERROR: i32 = 4;

/// Publish error - a chart upload was rejected
pub const PUBLISH_ERROR: i32 = 5;

/// IO error - file not found, permission denied, etc.
pub const IO_ERROR: i32 = 6;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
