//! Exit code constants for the promptcraft CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable prompt input)
//! - 2: Configuration error (unparseable or invalid config file)
//! - 3: I/O failure (writing output or the event log)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a prompt source that cannot be read.
pub const USER_ERROR: i32 = 1;

/// Configuration error: the config file failed to parse or validate.
pub const CONFIG_ERROR: i32 = 2;

/// I/O failure: the composed prompt or an event could not be written.
pub const IO_FAILURE: i32 = 3;
