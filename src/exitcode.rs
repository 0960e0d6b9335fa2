//! Process exit codes, following BSD sysexits.h

/// Command line usage error
pub const USAGE: i32 = 64;

/// Venue data present but malformed
pub const DATAERR: i32 = 65;

/// Venue data could not be read
pub const NOINPUT: i32 = 66;

/// Output could not be written
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
