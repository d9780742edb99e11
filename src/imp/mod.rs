#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub use self::unix::*;

#[cfg(not(unix))]
mod windows;

#[cfg(not(unix))]
pub use self::windows::*;
