//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - File Watch: Invalidates the record cache when the backing file changes

mod reload;

pub use reload::spawn_reload_task;
