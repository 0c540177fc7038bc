//! Host-process capabilities for generated code.
//!
//! Generated code that detects a fault it cannot recover from reports it
//! through a [`Diagnostic`] sink and stops through [`Terminate`]. Both are
//! traits so the process-level implementation, [`StdHost`], can be swapped for
//! the [`RecordingHost`] fake in tests.

use std::{
    error::Error,
    fmt,
    io::Write,
    panic,
    sync::{Mutex, PoisonError},
};

/// The status [`fail`] terminates with.
pub const FAILURE_STATUS: i32 = 255;

/// Ends the current process.
pub trait Terminate {
    /// Terminates with `status`. Never returns.
    fn terminate(&self, status: i32) -> !;
}

/// Writes diagnostics to the host's error stream.
pub trait Diagnostic {
    /// Writes a formatted message. No newline is appended, and no ordering is
    /// guaranteed relative to writes on standard output.
    fn emit(&self, args: fmt::Arguments<'_>);
}

/// Both host capabilities.
pub trait Host: Terminate + Diagnostic {}

impl<H> Host for H where H: Terminate + Diagnostic + ?Sized {}

/// Reports `error` on `host` and terminates with [`FAILURE_STATUS`].
pub fn fail<H>(host: &H, error: &dyn Error) -> !
where
    H: Host + ?Sized,
{
    host.emit(format_args!("{error}\n"));
    host.terminate(FAILURE_STATUS)
}

/// The real process: `stderr` and [`std::process::exit`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StdHost;

impl Terminate for StdHost {
    fn terminate(&self, status: i32) -> ! {
        log::debug!("terminating process with status {status}");
        std::process::exit(status)
    }
}

impl Diagnostic for StdHost {
    fn emit(&self, args: fmt::Arguments<'_>) {
        let _ = std::io::stderr().lock().write_fmt(args);
    }
}

/// Panic payload raised by [`RecordingHost::terminate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminated(pub i32);

/// A host that records what it is asked to do instead of doing it.
///
/// Diagnostics are collected in order. Termination is recorded and then
/// unwinds with a [`Terminated`] payload, which a test can observe with
/// [`std::panic::catch_unwind`] or [`RecordingHost::run`].
#[derive(Debug, Default)]
pub struct RecordingHost {
    diagnostics: Mutex<Vec<String>>,
    status: Mutex<Option<i32>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every diagnostic emitted so far.
    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the status of the last termination, if any.
    pub fn status(&self) -> Option<i32> {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f`, turning a termination through this host into `Err(status)`.
    ///
    /// Panics that did not come from [`terminate`](Terminate::terminate) are
    /// resumed.
    pub fn run<R>(&self, f: impl FnOnce(&Self) -> R) -> Result<R, i32> {
        match panic::catch_unwind(panic::AssertUnwindSafe(|| f(self))) {
            Ok(out) => Ok(out),
            Err(payload) => match payload.downcast::<Terminated>() {
                Ok(terminated) => Err(terminated.0),
                Err(payload) => panic::resume_unwind(payload),
            },
        }
    }
}

impl Terminate for RecordingHost {
    fn terminate(&self, status: i32) -> ! {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = Some(status);
        panic::panic_any(Terminated(status))
    }
}

impl Diagnostic for RecordingHost {
    fn emit(&self, args: fmt::Arguments<'_>) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(args.to_string());
    }
}
