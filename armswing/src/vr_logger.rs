use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::{LevelFilter, Log, Metadata, Record};

use crate::ArmSwingResult;

/// Number of lines shown on the console unless told otherwise
pub const DEFAULT_MAX_MESSAGES: usize = 5;

#[derive(Debug)]
struct ConsoleLines {
    lines: VecDeque<String>,
    max_messages: usize,
}

/// The most recent log lines, ready to be drawn onto a text panel in the headset.
///
/// Cloning a console gives another handle to the same lines.
#[derive(Debug, Clone)]
pub struct VrConsole {
    lines: Arc<Mutex<ConsoleLines>>,
}

impl Default for VrConsole {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGES)
    }
}

impl VrConsole {
    /// Create a console that shows at most `max_messages` lines
    pub fn new(max_messages: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(ConsoleLines {
                lines: VecDeque::with_capacity(max_messages),
                max_messages,
            })),
        }
    }

    /// Add a line, pushing the oldest one off the console if it's full
    pub fn push(&self, line: impl Into<String>) {
        let mut console = self.lock();
        if console.max_messages == 0 {
            return;
        }
        while console.lines.len() >= console.max_messages {
            console.lines.pop_front();
        }
        console.lines.push_back(line.into());
    }

    /// Lines currently on the console, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lock().lines.iter().cloned().collect()
    }

    /// Everything on the console as a single block of text
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    /// Wipe the console
    pub fn clear(&self) {
        self.lock().lines.clear();
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleLines> {
        // A panic while holding the lock can't leave the lines in a bad state.
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A [`log::Log`] that writes everything through `env_logger` as usual, and also mirrors it onto a
/// [`VrConsole`] so it can be read without taking the headset off.
#[derive(Debug)]
pub struct VrLogger {
    inner: env_logger::Logger,
    console: Option<VrConsole>,
}

impl VrLogger {
    /// Wrap an existing `env_logger`. With no console, records are only forwarded.
    pub fn new(inner: env_logger::Logger, console: Option<VrConsole>) -> Self {
        Self { inner, console }
    }

    /// Install a `VrLogger` as the global logger.
    ///
    /// Filtering follows `RUST_LOG`, defaulting to `info`. When `enabled` is false nothing is mirrored to the
    /// console, which is still returned so the host can draw it unconditionally.
    pub fn init(enabled: bool, max_messages: usize) -> ArmSwingResult<VrConsole> {
        let inner = env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .parse_default_env()
            .build();
        let max_level = inner.filter();

        let console = VrConsole::new(max_messages);
        let logger = VrLogger::new(inner, enabled.then(|| console.clone()));
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(max_level);

        if !enabled {
            log::info!("[ARMSWING_VR_LOGGER] VR logger is disabled");
        }
        Ok(console)
    }

    /// The console records are mirrored onto, if any
    pub fn console(&self) -> Option<&VrConsole> {
        self.console.as_ref()
    }
}

impl Log for VrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.inner.matches(record) {
            return;
        }
        self.inner.log(record);
        if let Some(console) = &self.console {
            console.push(record.args().to_string());
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}
