//! The application surface the builtins consult.
//!
//! Lookups hand back small snapshots instead of live handles, so nothing
//! borrowed from the application outlives a single call.

use std::collections::HashMap;

use time::{OffsetDateTime, UtcOffset};

pub type WindowId = u64;
pub type ContextId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Console,
    Channel,
    Query,
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    pub id: WindowId,
    pub kind: WindowKind,
    /// IRC context the window belongs to, if any.
    pub context: Option<ContextId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Console {
    /// Id of the console window itself.
    pub window: WindowId,
    pub context: ContextId,
    pub active_window: Option<WindowId>,
    pub connected: bool,
}

pub trait Host {
    fn find_window(&self, id: WindowId) -> Option<Window>;

    /// The window holding the application's input focus.
    fn active_window(&self) -> Option<WindowId>;

    fn find_console(&self, context: ContextId) -> Option<Console>;

    /// Console connected to `server` as `nick`; an empty part matches anything.
    fn find_console_by_identity(&self, server: &str, nick: &str) -> Option<Console>;

    fn first_connected_console(&self) -> Option<Console>;

    fn find_channel(&self, context: ContextId, name: &str) -> Option<WindowId>;

    fn is_away(&self, context: ContextId) -> bool;

    fn features(&self) -> Vec<String>;

    fn has_feature(&self, name: &str) -> bool {
        chirp_intrinsics::text::contains_ignore_case(&self.features(), name)
    }

    fn status_bar_item_count(&self) -> usize {
        0
    }

    fn class_defined(&self, _name: &str) -> bool {
        false
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    /// Local offset at `at`; `None` when it cannot be determined.
    fn utc_offset(&self, at: OffsetDateTime) -> Option<UtcOffset> {
        UtcOffset::local_offset_at(at).ok()
    }
}

#[derive(Clone, Debug)]
struct StaticConsole {
    console: Console,
    server: String,
    nick: String,
    away: bool,
    channels: Vec<(String, WindowId)>,
}

/// In-memory [`Host`] assembled with builder calls.
#[derive(Clone, Debug, Default)]
pub struct StaticHost {
    windows: HashMap<WindowId, Window>,
    consoles: Vec<StaticConsole>,
    active_window: Option<WindowId>,
    features: Vec<String>,
    classes: Vec<String>,
    status_bar_items: usize,
    now: Option<OffsetDateTime>,
    offset: Option<UtcOffset>,
}

impl StaticHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: Window) -> Self {
        self.windows.insert(window.id, window);
        self
    }

    /// Registers a console together with its console window.
    pub fn with_console(mut self, console: Console, server: &str, nick: &str) -> Self {
        self.windows.insert(
            console.window,
            Window {
                id: console.window,
                kind: WindowKind::Console,
                context: Some(console.context),
            },
        );
        self.consoles.push(StaticConsole {
            console,
            server: server.to_string(),
            nick: nick.to_string(),
            away: false,
            channels: Vec::new(),
        });
        self
    }

    /// Registers a channel window inside `context`.
    pub fn with_channel(mut self, context: ContextId, name: &str, window: WindowId) -> Self {
        self.windows.insert(
            window,
            Window {
                id: window,
                kind: WindowKind::Channel,
                context: Some(context),
            },
        );
        if let Some(entry) = self.console_entry_mut(context) {
            entry.channels.push((name.to_string(), window));
        }
        self
    }

    pub fn with_away(mut self, context: ContextId, away: bool) -> Self {
        if let Some(entry) = self.console_entry_mut(context) {
            entry.away = away;
        }
        self
    }

    pub fn with_active_window(mut self, window: WindowId) -> Self {
        self.active_window = Some(window);
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    pub fn with_class(mut self, name: &str) -> Self {
        self.classes.push(name.to_string());
        self
    }

    pub fn with_status_bar_items(mut self, count: usize) -> Self {
        self.status_bar_items = count;
        self
    }

    pub fn with_clock(mut self, now: OffsetDateTime) -> Self {
        self.now = Some(now);
        self
    }

    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    fn console_entry(&self, context: ContextId) -> Option<&StaticConsole> {
        self.consoles
            .iter()
            .find(|entry| entry.console.context == context)
    }

    fn console_entry_mut(&mut self, context: ContextId) -> Option<&mut StaticConsole> {
        self.consoles
            .iter_mut()
            .find(|entry| entry.console.context == context)
    }
}

impl Host for StaticHost {
    fn find_window(&self, id: WindowId) -> Option<Window> {
        self.windows.get(&id).cloned()
    }

    fn active_window(&self) -> Option<WindowId> {
        self.active_window
    }

    fn find_console(&self, context: ContextId) -> Option<Console> {
        self.console_entry(context).map(|entry| entry.console.clone())
    }

    fn find_console_by_identity(&self, server: &str, nick: &str) -> Option<Console> {
        self.consoles
            .iter()
            .find(|entry| {
                entry.console.connected
                    && (server.is_empty() || entry.server.eq_ignore_ascii_case(server))
                    && (nick.is_empty() || entry.nick.eq_ignore_ascii_case(nick))
            })
            .map(|entry| entry.console.clone())
    }

    fn first_connected_console(&self) -> Option<Console> {
        self.consoles
            .iter()
            .find(|entry| entry.console.connected)
            .map(|entry| entry.console.clone())
    }

    fn find_channel(&self, context: ContextId, name: &str) -> Option<WindowId> {
        let entry = self.console_entry(context)?;
        entry
            .channels
            .iter()
            .find(|(channel, _)| channel.eq_ignore_ascii_case(name))
            .map(|(_, window)| *window)
    }

    fn is_away(&self, context: ContextId) -> bool {
        self.console_entry(context)
            .map(|entry| entry.away)
            .unwrap_or(false)
    }

    fn features(&self) -> Vec<String> {
        self.features.clone()
    }

    fn status_bar_item_count(&self) -> usize {
        self.status_bar_items
    }

    fn class_defined(&self, name: &str) -> bool {
        self.classes
            .iter()
            .any(|class| class.eq_ignore_ascii_case(name))
    }

    fn now(&self) -> OffsetDateTime {
        self.now.unwrap_or_else(OffsetDateTime::now_utc)
    }

    fn utc_offset(&self, at: OffsetDateTime) -> Option<UtcOffset> {
        match self.offset {
            Some(offset) => Some(offset),
            None => UtcOffset::local_offset_at(at).ok(),
        }
    }
}
