use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chirp_core::{Console, ContextId, StaticHost, Window, WindowId, WindowKind};
use serde::Deserialize;
use time::{OffsetDateTime, UtcOffset};
use tracing::debug;

/// JSON description of the application state a call runs against.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostFixture {
    pub windows: Vec<WindowFixture>,
    pub consoles: Vec<ConsoleFixture>,
    pub active_window: Option<WindowId>,
    pub features: Vec<String>,
    pub classes: Vec<String>,
    pub status_bar_items: usize,
    /// Fixed clock as unix seconds.
    pub now: Option<i64>,
    pub utc_offset_seconds: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowFixture {
    pub id: WindowId,
    #[serde(default)]
    pub kind: KindFixture,
    #[serde(default)]
    pub context: Option<ContextId>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFixture {
    Console,
    Channel,
    Query,
    #[default]
    Other,
}

impl From<KindFixture> for WindowKind {
    fn from(kind: KindFixture) -> Self {
        match kind {
            KindFixture::Console => WindowKind::Console,
            KindFixture::Channel => WindowKind::Channel,
            KindFixture::Query => WindowKind::Query,
            KindFixture::Other => WindowKind::Other,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleFixture {
    pub window: WindowId,
    pub context: ContextId,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub active_window: Option<WindowId>,
    #[serde(default = "connected_by_default")]
    pub connected: bool,
    #[serde(default)]
    pub away: bool,
    #[serde(default)]
    pub channels: Vec<ChannelFixture>,
}

fn connected_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelFixture {
    pub name: String,
    pub window: WindowId,
}

impl HostFixture {
    pub fn into_host(self) -> Result<StaticHost> {
        let mut host = StaticHost::new();

        for window in self.windows {
            host = host.with_window(Window {
                id: window.id,
                kind: window.kind.into(),
                context: window.context,
            });
        }

        for console in self.consoles {
            let context = console.context;
            host = host.with_console(
                Console {
                    window: console.window,
                    context,
                    active_window: console.active_window,
                    connected: console.connected,
                },
                &console.server,
                &console.nick,
            );
            for channel in &console.channels {
                host = host.with_channel(context, &channel.name, channel.window);
            }
            host = host.with_away(context, console.away);
        }

        if let Some(window) = self.active_window {
            host = host.with_active_window(window);
        }
        for class in &self.classes {
            host = host.with_class(class);
        }
        host = host
            .with_features(self.features)
            .with_status_bar_items(self.status_bar_items);

        if let Some(now) = self.now {
            let now = OffsetDateTime::from_unix_timestamp(now)
                .with_context(|| format!("fixture clock {now} is out of range"))?;
            host = host.with_clock(now);
        }
        if let Some(seconds) = self.utc_offset_seconds {
            let offset = UtcOffset::from_whole_seconds(seconds)
                .with_context(|| format!("fixture offset {seconds}s is out of range"))?;
            host = host.with_offset(offset);
        }

        Ok(host)
    }
}

pub fn load(path: &Path) -> Result<StaticHost> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read host fixture {}", path.display()))?;
    let fixture: HostFixture = serde_json::from_str(&source)
        .with_context(|| format!("invalid host fixture {}", path.display()))?;
    debug!(
        path = %path.display(),
        windows = fixture.windows.len(),
        consoles = fixture.consoles.len(),
        "loaded host fixture"
    );
    fixture.into_host()
}
