use tracing::warn;

use super::host::{Console, Host, Window, WindowId};
use super::value::Value;

/// Where a call comes from: the application and the script's window.
#[derive(Clone, Copy)]
pub struct CallSite<'h> {
    pub host: &'h dyn Host,
    pub window: Option<WindowId>,
}

impl<'h> CallSite<'h> {
    pub fn new(host: &'h dyn Host) -> Self {
        Self { host, window: None }
    }

    pub fn in_window(host: &'h dyn Host, window: WindowId) -> Self {
        Self {
            host,
            window: Some(window),
        }
    }
}

/// Per-invocation state handed to a handler.
pub struct CallContext<'h> {
    site: CallSite<'h>,
    function: &'h str,
    warning: Option<String>,
}

impl<'h> CallContext<'h> {
    pub(crate) fn new(site: CallSite<'h>, function: &'h str) -> Self {
        Self {
            site,
            function,
            warning: None,
        }
    }

    pub fn host(&self) -> &'h dyn Host {
        self.site.host
    }

    /// Canonical name of the function being executed.
    pub fn function(&self) -> &str {
        self.function
    }

    pub fn window(&self) -> Option<Window> {
        self.site.window.and_then(|id| self.site.host.find_window(id))
    }

    /// Console of the IRC context the calling window belongs to.
    pub fn window_console(&self) -> Option<Console> {
        let context = self.window()?.context?;
        self.site.host.find_console(context)
    }

    /// Records a non-fatal diagnostic. Only the first one is kept.
    pub fn warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(function = self.function, %message, "builtin raised a warning");
        if self.warning.is_none() {
            self.warning = Some(message);
        }
    }

    pub(crate) fn into_warning(self) -> Option<String> {
        self.warning
    }
}

/// Result of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallOutcome {
    pub value: Value,
    pub warning: Option<String>,
}
