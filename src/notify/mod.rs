//! Desktop notifications for task completion and failure.
//!
//! The notifier only shapes requests; delivery is an injected `NotifyBackend`.

mod backend;
mod json;

pub use backend::{CommandBackend, NotifyBackend, NullBackend};
pub use json::JsonBackend;

use crate::config::NotifyConfig;
use crate::fmt::MessageTemplate;
use crate::internal;
use crate::package::PackageDescriptor;
use crate::pipeline::TaskError;

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

pub const TITLE_COMPLETE: &str = "Task complete";
pub const TITLE_FAILED: &str = "Task failed";

/// Built and consumed within one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    pub title: String,
    pub subtitle: String,
    pub message: String,
    pub on_last: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,
}

/// Per-call knobs. Unset fields take the notifier's defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyOptions {
    pub on_last: Option<bool>,
}

/// Cheap to clone; the backend is shared.
#[derive(Clone)]
pub struct Notifier {
    package: PackageDescriptor,
    icon: Option<PathBuf>,
    on_last: bool,
    enabled: bool,
    backend: Arc<dyn NotifyBackend>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("package", &self.package)
            .field("icon", &self.icon)
            .field("on_last", &self.on_last)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl Notifier {
    pub fn new(package: PackageDescriptor, backend: Arc<dyn NotifyBackend>) -> Self {
        Self {
            package,
            icon: None,
            on_last: true,
            enabled: true,
            backend,
        }
    }

    /// Applies `[notify]` settings other than the backend choice.
    #[must_use]
    pub fn configure(mut self, config: &NotifyConfig) -> Self {
        self.icon = config
            .icon
            .as_deref()
            .map(|icon| PathBuf::from(shellexpand::tilde(icon).as_ref()));
        self.on_last = config.on_last;
        self.enabled = config.enabled;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub const fn package(&self) -> &PackageDescriptor {
        &self.package
    }

    /// Pure: shapes the request without delivering it.
    #[must_use]
    pub fn build_request(
        &self,
        message: &str,
        success: bool,
        opts: NotifyOptions,
    ) -> NotificationRequest {
        NotificationRequest {
            title: if success { TITLE_COMPLETE } else { TITLE_FAILED }.to_string(),
            subtitle: self.package.description.clone(),
            message: message.to_string(),
            on_last: opts.on_last.unwrap_or(self.on_last),
            icon: self.icon.clone(),
        }
    }

    /// Builds and delivers. Delivery failures are logged, never returned.
    pub fn show(&self, message: &str, success: bool, opts: NotifyOptions) -> NotificationRequest {
        let request = self.build_request(message, success, opts);

        if !self.enabled {
            internal::trace("NOTIFY", "Notifications disabled, skipping");
            return request;
        }

        if let Err(e) = self.backend.deliver(&request) {
            internal::warn("NOTIFY", &format!("Could not deliver notification: {e}"));
        }
        request
    }

    /// Failure notification for `err`. `template` defaults to `{message}` and
    /// may use `{message}`, `{line}`, `{file}` and `{plugin}`.
    pub fn report_error(&self, err: &TaskError, template: Option<&str>) -> NotificationRequest {
        let template = MessageTemplate::parse(template.unwrap_or(MessageTemplate::DEFAULT));
        self.report_error_with(err, &template)
    }

    /// Same as `report_error`, with a template that is already parsed.
    pub fn report_error_with(&self, err: &TaskError, template: &MessageTemplate) -> NotificationRequest {
        let message = template.render(&err.template_values());
        self.show(&message, false, NotifyOptions::default())
    }
}
