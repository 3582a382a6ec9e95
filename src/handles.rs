//! One entry point that wires the notifier, both reporters and the minifier to a
//! shared package descriptor and shared sinks.

use crate::config::{Config, NotifyConfig};
use crate::internal;
use crate::minify::Minifier;
use crate::notify::{CommandBackend, JsonBackend, Notifier, NotifyBackend, NullBackend};
use crate::output::{Alert, Console, TerminalBell, TerminalConsole};
use crate::package::PackageDescriptor;
use crate::pipeline::Pipeline;
use crate::report::{GenericReporter, LintReporter};

use std::sync::Arc;

#[derive(Clone)]
pub struct Handles {
    pub notify: Notifier,
    pub generic: GenericReporter,
    pub lint: LintReporter,
}

impl Handles {
    #[must_use]
    pub fn builder(package: PackageDescriptor) -> HandlesBuilder {
        HandlesBuilder {
            package,
            config: Config::default(),
            console: None,
            backend: None,
            alert: None,
        }
    }

    /// Everything from config: package descriptor, backend, console settings.
    ///
    /// # Errors
    /// Fails when `package.manifest` points at an unreadable manifest.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        internal::init_with_config(config);
        let package = config.package_descriptor()?;
        Ok(Self::builder(package).config(config).build())
    }

    /// A fresh minifier stage.
    #[must_use]
    pub const fn minify(&self) -> Minifier {
        Minifier::new()
    }

    /// An empty pipeline whose stage errors go to the generic reporter.
    #[must_use]
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new().on_error(self.generic.error_handler())
    }
}

/// Picks the delivery backend named by `[notify] backend`.
#[must_use]
pub fn backend_from_config(config: &NotifyConfig) -> Arc<dyn NotifyBackend> {
    match config.backend.to_lowercase().as_str() {
        "json" => Arc::new(JsonBackend::new(&config.json_path)),
        "none" | "off" => Arc::new(NullBackend),
        "command" => Arc::new(CommandBackend::new(&config.command)),
        other => {
            internal::warn(
                "NOTIFY",
                &format!("Unknown backend '{other}', falling back to command"),
            );
            Arc::new(CommandBackend::new(&config.command))
        }
    }
}

/// Sinks left unset are derived from the config at `build`.
pub struct HandlesBuilder {
    package: PackageDescriptor,
    config: Config,
    console: Option<Arc<dyn Console>>,
    backend: Option<Arc<dyn NotifyBackend>>,
    alert: Option<Arc<dyn Alert>>,
}

impl HandlesBuilder {
    #[must_use]
    pub fn config(mut self, config: &Config) -> Self {
        self.config = config.clone();
        self
    }

    #[must_use]
    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = Some(console);
        self
    }

    #[must_use]
    pub fn backend(mut self, backend: Arc<dyn NotifyBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    #[must_use]
    pub fn alert(mut self, alert: Arc<dyn Alert>) -> Self {
        self.alert = Some(alert);
        self
    }

    #[must_use]
    pub fn build(self) -> Handles {
        let config = self.config;

        let console = self.console.unwrap_or_else(|| {
            Arc::new(
                TerminalConsole::new()
                    .colors(config.log.colors)
                    .timestamps(config.log.timestamps),
            )
        });
        let backend = self
            .backend
            .unwrap_or_else(|| backend_from_config(&config.notify));
        let alert = self.alert.unwrap_or_else(|| Arc::new(TerminalBell));

        let notify = Notifier::new(self.package, backend).configure(&config.notify);
        let generic = GenericReporter::new(notify.clone(), console, alert)
            .palette(config.palette())
            .glyphs(config.parse_glyphs())
            .defaults(config.log.defaults.clone());
        let lint = LintReporter::new(generic.clone());

        Handles {
            notify,
            generic,
            lint,
        }
    }
}
