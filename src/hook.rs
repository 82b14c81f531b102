// Hook module for the in-process startup hook
//
// A host calls `startup` once when it loads the plugin, `on_config` when its
// configuration is about to be finalized, and `on_event` for lifecycle events.
// The hook never persists anything; the host owns the document it passes in.

use crate::constants;
use crate::document::{ConfigDocument, DocumentError};
use crate::ui;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const SESSION_CREATED_EVENT: &str = "session.created";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Structured record handed to the host's logger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub service: String,
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl LogRecord {
    fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            service: constants::PLUGIN_NAME.to_string(),
            level,
            message: message.into(),
            extra: None,
        }
    }

    fn with_extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// Port for structured log records.
pub trait LogSink {
    fn log(&self, record: LogRecord);
}

/// Port for human-readable warning text.
pub trait WarnSink {
    fn warn(&self, text: &str);
}

/// Forwards records to the `log` facade, using the service name as target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn log(&self, record: LogRecord) {
        let level = log::Level::from(record.level);
        let target = record.service.as_str();
        match &record.extra {
            Some(extra) => log::log!(target: target, level, "{} {}", record.message, extra),
            None => log::log!(target: target, level, "{}", record.message),
        }
    }
}

/// Writes warnings to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrWarnSink;

impl WarnSink for StderrWarnSink {
    fn warn(&self, text: &str) {
        ui::banner(text);
    }
}

/// Which list field the hook edits and the entry it guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookTarget {
    pub field: &'static str,
    pub entry: &'static str,
}

impl HookTarget {
    /// Disable the Zen provider.
    pub const DISABLED_PROVIDER: Self = Self {
        field: constants::DISABLED_PROVIDER_LIST_FIELD,
        entry: constants::ZEN_PROVIDER_ID,
    };

    /// Register this plugin in the plugin list.
    pub const PLUGIN: Self = Self {
        field: constants::PLUGIN_LIST_FIELD,
        entry: constants::PLUGIN_NAME,
    };
}

impl Default for HookTarget {
    fn default() -> Self {
        Self::DISABLED_PROVIDER
    }
}

/// Lifecycle event delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub properties: Value,
}

impl HostEvent {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: Value::Null,
        }
    }
}

#[derive(Default)]
pub struct DisableZenHook<'a> {
    target: HookTarget,
    log_sink: Option<&'a dyn LogSink>,
    warn_sink: Option<&'a dyn WarnSink>,
}

impl<'a> DisableZenHook<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: HookTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_log_sink(mut self, sink: &'a dyn LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    pub fn with_warn_sink(mut self, sink: &'a dyn WarnSink) -> Self {
        self.warn_sink = Some(sink);
        self
    }

    /// Announce that Zen is disabled: banner to the warn sink, record to the log sink.
    pub fn startup(&self) {
        if let Some(sink) = self.warn_sink {
            sink.warn(&zdr_banner());
        }

        self.emit(
            LogRecord::new(LogLevel::Warn, "OpenCode Zen disabled for ZDR compliance").with_extra(
                json!({
                    "reason": "Free models may collect data for training",
                    "affected_models": constants::AFFECTED_MODELS,
                    "documentation": constants::PRIVACY_DOC_URL,
                }),
            ),
        );
    }

    /// Ensure the target entry is in the target list of `config`.
    ///
    /// Returns `true` when the document was changed.
    pub fn on_config(&self, config: &mut ConfigDocument) -> Result<bool, DocumentError> {
        let added = config.ensure_entry(self.target.field, self.target.entry)?;
        if added {
            self.emit(LogRecord::new(
                LogLevel::Info,
                format!("Added '{}' to {}", self.target.entry, self.target.field),
            ));
        }
        Ok(added)
    }

    pub fn on_event(&self, event: &HostEvent) {
        if event.kind == SESSION_CREATED_EVENT {
            self.emit(LogRecord::new(
                LogLevel::Debug,
                "Session created with Zen disabled",
            ));
        }
    }

    fn emit(&self, record: LogRecord) {
        if let Some(sink) = self.log_sink {
            sink.log(record);
        }
    }
}

/// Startup banner explaining why Zen is disabled and what to use instead.
pub fn zdr_banner() -> String {
    let rule = "=".repeat(80);
    format!(
        "\n{rule}\n  OpenCode Zen Provider DISABLED for ZDR Compliance\n{rule}\n\n\
         \x20 Free models in Zen ({models}) may collect data for\n\
         \x20 model training during their free period.\n\n\
         \x20 If you need these models, use paid alternatives:\n\
         \x20 - explore agent: {explore}\n\
         \x20 - librarian agent: {librarian}\n\n\
         \x20 To re-enable Zen, remove '{plugin}' from your plugins.\n{rule}\n",
        models = constants::AFFECTED_MODELS.join(", "),
        explore = constants::EXPLORE_AGENT_MODEL,
        librarian = constants::LIBRARIAN_AGENT_MODEL,
        plugin = constants::PLUGIN_NAME,
    )
}
