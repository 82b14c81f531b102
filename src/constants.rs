// Constants module for shared string constants

/// Entry this tool registers in a host's plugin list.
pub const PLUGIN_NAME: &str = "opencode-disable-zen";

/// Provider id of OpenCode Zen, placed in the disabled provider list at startup.
pub const ZEN_PROVIDER_ID: &str = "opencode";

pub const SCHEMA_URL: &str = "https://opencode.ai/config.json";
pub const PRIVACY_DOC_URL: &str = "https://opencode.ai/docs/zen/#privacy";

pub const PROJECT_CONFIG_FILE: &str = "opencode.json";
pub const PROJECT_CONFIG_JSONC_FILE: &str = "opencode.jsonc";
pub const GLOBAL_CONFIG_DIR: &str = ".config/opencode";
pub const GLOBAL_CONFIG_FILE: &str = "opencode.json";

/// Extension that switches the reader into comment-tolerant mode.
pub const JSONC_EXTENSION: &str = "jsonc";

pub const SCHEMA_FIELD: &str = "$schema";
pub const PLUGIN_LIST_FIELD: &str = "pluginList";
pub const DISABLED_PROVIDER_LIST_FIELD: &str = "disabledProviderList";

/// Free Zen models that may retain prompts for training.
pub const AFFECTED_MODELS: [&str; 4] = [
    "grok-code",
    "glm-4.7-free",
    "minimax-m2.1-free",
    "big-pickle",
];

/// Paid replacements suggested for agents that default to Zen models.
pub const EXPLORE_AGENT_MODEL: &str = "anthropic/claude-haiku-4-5";
pub const LIBRARIAN_AGENT_MODEL: &str = "anthropic/claude-sonnet-4-5";
