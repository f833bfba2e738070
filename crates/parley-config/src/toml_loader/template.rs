//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Parley Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Secrets are never read from this file. Set them in the environment:
#   GEMINI_API_KEY (or GOOGLE_API_KEY)
#   OAUTH_<PROVIDER>_CLIENT_ID / OAUTH_<PROVIDER>_CLIENT_SECRET
#   PARLEY_AUTH_REQUIRED=true overrides [auth] required

[completion]
provider = "gemini"        # gemini, echo
# model = "gemini-2.0-flash"
# max_tokens = 4096        # 1-65536
# temperature = 0.7        # 0.0-2.0
# timeout_secs = 120       # 1-600
# system_prompt = "You are a helpful assistant."

[auth]
# required = false
# providers = ["github", "google"]

[chat]
# greeting = ""
# history_warn_bytes = 262144

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
