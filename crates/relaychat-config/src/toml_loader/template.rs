//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# relaychat configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The upstream API key is read from the DEEPSEEK_API_KEY environment variable.

[server]
# host = "127.0.0.1"
# port = 3000                   # 1-65535

[upstream]
# base_url = "https://api.deepseek.com"
# model = "deepseek-chat"
# connect_timeout_secs = 10     # 1-60
# request_timeout_secs = 120    # 1-600

[client]
# relay_url = "http://127.0.0.1:3000"

[logging]
# level = "info"                # trace, debug, info, warn, error
"##
    .to_string()
}
