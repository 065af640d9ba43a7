/// URI scheme prefixes shared by payload builders
pub const HTTP_SCHEME: &str = "http";
pub const HTTPS_SCHEME: &str = const_str::concat!(HTTP_SCHEME, "s");
pub const HTTPS_URL_PREFIX: &str = const_str::concat!(HTTPS_SCHEME, "://");

pub const MAILTO_PREFIX: &str = "mailto:";
pub const SMS_PREFIX: &str = "sms:";

/// Configuration sources
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const ENV_PREFIX: &str = "CARDQR";
