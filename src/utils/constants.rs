pub const WELCOME_MESSAGE: &str = "Welcome! Pick an item from the menu below.";
pub const HELP_MESSAGE: &str = "help";
pub const PLACEHOLDER_REPLY: &str = "dispatch";

pub const LOG_FILE_PATH: &str = "log/output.log";
pub const LOG_PATTERN: &str = "{d} - {l} - {m}\n";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
