// src/config/consts.rs

// Page contract
pub const CONTAINER_ID: &str = "toc";
pub const CONTENT_SELECTOR: &str = ".span9"; // main content column

// Edge pin (Bootstrap affix data API)
pub const PIN_SPY_ATTR: &str = "data-spy";
pub const PIN_SPY_VALUE: &str = "affix";
pub const PIN_OFFSET_TOP_ATTR: &str = "data-offset-top";
pub const PIN_OFFSET_BOTTOM_ATTR: &str = "data-offset-bottom";

// Files
pub const CONFIG_FILE: &str = "tocgen.toml";
pub const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

// Logging
pub const LOG_LABEL_MAX: usize = 40; // chars of heading text in log lines
