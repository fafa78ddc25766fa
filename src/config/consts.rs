// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://shop.weverse.io/en/shop/USD/artists/3";
pub const SALE_URL: &str = "https://shop.weverse.io/en/shop/USD/artists/3/sales";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local state
pub const STATE_FILE: &str = "state.json";
pub const CONFIG_FILE: &str = "config.json";

// Detection
pub const SOLD_OUT: &str = "SOLD_OUT";

// Digest
pub const MISSING: &str = "n/a";
pub const MAIL_SUBJECT: &str = "Weverse stock alert";
