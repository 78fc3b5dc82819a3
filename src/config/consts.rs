// src/config/consts.rs

// Catalog
pub const BASE_URL: &str = "https://pocket.limitlesstcg.com/cards/";
pub const PROMO_ENDPOINT: &str = "P-A";
pub const USER_AGENT: &str = concat!("tcgp_cards/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_INPUT_FILE: &str = "cards_data.json";
pub const DEFAULT_OUTPUT_FILE: &str = "pokemon_cards_transposed.json";
pub const DEFAULT_IMAGES_DIR: &str = "images";

// Card schema
pub const PROMO_SET: &str = "pa";
pub const ID_SEP: char = '-';
pub const ID_WIDTH: usize = 3;
pub const CROWN_RARE: &str = "Crown Rare";
pub const CROWN_SYMBOL: &str = "👑";
pub const PROMO_RARITY: &str = "Promo";
pub const PACK_SUFFIX: &str = " pack";
pub const PLACEHOLDER_PACK: &str = "Every";
pub const YES: &str = "Yes";

// Promo volumes
pub const PROMO_PACK_CATEGORY: &str = "Promo pack";
pub const PROMO_VOLUME_SIZE: u32 = 5;
