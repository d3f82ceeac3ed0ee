// === Base types (low 5 bits) ===
pub const BASE_TYPE_MASK: u64 = 0x1F;
pub const INCOMING_CALL_TYPE: u64 = 1;
pub const OUTGOING_CALL_TYPE: u64 = 2;
pub const MISSED_CALL_TYPE: u64 = 3;
pub const JOINED_TYPE: u64 = 4;
pub const UNSUPPORTED_MESSAGE_TYPE: u64 = 5;
pub const INVALID_MESSAGE_TYPE: u64 = 6;
pub const BASE_INBOX_TYPE: u64 = 20;
pub const BASE_OUTBOX_TYPE: u64 = 21;
pub const BASE_SENT_TYPE: u64 = 23;
pub const BASE_DRAFT_TYPE: u64 = 27;

// === Key exchange ===
pub const KEY_EXCHANGE_BIT: u64 = 0x8000;
pub const KEY_EXCHANGE_IDENTITY_VERIFIED_BIT: u64 = 0x4000;
pub const KEY_EXCHANGE_IDENTITY_DEFAULT_BIT: u64 = 0x2000;
pub const KEY_EXCHANGE_IDENTITY_UPDATE_BIT: u64 = 0x200;

// === Group / session ===
pub const GROUP_UPDATE_BIT: u64 = 0x10000;
pub const GROUP_QUIT_BIT: u64 = 0x20000;
pub const EXPIRATION_TIMER_UPDATE_BIT: u64 = 0x40000;
pub const END_SESSION_BIT: u64 = 0x400000;
pub const SECURE_MESSAGE_BIT: u64 = 0x800000;

// === Encryption ===
pub const ENCRYPTION_REMOTE_BIT: u64 = 0x20000000;
pub const ENCRYPTION_REMOTE_FAILED_BIT: u64 = 0x10000000;
pub const ENCRYPTION_REMOTE_NO_SESSION_BIT: u64 = 0x08000000;
pub const ENCRYPTION_REMOTE_LEGACY_BIT: u64 = 0x02000000;

// === Durations (seconds) ===
pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 3_600;
pub const SECONDS_PER_DAY: u32 = 86_400;
pub const SECONDS_PER_WEEK: u32 = 604_800;

// === Config ===
pub const CONFIG_DIR_NAME: &str = "thread-summary";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
