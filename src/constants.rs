// Central constants for command handling and API limits.

/// Literal prefix every chat command starts with.
pub const COMMAND_PREFIX: &str = "!";

/// Discord user ids allowed to run the order commands. Everyone else is
/// ignored without feedback.
pub const AUTHORIZED_USER_IDS: &[u64] = &[257_360_542_904_090_624];

/// Page size used when searching recent orders of any status. Shopify caps
/// a single page at 250.
pub const RECENT_ORDERS_PAGE_LIMIT: u16 = 150;

/// Blurple used for every reply embed.
pub const EMBED_COLOR: u32 = 0x5865F2;
