//! The Cosmos SDK defaults, in effect until a chain configures its own prefixes.

/// The default coin type, registered for ATOM in [SLIP 44].
///
/// [SLIP 44]: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub const COIN_TYPE: u32 = 118;

pub const BECH32_PREFIX_ACC_ADDR: &str = "cosmos";
pub const BECH32_PREFIX_ACC_PUB: &str = "cosmospub";
pub const BECH32_PREFIX_VAL_ADDR: &str = "cosmosvaloper";
pub const BECH32_PREFIX_VAL_PUB: &str = "cosmosvaloperpub";
pub const BECH32_PREFIX_CONS_ADDR: &str = "cosmosvalcons";
pub const BECH32_PREFIX_CONS_PUB: &str = "cosmosvalconspub";
