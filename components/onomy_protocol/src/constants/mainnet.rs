//! Constants for the Onomy network.

/// The coin type used for Onomy key derivation, as defined by [SLIP 44].
///
/// Onomy keeps the Cosmos Hub coin type.
///
/// [SLIP 44]: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub const COIN_TYPE: u32 = 118;

/// The HRP for a Bech32-encoded account address.
pub const BECH32_PREFIX_ACC_ADDR: &str = "onomy";

/// The HRP for a Bech32-encoded account public key.
pub const BECH32_PREFIX_ACC_PUB: &str = "onomypub";

/// The HRP for a Bech32-encoded validator operator address.
pub const BECH32_PREFIX_VAL_ADDR: &str = "onomyvaloper";

/// The HRP for a Bech32-encoded validator operator public key.
pub const BECH32_PREFIX_VAL_PUB: &str = "onomyvaloperpub";

/// The HRP for a Bech32-encoded consensus node address.
pub const BECH32_PREFIX_CONS_ADDR: &str = "onomyvalcons";

/// The HRP for a Bech32-encoded consensus node public key.
pub const BECH32_PREFIX_CONS_PUB: &str = "onomyvalconspub";
