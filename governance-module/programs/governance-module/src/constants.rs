pub const GOVERNOR_SEED: &[u8] = b"governor";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const PROPOSAL_META_SEED: &[u8] = b"proposal_meta";
pub const VOTE_SEED: &[u8] = b"vote";
pub const TRANSACTION_SEED: &[u8] = b"transaction";

pub const MAX_PROPOSAL_INSTRUCTIONS: usize = 4;
pub const MAX_INSTRUCTION_KEYS: usize = 10;
pub const MAX_INSTRUCTION_DATA_LEN: usize = 256;

pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_DESCRIPTION_LINK_LEN: usize = 256;

// Parameters used by `initialize`.
pub const DEFAULT_VOTING_DELAY: i64 = 0;
pub const DEFAULT_VOTING_PERIOD: i64 = 3 * 24 * 3600;
pub const DEFAULT_QUORUM_VOTES: u64 = 1;
pub const DEFAULT_TIMELOCK_DELAY_SECONDS: i64 = 24 * 3600;
