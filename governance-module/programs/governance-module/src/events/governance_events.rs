use anchor_lang::prelude::*;
use crate::GovernanceParameters;

#[event]
pub struct GovernorCreated {
    pub governor: Pubkey,
    pub base: Pubkey,
    pub electorate: Pubkey,
    pub params: GovernanceParameters,
    pub created_at: i64,
}

#[event]
pub struct GovernanceParamsUpdated {
    pub governor: Pubkey,
    pub prev_params: GovernanceParameters,
    pub params: GovernanceParameters,
    pub updated_at: i64,
}

#[event]
pub struct ElectorateUpdated {
    pub governor: Pubkey,
    pub prev_electorate: Pubkey,
    pub new_electorate: Pubkey,
    pub updated_at: i64,
}

#[event]
pub struct ProposalCreated {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub proposer: Pubkey,
    pub index: u64,
    pub instruction_count: u8,
    pub created_at: i64,
}

#[event]
pub struct ProposalMetaCreated {
    pub proposal: Pubkey,
    pub title: String,
    pub description_link: String,
}

#[event]
pub struct ProposalActivated {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub activated_at: i64,
    pub voting_ends_at: i64,
}

#[event]
pub struct ProposalCanceled {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub canceled_at: i64,
}

#[event]
pub struct VoteCreated {
    pub proposal: Pubkey,
    pub vote: Pubkey,
    pub voter: Pubkey,
}

#[event]
pub struct VoteSet {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub side: u8,
    pub weight: u64,
    pub for_votes: u64,
    pub against_votes: u64,
    pub abstain_votes: u64,
}

#[event]
pub struct ProposalQueued {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub transaction: Pubkey,
    pub queued_at: i64,
    pub eta: i64,
}

#[event]
pub struct ProposalExecuted {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub transaction: Pubkey,
    pub instruction_count: u8,
    pub executed_at: i64,
}
