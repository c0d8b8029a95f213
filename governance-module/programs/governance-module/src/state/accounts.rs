use anchor_lang::prelude::*;
use crate::constants::*;
use crate::GovernanceError;

/// Parameters that drive the proposal lifecycle of a governor.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct GovernanceParameters {
    /// Seconds a draft must wait after creation before it can be activated.
    pub voting_delay: i64,
    /// Seconds a proposal stays open for voting once activated.
    pub voting_period: i64,
    /// Minimum `for` votes required for a proposal to succeed.
    pub quorum_votes: u64,
    /// Seconds between queueing and the earliest execution.
    pub timelock_delay_seconds: i64,
}

impl Default for GovernanceParameters {
    fn default() -> Self {
        Self {
            voting_delay: DEFAULT_VOTING_DELAY,
            voting_period: DEFAULT_VOTING_PERIOD,
            quorum_votes: DEFAULT_QUORUM_VOTES,
            timelock_delay_seconds: DEFAULT_TIMELOCK_DELAY_SECONDS,
        }
    }
}

impl GovernanceParameters {
    pub fn validate(&self) -> Result<()> {
        require!(self.voting_delay >= 0, GovernanceError::InvalidVotingDelay);
        require!(self.voting_period > 0, GovernanceError::InvalidVotingPeriod);
        require!(self.timelock_delay_seconds >= 0, GovernanceError::InvalidTimelockDelay);
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct Governor {
    pub base: Pubkey,
    pub bump: u8,
    pub proposal_count: u64,
    pub electorate: Pubkey,
    pub params: GovernanceParameters,
}

#[account]
#[derive(InitSpace)]
pub struct Proposal {
    pub governor: Pubkey,
    pub index: u64,
    pub bump: u8,
    pub proposer: Pubkey,
    pub quorum_votes: u64,
    pub for_votes: u64,
    pub against_votes: u64,
    pub abstain_votes: u64,
    pub canceled_at: i64,
    pub created_at: i64,
    pub activated_at: i64,
    pub voting_ends_at: i64,
    pub queued_at: i64,
    pub queued_transaction: Pubkey,
    #[max_len(MAX_PROPOSAL_INSTRUCTIONS)]
    pub instructions: Vec<ProposalInstruction>,
}

impl Proposal {
    pub fn get_state(&self, now: i64) -> ProposalState {
        if self.canceled_at > 0 {
            return ProposalState::Canceled;
        }
        if self.queued_at > 0 {
            return ProposalState::Queued;
        }
        if self.activated_at == 0 {
            return ProposalState::Draft;
        }
        if now < self.voting_ends_at {
            return ProposalState::Active;
        }
        if self.for_votes <= self.against_votes || self.for_votes < self.quorum_votes {
            return ProposalState::Defeated;
        }
        ProposalState::Succeeded
    }

    pub fn subtract_vote_weight(&mut self, vote_side: VoteSide, vote_weight: u64) -> Result<()> {
        if vote_weight == 0 {
            return Ok(());
        }
        let tally = match vote_side {
            VoteSide::Pending => return Ok(()),
            VoteSide::Against => &mut self.against_votes,
            VoteSide::For => &mut self.for_votes,
            VoteSide::Abstain => &mut self.abstain_votes,
        };
        *tally = tally.checked_sub(vote_weight).ok_or(GovernanceError::Overflow)?;
        Ok(())
    }

    pub fn add_vote_weight(&mut self, vote_side: VoteSide, vote_weight: u64) -> Result<()> {
        if vote_weight == 0 {
            return Ok(());
        }
        let tally = match vote_side {
            VoteSide::Pending => return Ok(()),
            VoteSide::Against => &mut self.against_votes,
            VoteSide::For => &mut self.for_votes,
            VoteSide::Abstain => &mut self.abstain_votes,
        };
        *tally = tally.checked_add(vote_weight).ok_or(GovernanceError::Overflow)?;
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct ProposalMeta {
    pub proposal: Pubkey,
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    #[max_len(MAX_DESCRIPTION_LINK_LEN)]
    pub description_link: String,
}

#[account]
#[derive(InitSpace)]
pub struct Vote {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub bump: u8,
    pub side: u8,
    pub weight: u64,
}

impl Vote {
    pub fn side(&self) -> Result<VoteSide> {
        Ok(VoteSide::try_from(self.side)?)
    }
}

/// Timelocked execution record for a queued proposal.
#[account]
#[derive(InitSpace)]
pub struct ProposalTransaction {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub bump: u8,
    /// Earliest unix timestamp at which the proposal may be executed.
    pub eta: i64,
    pub executed_at: i64,
}

impl ProposalTransaction {
    pub fn is_executed(&self) -> bool {
        self.executed_at > 0
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, InitSpace)]
pub struct ProposalInstruction {
    pub program_id: Pubkey,
    #[max_len(MAX_INSTRUCTION_KEYS)]
    pub keys: Vec<ProposalAccountMeta>,
    #[max_len(MAX_INSTRUCTION_DATA_LEN)]
    pub data: Vec<u8>,
}

impl ProposalInstruction {
    pub fn validate(&self) -> Result<()> {
        require!(self.keys.len() <= MAX_INSTRUCTION_KEYS, GovernanceError::TooManyInstructionKeys);
        require!(self.data.len() <= MAX_INSTRUCTION_DATA_LEN, GovernanceError::InstructionDataTooLarge);
        // the transaction record is only written back after every call returns
        require_keys_neq!(self.program_id, crate::ID, GovernanceError::SelfInvocation);
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, InitSpace)]
pub struct ProposalAccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum VoteSide {
    #[default]
    Pending = 0,
    Against = 1,
    For = 2,
    Abstain = 3,
}

impl From<VoteSide> for u8 {
    fn from(side: VoteSide) -> Self {
        side as u8
    }
}

impl TryFrom<u8> for VoteSide {
    type Error = GovernanceError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(VoteSide::Pending),
            1 => Ok(VoteSide::Against),
            2 => Ok(VoteSide::For),
            3 => Ok(VoteSide::Abstain),
            _ => Err(GovernanceError::InvalidVoteSide),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ProposalState {
    #[default]
    Draft,
    Active,
    Canceled,
    Defeated,
    Succeeded,
    Queued,
}
