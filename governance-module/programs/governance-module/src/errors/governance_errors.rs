use anchor_lang::prelude::*;

#[error_code]
pub enum GovernanceError {
    #[msg("Invalid vote side")]
    InvalidVoteSide,
    #[msg("Governor does not match the proposal")]
    GovernorNotFound,
    #[msg("The proposal cannot be activated since it has not yet passed the voting delay")]
    VotingDelayNotMet,
    #[msg("Only drafts can be canceled or activated")]
    ProposalNotDraft,
    #[msg("The proposal must be active")]
    ProposalNotActive,
    #[msg("Overflow error")]
    Overflow,
    #[msg("Invalid timelock delay: must be >= 0")]
    InvalidTimelockDelay,
    #[msg("Proposal not found")]
    ProposalNotFound,
    #[msg("Vote not found")]
    VoteNotFound,
    #[msg("Invalid voting delay: must be >= 0")]
    InvalidVotingDelay,
    #[msg("Invalid voting period: must be > 0")]
    InvalidVotingPeriod,
    #[msg("Invalid electorate: cannot be default pubkey")]
    InvalidElectorate,
    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,
    #[msg("Only succeeded proposals can be queued")]
    ProposalNotSucceeded,
    #[msg("Too many instructions in proposal")]
    TooManyInstructions,
    #[msg("Too many account keys in proposal instruction")]
    TooManyInstructionKeys,
    #[msg("Proposal instruction data too large")]
    InstructionDataTooLarge,
    #[msg("Proposal title too long")]
    TitleTooLong,
    #[msg("Proposal description link too long")]
    DescriptionLinkTooLong,
    #[msg("Timelock has not elapsed")]
    TimelockNotElapsed,
    #[msg("Proposal transaction already executed")]
    AlreadyExecuted,
    #[msg("Proposal instructions cannot call the governance program")]
    SelfInvocation,
}
