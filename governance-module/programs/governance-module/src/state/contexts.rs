use anchor_lang::prelude::*;
use crate::constants::*;
use crate::{Governor, GovernanceError, Proposal, ProposalMeta, ProposalTransaction, Vote};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub base: Signer<'info>,

    #[account(
        init,
        payer = base,
        space = 8 + Governor::INIT_SPACE,
        seeds = [GOVERNOR_SEED, base.key().as_ref()],
        bump,
    )]
    pub governor: Account<'info, Governor>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CreateGovernor<'info> {
    #[account(mut)]
    pub base: Signer<'info>,

    #[account(
        init,
        payer = base,
        space = 8 + Governor::INIT_SPACE,
        seeds = [GOVERNOR_SEED, base.key().as_ref()],
        bump,
    )]
    pub governor: Account<'info, Governor>,

    pub system_program: Program<'info, System>,
}

/// Shared by `set_governance_params` and `set_electorate`.
#[derive(Accounts)]
pub struct SetGovernanceParams<'info> {
    pub base: Signer<'info>,

    #[account(
        mut,
        has_one = base @ GovernanceError::Unauthorized,
    )]
    pub governor: Account<'info, Governor>,
}

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(mut)]
    pub governor: Account<'info, Governor>,

    #[account(
        init,
        payer = proposer,
        space = 8 + Proposal::INIT_SPACE,
        seeds = [
            PROPOSAL_SEED,
            governor.key().as_ref(),
            &governor.proposal_count.to_le_bytes()
        ],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CreateProposalMeta<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(has_one = proposer @ GovernanceError::Unauthorized)]
    pub proposal: Account<'info, Proposal>,

    #[account(
        init,
        payer = proposer,
        space = 8 + ProposalMeta::INIT_SPACE,
        seeds = [PROPOSAL_META_SEED, proposal.key().as_ref()],
        bump,
    )]
    pub proposal_meta: Account<'info, ProposalMeta>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ActivateProposal<'info> {
    pub electorate: Signer<'info>,

    #[account(has_one = electorate @ GovernanceError::Unauthorized)]
    pub governor: Account<'info, Governor>,

    #[account(
        mut,
        has_one = governor @ GovernanceError::GovernorNotFound,
    )]
    pub proposal: Account<'info, Proposal>,
}

#[derive(Accounts)]
pub struct CancelProposal<'info> {
    pub proposer: Signer<'info>,

    #[account(
        mut,
        has_one = proposer @ GovernanceError::Unauthorized,
    )]
    pub proposal: Account<'info, Proposal>,
}

#[derive(Accounts)]
#[instruction(voter: Pubkey)]
pub struct NewVote<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub proposal: Account<'info, Proposal>,

    #[account(
        init,
        payer = payer,
        space = 8 + Vote::INIT_SPACE,
        seeds = [VOTE_SEED, proposal.key().as_ref(), voter.as_ref()],
        bump,
    )]
    pub vote: Account<'info, Vote>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetVote<'info> {
    pub electorate: Signer<'info>,

    #[account(has_one = electorate @ GovernanceError::Unauthorized)]
    pub governor: Account<'info, Governor>,

    #[account(
        mut,
        has_one = governor @ GovernanceError::GovernorNotFound,
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        mut,
        has_one = proposal @ GovernanceError::VoteNotFound,
    )]
    pub vote: Account<'info, Vote>,
}

#[derive(Accounts)]
pub struct QueueProposal<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub governor: Account<'info, Governor>,

    #[account(
        mut,
        has_one = governor @ GovernanceError::GovernorNotFound,
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        init,
        payer = payer,
        space = 8 + ProposalTransaction::INIT_SPACE,
        seeds = [TRANSACTION_SEED, proposal.key().as_ref()],
        bump,
    )]
    pub transaction: Account<'info, ProposalTransaction>,

    pub system_program: Program<'info, System>,
}

/// Accounts referenced by the proposal instructions are passed as remaining accounts.
#[derive(Accounts)]
pub struct ExecuteProposal<'info> {
    pub executor: Signer<'info>,

    #[account(
        seeds = [GOVERNOR_SEED, governor.base.as_ref()],
        bump = governor.bump,
    )]
    pub governor: Account<'info, Governor>,

    #[account(has_one = governor @ GovernanceError::GovernorNotFound)]
    pub proposal: Account<'info, Proposal>,

    #[account(
        mut,
        seeds = [TRANSACTION_SEED, proposal.key().as_ref()],
        bump = transaction.bump,
        has_one = proposal @ GovernanceError::ProposalNotFound,
        constraint = proposal.queued_transaction == transaction.key() @ GovernanceError::ProposalNotFound,
    )]
    pub transaction: Account<'info, ProposalTransaction>,
}
