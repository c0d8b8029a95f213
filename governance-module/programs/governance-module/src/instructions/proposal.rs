use anchor_lang::prelude::*;
use crate::constants::{MAX_DESCRIPTION_LINK_LEN, MAX_TITLE_LEN};
use crate::{
    GovernanceError, ProposalInstruction, ProposalState, validate_instructions,
    ProposalCreated, ProposalMetaCreated, ProposalActivated, ProposalCanceled, ProposalQueued,
    CreateProposal, CreateProposalMeta, ActivateProposal, CancelProposal, QueueProposal,
};

pub fn create_proposal(
    ctx: Context<CreateProposal>,
    instructions: Vec<ProposalInstruction>,
) -> Result<()> {
    validate_instructions(&instructions)?;

    let now = Clock::get()?.unix_timestamp;
    let governor = &mut ctx.accounts.governor;
    let proposal = &mut ctx.accounts.proposal;
    let instruction_count = instructions.len() as u8;

    proposal.governor = governor.key();
    proposal.index = governor.proposal_count;
    proposal.bump = ctx.bumps.proposal;
    proposal.proposer = ctx.accounts.proposer.key();
    proposal.quorum_votes = governor.params.quorum_votes;
    proposal.for_votes = 0;
    proposal.against_votes = 0;
    proposal.abstain_votes = 0;
    proposal.canceled_at = 0;
    proposal.created_at = now;
    proposal.activated_at = 0;
    proposal.voting_ends_at = 0;
    proposal.queued_at = 0;
    proposal.queued_transaction = Pubkey::default();
    proposal.instructions = instructions;

    governor.proposal_count = governor.proposal_count
        .checked_add(1)
        .ok_or(GovernanceError::Overflow)?;

    emit!(ProposalCreated {
        governor: governor.key(),
        proposal: proposal.key(),
        proposer: proposal.proposer,
        index: proposal.index,
        instruction_count,
        created_at: now,
    });

    msg!(
        "Proposal {} created by {} with {} instructions",
        proposal.index,
        proposal.proposer,
        instruction_count
    );
    Ok(())
}

pub fn create_proposal_meta(
    ctx: Context<CreateProposalMeta>,
    title: String,
    description_link: String,
) -> Result<()> {
    require!(title.len() <= MAX_TITLE_LEN, GovernanceError::TitleTooLong);
    require!(
        description_link.len() <= MAX_DESCRIPTION_LINK_LEN,
        GovernanceError::DescriptionLinkTooLong
    );

    let proposal_meta = &mut ctx.accounts.proposal_meta;
    proposal_meta.proposal = ctx.accounts.proposal.key();
    proposal_meta.title = title.clone();
    proposal_meta.description_link = description_link.clone();

    emit!(ProposalMetaCreated {
        proposal: proposal_meta.proposal,
        title: title.clone(),
        description_link,
    });

    msg!("Metadata set for proposal {}: {}", proposal_meta.proposal, title);
    Ok(())
}

pub fn activate_proposal(ctx: Context<ActivateProposal>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let params = ctx.accounts.governor.params;
    let proposal = &mut ctx.accounts.proposal;

    require!(proposal.get_state(now) == ProposalState::Draft, GovernanceError::ProposalNotDraft);

    let earliest_activation = proposal.created_at
        .checked_add(params.voting_delay)
        .ok_or(GovernanceError::Overflow)?;
    require!(now >= earliest_activation, GovernanceError::VotingDelayNotMet);

    proposal.activated_at = now;
    proposal.voting_ends_at = now
        .checked_add(params.voting_period)
        .ok_or(GovernanceError::Overflow)?;

    emit!(ProposalActivated {
        governor: proposal.governor,
        proposal: proposal.key(),
        activated_at: now,
        voting_ends_at: proposal.voting_ends_at,
    });

    msg!("Proposal {} activated, voting ends at {}", proposal.index, proposal.voting_ends_at);
    Ok(())
}

pub fn cancel_proposal(ctx: Context<CancelProposal>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let proposal = &mut ctx.accounts.proposal;

    require!(proposal.get_state(now) == ProposalState::Draft, GovernanceError::ProposalNotDraft);

    proposal.canceled_at = now;

    emit!(ProposalCanceled {
        governor: proposal.governor,
        proposal: proposal.key(),
        canceled_at: now,
    });

    msg!("Proposal {} canceled by {}", proposal.index, proposal.proposer);
    Ok(())
}

pub fn queue_proposal(ctx: Context<QueueProposal>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let governor = &ctx.accounts.governor;
    let proposal = &mut ctx.accounts.proposal;
    let transaction = &mut ctx.accounts.transaction;

    require!(
        proposal.get_state(now) == ProposalState::Succeeded,
        GovernanceError::ProposalNotSucceeded
    );

    let eta = now
        .checked_add(governor.params.timelock_delay_seconds)
        .ok_or(GovernanceError::Overflow)?;

    transaction.governor = governor.key();
    transaction.proposal = proposal.key();
    transaction.bump = ctx.bumps.transaction;
    transaction.eta = eta;
    transaction.executed_at = 0;

    proposal.queued_at = now;
    proposal.queued_transaction = transaction.key();

    emit!(ProposalQueued {
        governor: governor.key(),
        proposal: proposal.key(),
        transaction: transaction.key(),
        queued_at: now,
        eta,
    });

    msg!("Proposal {} queued, executable at {}", proposal.index, eta);
    Ok(())
}
