use anchor_lang::prelude::*;
use crate::{
    GovernanceError, ProposalState, VoteSide,
    VoteCreated, VoteSet,
    NewVote, SetVote,
};

pub fn new_vote(ctx: Context<NewVote>, voter: Pubkey) -> Result<()> {
    let vote = &mut ctx.accounts.vote;
    vote.proposal = ctx.accounts.proposal.key();
    vote.voter = voter;
    vote.bump = ctx.bumps.vote;
    vote.side = VoteSide::Pending.into();
    vote.weight = 0;

    emit!(VoteCreated {
        proposal: vote.proposal,
        vote: vote.key(),
        voter,
    });

    msg!("Vote record created for {} on proposal {}", voter, vote.proposal);
    Ok(())
}

pub fn set_vote(ctx: Context<SetVote>, side: u8, weight: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let new_side = VoteSide::try_from(side)?;
    let proposal = &mut ctx.accounts.proposal;
    let vote = &mut ctx.accounts.vote;

    require!(proposal.get_state(now) == ProposalState::Active, GovernanceError::ProposalNotActive);

    proposal.subtract_vote_weight(vote.side()?, vote.weight)?;
    proposal.add_vote_weight(new_side, weight)?;

    vote.side = side;
    vote.weight = weight;

    emit!(VoteSet {
        governor: proposal.governor,
        proposal: proposal.key(),
        voter: vote.voter,
        side,
        weight,
        for_votes: proposal.for_votes,
        against_votes: proposal.against_votes,
        abstain_votes: proposal.abstain_votes,
    });

    msg!(
        "Vote by {} set to {:?} with weight {}. Tally for/against/abstain: {}/{}/{}",
        vote.voter,
        new_side,
        weight,
        proposal.for_votes,
        proposal.against_votes,
        proposal.abstain_votes
    );
    Ok(())
}
