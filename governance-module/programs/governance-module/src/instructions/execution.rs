use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke_signed;
use crate::constants::GOVERNOR_SEED;
use crate::{GovernanceError, ProposalExecuted, ExecuteProposal, to_instruction};

pub fn execute_proposal<'info>(
    ctx: Context<'_, '_, 'info, 'info, ExecuteProposal<'info>>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let transaction = &ctx.accounts.transaction;

    require!(!transaction.is_executed(), GovernanceError::AlreadyExecuted);
    require!(now >= transaction.eta, GovernanceError::TimelockNotElapsed);

    let governor = &ctx.accounts.governor;
    let proposal = &ctx.accounts.proposal;

    let bump = [governor.bump];
    let governor_seeds = &[GOVERNOR_SEED, governor.base.as_ref(), &bump];

    let mut account_infos = ctx.remaining_accounts.to_vec();
    account_infos.push(governor.to_account_info());

    for ix in &proposal.instructions {
        invoke_signed(&to_instruction(ix), &account_infos, &[governor_seeds])?;
    }

    let instruction_count = proposal.instructions.len() as u8;
    let governor_key = governor.key();
    let proposal_key = proposal.key();

    let transaction = &mut ctx.accounts.transaction;
    transaction.executed_at = now;

    emit!(ProposalExecuted {
        governor: governor_key,
        proposal: proposal_key,
        transaction: transaction.key(),
        instruction_count,
        executed_at: now,
    });

    msg!("Proposal {} executed {} instructions", proposal_key, instruction_count);
    Ok(())
}
