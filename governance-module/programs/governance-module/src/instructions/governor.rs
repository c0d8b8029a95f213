use anchor_lang::prelude::*;
use crate::{
    Governor, GovernanceError, GovernanceParameters,
    GovernorCreated, GovernanceParamsUpdated, ElectorateUpdated,
    Initialize, CreateGovernor, SetGovernanceParams,
};

fn setup_governor(
    governor: &mut Governor,
    base: Pubkey,
    bump: u8,
    electorate: Pubkey,
    params: GovernanceParameters,
) -> Result<()> {
    require!(electorate != Pubkey::default(), GovernanceError::InvalidElectorate);
    params.validate()?;

    governor.base = base;
    governor.bump = bump;
    governor.proposal_count = 0;
    governor.electorate = electorate;
    governor.params = params;
    Ok(())
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let base = ctx.accounts.base.key();
    let params = GovernanceParameters::default();
    setup_governor(&mut ctx.accounts.governor, base, ctx.bumps.governor, base, params)?;

    emit!(GovernorCreated {
        governor: ctx.accounts.governor.key(),
        base,
        electorate: base,
        params,
        created_at: Clock::get()?.unix_timestamp,
    });

    msg!("Governor initialized by {} with default parameters", base);
    Ok(())
}

pub fn create_governor(
    ctx: Context<CreateGovernor>,
    electorate: Pubkey,
    params: GovernanceParameters,
) -> Result<()> {
    let base = ctx.accounts.base.key();
    setup_governor(&mut ctx.accounts.governor, base, ctx.bumps.governor, electorate, params)?;

    emit!(GovernorCreated {
        governor: ctx.accounts.governor.key(),
        base,
        electorate,
        params,
        created_at: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Governor created by {} with electorate {}, voting period {}s, quorum {}",
        base,
        electorate,
        params.voting_period,
        params.quorum_votes
    );
    Ok(())
}

pub fn set_governance_params(
    ctx: Context<SetGovernanceParams>,
    params: GovernanceParameters,
) -> Result<()> {
    params.validate()?;

    let governor = &mut ctx.accounts.governor;
    let prev_params = governor.params;
    governor.params = params;

    emit!(GovernanceParamsUpdated {
        governor: governor.key(),
        prev_params,
        params,
        updated_at: Clock::get()?.unix_timestamp,
    });

    msg!("Governance parameters updated for {}", governor.key());
    Ok(())
}

pub fn set_electorate(ctx: Context<SetGovernanceParams>, new_electorate: Pubkey) -> Result<()> {
    require!(new_electorate != Pubkey::default(), GovernanceError::InvalidElectorate);

    let governor = &mut ctx.accounts.governor;
    let prev_electorate = governor.electorate;
    governor.electorate = new_electorate;

    emit!(ElectorateUpdated {
        governor: governor.key(),
        prev_electorate,
        new_electorate,
        updated_at: Clock::get()?.unix_timestamp,
    });

    msg!("Electorate changed from {} to {}", prev_electorate, new_electorate);
    Ok(())
}
