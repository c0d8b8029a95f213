use anchor_lang::prelude::*;

declare_id!("HJzW17DkivXRYjirjDD56a3Pve6JFnKhmsfpswJQ3St4");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use errors::*;
pub use events::*;
pub use state::*;
pub use utils::*;

#[program]
pub mod governance_module {
    use super::*;

    /// Creates a governor for the signing base with default parameters.
    /// The base also becomes the electorate.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::governor::initialize(ctx)
    }

    pub fn create_governor(
        ctx: Context<CreateGovernor>,
        electorate: Pubkey,
        params: GovernanceParameters,
    ) -> Result<()> {
        instructions::governor::create_governor(ctx, electorate, params)
    }

    pub fn set_governance_params(
        ctx: Context<SetGovernanceParams>,
        params: GovernanceParameters,
    ) -> Result<()> {
        instructions::governor::set_governance_params(ctx, params)
    }

    pub fn set_electorate(ctx: Context<SetGovernanceParams>, new_electorate: Pubkey) -> Result<()> {
        instructions::governor::set_electorate(ctx, new_electorate)
    }

    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        instructions: Vec<ProposalInstruction>,
    ) -> Result<()> {
        instructions::proposal::create_proposal(ctx, instructions)
    }

    pub fn create_proposal_meta(
        ctx: Context<CreateProposalMeta>,
        title: String,
        description_link: String,
    ) -> Result<()> {
        instructions::proposal::create_proposal_meta(ctx, title, description_link)
    }

    pub fn activate_proposal(ctx: Context<ActivateProposal>) -> Result<()> {
        instructions::proposal::activate_proposal(ctx)
    }

    pub fn cancel_proposal(ctx: Context<CancelProposal>) -> Result<()> {
        instructions::proposal::cancel_proposal(ctx)
    }

    pub fn new_vote(ctx: Context<NewVote>, voter: Pubkey) -> Result<()> {
        instructions::vote::new_vote(ctx, voter)
    }

    pub fn set_vote(ctx: Context<SetVote>, side: u8, weight: u64) -> Result<()> {
        instructions::vote::set_vote(ctx, side, weight)
    }

    pub fn queue_proposal(ctx: Context<QueueProposal>) -> Result<()> {
        instructions::proposal::queue_proposal(ctx)
    }

    /// Invokes every queued proposal instruction signed by the governor PDA.
    pub fn execute_proposal<'info>(
        ctx: Context<'_, '_, 'info, 'info, ExecuteProposal<'info>>,
    ) -> Result<()> {
        instructions::execution::execute_proposal(ctx)
    }
}
