#![allow(dead_code)]

use anchor_lang::prelude::*;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use governance_module::constants::*;
use governance_module::GovernanceParameters;
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    clock::Clock,
    instruction::{Instruction, InstructionError},
    pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

// SPL Memo v3, preloaded by program-test.
pub const MEMO_PROGRAM_ID: Pubkey = pubkey!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");

// SystemError::AccountAlreadyInUse
pub const ACCOUNT_ALREADY_IN_USE: u32 = 0;

// Anchor's generated entry wants accounts that live as long as the
// instruction, program-test hands out a shorter borrow.
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    governance_module::entry(program_id, accounts, data)
}

pub async fn start() -> ProgramTestContext {
    let program_test = ProgramTest::new(
        "governance_module",
        governance_module::ID,
        processor!(process_instruction),
    );
    program_test.start_with_context().await
}

pub async fn process(
    context: &mut ProgramTestContext,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> std::result::Result<Signature, BanksClientError> {
    let blockhash = context.banks_client.get_latest_blockhash().await?;
    let mut all_signers: Vec<&Keypair> = vec![&context.payer];
    all_signers.extend_from_slice(signers);

    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&context.payer.pubkey()),
        &all_signers,
        blockhash,
    );
    let signature = tx.signatures[0];
    context.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

pub async fn fund(context: &mut ProgramTestContext, to: &Pubkey, lamports: u64) {
    let ix = system_instruction::transfer(&context.payer.pubkey(), to, lamports);
    process(context, &[ix], &[]).await.unwrap();
}

pub async fn warp_forward(context: &mut ProgramTestContext, seconds: i64) {
    let mut clock: Clock = context.banks_client.get_sysvar().await.unwrap();
    clock.unix_timestamp += seconds;
    context.set_sysvar(&clock);
}

pub async fn now(context: &mut ProgramTestContext) -> i64 {
    let clock: Clock = context.banks_client.get_sysvar().await.unwrap();
    clock.unix_timestamp
}

pub async fn fetch<T: AccountDeserialize>(context: &mut ProgramTestContext, address: Pubkey) -> T {
    let account = context
        .banks_client
        .get_account(address)
        .await
        .unwrap()
        .expect("account not found");
    T::try_deserialize(&mut account.data.as_ref()).unwrap()
}

pub fn assert_custom_error(err: BanksClientError, expected: u32) {
    match err.unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            assert_eq!(code, expected, "unexpected error code");
        }
        other => panic!("expected custom program error, got {:?}", other),
    }
}

pub fn assert_governance_error(
    err: BanksClientError,
    expected: governance_module::GovernanceError,
) {
    assert_custom_error(err, u32::from(expected));
}

// Same instruction, one more signer, so a retry is not a duplicate transaction.
pub fn with_extra_signer(mut ix: Instruction, signer: &Keypair) -> Instruction {
    ix.accounts.push(AccountMeta::new_readonly(signer.pubkey(), true));
    ix
}

pub fn governor_address(base: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[GOVERNOR_SEED, base.as_ref()], &governance_module::ID).0
}

pub fn proposal_address(governor: &Pubkey, index: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[PROPOSAL_SEED, governor.as_ref(), &index.to_le_bytes()],
        &governance_module::ID,
    )
    .0
}

pub fn proposal_meta_address(proposal: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[PROPOSAL_META_SEED, proposal.as_ref()], &governance_module::ID).0
}

pub fn vote_address(proposal: &Pubkey, voter: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[VOTE_SEED, proposal.as_ref(), voter.as_ref()],
        &governance_module::ID,
    )
    .0
}

pub fn transaction_address(proposal: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[TRANSACTION_SEED, proposal.as_ref()], &governance_module::ID).0
}

fn build(accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
    Instruction {
        program_id: governance_module::ID,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    }
}

pub fn initialize_ix(base: &Pubkey) -> Instruction {
    build(
        governance_module::accounts::Initialize {
            base: *base,
            governor: governor_address(base),
            system_program: anchor_lang::system_program::ID,
        },
        governance_module::instruction::Initialize {},
    )
}

pub fn create_governor_ix(base: &Pubkey, electorate: Pubkey, params: GovernanceParameters) -> Instruction {
    build(
        governance_module::accounts::CreateGovernor {
            base: *base,
            governor: governor_address(base),
            system_program: anchor_lang::system_program::ID,
        },
        governance_module::instruction::CreateGovernor { electorate, params },
    )
}

pub fn set_governance_params_ix(base: &Pubkey, params: GovernanceParameters) -> Instruction {
    build(
        governance_module::accounts::SetGovernanceParams {
            base: *base,
            governor: governor_address(base),
        },
        governance_module::instruction::SetGovernanceParams { params },
    )
}

pub fn set_electorate_ix(base: &Pubkey, new_electorate: Pubkey) -> Instruction {
    build(
        governance_module::accounts::SetGovernanceParams {
            base: *base,
            governor: governor_address(base),
        },
        governance_module::instruction::SetElectorate { new_electorate },
    )
}

pub fn create_proposal_ix(
    proposer: &Pubkey,
    governor: &Pubkey,
    index: u64,
    instructions: Vec<governance_module::ProposalInstruction>,
) -> Instruction {
    build(
        governance_module::accounts::CreateProposal {
            proposer: *proposer,
            governor: *governor,
            proposal: proposal_address(governor, index),
            system_program: anchor_lang::system_program::ID,
        },
        governance_module::instruction::CreateProposal { instructions },
    )
}

pub fn create_proposal_meta_ix(
    proposer: &Pubkey,
    proposal: &Pubkey,
    title: &str,
    description_link: &str,
) -> Instruction {
    build(
        governance_module::accounts::CreateProposalMeta {
            proposer: *proposer,
            proposal: *proposal,
            proposal_meta: proposal_meta_address(proposal),
            system_program: anchor_lang::system_program::ID,
        },
        governance_module::instruction::CreateProposalMeta {
            title: title.to_string(),
            description_link: description_link.to_string(),
        },
    )
}

pub fn activate_proposal_ix(electorate: &Pubkey, governor: &Pubkey, proposal: &Pubkey) -> Instruction {
    build(
        governance_module::accounts::ActivateProposal {
            electorate: *electorate,
            governor: *governor,
            proposal: *proposal,
        },
        governance_module::instruction::ActivateProposal {},
    )
}

pub fn cancel_proposal_ix(proposer: &Pubkey, proposal: &Pubkey) -> Instruction {
    build(
        governance_module::accounts::CancelProposal {
            proposer: *proposer,
            proposal: *proposal,
        },
        governance_module::instruction::CancelProposal {},
    )
}

pub fn new_vote_ix(payer: &Pubkey, proposal: &Pubkey, voter: Pubkey) -> Instruction {
    build(
        governance_module::accounts::NewVote {
            payer: *payer,
            proposal: *proposal,
            vote: vote_address(proposal, &voter),
            system_program: anchor_lang::system_program::ID,
        },
        governance_module::instruction::NewVote { voter },
    )
}

pub fn set_vote_ix(
    electorate: &Pubkey,
    governor: &Pubkey,
    proposal: &Pubkey,
    voter: &Pubkey,
    side: u8,
    weight: u64,
) -> Instruction {
    build(
        governance_module::accounts::SetVote {
            electorate: *electorate,
            governor: *governor,
            proposal: *proposal,
            vote: vote_address(proposal, voter),
        },
        governance_module::instruction::SetVote { side, weight },
    )
}

pub fn queue_proposal_ix(payer: &Pubkey, governor: &Pubkey, proposal: &Pubkey) -> Instruction {
    build(
        governance_module::accounts::QueueProposal {
            payer: *payer,
            governor: *governor,
            proposal: *proposal,
            transaction: transaction_address(proposal),
            system_program: anchor_lang::system_program::ID,
        },
        governance_module::instruction::QueueProposal {},
    )
}

pub fn execute_proposal_ix(executor: &Pubkey, governor: &Pubkey, proposal: &Pubkey) -> Instruction {
    build(
        governance_module::accounts::ExecuteProposal {
            executor: *executor,
            governor: *governor,
            proposal: *proposal,
            transaction: transaction_address(proposal),
        },
        governance_module::instruction::ExecuteProposal {},
    )
}
