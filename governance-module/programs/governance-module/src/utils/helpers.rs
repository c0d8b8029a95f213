use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use crate::constants::MAX_PROPOSAL_INSTRUCTIONS;
use crate::{GovernanceError, ProposalInstruction};

pub fn to_instruction(ix: &ProposalInstruction) -> Instruction {
    let accounts = ix
        .keys
        .iter()
        .map(|key| {
            if key.is_writable {
                AccountMeta::new(key.pubkey, key.is_signer)
            } else {
                AccountMeta::new_readonly(key.pubkey, key.is_signer)
            }
        })
        .collect();

    Instruction {
        program_id: ix.program_id,
        accounts,
        data: ix.data.clone(),
    }
}

pub fn validate_instructions(instructions: &[ProposalInstruction]) -> Result<()> {
    require!(
        instructions.len() <= MAX_PROPOSAL_INSTRUCTIONS,
        GovernanceError::TooManyInstructions
    );
    for ix in instructions {
        ix.validate()?;
    }
    Ok(())
}
