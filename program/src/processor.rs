//! Program state processor

use {
    crate::{
        error::TokenVaultError,
        instruction::TokenVaultInstruction,
        signer::{OwnerAuthority, PdaSigner},
        state::{MintState, TokenAccountState},
    },
    solana_account_info::{next_account_info, AccountInfo},
    solana_cpi::{invoke, invoke_signed},
    solana_msg::msg,
    solana_program_error::{ProgramError, ProgramResult},
    solana_pubkey::Pubkey,
    solana_rent::Rent,
    solana_system_interface::instruction::{allocate, assign, create_account, transfer},
    solana_sysvar::Sysvar,
    spl_token_2022::{
        instruction::{initialize_account3, initialize_immutable_owner},
        onchain::invoke_transfer_checked,
    },
};

fn check_token_program(token_program_info: &AccountInfo) -> ProgramResult {
    let token_program_id = token_program_info.key;
    if *token_program_id != spl_token::id() && *token_program_id != spl_token_2022::id() {
        msg!(
            "Token program {} is neither spl-token nor spl-token-2022",
            token_program_id
        );
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Creates a program-signed account, paying any missing rent from `payer`.
///
/// An address that already holds lamports cannot go through
/// `CreateAccount`, so it is topped up, allocated and assigned instead.
fn create_pda_account<'a>(
    payer: &AccountInfo<'a>,
    rent: &Rent,
    space: usize,
    owner: &Pubkey,
    system_program: &AccountInfo<'a>,
    new_pda_account: &AccountInfo<'a>,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let required_lamports = rent.minimum_balance(space);

    if new_pda_account.lamports() > 0 {
        let shortfall = required_lamports.saturating_sub(new_pda_account.lamports());
        if shortfall > 0 {
            invoke(
                &transfer(payer.key, new_pda_account.key, shortfall),
                &[
                    payer.clone(),
                    new_pda_account.clone(),
                    system_program.clone(),
                ],
            )?;
        }
        invoke_signed(
            &allocate(new_pda_account.key, space as u64),
            &[new_pda_account.clone(), system_program.clone()],
            &[signer_seeds],
        )?;
        invoke_signed(
            &assign(new_pda_account.key, owner),
            &[new_pda_account.clone(), system_program.clone()],
            &[signer_seeds],
        )
    } else {
        invoke_signed(
            &create_account(
                payer.key,
                new_pda_account.key,
                required_lamports,
                space as u64,
                owner,
            ),
            &[
                payer.clone(),
                new_pda_account.clone(),
                system_program.clone(),
            ],
            &[signer_seeds],
        )
    }
}

/// Processes [`Initialize`](enum.TokenVaultInstruction.html) instruction.
pub fn process_initialize(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let owner_authority_info = next_account_info(account_info_iter)?;
    let vault_info = next_account_info(account_info_iter)?;
    let sender_token_account_info = next_account_info(account_info_iter)?;
    let mint_info = next_account_info(account_info_iter)?;
    let signer_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;
    let token_program_info = next_account_info(account_info_iter)?;
    let transfer_hook_accounts = account_info_iter.as_slice();

    if !signer_info.is_signer {
        msg!("Signer {} did not sign the transaction", signer_info.key);
        return Err(ProgramError::MissingRequiredSignature);
    }

    check_token_program(token_program_info)?;

    if *system_program_info.key != solana_system_interface::program::id() {
        msg!("System program account is {}", system_program_info.key);
        return Err(ProgramError::IncorrectProgramId);
    }

    if mint_info.owner != token_program_info.key {
        msg!(
            "Mint {} is not owned by token program {}",
            mint_info.key,
            token_program_info.key
        );
        return Err(ProgramError::IncorrectProgramId);
    }
    let mint = MintState::unpack(&mint_info.try_borrow_data()?)?;

    // PDA derivation validation

    let owner_authority = OwnerAuthority::verify(program_id, owner_authority_info.key)?;
    let vault_signer = PdaSigner::for_vault(program_id, mint_info.key, vault_info.key)?;

    // Creation, not top-up

    if vault_info.data_len() > 0 || *vault_info.owner != solana_system_interface::program::id() {
        msg!("Vault account {} already initialized", vault_info.key);
        return Err(TokenVaultError::AccountAlreadyInitialized.into());
    }

    // Sender validation

    if sender_token_account_info.owner != token_program_info.key {
        msg!(
            "Sender token account {} is not owned by token program {}",
            sender_token_account_info.key,
            token_program_info.key
        );
        return Err(ProgramError::IncorrectProgramId);
    }
    let sender = TokenAccountState::unpack(&sender_token_account_info.try_borrow_data()?)?;

    if sender.mint != *mint_info.key {
        msg!(
            "Sender token account holds mint {}, expected {}",
            sender.mint,
            mint_info.key
        );
        return Err(TokenVaultError::InvalidMintReference.into());
    }

    if sender.owner != *signer_info.key {
        msg!(
            "Sender token account is owned by {}, signer is {}",
            sender.owner,
            signer_info.key
        );
        return Err(TokenVaultError::SenderAuthorityMismatch.into());
    }

    if sender.amount < amount {
        msg!(
            "Sender balance {} is lower than requested amount {}",
            sender.amount,
            amount
        );
        return Err(TokenVaultError::InsufficientFunds.into());
    }

    // Create the vault PDA

    let space = mint.vault_account_len(token_program_info.key)?;
    let rent = Rent::get()?;
    create_pda_account(
        signer_info,
        &rent,
        space,
        token_program_info.key,
        system_program_info,
        vault_info,
        &vault_signer.signer_seeds(),
    )?;

    if *token_program_info.key == spl_token_2022::id() {
        invoke(
            &initialize_immutable_owner(token_program_info.key, vault_info.key)?,
            &[vault_info.clone()],
        )?;
    }

    invoke(
        &initialize_account3(
            token_program_info.key,
            vault_info.key,
            mint_info.key,
            owner_authority.address(),
        )?,
        &[vault_info.clone(), mint_info.clone()],
    )?;

    // Move the initial balance into custody

    invoke_transfer_checked(
        token_program_info.key,
        sender_token_account_info.clone(),
        mint_info.clone(),
        vault_info.clone(),
        signer_info.clone(),
        transfer_hook_accounts,
        amount,
        mint.decimals,
        &[],
    )?;

    msg!(
        "Vault {} for mint {} holds {} tokens",
        vault_info.key,
        mint_info.key,
        amount
    );

    Ok(())
}

/// Instruction processor
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    match TokenVaultInstruction::unpack(input)? {
        TokenVaultInstruction::Initialize { amount } => {
            msg!("Instruction: Initialize");
            process_initialize(program_id, accounts, amount)
        }
    }
}
