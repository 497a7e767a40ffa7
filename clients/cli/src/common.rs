use {
    crate::{config::Config, output::println_display, Error},
    clap::ArgMatches,
    num_traits::FromPrimitive,
    solana_clap_v3_utils::keypair::pubkey_from_path,
    solana_client::{client_error::ClientError, nonblocking::rpc_client::RpcClient},
    solana_instruction::error::InstructionError,
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    solana_transaction::Transaction,
    solana_transaction_error::TransactionError,
    spl_token_vault::error::TokenVaultError,
};

pub fn parse_pubkey(value: &str) -> Result<Pubkey, String> {
    parse_address(value, "pubkey")
}

fn parse_address(path: &str, name: &str) -> Result<Pubkey, String> {
    let mut wallet_manager = None;
    pubkey_from_path(&ArgMatches::default(), path, name, &mut wallet_manager)
        .map_err(|_| format!("Failed to load pubkey {} at {}", name, path))
}

pub fn parse_token_program(value: &str) -> Result<Pubkey, String> {
    let pubkey = parse_pubkey(value)?;
    if pubkey == spl_token::id() || pubkey == spl_token_2022::id() {
        Ok(pubkey)
    } else {
        Err("Invalid token program. Must be spl-token or spl-token-2022".to_string())
    }
}

pub async fn get_account_owner(rpc_client: &RpcClient, account: &Pubkey) -> Result<Pubkey, Error> {
    let owner = rpc_client.get_account(account).await?.owner;
    Ok(owner)
}

/// Describes a failed transaction, naming the vault error when the program
/// returned one of its own codes
fn describe_transaction_error(error: &TransactionError) -> String {
    match error {
        TransactionError::InstructionError(index, InstructionError::Custom(code)) => {
            match TokenVaultError::from_u32(*code) {
                Some(vault_error) => format!(
                    "instruction {} failed with custom error {} ({:?}: {})",
                    index, code, vault_error, vault_error
                ),
                None => format!("instruction {} failed with custom error {}", index, code),
            }
        }
        error => error.to_string(),
    }
}

fn describe_client_error(error: &ClientError) -> String {
    match error.get_transaction_error() {
        Some(transaction_error) => describe_transaction_error(&transaction_error),
        None => error.to_string(),
    }
}

/// Simulates the transaction under `--dry-run`, otherwise sends it and waits
/// for confirmation while its blockhash remains valid
pub async fn process_transaction(
    config: &Config,
    transaction: Transaction,
) -> Result<Option<Signature>, Error> {
    let signature = transaction
        .signatures
        .first()
        .map(ToString::to_string)
        .unwrap_or_default();

    if config.dry_run {
        let simulation_data = config.rpc_client.simulate_transaction(&transaction).await?;

        if config.verbose() {
            if let Some(logs) = &simulation_data.value.logs {
                for log in logs {
                    println!("    {}", log);
                }
            }
        }

        if let Some(error) = &simulation_data.value.err {
            return Err(format!("Simulation failed: {}", describe_transaction_error(error)).into());
        }

        match (config.verbose(), simulation_data.value.units_consumed) {
            (true, Some(units_consumed)) => println!(
                "\nSimulation succeeded, consumed {} compute units",
                units_consumed
            ),
            _ => println_display(config, "Simulation succeeded".to_string()),
        }

        Ok(None)
    } else {
        config
            .rpc_client
            .send_and_confirm_transaction_with_spinner(&transaction)
            .await
            .map(Some)
            .map_err(|e| {
                format!(
                    "Transaction {} failed: {}",
                    signature,
                    describe_client_error(&e)
                )
                .into()
            })
    }
}
