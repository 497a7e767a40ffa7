use {
    crate::{
        common::{get_account_owner, parse_pubkey, parse_token_program, process_transaction},
        config::Config,
        output::{format_output, println_display},
        CommandResult, Error,
    },
    clap::Args,
    serde_derive::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_cli_output::{display::writeln_name_value, QuietDisplay, VerboseDisplay},
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_pubkey::Pubkey,
    solana_signature::Signature,
    solana_signer::Signer,
    solana_transaction::Transaction,
    spl_associated_token_account_client::address::get_associated_token_address_with_program_id,
    spl_token_2022::{extension::PodStateWithExtensions, pod::PodAccount},
    spl_token_vault::{
        get_owner_authority_address_for_program, get_vault_address_for_program,
        instruction::initialize,
    },
    std::{
        fmt::{Display, Formatter},
        str::FromStr,
    },
};

/// Amount to move into the vault
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Amount {
    /// Exact amount in the mint's smallest unit
    Raw(u64),
    /// Everything the sender holds when the command runs
    All,
}

impl FromStr for Amount {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("all") {
            Ok(Amount::All)
        } else {
            value
                .parse::<u64>()
                .map(Amount::Raw)
                .map_err(|_| format!("Invalid amount {}, expected an integer or ALL", value))
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct InitializeArgs {
    /// The address of the mint whose tokens move into the vault
    #[clap(value_parser = parse_pubkey)]
    pub mint: Pubkey,

    /// The amount in the mint's smallest unit, or ALL for the sender's full
    /// balance
    #[clap(value_parser = Amount::from_str)]
    pub amount: Amount,

    /// The token account to send from, owned by the fee payer.
    /// If not provided, defaults to fee payer associated token account
    #[clap(long, value_parser = parse_pubkey)]
    pub sender_token_account: Option<Pubkey>,

    /// The token program that owns the mint.
    /// Queries the mint account if not provided.
    #[clap(long, value_parser = parse_token_program)]
    pub token_program: Option<Pubkey>,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeOutput {
    #[serde_as(as = "DisplayFromStr")]
    pub mint: Pubkey,

    #[serde_as(as = "DisplayFromStr")]
    pub owner_authority: Pubkey,

    #[serde_as(as = "DisplayFromStr")]
    pub vault_address: Pubkey,

    #[serde_as(as = "DisplayFromStr")]
    pub sender_token_account: Pubkey,

    pub amount: u64,

    #[serde_as(as = "Option<DisplayFromStr>")]
    pub signature: Option<Signature>,
}

impl Display for InitializeOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_name_value(f, "Mint:", &self.mint.to_string())?;
        writeln_name_value(f, "Owner authority:", &self.owner_authority.to_string())?;
        writeln_name_value(f, "Vault address:", &self.vault_address.to_string())?;
        writeln_name_value(
            f,
            "Sender token account:",
            &self.sender_token_account.to_string(),
        )?;
        writeln_name_value(f, "Amount:", &self.amount.to_string())?;
        if let Some(signature) = &self.signature {
            writeln_name_value(f, "Signature:", &signature.to_string())?;
        }

        Ok(())
    }
}

impl QuietDisplay for InitializeOutput {
    fn write_str(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        if let Some(signature) = &self.signature {
            writeln!(w, "{}", signature)?;
        }
        Ok(())
    }
}
impl VerboseDisplay for InitializeOutput {}

async fn get_token_balance(rpc_client: &RpcClient, token_account: &Pubkey) -> Result<u64, Error> {
    let account = rpc_client.get_account(token_account).await?;
    let state = PodStateWithExtensions::<PodAccount>::unpack(&account.data)?;
    Ok(state.base.amount.into())
}

pub async fn command_initialize(config: &Config, args: InitializeArgs) -> CommandResult {
    let payer = config.fee_payer()?;

    let token_program = if let Some(pubkey) = args.token_program {
        pubkey
    } else {
        get_account_owner(&config.rpc_client, &args.mint).await?
    };

    // If no sender passed, use the payer's ATA
    let sender_token_account = args.sender_token_account.unwrap_or_else(|| {
        get_associated_token_address_with_program_id(&payer.pubkey(), &args.mint, &token_program)
    });

    let amount = match args.amount {
        Amount::Raw(amount) => amount,
        Amount::All => get_token_balance(&config.rpc_client, &sender_token_account).await?,
    };

    let owner_authority = get_owner_authority_address_for_program(&config.program_id);
    let vault_address = get_vault_address_for_program(&args.mint, &config.program_id);

    println_display(
        config,
        format!(
            "Moving {} tokens of mint {} into vault {}",
            amount, args.mint, vault_address
        ),
    );

    let instruction = initialize(
        &config.program_id,
        &owner_authority,
        &vault_address,
        &sender_token_account,
        &args.mint,
        &payer.pubkey(),
        &token_program,
        amount,
    );

    let blockhash = config.rpc_client.get_latest_blockhash().await?;
    let signers = vec![payer.clone()];
    let mut transaction = Transaction::new_with_payer(&[instruction], Some(&payer.pubkey()));
    transaction.partial_sign(&signers, blockhash);

    let signature = process_transaction(config, transaction).await?;

    Ok(format_output(
        config,
        InitializeOutput {
            mint: args.mint,
            owner_authority,
            vault_address,
            sender_token_account,
            amount,
            signature,
        },
    ))
}
