use {
    crate::{
        common::parse_pubkey,
        config::Config,
        output::{format_output, writeln_pda},
        CommandResult,
    },
    clap::Args,
    serde_derive::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_cli_output::{QuietDisplay, VerboseDisplay},
    solana_pubkey::Pubkey,
    spl_token_vault::{
        get_owner_authority_with_seed_for_program, get_vault_address_with_seed_for_program,
    },
    std::fmt::{Display, Formatter},
};

#[derive(Clone, Debug, Args)]
pub struct FindPdasArgs {
    /// The address of the mint held in the vault
    #[clap(value_parser = parse_pubkey)]
    pub mint: Pubkey,
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdasOutput {
    #[serde_as(as = "DisplayFromStr")]
    pub program_id: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub owner_authority: Pubkey,
    pub owner_authority_bump: u8,
    #[serde_as(as = "DisplayFromStr")]
    pub vault_address: Pubkey,
    pub vault_bump: u8,
}

impl Display for PdasOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln_pda(
            f,
            "Owner authority:",
            &self.owner_authority,
            self.owner_authority_bump,
        )?;
        writeln_pda(f, "Vault address:", &self.vault_address, self.vault_bump)
    }
}

impl QuietDisplay for PdasOutput {
    fn write_str(&self, _: &mut dyn std::fmt::Write) -> std::fmt::Result {
        Ok(())
    }
}
impl VerboseDisplay for PdasOutput {}

pub async fn command_find_pdas(config: &Config, args: FindPdasArgs) -> CommandResult {
    let (owner_authority, owner_authority_bump) =
        get_owner_authority_with_seed_for_program(&config.program_id);
    let (vault_address, vault_bump) =
        get_vault_address_with_seed_for_program(&args.mint, &config.program_id);

    Ok(format_output(
        config,
        PdasOutput {
            program_id: config.program_id,
            owner_authority,
            owner_authority_bump,
            vault_address,
            vault_bump,
        },
    ))
}
