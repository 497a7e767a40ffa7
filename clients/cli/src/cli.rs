use {
    crate::{
        common::parse_pubkey,
        config::Config,
        find_pdas::{command_find_pdas, FindPdasArgs},
        initialize::{command_initialize, InitializeArgs},
        output::parse_output_format,
        CommandResult,
    },
    clap::{
        builder::{PossibleValuesParser, TypedValueParser},
        Parser, Subcommand,
    },
    solana_clap_v3_utils::input_parsers::{
        parse_url_or_moniker,
        signer::{SignerSource, SignerSourceParserBuilder},
    },
    solana_cli_output::OutputFormat,
    solana_pubkey::Pubkey,
};

#[derive(Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about = "A command line tool for interacting with the SPL Token Vault program"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Configuration file to use
    #[clap(global(true), short = 'C', long = "config", id = "PATH")]
    pub config_file: Option<String>,

    /// Simulate transaction instead of executing
    #[clap(global(true), long, alias = "dryrun")]
    pub dry_run: bool,

    /// URL for Solana JSON `RPC` or moniker (or their first letter):
    /// [`mainnet-beta`, `testnet`, `devnet`, `localhost`].
    /// Default from the configuration file.
    #[clap(
        global(true),
        short = 'u',
        long = "url",
        id = "URL_OR_MONIKER",
        value_parser = parse_url_or_moniker,
    )]
    pub json_rpc_url: Option<String>,

    /// Specify the fee-payer account. This may be a keypair file or the ASK
    /// keyword. Defaults to the client keypair. The fee payer also signs as
    /// the owner of the sender token account.
    #[clap(
        global(true),
        long,
        id = "PAYER_KEYPAIR",
        value_parser = SignerSourceParserBuilder::default().allow_all().build(),
    )]
    pub fee_payer: Option<SignerSource>,

    /// Address of the deployed vault program.
    /// Defaults to the canonical deployment.
    #[clap(global(true), long, value_parser = parse_pubkey)]
    pub program_id: Option<Pubkey>,

    /// Show additional information
    #[clap(global(true), short, long)]
    pub verbose: bool,

    /// Return information in specified output format
    #[clap(
        global(true),
        long = "output",
        id = "FORMAT",
        conflicts_with = "verbose",
        value_parser = PossibleValuesParser::new([
            "display",
            "json",
            "json-compact",
            "quiet",
            "verbose"
        ]).map(|o| parse_output_format(&o)),
    )]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Find the owner authority and vault addresses for a mint
    FindPdas(FindPdasArgs),
    /// Create the vault for a mint and move an initial balance into it
    Initialize(InitializeArgs),
}

impl Command {
    pub async fn execute(self, config: &Config) -> CommandResult {
        match self {
            Command::FindPdas(args) => command_find_pdas(config, args).await,
            Command::Initialize(args) => command_initialize(config, args).await,
        }
    }
}
