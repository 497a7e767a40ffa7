use {
    crate::helpers::{
        common::{init_mollusk, setup_payer, KeyedAccount, TokenProgram},
        mint_builder::MintBuilder,
        token_account_builder::TokenAccountBuilder,
    },
    mollusk_svm::{program::keyed_account_for_system_program, result::Check, Mollusk},
    solana_account::Account,
    solana_instruction::AccountMeta,
    solana_pubkey::Pubkey,
    spl_token_2022::extension::ExtensionType,
    spl_token_vault::{get_owner_authority_address, get_vault_address, instruction::initialize},
};

pub struct InitializeBuilder<'a> {
    mollusk: Mollusk,
    token_program: TokenProgram,
    amount: Option<u64>,
    mint: Option<KeyedAccount>,
    sender: Option<KeyedAccount>,
    sender_starting_amount: Option<u64>,
    signer: Option<KeyedAccount>,
    owner_authority_addr: Option<Pubkey>,
    vault_addr: Option<Pubkey>,
    vault_account: Option<Account>,
    token_program_addr: Option<Pubkey>,
    system_program_addr: Option<Pubkey>,
    signer_is_signer: bool,
    extra_accounts: Vec<(KeyedAccount, bool)>,
    checks: Vec<Check<'a>>,
}

impl Default for InitializeBuilder<'_> {
    fn default() -> Self {
        Self {
            mollusk: init_mollusk(),
            token_program: TokenProgram::SplToken,
            amount: None,
            mint: None,
            sender: None,
            sender_starting_amount: None,
            signer: None,
            owner_authority_addr: None,
            vault_addr: None,
            vault_account: None,
            token_program_addr: None,
            system_program_addr: None,
            signer_is_signer: true,
            extra_accounts: vec![],
            checks: vec![],
        }
    }
}

impl<'a> InitializeBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token_program(mut self, program: TokenProgram) -> Self {
        self.token_program = program;
        self
    }

    pub fn amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn mint(mut self, mint: KeyedAccount) -> Self {
        self.mint = Some(mint);
        self
    }

    pub fn sender(mut self, sender: KeyedAccount) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn sender_starting_amount(mut self, amount: u64) -> Self {
        self.sender_starting_amount = Some(amount);
        self
    }

    pub fn signer(mut self, signer: KeyedAccount) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn owner_authority_addr(mut self, key: Pubkey) -> Self {
        self.owner_authority_addr = Some(key);
        self
    }

    pub fn vault_addr(mut self, key: Pubkey) -> Self {
        self.vault_addr = Some(key);
        self
    }

    pub fn vault_account(mut self, account: Account) -> Self {
        self.vault_account = Some(account);
        self
    }

    /// Program account passed in the token program slot
    pub fn token_program_addr(mut self, key: Pubkey) -> Self {
        self.token_program_addr = Some(key);
        self
    }

    /// Account passed in the system program slot
    pub fn system_program_addr(mut self, key: Pubkey) -> Self {
        self.system_program_addr = Some(key);
        self
    }

    pub fn without_signature(mut self) -> Self {
        self.signer_is_signer = false;
        self
    }

    /// Append an account after the fixed ones, forwarded to the token
    /// program's transfer
    pub fn add_extra_account(mut self, keyed_account: KeyedAccount, is_writable: bool) -> Self {
        self.extra_accounts.push((keyed_account, is_writable));
        self
    }

    pub fn check(mut self, check: Check<'a>) -> Self {
        self.checks.push(check);
        self
    }

    pub fn execute(mut self) -> InitializeResult {
        let amount = self.amount.unwrap_or(500);

        let mint = self.mint.clone().unwrap_or_else(|| {
            MintBuilder::new()
                .token_program(self.token_program)
                .build()
        });

        let signer = self
            .signer
            .clone()
            .unwrap_or_else(|| setup_payer(Pubkey::new_unique()));

        let sender = self.sender.clone().unwrap_or_else(|| {
            let mut builder = TokenAccountBuilder::new()
                .token_program(self.token_program)
                .mint(mint.key)
                .owner(signer.key)
                .amount(self.sender_starting_amount.unwrap_or(amount));
            if self.token_program == TokenProgram::SplToken2022 {
                builder = builder.with_extension(ExtensionType::ImmutableOwner);
            }
            builder.build()
        });

        let owner_authority = self
            .owner_authority_addr
            .unwrap_or_else(get_owner_authority_address);
        let vault = KeyedAccount {
            key: self
                .vault_addr
                .unwrap_or_else(|| get_vault_address(&mint.key)),
            account: self.vault_account.clone().unwrap_or_default(),
        };

        let token_program_account = match self.token_program_addr {
            Some(key) => (key, Account::default()),
            None => self.token_program.keyed_account(),
        };

        let mut instruction = initialize(
            &spl_token_vault::id(),
            &owner_authority,
            &vault.key,
            &sender.key,
            &mint.key,
            &signer.key,
            &token_program_account.0,
            amount,
        );
        instruction.accounts[4].is_signer = self.signer_is_signer;

        let system_program_account = match self.system_program_addr {
            Some(key) => {
                instruction.accounts[5].pubkey = key;
                (key, Account::default())
            }
            None => keyed_account_for_system_program(),
        };

        let mut accounts = vec![
            (owner_authority, Account::default()),
            vault.pair(),
            sender.pair(),
            mint.pair(),
            signer.pair(),
            system_program_account,
            token_program_account,
        ];

        for (extra_account, is_writable) in &self.extra_accounts {
            let meta = if *is_writable {
                AccountMeta::new(extra_account.key, false)
            } else {
                AccountMeta::new_readonly(extra_account.key, false)
            };
            instruction.accounts.push(meta);
            accounts.push(extra_account.pair());
        }

        if self.checks.is_empty() {
            self.checks.push(Check::success());
        }

        let result =
            self.mollusk
                .process_and_validate_instruction(&instruction, &accounts, &self.checks);

        let resulting = |key: &Pubkey| KeyedAccount {
            key: *key,
            account: result.get_account(key).unwrap().clone(),
        };

        InitializeResult {
            vault: resulting(&vault.key),
            sender: resulting(&sender.key),
            mint: resulting(&mint.key),
            signer: resulting(&signer.key),
            owner_authority,
            extra_accounts: self
                .extra_accounts
                .iter()
                .map(|(extra_account, _)| resulting(&extra_account.key))
                .collect(),
        }
    }
}

pub struct InitializeResult {
    pub vault: KeyedAccount,
    pub sender: KeyedAccount,
    pub mint: KeyedAccount,
    pub signer: KeyedAccount,
    pub owner_authority: Pubkey,
    pub extra_accounts: Vec<KeyedAccount>,
}
