use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("solana client error: ({0})")]
    ClientError(#[from] solana_client::client_error::ClientError),

    #[error("failed to decode option market account: ({0})")]
    DecodeError(std::io::Error),

    #[error("option market writer registry is empty")]
    EmptyRegistry,

    #[error("buffer too short for field '{property}': need {span} bytes at offset {offset}, have {available}")]
    LayoutOverrun {
        property : String,
        span : usize,
        offset : usize,
        available : usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

// one registry entry, recorded when a writer mints a contract
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct OptionWriter {
    // the writer's account that holds the underlying asset
    pub underlying_asset_acct_address : Pubkey,
    // the writer's account that receives the quote asset on exercise
    pub quote_asset_acct_address : Pubkey,
    // the writer's account that holds the contract tokens
    pub contract_token_acct_address : Pubkey,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct OptionMarket {
    // the mint of the tokens that denote a contract
    pub option_mint_address : Pubkey,
    pub underlying_asset_address : Pubkey,
    pub quote_asset_address : Pubkey,
    // the amount of underlying asset that derives a single contract
    pub amount_per_contract : u64,
    // the amount of quote asset transfered when a contract is exercised
    pub strike_price : u64,
    pub expiration_unix_timestamp : i64,
    // the pool holding the underlying asset for all written contracts
    pub asset_pool_address : Pubkey,
    // the number of populated entries in the writer registry
    pub registry_length : u16,
    // entries at indices >= registry_length are not populated
    pub option_writer_registry : Vec<OptionWriter>,
}
