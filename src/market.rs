use borsh::BorshDeserialize;
use rand::Rng;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;

use crate::state::{Error, OptionMarket, OptionWriter, Result};

pub fn decode_option_market(data : &[u8]) -> Result<OptionMarket> {
    OptionMarket::try_from_slice(data).map_err(Error::DecodeError)
}

/// Fetches the option market account and decodes its state.
pub async fn get_option_market(
    connection : &RpcClient,
    option_market_key : &Pubkey,
) -> Result<OptionMarket> {
    let response = connection.get_account_data(option_market_key).await?;
    decode_option_market(&response[..])
}

/// Picks one writer from the market's registry using the given random
/// source. The draw is floor(r * (registry_length - 1)) with r in [0, 1),
/// so with more than one populated entry the last slot is never picked.
pub fn select_option_writer<R: Rng>(
    option_market : OptionMarket,
    rng : &mut R,
) -> Result<(OptionWriter, OptionMarket)> {
    if option_market.registry_length == 0 {
        return Err(Error::EmptyRegistry);
    }

    let random_index =
        (rng.gen::<f64>() * ((option_market.registry_length - 1) as f64)).floor() as usize;
    let option_writer = option_market.option_writer_registry[random_index].clone();

    Ok((option_writer, option_market))
}

/// Fetches the option market account and returns a random entry from its
/// writer registry along with the full decoded market.
pub async fn select_random_option_writer(
    connection : &RpcClient,
    option_market_key : &Pubkey,
) -> Result<(OptionWriter, OptionMarket)> {
    let option_market = get_option_market(connection, option_market_key).await?;
    select_option_writer(option_market, &mut rand::thread_rng())
}
