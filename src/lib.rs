pub mod layout;
pub mod market;
pub mod state;

pub use layout::{public_key, uint64, FieldLayout};
pub use market::{
    decode_option_market, get_option_market, select_option_writer, select_random_option_writer,
};
pub use state::{Error, OptionMarket, OptionWriter, Result};
