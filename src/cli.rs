use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::models::PriceEncoding;
use crate::pricing::{
    CurrencyFormat, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMAL_SEPARATOR,
    DEFAULT_THOUSANDS_SEPARATOR,
};
use crate::screen::ScreenConfig;

/// FoodDetails: customize a menu item with extras and place the order.
#[derive(Parser, Debug)]
#[command(name = "food_details")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the food API.
    #[arg(long, env = "FOOD_API_URL", default_value = "http://localhost:3333")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    #[command(flatten)]
    pub currency: CurrencyArgs,

    /// Send the order total as the formatted display string instead of a number.
    #[arg(long)]
    pub legacy_price_format: bool,
}

/// Currency display options.
#[derive(Args, Debug)]
pub struct CurrencyArgs {
    /// Symbol prefixed to amounts (empty for none).
    #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
    pub currency_symbol: String,

    /// Separator between units and cents.
    #[arg(long, default_value_t = DEFAULT_DECIMAL_SEPARATOR)]
    pub decimal_separator: char,

    /// Separator between thousands.
    #[arg(long, default_value_t = DEFAULT_THOUSANDS_SEPARATOR)]
    pub thousands_separator: char,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a food item with its extras and price.
    Show {
        /// Food item id.
        id: u64,
    },

    /// Place an order in one go.
    Order {
        /// Food item id.
        id: u64,

        /// Number of items (at least 1).
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Extra to add as KEY=QTY, where KEY is an extra id or name. Repeatable.
        #[arg(short, long = "extra", value_parser = parse_extra_arg)]
        extras: Vec<(String, u32)>,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Customize the order interactively.
    Customize {
        /// Food item id.
        id: u64,
    },

    /// Toggle the favorite status of a food item.
    Favorite {
        /// Food item id.
        id: u64,
    },
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Display and payload settings selected on the command line.
    pub fn screen_config(&self) -> ScreenConfig {
        ScreenConfig {
            currency: CurrencyFormat {
                symbol: self.currency.currency_symbol.clone(),
                decimal_separator: self.currency.decimal_separator,
                thousands_separator: self.currency.thousands_separator,
            },
            price_encoding: if self.legacy_price_format {
                PriceEncoding::Formatted
            } else {
                PriceEncoding::Amount
            },
        }
    }
}

/// Parse `KEY=QTY`; a bare `KEY` means one.
pub fn parse_extra_arg(s: &str) -> Result<(String, u32), String> {
    let (key, quantity) = match s.split_once('=') {
        Some((key, qty)) => {
            let qty = qty
                .trim()
                .parse()
                .map_err(|_| format!("invalid quantity in '{}'", s))?;
            (key.trim(), qty)
        }
        None => (s.trim(), 1),
    };

    if key.is_empty() {
        return Err(format!("missing extra in '{}'", s));
    }
    Ok((key.to_string(), quantity))
}
