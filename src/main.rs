use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use food_details::api::HttpFoodApi;
use food_details::cli::{Cli, Command};
use food_details::error::{OrderError, Result};
use food_details::interface::{
    display_food_details, prompt_action, prompt_yes_no, resolve_extra, Action,
};
use food_details::screen::{ConsoleNavigator, FoodDetails};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_details=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(cli))
}

async fn dispatch(cli: Cli) -> Result<()> {
    let api = HttpFoodApi::new(&cli.api_url, cli.timeout())?;
    tracing::debug!(api_url = api.base_url(), "using food API");

    match cli.command {
        Command::Show { id } => cmd_show(&api, &cli, id).await,
        Command::Order {
            id,
            quantity,
            ref extras,
            yes,
        } => cmd_order(&api, &cli, id, quantity, extras, yes).await,
        Command::Customize { id } => cmd_customize(&api, &cli, id).await,
        Command::Favorite { id } => cmd_favorite(&api, &cli, id).await,
    }
}

/// Show a food item with its extras and base total.
async fn cmd_show(api: &HttpFoodApi, cli: &Cli, id: u64) -> Result<()> {
    let details = FoodDetails::load(api, id, cli.screen_config()).await?;
    display_food_details(&details);
    Ok(())
}

/// Build the order from arguments and submit it.
async fn cmd_order(
    api: &HttpFoodApi,
    cli: &Cli,
    id: u64,
    quantity: u32,
    extras: &[(String, u32)],
    yes: bool,
) -> Result<()> {
    if quantity == 0 {
        return Err(OrderError::InvalidInput(
            "Quantity must be at least 1".to_string(),
        ));
    }

    let mut details = FoodDetails::load(api, id, cli.screen_config()).await?;

    for _ in 1..quantity {
        details.increment_food();
    }

    for (key, count) in extras {
        let extra_id = resolve_extra(details.extras(), key)?;
        for _ in 0..*count {
            details.increment_extra(extra_id);
        }
    }

    display_food_details(&details);

    if !yes && !prompt_yes_no("Confirm order?", true)? {
        println!("Order cancelled.");
        return Ok(());
    }

    submit(api, &details).await
}

/// Interactive customization loop.
async fn cmd_customize(api: &HttpFoodApi, cli: &Cli, id: u64) -> Result<()> {
    let mut details = FoodDetails::load(api, id, cli.screen_config()).await?;

    loop {
        display_food_details(&details);

        match prompt_action(&details)? {
            Action::IncrementFood => details.increment_food(),
            Action::DecrementFood => details.decrement_food(),
            Action::IncrementExtra(extra_id) => details.increment_extra(extra_id),
            Action::DecrementExtra(extra_id) => details.decrement_extra(extra_id),
            Action::ToggleFavorite => {
                let action = details.header_action();
                details.dispatch(api, action.command).await?;
            }
            Action::ConfirmOrder => return submit(api, &details).await,
            Action::Quit => {
                println!("Order discarded.");
                return Ok(());
            }
        }
    }
}

/// Flip the favorite status of a food item.
async fn cmd_favorite(api: &HttpFoodApi, cli: &Cli, id: u64) -> Result<()> {
    let mut details = FoodDetails::load(api, id, cli.screen_config()).await?;
    let is_favorite = details.toggle_favorite(api).await?;

    if is_favorite {
        println!("{} added to favorites.", details.food().name);
    } else {
        println!("{} removed from favorites.", details.food().name);
    }
    Ok(())
}

async fn submit(api: &HttpFoodApi, details: &FoodDetails) -> Result<()> {
    let created = details
        .finish_order(api, &mut ConsoleNavigator::stdout())
        .await?;

    println!("Order placed: {}", details.formatted_total());
    if let Some(order_id) = created.get("id") {
        println!("Order id: {}", order_id);
    }
    Ok(())
}
