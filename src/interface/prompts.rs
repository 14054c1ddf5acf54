use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::screen::FoodDetails;

/// One step of the interactive customization loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    IncrementFood,
    DecrementFood,
    IncrementExtra(u64),
    DecrementExtra(u64),
    ToggleFavorite,
    ConfirmOrder,
    Quit,
}

/// Menu entries for the current state, in display order.
pub fn action_menu(details: &FoodDetails) -> Vec<(String, Action)> {
    let mut menu = vec![
        (
            format!("+ {} (x{})", details.food().name, details.food_quantity()),
            Action::IncrementFood,
        ),
        (
            format!("- {} (x{})", details.food().name, details.food_quantity()),
            Action::DecrementFood,
        ),
    ];

    for extra in details.extras() {
        menu.push((
            format!("+ {} (x{})", extra.name, extra.quantity),
            Action::IncrementExtra(extra.id),
        ));
        menu.push((
            format!("- {} (x{})", extra.name, extra.quantity),
            Action::DecrementExtra(extra.id),
        ));
    }

    let favorite_label = if details.is_favorite() {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };
    menu.push((favorite_label.to_string(), Action::ToggleFavorite));
    menu.push((
        format!("Confirm order ({})", details.formatted_total()),
        Action::ConfirmOrder,
    ));
    menu.push(("Quit".to_string(), Action::Quit));

    menu
}

/// Ask the user what to do next.
pub fn prompt_action(details: &FoodDetails) -> Result<Action> {
    let menu = action_menu(details);
    let labels: Vec<&str> = menu.iter().map(|(label, _)| label.as_str()).collect();

    let selection = Select::new()
        .with_prompt(format!("Total {}", details.formatted_total()))
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(menu
        .get(selection)
        .map(|(_, action)| *action)
        .unwrap_or(Action::Quit))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
