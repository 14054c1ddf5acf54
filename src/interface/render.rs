use crate::screen::FoodDetails;

/// Display the item, its extras and the running total.
pub fn display_food_details(details: &FoodDetails) {
    let food = details.food();

    println!();
    println!("=== {} [{}] ===", food.name, details.favorite_icon());
    if !food.description.is_empty() {
        println!("{}", food.description);
    }
    println!("Price: {}", details.formatted_price());
    if !food.image_url.is_empty() {
        println!("Image: {}", food.image_url);
    }
    println!();

    display_extras(details);

    println!("--- Order total ---");
    println!(
        "{} x{}  =>  {}",
        food.name,
        details.food_quantity(),
        details.formatted_total()
    );
    println!();
}

/// Display the extras table with quantities.
pub fn display_extras(details: &FoodDetails) {
    let extras = details.extras();
    if extras.is_empty() {
        println!("Extras: (none)");
        println!();
        return;
    }

    let currency = &details.config().currency;
    let max_name_len = extras.iter().map(|e| e.name.len()).max().unwrap_or(10);

    println!("Extras:");
    for extra in extras {
        println!(
            "  [{:>3}] {:<width$}  {:>12}  x{}",
            extra.id,
            extra.name,
            currency.format_value(extra.value),
            extra.quantity,
            width = max_name_len
        );
    }
    println!();
}
