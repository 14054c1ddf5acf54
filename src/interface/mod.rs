pub mod matching;
pub mod prompts;
pub mod render;

pub use matching::resolve_extra;
pub use prompts::{action_menu, prompt_action, prompt_yes_no, Action};
pub use render::{display_extras, display_food_details};
