use crate::pricing::constants::{FAVORITE_ICON, NOT_FAVORITE_ICON};

/// Commands a header action can send back to the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCommand {
    ToggleFavorite,
}

/// What the host should draw in its header for this flow, and what pressing
/// it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderAction {
    pub icon: &'static str,
    pub command: HeaderCommand,
}

/// Icon identifier for a favorite state.
pub fn favorite_icon(is_favorite: bool) -> &'static str {
    if is_favorite {
        FAVORITE_ICON
    } else {
        NOT_FAVORITE_ICON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_icon() {
        assert_eq!(favorite_icon(true), "favorite");
        assert_eq!(favorite_icon(false), "favorite-border");
    }
}
