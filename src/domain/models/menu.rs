/// A selectable button: what the user sees and what comes back in the postback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub title: &'static str,
    pub payload: &'static str,
}

/// Postback payload identifiers known to the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Option1,
    Option2,
    Option3,
    MainMenu,
    Unrecognized,
}

impl Selection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Option1 => "MENU_OPTION_1",
            Selection::Option2 => "MENU_OPTION_2",
            Selection::Option3 => "MENU_OPTION_3",
            Selection::MainMenu => "MAIN_MENU",
            Selection::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn parse(payload: &str) -> Self {
        match payload {
            "MENU_OPTION_1" => Selection::Option1,
            "MENU_OPTION_2" => Selection::Option2,
            "MENU_OPTION_3" => Selection::Option3,
            "MAIN_MENU" => Selection::MainMenu,
            _ => Selection::Unrecognized,
        }
    }
}
