use crate::domain::models::{MenuOption, OutboundMessage};

pub const MAIN_MENU_PROMPT: &str = "Welcome! Please select an option from the menu:";
pub const BACK_TO_MENU_PROMPT: &str = "What would you like to do next?";

pub const MAIN_MENU_OPTIONS: [MenuOption; 3] = [
    MenuOption {
        title: "Option 1",
        payload: "MENU_OPTION_1",
    },
    MenuOption {
        title: "Option 2",
        payload: "MENU_OPTION_2",
    },
    MenuOption {
        title: "Option 3",
        payload: "MENU_OPTION_3",
    },
];

pub const BACK_TO_MENU_OPTION: MenuOption = MenuOption {
    title: "Back to Main Menu",
    payload: "MAIN_MENU",
};

pub fn build_main_menu() -> OutboundMessage {
    OutboundMessage::buttons(MAIN_MENU_PROMPT, &MAIN_MENU_OPTIONS)
}

pub fn build_back_to_menu() -> OutboundMessage {
    OutboundMessage::buttons(BACK_TO_MENU_PROMPT, &[BACK_TO_MENU_OPTION])
}
