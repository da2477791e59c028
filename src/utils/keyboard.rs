use crate::model::event::Keyboard;

use lazy_static::lazy_static;
use teloxide::types::{KeyboardButton, KeyboardMarkup};

lazy_static! {
    static ref MAIN_MENU_VARIANTS: Vec<String> = vec![
        "Topics".to_owned(),
        "Exercises".to_owned(),
        "Help".to_owned(),
    ];
}

pub fn make_main_keyboard() -> Keyboard {
    MAIN_MENU_VARIANTS
        .chunks(2)
        .map(|labels| labels.to_vec())
        .collect()
}

/// Renders rows of labels as a reply keyboard that auto-resizes and is
/// consumed after one use.
pub fn to_markup(keyboard: Keyboard) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = keyboard
        .iter()
        .map(|labels| labels.iter().map(KeyboardButton::new).collect())
        .collect();

    let mut markup = KeyboardMarkup::new(rows);
    markup.resize_keyboard = Option::from(true);
    markup.one_time_keyboard = Option::from(true);
    markup
}
