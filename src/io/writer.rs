use std::fmt::Display;

use crate::{
    common::error::{AppError, MarketError},
    io::terminal::Terminal,
};

const MENU_OPTIONS: [&str; 10] = [
    "Add customer",
    "Add product",
    "Buy a product",
    "Display list of all customers",
    "Display list of all products",
    "Display list of customer's products by customer id",
    "Display list of customers that bought product by product id",
    "Remove customer",
    "Remove product",
    "Exit",
];

const RULE_WIDTH: usize = 89;
const TITLE_PAD: usize = 40;

/// Horizontal rule printed under the menu and after the option is read.
pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Renders the main menu, one entry per line, ending with a rule.
pub fn write_menu<T: Terminal + ?Sized>(terminal: &mut T) -> Result<(), AppError> {
    let pad = "-".repeat(TITLE_PAD);
    terminal.display("")?;
    terminal.display(&format!("{pad}Main menu{pad}"))?;
    terminal.display("Choose the operation to perform:")?;
    for (idx, label) in MENU_OPTIONS.iter().enumerate() {
        terminal.display(&format!("{}) {label}", idx + 1))?;
    }
    terminal.display(&rule())
}

/// Writes one line per item using its `Display` form.
pub fn write_lines<T, I>(terminal: &mut T, items: I) -> Result<(), AppError>
where
    T: Terminal + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        terminal.display(&item.to_string())?;
    }
    Ok(())
}

/// Report line for a domain error caught by the session loop.
pub fn error_line(err: &MarketError) -> String {
    format!("Error ({}): {}", err.kind(), err)
}
