//! Screen text: banners, the main menu and the small boxed cards.
//!
//! Everything here returns a `String`; the app decides where it goes.

use rust_decimal::Decimal;
use transx_core::format_money;

const BANNER_WIDTH: usize = 63;

pub const MAIN_MENU: &str = "\
+-------------------------------------------+
|              MAIN MENU                    |
+-------------------------------------------+
|   1. Create New Account                   |
|   2. Deposit Money                        |
|   3. Withdraw Money                       |
|   4. Check Account Balance                |
|   5. View Account Details                 |
|   6. Exit Application                     |
+-------------------------------------------+";

pub const DIVIDER: &str = "---------------------------------------------";

pub const RULE: &str = "   =========================================";

/// Lines centered inside a double-ruled frame.
fn framed(lines: &[&str]) -> String {
    let border = format!("+{}+", "=".repeat(BANNER_WIDTH));
    let mut out = vec![border.clone()];
    for line in lines {
        out.push(format!("|{:^width$}|", line, width = BANNER_WIDTH));
    }
    out.push(border);
    out.join("\n")
}

pub fn welcome_banner() -> String {
    let frame = framed(&["", "TRANSX SIMPLE BANKING SYSTEM", "Version 1.0", ""]);
    format!(
        "{frame}\n\n        Welcome to TransX Banking System!\n      Your trusted partner in financial management.\n"
    )
}

pub fn farewell_banner() -> String {
    framed(&[
        "",
        "Thank you for using TransX Banking System!",
        "",
        "Your trust is our greatest asset.",
        "",
        "Have a great day!",
        "",
    ])
}

/// Section header shown at the start of every menu action.
pub fn section(title: &str) -> String {
    format!("\n{DIVIDER}\n{title:^45}\n{DIVIDER}")
}

/// Label column of the account-created block
pub const ACCOUNT_LABEL_WIDTH: usize = 15;

/// Label column of the deposit and withdrawal blocks
pub const AMOUNT_LABEL_WIDTH: usize = 17;

/// Labelled rows between two rules, after a `[SUCCESS]` headline.
pub fn success(headline: &str, label_width: usize, rows: &[(&str, String)]) -> String {
    let mut out = vec![format!("\n   [SUCCESS] {headline}"), RULE.to_string()];
    for (label, value) in rows {
        out.push(format!("   {label:<label_width$}: {value}"));
    }
    out.push(RULE.to_string());
    out.join("\n")
}

pub fn balance_card(account_id: &str, holder: &str, balance: Decimal) -> String {
    let border = "   +-------------------------------------+";
    [
        format!("\n{border}"),
        "   |         ACCOUNT BALANCE             |".to_string(),
        border.to_string(),
        format!("   |  Account: {:<25} |", account_id),
        format!("   |  Holder : {:<25} |", holder),
        format!("   |  Balance: {:<25} |", format_money(balance)),
        border.to_string(),
    ]
    .join("\n")
}
