//! Menu-driven console session over a `Ledger`
//!
//! `App` is generic over its input and output so a whole session can be
//! scripted in tests. It owns the ledger for the lifetime of the run.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use transx_core::{format_money, Ledger, LedgerError};

use crate::input;
use crate::ui;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    ViewDetails,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::CreateAccount),
            2 => Some(MenuChoice::Deposit),
            3 => Some(MenuChoice::Withdraw),
            4 => Some(MenuChoice::CheckBalance),
            5 => Some(MenuChoice::ViewDetails),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const NOT_FOUND: &str = "Account not found! Please check the account number.";

/// Interactive banking session
pub struct App<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
    show_banner: bool,
    running: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(ledger: Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
            show_banner: true,
            running: false,
        }
    }

    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run the menu loop until the user confirms exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            writeln!(self.output, "\n{}", ui::welcome_banner())?;
        }

        self.running = true;
        while self.running {
            writeln!(self.output, "\n{}", ui::MAIN_MENU)?;
            self.prompt("\n   Enter your choice (1-6): ")?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::CreateAccount) => self.create_account()?,
                Some(MenuChoice::Deposit) => self.deposit()?,
                Some(MenuChoice::Withdraw) => self.withdraw()?,
                Some(MenuChoice::CheckBalance) => self.check_balance()?,
                Some(MenuChoice::ViewDetails) => self.view_details()?,
                Some(MenuChoice::Exit) => self.exit()?,
                None => self.error("Invalid choice! Please enter a number between 1 and 6.")?,
            }

            if self.running {
                self.prompt("\n   Press Enter to continue...")?;
                self.read_line()?;
            }
        }

        tracing::info!(accounts = self.ledger.count(), "Session ended");
        Ok(())
    }

    fn create_account(&mut self) -> Result<()> {
        self.section("CREATE NEW ACCOUNT")?;

        self.prompt("\n   Enter Account Holder Name: ")?;
        let Some(raw_name) = self.read_line()? else {
            return Ok(());
        };
        let name = match input::validate_holder_name(&raw_name) {
            Ok(name) => name.to_string(),
            Err(e) => return self.error(&e.to_string()),
        };

        self.prompt("   Enter Initial Deposit (0 for no deposit): $")?;
        let Some(raw_amount) = self.read_line()? else {
            return Ok(());
        };
        let initial_deposit = match input::parse_amount(&raw_amount) {
            Some(amount) if amount >= Decimal::ZERO => amount,
            _ => return self.error("Initial deposit cannot be negative!"),
        };

        let rows = match self.ledger.create_account(name, initial_deposit) {
            Ok(account) => [
                ("Account Number", account.id().to_string()),
                ("Account Holder", account.holder_name().to_string()),
                ("Initial Balance", format_money(account.balance().value())),
            ],
            Err(e) => return self.error(&format!("Account could not be created! {e}")),
        };

        writeln!(
            self.output,
            "{}",
            ui::success("Account Created Successfully!", ui::ACCOUNT_LABEL_WIDTH, &rows)
        )?;
        writeln!(
            self.output,
            "\n   [NOTE] Please save your account number for future transactions!"
        )?;
        Ok(())
    }

    fn deposit(&mut self) -> Result<()> {
        self.section("DEPOSIT MONEY")?;

        let Some(account_id) = self.read_known_account()? else {
            return Ok(());
        };

        self.prompt("   Enter Deposit Amount: $")?;
        let Some(raw_amount) = self.read_line()? else {
            return Ok(());
        };
        let Some(amount) = input::parse_amount(&raw_amount) else {
            return self.error("Deposit amount must be greater than zero!");
        };

        let previous = self.current_balance(&account_id);
        match self.ledger.try_deposit(&account_id, amount) {
            Ok(balance) => {
                let rows = [
                    ("Deposited Amount", format_money(amount)),
                    ("Previous Balance", format_money(previous)),
                    ("New Balance", format_money(balance.value())),
                ];
                writeln!(
                    self.output,
                    "{}",
                    ui::success("Deposit Successful!", ui::AMOUNT_LABEL_WIDTH, &rows)
                )?;
                Ok(())
            }
            Err(LedgerError::InvalidAmount(amount)) if amount > Decimal::ZERO => {
                self.error("Deposit failed! The new balance would exceed the largest supported amount.")
            }
            Err(LedgerError::InvalidAmount(_)) => {
                self.error("Deposit amount must be greater than zero!")
            }
            Err(LedgerError::AccountNotFound(_)) => self.error(NOT_FOUND),
            Err(e) => self.error(&format!("Deposit failed! {e}")),
        }
    }

    fn withdraw(&mut self) -> Result<()> {
        self.section("WITHDRAW MONEY")?;

        let Some(account_id) = self.read_known_account()? else {
            return Ok(());
        };

        let current = self.current_balance(&account_id);
        writeln!(self.output, "   Current Balance: {}", format_money(current))?;

        self.prompt("   Enter Withdrawal Amount: $")?;
        let Some(raw_amount) = self.read_line()? else {
            return Ok(());
        };
        let Some(amount) = input::parse_amount(&raw_amount) else {
            return self.error("Withdrawal amount must be greater than zero!");
        };

        match self.ledger.try_withdraw(&account_id, amount) {
            Ok(balance) => {
                let rows = [
                    ("Withdrawn Amount", format_money(amount)),
                    ("Previous Balance", format_money(current)),
                    ("New Balance", format_money(balance.value())),
                ];
                writeln!(
                    self.output,
                    "{}",
                    ui::success("Withdrawal Successful!", ui::AMOUNT_LABEL_WIDTH, &rows)
                )?;
                Ok(())
            }
            Err(LedgerError::InvalidAmount(_)) => {
                self.error("Withdrawal amount must be greater than zero!")
            }
            Err(LedgerError::InsufficientBalance { available, .. }) => {
                self.error("Insufficient balance!")?;
                writeln!(
                    self.output,
                    "   Your current balance is: {}",
                    format_money(available)
                )?;
                Ok(())
            }
            Err(LedgerError::AccountNotFound(_)) => self.error(NOT_FOUND),
            Err(e) => self.error(&format!("Withdrawal failed! {e}")),
        }
    }

    fn check_balance(&mut self) -> Result<()> {
        self.section("CHECK ACCOUNT BALANCE")?;

        let Some(account_id) = self.read_known_account()? else {
            return Ok(());
        };

        let card = match self.ledger.get_account(&account_id) {
            Some(account) => ui::balance_card(
                account.id().as_str(),
                account.holder_name(),
                account.balance().value(),
            ),
            None => return self.error(NOT_FOUND),
        };
        writeln!(self.output, "{card}")?;
        Ok(())
    }

    fn view_details(&mut self) -> Result<()> {
        self.section("VIEW ACCOUNT DETAILS")?;

        self.prompt("\n   Enter Account Number: ")?;
        let Some(raw_id) = self.read_line()? else {
            return Ok(());
        };
        let account_id = input::normalize_account_id(&raw_id);

        let details = match self.ledger.get_account(&account_id) {
            Some(account) => account.describe(),
            None => return self.error(NOT_FOUND),
        };
        writeln!(self.output, "\n{details}")?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.section("EXIT APPLICATION")?;

        self.prompt("\n   Are you sure you want to exit? (Y/N): ")?;
        let Some(answer) = self.read_line()? else {
            return Ok(());
        };

        if input::is_confirmation(&answer) {
            self.running = false;
            writeln!(self.output, "\n{}\n", ui::farewell_banner())?;
        } else {
            writeln!(self.output, "\n   [INFO] Exit cancelled. Returning to main menu...")?;
        }
        Ok(())
    }

    /// Prompt for an account number and confirm it exists.
    fn read_known_account(&mut self) -> Result<Option<String>> {
        self.prompt("\n   Enter Account Number: ")?;
        let Some(raw_id) = self.read_line()? else {
            return Ok(None);
        };
        let account_id = input::normalize_account_id(&raw_id);

        if !self.ledger.exists(&account_id) {
            self.error(NOT_FOUND)?;
            return Ok(None);
        }
        Ok(Some(account_id))
    }

    fn current_balance(&self, account_id: &str) -> Decimal {
        self.ledger
            .balance(account_id)
            .map(|balance| balance.value())
            .unwrap_or_default()
    }

    /// Read one line; `None` at end of input, which also ends the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;

        if read == 0 {
            tracing::debug!("End of input");
            self.running = false;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<()> {
        writeln!(self.output, "{}", ui::section(title))?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n   [ERROR] {message}")?;
        Ok(())
    }
}
