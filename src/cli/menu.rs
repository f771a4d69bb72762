//! Interactive menu session
//!
//! A numbered menu driving the ledger operations, one choice per iteration
//! with sub-prompts for account numbers and amounts. Operation errors are
//! reported and the loop continues; only choice 6 (or end of input) ends
//! the session. Reader and writer are generic so the session can be tested
//! with in-memory buffers.

use std::io::{BufRead, Write};

use crate::calc::Operation;
use crate::display::{format_account_details, format_account_list};
use crate::error::{TellerError, TellerResult};
use crate::models::{AccountNumber, Money};
use crate::services::TellerService;
use crate::storage::LedgerRepository;

const MENU: &str = "\n===========================================\n\
                    \x20          BANKING SYSTEM MENU\n\
                    ===========================================\n\
                    1. Create New Account\n\
                    2. Deposit Money\n\
                    3. Withdraw Money\n\
                    4. Balance Enquiry\n\
                    5. Display All Accounts\n\
                    6. Exit\n\
                    7. Calculator\n\
                    ===========================================\n";

/// Run the interactive menu session until the user exits
pub fn run_menu<R: BufRead, W: Write>(
    ledger: &LedgerRepository,
    input: &mut R,
    output: &mut W,
) -> TellerResult<()> {
    let teller = TellerService::new(ledger);

    loop {
        write!(output, "{}", MENU)?;

        let choice = match prompt(input, output, "Enter your choice: ")? {
            Some(line) => line,
            None => break,
        };

        let result = match choice.trim() {
            "1" => create_account(&teller, input, output),
            "2" => deposit(&teller, input, output),
            "3" => withdraw(&teller, input, output),
            "4" => balance_enquiry(&teller, input, output),
            "5" => display_all(&teller, output),
            "6" => {
                ledger.save()?;
                writeln!(output, "Accounts saved. Goodbye!")?;
                break;
            }
            "7" => calculator(input, output),
            _ => {
                writeln!(output, "Invalid choice! Please try again.")?;
                Ok(())
            }
        };

        // Operation failures are reported, never fatal to the session
        if let Err(e) = result {
            writeln!(output, "Error: {}", e)?;
        }
    }

    Ok(())
}

/// Write a prompt and read one line; `None` means end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> TellerResult<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_required<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> TellerResult<String> {
    prompt(input, output, message)?
        .ok_or_else(|| TellerError::Validation("Unexpected end of input".into()))
}

fn prompt_account_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> TellerResult<AccountNumber> {
    let line = prompt_required(input, output, "Enter account number: ")?;
    line.parse()
        .map_err(|_| TellerError::Validation(format!("Invalid account number: '{}'", line)))
}

fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> TellerResult<Money> {
    let line = prompt_required(input, output, message)?;
    Money::parse(&line)
        .map_err(|e| TellerError::Validation(format!("Invalid amount: '{}'. {}", line, e)))
}

fn create_account<R: BufRead, W: Write>(
    teller: &TellerService,
    input: &mut R,
    output: &mut W,
) -> TellerResult<()> {
    let holder = prompt_required(input, output, "Enter account holder's name: ")?;
    let account_type = prompt_required(input, output, "Enter account type (Savings/Current): ")?;
    let balance = prompt_amount(input, output, "Enter initial deposit: ")?;

    let account = teller.create(&holder, &account_type, balance)?;

    writeln!(output, "Account created successfully!")?;
    write!(output, "{}", format_account_details(&account))?;
    Ok(())
}

fn deposit<R: BufRead, W: Write>(
    teller: &TellerService,
    input: &mut R,
    output: &mut W,
) -> TellerResult<()> {
    let number = prompt_account_number(input, output)?;
    let account = teller.balance_enquiry(number)?;
    writeln!(output, "Account holder: {}", account.holder)?;
    writeln!(output, "Current balance: {}", account.balance)?;

    let amount = prompt_amount(input, output, "Enter amount to deposit: ")?;
    let new_balance = teller.deposit(number, amount)?;

    writeln!(output, "Deposit successful!")?;
    writeln!(output, "New balance: {}", new_balance)?;
    Ok(())
}

fn withdraw<R: BufRead, W: Write>(
    teller: &TellerService,
    input: &mut R,
    output: &mut W,
) -> TellerResult<()> {
    let number = prompt_account_number(input, output)?;
    let account = teller.balance_enquiry(number)?;
    writeln!(output, "Account holder: {}", account.holder)?;
    writeln!(output, "Current balance: {}", account.balance)?;

    let amount = prompt_amount(input, output, "Enter amount to withdraw: ")?;
    let new_balance = teller.withdraw(number, amount)?;

    writeln!(output, "Withdrawal successful!")?;
    writeln!(output, "New balance: {}", new_balance)?;
    Ok(())
}

fn balance_enquiry<R: BufRead, W: Write>(
    teller: &TellerService,
    input: &mut R,
    output: &mut W,
) -> TellerResult<()> {
    let number = prompt_account_number(input, output)?;
    let account = teller.balance_enquiry(number)?;
    write!(output, "{}", format_account_details(&account))?;
    Ok(())
}

fn display_all<W: Write>(teller: &TellerService, output: &mut W) -> TellerResult<()> {
    let summary = teller.list_all()?;
    write!(output, "{}", format_account_list(&summary))?;
    Ok(())
}

fn calculator<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> TellerResult<()> {
    let op_line = prompt_required(input, output, "Enter operation (+, -, *, /): ")?;
    let op = Operation::parse(&op_line)
        .ok_or_else(|| TellerError::Validation(format!("Unknown operation: '{}'", op_line)))?;

    let a = prompt_number(input, output, "Enter first number: ")?;
    let b = prompt_number(input, output, "Enter second number: ")?;

    let result = op.apply(a, b)?;
    writeln!(output, "Result: {:.2} {} {:.2} = {:.2}", a, op.symbol(), b, result)?;
    Ok(())
}

fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> TellerResult<f64> {
    let line = prompt_required(input, output, message)?;
    line.parse()
        .map_err(|_| TellerError::Validation(format!("Invalid number: '{}'", line)))
}
