//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::Account;
use crate::services::LedgerSummary;

/// Format the full ledger as a table with a total row
pub fn format_account_list(summary: &LedgerSummary) -> String {
    if summary.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let holder_width = summary
        .accounts
        .iter()
        .map(|a| a.holder.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let type_width = summary
        .accounts
        .iter()
        .map(|a| a.account_type.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<holder_width$}  {:<type_width$}  {:>12}\n",
        "Number",
        "Holder",
        "Type",
        "Balance",
        holder_width = holder_width,
        type_width = type_width,
    ));

    output.push_str(&format!(
        "{:-<10}  {:-<holder_width$}  {:-<type_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        holder_width = holder_width,
        type_width = type_width,
    ));

    for account in &summary.accounts {
        output.push_str(&format!(
            "{:<10}  {:<holder_width$}  {:<type_width$}  {:>12}\n",
            account.number.to_string(),
            account.holder,
            account.account_type,
            account.balance.to_string(),
            holder_width = holder_width,
            type_width = type_width,
        ));
    }

    output.push_str(&format!(
        "{:-<10}  {:-<holder_width$}  {:-<type_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        holder_width = holder_width,
        type_width = type_width,
    ));

    output.push_str(&format!(
        "Total accounts: {}\nTotal balance: {}\n",
        summary.accounts.len(),
        summary.total_balance
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();
    output.push_str("Account Details:\n");
    output.push_str(&format!("  Number:  {}\n", account.number));
    output.push_str(&format!("  Holder:  {}\n", account.holder));
    output.push_str(&format!("  Type:    {}\n", account.account_type));
    output.push_str(&format!("  Balance: {}\n", account.balance));
    output.push_str(&format!(
        "  Opened:  {}\n",
        account.opened_at.format("%Y-%m-%d")
    ));
    output
}
