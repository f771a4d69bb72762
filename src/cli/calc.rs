//! Calculator CLI command

use clap::Args;

use crate::calc::Operation;
use crate::error::{TellerError, TellerResult};

/// Arguments for the `calc` subcommand
#[derive(Args)]
pub struct CalcArgs {
    /// Operation: add, sub, mul, div (or +, -, *, /)
    pub operation: String,
    /// First operand
    pub a: f64,
    /// Second operand
    pub b: f64,
}

/// Handle a calculator command
pub fn handle_calc_command(args: CalcArgs) -> TellerResult<()> {
    let op = Operation::parse(&args.operation).ok_or_else(|| {
        TellerError::Validation(format!(
            "Unknown operation: '{}'. Valid operations: add, sub, mul, div",
            args.operation
        ))
    })?;

    let result = op.apply(args.a, args.b)?;
    println!(
        "Result: {:.2} {} {:.2} = {:.2}",
        args.a,
        op.symbol(),
        args.b,
        result
    );

    Ok(())
}
