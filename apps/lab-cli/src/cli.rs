//! Command-line surface of `solid-lab`.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "solid-lab", version, about = "Registration, pricing and checkout exercises")]
pub struct Cli {
    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the registration rule chain for one student.
    Register {
        /// Student identification number.
        nim: String,
        /// Requested credit load.
        #[arg(allow_negative_numbers = true)]
        sks: i64,
        /// Prerequisite courses are NOT yet passed.
        #[arg(long)]
        no_prerequisite: bool,
    },
    /// Quote a price after discount and 10% VAT.
    Price {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        /// Discount percentage; clamped to 0..=100.
        #[arg(allow_negative_numbers = true)]
        discount: f64,
    },
    /// Pay for an order and notify the customer.
    Checkout {
        customer: String,
        /// Order total in minor units.
        #[arg(allow_negative_numbers = true)]
        total: i64,
        /// credit_card, bank_transfer or qris.
        #[arg(long, default_value = "credit_card")]
        method: String,
    },
    /// Replay the built-in scenarios.
    Demo,
}
