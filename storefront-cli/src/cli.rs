use clap::{Args, Parser, Subcommand, ValueEnum};
use order_service::PaymentMethod;
use std::path::PathBuf;

/// MediCart pharmacy storefront
#[derive(Parser, Debug)]
#[command(name = "medicart")]
#[command(version, about = "Browse medicines, check symptoms and order from the MediCart pharmacy")]
pub struct Cli {
    /// Configuration file (YAML or TOML)
    #[arg(short, long, global = true, env = "MEDICART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Landing page: categories, cart summary and latest order
    Home,

    /// List medicines, optionally filtered
    Medicines {
        /// Match against name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category, e.g. "Pain Relief"
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one medicine in full
    Medicine {
        id: String,
    },

    /// Describe symptoms and get a diagnosis
    Diagnose(DiagnoseArgs),

    /// Inspect or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartCommand>,
    },

    /// Place an order for everything in the cart
    Checkout {
        /// Delivery address; defaults to the profile address
        #[arg(short, long)]
        address: Option<String>,

        #[arg(short, long, value_enum, default_value_t = PaymentArg::Card)]
        payment: PaymentArg,
    },

    /// Show or edit the user profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileCommand>,
    },

    /// List placed orders
    Orders,
}

#[derive(Args, Debug, Default)]
pub struct DiagnoseArgs {
    /// Affected body part (Head, Chest, Abdomen, Limbs, General); inferred
    /// from the symptoms when omitted
    #[arg(short, long = "body-part")]
    pub body_parts: Vec<String>,

    /// Symptom label, repeatable
    #[arg(short, long = "symptom")]
    pub symptoms: Vec<String>,

    /// e.g. "1-3 days" or "More than a week"
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Mild, Moderate or Severe
    #[arg(long)]
    pub severity: Option<String>,

    #[arg(short, long)]
    pub notes: Option<String>,

    /// Put one of each recommended medicine in the cart
    #[arg(long)]
    pub add_to_cart: bool,
}

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    Show,
    Add {
        id: String,
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },
    Remove {
        id: String,
    },
    /// Set a line's quantity; zero or less removes it
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    Show,
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentArg {
    Card,
    Cod,
}

impl From<PaymentArg> for PaymentMethod {
    fn from(arg: PaymentArg) -> Self {
        match arg {
            PaymentArg::Card => PaymentMethod::Card,
            PaymentArg::Cod => PaymentMethod::CashOnDelivery,
        }
    }
}
