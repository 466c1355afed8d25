use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "clutch",
    about = "BikeClutch: motorcycle catalog, comparisons and EMI quotes",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the catalog (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List bikes, optionally filtered
    List(ListArgs),
    /// Show one bike in full
    Show(ShowArgs),
    /// List the categories present in the catalog
    Categories,
    /// Add a bike to the catalog
    Add(AddArgs),
    /// Update fields of an existing bike
    Update(UpdateArgs),
    /// Delete a bike
    Delete(DeleteArgs),
    /// Submit a review for a bike
    Review(ReviewArgs),
    /// Compare two bikes side by side
    Compare(CompareArgs),
    /// Manage the comparison selection
    Select(SelectArgs),
    /// Calculate the monthly installment of a loan
    Emi(EmiArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Match against name or brand (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
    /// Exact category, or "all"
    #[arg(short, long)]
    pub category: Option<String>,
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct ShowArgs {
    pub id: String,
}

/// Optional record fields shared by `add` and `update`.
#[derive(Args, Default)]
pub struct DetailArgs {
    #[arg(long)]
    pub image: Option<String>,
    /// Gallery image; repeat for several
    #[arg(long = "gallery")]
    pub gallery: Vec<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub expert_review: Option<String>,
    /// Repeat for several
    #[arg(long = "pro")]
    pub pros: Vec<String>,
    /// Repeat for several
    #[arg(long = "con")]
    pub cons: Vec<String>,

    #[arg(long)]
    pub engine: Option<String>,
    #[arg(long)]
    pub displacement: Option<String>,
    #[arg(long)]
    pub power: Option<String>,
    #[arg(long)]
    pub torque: Option<String>,
    #[arg(long)]
    pub mileage: Option<String>,
    #[arg(long)]
    pub fuel_capacity: Option<String>,
    #[arg(long)]
    pub kerb_weight: Option<String>,

    #[arg(long)]
    pub performance: Option<f64>,
    #[arg(long)]
    pub comfort: Option<f64>,
    #[arg(long)]
    pub mileage_rating: Option<f64>,
    /// Overall rating; ignored once the bike has reviews
    #[arg(long)]
    pub overall: Option<f64>,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub brand: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub price: f64,
    #[command(flatten)]
    pub details: DetailArgs,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[command(flatten)]
    pub details: DetailArgs,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub id: String,
}

#[derive(Args)]
pub struct ReviewArgs {
    pub id: String,
    #[arg(short, long)]
    pub user: String,
    #[arg(short, long)]
    pub rating: f64,
    #[arg(short, long, default_value = "")]
    pub comment: String,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Left bike; defaults to the first selected bike
    pub left: Option<String>,
    /// Right bike; defaults to the second selected bike
    pub right: Option<String>,
}

#[derive(Args)]
pub struct SelectArgs {
    #[command(subcommand)]
    pub action: Option<SelectAction>,
}

#[derive(Subcommand)]
pub enum SelectAction {
    /// Add a bike to the comparison selection
    Add { id: String },
    /// Show the current selection
    Show,
    /// Empty the selection
    Clear,
}

#[derive(Args)]
pub struct EmiArgs {
    /// Loan amount; defaults to the price of --bike
    #[arg(short, long)]
    pub principal: Option<f64>,
    /// Take the loan amount from this bike's price
    #[arg(short, long)]
    pub bike: Option<String>,
    /// Annual interest rate in percent
    #[arg(short, long)]
    pub rate: f64,
    /// Loan tenure in months
    #[arg(short, long)]
    pub months: u32,
    /// Print the month-by-month schedule
    #[arg(long)]
    pub schedule: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_review() {
        let cli = Cli::try_parse_from([
            "clutch", "review", "b1", "--user", "Asha", "--rating", "4.5", "--comment", "Nice",
        ])
        .unwrap();
        match cli.command {
            Command::Review(args) => {
                assert_eq!(args.id, "b1");
                assert_eq!(args.rating, 4.5);
            }
            _ => panic!("expected review"),
        }
    }

    #[test]
    fn parses_repeated_pros() {
        let cli = Cli::try_parse_from([
            "clutch", "add", "--name", "NS200", "--brand", "Bajaj", "--category", "Naked",
            "--price", "150000", "--pro", "Cheap", "--pro", "Quick",
        ])
        .unwrap();
        match cli.command {
            Command::Add(args) => assert_eq!(args.details.pros, vec!["Cheap", "Quick"]),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["clutch", "list", "--format", "json", "--data-dir", "/tmp/x"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn emi_requires_rate_and_months() {
        assert!(Cli::try_parse_from(["clutch", "emi", "--principal", "100000"]).is_err());
    }
}
