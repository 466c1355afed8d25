use anyhow::{bail, Context as _};
use clutch_catalog::{
    featured, BikeId, Catalog, ComparisonSelection, NewRecord, NewReview, Ratings, RecordPatch,
    RecordQuery, SelectionOutcome, SpecKey, Specs,
};
use clutch_finance::LoanQuote;
use clutch_store::FileKvStore;
use clutch_types::ratings::validate_rating;
use colored::Colorize;
use serde::Serialize;

use crate::cli::*;
use crate::config::CliConfig;
use crate::output;

/// JSON answer of `delete`.
#[derive(Serialize)]
struct DeleteReport<'a> {
    id: &'a BikeId,
    deleted: bool,
}

/// JSON answer of the `select` commands.
#[derive(Serialize)]
struct SelectionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<SelectionOutcome>,
    selection: Vec<BikeId>,
}

struct Context {
    catalog: Catalog<FileKvStore>,
    selection: ComparisonSelection<FileKvStore>,
    format: OutputFormat,
}

impl Context {
    fn open(cli: &Cli) -> anyhow::Result<Self> {
        let config = CliConfig::load(cli.config.as_deref(), cli.data_dir.clone())?;
        let store = FileKvStore::open(&config.data_dir)
            .with_context(|| format!("opening data dir {}", config.data_dir.display()))?;
        let session = FileKvStore::open(config.session_dir())
            .with_context(|| format!("opening session dir {}", config.session_dir().display()))?;
        let selection = ComparisonSelection::with_key(session, config.catalog.selection_key.clone());
        Ok(Self {
            catalog: Catalog::with_config(store, config.catalog),
            selection,
            format: cli.format,
        })
    }

    fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::open(&cli)?;
    match cli.command {
        Command::List(args) => cmd_list(&ctx, args),
        Command::Show(args) => cmd_show(&ctx, args),
        Command::Categories => cmd_categories(&ctx),
        Command::Add(args) => cmd_add(&ctx, args),
        Command::Update(args) => cmd_update(&ctx, args),
        Command::Delete(args) => cmd_delete(&ctx, args),
        Command::Review(args) => cmd_review(&ctx, args),
        Command::Compare(args) => cmd_compare(&ctx, args),
        Command::Select(args) => cmd_select(&ctx, args),
        Command::Emi(args) => cmd_emi(&ctx, args),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_id(raw: &str) -> anyhow::Result<BikeId> {
    Ok(BikeId::parse(raw)?)
}

fn validate_price(price: f64) -> anyhow::Result<f64> {
    if !price.is_finite() || price < 0.0 {
        bail!("price must be a non-negative amount, got {price}");
    }
    Ok(price)
}

fn non_empty(items: &[String]) -> Option<Vec<String>> {
    let items: Vec<String> = items
        .iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    (!items.is_empty()).then_some(items)
}

impl DetailArgs {
    fn spec_values(&self) -> [(SpecKey, &Option<String>); 7] {
        [
            (SpecKey::Engine, &self.engine),
            (SpecKey::Displacement, &self.displacement),
            (SpecKey::Power, &self.power),
            (SpecKey::Torque, &self.torque),
            (SpecKey::Mileage, &self.mileage),
            (SpecKey::FuelCapacity, &self.fuel_capacity),
            (SpecKey::KerbWeight, &self.kerb_weight),
        ]
    }

    fn has_specs(&self) -> bool {
        self.spec_values().iter().any(|(_, value)| value.is_some())
    }

    fn has_ratings(&self) -> bool {
        self.performance.is_some()
            || self.comfort.is_some()
            || self.mileage_rating.is_some()
            || self.overall.is_some()
    }

    /// Spec flags laid over `base`.
    fn merge_specs(&self, base: Specs) -> Specs {
        self.spec_values()
            .into_iter()
            .fold(base, |specs, (key, value)| match value {
                Some(value) => specs.with(key, value.clone()),
                None => specs,
            })
    }

    /// Rating flags laid over `base`, each checked to lie within 0-5.
    fn merge_ratings(&self, base: Ratings) -> anyhow::Result<Ratings> {
        let pick = |flag: Option<f64>, current: f64| -> anyhow::Result<f64> {
            Ok(flag.map(validate_rating).transpose()?.unwrap_or(current))
        };
        Ok(Ratings {
            performance: pick(self.performance, base.performance)?,
            comfort: pick(self.comfort, base.comfort)?,
            mileage: pick(self.mileage_rating, base.mileage)?,
            overall: match self.overall {
                Some(overall) => Some(validate_rating(overall)?),
                None => base.overall,
            },
        })
    }
}

fn cmd_list(ctx: &Context, args: ListArgs) -> anyhow::Result<()> {
    let query = RecordQuery {
        text: args.search,
        category: args.category,
    };
    let records = ctx.catalog.search(&query);
    let records = match args.limit {
        Some(n) => featured(&records, n),
        None => &records[..],
    };

    if ctx.json() {
        return print_json(records);
    }
    if records.is_empty() {
        println!("No bikes found.");
    }
    for record in records {
        output::print_summary(record);
    }
    Ok(())
}

fn cmd_show(ctx: &Context, args: ShowArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    let Some(record) = ctx.catalog.get_by_id(&id) else {
        bail!("bike not found: {id}");
    };
    if ctx.json() {
        return print_json(&record);
    }
    output::print_details(&record);
    Ok(())
}

fn cmd_categories(ctx: &Context) -> anyhow::Result<()> {
    let categories = ctx.catalog.categories();
    if ctx.json() {
        return print_json(&categories);
    }
    for category in categories {
        println!("{}", category.cyan());
    }
    Ok(())
}

fn cmd_add(ctx: &Context, args: AddArgs) -> anyhow::Result<()> {
    let details = &args.details;
    let image = details.image.clone().unwrap_or_default();
    let mut record = NewRecord::new(
        args.name,
        args.brand,
        args.category,
        validate_price(args.price)?,
        image,
    );
    record.gallery = non_empty(&details.gallery);
    record.description = details.description.clone().unwrap_or_default();
    record.expert_review = details.expert_review.clone().unwrap_or_default();
    record.pros = non_empty(&details.pros).unwrap_or_default();
    record.cons = non_empty(&details.cons).unwrap_or_default();
    record.specs = details.merge_specs(Specs::default());
    record.ratings = details.merge_ratings(Ratings::default())?;

    let stored = ctx.catalog.add(record);
    if ctx.json() {
        return print_json(&stored);
    }
    println!("{} Added {} as {}", "✓".green().bold(), stored.name.bold(), stored.id.to_string().yellow());
    Ok(())
}

fn cmd_update(ctx: &Context, args: UpdateArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    let Some(current) = ctx.catalog.get_by_id(&id) else {
        bail!("bike not found: {id}");
    };
    let details = &args.details;

    let mut patch = RecordPatch::new(id.clone());
    patch.name = args.name;
    patch.brand = args.brand;
    patch.category = args.category;
    patch.price = args.price.map(validate_price).transpose()?;
    patch.image = details.image.clone();
    patch.gallery = non_empty(&details.gallery);
    patch.description = details.description.clone();
    patch.expert_review = details.expert_review.clone();
    patch.pros = non_empty(&details.pros);
    patch.cons = non_empty(&details.cons);
    if details.has_specs() {
        patch.specs = Some(details.merge_specs(current.specs.clone()));
    }
    if details.has_ratings() {
        patch.ratings = Some(details.merge_ratings(current.ratings.clone())?);
    }

    if patch.is_empty() {
        if ctx.json() {
            return print_json(&current);
        }
        println!("Nothing to update.");
        return Ok(());
    }
    if !ctx.catalog.update(patch) {
        bail!("bike not found: {id}");
    }
    if ctx.json() {
        return print_json(&ctx.catalog.get_by_id(&id));
    }
    println!("{} Updated {}", "✓".green().bold(), id.to_string().yellow());
    Ok(())
}

fn cmd_delete(ctx: &Context, args: DeleteArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    let existed = ctx.catalog.get_by_id(&id).is_some();
    ctx.catalog.delete(&id);
    if ctx.json() {
        return print_json(&DeleteReport {
            id: &id,
            deleted: existed,
        });
    }
    if existed {
        println!("{} Deleted {}", "✓".green().bold(), id.to_string().yellow());
    } else {
        println!("No bike {} to delete.", id.to_string().yellow());
    }
    Ok(())
}

fn cmd_review(ctx: &Context, args: ReviewArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    if args.user.trim().is_empty() {
        bail!("reviewer name must not be empty");
    }
    let rating = validate_rating(args.rating)?;
    if !ctx.catalog.add_review(&id, NewReview::new(args.user, rating, args.comment)) {
        bail!("failed to add review: bike not found: {id}");
    }
    let stored = ctx.catalog.get_by_id(&id);
    if ctx.json() {
        return print_json(&stored);
    }
    let overall = stored
        .map(|record| record.ratings.overall_label())
        .unwrap_or_else(|| "N/A".to_string());
    println!("{} Review added. Overall rating now {}", "✓".green().bold(), overall.yellow().bold());
    Ok(())
}

fn cmd_compare(ctx: &Context, args: CompareArgs) -> anyhow::Result<()> {
    let (first, second) = ctx.selection.slots();
    let left = args.left.as_deref().map(parse_id).transpose()?.or(first);
    let right = args.right.as_deref().map(parse_id).transpose()?.or(second);
    let (Some(left), Some(right)) = (left, right) else {
        bail!("please select two bikes");
    };

    let report = ctx.catalog.compare(&left, &right)?;
    if ctx.json() {
        return print_json(&report);
    }
    output::print_comparison(&report);
    Ok(())
}

fn cmd_select(ctx: &Context, args: SelectArgs) -> anyhow::Result<()> {
    match args.action.unwrap_or(SelectAction::Show) {
        SelectAction::Add { id } => {
            let id = parse_id(&id)?;
            if ctx.catalog.get_by_id(&id).is_none() {
                bail!("bike not found: {id}");
            }
            let outcome = ctx.selection.add(id);
            if ctx.json() {
                return print_json(&SelectionReport {
                    outcome: Some(outcome),
                    selection: ctx.selection.ids(),
                });
            }
            match outcome {
                SelectionOutcome::Added => {
                    println!("{} Bike added to comparison. Run `clutch compare`.", "✓".green())
                }
                SelectionOutcome::AlreadySelected => println!("Bike already in comparison."),
                SelectionOutcome::Full => println!(
                    "{} Comparison list full (max 2). Run `clutch select clear` to change.",
                    "!".yellow().bold()
                ),
            }
        }
        SelectAction::Show => {
            let ids = ctx.selection.ids();
            if ctx.json() {
                return print_json(&SelectionReport {
                    outcome: None,
                    selection: ids,
                });
            }
            if ids.is_empty() {
                println!("No bikes selected for comparison.");
            }
            for id in ids {
                let name = ctx
                    .catalog
                    .get_by_id(&id)
                    .map(|record| record.name)
                    .unwrap_or_else(|| "(deleted)".to_string());
                println!("{} {}", id.to_string().yellow(), name);
            }
        }
        SelectAction::Clear => {
            ctx.selection.clear();
            if ctx.json() {
                return print_json(&SelectionReport {
                    outcome: None,
                    selection: ctx.selection.ids(),
                });
            }
            println!("Comparison selection cleared.");
        }
    }
    Ok(())
}

fn cmd_emi(ctx: &Context, args: EmiArgs) -> anyhow::Result<()> {
    let principal = match (args.principal, args.bike.as_deref()) {
        (Some(principal), _) => principal,
        (None, Some(raw)) => {
            let id = parse_id(raw)?;
            match ctx.catalog.get_by_id(&id) {
                Some(record) => record.price,
                None => bail!("bike not found: {id}"),
            }
        }
        (None, None) => bail!("give a loan amount with --principal or --bike"),
    };

    let quote = LoanQuote::new(principal, args.rate, args.months)?;
    if ctx.json() {
        if args.schedule {
            return print_json(&serde_json::json!({
                "quote": quote,
                "schedule": quote.schedule(),
            }));
        }
        return print_json(&quote);
    }
    output::print_quote(&quote);
    if args.schedule {
        output::print_schedule(&quote.schedule());
    }
    Ok(())
}
