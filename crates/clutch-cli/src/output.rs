use clutch_catalog::{Comparison, PriceDifference, Side, VehicleRecord};
use clutch_finance::{Installment, LoanQuote};
use colored::Colorize;

/// Whole-rupee price in three-digit groups, e.g. `₹ 185,000`.
pub fn format_price(amount: f64) -> String {
    format!("₹ {}", group_thousands(amount.round()))
}

/// Amount with two decimals and thousands separators.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let frac = (cents - whole * 100.0).abs() as u64;
    format!("₹ {}.{frac:02}", group_thousands(whole))
}

fn group_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn print_summary(record: &VehicleRecord) {
    println!(
        "{:<34} {:<28} {:<16} {:<10} {:>12}  {}",
        record.id.to_string().dimmed(),
        record.name.bold(),
        record.brand,
        record.category.cyan(),
        format_price(record.price),
        record.ratings.overall_label().yellow(),
    );
}

pub fn print_details(record: &VehicleRecord) {
    println!("{} - {}", record.name.bold(), format_price(record.price).green());
    println!("{} · {} · {}", record.brand, record.category.cyan(), record.id.to_string().dimmed());
    if !record.description.is_empty() {
        println!("\n{}", record.description);
    }

    println!("\n{}", "Gallery".bold());
    for image in record.gallery_or_image() {
        println!("  {image}");
    }

    println!("\n{}", "Specifications".bold());
    for (key, value) in record.specs.rows() {
        println!("  {:<14} {value}", key.label());
    }

    if !record.pros.is_empty() || !record.cons.is_empty() {
        println!("\n{}", "Pros".bold());
        for pro in &record.pros {
            println!("  {} {pro}", "+".green());
        }
        println!("{}", "Cons".bold());
        for con in &record.cons {
            println!("  {} {con}", "-".red());
        }
    }

    if !record.expert_review.is_empty() {
        println!("\n{}\n{}", "Expert Review".bold(), record.expert_review);
    }

    let ratings = &record.ratings;
    println!("\n{}", "Ratings".bold());
    println!("  {:<12} {}/5", "performance", ratings.performance);
    println!("  {:<12} {}/5", "comfort", ratings.comfort);
    println!("  {:<12} {}/5", "mileage", ratings.mileage);
    println!("  {:<12} {}/5", "overall", ratings.overall_label().yellow().bold());

    println!("\n{}", "Reviews".bold());
    if record.reviews.is_empty() {
        println!("  No reviews yet. Be the first to review!");
    }
    for review in &record.reviews {
        println!(
            "  {} {} {}  {}",
            review.user.bold(),
            review.stars().yellow(),
            review.rating,
            review.date.to_string().dimmed(),
        );
        if !review.comment.is_empty() {
            println!("    {}", review.comment);
        }
    }
}

pub fn print_comparison(report: &Comparison) {
    let mark = |side: Side, winner: Option<Side>, text: String| {
        if winner == Some(side) {
            text.green().bold().to_string()
        } else {
            text
        }
    };

    println!(
        "{:<16} {:<28} {:<28}",
        "Specification".bold(),
        report.left.name.bold(),
        report.right.name.bold()
    );
    for row in &report.specs {
        println!("{:<16} {:<28} {:<28}", row.key.label(), row.left, row.right);
    }
    println!(
        "{:<16} {:<28} {:<28}",
        "Price",
        mark(Side::Left, report.cheaper, format_price(report.left.price)),
        mark(Side::Right, report.cheaper, format_price(report.right.price)),
    );
    println!(
        "{:<16} {:<28} {:<28}",
        "Overall rating",
        mark(Side::Left, report.better_rated, report.left.ratings.overall_label()),
        mark(Side::Right, report.better_rated, report.right.ratings.overall_label()),
    );
    println!("\n{}", price_difference_line(report));
}

pub fn price_difference_line(report: &Comparison) -> String {
    match report.price_difference {
        PriceDifference::LeftDearer(amount) => format!(
            "{} is {} more expensive",
            report.left.name,
            format_price(amount)
        ),
        PriceDifference::RightDearer(amount) => format!(
            "{} is {} more expensive",
            report.right.name,
            format_price(amount)
        ),
        PriceDifference::Same => "Same price".to_string(),
    }
}

pub fn print_quote(quote: &LoanQuote) {
    println!("Monthly EMI: {}", format_amount(quote.emi).green().bold());
    println!(
        "  {} over {} months at {}% p.a.",
        format_amount(quote.principal),
        quote.months,
        quote.annual_percent
    );
    println!("  Total payable:  {}", format_amount(quote.total_payable));
    println!("  Total interest: {}", format_amount(quote.total_interest));
}

pub fn print_schedule(schedule: &[Installment]) {
    println!(
        "\n{:>5} {:>16} {:>16} {:>16} {:>18}",
        "Month", "Payment", "Interest", "Principal", "Balance"
    );
    for row in schedule {
        println!(
            "{:>5} {:>16} {:>16} {:>16} {:>18}",
            row.month,
            format_amount(row.payment),
            format_amount(row.interest),
            format_amount(row.principal),
            format_amount(row.balance),
        );
    }
}
