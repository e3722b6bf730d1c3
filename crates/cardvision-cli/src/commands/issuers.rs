//! Issuers command - list the supported card issuers.

use console::style;

use cardvision_core::statement::rules::ISSUER_SIGNATURES;

const DATA_POINTS: [&str; 7] = [
    "Card last 4 digits",
    "Statement date and billing period",
    "Total amount due",
    "Minimum amount due",
    "Payment due date",
    "Sample transaction and transaction count",
    "Customer name and ID (when printed)",
];

pub async fn run() -> anyhow::Result<()> {
    println!("{}", style("Supported issuers:").bold());
    for (issuer, signatures) in ISSUER_SIGNATURES.iter() {
        println!("  {} {}", style("•").cyan(), issuer);
        println!("      matches: {}", signatures.join(", "));
    }

    println!();
    println!("{}", style("Extracted data points:").bold());
    for point in DATA_POINTS {
        println!("  {} {}", style("•").cyan(), point);
    }

    Ok(())
}
