use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use facturo_client::ApiClient;
use facturo_client::dashboard::{DateRange, ReportFilters, ReportPeriod};

use super::format_amount;

#[derive(Args)]
pub struct MetricsArgs {
    /// Start of the date range (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End of the date range (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

#[derive(Args)]
pub struct ReportsArgs {
    #[arg(long, value_enum, default_value_t = Period::Monthly)]
    pub period: Period,

    #[arg(long)]
    pub from: Option<NaiveDate>,

    #[arg(long)]
    pub to: Option<NaiveDate>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl From<Period> for ReportPeriod {
    fn from(period: Period) -> Self {
        match period {
            Period::Daily => ReportPeriod::Daily,
            Period::Weekly => ReportPeriod::Weekly,
            Period::Monthly => ReportPeriod::Monthly,
        }
    }
}

pub async fn metrics(client: &ApiClient, args: MetricsArgs) -> Result<()> {
    let metrics = client
        .metrics(DateRange {
            start_date: args.from,
            end_date: args.to,
        })
        .await?;

    println!("total invoiced:  {}", format_amount(metrics.total_invoiced));
    println!("invoices:        {}", metrics.total_invoices);
    println!("average value:   {}", format_amount(metrics.average_invoice_value));
    if !metrics.top_products.is_empty() {
        println!("top products:");
        for product in &metrics.top_products {
            println!(
                "  #{:<6} {:<30} {:>6} sold  {}",
                product.id,
                product.name,
                product.quantity,
                format_amount(product.total),
            );
        }
    }
    Ok(())
}

pub async fn reports(client: &ApiClient, args: ReportsArgs) -> Result<()> {
    let report = client
        .reports(ReportFilters {
            period: args.period.into(),
            start_date: args.from,
            end_date: args.to,
        })
        .await?;

    println!(
        "report {} to {} ({:?}), {} rows",
        report.start_date,
        report.end_date,
        report.period,
        report.data.len()
    );
    for row in &report.data {
        println!(
            "  {}  {:>4} invoices  {:>4} products  {:>12}",
            row.date,
            row.invoices,
            row.products,
            format_amount(row.total),
        );
    }
    Ok(())
}
