use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;
use give_cli::api::models::{Campaign, Donation};

pub fn display_campaigns(campaigns: &[Campaign], max_rows: usize) {
    if campaigns.is_empty() {
        println!("{}", "No campaigns found.".yellow());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let headers: Vec<Cell> = ["Id", "Title", "Category", "Goal", "Raised", "Funded"]
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(headers);

    for campaign in campaigns.iter().take(max_rows) {
        table.add_row(vec![
            campaign.id.clone(),
            campaign.title.clone(),
            campaign.category.clone().unwrap_or_default(),
            format!("{:.2}", campaign.goal_amount),
            format!("{:.2}", campaign.raised_amount),
            format!("{:.0}%", campaign.percent_funded()),
        ]);
    }

    println!("{table}");
    println!(
        "\n{}",
        format!("{} campaigns", campaigns.len()).green()
    );
    if campaigns.len() > max_rows {
        println!(
            "{}",
            format!("(showing first {max_rows}, raise behavior.max_display_rows to see more)")
                .yellow()
        );
    }
}

pub fn display_campaign_detail(campaign: &Campaign, share_base: &str) {
    println!("{}", campaign.title.clone().bold());
    if let Some(category) = &campaign.category {
        println!("Category: {category}");
    }
    println!(
        "Raised {:.2} of {:.2} ({:.0}%)",
        campaign.raised_amount,
        campaign.goal_amount,
        campaign.percent_funded()
    );
    if !campaign.is_active {
        println!("{}", "This campaign is closed.".yellow());
    }
    if let Some(description) = &campaign.description {
        println!("\n{description}");
    }
    println!("\nShare: {}", campaign.share_url(share_base).blue());
}

pub fn display_donations(donations: &[Donation]) {
    if donations.is_empty() {
        println!("{}", "No donations yet.".yellow());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let headers: Vec<Cell> = ["Date", "Campaign", "Amount", "Status"]
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(headers);

    let mut total = 0.0;
    for donation in donations {
        total += donation.amount;
        table.add_row(vec![
            donation
                .created_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            donation
                .campaign
                .as_ref()
                .map(|c| c.title.clone())
                .unwrap_or_default(),
            format!("{:.2}", donation.amount),
            donation.status.clone().unwrap_or_default(),
        ]);
    }

    println!("{table}");
    println!(
        "\n{}",
        format!("{} donations, {:.2} total", donations.len(), total).green()
    );
}

pub fn export_donations_to_csv(
    donations: &[Donation],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(filename)?;

    wtr.write_record(["id", "date", "campaign", "amount", "status"])?;

    for donation in donations {
        wtr.write_record(&[
            donation.id.clone(),
            donation
                .created_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            donation
                .campaign
                .as_ref()
                .map(|c| c.title.clone())
                .unwrap_or_default(),
            format!("{:.2}", donation.amount),
            donation.status.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
