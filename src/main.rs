use crossterm::style::Stylize;
use std::sync::Arc;

use give_cli::api::{ApiClient, ApiError};
use give_cli::config::Config;
use give_cli::credentials::{CredentialStore, FileCredentialStore};
use give_cli::filters::{filter_campaigns, CampaignFilter};
use give_cli::validation::is_valid_email;

mod table_display;

fn print_help() {
    println!("{}", "give-cli - Give platform terminal client".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  give-cli <COMMAND> [OPTIONS]");
    println!();
    println!("{}", "Commands:".yellow());
    println!(
        "  {}  - Browse campaigns (--category C, --search TERM, --all)",
        "campaigns".green()
    );
    println!("  {}  - Show one campaign with its share link", "campaign <id>".green());
    println!("  {}  - Log in and store the session token", "login <email>".green());
    println!("  {}  - Forget the stored session token", "logout".green());
    println!("  {}  - Show the logged-in donor", "whoami".green());
    println!(
        "  {}  - List your donations (--export FILE writes CSV)",
        "donations".green()
    );
    println!(
        "  {}  - Request a password reset email",
        "forgot-password <email>".green()
    );
    println!();
    println!("{}", "Options:".yellow());
    println!("  {}  - Initialize configuration with wizard", "--init-config".green());
    println!(
        "  {} - Generate config file with defaults",
        "--generate-config".green()
    );
    println!("  {}          - Show this help", "--help".green());
    println!();
    println!("{}", "Environment:".yellow());
    println!("  GIVE_API_URL - Backend API base URL override");
    println!("  GIVE_WEB_URL - Web frontend base URL override (share links)");
    println!("  RUST_LOG     - Log filter (default: warn)");
}

fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn positional(args: &[String]) -> Option<&String> {
    args.iter().find(|a| !a.starts_with("--"))
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}");
    std::io::Write::flush(&mut std::io::stdout())?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// A 401 means the stored token is stale; drop it and tell the user to log
/// in again. Everything else surfaces as-is.
fn api_failure(err: ApiError, store: &FileCredentialStore) -> anyhow::Error {
    if err.is_unauthorized() {
        let _ = store.clear();
        return anyhow::anyhow!("Session expired or not logged in. Run `give-cli login <email>` first.");
    }
    anyhow::Error::new(err)
}

fn cmd_campaigns(
    client: &ApiClient,
    config: &Config,
    store: &FileCredentialStore,
    args: &[String],
) -> anyhow::Result<()> {
    let filter = CampaignFilter {
        category: flag_value(args, "--category"),
        search: flag_value(args, "--search"),
        include_inactive: config.behavior.show_inactive_campaigns || has_flag(args, "--all"),
    };

    let campaigns = client.list_campaigns().map_err(|e| api_failure(e, store))?;
    let filtered = filter_campaigns(&campaigns, &filter);
    table_display::display_campaigns(&filtered, config.behavior.max_display_rows);
    Ok(())
}

fn cmd_campaign(
    client: &ApiClient,
    config: &Config,
    store: &FileCredentialStore,
    args: &[String],
) -> anyhow::Result<()> {
    let Some(id) = positional(args) else {
        anyhow::bail!("Usage: give-cli campaign <id>");
    };
    let campaign = client.get_campaign(id).map_err(|e| api_failure(e, store))?;
    table_display::display_campaign_detail(&campaign, &config.share.base_url);
    Ok(())
}

fn cmd_login(client: &ApiClient, store: &FileCredentialStore, args: &[String]) -> anyhow::Result<()> {
    let Some(email) = positional(args) else {
        anyhow::bail!("Usage: give-cli login <email>");
    };
    if !is_valid_email(email) {
        anyhow::bail!("'{email}' does not look like an email address");
    }

    let password = prompt("Password: ")?;
    let session = client
        .login(email, &password)
        .map_err(anyhow::Error::new)?;
    store.store(&session.token)?;

    println!("{}", format!("Logged in as {}", session.user.name).green());
    if session.user.is_admin() {
        println!("{}", "(admin account)".yellow());
    }
    Ok(())
}

fn cmd_logout(store: &FileCredentialStore) -> anyhow::Result<()> {
    store.clear()?;
    println!("{}", "Logged out.".green());
    Ok(())
}

fn cmd_whoami(client: &ApiClient, store: &FileCredentialStore) -> anyhow::Result<()> {
    let profile = client.profile().map_err(|e| api_failure(e, store))?;
    println!("{} <{}>", profile.name.clone().bold(), profile.email);
    if profile.is_admin() {
        println!("Role: admin");
    }
    Ok(())
}

fn cmd_donations(
    client: &ApiClient,
    store: &FileCredentialStore,
    args: &[String],
) -> anyhow::Result<()> {
    let donations = client.my_donations().map_err(|e| api_failure(e, store))?;

    if let Some(filename) = flag_value(args, "--export") {
        table_display::export_donations_to_csv(&donations, &filename)
            .map_err(|e| anyhow::anyhow!("CSV export failed: {e}"))?;
        println!(
            "{}",
            format!("Exported {} donations to {filename}", donations.len()).green()
        );
        return Ok(());
    }

    table_display::display_donations(&donations);
    Ok(())
}

fn cmd_forgot_password(client: &ApiClient, args: &[String]) -> anyhow::Result<()> {
    let Some(email) = positional(args) else {
        anyhow::bail!("Usage: give-cli forgot-password <email>");
    };
    if !is_valid_email(email) {
        anyhow::bail!("'{email}' does not look like an email address");
    }

    let reply = client.forgot_password(email).map_err(anyhow::Error::new)?;
    println!("{}", reply.message.green());
    Ok(())
}

fn run() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    give_cli::logging::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_help();
        return Ok(());
    };
    let rest = &args[1..];

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            return Ok(());
        }
        "--init-config" => {
            Config::init_wizard()?;
            return Ok(());
        }
        "--generate-config" => {
            let path = Config::get_config_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, Config::create_default_with_comments())?;
            println!("Config written to {}", path.display());
            return Ok(());
        }
        _ => {}
    }

    let mut config = Config::load()?;
    config.apply_env_overrides();

    let store = Arc::new(FileCredentialStore::new()?);
    let client = ApiClient::new(&config.api.base_url, store.clone());

    match command.as_str() {
        "campaigns" => cmd_campaigns(&client, &config, &store, rest),
        "campaign" => cmd_campaign(&client, &config, &store, rest),
        "login" => cmd_login(&client, &store, rest),
        "logout" => cmd_logout(&store),
        "whoami" => cmd_whoami(&client, &store),
        "donations" => cmd_donations(&client, &store, rest),
        "forgot-password" => cmd_forgot_password(&client, rest),
        other => {
            eprintln!("{}", format!("Unknown command: {other}").red());
            println!();
            print_help();
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", format!("Error: {err:#}").red());
        std::process::exit(1);
    }
}
