use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use tracing::warn;

use gatehouse::account::AccountStore;
use gatehouse::cli::{account, Cli};
use gatehouse::config::GatehouseConfig;
use gatehouse::dashboard;
use gatehouse::storage::Storage;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = GatehouseConfig::load_or_default(&cli.config);

    if let Some(command) = cli.command {
        account::handle_command(command, &config);
    } else {
        // No subcommand: interactive client, the menu counterpart of the
        // login/signup forms and dashboard.
        run_client_mode(&config);
    }
}

// --- CLIENT MODE (interactive) ---
fn run_client_mode(config: &GatehouseConfig) {
    println!("\n=== Gatehouse Client ===");

    let storage = match Storage::open(&config.db_path) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("Failed to open storage at '{}': {}", config.db_path, e);
            std::process::exit(1);
        }
    };
    let mut store = match AccountStore::open(storage) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load account store: {}", e);
            std::process::exit(1);
        }
    };

    loop {
        if store.has_active_session() {
            if !dashboard_menu(&mut store, config) {
                break;
            }
        } else if !login_menu(&mut store) {
            break;
        }
    }
    println!("\nSession ended. Exiting.");
}

/// Login/signup menu. Returns false when the user wants to exit.
fn login_menu(store: &mut AccountStore) -> bool {
    println!("\n1. Login (Existing User)");
    println!("2. Signup (New User)");
    println!("3. Exit");

    match prompt("Select: ").as_str() {
        "1" => {
            let username = prompt("Username: ");
            let password = prompt("Password: ");
            match store.login(&username, &password) {
                Ok(()) => println!("Login successful!"),
                Err(e) => println!("{}", e),
            }
            true
        }
        "2" => {
            let username = prompt("Choose a username: ");
            let password = prompt("Choose a password: ");
            match store.register(&username, &password) {
                Ok(()) => {
                    println!("User registered successfully!");
                    // The original flow drops new users straight into the
                    // dashboard, so log them in with what they just typed.
                    if let Err(e) = store.login(&username, &password) {
                        warn!("Auto-login after signup failed: {}", e);
                    }
                }
                Err(e) => println!("{}", e),
            }
            true
        }
        "3" => false,
        _ => {
            println!("Invalid option.");
            true
        }
    }
}

/// Dashboard menu for the active session. Returns false on exit.
fn dashboard_menu(store: &mut AccountStore, config: &GatehouseConfig) -> bool {
    if let Some(account) = store.current_account() {
        print!("\n{}", dashboard::render(account, &config.dashboard_template));
    }
    println!("\n1. Record Game Entry");
    println!("2. Logout");
    println!("3. Exit");

    match prompt("Select: ").as_str() {
        "1" => {
            let raw = prompt("Entry (JSON): ");
            match serde_json::from_str(&raw) {
                Ok(value) => {
                    if let Err(e) = store.append_game_data(value) {
                        println!("Failed to record entry: {}", e);
                    }
                }
                Err(e) => println!("Invalid JSON entry: {}", e),
            }
            true
        }
        "2" => {
            match store.logout() {
                Ok(()) => println!("Logged out."),
                Err(e) => println!("{}", e),
            }
            true
        }
        "3" => false,
        _ => {
            println!("Invalid option.");
            true
        }
    }
}

fn prompt(label: &str) -> String {
    print!("{}", label);
    let _ = io::stdout().flush();
    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
    input.trim().to_string()
}
