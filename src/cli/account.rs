use std::sync::Arc;

use crate::account::AccountStore;
use crate::config::GatehouseConfig;
use crate::dashboard;
use crate::error::GatehouseError;
use crate::storage::Storage;

use super::Commands;

fn open_store(config: &GatehouseConfig) -> Result<AccountStore, GatehouseError> {
    let storage = Arc::new(Storage::open(&config.db_path)?);
    AccountStore::open(storage)
}

pub fn handle_command(cmd: Commands, config: &GatehouseConfig) {
    let mut store = match open_store(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to open account store: {}", e);
            std::process::exit(1);
        }
    };

    match cmd {
        Commands::Register { username, password } => {
            match store.register(&username, &password) {
                Ok(()) => println!("User registered successfully!"),
                Err(e) => println!("{}", e),
            }
        }
        Commands::Login { username, password } => match store.login(&username, &password) {
            Ok(()) => println!("Login successful!"),
            Err(e) => println!("{}", e),
        },
        Commands::Logout => match store.logout() {
            Ok(()) => println!("Logged out."),
            Err(e) => println!("{}", e),
        },
        Commands::Status => match store.current_account() {
            Some(account) => print!("{}", dashboard::render(account, &config.dashboard_template)),
            None => println!("Not logged in."),
        },
        Commands::Record { entry } => {
            if !store.has_active_session() {
                println!("Not logged in.");
                return;
            }
            match serde_json::from_str(&entry) {
                Ok(value) => match store.append_game_data(value) {
                    Ok(()) => println!("Entry recorded."),
                    Err(e) => println!("{}", e),
                },
                Err(e) => println!("Invalid JSON entry: {}", e),
            }
        }
        Commands::List => {
            for name in store.account_names() {
                println!("{}", name);
            }
        }
    }
}
