//! Dashboard rendering
//!
//! Presentation only: the logged-in view. An operator can drop a template
//! file next to the binary to customize it; anything going wrong with that
//! file degrades to the built-in layout. Store correctness never depends on
//! this module.

use std::fs;
use tracing::debug;

use crate::account::Account;

/// Render the dashboard for `account`. Tries the template at
/// `template_path` first; any failure falls back to the default view.
pub fn render(account: &Account, template_path: &str) -> String {
    match load_template(template_path) {
        Some(template) => fill_template(&template, account),
        None => default_view(account),
    }
}

fn load_template(path: &str) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            debug!("No dashboard template at '{}' ({}), using default view", path, e);
            None
        }
    }
}

fn fill_template(template: &str, account: &Account) -> String {
    let game_data =
        serde_json::to_string_pretty(&account.game_data).unwrap_or_else(|_| "[]".to_string());
    template
        .replace("{username}", &account.username)
        .replace("{game_data}", &game_data)
}

fn default_view(account: &Account) -> String {
    let game_data =
        serde_json::to_string_pretty(&account.game_data).unwrap_or_else(|_| "[]".to_string());
    format!(
        "=== Dashboard ===\nWelcome, {}!\nYour Game Data:\n{}\n",
        account.username, game_data
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn account_with_data() -> Account {
        let mut account = Account::new("ann", "pw1");
        account.game_data.push(json!({"score": 10}));
        account
    }

    #[test]
    fn test_missing_template_falls_back() {
        let out = render(&account_with_data(), "no_such_template.txt");
        assert!(out.contains("Welcome, ann!"));
        assert!(out.contains("\"score\": 10"));
    }

    #[test]
    fn test_template_substitution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "Hi {{username}}, saves: {{game_data}}").unwrap();

        let out = render(&account_with_data(), path.to_str().unwrap());
        assert!(out.starts_with("Hi ann, saves:"));
        assert!(out.contains("score"));
    }
}
