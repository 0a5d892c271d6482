//! Command-line front end: reads one password, prints the verdict.

use anyhow::Result;
use clap::Parser;
use secrecy::SecretString;

use pwd_score::{Blacklist, BlacklistError, Verdict, default_path, score_password};

#[derive(Parser)]
#[command(name = "pwd-score", version, about = "Offline password strength checker")]
struct Cli {
    /// Password to check; prompts with hidden input when omitted
    password: Option<String>,
}

/// Loads the blacklist from `PWD_BLACKLIST_PATH` or the default asset file.
///
/// A missing default file falls back to the compiled-in list; an explicit
/// env-var path that fails to load is an error, since silently ignoring it
/// would mask a misconfiguration.
fn load_blacklist() -> Result<Blacklist> {
    let path = default_path();
    if std::env::var_os("PWD_BLACKLIST_PATH").is_some() {
        return Ok(Blacklist::from_path(&path)?);
    }
    match Blacklist::from_path(&path) {
        Ok(blacklist) => Ok(blacklist),
        Err(BlacklistError::FileNotFound(_)) => Ok(Blacklist::builtin()),
        Err(e) => Err(e.into()),
    }
}

fn render(verdict: &Verdict) {
    println!("\n🔎 Password Check");
    println!("Score         : {}/10 — {}", verdict.score, verdict.label);
    if let Some(bits) = verdict.entropy_bits {
        println!("Entropy       : ~{bits} bits (approx.)");
    }
    if let Some(length) = verdict.length {
        println!("Length        : {length} chars");
    }
    if !verdict.reasons.is_empty() {
        println!("Notes         : {}", verdict.reasons.join(" | "));
    }
    println!(
        "\nTips: Use 3–4 random words + symbols (e.g., 'river*planet*violet*42'). \
         Avoid personal info and patterns."
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let blacklist = load_blacklist()?;

    let password = match cli.password {
        Some(p) => SecretString::new(p.into()),
        None => {
            let p = rpassword::prompt_password("Enter a password to check (input hidden): ")?;
            SecretString::new(p.into())
        }
    };

    let verdict = score_password(&password, &blacklist);
    render(&verdict);
    Ok(())
}
