use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use pwned_check::{BreachClient, Credential, Error, check_list, generate};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwned-word")]
#[command(about = "Check passwords against the Have I Been Pwned breach corpus")]
struct Args {
    /// Password to be checked
    #[arg(short = 't', long)]
    text: Option<String>,

    /// File to be checked, one password per line
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Generate a password of the given length and check it
    #[arg(short = 'g', long = "gen", value_name = "LENGTH")]
    gen_length: Option<i64>,

    /// Echo cleartext passwords in the output instead of positional indices
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // No action flags: print usage and perform no check.
    if args.text.is_none() && args.file.is_none() && args.gen_length.is_none() {
        Args::command().print_long_help()?;
        return Ok(());
    }

    let client = BreachClient::new();

    if let Some(text) = &args.text {
        let pwned = client.check_status(&Credential::from(text.as_str()))?;
        if args.verbose {
            println!("Has password {} been pwned? {}", text, pwned);
        } else {
            println!("Has your password been pwned? {}", pwned);
        }
    }

    if let Some(path) = &args.file {
        let results = check_list(&client, path)?;
        if args.verbose {
            for (credential, status) in results.by_credential() {
                println!("Has password {} been pwned? {}", credential, status);
            }
        } else {
            for (position, (_, status)) in results.iter().enumerate() {
                println!("Has password {} in list been pwned? {}", position + 1, status);
            }
        }
    }

    if let Some(length) = args.gen_length {
        let password = generate_unpwned(&client, length)?;
        println!("The generated password is {} and it has not been pwned yet.", password);
    }

    Ok(())
}

/// Generates passwords until one comes back clean. A lookup failure stops
/// the loop and propagates; only a confirmed-pwned result triggers a retry.
fn generate_unpwned(client: &BreachClient, length: i64) -> Result<String, Error> {
    loop {
        let candidate = generate(length)?;
        if !client.check_status(&Credential::from(candidate.as_str()))? {
            return Ok(candidate);
        }
        println!("Generated password {} is already pwned. Trying again.", candidate);
    }
}
