// bin/sign_challenge.rs

use clap::{value_parser, Arg, Command};
use std::path::Path;
use std::process;

use zt_sign::{sign_challenge, SignError, DEFAULT_KEY_PATH};

// Usage text stays byte-compatible with the sign_challenge.py script
// this tool replaces, so existing runbooks keep working.
fn print_usage() {
    println!("Usage: python3 sign_challenge.py '<base64-challenge>'");
    println!("\nExample:");
    println!("  python3 sign_challenge.py 'EuRj1+vOQTBoKtxzCvOlo+wP+QZxI+V+2SWgKteKpb4='");
}

fn run(challenge: Option<&String>) -> Result<(), SignError> {
    let challenge = challenge.ok_or(SignError::Usage)?;
    let signature = sign_challenge(challenge, Path::new(DEFAULT_KEY_PATH))?;
    println!("{}", signature);
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = Command::new("sign_challenge")
        .version("0.1.0")
        .about("Sign a Zero Trust authentication challenge with an Ed25519 key")
        .arg(
            Arg::new("challenge")
                .value_name("BASE64")
                .help("Base64-encoded challenge to sign")
                .value_parser(value_parser!(String)),
        )
        .get_matches();

    match run(matches.get_one::<String>("challenge")) {
        Ok(()) => {}
        Err(SignError::Usage) => {
            print_usage();
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
