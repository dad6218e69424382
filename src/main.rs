//! Minimal CLI over the credential field. Commands are intentionally small
//! and auditable so operators can see exactly how secrets are handled.

use std::env;

use credfield::credential::{CredentialField, DestinationKind};
use credfield::suggest::suggest;

fn print_usage() {
    eprintln!(
        "Commands:\n  hash <plaintext>\n  verify <plaintext> <stored-hash>\n  suggest [syllables]"
    );
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "hash" => {
            if args.len() != 3 {
                return print_usage();
            }
            let mut field = CredentialField::new();
            field.set(Some(args[2].clone()));
            match field.commit() {
                Ok(Some(hash)) => println!("{}", hash.as_str()),
                Ok(None) => eprintln!("nothing to hash"),
                Err(err) => eprintln!("hashing failed: {err}"),
            }
        }
        "verify" => {
            if args.len() != 4 {
                return print_usage();
            }
            let mut field = CredentialField::new();
            field.decode(args[3].clone(), DestinationKind::Storage);
            match field.verify(&args[2]) {
                Ok(true) => println!("match"),
                Ok(false) => println!("no-match"),
                Err(err) => eprintln!("verification failed: {err}"),
            }
        }
        "suggest" => {
            let syllables = if args.len() == 3 {
                args[2].parse().unwrap_or(4)
            } else {
                4
            };
            println!("{}", suggest(syllables, 2));
        }
        _ => print_usage(),
    }
}
