//! Homomorphic Addition Demo
//!
//! Encrypts two integers under one key pair over secp256k1, adds the
//! ciphertexts, and prints every intermediate value.
//!
//! Run with: cargo run --release -- 7 15
//!
//! The program will:
//! 1. Create a key pair (fresh, or from --private-key)
//! 2. Encrypt both messages with independent ephemeral scalars
//! 3. Add the two ciphertexts
//! 4. Decrypt each ciphertext and sum the plaintexts
//! 5. Decrypt the summed ciphertext and compare

use clap::Parser;
use ec_elgamal::demo::{self, DemoReport};
use ec_elgamal::{BigInt, BigUint, ElGamal, KeyPair};
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "ec_elgamal", version, about = "ElGamal-style homomorphic addition over secp256k1")]
struct Cli {
    /// First plaintext integer
    #[arg(allow_negative_numbers = true)]
    message1: BigInt,

    /// Second plaintext integer
    #[arg(allow_negative_numbers = true)]
    message2: BigInt,

    /// Use this private scalar (decimal, in [1, N)) instead of a fresh one
    #[arg(long, value_name = "D")]
    private_key: Option<BigUint>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let scheme = ElGamal::secp256k1();
    let keys = match &cli.private_key {
        Some(d) => KeyPair::from_private(scheme.curve(), d.clone())?,
        None => scheme.generate_key_pair()?,
    };

    let report = demo::run(&scheme, &keys, &cli.message1, &cli.message2)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &DemoReport) {
    print_box("EC ElGamal - Homomorphic Addition");

    println!("Message 1: {}", report.message1);
    println!("Message 2: {}", report.message2);
    println!();

    println!("Ciphertext 1:");
    println!("  C1 = {}", report.ciphertext1.c1());
    println!("  C2 = {}", report.ciphertext1.c2());
    println!("Ciphertext 2:");
    println!("  C1 = {}", report.ciphertext2.c1());
    println!("  C2 = {}", report.ciphertext2.c2());
    println!("Ciphertext sum:");
    println!("  C1 = {}", report.ciphertext_sum.c1());
    println!("  C2 = {}", report.ciphertext_sum.c2());
    println!();

    println!("Decrypted 1: {}", report.decrypted1);
    println!("Decrypted 2: {}", report.decrypted2);
    println!("Homomorphic sum (decrypted 1 + decrypted 2): {}", report.homomorphic_sum);
    println!("Decrypted ciphertext sum: {}", report.decrypted_ciphertext_sum);

    if report.matches_plaintext_sum() {
        println!("  ✓ ciphertext sum matches plaintext sum");
    } else {
        println!("  ✗ ciphertext sum differs from plaintext sum");
    }
}

/// Print text in a box sized to fit
fn print_box(text: &str) {
    let total_width = text.chars().count() + 4;

    println!("\n╔{}╗", "═".repeat(total_width));
    println!("║  {}  ║", text);
    println!("╚{}╝\n", "═".repeat(total_width));
}
