//! Pepper Gate CLI — host-side operations on a gate config
//!
//! Commands:
//!   pepper-gate request       — ask the gate for the secret
//!   pepper-gate diagnose      — show which stage denies a request
//!   pepper-gate attest        — run the environment checks
//!   pepper-gate check-config  — validate key/IV/ciphertext invariants
//!   pepper-gate identity      — build an identity token from signing certificates

use pepper_gate::attest::{AttestationConfig, EnvironmentAttestor};
use pepper_gate::identity::signing_identity;
use pepper_gate::{GateConfig, SecretGate};
use std::env;
use std::process::ExitCode;

fn print_usage() {
    println!(
        r#"
Pepper Gate — gated secret release

Usage: pepper-gate <command> [options]

Commands:
  request       <config.json> <identity-token>   Print the secret, or nothing if denied
  diagnose      <config.json> <identity-token>   Show the stage that denies the request
  attest        [config.json]                    Run root and debugger checks
  check-config  <config.json>                    Validate configuration invariants
  identity      <cert-file>...                   Build the identity token for signing certs

Examples:
  pepper-gate check-config gate.json
  pepper-gate identity signer.der
  pepper-gate request gate.json $(pepper-gate identity signer.der)
"#
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match args[1].as_str() {
        "request" => cmd_request(&args[2..]),
        "diagnose" => cmd_diagnose(&args[2..]),
        "attest" => cmd_attest(&args[2..]),
        "check-config" => cmd_check_config(&args[2..]),
        "identity" => cmd_identity(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: &str) -> Option<GateConfig> {
    match GateConfig::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("  Failed to load {}: {}", path, e);
            None
        }
    }
}

fn cmd_request(args: &[String]) -> ExitCode {
    if args.len() < 2 {
        eprintln!("Usage: pepper-gate request <config.json> <identity-token>");
        return ExitCode::FAILURE;
    }
    let Some(config) = load_config(&args[0]) else {
        return ExitCode::FAILURE;
    };

    let gate = SecretGate::new(config);
    let secret = gate.request_secret(&args[1]);
    if secret.is_empty() {
        return ExitCode::FAILURE;
    }
    println!("{}", secret.as_str());
    ExitCode::SUCCESS
}

fn cmd_diagnose(args: &[String]) -> ExitCode {
    if args.len() < 2 {
        eprintln!("Usage: pepper-gate diagnose <config.json> <identity-token>");
        return ExitCode::FAILURE;
    }
    let Some(config) = load_config(&args[0]) else {
        return ExitCode::FAILURE;
    };

    let gate = SecretGate::new(config);
    match gate.evaluate(&args[1]) {
        Ok(secret) => {
            println!("\n  Outcome: released ({} bytes)", secret.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("\n  Outcome: denied");
            println!("  Stage:   {}", e.stage());
            println!("  Reason:  {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_attest(args: &[String]) -> ExitCode {
    let attestation = match args.first() {
        Some(path) => match load_config(path) {
            Some(config) => config.attestation.clone(),
            None => return ExitCode::FAILURE,
        },
        None => AttestationConfig::default(),
    };

    let report = EnvironmentAttestor::host(attestation).attest();
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("  Failed to render report: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if report.is_compromised() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn cmd_check_config(args: &[String]) -> ExitCode {
    let Some(path) = args.first() else {
        eprintln!("Usage: pepper-gate check-config <config.json>");
        return ExitCode::FAILURE;
    };
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    match config.validate() {
        Ok(()) => {
            println!("\n  {} is valid", path);
            println!("  Ciphertext: {} bytes", config.ciphertext.len());
            println!(
                "  Root indicators: {}",
                config.attestation.root_indicators.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\n  {} is invalid: {}", path, e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_identity(args: &[String]) -> ExitCode {
    if args.is_empty() {
        eprintln!("Usage: pepper-gate identity <cert-file>...");
        return ExitCode::FAILURE;
    }

    let mut certificates = Vec::with_capacity(args.len());
    for path in args {
        match std::fs::read(path) {
            Ok(bytes) => certificates.push(bytes),
            Err(e) => {
                eprintln!("  Failed to read {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        }
    }

    match signing_identity(&certificates) {
        Some(token) => {
            println!("{}", token);
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}
