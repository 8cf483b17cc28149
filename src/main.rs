use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{info, Level};

use bernie_sha256::encoding::decode_hex;
use bernie_sha256::{digest, Digest};

#[derive(Debug, Parser)]
#[command(
    name = "bernie_sha256",
    about = "Compute the SHA-256 digest of a hex-encoded message",
    version
)]
struct Cli {
    /// Message to hash, hex encoded (e.g. 68656c6c6f20776f726c64)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Hash INPUT as UTF-8 text instead of decoding it from hex
    #[arg(long, action = ArgAction::SetTrue)]
    text: bool,

    /// Print the digest as eight 32-bit words
    #[arg(long, action = ArgAction::SetTrue)]
    words: bool,

    /// Expected digest (hex); exit with status 1 when it does not match
    #[arg(long, value_name = "HEX")]
    expect: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn render(value: &Digest, words: bool) -> String {
    if words {
        value
            .words()
            .iter()
            .map(|word| format!("{:08x}", word))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        value.to_hex()
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let message = if args.text {
        args.input.clone().into_bytes()
    } else {
        decode_hex(&args.input).context("failed to decode INPUT")?
    };
    info!(len = message.len(), "decoded message");

    let value = digest(&message).context("failed to hash message")?;
    println!("{}", render(&value, args.words));

    if let Some(expected) = args.expect.as_deref() {
        let expected = decode_hex(expected).context("failed to decode --expect")?;
        if value.matches(&expected) {
            println!("OK");
        } else {
            println!("MISMATCH");
            std::process::exit(1);
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let value = digest(b"abc").unwrap();

        assert_eq!(render(&value, false), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
        assert_eq!(
            render(&value, true),
            "ba7816bf 8f01cfea 414140de 5dae2223 b00361a3 96177a9c b410ff61 f20015ad"
        );
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(9), Level::TRACE);
    }

    #[test]
    fn test_cli_args() {
        let args = Cli::try_parse_from(["bernie_sha256", "--words", "-vv", "616263"]).unwrap();

        assert_eq!(args.input, "616263");
        assert!(args.words);
        assert!(!args.text);
        assert_eq!(args.verbose, 2);
    }
}
