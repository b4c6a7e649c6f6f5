use anyhow::Context;
use simple_base32::{Base32Codec, DecodeConfig, logger::setup_logger};

fn main() -> anyhow::Result<()> {
    setup_logger();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        log::error!("Usage: {} <base32 string> [--upper-only] [--lenient]", args[0]);
        std::process::exit(1);
    }

    let base32 = &args[1];
    let config = match DecodeConfig::from_flags(args[2..].iter().map(String::as_str)) {
        Ok(config) => config,
        Err(flag) => {
            log::error!("Unknown option: {flag}");
            std::process::exit(1);
        }
    };

    let codec = Base32Codec::new(config);

    let decoded = codec
        .decode(base32)
        .with_context(|| format!("failed to decode {base32:?}"))?;
    println!(
        "[Decoded Text] {}",
        decoded.iter().map(|&b| b as char).collect::<String>()
    );

    Ok(())
}
