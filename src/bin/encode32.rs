use simple_base32::{Base32Codec, logger::setup_logger};

fn main() -> anyhow::Result<()> {
    setup_logger();
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        log::error!("Usage: {} <plaintext>", args[0]);
        std::process::exit(1);
    }

    let plaintext = &args[1];

    let codec = Base32Codec::default();
    let encoded = codec.encode(plaintext);
    log::debug!("[Encoded Text] {} bytes -> {} chars", plaintext.len(), encoded.len());
    println!("[Encoded Text] {encoded}");

    Ok(())
}
