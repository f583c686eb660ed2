// Write a text record to the tag on the first PC/SC reader.
//
// Run with: cargo run --example write_tag --features pcsc -- "some text"

#[cfg(feature = "pcsc")]
fn main() -> anyhow::Result<()> {
    use ultralight::prelude::*;
    use ultralight::transport::PcscTransport;

    env_logger::init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "hello from ultralight".to_string());

    let transport = PcscTransport::open()?;
    let mut driver = MifareUltralight::new(transport, NdefCodec);

    let message = NdefMessage::from(NdefRecord::text("en", &text));
    driver.write(&message)?;
    println!("wrote {:?}", text);

    let tag = driver.read()?;
    println!(
        "read back from {}: {:?}",
        tag.uid().to_hex(),
        tag.message().and_then(|m| m.records()[0].to_text())
    );

    Ok(())
}

#[cfg(not(feature = "pcsc"))]
fn main() {
    eprintln!("this example needs a reader: rebuild with --features pcsc");
}
