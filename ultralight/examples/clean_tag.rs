// Erase the NDEF message from the tag on the first PC/SC reader,
// leaving the tag NDEF-formatted.
//
// Run with: cargo run --example clean_tag --features pcsc

#[cfg(feature = "pcsc")]
fn main() -> anyhow::Result<()> {
    use ultralight::prelude::*;
    use ultralight::transport::PcscTransport;

    env_logger::init();

    let transport = PcscTransport::open()?;
    let mut driver = MifareUltralight::new(transport, NdefCodec);

    driver.clean()?;

    let tag = driver.read()?;
    println!(
        "tag {} cleaned, message present: {}",
        tag.uid().to_hex(),
        tag.message().is_some()
    );

    Ok(())
}

#[cfg(not(feature = "pcsc"))]
fn main() {
    eprintln!("this example needs a reader: rebuild with --features pcsc");
}
