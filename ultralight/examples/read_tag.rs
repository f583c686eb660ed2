// Read the NDEF message from the tag on the first PC/SC reader.
//
// Run with: cargo run --example read_tag --features pcsc

#[cfg(feature = "pcsc")]
fn main() -> anyhow::Result<()> {
    use ultralight::prelude::*;
    use ultralight::transport::PcscTransport;

    env_logger::init();

    let transport = PcscTransport::open()?;
    let mut driver = MifareUltralight::new(transport, NdefCodec);

    let tag = driver.read()?;
    println!("UID: {}", tag.uid().to_hex());

    if !tag.is_formatted() {
        println!("tag is not NDEF formatted");
        return Ok(());
    }

    match tag.message() {
        None => println!("tag is empty"),
        Some(message) => {
            println!("{} record(s):", message.len());
            for (i, record) in message.records().iter().enumerate() {
                if let Some(text) = record.to_text() {
                    println!("  {}: text {:?}", i + 1, text);
                } else if let Some(uri) = record.to_uri() {
                    println!("  {}: uri {}", i + 1, uri);
                } else {
                    println!(
                        "  {}: {:?} {}",
                        i + 1,
                        record.tnf,
                        bytes_to_hex_spaced(&record.payload)
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "pcsc"))]
fn main() {
    eprintln!("this example needs a reader: rebuild with --features pcsc");
}
