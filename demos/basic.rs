//! Basic usage example for OidMap
//!
//! This example demonstrates the fundamental operations:
//! - Creating a map
//! - Inserting identifier/value pairs
//! - Looking up values
//! - Traversing entries in ascending identifier order

use oidmap::{Oid, OidMap, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    // Pre-size for the expected workload
    let options = Options::default().expected_keys(100_000);
    let mut map = OidMap::with_options(options)?;

    println!("Map created");

    // Insert some identifiers
    println!("Inserting data...");
    let readme = Oid::from_hex("aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d")?;
    let empty = Oid::from_hex("da39a3ee5e6b4b0d3255bfef95601890afd80709")?;
    let license = Oid::from_hex("0a4d55a8d778e5022fab701977c5d840bbc486d0")?;

    map.insert(readme, "README.md")?;
    map.insert(empty, "empty blob")?;
    map.insert(license, "LICENSE")?;

    // Look up a value
    println!("Reading data...");
    if let Some(value) = map.get(&readme) {
        println!("{} => {}", readme, value);
    }

    // A missing identifier is an expected outcome, not an error
    let absent: Oid = "ffffffffffffffffffffffffffffffffffffffff".parse()?;
    match map.get(&absent) {
        Some(_) => println!("{} unexpectedly present", absent),
        None => println!("{} not found (as expected)", absent),
    }

    // A repeated insert is a caller bug and fails loudly
    if let Err(err) = map.insert(readme, "README.md again") {
        println!("rejected: {}", err);
    }

    // Traverse everything in ascending identifier order
    println!("All {} entries in order:", map.len());
    for (oid, value) in map.iter() {
        println!("  {} => {}", oid, value);
    }

    Ok(())
}
