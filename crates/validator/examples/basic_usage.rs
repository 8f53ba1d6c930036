//! Basic usage example for textshape-validator

use textshape_validator::prelude::*;

fn main() -> Result<(), ConfigError> {
    let config = Configuration::new(ValidationMode::Strict);

    // Build once, check many times
    let isbn = config.is_isbn("10")?;
    for value in ["0-306-40615-2", "0-306-40615-3", ""] {
        match isbn.validate(value) {
            Ok(()) => println!("✓ {value:?} is an ISBN-10"),
            Err(e) => println!("✗ {value:?}: {e}"),
        }
    }

    // Names from a data file
    let phone = config.predicate_for("isPhone", &["en-GB"])?;
    println!("\n+447911123456 is en-GB mobile: {}", phone.check("+447911123456"));

    // Misconfiguration surfaces at construction
    if let Err(e) = config.is_phone("xx-XX") {
        println!("\nconstruction failed: {e}");
    }

    Ok(())
}
