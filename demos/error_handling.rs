use rnokpp::*;

fn main() {
    // ── 1. Malformed input ────────────────────────────────────────────
    println!("=== Malformed Input ===");
    for input in ["123456789", "1234567890+", "123456789X", ""] {
        match get_details(input) {
            Ok(details) => println!("  {input:?}: {details} (unexpected)"),
            Err(RnokppError::TooShort { len }) => {
                println!("  {input:?}: too short ({len} characters)")
            }
            Err(RnokppError::TooLong { len }) => {
                println!("  {input:?}: too long ({len} characters)")
            }
            Err(e) => println!("  {input:?}: {e}"),
        }
    }

    // ── 2. Checksum mismatch ──────────────────────────────────────────
    println!("\n=== Checksum ===");
    let number: Rnokpp = "3652504576".parse().expect("well-formed");
    println!(
        "  {number}: control digit {} but expected {}",
        number.control_digit(),
        number.expected_control_digit()
    );
    if let Err(e) = number.details() {
        println!("  Rejected: {e}");
    }

    // ── 3. Projections propagate errors ───────────────────────────────
    println!("\n=== Gender Queries ===");
    match is_male("invalid") {
        Ok(male) => println!("  male: {male}"),
        Err(e) => println!("  is_male failed: {e}"),
    }
    println!("  is_valid(\"invalid\") = {}", is_valid("invalid"));
}
