use chrono::NaiveDate;
use rnokpp::*;

fn main() {
    let birthday = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");

    // ── 1. Shared, entropy-seeded generator ───────────────────────────
    println!("=== For a birthday ===");
    for gender in [Gender::Male, Gender::Female] {
        let number = generate_rnokpp(birthday, gender).expect("date in range");
        println!("  {gender}: {number} -> {}", number.details().expect("valid"));
    }

    println!("\n=== Random ===");
    for number in generate_random_rnokpp_n(5).expect("positive count") {
        println!("  {number} -> {}", number.details().expect("valid"));
    }

    // ── 2. Out-of-range dates ─────────────────────────────────────────
    println!("\n=== Rejected Dates ===");
    let too_early = NaiveDate::from_ymd_opt(1899, 12, 30).expect("valid date");
    if let Err(e) = generate_rnokpp(too_early, Gender::Male) {
        println!("  {e}");
    }
    let tomorrow = KyivClock.today().succ_opt().expect("not the last date");
    if let Err(e) = generate_rnokpp(tomorrow, Gender::Male) {
        println!("  {e}");
    }

    // ── 3. Own generator with a pinned clock ──────────────────────────
    println!("\n=== Pinned Clock ===");
    let today = NaiveDate::from_ymd_opt(1950, 6, 1).expect("valid date");
    let mut generator = Generator::from_entropy().with_clock(FixedClock(today));
    let number = generator.generate_random().expect("window not empty");
    println!("  born on or before {today}: {number} -> {}", number.details().expect("valid"));
}
