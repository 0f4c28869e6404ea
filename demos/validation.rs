use rnokpp::*;

fn main() {
    let inputs = ["3652504575", "3068208400", "1234567890", "0000000000"];

    for input in inputs {
        match get_details(input) {
            Ok(details) => {
                let number: Rnokpp = input.parse().expect("validated above");
                println!("{input}: {details}");
                println!(
                    "  day count {}, sequence {:03}, gender digit {}",
                    number.day_count(),
                    number.sequence_number(),
                    number.gender_digit()
                );
            }
            Err(e) => println!("{input}: {e}"),
        }
    }

    let details = get_details("3652504575").expect("valid vector");
    println!(
        "\nJSON: {}",
        serde_json::to_string(&details).expect("details serialize")
    );
}
