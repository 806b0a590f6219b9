//! Mint a vanity statement identifier to stdout.
//!
//! Usage:
//!   cargo run -p proto-vanity --example mint -- "Join Ascent To Mount Vinson"

fn main() {
    let message = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if message.is_empty() {
        eprintln!("Usage: mint <message>");
        std::process::exit(1);
    }

    match proto_vanity::build(&message) {
        Ok(statement) => {
            println!("{}", statement.text);

            let hex: String = statement
                .payload
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect();
            eprintln!("payload ({} bytes): {}", statement.payload.len(), hex);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
