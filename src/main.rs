use std::env;

mod handler;

use handler::{handle, parse_request, PAYLOAD_VAR};

fn main() {
    let payload = env::var(PAYLOAD_VAR).unwrap_or_else(|_| "{}".to_string());
    let request = parse_request(&payload);
    let response = handle(&request);

    let out = serde_json::to_string(&response).expect("serialize response");
    println!("{}", out);
}
