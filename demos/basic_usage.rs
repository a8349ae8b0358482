//! Basic Usage Example
//!
//! This example demonstrates the fundamental usage of the `zod-parse`
//! crate: building schemas with the fluent combinators and validating
//! untyped JSON input against them.
//!
//! Run with: `cargo run --example basic_usage`

use serde_json::json;
use zod_parse::{number, object, string, Schema};

#[derive(Debug)]
struct User {
    name: String,
    age: f64,
    email: Option<String>,
}

fn main() {
    // =========================================================================
    // Example 1: Primitive chains
    // =========================================================================

    let username = string().min(3).max(16);
    println!("username 'piash'  -> {:?}", username.safe_parse(&json!("piash")));
    println!("username 'ab'     -> {:?}", username.safe_parse(&json!("ab")));

    let age = number().min(0).max(120);
    println!("age 30            -> {:?}", age.safe_parse(&json!(30)));
    println!("age \"30\"          -> {:?}", age.safe_parse(&json!("30")));
    println!("age 150           -> {:?}", age.safe_parse(&json!(150)));

    // =========================================================================
    // Example 2: An object schema with a typed constructor
    // =========================================================================

    let user_schema = object()
        .field("name", string().min(2))
        .field("age", number().min(0).max(120))
        .optional_field("email", string().email())
        .build(|fields| {
            Ok::<_, String>(User {
                name: fields.str("name")?.to_string(),
                age: fields.f64("age")?,
                email: fields.value("email").as_str().map(str::to_string),
            })
        });

    let valid = json!({"name": "Piash", "age": 30, "email": "piash@example.com"});
    match user_schema.safe_parse(&valid) {
        Ok(user) => println!("valid user        -> {user:?}"),
        Err(error) => println!("unexpected        -> {error}"),
    }

    let invalid = json!({"name": "J", "age": 200, "email": "nope"});
    match user_schema.safe_parse(&invalid) {
        Ok(user) => println!("unexpected        -> {user:?}"),
        Err(error) => {
            println!("invalid user:");
            for message in error.errors() {
                println!("  - {message}");
            }
        }
    }

    // =========================================================================
    // Example 3: parse() for fault-based flow
    // =========================================================================

    match user_schema.parse(&json!({"name": "J"})) {
        Ok(user) => println!("unexpected        -> {user:?}"),
        Err(fault) => println!("parse fault       -> {fault}"),
    }
}
