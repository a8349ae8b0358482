//! Complex Types Example
//!
//! This example demonstrates composite and combinatorial schemas:
//! arrays, tuples, records, unions, intersections, and the modifier
//! wrappers.
//!
//! Run with: `cargo run --example complex_types`

use serde_json::json;
use zod_parse::{
    array, enumeration, intersection, number, record, schemas, string, tuple, union, Schema,
};

fn main() {
    // =========================================================================
    // Arrays and tuples
    // =========================================================================

    let tags = array(string().min(2)).min(1).max(5);
    println!("tags ok   -> {:?}", tags.safe_parse(&json!(["rust", "zod"])));
    println!("tags bad  -> {:?}", tags.safe_parse(&json!(["rust", "a"])));

    let point = tuple(schemas![number(), number()]);
    println!("point     -> {:?}", point.safe_parse(&json!([10, 20])));

    // =========================================================================
    // Records and enums
    // =========================================================================

    let scores = record(number().min(0).max(100));
    println!("scores    -> {:?}", scores.safe_parse(&json!({"alice": 93, "bob": 77})));

    let level = enumeration(["debug", "info", "warn", "error"]);
    println!("level     -> {:?}", level.safe_parse(&json!("verbose")));

    // =========================================================================
    // Unions and intersections
    // =========================================================================

    // Ordered fallback: a numeric string resolves to the first listed
    // alternative that accepts it.
    let id = union(schemas![number().int(), string().min(1)]);
    println!("id 42     -> {:?}", id.safe_parse(&json!(42)));
    println!("id \"a7\"   -> {:?}", id.safe_parse(&json!("a7")));
    println!("id true   -> {:?}", id.safe_parse(&json!(true)));

    let both = intersection(string().min(1), number());
    println!("both      -> {:?}", both.safe_parse(&json!("42")));

    // =========================================================================
    // Modifier wrappers
    // =========================================================================

    let nickname = string().min(2).nullable();
    println!("nickname  -> {:?}", nickname.safe_parse(&json!(null)));

    let port = number().int().default(8080.0);
    println!("port      -> {:?}", port.safe_parse(&json!(null)));

    let upper = string().transform(|value| value.to_uppercase());
    println!("upper     -> {:?}", upper.safe_parse(&json!("loud")));

    let even = number()
        .int()
        .refine(|value| value % 2.0 == 0.0, "must be even");
    println!("even 3    -> {:?}", even.safe_parse(&json!(3)));
}
