//! Clone a nested mapping, mutate the original, show the clone unaffected.
//!
//! Run with `cargo run --example clone`.

use anyhow::{Context, Result};
use kopi::{Value, clone_deep, map};
use owo_colors::OwoColorize;

fn main() -> Result<()> {
    let mut original = map! {
        "a" => 1,
        "b" => map! {
            "b1" => "b1",
            "b2" => "b2",
            "b3" => map! { "b33" => "v" },
        },
    };

    let cloned = clone_deep(&original).context("input is not a plain mapping")?;

    // Rewrite a nested field on the original only
    if let Some(b1) = original.get_mut("b").and_then(|b| b.get_mut("b1")) {
        *b1 = map! { "b11" => "1" };
    }

    println!("{}", "original (mutated after cloning)".yellow().bold());
    println!("{}", original.to_json_pretty());
    println!();
    println!("{}", "clone (unaffected)".green().bold());
    println!("{}", cloned.to_json_pretty());

    let b1 = cloned.get("b").and_then(|b| b.get("b1")).and_then(Value::as_str);
    println!();
    println!("clone still sees b.b1 = {:?}", b1.unwrap_or("<missing>"));

    Ok(())
}
