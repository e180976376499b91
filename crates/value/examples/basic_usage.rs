//! Build, query and render values.

use interchange_value::prelude::*;

fn main() -> Result<(), ValueError> {
    // Parse through the JSON boundary.
    let parsed: Value = r#"{"name": "tracker", "retries": 3, "ratio": 0.5}"#.parse()?;
    let name: String = parsed.get_key_as("name")?;
    let retries: i64 = parsed.get_key_as("retries")?;
    println!("{name} with {retries} retries");

    // Or construct values directly.
    let mut config = Value::object(vec![
        ("enabled".to_owned(), Value::boolean(true)),
        ("level".to_owned(), Value::int(2)),
    ]);
    config.set_key("level", Value::int(3));

    // Canonical indented rendering, deterministic key order.
    println!("{config}");

    Ok(())
}
