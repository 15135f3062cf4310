//! Spiral reading demonstration.
//!
//! This example walks the three stages of spiral-matrix on in-memory text:
//! 1. Pull every digit run out of arbitrary text
//! 2. Lay the numbers out as a square matrix
//! 3. Read the matrix counter-clockwise from the top-left corner
//!
//! Run with: `cargo run --example spiral_from_text`

use spiral_matrix::{build_matrix, extract_integers, spiral_from_text, spiral_read};

fn main() {
    println!("=== Spiral From Text Example ===\n");

    // Scenario 1: ASCII table - success case
    println!("--- Scenario 1: ASCII Table ---");
    let table = "\
+----+----+----+
|  1 |  2 |  3 |
+----+----+----+
|  4 |  5 |  6 |
+----+----+----+
|  7 |  8 |  9 |
+----+----+----+";
    println!("{}", table);

    let values = extract_integers(table);
    println!("Extracted {} values", values.len());

    match build_matrix(table) {
        Ok(matrix) => {
            println!("Matrix: {:?}", matrix);
            println!("Spiral: {:?}", spiral_read(&matrix));
        }
        Err(e) => eprintln!("Extraction error: {}", e),
    }

    // Scenario 2: count that only looks square when truncated
    println!("\n--- Scenario 2: Thirty-Five Values ---");
    let thirty_five = vec!["1"; 35].join(" ");
    match spiral_from_text(&thirty_five) {
        Ok(spiral) => println!("Unexpected spiral: {:?}", spiral),
        Err(e) => println!("Rejected as expected: {}", e),
    }

    // Scenario 3: no digits at all
    println!("\n--- Scenario 3: No Digits ---");
    match spiral_from_text("<html><body>empty</body></html>") {
        Ok(spiral) => println!("Unexpected spiral: {:?}", spiral),
        Err(e) => println!("Rejected as expected: {}", e),
    }

    // Scenario 4: numerals wider than 64 bits are kept exactly
    println!("\n--- Scenario 4: Wide Numerals ---");
    match spiral_from_text("1 2 3 123456789012345678901234567890") {
        Ok(spiral) => {
            let rendered: Vec<String> = spiral.iter().map(|v| v.to_string()).collect();
            println!("Spiral: [{}]", rendered.join(", "));
        }
        Err(e) => eprintln!("Extraction error: {}", e),
    }

    println!("\n=== Example Complete ===");
}
