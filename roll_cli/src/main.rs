//! # RollPlan CLI Application
//!
//! Terminal front-end for the rod allocation engine: collect inputs,
//! call allocate, render the result. All decision logic lives in
//! roll_core.

use std::io::{self, BufRead, Write};

use roll_core::{allocate, AllocationInput, MaterialSpec, PaperGrade};

fn prompt_line(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt, "").parse().unwrap_or(default)
}

fn main() {
    println!("RollPlan CLI - Rod Allocation Calculator");
    println!("========================================");
    println!();
    println!("Available grades:");
    for grade in PaperGrade::ALL {
        println!("  {} - {}", grade.code(), grade.display_name());
    }
    println!();

    let code = prompt_line("Enter paper grade code [1F100]: ", "1F100");
    let grade = match PaperGrade::from_code(&code) {
        Ok(grade) => grade,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let drum_radius_mm = prompt_f64("Enter drum radius (mm) [529.0]: ", 529.0);

    let input = AllocationInput::new("CLI", MaterialSpec::from_grade(grade), drum_radius_mm);

    match allocate(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  ALLOCATION RESULT");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Grade:       {} ({})", grade.code(), grade.display_name());
            println!("  Drum radius: {:.1} mm", drum_radius_mm);
            println!();
            println!("Drum:");
            println!("  Total length: {:.1}", result.total_length);
            if result.waste_length > 0.0 {
                println!("  Unplanned:    {:.1}", result.waste_length);
            }
            println!();
            println!("Plan: {}", result.summary());
            if result.rod_count > 0 {
                println!();
                println!("  #   Diameter (mm)");
                for (index, diameter) in result.diameters_mm.iter().enumerate() {
                    println!("  {:<3} {}", index + 1, diameter);
                }
            }
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
