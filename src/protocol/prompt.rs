//! Interactive plan entry.
//!
//! Asks for the budget, unit costs and strengths, and each territory's
//! defense and terrain, one line per answer. Prompts go to `out`, answers
//! come from `input`, so a session can be scripted by piping lines in.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::board::territory::{Terrain, Territory};
use crate::board::unit::{UnitTable, UnitType, ALL_UNIT_TYPES};
use crate::plan::{PlanConfig, PlanError};
use crate::search::SearchOptions;

/// Reads a full plan from prompt answers.
pub fn read_plan<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<PlanConfig, PlanError> {
    writeln!(out, "Risk attack planner")?;
    let budget: u32 = ask(input, out, "budget", "Maximum troop points (e.g. 20): ")?;

    writeln!(out, "Configure cost and strength per unit type:")?;
    let costs = ask_table(input, out, "cost", [1, 3, 5])?;
    let strengths = ask_table(input, out, "strength", [1, 3, 5])?;

    let count: usize = ask(
        input,
        out,
        "territory count",
        "Number of enemy territories (e.g. 3): ",
    )?;
    // The count is untrusted; validation enforces the territory cap later.
    let mut territories = Vec::new();
    for i in 1..=count {
        let defense: u32 = ask(
            input,
            out,
            &format!("defense of territory {}", i),
            &format!("Defense of territory {} (e.g. 10): ", i),
        )?;
        let tag = ask_line(
            input,
            out,
            &format!("terrain of territory {}", i),
            &format!("Terrain of territory {} (plain/mountainous): ", i),
        )?;
        territories.push(Territory::new(defense, Terrain::parse(&tag)));
    }

    Ok(PlanConfig {
        budget,
        costs,
        strengths,
        territories,
        options: SearchOptions::default(),
    })
}

/// Asks for one value per unit type.
fn ask_table<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    what: &str,
    examples: [u32; 3],
) -> Result<UnitTable<u32>, PlanError> {
    let mut values = [0u32; 3];
    for (slot, (unit, example)) in values
        .iter_mut()
        .zip(ALL_UNIT_TYPES.iter().zip(examples))
    {
        *slot = ask_unit(input, out, what, *unit, example)?;
    }
    Ok(UnitTable::new(values[0], values[1], values[2]))
}

fn ask_unit<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    what: &str,
    unit: UnitType,
    example: u32,
) -> Result<u32, PlanError> {
    ask(
        input,
        out,
        &format!("{} {}", unit, what),
        &format!("{} of one {} unit (e.g. {}): ", capitalize(what), unit, example),
    )
}

/// Prompts and parses a single value.
fn ask<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    field: &str,
    prompt: &str,
) -> Result<T, PlanError> {
    let line = ask_line(input, out, field, prompt)?;
    match line.parse() {
        Ok(v) => Ok(v),
        Err(_) => Err(PlanError::Parse {
            field: field.to_string(),
            value: line,
        }),
    }
}

/// Prompts and returns the trimmed answer line.
fn ask_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    field: &str,
    prompt: &str,
) -> Result<String, PlanError> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PlanError::UnexpectedEof {
            field: field.to_string(),
        });
    }
    Ok(line.trim().to_string())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
