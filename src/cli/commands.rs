//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//! Output goes to the writer passed in, so tests can capture it.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use serde_json::json;
use typekey_core::ident::{hash_seed, set_hash_seed};
use typekey_core::lang::{engine, primitives, wrappers};
use typekey_core::{IdentName, SearchCase, SearchDir, TypeKeyError, category, split_with, tags};
use typekey_reflect::{Object, Rotator, Vector, signature_key};

use super::{CliResult, CommandError, ExitCode};

// ============================================================================
// names
// ============================================================================

/// List every registered vocabulary entry.
#[tracing::instrument(skip_all, fields(json = json))]
pub fn names(out: &mut impl Write, json: bool) -> CliResult<ExitCode> {
    if json {
        let doc = names_json();
        let text = serde_json::to_string_pretty(&doc).map_err(CommandError::from)?;
        writeln!(out, "{text}")?;
        return Ok(ExitCode::SUCCESS);
    }

    writeln!(out, "# primitives")?;
    for p in primitives::PRIMITIVES {
        writeln!(out, "{:<28} {}", p.key.canonical, p.category)?;
    }
    writeln!(out, "\n# wrappers")?;
    for w in wrappers::WRAPPERS {
        writeln!(out, "{:<28} arity {}", w.key.canonical, w.arity)?;
    }
    writeln!(out, "\n# engine types")?;
    for t in engine::ENGINE_TYPES {
        writeln!(out, "{:<28} {}", t.key.canonical, t.group.as_str())?;
    }
    tracing::debug!(
        primitives = primitives::PRIMITIVES.len(),
        wrappers = wrappers::WRAPPERS.len(),
        engine = engine::ENGINE_TYPES.len(),
        "listed vocabularies"
    );
    Ok(ExitCode::SUCCESS)
}

fn names_json() -> serde_json::Value {
    let primitives: Vec<_> = primitives::PRIMITIVES
        .iter()
        .map(|p| {
            json!({
                "name": p.key.canonical,
                "category": category::as_str(p.category),
                "description": p.key.description,
            })
        })
        .collect();
    let wrappers: Vec<_> = wrappers::WRAPPERS
        .iter()
        .map(|w| {
            json!({
                "name": w.key.canonical,
                "arity": w.arity,
                "description": w.key.description,
            })
        })
        .collect();
    let engine: Vec<_> = engine::ENGINE_TYPES
        .iter()
        .map(|t| {
            json!({
                "name": t.key.canonical,
                "group": t.group.as_str(),
                "description": t.key.description,
            })
        })
        .collect();
    json!({
        "primitives": primitives,
        "wrappers": wrappers,
        "engine": engine,
    })
}

// ============================================================================
// hash
// ============================================================================

/// Print `name<TAB>hash` for each name, using the process-wide seed.
#[tracing::instrument(skip_all, fields(count = names.len(), seed = ?seed))]
pub fn hash(out: &mut impl Write, names: &[String], seed: Option<u32>) -> CliResult<ExitCode> {
    if let Some(seed) = seed {
        set_hash_seed(seed)?;
    }
    tracing::debug!(seed = hash_seed(), "hashing identifiers");
    for name in names {
        let ident = IdentName::from(name.as_str());
        writeln!(out, "{}\t{:#010x}", ident, ident.key_hash())?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// split
// ============================================================================

/// Split `subject` once at `delimiter` and print both halves, one per line.
#[tracing::instrument(skip_all, fields(case_sensitive = case_sensitive, from_end = from_end))]
pub fn split(
    out: &mut impl Write,
    subject: &str,
    delimiter: &str,
    case_sensitive: bool,
    from_end: bool,
) -> CliResult<ExitCode> {
    let case = if case_sensitive {
        SearchCase::CaseSensitive
    } else {
        SearchCase::IgnoreCase
    };
    let dir = if from_end {
        SearchDir::FromEnd
    } else {
        SearchDir::FromStart
    };
    let (left, right) = split_with(subject, delimiter, case, dir).ok_or(TypeKeyError::EmptySubject)?;
    writeln!(out, "{left}")?;
    writeln!(out, "{right}")?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// check
// ============================================================================

/// Evaluate one category/tag pair; exits with failure when the tag is rejected.
#[tracing::instrument(skip_all, fields(category = category_name, tag = tag_name))]
pub fn check(out: &mut impl Write, category_name: &str, tag_name: &str) -> CliResult<ExitCode> {
    let category = category::parse(category_name)?;
    let tag = tags::parse(tag_name)?;
    if category.accepts(tag) {
        writeln!(out, "{category} accepts {tag}")?;
        Ok(ExitCode::SUCCESS)
    } else {
        writeln!(out, "{category} rejects {tag}")?;
        Ok(ExitCode::FAILURE)
    }
}

// ============================================================================
// signature
// ============================================================================

/// Print the composed keys of a few representative binding signatures.
#[tracing::instrument(skip_all)]
pub fn signature(out: &mut impl Write, delimiter: &str) -> CliResult<ExitCode> {
    for (label, key) in sample_signatures(delimiter) {
        writeln!(out, "{label:<58} {key}")?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Sample signatures and their keys, in display order.
pub fn sample_signatures(delimiter: &str) -> Vec<(&'static str, IdentName)> {
    vec![
        ("fn() -> ()", signature_key::<(), ()>(delimiter)),
        ("fn(i32, &str) -> bool", signature_key::<bool, (i32, &str)>(delimiter)),
        (
            "fn(&Object, Vector, f32) -> Rotator",
            signature_key::<Rotator, (&Object, Vector, f32)>(delimiter),
        ),
        (
            "fn(Vec<Arc<Vector>>, HashMap<String, &Object>) -> ()",
            signature_key::<(), (Vec<Arc<Vector>>, HashMap<String, &Object>)>(delimiter),
        ),
    ]
}
