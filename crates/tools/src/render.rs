//! Step-by-step rendering of a pipeline run

use anyhow::Result;
use fecsim_core::prelude::*;
use fecsim_frame::prelude::{BitFlip, PipelineTrace};
use std::io::Write;

use crate::common::ReportFormat;

/// Render `trace` in the requested format
pub fn render<W: Write>(trace: &PipelineTrace, format: ReportFormat, out: &mut W) -> Result<()> {
    match format {
        ReportFormat::Text => render_text(trace, out),
        ReportFormat::Json => render_json(trace, out),
    }
}

/// Render the full trace as pretty JSON
pub fn render_json<W: Write>(trace: &PipelineTrace, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, trace)?;
    writeln!(out)?;
    Ok(())
}

/// `[000111, 111000]`
pub fn list(frames: &[BitFrame]) -> String {
    let items: Vec<String> = frames.iter().map(|f| f.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// `Position 2: 1 → 0, Position 3: 0 → 1` with 1-based positions
pub fn flips(flips: &[BitFlip]) -> String {
    flips
        .iter()
        .map(|f| format!("Position {}: {} → {}", f.position + 1, f.before, f.after))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line verdict comparing the decoded frame with the original
pub fn verdict(trace: &PipelineTrace) -> String {
    if trace.is_success() {
        format!(
            "✓ Success: the decoded frame ({}) matches the original frame ({}).",
            trace.decoded, trace.original
        )
    } else {
        format!(
            "✗ Failure: the decoded frame ({}) differs from the original frame ({}).",
            trace.decoded, trace.original
        )
    }
}

/// Render the human readable report, stage by stage
pub fn render_text<W: Write>(trace: &PipelineTrace, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Parameters: n = {}, m = {}, t = {}",
        trace.redundancy, trace.word_length, trace.depth
    )?;
    writeln!(out, "A: Original frame: {}", trace.original)?;
    writeln!(out, "B: Frame after redundancy: {}", trace.redundant)?;

    if trace.padding_bits() > 0 {
        writeln!(
            out,
            "Frame padded with {} zero bit(s): {}",
            trace.padding_bits(),
            trace.padded
        )?;
    }

    writeln!(
        out,
        "Frame split into groups of {}: {}",
        trace.word_length * trace.depth,
        list(&trace.groups)
    )?;

    writeln!(out, "Groups split into sub-words:")?;
    for (i, words) in trace.sub_words.iter().enumerate() {
        writeln!(out, "  Group {}: {}", i + 1, list(words))?;
    }

    writeln!(out, "C: Frame after interleaving: {}", list(&trace.interleaved))?;
    writeln!(
        out,
        "D: Frame after the channel (2nd and 3rd bits inverted): {}",
        list(&trace.corrupted)
    )?;

    writeln!(out, "Bits changed by the channel:")?;
    for (i, group_flips) in trace.flips.iter().enumerate() {
        if !group_flips.is_empty() {
            writeln!(out, "  Group {}: {}", i + 1, flips(group_flips))?;
        }
    }

    writeln!(out, "E: Frame after deinterleaving: {}", list(&trace.deinterleaved))?;
    writeln!(out, "Reconstituted frame: {}", trace.reconstituted)?;
    writeln!(out, "F: Frame after redundancy removal: {}", trace.decoded)?;
    writeln!(
        out,
        "Majority vote: {} window(s), {} bit(s) outvoted in {} window(s), {} tie(s)",
        trace.stats.windows,
        trace.stats.outvoted_bits,
        trace.stats.disputed_windows,
        trace.stats.ties
    )?;
    writeln!(out)?;
    writeln!(out, "{}", verdict(trace))?;
    writeln!(out)?;

    writeln!(out, "Summary:")?;
    writeln!(out, "  {:<20} {}", "A (initial)", trace.original)?;
    writeln!(out, "  {:<20} {}", "B (redundancy)", trace.redundant)?;
    writeln!(out, "  {:<20} {}", "C (interleaving)", list(&trace.interleaved))?;
    writeln!(out, "  {:<20} {}", "D (channel)", list(&trace.corrupted))?;
    writeln!(out, "  {:<20} {}", "E (deinterleaving)", list(&trace.deinterleaved))?;
    writeln!(out, "  {:<20} {}", "F (final)", trace.decoded)?;

    Ok(())
}
