//! Plain-text and JSON renderers for each subcommand.

use std::io::Write;

use causenet_core::{CausenetError, GraphMode, NodeKey};
use causenet_graph::CauseGraph;

use crate::error::CliError;

pub fn stats(graph: &CauseGraph, out: &mut impl Write) -> Result<(), CliError> {
    let report = graph.report();
    writeln!(out, "mode:                {}", graph.mode())?;
    writeln!(out, "nodes:               {}", report.nodes)?;
    writeln!(out, "edges:               {}", report.edges)?;
    writeln!(out, "causes:              {}", graph.index().cause_count())?;
    writeln!(out, "rows seen:           {}", report.rows_seen)?;
    writeln!(out, "rows skipped:        {}", report.rows_skipped)?;
    writeln!(out, "cells unparseable:   {}", report.cells_unparseable)?;
    writeln!(out, "lists rejected:      {}", report.lists_rejected)?;
    writeln!(out, "dangling references: {}", report.dangling_references)?;
    Ok(())
}

pub fn causes(graph: &CauseGraph, out: &mut impl Write) -> Result<(), CliError> {
    for cause in graph.list_causes() {
        writeln!(out, "{cause}")?;
    }
    Ok(())
}

pub fn neighbors(graph: &CauseGraph, cause: &str, out: &mut impl Write) -> Result<(), CliError> {
    let found = graph.neighbors_one_hop(cause).map_err(CausenetError::from)?;
    writeln!(out, "start: {}", found.start.label())?;
    if found.is_empty() {
        writeln!(out, "no relations found")?;
        return Ok(());
    }
    match graph.mode() {
        GraphMode::Stratified => stratified_table(&found.successors, out),
        GraphMode::Flat | GraphMode::Hierarchical => {
            for successor in &found.successors {
                let weight = graph
                    .store()
                    .edge_weight(&found.start, successor)
                    .map(|w| w.weight)
                    .unwrap_or_default();
                writeln!(out, "{:<40} {weight:.4}", successor.cause())?;
            }
            Ok(())
        }
    }
}

fn stratified_table(nodes: &[NodeKey], out: &mut impl Write) -> Result<(), CliError> {
    let rows: Vec<[String; 5]> = nodes
        .iter()
        .filter_map(NodeKey::as_stratified)
        .map(|k| {
            [
                k.cause.clone(),
                k.sex.to_string(),
                k.age_band.to_string(),
                k.country.clone(),
                k.year.to_string(),
            ]
        })
        .collect();
    let header = ["Cause", "Sex", "Age", "Country", "Year"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }
    write_row(out, &header, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<S: AsRef<str>>(out: &mut impl Write, cells: &[S], widths: &[usize]) -> Result<(), CliError> {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())?;
    Ok(())
}

/// The one-hop subgraph of `cause`, or the full graph when `cause` is `None`.
pub fn export(
    graph: &CauseGraph,
    cause: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let export = match cause {
        Some(cause) => {
            let found = graph.neighbors_one_hop(cause).map_err(CausenetError::from)?;
            graph.export_subgraph(found.node_set())
        }
        None => graph.export_full(),
    };
    serde_json::to_writer_pretty(&mut *out, &export)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use causenet_graph::{build_graph, BuildOptions};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn neighbors_prints_stratified_table() {
        let graph = build_graph(&test_fixtures::stroke_scenario(), &BuildOptions::default());
        let text = render(|out| neighbors(&graph, "stroke", out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "start: stroke/male/>=65yo/FRANCE/2010");
        assert!(lines[1].starts_with("Cause"));
        assert!(lines[2].starts_with("heart failure  male  >=65yo  FRANCE"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn unknown_cause_has_code() {
        let graph = build_graph(&test_fixtures::stroke_scenario(), &BuildOptions::default());
        let err = neighbors(&graph, "cholera", &mut Vec::new()).unwrap_err();
        assert!(err.display_string().starts_with("[CAUSE_NOT_FOUND]"));
    }

    #[test]
    fn flat_neighbors_show_weights() {
        let options = BuildOptions::default().with_mode(GraphMode::Flat);
        let graph = build_graph(&test_fixtures::sample_dataset(), &options);
        let text = render(|out| neighbors(&graph, "diabetes", out));
        assert!(text.contains("stroke"));
        assert!(text.contains("0.3000"));
        assert!(text.contains("0.1000"));
    }

    #[test]
    fn export_is_json() {
        let graph = build_graph(&test_fixtures::stroke_scenario(), &BuildOptions::default());
        let text = render(|out| export(&graph, Some("stroke"), out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(value["edges"][0]["weight"], 0.4);
    }

    #[test]
    fn export_all_includes_unconnected_nodes() {
        let graph = build_graph(&test_fixtures::stroke_scenario(), &BuildOptions::default());
        let text = render(|out| export(&graph, None, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(value["edges"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn stats_lists_report() {
        let graph = build_graph(&test_fixtures::sample_dataset(), &BuildOptions::default());
        let text = render(|out| stats(&graph, out));
        assert!(text.contains("nodes:               22"));
        assert!(text.contains("dangling references: 1"));
    }
}
