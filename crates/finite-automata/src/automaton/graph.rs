//! Node/edge view of an automaton, serialized to JSON for visualization.

use crate::automaton::error::Result;
use crate::automaton::traits::FiniteAutomaton;
use log::debug;
use serde::Serialize;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// File name the visualization page loads.
pub const DEFAULT_EXPORT_FILE: &str = "automaton_data.json";

/// How nodes are labeled and how the JSON is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Label given to the start node instead of its id
    pub start_label: String,
    /// Label given to accepting nodes instead of their id; wins over `start_label`
    pub accept_label: String,
    /// Pretty-print the JSON
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            start_label: "Start State".to_string(),
            accept_label: "Accept State".to_string(),
            pretty: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub start: bool,
    pub accept: bool,
}

/// A labeled edge: one per `(source, symbol, target)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// One node per added state, one edge per transition target.
    pub fn from_automaton<A>(automaton: &A, options: &ExportOptions) -> Self
    where
        A: FiniteAutomaton,
        A::State: Display,
    {
        let start = automaton.start_state();

        let nodes = automaton
            .states()
            .iter()
            .map(|state| {
                let id = state.to_string();
                let is_start = start == Some(state);
                let is_accept = automaton.is_accept_state(state);
                let label = if is_accept {
                    options.accept_label.clone()
                } else if is_start {
                    options.start_label.clone()
                } else {
                    id.clone()
                };
                Node {
                    id,
                    label,
                    start: is_start,
                    accept: is_accept,
                }
            })
            .collect();

        let edges = automaton
            .edges()
            .map(|(from, symbol, to)| Edge {
                from: from.to_string(),
                to: to.to_string(),
                label: symbol.to_string(),
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the graph as JSON to `path`, replacing any existing file.
    pub fn write_json(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        debug!(
            "writing {} nodes and {} edges to {}",
            self.nodes.len(),
            self.edges.len(),
            path.display()
        );

        let mut writer = BufWriter::new(File::create(path)?);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Export `automaton` to `path` using `options`.
pub fn export_json<A>(
    automaton: &A,
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<Graph>
where
    A: FiniteAutomaton,
    A::State: Display,
{
    let graph = Graph::from_automaton(automaton, options);
    graph.write_json(path, options.pretty)?;
    Ok(graph)
}
