use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::{TransportMode, TravelGraph, UnknownMode};
use crate::graphs::Graph;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {file}: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },

    #[error("{file} has no `{column}` column")]
    MissingColumn { file: String, column: &'static str },

    #[error("{file} line {line}: expected {expected} fields, found {found}")]
    MissingField {
        file: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{file} line {line}: invalid number `{value}`")]
    InvalidNumber {
        file: String,
        line: usize,
        value: String,
    },

    #[error("{file} line {line}: {source}")]
    UnknownMode {
        file: String,
        line: usize,
        source: UnknownMode,
    },
}

/// Builds a [`TravelGraph`] from a cities file and a transports file.
///
/// Both are comma-delimited with a header row: the cities file carries a
/// `name` column, the transports file carries `origin`, `destination`,
/// `type`, `price` and `duration` columns. Transport rows referencing a
/// city the cities file never declared are skipped with a warning rather
/// than failing the load.
pub fn load_travel_graph(
    cities_file: &Path,
    transports_file: &Path,
) -> Result<TravelGraph, LoadError> {
    let mut graph = TravelGraph::new();
    load_cities(&mut graph, cities_file)?;
    load_transports(&mut graph, transports_file)?;

    info!(
        cities = graph.number_of_cities(),
        transports = graph.number_of_edges(),
        "loaded travel network"
    );

    Ok(graph)
}

fn load_cities(graph: &mut TravelGraph, path: &Path) -> Result<(), LoadError> {
    let file = DelimitedFile::read(path)?;
    let name_column = file.column("name")?;

    for &(line, ref row) in &file.rows {
        let name = file.field(line, row, name_column)?;
        graph.add_city(name);
    }

    debug!(file = %file.name, cities = graph.number_of_cities(), "loaded city file");
    Ok(())
}

fn load_transports(graph: &mut TravelGraph, path: &Path) -> Result<(), LoadError> {
    let file = DelimitedFile::read(path)?;
    let origin_column = file.column("origin")?;
    let destination_column = file.column("destination")?;
    let type_column = file.column("type")?;
    let price_column = file.column("price")?;
    let duration_column = file.column("duration")?;

    for &(line, ref row) in &file.rows {
        let origin_name = file.field(line, row, origin_column)?;
        let destination_name = file.field(line, row, destination_column)?;

        let (Some(origin), Some(destination)) =
            (graph.city(origin_name), graph.city(destination_name))
        else {
            warn!(
                file = %file.name,
                line,
                origin = origin_name,
                destination = destination_name,
                "transport row references an unknown city, skipping"
            );
            continue;
        };

        let mode: TransportMode = file
            .field(line, row, type_column)?
            .parse()
            .map_err(|source| LoadError::UnknownMode {
                file: file.name.clone(),
                line,
                source,
            })?;
        let price = file.number(line, row, price_column)?;
        let minutes = file.number(line, row, duration_column)?;

        graph.add_transport(mode, origin, destination, price, minutes);
    }

    debug!(file = %file.name, transports = graph.number_of_edges(), "loaded transport file");
    Ok(())
}

/// A comma-delimited file with a header row. Fields are trimmed, blank
/// lines are skipped, and rows are addressed by the 1-based line number
/// they had in the file (for error messages).
struct DelimitedFile {
    name: String,
    columns: Vec<String>,
    rows: Vec<(usize, Vec<String>)>,
}

impl DelimitedFile {
    fn read(path: &Path) -> Result<DelimitedFile, LoadError> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|source| LoadError::Io {
            file: name.clone(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut columns = Vec::new();
        let mut rows = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                file: name.clone(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<String> = line
                .split(',')
                .map(|field| field.trim().to_string())
                .collect();

            if columns.is_empty() {
                columns = fields;
            } else {
                rows.push((index + 1, fields));
            }
        }

        Ok(DelimitedFile {
            name,
            columns,
            rows,
        })
    }

    fn column(&self, column: &'static str) -> Result<usize, LoadError> {
        self.columns
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| LoadError::MissingColumn {
                file: self.name.clone(),
                column,
            })
    }

    fn field<'a>(&self, line: usize, row: &'a [String], column: usize) -> Result<&'a str, LoadError> {
        row.get(column)
            .map(String::as_str)
            .ok_or_else(|| LoadError::MissingField {
                file: self.name.clone(),
                line,
                expected: self.columns.len(),
                found: row.len(),
            })
    }

    fn number(&self, line: usize, row: &[String], column: usize) -> Result<f64, LoadError> {
        let value = self.field(line, row, column)?;
        value.parse().map_err(|_| LoadError::InvalidNumber {
            file: self.name.clone(),
            line,
            value: value.to_string(),
        })
    }
}
