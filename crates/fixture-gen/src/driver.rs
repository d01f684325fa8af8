//! The fixture driver: JSON test definitions in, annotated fixtures out.
//!
//! Input is an array of test-case objects, each carrying at least a `fen`
//! field. Every object comes back with a `moves` array added; any other
//! fields ride along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use chess_rules::{RulesEngine, StandardChess};

use crate::annotate::{AnnotateError, Annotator};
use crate::record::MoveRecord;

/// Errors raised by the driver. All fatal; no partial output is written.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("test case {index}: {source}")]
    Annotate {
        index: usize,
        source: AnnotateError,
    },
}

/// One entry of the test-definition file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// The position under test.
    pub fen: String,

    /// Fields this tool does not interpret, preserved on output.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// The computed fixture data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves: Option<Vec<MoveRecord>>,
}

/// Reads test definitions from a JSON file.
pub fn read_tests(path: &Path) -> Result<Vec<TestCase>, DriverError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Writes the annotated tests, indented by default or minified.
pub fn write_tests(path: &Path, tests: &[TestCase], minify: bool) -> Result<(), DriverError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    if minify {
        serde_json::to_writer(&mut writer, tests)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, tests)?;
    }
    writer.flush()?;
    Ok(())
}

/// Fills in the `moves` fixture data for every test case, in input order.
pub fn annotate_tests<R: RulesEngine>(
    annotator: &Annotator<R>,
    tests: &mut [TestCase],
) -> Result<(), DriverError> {
    for (index, test) in tests.iter_mut().enumerate() {
        let moves = annotator
            .annotate_fen(&test.fen)
            .map_err(|source| DriverError::Annotate { index, source })?;
        tracing::debug!("test case {}: {} legal moves", index, moves.len());
        test.moves = Some(moves);
    }
    Ok(())
}

/// Runs the whole pipeline: read, annotate, write.
pub fn run(input: &Path, output: &Path, minify: bool) -> Result<(), DriverError> {
    let mut tests = read_tests(input)?;
    tracing::info!("loaded {} test definitions from {}", tests.len(), input.display());

    let annotator = Annotator::new(StandardChess);
    annotate_tests(&annotator, &mut tests)?;

    write_tests(output, &tests, minify)?;
    tracing::info!("wrote fixture data to {}", output.display());
    Ok(())
}
