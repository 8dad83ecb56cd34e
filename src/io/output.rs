use crate::core::{AnalysisResults, ClassesReport, DependencyEdge, EdgesReport};
use std::borrow::Cow;
use std::io::Write;

pub const CLASSES_REPORT_FILE: &str = "raw_metrics.json";
pub const EDGES_REPORT_FILE: &str = "dependencies.csv";

const EDGES_HEADER: [&str; 2] = ["sourceClassId", "targetClassId"];

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()>;
}

/// Split one run's results into the two report shapes.
pub fn assemble_reports(results: &AnalysisResults) -> (ClassesReport, EdgesReport) {
    let classes = ClassesReport {
        generated_at: results.timestamp,
        solution: results.solution.clone(),
        classes: results.classes.clone(),
    };
    let edges = EdgesReport {
        edges: results.edges.clone(),
    };
    (classes, edges)
}

/// Writes the classes report as pretty-printed JSON.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(&mut self, report: &ClassesReport) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let (classes, _) = assemble_reports(results);
        self.write_report(&classes)
    }
}

/// Writes the edges report as CSV with a `sourceClassId,targetClassId` header.
pub struct CsvEdgeWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvEdgeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(&mut self, report: &EdgesReport) -> anyhow::Result<()> {
        self.write_row(&EDGES_HEADER)?;
        for DependencyEdge { source, target } in &report.edges {
            self.write_row(&[source.as_str(), target.as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_row(&mut self, fields: &[&str]) -> anyhow::Result<()> {
        let row = fields
            .iter()
            .map(|field| escape_csv_field(field))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(self.writer, "{row}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for CsvEdgeWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let (_, edges) = assemble_reports(results);
        self.write_report(&edges)
    }
}

/// Quote a field when it contains a delimiter, quote or line break, doubling
/// embedded quotes.
pub fn escape_csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassId, ClassMetrics, ClassRecord};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn results() -> AnalysisResults {
        AnalysisResults {
            solution: "Shop".into(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            classes: vec![ClassRecord {
                id: ClassId::from("Shop:Shop.Order"),
                name: "Order".into(),
                namespace: "Shop".into(),
                project: "Shop".into(),
                service: "Unknown".into(),
                file_path: "Order.cs".into(),
                metrics: ClassMetrics {
                    loc: 3,
                    ..Default::default()
                },
            }],
            edges: vec![
                DependencyEdge::new("Shop:Shop.Order".into(), "Shop:Shop.Buyer".into()),
                DependencyEdge::new("Shop:Shop.Order".into(), "Shop:Shop.Map<A,B>".into()),
            ],
            cyclic_units: BTreeSet::new(),
        }
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_csv_edges_have_header_and_quoting() {
        let mut buffer = Vec::new();
        CsvEdgeWriter::new(&mut buffer)
            .write_results(&results())
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "sourceClassId,targetClassId\n\
             Shop:Shop.Order,Shop:Shop.Buyer\n\
             Shop:Shop.Order,\"Shop:Shop.Map<A,B>\"\n"
        );
    }

    #[test]
    fn test_csv_empty_edges_is_header_only() {
        let mut buffer = Vec::new();
        CsvEdgeWriter::new(&mut buffer)
            .write_report(&EdgesReport::default())
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "sourceClassId,targetClassId\n"
        );
    }

    #[test]
    fn test_json_report_shape() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_results(&results())
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["generatedAt"], "2026-01-02T03:04:05Z");
        assert_eq!(value["solution"], "Shop");
        let class = &value["classes"][0];
        assert_eq!(class["id"], "Shop:Shop.Order");
        assert_eq!(class["filePath"], "Order.cs");
        assert_eq!(class["metrics"]["LOC"], 3);
        assert!(value.get("edges").is_none());
    }
}
