//! Two-pass class analysis.
//!
//! Pass 1 registers every class so the identifier map is complete before any
//! reference is resolved. Unit cycle detection runs next, since cycle
//! involvement is a per-class metric. Pass 2 resolves references and computes
//! metrics class by class, optionally on the rayon pool; results are collected
//! in scan order either way, so both modes produce identical output.

use crate::analysis::{infer_service, normalize_path};
use crate::analyzers::{is_source_document, ClassRegistry, ReferenceResolver};
use crate::config::ClassmapConfig;
use crate::core::{AnalysisResults, ClassId, ClassRecord, DependencyEdge};
use crate::frontend::{ClassFacts, SourceFrontend, UnitFacts};
use crate::graph::{DependencyGraphBuilder, UnitGraph};
use crate::metrics::compute_class_metrics;
use crate::observability::{
    increment_processed, set_current_class, set_current_file, set_phase, set_progress,
    AnalysisPhase,
};
use chrono::Utc;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Scan root used for path normalization and service inference
    pub repo_root: PathBuf,
    pub parallel: bool,
}

impl AnalysisOptions {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// One class to analyze in pass 2, with where it was declared.
struct ClassTask<'a> {
    unit: &'a UnitFacts,
    path: &'a Path,
    class: &'a ClassFacts,
}

struct ClassOutcome {
    record: ClassRecord,
    edges: Vec<DependencyEdge>,
}

/// Shared read-only state for pass 2.
struct ClassAnalyzer<'a> {
    registry: &'a ClassRegistry,
    resolver: ReferenceResolver<'a>,
    cyclic_units: &'a BTreeSet<String>,
    config: &'a ClassmapConfig,
    repo_root: &'a Path,
}

impl ClassAnalyzer<'_> {
    fn analyze(&self, task: &ClassTask<'_>) -> ClassOutcome {
        let _file = set_current_file(task.path);
        let qualified_name = task.class.qualified_name();
        let _class = set_current_class(qualified_name.as_str());

        // Pass 1 registered every class that reaches here; the fallback only
        // guards against a frontend that changes its answers between passes.
        let id = self
            .registry
            .lookup(&qualified_name)
            .cloned()
            .unwrap_or_else(|| ClassId::new(&task.unit.name, &qualified_name));

        let file_path = normalize_path(task.path, self.repo_root);
        let references = self.resolver.resolve_class(&id, &file_path, task.class);
        let metrics = compute_class_metrics(
            task.class,
            &references,
            self.cyclic_units.contains(&task.unit.name),
        );

        increment_processed();
        ClassOutcome {
            record: ClassRecord {
                id,
                name: task.class.name.clone(),
                namespace: task.class.namespace().to_string(),
                project: task.unit.name.clone(),
                service: infer_service(task.path, self.repo_root, &self.config.services),
                file_path,
                metrics,
            },
            edges: references.edges,
        }
    }
}

/// Run both passes over everything `frontend` supplies.
pub fn analyze_solution(
    frontend: &dyn SourceFrontend,
    config: &ClassmapConfig,
    options: &AnalysisOptions,
) -> AnalysisResults {
    let units = frontend.units();
    let span = info_span!(
        "class_analysis",
        solution = frontend.solution_name(),
        units = units.len(),
        parallel = options.parallel
    );
    let _guard = span.enter();

    let registry = {
        let _phase = set_phase(AnalysisPhase::Registration);
        let _span = info_span!("registration").entered();
        let registry = ClassRegistry::populate(units, &config.sources);
        for collision in registry.collisions() {
            warn!(
                qualified_name = %collision.qualified_name,
                kept = %collision.kept,
                aliased_unit = %collision.aliased_unit,
                "Class name declared in more than one unit; later declaration aliased to the first"
            );
        }
        info!(classes = registry.len(), "Registered class identifiers");
        registry
    };

    let cyclic_units = {
        let _phase = set_phase(AnalysisPhase::CycleDetection);
        let _span = info_span!("cycle_detection").entered();
        let unit_graph = UnitGraph::from_units(units);
        let cycles = unit_graph.cycles();
        for cycle in &cycles {
            info!(units = ?cycle, "Unit dependency cycle");
        }
        info!(
            units = unit_graph.unit_count(),
            references = unit_graph.reference_count(),
            cycles = cycles.len(),
            "Unit cycle detection complete"
        );
        cycles.into_iter().flatten().collect::<BTreeSet<_>>()
    };

    let tasks = collect_tasks(units, config);
    set_progress(0, tasks.len());

    let outcomes: Vec<ClassOutcome> = {
        let _phase = set_phase(AnalysisPhase::ReferenceResolution);
        let _span = info_span!("reference_resolution", classes = tasks.len()).entered();
        let analyzer = ClassAnalyzer {
            registry: &registry,
            resolver: ReferenceResolver::new(&registry, &config.ignorable, &config.layers),
            cyclic_units: &cyclic_units,
            config,
            repo_root: &options.repo_root,
        };

        if options.parallel {
            tasks
                .par_iter()
                .map(|task| {
                    let _phase = set_phase(AnalysisPhase::ReferenceResolution);
                    analyzer.analyze(task)
                })
                .collect()
        } else {
            tasks.iter().map(|task| analyzer.analyze(task)).collect()
        }
    };

    let _phase = set_phase(AnalysisPhase::ReportAssembly);
    let mut builder = DependencyGraphBuilder::new();
    let mut classes = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        builder.add_edges(outcome.edges);
        classes.push(outcome.record);
    }
    let raw_edges = builder.raw_edge_count();
    let graph = builder.build();
    let max_fan_out = graph.fan_out().into_values().max().unwrap_or(0);
    let max_fan_in = graph.fan_in().into_values().max().unwrap_or(0);
    info!(
        classes = classes.len(),
        raw_edges,
        edges = graph.edges().len(),
        max_fan_out,
        max_fan_in,
        cyclic_units = cyclic_units.len(),
        "Class analysis complete"
    );

    AnalysisResults {
        solution: frontend.solution_name().to_string(),
        timestamp: Utc::now(),
        classes,
        edges: graph.into_edges(),
        cyclic_units,
    }
}

/// Flatten units → source documents → classes in scan order.
fn collect_tasks<'a>(units: &'a [UnitFacts], config: &ClassmapConfig) -> Vec<ClassTask<'a>> {
    let mut tasks = Vec::new();
    for unit in units {
        for document in &unit.documents {
            let path = match document.file_path() {
                Some(path) if is_source_document(document, &config.sources) => path,
                _ => {
                    debug!(
                        unit = %unit.name,
                        path = ?document.path,
                        "Skipping non-source document"
                    );
                    continue;
                }
            };
            tasks.extend(
                document
                    .classes
                    .iter()
                    .map(|class| ClassTask { unit, path, class }),
            );
        }
    }
    tasks
}
