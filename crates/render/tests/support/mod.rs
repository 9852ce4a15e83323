//! A deterministic in-memory analysis engine for pipeline tests.
//!
//! Responses are scripted per identifier/file up front; the engine
//! itself only does enough text scanning to locate identifiers, so
//! every assertion in the tests is about the pipeline, not about
//! real language analysis.

use codeblock_engine::{
    AnalysisEngine, Diagnostic, DocumentRegistry, EmittedFile, EngineConfig, OptionKind,
    OptionSchema, QuickInfo, TextSpan,
};
use codeblock_protocol::DiagnosticCategory;
use std::collections::HashMap;

pub struct ScriptedEngine {
    schema: OptionSchema,
    documents: DocumentRegistry,
    quick_infos: HashMap<String, QuickInfo>,
    diagnostics: Vec<Diagnostic>,
    emit: HashMap<String, Vec<EmittedFile>>,
    pub configured: Vec<EngineConfig>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        let schema = OptionSchema::default()
            .with("strict", OptionKind::Bool)
            .with("maxErrors", OptionKind::Number)
            .with("outDir", OptionKind::String)
            .with(
                "target",
                OptionKind::enumeration([("es5", 1), ("es2015", 2), ("esnext", 99)]),
            )
            .with(
                "lib",
                OptionKind::list(OptionKind::enumeration([("dom", 0), ("es2015", 2)])),
            );
        Self {
            schema,
            documents: DocumentRegistry::new(),
            quick_infos: HashMap::new(),
            diagnostics: Vec::new(),
            emit: HashMap::new(),
            configured: Vec::new(),
        }
    }

    /// Script quick info for every occurrence of an identifier
    pub fn with_quick_info(mut self, identifier: &str, info: QuickInfo) -> Self {
        self.quick_infos.insert(identifier.to_string(), info);
        self
    }

    /// Script a semantic diagnostic attached to a file
    pub fn with_diagnostic(
        mut self,
        file: &str,
        code: u32,
        message: &str,
        start: usize,
        length: usize,
    ) -> Self {
        self.diagnostics.push(Diagnostic {
            code,
            category: DiagnosticCategory::Error,
            message: message.to_string(),
            file: Some(file.to_string()),
            start: Some(start),
            length: Some(length),
        });
        self
    }

    /// Script compiled outputs for a file
    pub fn with_emit(mut self, file: &str, outputs: Vec<EmittedFile>) -> Self {
        self.emit.insert(file.to_string(), outputs);
        self
    }

    fn content(&self, file: &str) -> Option<&str> {
        self.documents.get(file).map(|doc| doc.content.as_str())
    }
}

impl AnalysisEngine for ScriptedEngine {
    fn option_schema(&self) -> &OptionSchema {
        &self.schema
    }

    fn configure(&mut self, config: &EngineConfig) {
        self.configured.push(config.clone());
        self.documents.invalidate_all();
    }

    fn update_document(&mut self, name: &str, content: &str, version: u32) {
        self.documents.acquire(name, content, version);
    }

    fn quick_info_at(&self, file: &str, position: usize) -> Option<QuickInfo> {
        let content = self.content(file)?;
        let (_, identifier) = identifier_runs(content)
            .into_iter()
            .find(|(start, text)| position >= *start && position < start + text.len())?;
        self.quick_infos.get(&identifier).cloned()
    }

    fn identifier_spans(&self, file: &str) -> Vec<TextSpan> {
        let Some(content) = self.content(file) else {
            return Vec::new();
        };
        identifier_runs(content)
            .into_iter()
            .filter(|(_, text)| self.quick_infos.contains_key(text))
            .map(|(start, text)| TextSpan::new(start, text.len()))
            .collect()
    }

    fn semantic_diagnostics(&self, file: &str) -> Vec<Diagnostic> {
        // Diagnostics from files the engine was never handed (ambient
        // library files) leak through alongside the queried file's own,
        // mimicking a real engine; the pipeline is expected to filter
        // them out.
        self.diagnostics
            .iter()
            .filter(|diag| match diag.file.as_deref() {
                Some(name) => name == file || self.documents.get(name).is_none(),
                None => false,
            })
            .cloned()
            .collect()
    }

    fn syntactic_diagnostics(&self, _file: &str) -> Vec<Diagnostic> {
        Vec::new()
    }

    fn emit_output(&self, file: &str) -> Vec<EmittedFile> {
        self.emit.get(file).cloned().unwrap_or_default()
    }
}

fn identifier_runs(content: &str) -> Vec<(usize, String)> {
    let bytes = content.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_alphabetic() || bytes[i] == b'_' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            runs.push((start, content[start..i].to_string()));
        } else {
            i += 1;
        }
    }
    runs
}
