use crate::error::{RenderError, Result};
use crate::{playground, text, validate};
use codeblock_engine::AnalysisEngine;
use codeblock_markup::{
    find_cut, line_character, resolve_engine_config, resolve_handbook_options, sample_lines,
    shift_position, split_files, strip_markup, FileRegistry,
};
use codeblock_protocol::{
    DiagnosticCategory, Highlight, Query, RenderResult, RenderedDiagnostic, StaticQuickInfo,
};

/// Per-file markup, resolved but still in file-relative coordinates
struct FileAnnotations {
    file: String,
    highlights: Vec<Highlight>,
    queries: Vec<ResolvedQuery>,
}

struct ResolvedQuery {
    position: usize,
    offset: usize,
    source_line: usize,
    text: Option<String>,
    docs: Option<String>,
}

struct DraftQuickInfo {
    text: String,
    docs: Option<String>,
    position: usize,
    length: usize,
}

struct DraftDiagnostic {
    code: u32,
    category: DiagnosticCategory,
    rendered_message: String,
    position: Option<usize>,
    length: Option<usize>,
}

/// Render one annotated sample into clean code plus metadata records.
///
/// The pipeline is strictly sequential: options are stripped, the
/// sample is split into virtual files, each file is registered with
/// the engine before it is queried, and every recorded position is
/// re-expressed in the coordinates of the final code string.
pub fn render(
    code: &str,
    extension: &str,
    engine: &mut dyn AnalysisEngine,
) -> Result<RenderResult> {
    validate::check_sample(code)?;
    log::debug!("Rendering .{extension} sample ({} bytes)", code.len());

    let lines = sample_lines(code);
    let (lines, handbook) = resolve_handbook_options(lines);
    let (lines, config) = resolve_engine_config(lines, engine.option_schema())?;
    engine.configure(&config);

    let default_name = format!("index.{extension}");
    let splits = split_files(&lines.join("\n"), &default_name);
    log::debug!("Sample declares {} virtual file(s)", splits.len());

    // Register each file twice: raw content first, then directive-free
    // content, so the engine's view never contains directive noise when
    // it answers queries.
    let mut registry = FileRegistry::new();
    let mut annotations = Vec::with_capacity(splits.len());
    for split in &splits {
        let version = registry.upsert(&split.name, &split.content).version;
        engine.update_document(&split.name, &split.content, version);

        let extraction = strip_markup(sample_lines(&split.content));
        let stripped = extraction.stripped();
        let version = registry.upsert(&split.name, &stripped).version;
        engine.update_document(&split.name, &stripped, version);

        let queries = extraction
            .queries
            .into_iter()
            .map(|q| {
                let resolved = engine
                    .quick_info_at(&split.name, q.position)
                    .filter(|info| !info.text.is_empty());
                match resolved {
                    Some(info) => ResolvedQuery {
                        position: q.position,
                        offset: q.offset,
                        source_line: q.source_line,
                        text: Some(info.text),
                        docs: info.docs,
                    },
                    None => ResolvedQuery {
                        position: q.position,
                        offset: q.offset,
                        source_line: q.source_line,
                        text: Some(format!(
                            "Could not resolve the symbol at this position (near `{}`)",
                            text::string_around(&stripped, q.position)
                        )),
                        docs: None,
                    },
                }
            })
            .collect();

        annotations.push(FileAnnotations {
            file: split.name.clone(),
            highlights: extraction.highlights,
            queries,
        });
    }

    // File-relative positions -> combined-buffer coordinates, using the
    // start offsets the registry carries from declaration order.
    let mut highlights: Vec<Highlight> = Vec::new();
    let mut queries: Vec<Query> = Vec::new();
    for annotation in annotations {
        let Some(base) = registry.start_offset(&annotation.file) else {
            continue;
        };
        for mut highlight in annotation.highlights {
            highlight.position += base;
            highlights.push(highlight);
        }
        for query in annotation.queries {
            queries.push(Query {
                position: query.position + base,
                offset: query.offset,
                source_line: query.source_line,
                text: query.text,
                docs: query.docs,
            });
        }
    }

    let names: Vec<String> = registry.iter().map(|file| file.name.clone()).collect();

    let mut diagnostics: Vec<DraftDiagnostic> = Vec::new();
    if !handbook.no_errors {
        for name in &names {
            let raw = engine
                .semantic_diagnostics(name)
                .into_iter()
                .chain(engine.syntactic_diagnostics(name));
            for diag in raw {
                // Ambient/library files are not part of this sample.
                let declared = match &diag.file {
                    Some(file) => registry.contains(file),
                    None => true,
                };
                if !declared {
                    log::debug!("Dropping diagnostic {} from undeclared file", diag.code);
                    continue;
                }
                let position = match (&diag.file, diag.start) {
                    (Some(file), Some(start)) => {
                        registry.start_offset(file).map(|base| base + start)
                    }
                    _ => None,
                };
                diagnostics.push(DraftDiagnostic {
                    code: diag.code,
                    category: diag.category,
                    rendered_message: text::escape_html(&text::flatten_message(&diag.message)),
                    position,
                    length: diag.length,
                });
            }
        }
        log::debug!("Collected {} diagnostic(s)", diagnostics.len());
    }

    if !handbook.no_error_validation {
        let found: Vec<(u32, String)> = diagnostics
            .iter()
            .map(|diag| (diag.code, diag.rendered_message.clone()))
            .collect();
        validate::check_expected_diagnostics(&found, &handbook.errors)?;
    }

    let mut quick_infos: Vec<DraftQuickInfo> = Vec::new();
    if !handbook.no_static_semantic_info {
        for name in &names {
            let Some(base) = registry.start_offset(name) else {
                continue;
            };
            for span in engine.identifier_spans(name) {
                let Some(info) = engine.quick_info_at(name, span.start) else {
                    continue;
                };
                if info.text.is_empty() {
                    continue;
                }
                quick_infos.push(DraftQuickInfo {
                    text: info.text,
                    docs: info.docs,
                    position: base + span.start,
                    length: span.length,
                });
            }
        }
    }

    let mut final_code = registry.combined_code();
    let mut final_extension = extension.to_string();

    if handbook.show_emit {
        let outputs = engine.emit_output(&default_name);
        let wanted = &handbook.show_emitted_file;
        match outputs.iter().find(|output| output.name == *wanted) {
            Some(output) => {
                log::debug!("Substituting emitted output {}", output.name);
                final_code = output.text.clone();
                final_extension = output.extension().to_string();
                // Source-coordinate records do not correspond across a
                // compilation boundary.
                highlights.clear();
                queries.clear();
                quick_infos.clear();
            }
            None => {
                let available = if outputs.is_empty() {
                    "none".to_string()
                } else {
                    outputs
                        .iter()
                        .map(|output| output.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                return Err(RenderError::MissingEmittedFile {
                    requested: wanted.clone(),
                    available,
                });
            }
        }
    }

    if let Some(cut) = find_cut(&final_code) {
        log::debug!("Truncating visible code at byte {cut}");
        final_code = final_code[cut..].to_string();
        highlights = highlights
            .into_iter()
            .filter_map(|mut highlight| {
                highlight.position = shift_position(highlight.position, cut)?;
                Some(highlight)
            })
            .collect();
        queries = queries
            .into_iter()
            .filter_map(|mut query| {
                query.position = shift_position(query.position, cut)?;
                Some(query)
            })
            .collect();
        quick_infos = quick_infos
            .into_iter()
            .filter_map(|mut info| {
                info.position = shift_position(info.position, cut)?;
                Some(info)
            })
            .collect();
        diagnostics = diagnostics
            .into_iter()
            .filter_map(|mut diag| {
                if let Some(position) = diag.position {
                    diag.position = Some(shift_position(position, cut)?);
                }
                Some(diag)
            })
            .collect();
    }

    // Line/character pairs are only meaningful against the final code,
    // so they are computed after emit substitution and truncation.
    let static_quick_infos = quick_infos
        .into_iter()
        .map(|info| {
            let (line, character) = line_character(&final_code, info.position);
            StaticQuickInfo {
                text: info.text,
                docs: info.docs,
                position: info.position,
                length: info.length,
                line,
                character,
            }
        })
        .collect();

    let errors = diagnostics
        .into_iter()
        .map(|diag| {
            let located = diag.position.map(|p| line_character(&final_code, p));
            RenderedDiagnostic {
                id: RenderedDiagnostic::make_id(diag.code, diag.position, diag.length),
                rendered_message: diag.rendered_message,
                category: diag.category,
                code: diag.code,
                position: diag.position,
                length: diag.length,
                line: located.map(|lc| lc.0),
                character: located.map(|lc| lc.1),
            }
        })
        .collect();

    Ok(RenderResult {
        code: final_code,
        extension: final_extension,
        highlights,
        static_quick_infos,
        queries,
        errors,
        playground_url: playground::share_url(code),
    })
}
