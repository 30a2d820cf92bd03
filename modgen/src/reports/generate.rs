//! Generate command report data structures.

use std::path::PathBuf;

use modgen::{ArtifactSet, Stack, WriteOutcome, WriteResult};
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from one generation run.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub stack: Stack,

    /// Entity type name, e.g. `OrderItem`.
    pub entity: String,

    /// Number of parsed fields.
    pub field_count: usize,

    /// Generation result (files written or preview).
    #[serde(flatten)]
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug, Serialize)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub files: Vec<WriteOutcome>,
}

impl WrittenResult {
    fn skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.result == WriteResult::Skipped)
            .count()
    }
}

/// Result of a dry-run preview.
#[derive(Debug, Serialize)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: ArtifactSet,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Stack", self.stack.as_str());
        out.key_value(
            "Entity",
            &format!("{} ({} fields)", self.entity, self.field_count),
        );
        out.key_value("Output", &written.output_dir.display().to_string());
        out.newline();

        out.section(&format!("Files ({})", written.files.len()));
        for file in &written.files {
            let path = file.path.display().to_string();
            match file.result {
                WriteResult::Written => out.added_item(&path),
                WriteResult::Skipped => out.skipped_item(&path),
            }
        }

        let skipped = written.skipped();
        if skipped > 0 {
            out.newline();
            out.warning(&format!(
                "{} existing file(s) left untouched (--skip-existing)",
                skipped
            ));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use modgen::{Artifact, ArtifactKind};

    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            stack: Stack::Go,
            entity: "Product".to_string(),
            field_count: 2,
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("out"),
            files: vec![
                WriteOutcome {
                    path: PathBuf::from("out/pkg/database/product.go"),
                    result: WriteResult::Written,
                },
                WriteOutcome {
                    path: PathBuf::from("out/internal/modules/product/init.go"),
                    result: WriteResult::Skipped,
                },
            ],
        }));
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.lines.join("\n"), @r"
        Stack: go
        Entity: Product (2 fields)
        Output: out

        Files (2):
          + out/pkg/database/product.go
          = out/internal/modules/product/init.go

        warning: 1 existing file(s) left untouched (--skip-existing)
        ");
    }

    #[test]
    fn test_render_preview() {
        let files: ArtifactSet = [Artifact::new(
            "src/features/product/index.ts",
            ArtifactKind::Index,
            "export * from './types';",
        )]
        .into_iter()
        .collect();
        let report = report(GenerationResult::Preview(PreviewResult { files }));
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "-- src/features/product/index.ts --",
                "export * from './types';",
                "-- Summary --",
                "1 files would be generated",
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: ArtifactSet::new(),
        }));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["mode"], "preview");
        assert_eq!(json["stack"], "go");
        assert_eq!(json["field_count"], 2);
        assert!(json["files"].as_array().unwrap().is_empty());
    }
}
