//! Component record types.
//!
//! A component record is the registry's unit of installation: a named,
//! versionless bundle of source files plus its declared component-level
//! and npm-level dependencies.

use serde::{Deserialize, Serialize};

/// One installable component as published in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    /// Unique registry key
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Names of other components this one requires, in declared order
    #[serde(default)]
    pub component_dependencies: Vec<String>,

    /// npm package specifiers, optionally pinned as `name@version`
    #[serde(default)]
    pub npm_dependencies: Vec<String>,

    /// Source files; exactly one should carry `FileKind::Component`
    pub files: Vec<ComponentFile>,

    /// Separate utility files, installed into the project's utils directory
    #[serde(default)]
    pub utils: Vec<ComponentFile>,

    /// Usage snippets for documentation display
    #[serde(default)]
    pub examples: Vec<String>,
}

/// A single file inside a component record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFile {
    /// Path relative to the target directory
    pub relative_path: String,

    /// Full source text
    pub content: String,

    /// Role of this file within the component
    pub file_type: FileKind,
}

/// Role of a file within a component record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// The primary component source file
    Component,
    /// Shared helper code
    Utility,
    /// Anything else shipped alongside (styles, stories, types)
    Other,
}

impl ComponentRecord {
    /// The primary file, i.e. the first entry tagged `FileKind::Component`
    pub fn primary_file(&self) -> Option<&ComponentFile> {
        self.files
            .iter()
            .find(|f| matches!(f.file_type, FileKind::Component))
    }

    /// All files other than the primary one, in declared order
    pub fn auxiliary_files(&self) -> impl Iterator<Item = &ComponentFile> {
        let primary = self.primary_file().map(|f| f.relative_path.clone());
        self.files
            .iter()
            .filter(move |f| Some(&f.relative_path) != primary.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_files(files: Vec<ComponentFile>) -> ComponentRecord {
        ComponentRecord {
            name: "button".to_string(),
            description: "A button".to_string(),
            component_dependencies: Vec::new(),
            npm_dependencies: Vec::new(),
            files,
            utils: Vec::new(),
            examples: Vec::new(),
        }
    }

    fn file(path: &str, kind: FileKind) -> ComponentFile {
        ComponentFile {
            relative_path: path.to_string(),
            content: String::new(),
            file_type: kind,
        }
    }

    #[test]
    fn test_primary_file_selection() {
        let record = record_with_files(vec![
            file("button.types.ts", FileKind::Other),
            file("button.tsx", FileKind::Component),
        ]);
        assert_eq!(
            record.primary_file().unwrap().relative_path,
            "button.tsx"
        );
    }

    #[test]
    fn test_auxiliary_files_exclude_primary() {
        let record = record_with_files(vec![
            file("button.tsx", FileKind::Component),
            file("button.css", FileKind::Other),
        ]);
        let aux: Vec<_> = record
            .auxiliary_files()
            .map(|f| f.relative_path.as_str())
            .collect();
        assert_eq!(aux, vec!["button.css"]);
    }

    #[test]
    fn test_wire_format_round_trip() {
        let json = r#"{
            "name": "card",
            "description": "A card",
            "componentDependencies": ["button"],
            "npmDependencies": ["clsx@2.0.0"],
            "files": [
                {"relativePath": "card.tsx", "content": "export {}", "fileType": "component"}
            ]
        }"#;

        let record: ComponentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.component_dependencies, vec!["button"]);
        assert_eq!(record.files[0].file_type, FileKind::Component);
        assert!(record.utils.is_empty());
    }
}
