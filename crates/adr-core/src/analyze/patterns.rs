//! File-layout categories and design-pattern hints.

use super::glob_any;
use crate::error::Result;
use serde::Serialize;
use std::path::Path;

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "database",
        &[
            "**/*.sql",
            "**/migrations/**/*",
            "**/database/**/*",
            "**/db/**/*",
            "**/*model*.py",
        ],
    ),
    (
        "api",
        &[
            "**/api/**/*",
            "**/routes/**/*",
            "**/controllers/**/*",
            "**/*router*.*",
            "**/*endpoint*.*",
            "**/swagger/**/*",
        ],
    ),
    (
        "config",
        &[
            "**/config/**/*",
            "**/.env*",
            "**/*.env",
            "**/settings/**/*",
            "**/*config*.py",
            "**/properties/**/*",
        ],
    ),
    (
        "infrastructure",
        &[
            "**/docker*",
            "**/Dockerfile*",
            "**/k8s/**/*",
            "**/helm/**/*",
            "**/terraform/**/*",
            "**/cloudformation/**/*",
        ],
    ),
    (
        "authentication",
        &[
            "**/auth/**/*",
            "**/security/**/*",
            "**/*auth*.*",
            "**/*login*.*",
            "**/*token*.*",
        ],
    ),
];

const DESIGN_PATTERNS: &[(&str, &str, &[&str])] = &[
    (
        "MVC",
        "Model-View-Controller pattern separating data, presentation, and logic",
        &["**/models/**/*", "**/views/**/*", "**/controllers/**/*"],
    ),
    (
        "Repository",
        "Repository pattern abstracting data access logic",
        &["**/repositories/**/*", "**/*repository*.*"],
    ),
    (
        "Factory",
        "Factory pattern for object creation with loose coupling",
        &["**/*factory*.*", "**/factories/**/*"],
    ),
    (
        "Observer",
        "Observer pattern for event-driven communication",
        &["**/*observer*.*", "**/*event*.*", "**/*listener*.*"],
    ),
    (
        "Singleton",
        "Singleton pattern ensuring single instance of a class",
        &["**/*singleton*.*"],
    ),
    (
        "Strategy",
        "Strategy pattern for algorithm selection and interchangeability",
        &["**/*strategy*.*", "**/strategies/**/*"],
    ),
    (
        "Adapter",
        "Adapter pattern for interface compatibility",
        &["**/*adapter*.*", "**/adapters/**/*"],
    ),
    (
        "Proxy",
        "Proxy pattern for controlled access to objects",
        &["**/*proxy*.*", "**/proxies/**/*"],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCategory {
    pub category: String,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignPattern {
    pub pattern: String,
    pub files: Vec<String>,
    pub description: String,
}

/// Files grouped by architectural concern. Every category is present, possibly empty.
pub fn analyze_file_patterns(root: &Path) -> Result<Vec<FileCategory>> {
    CATEGORIES
        .iter()
        .map(|(category, globs)| {
            Ok(FileCategory {
                category: category.to_string(),
                files: glob_any(root, globs)?,
            })
        })
        .collect()
}

/// Design patterns suggested by file and directory names. Patterns with no
/// matching files are omitted.
pub fn extract_design_patterns(root: &Path) -> Result<Vec<DesignPattern>> {
    let mut found = Vec::new();
    for (pattern, description, globs) in DESIGN_PATTERNS {
        let files = glob_any(root, globs)?;
        if files.is_empty() {
            continue;
        }
        found.push(DesignPattern {
            pattern: pattern.to_string(),
            files,
            description: description.to_string(),
        });
    }
    Ok(found)
}
