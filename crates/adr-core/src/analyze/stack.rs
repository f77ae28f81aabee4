//! Technology stack detection from file indicators.

use super::{glob_files, push_unique};
use crate::error::Result;
use serde::Serialize;
use std::path::Path;

type Indicators = &'static [(&'static str, &'static [&'static str])];

const LANGUAGES: Indicators = &[
    ("Python", &["**/*.py", "requirements*.txt", "setup.py", "pyproject.toml"]),
    ("JavaScript", &["**/*.js", "**/*.ts", "package*.json", "tsconfig.json"]),
    ("Java", &["**/*.java", "pom.xml", "build.gradle"]),
    ("Go", &["**/*.go", "go.mod", "go.sum"]),
    ("Ruby", &["**/*.rb", "Gemfile", "*.gemspec"]),
    ("C#", &["**/*.cs", "*.csproj", "*.sln"]),
    ("PHP", &["**/*.php", "composer.json"]),
    ("Rust", &["**/*.rs", "Cargo.toml"]),
];

const FRAMEWORKS: Indicators = &[
    ("Django", &["**/settings.py", "**/urls.py", "**/wsgi.py"]),
    ("Flask", &["app.py", "wsgi.py"]),
    ("Spring", &["**/application.properties", "**/spring-*.xml"]),
    ("Express", &["**/express*.js", "**/app.js"]),
    ("React", &["**/*.jsx", "**/*.tsx"]),
    ("Angular", &["**/angular.json", "**/app.module.ts"]),
    ("Vue", &["**/vue.config.js", "**/*.vue"]),
];

const BUILD_TOOLS: Indicators = &[
    ("Make", &["Makefile", "**/Makefile"]),
    ("CMake", &["**/CMakeLists.txt"]),
    ("Maven", &["**/pom.xml"]),
    ("Gradle", &["**/build.gradle", "**/build.gradle.kts"]),
    ("Cargo", &["**/Cargo.toml"]),
    ("Bazel", &["WORKSPACE", "**/BUILD.bazel"]),
    ("Webpack", &["**/webpack.config.*"]),
    ("Vite", &["**/vite.config.*"]),
];

const PACKAGE_MANAGERS: Indicators = &[
    ("pip", &["**/requirements*.txt"]),
    ("Poetry", &["**/poetry.lock"]),
    ("npm", &["**/package-lock.json"]),
    ("Yarn", &["**/yarn.lock"]),
    ("pnpm", &["**/pnpm-lock.yaml"]),
    ("Cargo", &["**/Cargo.lock"]),
    ("Go modules", &["**/go.mod"]),
    ("Bundler", &["**/Gemfile"]),
    ("Composer", &["**/composer.json"]),
];

/// Database name → substrings searched for in dependency manifests.
const DATABASES: Indicators = &[
    ("PostgreSQL", &["postgresql", "postgres", "psycopg2"]),
    ("MySQL", &["mysql", "mysqldb", "pymysql"]),
    ("MongoDB", &["mongodb", "pymongo", "mongoose"]),
    ("Redis", &["redis", "predis"]),
    ("SQLite", &["sqlite3", "sqlite"]),
];

const MANIFESTS: [&str; 3] = ["**/requirements*.txt", "**/package.json", "**/Cargo.toml"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechStack {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub build_tools: Vec<String>,
    pub package_managers: Vec<String>,
}

impl TechStack {
    /// Labelled categories in display order.
    pub fn categories(&self) -> [(&'static str, &[String]); 5] {
        [
            ("Languages", &self.languages),
            ("Frameworks", &self.frameworks),
            ("Databases", &self.databases),
            ("Build Tools", &self.build_tools),
            ("Package Managers", &self.package_managers),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.categories().iter().all(|(_, items)| items.is_empty())
    }
}

pub fn detect_stack(root: &Path) -> Result<TechStack> {
    let stack = TechStack {
        languages: detect(root, LANGUAGES)?,
        frameworks: detect(root, FRAMEWORKS)?,
        databases: detect_databases(root)?,
        build_tools: detect(root, BUILD_TOOLS)?,
        package_managers: detect(root, PACKAGE_MANAGERS)?,
    };
    tracing::debug!(root = %root.display(), ?stack, "detected stack");
    Ok(stack)
}

/// Names whose indicator globs match at least one file.
fn detect(root: &Path, table: Indicators) -> Result<Vec<String>> {
    let mut found = Vec::new();
    for (name, patterns) in table {
        for pattern in *patterns {
            if !glob_files(root, pattern)?.is_empty() {
                push_unique(&mut found, name);
                break;
            }
        }
    }
    Ok(found)
}

fn detect_databases(root: &Path) -> Result<Vec<String>> {
    let mut manifests = Vec::new();
    for pattern in MANIFESTS {
        for rel in glob_files(root, pattern)? {
            match std::fs::read_to_string(root.join(&rel)) {
                Ok(text) => manifests.push(text.to_lowercase()),
                Err(e) => tracing::debug!(file = %rel, error = %e, "skipping manifest"),
            }
        }
    }

    let mut found = Vec::new();
    for (name, needles) in DATABASES {
        if needles
            .iter()
            .any(|n| manifests.iter().any(|text| text.contains(n)))
        {
            push_unique(&mut found, name);
        }
    }
    Ok(found)
}
