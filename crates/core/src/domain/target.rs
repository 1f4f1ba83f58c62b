/// A language/version pair supported by the remote execution service,
/// identified by the integer id the service assigns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExecutionTarget {
    pub id: u32,
    pub name: &'static str,
    /// Identifier understood by the editor widget for syntax mode.
    pub editor_language: &'static str,
}

const TARGETS: &[ExecutionTarget] = &[
    ExecutionTarget {
        id: 50,
        name: "C (GCC 9.2.0)",
        editor_language: "c",
    },
    ExecutionTarget {
        id: 54,
        name: "C++ (GCC 9.2.0)",
        editor_language: "cpp",
    },
    ExecutionTarget {
        id: 51,
        name: "C# (Mono 6.6.0.161)",
        editor_language: "csharp",
    },
    ExecutionTarget {
        id: 60,
        name: "Go (1.13.5)",
        editor_language: "go",
    },
    ExecutionTarget {
        id: 62,
        name: "Java (OpenJDK 13.0.1)",
        editor_language: "java",
    },
    ExecutionTarget {
        id: 63,
        name: "JavaScript (Node.js 12.14.0)",
        editor_language: "javascript",
    },
    ExecutionTarget {
        id: 78,
        name: "Kotlin (1.3.70)",
        editor_language: "kotlin",
    },
    ExecutionTarget {
        id: 68,
        name: "PHP (7.4.1)",
        editor_language: "php",
    },
    ExecutionTarget {
        id: 71,
        name: "Python (3.8.1)",
        editor_language: "python",
    },
    ExecutionTarget {
        id: 72,
        name: "Ruby (2.7.0)",
        editor_language: "ruby",
    },
    ExecutionTarget {
        id: 73,
        name: "Rust (1.40.0)",
        editor_language: "rust",
    },
    ExecutionTarget {
        id: 82,
        name: "SQL (SQLite 3.27.2)",
        editor_language: "sql",
    },
    ExecutionTarget {
        id: 83,
        name: "Swift (5.2.3)",
        editor_language: "swift",
    },
    ExecutionTarget {
        id: 74,
        name: "TypeScript (3.7.4)",
        editor_language: "typescript",
    },
];

/// The fixed catalog of supported execution targets.
pub fn targets() -> &'static [ExecutionTarget] {
    TARGETS
}

pub fn find_target(id: u32) -> Option<&'static ExecutionTarget> {
    TARGETS.iter().find(|target| target.id == id)
}

/// The target selected before the user picks one: JavaScript.
pub fn default_target() -> &'static ExecutionTarget {
    find_target(63).unwrap_or(&TARGETS[0])
}
