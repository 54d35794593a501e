use std::path::Path;
use crate::config::constants::{DEFAULT_LANGUAGE, SUPPORTED_FILE_EXTENSIONS};

/// Keyword markers per language. A language wins when it has the most hits;
/// earlier rows win ties, so more specific languages come first.
const CONTENT_MARKERS: &[(&str, &[&str])] = &[
    ("typescript", &["interface ", ": string", ": number", ": boolean", "implements ", "readonly ", "enum "]),
    ("rust", &["fn ", "let mut ", "impl ", "pub fn", "use std::", "::new(", "match ", "-> "]),
    ("python", &["def ", "import ", "elif ", "self.", "print(", "__name__", "None", "lambda "]),
    ("java", &["public class ", "public static void main", "System.out.", "private ", "import java.", "@Override"]),
    ("go", &["package main", "func ", ":= ", "fmt.", "import (", "go func"]),
    ("php", &["<?php", "$this->", "echo ", "function ", "->", "namespace "]),
    ("ruby", &["def ", "end\n", "puts ", "require '", "attr_accessor", ".each do"]),
    ("cpp", &["#include <iostream>", "std::", "cout <<", "template<", "namespace ", "nullptr"]),
    ("c", &["#include <stdio.h>", "printf(", "malloc(", "int main(", "#include <stdlib.h>", "->"]),
    ("javascript", &["function ", "const ", "let ", "=> ", "console.log", "require(", "document."]),
];

pub struct LanguageDetector;

impl LanguageDetector {
    pub fn from_path(path: &Path) -> Option<&'static str> {
        let extension = path.extension()?.to_str()?.to_lowercase();

        SUPPORTED_FILE_EXTENSIONS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, language)| *language)
    }

    pub fn from_content(code: &str) -> &'static str {
        let mut best = (DEFAULT_LANGUAGE, 0);

        for (language, markers) in CONTENT_MARKERS {
            let hits = markers.iter().filter(|marker| code.contains(*marker)).count();
            if hits > best.1 {
                best = (*language, hits);
            }
        }

        best.0
    }

    /// Extension first, content heuristics otherwise.
    pub fn detect(path: &Path, code: &str) -> &'static str {
        Self::from_path(path).unwrap_or_else(|| Self::from_content(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_map_to_languages() {
        assert_eq!(LanguageDetector::from_path(Path::new("src/main.rs")), Some("rust"));
        assert_eq!(LanguageDetector::from_path(Path::new("App.TSX")), Some("typescript"));
        assert_eq!(LanguageDetector::from_path(Path::new("README")), None);
        assert_eq!(LanguageDetector::from_path(Path::new("notes.txt")), None);
    }

    #[test]
    fn content_heuristics_pick_the_dominant_language() {
        assert_eq!(LanguageDetector::from_content("def greet(name):\n    print(name)\n\nif __name__ == '__main__':\n    greet(None)"), "python");
        assert_eq!(LanguageDetector::from_content("fn main() {\n    let mut v = Vec::new();\n    v.push(1);\n}"), "rust");
        assert_eq!(LanguageDetector::from_content("package main\n\nimport (\n\t\"fmt\"\n)\n\nfunc main() {\n\tx := 1\n\tfmt.Println(x)\n}"), "go");
        assert_eq!(LanguageDetector::from_content("const add = (a, b) => a + b;\nconsole.log(add(1, 2));"), "javascript");
    }

    #[test]
    fn unknown_content_falls_back_to_text() {
        assert_eq!(LanguageDetector::from_content("just some words"), "text");
        assert_eq!(LanguageDetector::detect(Path::new("snippet"), ""), "text");
    }
}
