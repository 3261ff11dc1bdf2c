//! Fixed skill vocabulary for the resume field extractor.
//!
//! Matching is plain substring membership against lowercased text, so every
//! entry here must be lowercase. Matched terms are emitted title-cased.

/// Recognized skill keywords: languages, frameworks, data stores, cloud
/// platforms, and practices.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "ci/cd",
    "agile",
    "scrum",
    "machine learning",
    "deep learning",
    "data analysis",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "html",
    "css",
    "sass",
    "tailwind",
    "bootstrap",
    "rest api",
    "graphql",
    "microservices",
    "system design",
    "algorithms",
    "data structures",
];

/// Title-cases a vocabulary term for presentation: the first letter of each
/// alphabetic run is uppercased, the rest lowercased ("machine learning" ->
/// "Machine Learning", "node.js" -> "Node.Js").
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut in_word = false;
    for ch in term.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("python"), "Python");
    }

    #[test]
    fn test_title_case_multi_word() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
    }

    #[test]
    fn test_title_case_restarts_after_punctuation() {
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
    }

    #[test]
    fn test_vocabulary_is_lowercase() {
        for term in SKILL_VOCABULARY {
            assert_eq!(*term, term.to_lowercase(), "vocabulary term must be lowercase: {term}");
        }
    }
}
