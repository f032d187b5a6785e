//! Problem statement panel

use std::fmt::Write;

use crate::catalog::Problem;

/// Title, difficulty, description, samples and constraints as plain text
pub fn render_problem(problem: &Problem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}. {}", problem.id, problem.title);
    let _ = writeln!(out, "{}", problem.difficulty);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", problem.description);

    if !problem.examples.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Sample Test Cases");
        for (i, example) in problem.examples.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Example {}:", i + 1);
            let _ = writeln!(out, "Input: {}", example.input);
            let _ = writeln!(out, "Output: {}", example.output);
            if let Some(explanation) = &example.explanation {
                let _ = writeln!(out, "Explanation: {}", explanation);
            }
        }
    }

    if !problem.constraints.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Constraints");
        for constraint in &problem.constraints {
            let _ = writeln!(out, "  - {}", constraint);
        }
    }
    out
}
