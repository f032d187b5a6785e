//! Prompt sent to the evaluation model

use crate::catalog::TestCase;

use super::EvaluationRequest;

/// One `Test Case i: Input: …, Expected Output: …` line per sample, 1-based
pub fn format_test_cases(cases: &[TestCase]) -> String {
    cases
        .iter()
        .enumerate()
        .map(|(i, tc)| {
            format!(
                "Test Case {}: Input: {}, Expected Output: {}",
                i + 1,
                tc.input,
                tc.output
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(request: &EvaluationRequest) -> String {
    let language = request.language.id();
    format!(
        "You are a code execution engine.\n\
         Problem: {title}\n\
         Description: {description}\n\
         Language: {language}\n\
         \n\
         The user has submitted the following code:\n\
         ```{language}\n\
         {code}\n\
         ```\n\
         \n\
         You need to simulate the execution of this code against the following test cases:\n\
         {cases}\n\
         \n\
         Perform the following:\n\
         1. Analyze the code for syntax errors.\n\
         2. If there are syntax errors, return status \"Error\" and the error message.\n\
         3. If valid, simulate execution for each test case.\n\
         4. Determine if the output matches the expected output strictly.\n\
         5. Estimate execution time (mock reasonable values based on complexity).\n\
         \n\
         Return a strictly formatted JSON object.\n",
        title = request.title,
        description = request.description,
        code = request.code,
        cases = format_test_cases(&request.test_cases),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::syntax::Language;

    #[test]
    fn test_case_lines() {
        let cases = vec![
            TestCase {
                input: "s = \"abcabcbb\"".into(),
                output: "3".into(),
                explanation: None,
            },
            TestCase {
                input: "s = \"bbbbb\"".into(),
                output: "1".into(),
                explanation: Some("ignored".into()),
            },
        ];
        assert_eq!(
            format_test_cases(&cases),
            "Test Case 1: Input: s = \"abcabcbb\", Expected Output: 3\n\
             Test Case 2: Input: s = \"bbbbb\", Expected Output: 1"
        );
    }

    #[test]
    fn test_prompt_embeds_submission() {
        let catalog = Catalog::builtin().unwrap();
        let request = EvaluationRequest::new("int x;", Language::Cpp, catalog.first());
        let prompt = build_prompt(&request);

        assert!(prompt.contains("Problem: Two Sum\n"));
        assert!(prompt.contains("Language: cpp\n"));
        assert!(prompt.contains("```cpp\nint x;\n```"));
        assert!(prompt.contains("Test Case 2: Input: nums = [3,2,4], target = 6, Expected Output: [1,2]"));
    }
}
