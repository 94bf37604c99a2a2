//! Instruction prompts for screenshot-to-code generation.
//!
//! Centralising every prompt here serves two purposes:
//!
//! 1. **Single source of truth** — tweaking a framework's code conventions
//!    requires editing exactly one place.
//!
//! 2. **Testability** — unit tests can inspect prompts directly without
//!    calling a real VLM, making prompt regressions easy to catch.
//!
//! The three templates differ only in framework conventions; all share the
//! same output contract with the model: return only source code, no prose,
//! no markdown fencing. Models do not always comply with the no-fencing
//! rule, which is why [`crate::pipeline::normalize`] exists.

use crate::request::Framework;

/// Instruction for a React functional component with Tailwind styling.
pub const REACT_PROMPT: &str = r#"You are an expert React developer. Analyze this UI screenshot and generate a production-ready React component.

REQUIREMENTS:
- Use functional components with hooks
- Include proper TypeScript types
- Use Tailwind CSS for styling (utility classes only)
- Make it responsive (mobile-first approach)
- Use semantic HTML elements
- Include proper accessibility attributes
- Add helpful comments for complex logic
- Follow React best practices

OUTPUT FORMAT:
- Return ONLY the component code, no explanations
- Start with imports
- Export as default
- Use descriptive variable/component names
- Keep it clean and maintainable

Generate the React component now:"#;

/// Instruction for a Vue 3 single-file component with `<script setup>`.
pub const VUE_PROMPT: &str = r#"You are an expert Vue developer. Analyze this UI screenshot and generate a production-ready Vue 3 component.

REQUIREMENTS:
- Use Vue 3 Composition API with <script setup>
- Include proper TypeScript types
- Use Tailwind CSS for styling (utility classes only)
- Make it responsive (mobile-first approach)
- Use semantic HTML elements
- Include proper accessibility attributes
- Follow Vue 3 best practices

OUTPUT FORMAT:
- Return ONLY the component code, no explanations
- Use proper SFC structure (template, script, style)
- Use descriptive variable/component names
- Keep it clean and maintainable

Generate the Vue component now:"#;

/// Instruction for semantic HTML5 with the Tailwind CDN.
pub const HTML_PROMPT: &str = r#"You are an expert frontend developer. Analyze this UI screenshot and generate production-ready HTML with Tailwind CSS.

REQUIREMENTS:
- Use semantic HTML5 elements
- Use Tailwind CSS for styling (utility classes only)
- Make it responsive (mobile-first approach)
- Include proper accessibility attributes
- Add meta viewport for mobile
- Keep markup clean and organized
- Include helpful comments

OUTPUT FORMAT:
- Return ONLY the HTML code, no explanations
- Include necessary Tailwind CDN link in head
- Use proper document structure
- Keep it clean and maintainable

Generate the HTML now:"#;

/// Look up the instruction template for a framework.
///
/// Pure and infallible: the validator guarantees `framework` is one of the
/// three known values before this is reached.
pub fn instruction_for(framework: Framework) -> &'static str {
    match framework {
        Framework::React => REACT_PROMPT,
        Framework::Vue => VUE_PROMPT,
        Framework::Html => HTML_PROMPT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_framework_has_a_prompt() {
        for fw in Framework::ALL {
            assert!(!instruction_for(fw).is_empty());
        }
    }

    #[test]
    fn prompts_are_distinct() {
        assert_ne!(REACT_PROMPT, VUE_PROMPT);
        assert_ne!(VUE_PROMPT, HTML_PROMPT);
        assert_ne!(REACT_PROMPT, HTML_PROMPT);
    }

    #[test]
    fn prompts_forbid_explanations() {
        // The shared output contract: code only, no prose.
        for fw in Framework::ALL {
            assert!(
                instruction_for(fw).contains("no explanations"),
                "{fw} prompt dropped the no-explanations rule"
            );
        }
    }

    #[test]
    fn prompts_match_their_framework() {
        assert!(REACT_PROMPT.contains("functional components"));
        assert!(VUE_PROMPT.contains("<script setup>"));
        assert!(HTML_PROMPT.contains("Tailwind CDN"));
    }
}
