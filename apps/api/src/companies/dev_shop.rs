//! The Dev Shop: code, bug fixes, tests, reviews, docs.
//!
//! Tone is not a template placeholder here; "casual" and "technical" append a
//! register instruction instead.

use crate::companies::{Company, CompanyId, JobTemplate};

pub const SYSTEM_PROMPT: &str = "You are The Dev Shop — TechCrossIT's elite AI development team.
You write clean, production-ready code with proper error handling, type hints, comments, and tests.
Always output fully working, runnable code — never placeholders or pseudocode.
Use Python 3.11+ conventions unless the client specifies another language.
Format all code output inside markdown code blocks with the correct language tag.
Be concise but complete: every function must be usable without modification.";

const TONE_SUFFIXES: &[(&str, &str)] = &[
    (
        "casual",
        "Keep comments conversational — this is an internal team project.",
    ),
    (
        "technical",
        "Maximise technical depth — the audience are senior engineers.",
    ),
];

const BUILD_API_ENDPOINT: &str = "Build a complete, production-ready REST API endpoint based on the following brief.
Include: route definition, request/response Pydantic models, validation, error handling, docstring, and example curl command.
Use FastAPI.
Brief: {{brief}}
Context: {{context}}";

const FIX_BUG: &str = "Debug and fix the following code issue completely.
Steps:
1. Identify the root cause (explain clearly in 2-3 sentences)
2. Provide the corrected code
3. Explain what changed and why
4. Add a unit test that proves the fix works

Brief / code to fix: {{brief}}
Context: {{context}}";

const WRITE_TESTS: &str = "Write a comprehensive test suite for the following code or feature.
Include: unit tests, edge cases, error cases, and at least one integration test.
Use pytest. Mock external dependencies. Aim for 90%+ coverage.
Code / feature to test: {{brief}}
Context: {{context}}";

const CODE_REVIEW: &str = "Perform a thorough code review of the following code.
Cover: correctness, security, performance, readability, naming, error handling, and test coverage.
Format as:
- CRITICAL issues (must fix before shipping)
- WARNINGS (should fix)
- SUGGESTIONS (nice to have)
- APPROVED checks (things done well)
Code to review: {{brief}}
Context: {{context}}";

const WRITE_DOCS: &str = "Write clear, professional documentation for the following code or project.
Include: overview, installation/setup, usage examples, API reference (if applicable), and FAQ.
Use Markdown. Assume the reader is a developer but not familiar with the codebase.
Code / project to document: {{brief}}
Context: {{context}}";

const BUILD_SCRAPER: &str = "Build a complete web scraper for the following requirement.
Include: full Python script using requests + BeautifulSoup (or Playwright if JS rendering needed),
rate limiting, retry logic, output to CSV/JSON, and error handling.
Brief: {{brief}}
Context: {{context}}";

const DESIGN_DB_SCHEMA: &str = "Design an optimal relational database schema for the following requirements.
Provide:
1. Entity-Relationship description
2. Full SQL CREATE TABLE statements with proper types, constraints, indexes, and foreign keys
3. Sample INSERT statements to demonstrate usage
4. Brief explanation of design decisions

Requirements: {{brief}}
Context: {{context}}";

const REFACTOR_CODE: &str = "Refactor and optimise the following code.
Goals: improve readability, performance, and maintainability.
Provide:
1. The refactored code (fully working)
2. A bullet-point changelog of what was improved and why
3. Performance impact estimate if applicable

Code to refactor: {{brief}}
Context: {{context}}";

pub fn company() -> Company {
    Company {
        id: CompanyId::DevShop,
        name: "The Dev Shop",
        tagline: "Code written. Bugs fixed. Apps shipped.",
        description: "Full-stack AI developer team. Give us a brief — we build REST APIs, fix bugs, \
            write tests, review code, and generate documentation. Works with Python, JS, \
            TypeScript, SQL and more.",
        phase: 1,
        icon: "💻",
        colour: "#6366F1",
        price_from: "£0.80 / job",
        system_prompt: SYSTEM_PROMPT,
        default_tone: "professional",
        tone_suffixes: TONE_SUFFIXES,
        jobs: vec![
            JobTemplate::new("build_api_endpoint", "Build API Endpoint", "~90s", BUILD_API_ENDPOINT),
            JobTemplate::new("fix_bug", "Debug & Fix Bug", "~60s", FIX_BUG),
            JobTemplate::new("write_tests", "Write Automated Tests", "~75s", WRITE_TESTS),
            JobTemplate::new("code_review", "Code Review & Audit", "~60s", CODE_REVIEW),
            JobTemplate::new("write_docs", "Write Documentation", "~45s", WRITE_DOCS),
            JobTemplate::new("build_scraper", "Build Web Scraper", "~90s", BUILD_SCRAPER),
            JobTemplate::new("design_db_schema", "Design Database Schema", "~60s", DESIGN_DB_SCHEMA),
            JobTemplate::new("refactor_code", "Refactor & Optimise Code", "~75s", REFACTOR_CODE),
        ],
    }
}
