#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz frontmatter splitting and YAML decoding.
///
/// Malformed input must surface as an error, never a panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = agent_grader::parsers::split_frontmatter(s);
        let _ = agent_grader::parsers::parse_markdown(s);
        let _ = agent_grader::parsers::parse_manifest(s);
    }
});
