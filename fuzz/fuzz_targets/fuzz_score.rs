#![no_main]
use agent_grader::model::DocumentKind;
use libfuzzer_sys::fuzz_target;

/// Fuzz every scorer with arbitrary documents.
///
/// Checks the score invariants: the overall score is the sum of the
/// categories and never exceeds 100.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    for kind in DocumentKind::ALL {
        if let Ok(doc) = agent_grader::parsers::parse_content(kind, s) {
            let score = doc.score();
            assert!(score.overall <= 100);
            assert_eq!(
                score.overall,
                score.structural + score.practices + score.composition + score.documentation
            );
        }
    }
});
