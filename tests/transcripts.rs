use std::fs;

use calcalyzer::{calculator::session::Session, terminal::ScriptedReader};
use walkdir::WalkDir;

#[test]
fn recorded_transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/transcripts").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let inputs = extract_blocks(&content, "input");
        let outputs = extract_blocks(&content, "output");
        assert_eq!(inputs.len(), outputs.len(), "Unpaired blocks in {path:?}");

        for (i, (input, expected)) in inputs.into_iter().zip(outputs).enumerate() {
            count += 1;

            let mut session = Session::new(ScriptedReader::new(input), Vec::<String>::new());
            if let Err(e) = session.run() {
                panic!("Transcript {} in {:?} failed: {e}", i + 1, path);
            }

            let (reader, output) = session.into_parts();
            assert_eq!(reader.remaining(), 0, "Unused input in transcript {} of {path:?}", i + 1);
            assert_eq!(output, expected, "Transcript {} in {:?} differs", i + 1, path);
        }
    }

    assert!(count > 0, "No transcripts found in tests/transcripts");
}

fn extract_blocks(content: &str, kind: &str) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if !inside && trimmed.strip_prefix("```") == Some(kind) {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push(line.to_string());
        }
    }

    blocks
}
