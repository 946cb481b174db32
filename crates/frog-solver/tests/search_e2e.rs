//! End-to-end run of the full search with text output captured in memory.

use frog_solver::{search, SolveError, SolverConfig};

fn run_to_text() -> String {
    let mut out = Vec::new();
    search(&SolverConfig::default(), |path| {
        out.extend_from_slice(path.to_string().as_bytes());
        Ok::<(), SolveError>(())
    })
    .expect("search completes");
    String::from_utf8(out).expect("utf-8 output")
}

fn blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in text.lines() {
        if line == "solution path is:" {
            blocks.push(Vec::new());
        } else {
            blocks.last_mut().expect("header before lines").push(line);
        }
    }
    blocks
}

fn kind_pattern(line: &str) -> String {
    line.split(' ')
        .take(7)
        .filter_map(|token| token.chars().next())
        .collect()
}

#[test]
fn test_text_output_blocks() {
    let text = run_to_text();
    let blocks = blocks(&text);
    assert_eq!(blocks.len(), 2);

    for block in &blocks {
        // Root plus fifteen annotated moves
        assert_eq!(block.len(), 16);
        assert_eq!(block[0], "L1 L2 L3 x R3 R2 R1");
        assert!(block[1..].iter().all(|line| line.contains(" (frog '")));
        assert_eq!(kind_pattern(block[15]), "RRRxLLL");
    }
}

#[test]
fn test_first_solution_text() {
    let text = run_to_text();
    let first = &blocks(&text)[0];

    assert_eq!(first[1], "L1 L2 x L3 R3 R2 R1 (frog 'L3' leaps to gap at position 4)");
    assert_eq!(first[2], "L1 L2 R3 L3 x R2 R1 (frog 'R3' leaps to gap at position 3)");
    assert_eq!(first[15], "R3 R2 R1 x L1 L2 L3 (frog 'L1' leaps to gap at position 5)");
}

#[test]
fn test_second_solution_mirrors_first() {
    let text = run_to_text();
    let second = &blocks(&text)[1];

    assert_eq!(second[1], "L1 L2 L3 R3 x R2 R1 (frog 'R3' leaps to gap at position 4)");
    assert_eq!(second[15], "R3 R2 R1 x L1 L2 L3 (frog 'R1' leaps to gap at position 3)");
}
