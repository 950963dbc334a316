use super::words::Word;

/// Reverses every run of words whose direction opposes the paragraph's.
///
/// Words are partitioned into maximal runs sharing the same `rtl` flag. Runs matching the
/// paragraph direction keep their extracted order; the others are reversed in place. Runs
/// stay in their original sequence.
pub fn reorder_runs(words: Vec<Word>, paragraph_rtl: bool) -> Vec<Word> {
    let mut ordered = Vec::with_capacity(words.len());
    let mut run: Vec<Word> = Vec::new();

    for word in words {
        if run.last().is_some_and(|last| last.rtl != word.rtl) {
            flush_run(&mut ordered, &mut run, paragraph_rtl);
        }
        run.push(word);
    }
    flush_run(&mut ordered, &mut run, paragraph_rtl);

    ordered
}

fn flush_run(ordered: &mut Vec<Word>, run: &mut Vec<Word>, paragraph_rtl: bool) {
    let Some(first) = run.first() else {
        return;
    };
    if first.rtl != paragraph_rtl {
        run.reverse();
    }
    ordered.append(run);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &[(&str, bool)]) -> Vec<Word> {
        input
            .iter()
            .map(|&(text, rtl)| Word {
                text: text.to_string(),
                bold: false,
                rtl,
            })
            .collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn empty() {
        assert!(reorder_runs(Vec::new(), true).is_empty());
        assert!(reorder_runs(Vec::new(), false).is_empty());
    }

    #[test]
    fn uniform_direction_matching_paragraph_is_unchanged() {
        let input = words(&[("a", false), ("b", false), ("c", false)]);
        assert_eq!(reorder_runs(input.clone(), false), input);

        let input = words(&[("א", true), ("ב", true)]);
        assert_eq!(reorder_runs(input.clone(), true), input);
    }

    #[test]
    fn uniform_opposite_direction_is_reversed() {
        let input = words(&[("a", false), ("b", false), ("c", false)]);
        assert_eq!(texts(&reorder_runs(input, true)), vec!["c", "b", "a"]);

        let input = words(&[("א", true), ("ב", true)]);
        assert_eq!(texts(&reorder_runs(input, false)), vec!["ב", "א"]);
    }

    #[test]
    fn only_foreign_runs_are_reversed() {
        let input = words(&[
            ("one", false),
            ("two", false),
            ("א", true),
            ("ב", true),
            ("ג", true),
            ("three", false),
        ]);
        assert_eq!(
            texts(&reorder_runs(input.clone(), false)),
            vec!["one", "two", "ג", "ב", "א", "three"]
        );
        assert_eq!(
            texts(&reorder_runs(input, true)),
            vec!["two", "one", "א", "ב", "ג", "three"]
        );
    }
}
