#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into text and pattern; build, then cross-check the
    // suffix-array search against a naive scan
    let split = data.first().copied().unwrap_or(0) as usize % (data.len().max(1));
    let (text, pattern) = data.split_at(split);

    let sa = algokit::SuffixArray::new(text);

    // Positions must be a permutation in suffix order
    assert_eq!(sa.positions().len(), text.len());
    for pair in sa.positions().windows(2) {
        assert!(text[pair[0]..] <= text[pair[1]..]);
    }

    if !pattern.is_empty() {
        let slot = sa.search(pattern).unwrap();
        let contained = text.windows(pattern.len()).any(|w| w == pattern);
        if sa.index_valid(slot) {
            assert!(text[sa.positions()[slot]..].starts_with(pattern));
        } else {
            assert!(!contained);
        }
    }

    if !text.is_empty() {
        let rotation = sa.min_lex_rotation();
        assert_eq!(rotation.len(), text.len());
    }
});
