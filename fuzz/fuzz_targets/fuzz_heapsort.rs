#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<i32>| {
    let mut sorted = data.clone();
    algokit::heap::heapsort(&mut sorted);

    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let mut expected = data;
    expected.sort_unstable();
    assert_eq!(sorted, expected);
});
