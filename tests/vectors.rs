//! Known-answer tests for the canonical and seed-17 digest spaces.

use std::sync::Arc;

use nilsimsa::text::{compare_as_set, compare_strings};
use nilsimsa::{compare, compare_hex, digest, Digest, HasherConfig, Nilsimsa, TransitionTable};

const SMALL: &str = "abcdefgh";
const LONG: &str = "This is a much more ridiculous test because of 21347597.";
const SIMILAR_1: &str = "The rain in Spain falls mostly in the plains.";
const SIMILAR_2: &str = "The rain in Spain falls mainly in the plains.";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn hex_with(table: &Arc<TransitionTable>, input: &str) -> String {
    Nilsimsa::with_table(table.clone()).update(input).hex_digest()
}

#[test]
fn canonical_vectors() {
    let t = TransitionTable::canonical();
    let cases = [
        (SMALL, "14c8118000000000030800000004042004189020001308014088003280000078"),
        (LONG, "5d9c6a6b22384bcd524a8d414d82237777433fc1a07a02c3e06985d96ecdf8fb"),
        (SIMILAR_1, "039020eb1050188be400091130981860648e39f5b1246d8c3c3c7623801186ac"),
        (SIMILAR_2, "23b000e908501883c408019410d83a60c48f1977a3246ccc3cbc7213c81104bc"),
    ];
    for (input, expected) in cases {
        assert_eq!(hex_with(&t, input), expected, "input {input:?}");
    }
}

#[test]
fn seed_17_vectors() {
    init_tracing();
    let t = HasherConfig::default().seed(17).table();
    let cases = [
        (SMALL, "001210201001000200470001180808120104800100186080000a044020020500"),
        (LONG, "55c40c9aac438bf1b698a3a9ca3632b4d52f4cedc4f596b66fb1e0704e08aa01"),
        (SIMILAR_1, "d004808d0a50fe2b2148c43594002505ae24aca01956900620a470cf53449c72"),
        (SIMILAR_2, "d084c09d0800fa2b234a443896122515ae040ce01956944621b0708647461cf2"),
    ];
    for (input, expected) in cases {
        assert_eq!(hex_with(&t, input), expected, "input {input:?}");
    }
}

#[test]
fn cross_input_scores_per_seed() {
    let a = digest(SMALL);
    let b = digest(LONG);
    assert_eq!(compare(&a, &b), 4);
    assert_eq!(compare(&b, &a), 4);

    let t17 = Arc::new(TransitionTable::generate(17));
    let c = Nilsimsa::with_table(t17.clone()).update(SMALL).digest();
    let d = Nilsimsa::with_table(t17).update(LONG).digest();
    assert_eq!(compare(&c, &d), -10);
    assert_eq!(compare(&d, &c), -10);
}

#[test]
fn chunked_input_and_appended_tail() {
    let mut whole = Nilsimsa::new();
    whole.update(SMALL);
    let mut chunked = Nilsimsa::new();
    chunked.update("abcd").update("efgh");
    assert_eq!(whole.digest(), chunked.digest());

    whole.update("ijk");
    assert_eq!(
        whole.hex_digest(),
        "14c811840010000c0328200108040630041890200217582d4098103280000078"
    );
    assert_eq!(compare(&whole.digest(), &chunked.digest()), 109);
    assert_eq!(
        compare_hex(&whole.hex_digest(), &chunked.hex_digest()).unwrap(),
        109
    );
}

#[test]
fn similar_sentences_score() {
    assert_eq!(compare(&digest(SIMILAR_1), &digest(SIMILAR_2)), 92);
    assert_eq!(compare_strings(SIMILAR_1, SIMILAR_2), 92);
}

#[test]
fn jumbled_words_match_as_set() {
    let set1 = "The plains in Spain in the falls rain mainly";
    let set2 = "The rain in Spain falls mainly in the plains";
    assert_eq!(compare_strings(set1, set2), 84);
    assert_eq!(compare_as_set(set1, set2), 128);
}

#[test]
fn seed_sweep_extremes() {
    let scores: Vec<i32> = (0..=255u8)
        .map(|seed| {
            let t = Arc::new(TransitionTable::generate(seed));
            let a = Nilsimsa::with_table(t.clone()).update(SIMILAR_1).digest();
            let b = Nilsimsa::with_table(t).update(SIMILAR_2).digest();
            compare(&a, &b)
        })
        .collect();
    assert_eq!(scores.iter().max(), Some(&109));
    assert_eq!(scores.iter().min(), Some(&85));
    assert_eq!(scores[192], 109);
    assert_eq!(scores[8], 85);
}

#[test]
fn digests_expose_32_bytes() {
    let d = digest(LONG);
    assert_eq!(d.as_bytes().len(), 32);
    assert_eq!(Digest::try_from(&d.as_bytes()[..]).unwrap(), d);
}
