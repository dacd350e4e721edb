//! Whole-scanner properties: totality, display fidelity, canonical
//! idempotence and the uniqueness of zero.

use crate::test_util::{assert_round_trip, assert_same_value};
use crate::{CanonicalNumber, FormattedNumber, parse};
use rstest::{fixture, rstest};

#[fixture]
fn samples() -> Vec<&'static str> {
    vec![
        "",
        "0",
        "-0",
        "+007",
        "007x",
        "1A:H",
        "1a:Hzz",
        "-101:B",
        "17:O!",
        "12:B",
        "-12.50e+3",
        "1e",
        "1e0",
        "1.5e0",
        "1.5e-0012",
        ".5",
        "5.",
        ".",
        "e5",
        "--",
        "  42",
        "3.14159 is pi",
        "999999999999999999999999",
        "٣٫٥",
        "0.000e7",
        "FFFF",
        "ff:H:H",
    ]
}

#[rstest]
fn every_input_reproduces_itself(samples: Vec<&'static str>) {
    for sample in samples {
        assert_round_trip(sample);
    }
}

#[rstest]
fn valid_inputs_have_idempotent_canonical_values(samples: Vec<&'static str>) {
    for sample in samples {
        let number = parse(sample);
        if matches!(number, FormattedNumber::Invalid(_)) {
            continue;
        }
        let text = number.canonical().to_string();
        assert_eq!(
            parse(&text).canonical(),
            number.canonical(),
            "{sample:?} canonicalised to {text}"
        );
        let reread: CanonicalNumber = text
            .parse()
            .unwrap_or_else(|err| panic!("{text} should read back: {err}"));
        assert_eq!(&reread, number.canonical(), "{sample:?}");
    }
}

#[rstest]
fn every_spelling_of_zero_is_one_value() {
    assert_same_value(
        &["0", "00", "0:H", "0:B", "000:O", "0.0", ".0", "0.", "0e5", "-0", "+0.0e-9"],
        &CanonicalNumber::zero(),
    );
}

#[rstest]
fn spellings_of_one_value_agree_across_radices() {
    assert_same_value(
        &["26", "1A:H", "1a:H", "11010:B", "32:O", "2.6e1", "0026", "260e-1", "+26.0"],
        &CanonicalNumber::from(26),
    );
}

#[rstest]
fn display_keeps_source_layout_while_values_match() {
    let padded = parse("007");
    let plain = parse("7");
    assert_eq!(padded.to_string(), "007");
    assert_eq!(padded.canonical(), plain.canonical());
}
